//! Desktop savings and investment calculators.
//!
//! The library half holds everything that does not need a window: the
//! projection engines, input validation, the animation driver, chart
//! geometry, and currency formatting. The binaries under `src/bin/`
//! wire those pieces into eframe windows.

#![forbid(unsafe_code)]

pub mod anim;
pub mod app;
pub mod chart;
pub mod format;
pub mod logging;
pub mod projection;
pub mod validate;

pub use anim::{DriverState, FrameDriver, Playback, Ticker, FRAME_INTERVAL};
pub use chart::{pulse_alpha, ChartBounds, SeriesChart};
pub use projection::{InvestmentPlan, Outcome, Point, SavingsPlan, Series};
pub use validate::{InvestmentForm, SavingsForm, ValidationError};
