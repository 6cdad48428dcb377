//! Frame-by-frame reveal of a projection series.
//!
//! [`FrameDriver`] owns the series and the animation cursor and knows
//! nothing about clocks; the hosting UI asks a [`Ticker`] whether the next
//! frame is due and calls [`FrameDriver::tick`] when it is. Everything runs
//! on the UI event loop, so ticks never overlap.

use std::time::Duration;

use tracing::debug;

use crate::projection::{Point, Series};

/// Delay between animation frames in the GUI calculator.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(200);

/// What happens when the reveal reaches the end of the series.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Playback {
    /// Wrap back to the first point and keep going. The GUI calculator
    /// animates indefinitely until stopped.
    Loop,
    /// Go idle with the whole series revealed.
    Once,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DriverState {
    Idle,
    Running,
}

/// Reveals a series one point per tick.
///
/// The cursor stays in `[0, len)`; the revealed prefix is always
/// `cursor + 1` points once a series is loaded.
#[derive(Clone, Debug)]
pub struct FrameDriver {
    series: Series,
    cursor: usize,
    state: DriverState,
    playback: Playback,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(Playback::Loop)
    }
}

impl FrameDriver {
    pub fn new(playback: Playback) -> Self {
        Self {
            series: Series::default(),
            cursor: 0,
            state: DriverState::Idle,
            playback,
        }
    }

    /// Takes ownership of `series` and starts revealing it from the first
    /// point. Restarting while running discards the old reveal.
    pub fn start(&mut self, series: Series) {
        debug!(points = series.len(), playback = ?self.playback, "animation start");
        self.cursor = 0;
        self.state = if series.is_empty() {
            DriverState::Idle
        } else {
            DriverState::Running
        };
        self.series = series;
    }

    /// Freezes the reveal in place; pending ticks become no-ops.
    pub fn stop(&mut self) {
        if self.state == DriverState::Running {
            debug!(cursor = self.cursor, "animation stop");
        }
        self.state = DriverState::Idle;
    }

    /// Stops and drops the stored series (the inputs were cleared).
    pub fn clear(&mut self) {
        self.stop();
        self.series = Series::default();
        self.cursor = 0;
    }

    /// Advances the reveal by one point. At the end of the series a looping
    /// driver wraps back to the first point instead of stopping; a one-shot
    /// driver goes idle with everything revealed.
    pub fn tick(&mut self) {
        if self.state != DriverState::Running {
            return;
        }
        if self.cursor + 1 >= self.series.len() {
            match self.playback {
                Playback::Loop => self.cursor = 0,
                Playback::Once => self.stop(),
            }
        } else {
            self.cursor += 1;
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// The revealed prefix of the series.
    pub fn visible(&self) -> &[Point] {
        let shown = (self.cursor + 1).min(self.series.len());
        &self.series.points()[..shown]
    }

    /// The most recently revealed point.
    pub fn newest(&self) -> Option<Point> {
        self.visible().last().copied()
    }
}

/// Decides when the next frame is due from the host loop's clock
/// (seconds, monotonic). The first call after arming only schedules, so
/// the frame shown at start stays on screen for a full interval.
#[derive(Clone, Copy, Debug)]
pub struct Ticker {
    interval: f64,
    next: Option<f64>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f64(),
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval)
    }

    /// True when `now` has passed the pending deadline; schedules the
    /// following one relative to `now`.
    pub fn due(&mut self, now: f64) -> bool {
        match self.next {
            None => {
                self.next = Some(now + self.interval);
                false
            }
            Some(next) if now >= next => {
                self.next = Some(now + self.interval);
                true
            }
            Some(_) => false,
        }
    }

    /// Forgets the pending deadline; the next `due` call re-arms.
    pub fn reset(&mut self) {
        self.next = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::SavingsPlan;

    fn series(months: u32) -> Series {
        SavingsPlan {
            initial: 0.0,
            monthly: 1.0,
            months,
        }
        .project()
    }

    #[test]
    fn start_reveals_the_first_point() {
        let mut driver = FrameDriver::default();
        driver.start(series(5));
        assert!(driver.is_running());
        assert_eq!(driver.cursor(), 0);
        assert_eq!(driver.visible().len(), 1);
        assert_eq!(driver.newest().unwrap().month, 1);
    }

    #[test]
    fn looping_driver_wraps_instead_of_stopping() {
        let mut driver = FrameDriver::new(Playback::Loop);
        driver.start(series(3));
        driver.tick();
        driver.tick();
        assert_eq!(driver.visible().len(), 3);

        // the whole series is on screen; the next tick starts over
        driver.tick();
        assert!(driver.is_running());
        assert_eq!(driver.cursor(), 0);
        assert_eq!(driver.visible().len(), 1);
    }

    #[test]
    fn one_shot_driver_finishes_fully_revealed() {
        let mut driver = FrameDriver::new(Playback::Once);
        driver.start(series(3));
        driver.tick();
        driver.tick();
        driver.tick();
        assert_eq!(driver.state(), DriverState::Idle);
        assert_eq!(driver.visible().len(), 3);

        // finished drivers ignore further ticks
        driver.tick();
        assert_eq!(driver.visible().len(), 3);
    }

    #[test]
    fn stop_makes_ticks_noops() {
        let mut driver = FrameDriver::default();
        driver.start(series(4));
        driver.tick();
        driver.stop();
        let frozen = driver.cursor();
        driver.tick();
        driver.tick();
        assert_eq!(driver.cursor(), frozen);
        assert!(!driver.is_running());
    }

    #[test]
    fn restart_resets_the_cursor() {
        let mut driver = FrameDriver::default();
        driver.start(series(6));
        driver.tick();
        driver.tick();
        assert_eq!(driver.cursor(), 2);

        driver.start(series(4));
        assert_eq!(driver.cursor(), 0);
        assert_eq!(driver.series().len(), 4);
        assert!(driver.is_running());
    }

    #[test]
    fn clear_drops_the_series() {
        let mut driver = FrameDriver::default();
        driver.start(series(4));
        driver.tick();
        driver.clear();
        assert!(!driver.is_running());
        assert!(driver.series().is_empty());
        assert!(driver.visible().is_empty());
        assert_eq!(driver.newest(), None);
    }

    #[test]
    fn an_empty_series_never_runs() {
        let mut driver = FrameDriver::default();
        driver.start(Series::default());
        assert!(!driver.is_running());
        driver.tick();
        assert_eq!(driver.cursor(), 0);
    }

    #[test]
    fn single_point_loop_stays_on_the_only_point() {
        let mut driver = FrameDriver::new(Playback::Loop);
        driver.start(series(1));
        for _ in 0..5 {
            driver.tick();
            assert!(driver.is_running());
            assert_eq!(driver.cursor(), 0);
            assert_eq!(driver.visible().len(), 1);
        }
    }

    #[test]
    fn ticker_fires_on_the_interval() {
        let mut ticker = Ticker::new(Duration::from_millis(200));
        assert!(!ticker.due(10.0)); // arms
        assert!(!ticker.due(10.1));
        assert!(ticker.due(10.21));
        assert!(!ticker.due(10.25));
        assert!(ticker.due(10.45));
    }

    #[test]
    fn ticker_reset_rearms() {
        let mut ticker = Ticker::new(Duration::from_millis(200));
        assert!(!ticker.due(0.0));
        ticker.reset();
        assert!(!ticker.due(5.0));
        assert!(ticker.due(5.21));
    }
}
