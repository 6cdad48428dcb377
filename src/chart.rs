//! Line-chart rendering of a projection series.
//!
//! Bounds are fixed once from the full series so the viewport holds still
//! while an animated reveal draws growing prefixes into it.

use eframe::egui::{Align2, Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoint, Points, Text};

use crate::format::dollars;
use crate::projection::{Point, Series};

const LINE_COLOR: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);
const MARKER_COLOR: Color32 = Color32::from_rgb(0xff, 0x6b, 0x6b);

/// Axis bounds for a projection chart, derived once from the whole series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartBounds {
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartBounds {
    /// X spans `[0, months + 1]`; Y pads the series' extremes by 10 %.
    pub fn of(series: &Series) -> Self {
        if series.is_empty() {
            return Self {
                x_max: 1.0,
                y_min: 0.0,
                y_max: 1.0,
            };
        }
        Self {
            x_max: series.len() as f64 + 1.0,
            y_min: series.min_balance() * 0.9,
            y_max: series.max_balance() * 1.1,
        }
    }

    fn plot_bounds(&self) -> PlotBounds {
        PlotBounds::from_min_max([0.0, self.y_min], [self.x_max, self.y_max])
    }

    /// Caption anchor: 2 % in from the left edge, 98 % of the way up.
    fn caption_anchor(&self) -> PlotPoint {
        PlotPoint::new(
            0.02 * self.x_max,
            self.y_min + 0.98 * (self.y_max - self.y_min),
        )
    }
}

/// Fade-in for the newest-point marker: ramps over ten frames, then
/// restarts. Cosmetic only.
pub fn pulse_alpha(cursor: usize) -> f32 {
    ((cursor % 10) as f32 / 10.0).min(1.0)
}

/// One projection chart: a visible prefix drawn inside fixed bounds, with
/// an optional highlight on the newest revealed point.
pub struct SeriesChart<'a> {
    id: &'static str,
    name: &'static str,
    bounds: ChartBounds,
    visible: &'a [Point],
    marker: Option<(Point, f32)>,
}

impl<'a> SeriesChart<'a> {
    pub fn new(
        id: &'static str,
        name: &'static str,
        bounds: ChartBounds,
        visible: &'a [Point],
    ) -> Self {
        Self {
            id,
            name,
            bounds,
            visible,
            marker: None,
        }
    }

    /// Highlights `newest` and captions it with its month and balance.
    pub fn marker(mut self, newest: Point, alpha: f32) -> Self {
        self.marker = Some((newest, alpha));
        self
    }

    pub fn show(self, ui: &mut Ui) {
        let line_points: Vec<[f64; 2]> = self
            .visible
            .iter()
            .map(|p| [f64::from(p.month), p.balance])
            .collect();

        Plot::new(self.id)
            .legend(Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(self.bounds.plot_bounds());
                plot_ui.line(
                    Line::new(line_points.clone())
                        .color(LINE_COLOR)
                        .width(2.5)
                        .name(self.name),
                );
                plot_ui.points(Points::new(line_points).radius(3.0).color(LINE_COLOR));

                if let Some((newest, alpha)) = self.marker {
                    plot_ui.points(
                        Points::new(vec![[f64::from(newest.month), newest.balance]])
                            .radius(5.0)
                            .filled(true)
                            .color(MARKER_COLOR.gamma_multiply(alpha)),
                    );
                    plot_ui.text(
                        Text::new(
                            self.bounds.caption_anchor(),
                            format!("Month {}: {}", newest.month, dollars(newest.balance)),
                        )
                        .anchor(Align2::LEFT_TOP),
                    );
                }
            });
    }
}
