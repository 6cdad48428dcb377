//! Savings calculator window: no-interest accumulation with an animated
//! month-by-month reveal of the projection.

use eframe::egui;
use eframe::{Frame, Storage};
use tracing::{info, warn};

use crate::anim::{FrameDriver, Ticker, FRAME_INTERVAL};
use crate::chart::{pulse_alpha, ChartBounds, SeriesChart};
use crate::format::dollars;
use crate::validate::{SavingsForm, ValidationError};

use super::{error_banner, form_table, theme_panel};

pub struct SavingsApp {
    form: SavingsForm,
    driver: FrameDriver,
    ticker: Ticker,
    bounds: Option<ChartBounds>,
    summary: Option<String>,
    warn: Result<(), ValidationError>,
}

impl Default for SavingsApp {
    fn default() -> Self {
        Self {
            form: SavingsForm::default(),
            driver: FrameDriver::default(),
            ticker: Ticker::new(FRAME_INTERVAL),
            bounds: None,
            summary: None,
            warn: Ok(()),
        }
    }
}

impl SavingsApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.storage
            .and_then(|storage| eframe::get_value::<SavingsForm>(storage, eframe::APP_KEY))
            .map(|form| Self {
                form,
                ..Default::default()
            })
            .unwrap_or_default()
    }

    fn calculate(&mut self) {
        match self.form.validate() {
            Ok(plan) => {
                info!(
                    initial = plan.initial,
                    monthly = plan.monthly,
                    months = plan.months,
                    "projecting savings"
                );
                let series = plan.project();
                let final_balance = series.last().map_or(plan.initial, |p| p.balance);
                self.summary = Some(format!(
                    "Final Amount: {} | Total Saved: {}",
                    dollars(final_balance),
                    dollars(plan.total_saved()),
                ));
                self.bounds = Some(ChartBounds::of(&series));
                self.driver.stop();
                self.driver.start(series);
                self.ticker.reset();
                self.warn = Ok(());
            }
            // A rejected form must not disturb whatever is already on
            // screen, including a running animation.
            Err(e) => {
                warn!(%e, "rejected savings input");
                self.warn = Err(e);
            }
        }
    }

    fn clear(&mut self) {
        self.form = SavingsForm::default();
        self.driver.clear();
        self.ticker.reset();
        self.bounds = None;
        self.summary = None;
        self.warn = Ok(());
    }
}

impl eframe::App for SavingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.driver.is_running() {
            let now = ctx.input(|i| i.time);
            if self.ticker.due(now) {
                self.driver.tick();
            }
            ctx.request_repaint_after(self.ticker.interval());
        }

        if let Err(e) = &self.warn {
            error_banner(ctx, e);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            form_table(
                ui,
                vec![
                    ("Initial Money ($)", &mut self.form.initial),
                    ("Monthly Saving ($)", &mut self.form.monthly),
                    ("Number of Months", &mut self.form.months),
                ],
            );

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Calculate & Show Graph").clicked() {
                    self.calculate();
                }
                if ui.button("Clear").clicked() {
                    self.clear();
                }
            });

            if let Some(summary) = &self.summary {
                ui.label(summary);
            }

            if let Some(bounds) = self.bounds {
                let mut chart =
                    SeriesChart::new("savings_chart", "Savings", bounds, self.driver.visible());
                if self.driver.cursor() > 0 {
                    if let Some(newest) = self.driver.newest() {
                        chart = chart.marker(newest, pulse_alpha(self.driver.cursor()));
                    }
                }
                chart.show(ui);
            }
        });

        theme_panel(ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.form);
    }
}
