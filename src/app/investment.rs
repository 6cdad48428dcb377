//! Investment calculator window: compound growth with monthly
//! contributions, drawn in full as soon as it is computed.

use eframe::egui;
use eframe::{Frame, Storage};
use tracing::{info, warn};

use crate::chart::{ChartBounds, SeriesChart};
use crate::format::dollars;
use crate::projection::Series;
use crate::validate::{InvestmentForm, ValidationError};

use super::{error_banner, form_table, theme_panel};

pub struct InvestmentApp {
    form: InvestmentForm,
    bounds: Option<ChartBounds>,
    series: Option<Series>,
    summary: Option<String>,
    warn: Result<(), ValidationError>,
}

impl Default for InvestmentApp {
    fn default() -> Self {
        Self {
            form: InvestmentForm::default(),
            bounds: None,
            series: None,
            summary: None,
            warn: Ok(()),
        }
    }
}

impl InvestmentApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.storage
            .and_then(|storage| eframe::get_value::<InvestmentForm>(storage, eframe::APP_KEY))
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
                    annual_rate = plan.annual_rate,
                    "projecting investment"
                );
                let series = plan.project();
                let outcome = plan.outcome(&series);
                self.summary = Some(format!(
                    "Final Balance: {} | Total Contributed: {} | Gain: {}",
                    dollars(outcome.final_balance),
                    dollars(outcome.total_contributed),
                    dollars(outcome.gain),
                ));
                self.bounds = Some(ChartBounds::of(&series));
                self.series = Some(series);
                self.warn = Ok(());
            }
            Err(e) => {
                warn!(%e, "rejected investment input");
                self.warn = Err(e);
            }
        }
    }

    fn clear(&mut self) {
        self.form = InvestmentForm::default();
        self.bounds = None;
        self.series = None;
        self.summary = None;
        self.warn = Ok(());
    }
}

impl eframe::App for InvestmentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if let Err(e) = &self.warn {
            error_banner(ctx, e);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            form_table(
                ui,
                vec![
                    ("Initial Investment ($)", &mut self.form.initial),
                    ("Monthly Contribution ($)", &mut self.form.monthly),
                    ("Number of Months", &mut self.form.months),
                    ("Annual Rate (%)", &mut self.form.annual_rate),
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

            if let (Some(bounds), Some(series)) = (self.bounds, &self.series) {
                SeriesChart::new("investment_chart", "Investment", bounds, series.points())
                    .show(ui);
            }
        });

        theme_panel(ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.form);
    }
}
