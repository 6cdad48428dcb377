//! The two calculator windows and the UI plumbing they share.

use eframe::egui::{self, Align, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::validate::ValidationError;

mod investment;
mod savings;

pub use investment::InvestmentApp;
pub use savings::SavingsApp;

/// Red banner pinned above the form while the latest input is rejected.
pub(crate) fn error_banner(ctx: &egui::Context, e: &ValidationError) {
    egui::TopBottomPanel::top("warn_banner").show(ctx, |ui| {
        let warn = RichText::from(e.to_string()).color(Color32::RED);
        ui.label(warn);
    });
}

pub(crate) fn theme_panel(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("bottom").show(ctx, |ui| {
        egui::widgets::global_dark_light_mode_switch(ui);
    });
}

/// One labelled text input per field, side by side.
pub(crate) fn form_table(ui: &mut Ui, fields: Vec<(&str, &mut String)>) {
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 2.0;

    let mut table = TableBuilder::new(ui).cell_layout(egui::Layout::left_to_right(Align::Center));
    for _ in &fields {
        table = table.column(Column::remainder());
    }

    table
        .header(text_height, |mut header| {
            for (label, _) in &fields {
                header.col(|ui| {
                    ui.heading(*label);
                });
            }
        })
        .body(|mut body| {
            body.row(text_height, |mut row| {
                for (_, value) in fields {
                    row.col(|ui| {
                        ui.text_edit_singleline(value);
                    });
                }
            });
        });
}
