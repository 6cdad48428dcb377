//! Scripted savings animation: prompts on the console, then plays the
//! projection through once in a blocking window.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use eframe::egui;
use eframe::Frame;

use money_calculator::anim::{FrameDriver, Playback, Ticker};
use money_calculator::chart::{ChartBounds, SeriesChart};
use money_calculator::logging;
use money_calculator::validate::SavingsForm;

const DEMO_INTERVAL: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    logging::init();

    println!("\n--- Saving Money ---");
    let form = SavingsForm {
        initial: prompt("Enter initial money: ")?,
        monthly: prompt("Enter monthly saving: ")?,
        months: prompt("Enter number of months: ")?,
    };
    let series = form.validate()?.project();

    let bounds = ChartBounds::of(&series);
    let mut driver = FrameDriver::new(Playback::Once);
    driver.start(series);
    let app = DemoApp {
        driver,
        ticker: Ticker::new(DEMO_INTERVAL),
        bounds,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native("Saving Money", options, Box::new(move |_cc| Box::new(app)))
        .map_err(|e| anyhow!("{e}"))
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading console input")?;
    Ok(line.trim().to_owned())
}

/// Plays the series through once, then leaves the finished chart up
/// until the window is closed.
struct DemoApp {
    driver: FrameDriver,
    ticker: Ticker,
    bounds: ChartBounds,
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.driver.is_running() {
            let now = ctx.input(|i| i.time);
            if self.ticker.due(now) {
                self.driver.tick();
            }
            ctx.request_repaint_after(self.ticker.interval());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            SeriesChart::new("demo_chart", "Savings", self.bounds, self.driver.visible()).show(ui);
        });
    }
}
