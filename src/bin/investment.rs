use money_calculator::app::InvestmentApp;
use money_calculator::logging;

fn main() -> eframe::Result<()> {
    logging::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([600.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Investment Calculator",
        options,
        Box::new(|cc| Box::new(InvestmentApp::new(cc))),
    )
}
