mod app;
mod color;
mod ui;

use app::ExoQuestApp;
use eframe::egui;
use exoquest::config::{self, AppConfig};

fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    env_logger::init();

    let config = AppConfig::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ExoQuest – Exoplanet Inference",
        options,
        Box::new(|cc| Ok(Box::new(ExoQuestApp::new(cc, config)?))),
    )
    .map_err(|e| anyhow::anyhow!("viewer exited with error: {e}"))
}
