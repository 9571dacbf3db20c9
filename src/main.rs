mod app;

use app::FlashcardApp;
use oropic_read::config::Config;
use oropic_read::theme;

const APP_NAME: &str = "OroPicRead";

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Using default configuration: {}", e);
        Config::default()
    });
    log::info!("Flashcard endpoint: {}", config.endpoint.url());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(FlashcardApp::new(&cc.egui_ctx, &config)))
        }),
    )
}
