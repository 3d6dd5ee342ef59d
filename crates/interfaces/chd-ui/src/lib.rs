mod app;
mod components;
mod dialogs;
mod screens;
mod theme;
mod utils;

use chd_app_core::ChdApplication;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([700.0, 650.0])
            .with_min_inner_size([520.0, 480.0])
            .with_drag_and_drop(true)
            .with_title("CHDMan Frontend"),
        ..Default::default()
    };

    eframe::run_native(
        "CHDMan Frontend",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);
            Ok(Box::new(app::ChdUiApp::new(ChdApplication::new())))
        }),
    )
}
