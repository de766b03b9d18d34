#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use egui_compliance::app::ComplianceDashboard;
use egui_compliance::config::DashboardConfig;
use tr::{tr, tr_init};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> eframe::Result {
    init_logging();
    tr_init!("./locales");

    let config = DashboardConfig::load();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.base_url,
        "Compliance dashboard starting"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(tr!("Compliance dashboard"))
            .with_inner_size([900.0, 640.0])
            .with_resizable(true),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "egui_compliance",
        options,
        Box::new(|cc| Ok(Box::new(ComplianceDashboard::new(cc, config)))),
    )
}
