// src/main.rs
use anyhow::{Context, Result};
use eframe::egui;
use std::path::PathBuf;

mod analysis;
mod app;
mod catalog;
mod gateway;
mod session;
mod state;
mod ui;

use app::EcoLabelApp;
use catalog::Catalog;
use gateway::{GroqClient, PixabayClient};
use state::AppState;

const DEFAULT_CATALOG_PATH: &str = "ProductStates.csv";

fn main() -> Result<()> {
    env_logger::init();

    let catalog_path = std::env::var("ECOLABEL_CATALOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH));
    let catalog = Catalog::load(&catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))?;
    log::info!(
        "Loaded {} catalog rows from {}",
        catalog.len(),
        catalog_path.display()
    );

    let mut state = AppState::new(catalog);
    state.gateway = GroqClient::from_env();
    state.images = PixabayClient::from_env();
    if state.gateway.is_none() {
        log::warn!("GROQ_API_KEY not set; descriptions and chat replies will use fallbacks");
    }
    if state.images.is_none() {
        log::warn!("PIXABAY_API_KEY not set; product images will use placeholders");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("EcoLabel"),
        ..Default::default()
    };

    eframe::run_native(
        "EcoLabel",
        options,
        Box::new(move |cc| Box::new(EcoLabelApp::new(cc, state))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
