mod api;
mod config;
mod error;
mod gui;
mod login;
mod models;
mod page;

use anyhow::{anyhow, Context, Result};
use config::Config;
use eframe::egui;
use gui::state::AppState;
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

pub static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| Mutex::new(AppState::default()));

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    APP_STATE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .connect(&config, runtime.handle().clone());

    let builder = egui::ViewportBuilder::default()
        .with_title(&config.window_title)
        .with_inner_size(egui::vec2(400.0, 300.0));

    let options = eframe::NativeOptions {
        viewport: builder,
        ..Default::default()
    };

    eframe::run_simple_native(&config.window_title, options, move |ctx, _frame| {
        gui::ui_main(ctx);
    })
    .map_err(|e| anyhow!("Window failed: {e}"))?;

    Ok(())
}
