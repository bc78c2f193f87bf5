use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use guess_core::{load_settings, ConfigOverrides};

mod controller;
mod ui;

use ui::GuessNumberApp;

#[derive(Parser, Debug)]
#[command(about = "Guess the number: desktop game")]
struct Args {
    /// Settings file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Upper limit prefilled in the limit field.
    #[arg(long)]
    limit: Option<u32>,
    /// Seed for reproducible secrets.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings(&ConfigOverrides {
        config_path: args.config,
        default_limit: args.limit,
        seed: args.seed,
    })
    .context("failed to load settings")?;

    guess_core::telemetry::init(&settings.log_filter);
    tracing::info!(
        default_limit = settings.default_limit,
        seeded = settings.seed.is_some(),
        "starting desktop gui"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([360.0, 180.0])
            .with_resizable(false),
        ..Default::default()
    };
    let app_name = settings.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| Ok(Box::new(GuessNumberApp::new(&settings)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop gui exited with an error: {err}"))
}
