mod controller;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use counter_core::ConfigOverrides;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::controller::events::UiEvent;
use crate::ui::{CounterApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Desktop demo of the clamped counter widget")]
struct Args {
    /// TOML file with `initial_value`, `max` and `step`.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, allow_negative_numbers = true)]
    initial_value: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    step: Option<f64>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            initial_value: self.initial_value,
            max: self.max,
            step: self.step,
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();
    let startup = StartupConfig::resolve(args.config.as_deref(), args.overrides());

    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Counter")
            .with_inner_size([520.0, 420.0])
            .with_min_inner_size([360.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Counter",
        options,
        Box::new(|cc| Ok(Box::new(CounterApp::new(&cc.egui_ctx, startup, ui_tx, ui_rx)))),
    )
}
