//! Desktop viewer for live or replayed packet traffic.
//!
//! Parses the command line, loads optional config/label/replay files and
//! hands everything to [`Viewer`].

mod painter;
mod traffic;
mod viewer;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use packet_core::{SimConfig, labels::LabelTable};
use tracing_subscriber::EnvFilter;

use viewer::{Settings, Viewer};

#[derive(Parser)]
#[command(name = "packet-view", about = "Force-directed packet traffic viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Simulation config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host label table (JSON)
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Replay a JSON-lines event log instead of generating traffic
    #[arg(long)]
    events: Option<PathBuf>,

    /// Remote hosts in the synthetic traffic mix
    #[arg(long, default_value_t = 8)]
    remotes: usize,

    /// Overrides the seed from the config file
    #[arg(long)]
    seed: Option<u64>,
}

fn read(path: &PathBuf) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut cfg = match &cli.config {
        Some(path) => SimConfig::from_json(&read(path)?)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        cfg.seed = seed;
    }

    let labels = match &cli.labels {
        Some(path) => serde_json::from_str::<LabelTable>(&read(path)?)
            .with_context(|| format!("parsing labels {}", path.display()))?,
        None => LabelTable::default(),
    };

    let replay = cli.events.as_ref().map(read).transpose()?;

    Ok(Settings {
        cfg,
        remotes: cli.remotes,
        labels,
        replay,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = load_settings(&cli)?;
    tracing::info!(
        seed = settings.cfg.seed,
        replay = settings.replay.is_some(),
        "packet-view starting"
    );

    eframe::run_native(
        "Packet Viz",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(Viewer::new(settings)))),
    )
    .map_err(|err| anyhow::anyhow!("viewer failed: {err}"))
}
