#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
mod content;
pub mod context;
mod pages;
mod storage;
mod theme;
mod timer;

#[cfg(feature = "desktop")]
use std::path::PathBuf;
use std::sync::OnceLock;

use folio_core::SiteConfig;

/// Global data directory, set from command line
#[cfg(feature = "desktop")]
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Site configuration, set from command line
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
#[cfg(feature = "desktop")]
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
    })
}

/// Get the site configuration (loaded at startup or defaults)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Folio - personal portfolio site
#[cfg(feature = "desktop")]
#[derive(clap::Parser, Debug)]
#[command(name = "folio-site")]
#[command(about = "Folio - personal portfolio site")]
struct Args {
    /// Data directory for the saved theme preference
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON site configuration (owner name, contact address, timings)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (overrides the config file)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[cfg(feature = "desktop")]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use dioxus::desktop::{Config, WindowBuilder};

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    let level = args.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    folio_core::logging::init(&level)?;

    if let Some(dir) = args.data_dir {
        let _ = DATA_DIR.set(dir);
    }
    let title = format!("{} | Portfolio", config.owner_name);
    let _ = SITE_CONFIG.set(config);

    tracing::info!("Starting '{}' with data dir: {:?}", title, get_data_dir());

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}

#[cfg(not(feature = "desktop"))]
fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialise logging: {}", e);
    }
    dioxus::launch(app::App);
}
