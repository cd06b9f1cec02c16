//! E-Commerce Dashboard - interactive analytics over the e-commerce dataset
//!
//! Opens the dashboard window, or prints a text report with `--report`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use ecommerce_dashboard::analytics::Dashboard;
use ecommerce_dashboard::config::DashboardConfig;
use ecommerce_dashboard::data::{DatasetLoader, DateBounds, DateRange};
use ecommerce_dashboard::gui::DashboardApp;
use ecommerce_dashboard::report::render_report;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "ecommerce-dashboard", version, about = "E-Commerce Data Analysis Dashboard")]
struct Cli {
    /// JSON config file (defaults to ./dashboard.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the dataset CSV files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// First day of the range (YYYY-MM-DD), defaults to the earliest order
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day of the range (YYYY-MM-DD), defaults to the latest order
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Print the views as text instead of opening the window
    #[arg(long)]
    report: bool,
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref()).context("Loading config")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let loader = DatasetLoader::new(config.data_dir.clone(), config.files.clone());
    let dataset = loader
        .load()
        .with_context(|| format!("Loading dataset from {}", loader.data_dir().display()))?;

    let bounds = DateBounds::from_orders(&dataset.orders).context("Reading order date bounds")?;
    let range = DateRange::new(
        cli.start.unwrap_or(bounds.min),
        cli.end.unwrap_or(bounds.max),
    )?;
    bounds.validate(&range)?;
    info!(%bounds, %range, "Date range selected");

    let limits = config.limits();

    if cli.report {
        let views = Dashboard::compute(&dataset, &range)?;
        print!("{}", render_report(&views, &limits));
        return Ok(());
    }

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("E-Commerce Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "E-Commerce Dashboard",
        options,
        Box::new(move |cc| {
            Ok(Box::new(DashboardApp::new(
                cc, dataset, bounds, range, limits,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Dashboard window failed: {}", e))
}
