#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::{Analytics, FanoutAnalytics, JsonlAnalytics, LinkPool, SiteConfig, TracingAnalytics};
use tracing_subscriber::EnvFilter;

use crate::browser::EvalBrowser;
use crate::context::{install_services, SidebarServices};

/// Folio - portfolio sidebar
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - personal portfolio with an animated profile sidebar")]
struct Args {
    /// Site configuration file (JSON); the built-in sample is used if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append tracked events to this JSONL file
    #[arg(long)]
    analytics_log: Option<PathBuf>,

    /// Seed for the random link picker (reproducible picks)
    #[arg(long)]
    seed: Option<u64>,
}

/// Load the site config, falling back to the built-in sample on any error.
fn load_config(path: Option<&Path>) -> SiteConfig {
    let Some(path) = path else {
        return SiteConfig::default();
    };

    match SiteConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config {:?}: {}", path, e);
            SiteConfig::default()
        }
    }
}

/// Tracing sink always, plus the JSONL log when requested.
fn build_analytics(log_path: Option<&Path>) -> Arc<dyn Analytics> {
    let mut analytics = FanoutAnalytics::new().with(Arc::new(TracingAnalytics));

    if let Some(path) = log_path {
        match JsonlAnalytics::open(path) {
            Ok(sink) => {
                tracing::info!("Writing analytics to {:?}", sink.path());
                analytics = analytics.with(Arc::new(sink));
            }
            Err(e) => tracing::warn!("Cannot open analytics log {:?}: {}", path, e),
        }
    }

    Arc::new(analytics)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = load_config(args.config.as_deref());
    let analytics = build_analytics(args.analytics_log.as_deref());
    let links = match args.seed {
        Some(seed) => LinkPool::seeded(config.links.clone(), seed),
        None => LinkPool::new(config.links.clone()),
    };

    let title = format!("{} | Portfolio", config.initial_information.name);

    tracing::info!(
        "Starting '{}' with {} routes and {} links",
        config.initial_information.name,
        config.routes.len(),
        links.len()
    );

    install_services(SidebarServices::new(
        config,
        analytics,
        Arc::new(EvalBrowser),
        links,
    ));

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
