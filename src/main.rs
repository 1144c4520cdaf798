//! Route Engine CLI - plans technicians' days from appointment exports
//!
//! Reads appointments already fetched by the booking system, runs the
//! engine and prints JSON to stdout. Logs go to stderr and a rolling file.

mod cli;
mod handlers;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use route_engine::config::Config;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    std::fs::create_dir_all(&config.logs_dir).ok();

    // File appender for persistent logs (daily rotation)
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.logs_dir, "route-engine.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // stdout carries the JSON result, so console logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,route_engine=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    debug!("Configuration loaded: {:?}", config);

    match handlers::dispatch(&cli, &config) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            Err(e)
        }
    }
}
