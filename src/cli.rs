//! CLI argument parsing for the route-engine binary.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use route_engine::defaults::{DEFAULT_BOOKING_HORIZON_DAYS, MAX_BOOKING_HORIZON_DAYS};

#[derive(Parser)]
#[command(name = "route-engine", about = "Travel estimates and daily route plans for technicians")]
pub struct Cli {
    /// JSON network file replacing the built-in Melbourne tables
    #[arg(long, global = true)]
    pub network: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Order a technician's appointments to minimise backtracking
    Optimize(RouteArgs),
    /// Optimized route plus working hours for one day
    Summary(RouteArgs),
    /// Travel minutes, distance and cost between two locations
    Travel {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Departure, e.g. 2025-03-11T08:00 (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },
    /// Dates and start times customers can book
    Slots {
        /// Reference date, defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Number of days offered, at most a year
        #[arg(
            long,
            default_value_t = DEFAULT_BOOKING_HORIZON_DAYS,
            value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_BOOKING_HORIZON_DAYS))
        )]
        days: u32,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Appointment export (.json array or .csv)
    #[arg(long, short)]
    pub input: PathBuf,
    /// Starting location (defaults to ROUTE_START_LOCATION or Melbourne)
    #[arg(long)]
    pub start: Option<String>,
    /// Only plan appointments for this technician
    #[arg(long)]
    pub technician: Option<String>,
    /// Only plan appointments on this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}
