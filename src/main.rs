//! CLI entry point for the trip GTFS builder.
//!
//! Merges crowd-collected trip JSON files into a six-table GTFS feed, or
//! reports who contributed the trips currently waiting in the input folder.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use trip_gtfs_builder::loader::load_trips;
use trip_gtfs_builder::lookup::{DEFAULT_CALENDAR_YEAR, DEFAULT_TIMEZONE, LookupTables};
use trip_gtfs_builder::pipeline::{Outcome, no_input_guidance, run};
use trip_gtfs_builder::summary::ContributorSummary;

#[derive(Parser)]
#[command(name = "trip_gtfs_builder")]
#[command(about = "Merge collected trip JSON files into a GTFS feed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build agency, routes, stops, trips, stop_times and calendar tables
    Build {
        /// Directory holding one JSON file per trip
        #[arg(short, long, default_value = "received_trips")]
        input_dir: PathBuf,

        /// Directory the GTFS tables are written to
        #[arg(short, long, default_value = "gtfs")]
        output_dir: PathBuf,

        /// Year covered by every service in calendar.txt
        #[arg(short, long, default_value_t = DEFAULT_CALENDAR_YEAR)]
        year: i32,

        /// Timezone written for every agency
        #[arg(long, default_value = DEFAULT_TIMEZONE)]
        timezone: String,

        /// Optional: JSON file with extra agency names and URLs
        #[arg(long)]
        agencies: Option<String>,
    },
    /// Show how many trips each contributor sent, without writing tables
    Summary {
        /// Directory holding one JSON file per trip
        #[arg(short, long, default_value = "received_trips")]
        input_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/trip_gtfs_builder.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("trip_gtfs_builder.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input_dir,
            output_dir,
            year,
            timezone,
            agencies,
        } => {
            let mut lookups = LookupTables::default()
                .with_year(year)
                .with_timezone(&timezone);
            if let Some(path) = agencies {
                lookups = lookups.with_agency_file(&path)?;
            }

            match run(&input_dir, &output_dir, &lookups)? {
                Outcome::NoInput => {
                    info!("{}", no_input_guidance(&input_dir));
                }
                Outcome::Built { tables, summary } => {
                    let rows: usize = tables.iter().map(|t| t.rows).sum();
                    info!(
                        output_dir = %output_dir.display(),
                        tables = tables.len(),
                        rows,
                        "GTFS files written"
                    );
                    summary.report();
                }
            }
        }
        Commands::Summary { input_dir } => {
            std::fs::create_dir_all(&input_dir)?;
            let trips = load_trips(&input_dir)?;
            if trips.is_empty() {
                info!("{}", no_input_guidance(&input_dir));
                return Ok(());
            }

            let summary = ContributorSummary::from_trips(&trips);
            info!(
                trips = summary.total(),
                contributors = summary.contributors(),
                "Contributor summary"
            );
            print!("{summary}");
        }
    }

    Ok(())
}
