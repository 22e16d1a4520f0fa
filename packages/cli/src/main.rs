#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line harness for the Ulat PH core.
//!
//! ```text
//! ulat_ph_cli check <text>
//! ulat_ph_cli nearby --reports dump.json --lat 14.5995 --lon 120.9842 [--radius-km 1]
//! ulat_ph_cli region <place-name>
//! ```
//!
//! `nearby` expects a JSON array of reports in the backend's response
//! shape and prints the assembled feed with distances.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ulat_ph_geofilter::{DEFAULT_RADIUS_KM, distance_km, is_within_service_region};
use ulat_ph_moderation::ProfanityDictionary;
use ulat_ph_report_models::{Coordinate, ReportSummary};
use ulat_ph_session::FeedView;

#[derive(Parser)]
#[command(name = "ulat_ph_cli", about = "Exercise the Ulat PH core against local data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run text through the profanity gate
    Check {
        /// Text to check
        text: String,
    },
    /// Assemble the nearby-report feed from a JSON dump
    Nearby {
        /// Path to a JSON array of reports
        #[arg(long)]
        reports: PathBuf,
        /// Reference latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Reference longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Search radius in kilometers
        #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
        radius_km: f64,
    },
    /// Check whether a place name lies inside the service region
    Region {
        /// Place name as returned by the geocoder
        place: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { text } => {
            let dictionary = ProfanityDictionary::build();
            if dictionary.check(&text) {
                println!("BLOCKED");
                println!("masked: {}", dictionary.clean(&text));
            } else {
                println!("OK");
            }
        }
        Commands::Nearby {
            reports,
            lat,
            lon,
            radius_km,
        } => {
            let raw = fs::read_to_string(&reports)?;
            let all: Vec<ReportSummary> = serde_json::from_str(&raw)?;
            log::info!("loaded {} report(s) from {}", all.len(), reports.display());

            let reference = Coordinate::new(lat, lon);
            let feed = FeedView::assemble(all, Some(reference), radius_km);

            if feed.reports.is_empty() {
                println!("No reports within {radius_km} km.");
                return Ok(());
            }

            println!("{:<8} {:<6} {:<9} ISSUE", "ID", "SEEN", "DIST KM");
            println!("{}", "-".repeat(60));
            for report in &feed.reports {
                let distance = distance_km(reference, report.coordinate());
                println!(
                    "{:<8} {:<6} {:<9.3} {}",
                    report.id,
                    report.sightings.count,
                    distance,
                    report.issue_label()
                );
            }
            println!("\n{} report(s) shown", feed.reports.len());
        }
        Commands::Region { place } => {
            if is_within_service_region(&place) {
                println!("{place}: inside the service region");
            } else {
                println!("{place}: outside the service region");
            }
        }
    }

    Ok(())
}
