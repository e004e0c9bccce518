//! Command-line surface: one subcommand per tracker view, plus the
//! export/sync/insight actions those views trigger.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ivtrack", about = "NICU vascular-access procedure tracker", version)]
pub struct Cli {
    /// Data directory for stored records and settings.
    #[arg(long, global = true, env = "IVTRACK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Clinical overview: stat cards, recent procedures, top performers.
    Dashboard,
    /// Record a new procedure.
    Add(AddArgs),
    /// List procedure records, optionally filtered.
    History {
        /// Case-insensitive match on study id, provider, or access type.
        #[arg(long)]
        search: Option<String>,
    },
    /// Delete a record by id.
    Delete {
        /// The record's UUID (shown by `history`).
        id: String,
    },
    /// Performance and trend analysis.
    Analytics,
    /// Export all records as CSV.
    Export {
        /// Directory to write the export into (defaults to the current one).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Push the full record list to the configured spreadsheet webhook.
    Sync,
    /// Generate AI observations from the record list.
    Insights,
    /// Webhook configuration.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show the configured webhook URL.
    Show,
    /// Save the spreadsheet webhook URL.
    SetWebhook { url: String },
    /// Print the Apps Script receiver template.
    Script,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Provider name, e.g. "Dr. Fish".
    #[arg(long)]
    pub provider: String,

    /// Procedure date-time, e.g. 2026-08-23T10:30 (defaults to now).
    #[arg(long)]
    pub date_time: Option<String>,

    /// De-identified patient/study code, e.g. Study-001.
    #[arg(long)]
    pub study_id: String,

    /// Room, e.g. "NICU 1" or "Pod A".
    #[arg(long)]
    pub room: String,

    /// Access type, e.g. "PIV Insertion".
    #[arg(long)]
    pub access_type: String,

    /// Whether ultrasound guidance was used.
    #[arg(long)]
    pub pocus: bool,

    /// Skin-puncture count, at least 1.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub attempts: u32,

    /// Success or Failure.
    #[arg(long)]
    pub outcome: String,

    #[arg(long)]
    pub age_days: Option<u32>,

    /// Male, Female, or Other.
    #[arg(long)]
    pub sex: Option<String>,

    /// Relevant comorbidities, skin conditions, etc.
    #[arg(long)]
    pub conditions: Option<String>,

    #[arg(long)]
    pub weight_grams: Option<f64>,

    #[arg(long)]
    pub gestational_age: Option<f64>,

    /// Notes on catheter size, site, or why it failed.
    #[arg(long, default_value = "")]
    pub comments: String,
}
