use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// Almanac calendar occurrence expander.
#[derive(Parser, Debug)]
#[command(
    name = "almanac",
    version,
    about = "Split calendar events into per-day occurrences"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Settings file to read instead of ./config.toml.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand result rows into calendar items.
    Expand(ExpandArgs),
    /// Show how timezone identifiers resolve.
    Zones(ZonesArgs),
}

/// Arguments for the `expand` subcommand.
#[derive(clap::Args, Debug)]
pub struct ExpandArgs {
    /// JSON file holding an array of result rows; `-` reads stdin.
    pub input: PathBuf,

    /// Override the configured display timezone.
    #[arg(short, long)]
    pub timezone: Option<String>,

    /// Hide everything before this instant (RFC 3339).
    #[arg(long)]
    pub view_start: Option<DateTime<Utc>>,

    /// Hide everything after this instant (RFC 3339).
    #[arg(long)]
    pub view_end: Option<DateTime<Utc>>,

    /// Emit items bucketed by local day instead of a flat list.
    #[arg(long)]
    pub by_day: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `zones` subcommand.
#[derive(clap::Args, Debug)]
pub struct ZonesArgs {
    /// Identifiers to resolve (IANA, Windows or vendor-prefixed).
    #[arg(required = true)]
    pub ids: Vec<String>,
}
