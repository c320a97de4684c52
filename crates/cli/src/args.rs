//! Command-line interface.

use clap::Parser;

/// gigboard - browse nearby job postings from your terminal.
#[derive(Parser, Debug)]
#[command(name = "gigboard")]
#[command(version)]
#[command(about = "Filterable board of job postings from the local job service", long_about = None)]
pub struct Cli {
    /// Job service base URL (default: the local service)
    #[arg(long = "api", value_name = "URL")]
    pub api: Option<String>,

    /// Referral code: show only the posting it confirms
    #[arg(long = "ref", value_name = "CODE")]
    pub referral: Option<String>,

    /// Skip the network entirely and browse the sample postings
    #[arg(long)]
    pub offline: bool,

    /// Case-insensitive text match on title, company, or location
    #[arg(short = 's', long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Minimum hourly pay (0 = no restriction)
    #[arg(long = "min-pay", value_name = "DOLLARS")]
    pub min_pay: Option<f64>,

    /// Maximum distance in miles (0 = no restriction)
    #[arg(long = "max-distance", value_name = "MILES")]
    pub max_distance: Option<f64>,

    /// Print the visible postings as JSON instead of cards
    #[arg(long, conflicts_with = "interactive")]
    pub json: bool,

    /// Adjust filters in a command loop instead of rendering once
    #[arg(short = 'i', long)]
    pub interactive: bool,
}
