//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use daywise::BudgetTier;
use std::path::PathBuf;

/// Daywise - Multi-day AI travel planner
#[derive(Parser)]
#[command(
    name = "daywise",
    about = "Multi-day AI travel planner with daywise maps and current weather",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logs and configuration details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a day-by-day itinerary with maps and weather
    Plan {
        /// Starting location
        #[arg(long)]
        origin: String,

        /// Destination
        #[arg(long)]
        destination: String,

        /// Budget tier (Budget, Mid-range, Luxury)
        #[arg(long, default_value = "Mid-range")]
        budget: BudgetTier,

        /// Trip duration in days (1-14)
        #[arg(long, default_value_t = 5)]
        days: u32,

        /// Purpose of travel (e.g. leisure, adventure, work)
        #[arg(long, default_value = "")]
        purpose: String,

        /// Special preferences (e.g. food, hidden gems)
        #[arg(long, default_value = "")]
        preferences: String,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the planner web page and JSON API
    Serve {
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
