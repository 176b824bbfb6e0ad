use std::path::PathBuf;

use clap::Parser;

/// Electrical load calculation for industrial workshops.
///
/// Reads an equipment list, prints the group and whole-workshop design
/// figures, and optionally serves the same calculation over HTTP.
#[derive(Debug, Parser)]
#[command(name = "workshop-load", version)]
pub struct CliArgs {
    /// Equipment list (.json or .csv)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Load configuration from a TOML file
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Use a built-in configuration preset (reference, lan)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Whole-workshop totals TOML file, overriding config and input
    #[arg(long, value_name = "PATH")]
    pub workshop_totals: Option<PathBuf>,

    /// Write per-equipment derived values to CSV
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Drop records with any zero numeric field before aggregating
    #[arg(long)]
    pub skip_incomplete: bool,

    /// Start the REST API server
    #[cfg(feature = "api")]
    #[arg(long)]
    pub serve: bool,

    /// API server port, overriding the configured one
    #[cfg(feature = "api")]
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,
}

impl CliArgs {
    /// Whether the HTTP server was requested.
    pub fn serve_requested(&self) -> bool {
        #[cfg(feature = "api")]
        {
            self.serve
        }
        #[cfg(not(feature = "api"))]
        {
            false
        }
    }
}
