//! CLI command definitions and handlers.

pub mod analyze;
pub mod models;

use clap::{Parser, Subcommand};

/// Face Shape - Face shape classification and hairstyle recommendation
#[derive(Parser)]
#[command(name = "face-shape")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared analyze arguments (paths, style table, output flags).
    #[command(flatten)]
    pub analyze: analyze::AnalyzeArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify face shapes in photos and recommend hairstyles
    Analyze(analyze::AnalyzeArgs),
    /// Manage ML models
    Models(models::ModelsArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// At least one face was classified.
    Success,
    /// No face was classified in any input.
    NoFaces,
    /// The command failed.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::from(0),
            ExitCode::NoFaces => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}
