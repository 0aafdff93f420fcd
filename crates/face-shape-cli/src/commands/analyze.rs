//! Analyze command - classify face shapes and recommend hairstyles.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use face_shape_adapters::{load_style_table, model_path, set_models_dir, FsImageSource};
use face_shape_core::inference::FaceMeshLandmarker;
use face_shape_core::{analysis, ImageSource, StyleTable};
use tracing::{debug, info, warn};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{JsonOutput, ProgressBar};

/// Default style table filename, looked up in the working directory when
/// no path is configured.
const DEFAULT_STYLE_TABLE: &str = "hairstyles.json";

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one JSON object per line)
    #[default]
    Jsonl,
    /// Single JSON array
    Json,
}

/// Shared arguments for photo analysis.
#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// Files or directories to analyze
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Path to the hairstyle recommendation table (JSON)
    #[arg(long, value_name = "FILE")]
    pub styles: Option<PathBuf>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Custom models directory (overrides default and config)
    #[arg(long, value_name = "DIR")]
    pub models_dir: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        // Recursive: config applies only if CLI --recursive not passed
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        // Style table path: CLI > config
        if args.styles.is_none() {
            args.styles.clone_from(&config.styles.path);
        }

        // Output format: CLI > config (accessor provides fallback)
        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_ref()
                .and_then(|s| match s.as_str() {
                    "json" => Some(OutputFormat::Json),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    _ => None,
                });
        }

        // Boolean output options: CLI flag wins, then config
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        // Models directory: CLI > config
        if args.models_dir.is_none() {
            args.models_dir.clone_from(&config.models.dir);
        }

        args
    }

    /// Get output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Jsonl)
    }
}

/// Result of running the analyze command.
#[allow(dead_code)] // Fields exposed for programmatic use
pub struct AnalyzeResult {
    /// Number of photos classified.
    pub classified: usize,
    /// Number of photos skipped.
    pub skipped: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the analyze command.
pub fn run(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let args = AnalyzeArgs::with_config(args.clone(), &AppConfig::load());

    info!("Running analyze command on {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    // Apply models directory override if specified
    if let Some(ref models_dir) = args.models_dir {
        debug!("Using custom models directory: {}", models_dir.display());
        set_models_dir(Some(models_dir.clone()));
    }

    let landmarker = build_landmarker()?;
    let styles = load_styles(&args)?;

    // Initialize image source
    let source = FsImageSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    // Determine if we should show progress
    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());
    let progress_bar = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);

    // Initialize output adapter
    let output = match args.format() {
        OutputFormat::Jsonl => JsonOutput::lines(),
        OutputFormat::Json => JsonOutput::array(args.pretty),
    };

    let outcome = analysis::run(&source, &landmarker, &styles, &output, &progress_bar)?;

    Ok(AnalyzeResult {
        classified: outcome.classified,
        skipped: outcome.skipped,
        exit_code: exit_code_for(&outcome),
    })
}

/// Maps pipeline counters to a process exit code: success when at least
/// one face was classified, the no-faces code otherwise.
const fn exit_code_for(outcome: &analysis::AnalysisOutcome) -> ExitCode {
    if outcome.classified > 0 {
        ExitCode::Success
    } else {
        ExitCode::NoFaces
    }
}

/// Builds the Face Mesh landmarker from the installed model weights.
fn build_landmarker() -> Result<FaceMeshLandmarker> {
    let weights = model_path("facemesh")
        .context("Unknown model configuration for 'facemesh'")?;

    if !weights.exists() {
        anyhow::bail!(
            "Face Mesh model not found at {}. Run `face-shape models fetch`.",
            weights.display()
        );
    }

    Ok(FaceMeshLandmarker::new(weights))
}

/// Loads the style table from the configured path.
///
/// Falls back to `hairstyles.json` in the working directory; without any
/// table every report simply carries no recommendations.
fn load_styles(args: &AnalyzeArgs) -> Result<StyleTable> {
    if let Some(ref path) = args.styles {
        return load_style_table(path);
    }

    let default = PathBuf::from(DEFAULT_STYLE_TABLE);
    if default.exists() {
        return load_style_table(&default);
    }

    warn!("No style table configured; reports will carry no recommendations");
    Ok(StyleTable::new())
}
