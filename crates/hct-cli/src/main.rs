//! hct - HCT color conversion CLI
//!
//! Converts between hex colors and hue / chroma / tone, finds gamut
//! boundaries, and translates colors between viewing environments.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hct")]
#[command(author, version, about = "HCT color conversion")]
#[command(long_about = "
Converts colors between sRGB hex and HCT (CAM16 hue, chroma, CIE L* tone).

Examples:
  hct from-color '#0000ff'              # Hue, chroma, tone
  hct from-color 4285f4 --cam           # All CAM16 attributes
  hct to-color 282.8 87.2 32.3          # Back to hex
  hct to-color 120 200 50               # Chroma clamps to the gamut
  hct boundary 25 60                    # Most chromatic color at hue/tone
  hct translate '#ff0000' --background-lstar 90
  hct translate '#ff0000' --config dark_room.yaml
  hct batch colors.txt -j 4 --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a hex color to hue, chroma and tone
    #[command(name = "from-color", visible_alias = "f")]
    FromColor(FromColorArgs),

    /// Convert hue, chroma and tone to a hex color
    #[command(name = "to-color", visible_alias = "t")]
    ToColor(ToColorArgs),

    /// Find the HCT that matches a color's look in other viewing conditions
    #[command(visible_alias = "tr")]
    Translate(TranslateArgs),

    /// Most chromatic color at a hue and tone
    #[command(visible_alias = "b")]
    Boundary(BoundaryArgs),

    /// Convert a file of colors, one per line
    Batch(BatchArgs),
}

#[derive(Args)]
struct FromColorArgs {
    /// Color as hex: #rgb, #rrggbb or #aarrggbb
    color: String,

    /// Also print CAM16 attributes (J, Q, M, s, UCS)
    #[arg(long)]
    cam: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ToColorArgs {
    /// Hue in degrees [0, 360]
    hue: f64,

    /// Chroma (>= 0)
    chroma: f64,

    /// Tone (L*) [0, 100]
    tone: f64,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TranslateArgs {
    /// Color as hex
    color: String,

    #[command(flatten)]
    conditions: ConditionsArgs,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Viewing conditions: YAML file, then individual overrides.
#[derive(Args)]
struct ConditionsArgs {
    /// Viewing conditions YAML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background L* [0, 100]
    #[arg(long)]
    background_lstar: Option<f64>,

    /// Adapting luminance in cd/m^2
    #[arg(long)]
    adapting_luminance: Option<f64>,

    /// Surround: dark, dim, average
    #[arg(long)]
    surround: Option<String>,

    /// Assume full adaptation to the illuminant
    #[arg(long)]
    discount_illuminant: bool,
}

#[derive(Args)]
struct BoundaryArgs {
    /// Hue in degrees
    hue: f64,

    /// Tone (L*) [0, 100]
    tone: f64,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BatchArgs {
    /// Text file with one hex color per line
    input: PathBuf,

    /// Machine-readable output (JSON array)
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::FromColor(args) => commands::from_color::run(args, cli.verbose),
        Commands::ToColor(args) => commands::to_color::run(args, cli.verbose),
        Commands::Translate(args) => commands::translate::run(args, cli.verbose),
        Commands::Boundary(args) => commands::boundary::run(args, cli.verbose),
        Commands::Batch(args) => commands::batch::run(args, cli.verbose),
    }
}

/// Logs to stderr. `-v` / `-vv` win over `RUST_LOG`; the default is warn.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
