use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wheelspin", version, about = "Weighted roulette wheel")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (default: $HOME/.config/wheelspin/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ItemArgs {
    #[arg(help = "Items as NAME or NAME=WEIGHT (weight in percent)")]
    pub items: Vec<String>,
    #[arg(long, short, help = "Read items from a .json or .toml file first")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the normalized share of every item
    Resolve {
        #[command(flatten)]
        items: ItemArgs,
    },
    /// Show wedge boundaries for a rotation
    Layout {
        #[command(flatten)]
        items: ItemArgs,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        angle: f64,
    },
    /// Show which item sits under the pointer at a rotation
    Winner {
        #[command(flatten)]
        items: ItemArgs,
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
    },
    /// Spin the wheel until it stops
    Spin {
        #[command(flatten)]
        items: ItemArgs,
        #[arg(long, value_enum, default_value_t = PolicyKind::Decay)]
        policy: PolicyKind,
        #[arg(long, help = "Initial speed in degrees per frame (default: random)")]
        speed: Option<f64>,
        #[arg(long, help = "Brake after this many frames instead of waiting for Enter")]
        stop_after: Option<u64>,
        #[arg(long, conflicts_with = "seed_phrase")]
        seed: Option<u64>,
        #[arg(long)]
        seed_phrase: Option<String>,
        #[arg(long, default_value_t = false, help = "Print every frame to stderr")]
        animate: bool,
        #[arg(long, help = "Delay between animated frames in milliseconds")]
        frame_ms: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Count down before revealing the result")]
        countdown: u32,
    },
    /// List the available wheel presets
    Presets {
        #[command(flatten)]
        items: ItemArgs,
    },
    /// Validate items without spinning
    Check {
        #[command(flatten)]
        items: ItemArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Slow down from the first frame
    Decay,
    /// Keep speed until told to stop, then brake
    Brake,
}
