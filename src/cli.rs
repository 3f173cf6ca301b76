//! Command-line interface definitions
//!
//! Lives in the library so `xtask` can generate the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::typewriter::TypewriterOverrides;

/// Long version string: package version plus git SHA for dev builds.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("TYPECYCLE_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "typecycle")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Type, pause, delete and loop a list of phrases in your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the typewriter in the terminal
    #[command(long_about = "Play the typewriter in the terminal.

Full-screen by default: the line is centered with a blinking caret.
Press q, Esc or Ctrl-C to quit and r to restart the cycle.
With --inline a single line is rewritten in place instead.

EXAMPLES:
    typecycle play
    typecycle play \"Rust Developer\" \"Open Source Maintainer\"
    typecycle play --inline --duration-ms 10000")]
    Play(PlayArgs),

    /// Print the simulated typewriter timeline
    #[command(long_about = "Print the simulated typewriter timeline.

Each line shows the time a tick fires and the text displayed after it.
Nothing sleeps: the timeline is computed instantly.

EXAMPLES:
    typecycle trace Hi Bye --type-ms 10 --delete-ms 5 --pause-ms 100 --duration-ms 300
    typecycle trace --json
    typecycle trace Hi Bye --until Bye")]
    Trace(TraceArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Whether the command reads or writes the config file.
    pub fn uses_config(&self) -> bool {
        !matches!(self, Commands::Completions { .. })
    }
}

/// Phrase and timing arguments shared by `play` and `trace`.
#[derive(Args, Debug, Clone, Default)]
pub struct PhraseArgs {
    /// Phrases to cycle (defaults to the configured list)
    #[arg(value_name = "PHRASE")]
    pub phrases: Vec<String>,

    /// Delay before each typed character (ms)
    #[arg(long, value_name = "MS")]
    pub type_ms: Option<u64>,

    /// Delay before each deleted character (ms)
    #[arg(long, value_name = "MS")]
    pub delete_ms: Option<u64>,

    /// Hold time after a phrase is fully typed (ms)
    #[arg(long, value_name = "MS")]
    pub pause_ms: Option<u64>,
}

impl PhraseArgs {
    pub fn overrides(&self) -> TypewriterOverrides {
        TypewriterOverrides {
            type_interval_ms: self.type_ms,
            delete_interval_ms: self.delete_ms,
            pause_ms: self.pause_ms,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub phrases: PhraseArgs,

    /// Text shown before the typed phrase
    #[arg(long)]
    pub prefix: Option<String>,

    /// Caret glyph
    #[arg(long)]
    pub caret: Option<String>,

    /// Rewrite a single line instead of taking over the screen
    #[arg(long)]
    pub inline: bool,

    /// Stop after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub duration_ms: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct TraceArgs {
    #[command(flatten)]
    pub phrases: PhraseArgs,

    /// Simulated time to cover (ms)
    #[arg(long, value_name = "MS", default_value_t = 10_000)]
    pub duration_ms: u64,

    /// Emit one JSON object per line
    #[arg(long)]
    pub json: bool,

    /// Print only the first frame showing this text
    #[arg(long, value_name = "TEXT")]
    pub until: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Add missing fields to the config file
    Migrate {
        /// Apply without asking
        #[arg(long, short)]
        yes: bool,
    },
    /// Open the config file in $EDITOR
    Edit,
}
