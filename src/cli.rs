use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::character::traits::Trait;

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// An explicit `--format` wins over the configured default.
    pub fn resolve(user_choice: Option<OutputFormat>, configured: OutputFormat) -> OutputFormat {
        user_choice.unwrap_or(configured)
    }
}

#[derive(Parser)]
#[command(
    name = "charsheet",
    about = "Character sheet generator - build characters and decorate them with traits",
    version,
    after_help = "Logs are written to: ~/.local/share/charsheet/logs/charsheet.log (or $CHARSHEET_DIR/logs)"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to charsheet.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Log at debug level unless RUST_LOG is set")]
    pub verbose: bool,

    /// Defaults to `demo`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and print the two sample characters
    Demo {
        /// Output format (default: from config, text unless changed)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Build a single character from the command line
    Build {
        #[command(subcommand)]
        kind: BuildKind,
    },

    /// List trait categories
    Traits {
        /// Output format (default: from config, text unless changed)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// List character kinds and their special abilities
    Variants {
        /// Output format (default: from config, text unless changed)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum BuildKind {
    /// An ordinary human
    Human {
        #[command(flatten)]
        common: CommonArgs,

        #[arg(long)]
        occupation: String,

        #[arg(long)]
        gender: String,
    },

    /// A human with powers
    SuperHuman {
        #[command(flatten)]
        common: CommonArgs,

        #[arg(long)]
        superpower: String,

        #[arg(long)]
        secret_identity: String,
    },

    /// A machine intelligence
    Artificial {
        #[command(flatten)]
        common: CommonArgs,

        #[arg(long)]
        intelligence_level: String,

        #[arg(long)]
        processing_capacity: String,
    },

    /// A visitor from another planet
    Alien {
        #[command(flatten)]
        common: CommonArgs,

        #[arg(long)]
        home_planet: String,

        /// Special ability text
        #[arg(long)]
        ability: String,
    },
}

/// Arguments shared by every kind of character
#[derive(Args)]
pub struct CommonArgs {
    /// Character name
    #[arg(long)]
    pub name: String,

    /// Age in years
    #[arg(long, allow_negative_numbers = true)]
    pub age: u32,

    /// Height in meters
    #[arg(long, allow_negative_numbers = true)]
    pub height: f64,

    /// Weight in kilograms
    #[arg(long, allow_negative_numbers = true)]
    pub weight: f64,

    /// Trait to add, repeatable (e.g. --trait power=telekinesis)
    #[arg(long = "trait", value_name = "CATEGORY=TEXT")]
    pub traits: Vec<Trait>,

    /// League the character belongs to
    #[arg(long)]
    pub league: Option<String>,

    /// The character's rival
    #[arg(long)]
    pub rival: Option<String>,

    /// Output format (default: from config, text unless changed)
    #[arg(long, short = 'o', value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: from config, text unless changed)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Get a configuration value
    Get {
        /// Configuration key (dot notation)
        key: String,
    },
}
