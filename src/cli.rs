use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "armory")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Install curated security tooling from a static catalogue")]
#[command(
    long_about = "A catalogue-driven installer for third-party security tools. Browse the numbered catalogue, pick tools by position, name or category, and armory shells out to your package manager and git to install them, reporting a per-tool result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install tools: `all`, a catalogue index, a name, or a whole category
    Install {
        /// What to install: "all", an index from `armory list`, or a tool name
        #[arg(
            value_name = "TARGET",
            required_unless_present = "category",
            conflicts_with = "category"
        )]
        target: Option<String>,

        /// Install every tool in this category instead
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,

        /// Print the steps that would run without executing anything
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the numbered tool catalogue
    List {
        /// Only show tools in this category
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show catalogue categories with tool counts
    Categories {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show details for a single tool
    Info {
        /// Catalogue index or tool name
        #[arg(value_name = "TARGET")]
        target: String,
    },

    /// Install environment prerequisites (package index refresh, git, curl)
    Setup {
        /// Print the steps that would run without executing anything
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Browse and install interactively through a numbered menu
    Menu,

    /// Show version and project information
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
