//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

use crate::config::SettingsOverrides;
use crate::domain::Language;

/// Detective Quest: explore a mansion laid out as a binary tree of rooms
#[derive(Parser, Debug)]
#[command(name = "detective-quest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Narration language and menu keys: pt (e/d/s) or en (l/r/q)
    #[arg(short, long, global = true)]
    pub lang: Option<Language>,

    /// Maximum number of rooms recorded per session
    #[arg(long, global = true)]
    pub max_visits: Option<usize>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Explore the mansion interactively (default)
    Play,

    /// Show the mansion layout as a tree
    Map,

    /// Show effective settings as TOML
    Settings,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            language: self.lang,
            max_visits: self.max_visits,
            no_color: self.no_color,
        }
    }
}
