use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(name = "cb")]
#[command(about = "Course schedule and holiday configuration", version)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Course profile to use instead of the one set in the config file
    #[arg(long, short, global = true, env = "COURSEBOOK_PROFILE")]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the active course
    Show {
        /// Print the course as TOML
        #[arg(long)]
        toml: bool,
    },
    /// List the course profiles
    Profiles,
    /// List the holidays
    Holidays,
    /// Print the resolved configuration as TOML
    Config,
    /// Validate a config file and report every problem
    Check {
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
