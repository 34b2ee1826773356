// src/args.rs
use std::path::PathBuf;

use clap::Parser;
use file_meta_core::{ExtractOptions, TimeZonePolicy};

#[derive(Parser, Debug)]
#[command(name = "file_meta", version, about = "Print permissions, owner, group and timestamps of files as JSON")]
pub struct Args {
    /// Files or directories to describe
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// JSON file with extraction options ({"timezone": "utc", "follow_links": false})
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render timestamps in UTC instead of the local time zone
    #[arg(long)]
    pub utc: bool,

    /// Describe symlinks themselves instead of their targets
    #[arg(long)]
    pub no_follow: bool,

    /// Pretty-print each JSON record
    #[arg(long)]
    pub pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Command-line flags win over the config file.
    pub fn apply(&self, mut options: ExtractOptions) -> ExtractOptions {
        if self.utc {
            options = options.with_timezone(TimeZonePolicy::Utc);
        }
        if self.no_follow {
            options = options.with_follow_links(false);
        }
        options
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
