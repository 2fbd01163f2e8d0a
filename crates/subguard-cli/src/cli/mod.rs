//! CLI for the subguard form guard.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use subguard_core::config::{self, GuardConfig};

use commands::{run_config, run_plan, run_submit, run_upload};

/// Top-level CLI for subguard.
#[derive(Debug, Parser)]
#[command(name = "subguard")]
#[command(about = "subguard: validate subtitle upload form input", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check a subtitle file as if it was just picked in the upload control.
    Upload {
        /// Path to the subtitle file.
        path: PathBuf,
    },

    /// Check form values as if the form was submitted.
    Submit {
        /// Name of the selected subtitle file (empty for none).
        #[arg(long, default_value = "")]
        subtitlefile: String,
        /// Time offset in seconds.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        seconds: String,
        /// Declared source format, e.g. `.srt`.
        #[arg(long, default_value = "")]
        from: String,
    },

    /// Run server-side acceptance for a file and print the conversion plan.
    Plan {
        /// Path to the subtitle file.
        path: PathBuf,
        /// Time offset in seconds.
        #[arg(long, allow_hyphen_values = true)]
        seconds: String,
        /// Sign multiplier for the offset (1 or -1).
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        plusmin: String,
        /// Source format, e.g. `.srt`.
        #[arg(long)]
        from: String,
        /// Target format, e.g. `.vtt`.
        #[arg(long)]
        to: String,
        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the configuration file path and effective settings.
    Config,
}

fn load_config(path: Option<&PathBuf>) -> Result<GuardConfig> {
    match path {
        Some(p) => GuardConfig::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Upload { path } => run_upload(&cfg, &path)?,
            CliCommand::Submit {
                subtitlefile,
                seconds,
                from,
            } => run_submit(&cfg, subtitlefile, seconds, from)?,
            CliCommand::Plan {
                path,
                seconds,
                plusmin,
                from,
                to,
                json,
            } => run_plan(&cfg, &path, seconds, plusmin, from, to, json)?,
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
