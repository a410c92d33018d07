// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::options::PipelineConfig;
use crate::error::Result;
use crate::progress::Progress;
use crate::runner;

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Merge traffic exports and geocode store addresses")]
pub struct Cli {
    /// Pipeline config (TOML). Falls back to $PRESENCE_CONFIG, then ./presence.toml.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Join the raw traffic CSVs on the date column
    Merge,
    /// Geocode the raw store dump
    Geocode,
    /// Merge, then geocode
    Run,
}

/// Prints one line per finished item to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.failed = 0;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, _index: usize, label: &str) {
        self.done += 1;
        println!("[{}/{}] {}", self.done + self.failed, self.total, label);
    }
    fn item_failed(&mut self, _index: usize, label: &str) {
        self.failed += 1;
        println!("[{}/{}] {} (no coordinates)", self.done + self.failed, self.total, label);
    }
    fn finish(&mut self) {
        if self.failed > 0 {
            println!("Done: {} ok, {} failed", self.done, self.failed);
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let cfg = PipelineConfig::load(cli.config.as_deref())?;
    let mut progress = ConsoleProgress::default();

    match cli.command {
        Command::Merge => {
            let s = runner::run_merge(&cfg.merge, Some(&mut progress))?;
            println!("Wrote {} ({} rows, {} columns)", s.path.display(), s.rows, s.columns);
        }
        Command::Geocode => {
            let s = runner::run_geocode(&cfg.geocode, Some(&mut progress))?;
            println!(
                "Wrote {} ({} rows, {} geocoded, {} failed)",
                s.path.display(), s.rows, s.geocoded, s.failed
            );
        }
        Command::Run => {
            let s = runner::run_all(&cfg, Some(&mut progress))?;
            println!("Wrote {} ({} rows)", s.merge.path.display(), s.merge.rows);
            println!(
                "Wrote {} ({} rows, {} geocoded, {} failed)",
                s.geocode.path.display(), s.geocode.rows, s.geocode.geocoded, s.geocode.failed
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands_and_global_config() {
        let cli = Cli::try_parse_from(["cli", "merge"]).unwrap();
        assert_eq!(cli.command, Command::Merge);
        assert!(cli.config.is_none());

        let cli = Cli::try_parse_from(["cli", "geocode", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.command, Command::Geocode);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));

        assert!(Cli::try_parse_from(["cli"]).is_err());
        assert!(Cli::try_parse_from(["cli", "deploy"]).is_err());
    }
}
