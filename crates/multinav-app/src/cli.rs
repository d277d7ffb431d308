use std::path::PathBuf;

use clap::Parser;

/// multinav: several browser panes driven from one control panel.
#[derive(Parser, Debug)]
#[command(name = "multinav", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `debug` or `multinav=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start with 3 or 4 panes visible.
    #[arg(long, value_parser = clap::value_parser!(u32).range(3..=4))]
    pub panes: Option<u32>,

    /// Don't ship scraped responses to the ingest server.
    #[arg(long)]
    pub no_ingest: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
