//! rbikestats library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod errors;
pub mod models;
pub mod stats;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::Cli;
use config::Config;
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once per process
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    core::session::run_session(&mut input, &cfg)
}
