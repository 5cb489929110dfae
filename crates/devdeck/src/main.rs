mod app;
mod banner;
mod cli;
mod commands;
mod config;
mod controller;
mod deck;
mod effects;
mod logging;
mod qa;
mod render;
mod storage;
mod theme;

use clap::Parser;

use crate::cli::Cli;
use crate::logging::Verbosity;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet), !cli.no_color);

    if let Err(e) = cli.run() {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("{} {e:#}", colored::Colorize::red("error:"));
        std::process::exit(1);
    }
}
