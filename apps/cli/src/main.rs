//! `contact`: validate, format and submit contact form data from the shell.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod console;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = CliConfig::load(&cli)?;
    let _log = contact_log::init_with(config.logging.clone())?;

    match &cli.command {
        Command::Validate(args) => commands::validate(args),
        Command::FormatPhone { raw } => Ok(commands::format_phone(raw)),
        Command::Submit(args) => Ok(commands::submit(args, config.form).await),
    }
}
