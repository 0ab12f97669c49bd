//! Command-line definitions.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use contact_log::Format;

#[derive(Parser, Debug)]
#[command(name = "contact", version)]
#[command(about = "Validate, format and submit contact form data")]
pub struct Cli {
    /// Configuration file (defaults to ./contact.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,contact_form=trace`
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Log output format: pretty, compact or json
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<Format>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a single field value
    Validate(ValidateArgs),

    /// Print a phone number in the (DD) DDDDD-DDDD mask
    FormatPhone {
        /// Raw input; non-digits are ignored
        raw: String,
    },

    /// Fill the form and run a full submission against the simulated transport
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Field name: name, email, phone, message or privacy
    pub field: String,

    /// Value to check; empty when omitted
    #[arg(default_value = "", allow_hyphen_values = true)]
    pub value: String,

    /// Checkbox state, for `privacy`
    #[arg(long)]
    pub checked: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// Raw phone input; masked as it would be while typing
    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub message: String,

    /// Tick the privacy checkbox
    #[arg(long)]
    pub accept_privacy: bool,

    /// Make the simulated transport reject the submission
    #[arg(long)]
    pub reject: bool,

    /// Simulated transport delay, e.g. `2s` or `250ms`
    #[arg(long, value_parser = parse_duration, value_name = "DURATION")]
    pub delay: Option<Duration>,

    /// Upper bound on the transport call
    #[arg(long, value_parser = parse_duration, value_name = "DURATION")]
    pub timeout: Option<Duration>,
}

fn parse_duration(s: &str) -> Result<Duration, humantime_serde::re::humantime::DurationError> {
    humantime_serde::re::humantime::parse_duration(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_submit_parses_durations() {
        let cli = Cli::try_parse_from([
            "contact",
            "submit",
            "--name",
            "Ana",
            "--delay",
            "250ms",
            "--timeout",
            "1m",
        ])
        .unwrap();
        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        assert_eq!(args.delay, Some(Duration::from_millis(250)));
        assert_eq!(args.timeout, Some(Duration::from_secs(60)));
        assert_eq!(args.email, "");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "contact",
            "format-phone",
            "11987654321",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.log_format, Some(Format::Json));
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let parsed = Cli::try_parse_from(["contact", "--log-format", "xml", "format-phone", "1"]);
        assert!(parsed.is_err());
    }
}
