//! Subcommand handlers.
//!
//! Each handler prints its result to stdout and returns the process exit
//! code; diagnostics go through `tracing` to stderr.

mod submit;
mod validate;

use std::process::ExitCode;

pub use submit::submit;
pub use validate::validate;

/// Exit code for a valid field or a delivered submission.
pub const EXIT_OK: u8 = 0;
/// Exit code when validation rejected the input.
pub const EXIT_INVALID: u8 = 1;
/// Exit code when the transport failed.
pub const EXIT_TRANSPORT: u8 = 2;

pub fn format_phone(raw: &str) -> ExitCode {
    println!("{}", contact_validator::format_phone(raw));
    ExitCode::from(EXIT_OK)
}
