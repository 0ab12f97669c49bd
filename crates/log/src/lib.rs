//! # contact-log
//!
//! Logging setup shared by the contact-kit binaries. Library crates only emit
//! `tracing` events; binaries install a subscriber through this crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use contact_log::prelude::*;
//!
//! fn main() -> LogResult<()> {
//!     // CONTACT_LOG / RUST_LOG if set, otherwise a build-dependent preset
//!     let _guard = contact_log::auto_init()?;
//!
//!     info!(fields = 5, "form ready");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod error;

// Public API
pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{
    Config, DisplayConfig, ENV_COLORS, ENV_FILTER, ENV_FORMAT, ENV_SOURCE, ENV_TIME, Format,
    RUST_LOG,
};
pub use error::{LogError, LogResult};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Config, Format, LogError, LogResult, auto_init, debug, error, info, init, init_with,
        trace, warn,
    };
}

// Re-export tracing macros
pub use tracing::{debug, error, info, instrument, span, trace, warn};

// ============================================================================
// Initialization Functions
// ============================================================================

/// Auto-detect and initialize the best logging configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn auto_init() -> LogResult<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }

    if std::env::var_os(ENV_FILTER).is_some() || std::env::var_os(RUST_LOG).is_some() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
