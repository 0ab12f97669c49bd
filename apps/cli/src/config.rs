//! Layered configuration: defaults → `contact.toml` → environment → flags.
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "json"
//!
//! [form]
//! transport_timeout = "10s"
//! success_display = "5s"
//! simulated_delay = "500ms"
//! ```
//!
//! Environment variables use the `CONTACT_` prefix with `__` between table and
//! key (`CONTACT_FORM__SIMULATED_DELAY=1s`). `CONTACT_LOG` (falling back to
//! `RUST_LOG`) and `CONTACT_LOG_FORMAT` set the log filter and format;
//! `CONTACT_LOG_TIME`, `CONTACT_LOG_SOURCE` and `CONTACT_LOG_COLORS` toggle the
//! matching display options, as they do for `contact_log::Config::from_env`.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use contact_form::FormConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Command};

/// Config file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "contact.toml";

/// Everything the binary can be configured with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub logging: contact_log::Config,
    pub form: FormConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            logging: contact_log::Config::default().with_level("warn"),
            form: FormConfig::default(),
        }
    }
}

impl CliConfig {
    /// Resolves the configuration for one invocation.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let file = match &cli.config {
            Some(path) if !path.exists() => {
                bail!("config file {} does not exist", path.display());
            }
            Some(path) => path.clone(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        let mut config: Self = Self::figment(&file)
            .extract()
            .with_context(|| format!("invalid configuration in {}", file.display()))?;
        config.logging.display.apply_env(|key| std::env::var(key).ok());
        config.apply_flags(cli);

        tracing::trace!(?config, "configuration resolved");
        Ok(config)
    }

    /// Every layer below the command-line flags.
    pub fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::raw().only(&[contact_log::RUST_LOG]).map(|_| "logging.level".into()))
            .merge(Env::raw().only(&[contact_log::ENV_FILTER]).map(|_| "logging.level".into()))
            .merge(Env::raw().only(&[contact_log::ENV_FORMAT]).map(|_| "logging.format".into()))
            .merge(Env::prefixed("CONTACT_").split("__"))
    }

    fn apply_flags(&mut self, cli: &Cli) {
        if let Some(level) = &cli.log_level {
            self.logging.level.clone_from(level);
        }
        if let Some(format) = cli.log_format {
            self.logging.format = format;
        }
        if let Command::Submit(args) = &cli.command {
            if let Some(delay) = args.delay {
                self.form.simulated_delay = delay;
            }
            if let Some(timeout) = args.timeout {
                self.form.transport_timeout = Some(timeout);
            }
        }
    }
}
