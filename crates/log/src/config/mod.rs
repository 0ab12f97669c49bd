//! Configuration types
//!
//! - `base`: [`Config`] and [`Format`]
//! - `display`: what each line shows
//! - `presets`: development, production and environment-driven setups

mod base;
mod display;
mod presets;

pub use base::{Config, Format};
pub use display::{DisplayConfig, ENV_COLORS, ENV_SOURCE, ENV_TIME};
pub use presets::{ENV_FILTER, ENV_FORMAT, RUST_LOG};
