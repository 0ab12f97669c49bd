//! Validator combinators
//!
//! - [`And`]: both validators must pass, first failure wins
//! - [`WithMessage`]: substitute the error message (and optionally the code)

pub mod and;
pub mod message;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
