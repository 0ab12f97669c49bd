//! Built-in validators
//!
//! The building blocks the contact-form rules are assembled from:
//!
//! - **Length**: [`NotEmpty`], [`MinLength`]
//! - **Content**: [`Email`]
//! - **Phone**: [`PhoneMask`]
//! - **Boolean**: [`IsTrue`]

pub mod boolean;
pub mod content;
pub mod length;
pub mod phone;

pub use boolean::{IsTrue, is_true};
pub use content::{Email, email};
pub use length::{MinLength, NotEmpty, min_length, not_empty};
pub use phone::{PhoneMask, phone_mask};
