//! # contact-form
//!
//! The contact form's state and its submission pipeline.
//!
//! The [`SubmissionController`] owns no page state of its own: the
//! [`ContactForm`] is passed in, visible effects go through an injected
//! [`Presentation`], and delivery goes through an injected
//! [`SubmissionTransport`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use contact_form::prelude::*;
//!
//! # async fn run() {
//! let presentation = Arc::new(MemoryPresentation::new());
//! let controller = SubmissionController::new(
//!     Arc::new(SimulatedTransport::succeeding(std::time::Duration::from_secs(2))),
//!     presentation.clone(),
//!     FormConfig::default(),
//! );
//!
//! let mut form = ContactForm::new()
//!     .with(FieldName::Name, "Ana Silva")
//!     .with(FieldName::Email, "ana@x.com")
//!     .with(FieldName::Phone, "11912345678")
//!     .with(FieldName::Message, "Preciso de ajuda urgente")
//!     .with(FieldName::Privacy, true);
//!
//! assert_eq!(controller.submit(&mut form).await, SubmissionOutcome::Succeeded);
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod presentation;
pub mod transport;

pub use config::FormConfig;
pub use controller::{FAILURE_NOTICE, SubmissionController, SubmissionOutcome, SubmissionState};
pub use error::TransportError;
pub use form::{ContactForm, ContactSubmission, FieldSpec};
pub use presentation::{
    MemoryPresentation, Presentation, PresentationEvent, PresentationSnapshot, ScrollTarget,
};
pub use transport::{SimulatedTransport, SubmissionTransport};

pub use contact_validator::{FieldName, FieldValue, ValidationResult};

/// Common imports.
pub mod prelude {
    pub use crate::{
        ContactForm, FieldName, FieldValue, FormConfig, MemoryPresentation, Presentation,
        ScrollTarget, SimulatedTransport, SubmissionController, SubmissionOutcome,
        SubmissionState, SubmissionTransport, TransportError,
    };
}
