//! Single-flight submission controller.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──submit──► validate ──invalid──► Idle (slots populated, no transport call)
//!                     │
//!                   valid
//!                     ▼
//!                Submitting ──ok──► Succeeded ──window──► Idle
//!                     │
//!                    err
//!                     ▼
//!                  Failed ──invalid submit──► Idle
//! ```
//!
//! At most one submission is in flight per controller. A `submit` that finds
//! another one running returns [`SubmissionOutcome::Busy`] and touches nothing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use contact_validator::{FieldName, ValidationResult};
use parking_lot::Mutex;

use crate::config::FormConfig;
use crate::error::TransportError;
use crate::form::ContactForm;
use crate::presentation::{Presentation, ScrollTarget};
use crate::transport::SubmissionTransport;

/// Notice shown when delivery fails.
pub const FAILURE_NOTICE: &str = "Erro ao enviar mensagem. Tente novamente.";

/// Where the controller is in the submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// Transport call in flight.
    Submitting,
    /// Delivered; the success panel is up.
    Succeeded,
    /// Last delivery failed.
    Failed,
}

/// How a call to [`SubmissionController::submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// At least one field is invalid; the transport was not called.
    ValidationFailed {
        /// First invalid field in display order.
        first_invalid: FieldName,
        /// Every failing result, in display order.
        errors: Vec<ValidationResult>,
    },
    /// Delivered and the form was reset.
    Succeeded,
    /// The transport failed; the form keeps its values.
    TransportFailure(TransportError),
    /// Another submission is still in flight.
    Busy,
}

/// Drives validation, delivery and the visible submission states.
pub struct SubmissionController {
    transport: Arc<dyn SubmissionTransport>,
    presentation: Arc<dyn Presentation>,
    config: FormConfig,
    state: Arc<Mutex<SubmissionState>>,
    busy: AtomicBool,
    /// Bumped on every success; a window timer only closes its own panel.
    success_generation: Arc<AtomicU64>,
}

impl std::fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionController")
            .field("config", &self.config)
            .field("state", &*self.state.lock())
            .field("busy", &self.busy.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl SubmissionController {
    pub fn new(
        transport: Arc<dyn SubmissionTransport>,
        presentation: Arc<dyn Presentation>,
        config: FormConfig,
    ) -> Self {
        Self {
            transport,
            presentation,
            config,
            state: Arc::new(Mutex::new(SubmissionState::Idle)),
            busy: AtomicBool::new(false),
            success_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock()
    }

    /// Whether a submission currently holds the busy flag.
    pub fn is_submitting(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Field lost focus: validate it and update its error slot.
    pub fn on_blur(&self, form: &ContactForm, field: FieldName) -> ValidationResult {
        let result = field.validate(form.value(field));
        tracing::debug!(field = %field, valid = result.is_valid(), "field blurred");
        self.display(field, &result);
        result
    }

    /// User typed into a text field: store the value and clear the slot.
    pub fn on_input(&self, form: &mut ContactForm, field: FieldName, raw: &str) {
        form.input(field, raw);
        tracing::trace!(field = %field, "field input");
        self.presentation.clear_field_error(field);
    }

    /// Privacy checkbox changed.
    pub fn on_toggle(&self, form: &mut ContactForm, checked: bool) {
        form.set_privacy_accepted(checked);
        tracing::trace!(checked, "privacy toggled");
        self.presentation.clear_field_error(FieldName::Privacy);
    }

    /// Validates every required field and updates every slot.
    ///
    /// Returns the failing results in display order.
    pub fn validate_all(&self, form: &ContactForm) -> Vec<(FieldName, ValidationResult)> {
        form.required_fields()
            .filter_map(|spec| {
                let result = spec.name().validate(spec.value());
                self.display(spec.name(), &result);
                (!result.is_valid()).then_some((spec.name(), result))
            })
            .collect()
    }

    /// Validates and, when everything passes, delivers the form.
    ///
    /// Dropping the returned future mid-delivery restores the idle controls
    /// and releases the busy flag.
    pub async fn submit(&self, form: &mut ContactForm) -> SubmissionOutcome {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!("submission already in flight");
            return SubmissionOutcome::Busy;
        };

        let failures = self.validate_all(form);
        if let Some((first_invalid, _)) = failures.first() {
            let first_invalid = *first_invalid;
            tracing::info!(
                first_invalid = %first_invalid,
                invalid = failures.len(),
                "submission blocked by validation"
            );
            {
                let mut state = self.state.lock();
                if *state == SubmissionState::Failed {
                    *state = SubmissionState::Idle;
                }
            }
            self.presentation
                .scroll_into_view(ScrollTarget::FieldError(first_invalid));
            return SubmissionOutcome::ValidationFailed {
                first_invalid,
                errors: failures.into_iter().map(|(_, result)| result).collect(),
            };
        }

        let _submitting = SubmittingGuard::enter(self.presentation.as_ref(), &self.state);
        let submission = form.to_submission();
        tracing::info!(email = %submission.email, "submitting contact form");

        let delivery = self.transport.submit_contact_form(&submission);
        let delivered = match self.config.transport_timeout {
            Some(limit) => tokio::time::timeout(limit, delivery)
                .await
                .unwrap_or_else(|_| Err(TransportError::Timeout { duration: limit })),
            None => delivery.await,
        };

        match delivered {
            Ok(()) => {
                self.succeed(form);
                SubmissionOutcome::Succeeded
            }
            Err(err) => {
                *self.state.lock() = SubmissionState::Failed;
                tracing::error!(error = %err, "contact form submission failed");
                self.presentation.notify_failure(FAILURE_NOTICE);
                SubmissionOutcome::TransportFailure(err)
            }
        }
    }

    fn succeed(&self, form: &mut ContactForm) {
        *self.state.lock() = SubmissionState::Succeeded;
        tracing::info!(window = ?self.config.success_display, "contact form submitted");

        self.presentation.set_form_visible(false);
        self.presentation.set_success_visible(true);
        self.presentation.scroll_into_view(ScrollTarget::SuccessPanel);
        form.reset();
        for field in FieldName::ALL {
            self.presentation.clear_field_error(field);
        }

        let generation = self.success_generation.fetch_add(1, Ordering::AcqRel) + 1;
        let current = Arc::clone(&self.success_generation);
        let presentation = Arc::clone(&self.presentation);
        let state = Arc::clone(&self.state);
        let window = self.config.success_display;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            if current.load(Ordering::Acquire) != generation {
                return;
            }
            presentation.set_success_visible(false);
            presentation.set_form_visible(true);
            let mut state = state.lock();
            if *state == SubmissionState::Succeeded {
                *state = SubmissionState::Idle;
            }
        });
    }

    fn display(&self, field: FieldName, result: &ValidationResult) {
        match result.message() {
            Some(message) if !result.is_valid() => {
                self.presentation.show_field_error(field, message);
            }
            _ => self.presentation.clear_field_error(field),
        }
    }
}

/// Holds the busy flag; released on drop.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Submitting visuals for the lifetime of the transport call.
struct SubmittingGuard<'a> {
    presentation: &'a dyn Presentation,
    state: &'a Mutex<SubmissionState>,
}

impl<'a> SubmittingGuard<'a> {
    fn enter(presentation: &'a dyn Presentation, state: &'a Mutex<SubmissionState>) -> Self {
        *state.lock() = SubmissionState::Submitting;
        presentation.set_submit_enabled(false);
        presentation.set_idle_label_visible(false);
        presentation.set_loading_visible(true);
        Self {
            presentation,
            state,
        }
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.presentation.set_submit_enabled(true);
        self.presentation.set_idle_label_visible(true);
        self.presentation.set_loading_visible(false);

        let mut state = self.state.lock();
        if *state == SubmissionState::Submitting {
            *state = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::presentation::MemoryPresentation;
    use crate::transport::SimulatedTransport;

    fn controller(presentation: &Arc<MemoryPresentation>) -> SubmissionController {
        SubmissionController::new(
            Arc::new(SimulatedTransport::succeeding(Duration::ZERO)),
            presentation.clone(),
            FormConfig::default(),
        )
    }

    #[test]
    fn test_busy_guard_is_exclusive() {
        let flag = AtomicBool::new(false);
        let first = BusyGuard::acquire(&flag);
        assert!(first.is_some());
        assert!(BusyGuard::acquire(&flag).is_none());
        drop(first);
        assert!(BusyGuard::acquire(&flag).is_some());
    }

    #[test]
    fn test_on_blur_populates_and_clears_the_slot() {
        let presentation = Arc::new(MemoryPresentation::new());
        let controller = controller(&presentation);
        let mut form = ContactForm::new();

        let result = controller.on_blur(&form, FieldName::Name);
        assert!(!result.is_valid());
        assert_eq!(
            presentation.error(FieldName::Name).as_deref(),
            Some("Nome é obrigatório")
        );

        form.input(FieldName::Name, "Ana");
        assert!(controller.on_blur(&form, FieldName::Name).is_valid());
        assert_eq!(presentation.error(FieldName::Name), None);
    }

    #[test]
    fn test_validate_all_reports_in_display_order() {
        let presentation = Arc::new(MemoryPresentation::new());
        let controller = controller(&presentation);
        let form = ContactForm::new().with(FieldName::Name, "Ana Silva");

        let failures = controller.validate_all(&form);
        let fields: Vec<_> = failures.iter().map(|(field, _)| *field).collect();
        assert_eq!(
            fields,
            vec![
                FieldName::Email,
                FieldName::Phone,
                FieldName::Message,
                FieldName::Privacy
            ]
        );
        assert_eq!(presentation.snapshot().errors.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_returns_to_idle_after_failure_is_handled() {
        let presentation = Arc::new(MemoryPresentation::new());
        let controller = SubmissionController::new(
            Arc::new(SimulatedTransport::rejecting(Duration::ZERO, "não")),
            presentation.clone(),
            FormConfig::default(),
        );
        let mut form = ContactForm::new()
            .with(FieldName::Name, "Ana Silva")
            .with(FieldName::Email, "ana@x.com")
            .with(FieldName::Phone, "11912345678")
            .with(FieldName::Message, "Preciso de ajuda urgente")
            .with(FieldName::Privacy, true);

        let outcome = controller.submit(&mut form).await;
        assert_eq!(
            outcome,
            SubmissionOutcome::TransportFailure(TransportError::rejected("não"))
        );
        assert_eq!(controller.state(), SubmissionState::Failed);
        assert!(!controller.is_submitting());
    }
}
