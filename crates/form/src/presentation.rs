//! Presentation port.
//!
//! Everything the user can see is changed through [`Presentation`]: error
//! slots, the submit control, the loading indicator, the form and success
//! panels, and failure notices. [`MemoryPresentation`] records those changes
//! for tests and headless use.

use std::collections::BTreeMap;

use contact_validator::FieldName;
use parking_lot::Mutex;

/// What a scroll request points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollTarget {
    /// The error slot of a field.
    FieldError(FieldName),
    /// The success panel.
    SuccessPanel,
}

/// Visible surface of the contact form.
pub trait Presentation: Send + Sync {
    /// Show `message` in the field's error slot and mark the field invalid.
    fn show_field_error(&self, field: FieldName, message: &str);

    /// Empty the field's error slot and drop the invalid mark.
    fn clear_field_error(&self, field: FieldName);

    /// Bring `target` into view, centered.
    fn scroll_into_view(&self, target: ScrollTarget);

    fn set_submit_enabled(&self, enabled: bool);

    fn set_idle_label_visible(&self, visible: bool);

    fn set_loading_visible(&self, visible: bool);

    fn set_form_visible(&self, visible: bool);

    fn set_success_visible(&self, visible: bool);

    /// Surface a transient notice about a failed submission.
    fn notify_failure(&self, notice: &str);
}

/// One recorded presentation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationEvent {
    FieldError { field: FieldName, message: String },
    FieldCleared(FieldName),
    Scrolled(ScrollTarget),
    SubmitEnabled(bool),
    IdleLabelVisible(bool),
    LoadingVisible(bool),
    FormVisible(bool),
    SuccessVisible(bool),
    FailureNotice(String),
}

/// Current state of a [`MemoryPresentation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationSnapshot {
    /// Populated error slots.
    pub errors: BTreeMap<FieldName, String>,
    pub submit_enabled: bool,
    pub idle_label_visible: bool,
    pub loading_visible: bool,
    pub form_visible: bool,
    pub success_visible: bool,
    /// Failure notices, oldest first.
    pub notices: Vec<String>,
    /// Last scroll request.
    pub scrolled_to: Option<ScrollTarget>,
}

impl Default for PresentationSnapshot {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
            submit_enabled: true,
            idle_label_visible: true,
            loading_visible: false,
            form_visible: true,
            success_visible: false,
            notices: Vec::new(),
            scrolled_to: None,
        }
    }
}

impl PresentationSnapshot {
    /// Whether the submit control shows its idle look.
    pub fn is_idle(&self) -> bool {
        self.submit_enabled && self.idle_label_visible && !self.loading_visible
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: PresentationSnapshot,
    events: Vec<PresentationEvent>,
}

/// In-memory [`Presentation`] that records state and an ordered event log.
///
/// Starts with the form shown, the submit control enabled and every slot
/// empty.
#[derive(Debug, Default)]
pub struct MemoryPresentation {
    inner: Mutex<Inner>,
}

impl MemoryPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> PresentationSnapshot {
        self.inner.lock().state.clone()
    }

    /// Message in a field's error slot, if any.
    pub fn error(&self, field: FieldName) -> Option<String> {
        self.inner.lock().state.errors.get(&field).cloned()
    }

    /// Every call received so far, in order.
    pub fn events(&self) -> Vec<PresentationEvent> {
        self.inner.lock().events.clone()
    }

    /// Whether `event` was ever recorded.
    pub fn saw(&self, event: &PresentationEvent) -> bool {
        self.inner.lock().events.contains(event)
    }

    fn record(&self, event: PresentationEvent, apply: impl FnOnce(&mut PresentationSnapshot)) {
        let mut inner = self.inner.lock();
        apply(&mut inner.state);
        inner.events.push(event);
    }
}

impl Presentation for MemoryPresentation {
    fn show_field_error(&self, field: FieldName, message: &str) {
        self.record(
            PresentationEvent::FieldError {
                field,
                message: message.to_string(),
            },
            |state| {
                state.errors.insert(field, message.to_string());
            },
        );
    }

    fn clear_field_error(&self, field: FieldName) {
        self.record(PresentationEvent::FieldCleared(field), |state| {
            state.errors.remove(&field);
        });
    }

    fn scroll_into_view(&self, target: ScrollTarget) {
        self.record(PresentationEvent::Scrolled(target), |state| {
            state.scrolled_to = Some(target);
        });
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.record(PresentationEvent::SubmitEnabled(enabled), |state| {
            state.submit_enabled = enabled;
        });
    }

    fn set_idle_label_visible(&self, visible: bool) {
        self.record(PresentationEvent::IdleLabelVisible(visible), |state| {
            state.idle_label_visible = visible;
        });
    }

    fn set_loading_visible(&self, visible: bool) {
        self.record(PresentationEvent::LoadingVisible(visible), |state| {
            state.loading_visible = visible;
        });
    }

    fn set_form_visible(&self, visible: bool) {
        self.record(PresentationEvent::FormVisible(visible), |state| {
            state.form_visible = visible;
        });
    }

    fn set_success_visible(&self, visible: bool) {
        self.record(PresentationEvent::SuccessVisible(visible), |state| {
            state.success_visible = visible;
        });
    }

    fn notify_failure(&self, notice: &str) {
        self.record(PresentationEvent::FailureNotice(notice.to_string()), |state| {
            state.notices.push(notice.to_string());
        });
    }
}
