//! Terminal rendering of the contact form's visible state.

use std::fmt;
use std::io::Write;

use contact_form::{FieldName, Presentation, ScrollTarget};
use parking_lot::Mutex;

/// Shown while the transport call is in flight.
pub const LOADING_LINE: &str = "Enviando...";
/// Shown when the success panel is revealed.
pub const SUCCESS_LINE: &str = "Mensagem enviada com sucesso! Entraremos em contato em breve.";

/// [`Presentation`] that prints slot errors, progress and notices as lines.
///
/// Purely visual toggles (submit control, idle label, form visibility) only
/// reach the log.
#[derive(Debug)]
pub struct ConsolePresentation<W> {
    out: Mutex<W>,
}

impl ConsolePresentation<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsolePresentation<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn line(&self, args: fmt::Arguments<'_>) {
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{args}").and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "failed to write to the console");
        }
    }
}

impl<W: Write + Send> Presentation for ConsolePresentation<W> {
    fn show_field_error(&self, field: FieldName, message: &str) {
        self.line(format_args!("{field}: {message}"));
    }

    fn clear_field_error(&self, field: FieldName) {
        tracing::trace!(field = %field, "error slot cleared");
    }

    fn scroll_into_view(&self, target: ScrollTarget) {
        tracing::debug!(?target, "scroll into view");
    }

    fn set_submit_enabled(&self, enabled: bool) {
        tracing::trace!(enabled, "submit control");
    }

    fn set_idle_label_visible(&self, visible: bool) {
        tracing::trace!(visible, "idle label");
    }

    fn set_loading_visible(&self, visible: bool) {
        if visible {
            self.line(format_args!("{LOADING_LINE}"));
        }
    }

    fn set_form_visible(&self, visible: bool) {
        tracing::trace!(visible, "form panel");
    }

    fn set_success_visible(&self, visible: bool) {
        if visible {
            self.line(format_args!("{SUCCESS_LINE}"));
        }
    }

    fn notify_failure(&self, notice: &str) {
        self.line(format_args!("{notice}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_renders_visible_events_only() {
        let console = ConsolePresentation::new(Vec::new());
        console.show_field_error(FieldName::Email, "E-mail inválido");
        console.clear_field_error(FieldName::Email);
        console.set_submit_enabled(false);
        console.set_loading_visible(true);
        console.set_loading_visible(false);
        console.set_success_visible(true);
        console.set_success_visible(false);
        console.notify_failure("Erro ao enviar mensagem. Tente novamente.");

        let printed = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(
            printed,
            format!(
                "email: E-mail inválido\n{LOADING_LINE}\n{SUCCESS_LINE}\n\
                 Erro ao enviar mensagem. Tente novamente.\n"
            )
        );
    }
}
