use std::process::ExitCode;
use std::sync::Arc;

use contact_form::{
    ContactForm, FieldName, FormConfig, SimulatedTransport, SubmissionController,
    SubmissionOutcome, SubmissionTransport,
};

use super::{EXIT_INVALID, EXIT_OK, EXIT_TRANSPORT};
use crate::cli::SubmitArgs;
use crate::console::ConsolePresentation;

/// Reason given by the transport under `--reject`.
const REJECTION_REASON: &str = "rejected on request";

pub async fn submit(args: &SubmitArgs, config: FormConfig) -> ExitCode {
    let transport: Arc<dyn SubmissionTransport> = if args.reject {
        Arc::new(SimulatedTransport::rejecting(
            config.simulated_delay,
            REJECTION_REASON,
        ))
    } else {
        Arc::new(SimulatedTransport::from_config(&config))
    };
    let controller =
        SubmissionController::new(transport, Arc::new(ConsolePresentation::stdout()), config);

    let mut form = ContactForm::new();
    controller.on_input(&mut form, FieldName::Name, &args.name);
    controller.on_input(&mut form, FieldName::Email, &args.email);
    controller.on_input(&mut form, FieldName::Phone, &args.phone);
    controller.on_input(&mut form, FieldName::Message, &args.message);
    controller.on_toggle(&mut form, args.accept_privacy);

    let outcome = controller.submit(&mut form).await;
    tracing::debug!(?outcome, "submission finished");

    ExitCode::from(match outcome {
        SubmissionOutcome::Succeeded => EXIT_OK,
        SubmissionOutcome::ValidationFailed { .. } => EXIT_INVALID,
        SubmissionOutcome::TransportFailure(_) | SubmissionOutcome::Busy => EXIT_TRANSPORT,
    })
}
