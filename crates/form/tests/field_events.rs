//! Blur, input and toggle handling keeps the error slots consistent with the
//! field values.

use std::sync::Arc;
use std::time::Duration;

use contact_form::PresentationEvent;
use contact_form::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn setup() -> (SubmissionController, Arc<MemoryPresentation>) {
    let presentation = Arc::new(MemoryPresentation::new());
    let controller = SubmissionController::new(
        Arc::new(SimulatedTransport::succeeding(Duration::ZERO)),
        presentation.clone(),
        FormConfig::default(),
    );
    (controller, presentation)
}

#[rstest]
#[case(FieldName::Name, "", "Nome é obrigatório")]
#[case(FieldName::Name, "A", "Nome deve ter pelo menos 2 caracteres")]
#[case(FieldName::Email, "", "E-mail é obrigatório")]
#[case(FieldName::Email, "a@@b.com", "E-mail inválido")]
#[case(FieldName::Phone, "", "Telefone é obrigatório")]
#[case(
    FieldName::Phone,
    "119123",
    "Telefone inválido. Use o formato (11) 12345-6789"
)]
#[case(FieldName::Message, "   ", "Mensagem é obrigatória")]
#[case(
    FieldName::Message,
    "curta",
    "Mensagem deve ter pelo menos 10 caracteres"
)]
fn blur_shows_the_field_message(
    #[case] field: FieldName,
    #[case] raw: &str,
    #[case] expected: &str,
) {
    let (controller, presentation) = setup();
    let mut form = ContactForm::new();
    controller.on_input(&mut form, field, raw);

    let result = controller.on_blur(&form, field);

    assert!(!result.is_valid());
    assert_eq!(result.message(), Some(expected));
    assert_eq!(presentation.error(field).as_deref(), Some(expected));
}

#[test]
fn input_clears_only_its_own_slot() {
    let (controller, presentation) = setup();
    let mut form = ContactForm::new();
    controller.on_blur(&form, FieldName::Name);
    controller.on_blur(&form, FieldName::Email);

    controller.on_input(&mut form, FieldName::Name, "A");

    assert_eq!(presentation.error(FieldName::Name), None);
    assert_eq!(
        presentation.error(FieldName::Email).as_deref(),
        Some("E-mail é obrigatório")
    );
    // Input alone does not validate.
    assert_eq!(form.text(FieldName::Name), "A");
}

#[test]
fn phone_input_is_masked_as_typed() {
    let (controller, _presentation) = setup();
    let mut form = ContactForm::new();

    let mut typed = String::new();
    let mut shown = Vec::new();
    for digit in "11987654321".chars() {
        typed = format!("{}{digit}", form.text(FieldName::Phone));
        controller.on_input(&mut form, FieldName::Phone, &typed);
        shown.push(form.text(FieldName::Phone).to_string());
    }

    assert_eq!(typed, "(11) 9876-54321");
    assert_eq!(
        shown,
        vec![
            "(1",
            "(11",
            "(11) 9",
            "(11) 98",
            "(11) 987",
            "(11) 9876",
            "(11) 9876-5",
            "(11) 9876-54",
            "(11) 9876-543",
            "(11) 9876-5432",
            "(11) 98765-4321",
        ]
    );
    assert!(controller.on_blur(&form, FieldName::Phone).is_valid());
}

#[test]
fn toggle_clears_privacy_slot_and_blur_revalidates() {
    let (controller, presentation) = setup();
    let mut form = ContactForm::new();

    controller.on_blur(&form, FieldName::Privacy);
    assert_eq!(
        presentation.error(FieldName::Privacy).as_deref(),
        Some("Você deve aceitar os termos de privacidade")
    );

    controller.on_toggle(&mut form, true);
    assert_eq!(presentation.error(FieldName::Privacy), None);
    assert!(form.value(FieldName::Privacy).is_checked());
    assert!(controller.on_blur(&form, FieldName::Privacy).is_valid());

    controller.on_toggle(&mut form, false);
    assert!(!controller.on_blur(&form, FieldName::Privacy).is_valid());
}

#[test]
fn valid_blur_clears_a_stale_error() {
    let (controller, presentation) = setup();
    let mut form = ContactForm::new();
    controller.on_blur(&form, FieldName::Email);

    form.input(FieldName::Email, "a@b.co");
    controller.on_blur(&form, FieldName::Email);

    assert_eq!(presentation.error(FieldName::Email), None);
    assert_eq!(
        presentation.events().last(),
        Some(&PresentationEvent::FieldCleared(FieldName::Email))
    );
}
