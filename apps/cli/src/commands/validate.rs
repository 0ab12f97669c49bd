use std::process::ExitCode;

use contact_validator::FieldName;

use super::{EXIT_INVALID, EXIT_OK};
use crate::cli::ValidateArgs;

pub fn validate(args: &ValidateArgs) -> anyhow::Result<ExitCode> {
    if args.field.parse::<FieldName>().is_err() {
        tracing::warn!(field = %args.field, "no rule for this field, treating it as valid");
    }

    let result = contact_validator::validate(&args.field, &args.value, Some(args.checked));

    if args.json {
        println!("{}", serde_json::to_string(&result)?);
    } else if let Some(message) = result.message() {
        println!("{}: {message}", result.field());
    } else {
        println!("{}: ok", result.field());
    }

    Ok(ExitCode::from(if result.is_valid() {
        EXIT_OK
    } else {
        EXIT_INVALID
    }))
}
