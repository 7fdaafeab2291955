use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use super::app_error::{ValidationIssue, CODE_REQUIRED};
use crate::api::dtos::MISSING_FIELD_MESSAGE;

/// Flattens nested `validator` output into one issue per failed rule.
/// Struct fields are joined with `.` and list entries carry their index,
/// e.g. `proof_list[3].media_name`.
pub(crate) fn collect_validation_issues(
    prefix: Option<&str>,
    errors: &ValidationErrors,
    out: &mut Vec<ValidationIssue>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| ValidationIssue {
                    field: path.clone(),
                    message: issue_message(&path, error),
                    code: error.code.to_string(),
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_issues(Some(&path), nested, out);
            }
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    let entry_path = format!("{path}[{index}]");
                    collect_validation_issues(Some(&entry_path), nested, out);
                }
            }
        }
    }
}

fn issue_message(path: &str, error: &ValidationError) -> String {
    match (&error.message, error.code.as_ref()) {
        (Some(message), _) => message.to_string(),
        (None, CODE_REQUIRED) => MISSING_FIELD_MESSAGE.to_string(),
        (None, _) => format!("{path} is invalid"),
    }
}
