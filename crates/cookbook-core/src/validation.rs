//! Primitive input checks shared by every service.

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::errors::AppError;

/// Rejects ids below 1 with `Invalid <resource> id`.
pub fn ensure_id(id: i64, resource: &str) -> Result<i64, AppError> {
    if id < 1 {
        return Err(AppError::validation(format!("Invalid {resource} id")));
    }
    Ok(id)
}

pub const NO_CHANGES_MESSAGE: &str = "No fields supplied for update";

/// Rejects partial updates that would change nothing.
pub fn ensure_changes(has_changes: bool) -> Result<(), AppError> {
    if !has_changes {
        return Err(AppError::validation(NO_CHANGES_MESSAGE));
    }
    Ok(())
}

/// `validator` custom rule: the string must contain something other than whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Flattens `validator` output into a single, stable message.
///
/// Fields are reported in alphabetical order as `field: message`, joined
/// with `; `. Nested structs are prefixed with their parent field.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts = Vec::new();
    collect(errors, None, &mut parts);
    parts.sort();
    parts.join("; ")
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let name = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed {} check", err.code));
                    out.push(format!("{name}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, Some(&name), out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, Some(&format!("{name}[{index}]")), out);
                }
            }
        }
    }
}
