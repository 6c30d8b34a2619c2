//! Lint rules applied to a parsed [`CommitMessage`].
//!
//! Rules run in a fixed order and the first violation is reported:
//!
//! 1. the type is part of [`Type::KNOWN`] and written in lowercase,
//! 2. the scope, if any, is written in lowercase,
//! 3. the subject does not start with an uppercase letter or end with a period,
//! 4. the subject is at most [`MAX_SUBJECT_LENGTH`] characters long.

use crate::{CommitMessage, Scope, Type, ValidationError};

/// Returned when a commit message passes every rule.
pub const VALID_COMMIT_MESSAGE: &str = "valid commit message";

/// The longest subject, in characters, that passes the length rule.
pub const MAX_SUBJECT_LENGTH: usize = 50;

/// Lint a parsed commit message.
///
/// # Errors
///
/// Returns the first rule the message violates.
pub fn validate(message: &CommitMessage<'_>) -> Result<&'static str, ValidationError> {
    check_type(message.type_())?;
    if let Some(scope) = message.scope() {
        check_scope(scope)?;
    }
    check_subject(message.description())?;
    check_length(message.description())?;

    Ok(VALID_COMMIT_MESSAGE)
}

// See https://github.com/angular/angular/blob/22b96b9/CONTRIBUTING.md#type
fn check_type(ty: Type<'_>) -> Result<(), ValidationError> {
    if !ty.is_known() {
        return Err(ValidationError::InvalidType {
            given: ty.as_str().to_owned(),
        });
    }

    if !ty.is_lowercase() {
        return Err(ValidationError::InvalidCasing {
            given: ty.as_str().to_owned(),
            expected: ty.to_lowercase(),
        });
    }

    Ok(())
}

fn check_scope(scope: Scope<'_>) -> Result<(), ValidationError> {
    if !scope.is_lowercase() {
        return Err(ValidationError::InvalidScopeCasing {
            given: scope.as_str().to_owned(),
            expected: scope.to_lowercase(),
        });
    }

    Ok(())
}

fn check_subject(subject: &str) -> Result<(), ValidationError> {
    let starts_uppercase = subject.chars().next().map_or(true, char::is_uppercase);
    if starts_uppercase || subject.ends_with('.') {
        return Err(ValidationError::InvalidSubject);
    }

    Ok(())
}

fn check_length(subject: &str) -> Result<(), ValidationError> {
    let length = subject.chars().count();
    if length > MAX_SUBJECT_LENGTH {
        return Err(ValidationError::SubjectTooLong {
            length,
            max: MAX_SUBJECT_LENGTH,
        });
    }

    Ok(())
}
