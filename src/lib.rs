//! A linter for commit messages following the [Conventional Commit]
//! specification.
//!
//! [conventional commit]: https://www.conventionalcommits.org
//!
//! # Example
//!
//! ```rust
//! use indoc::indoc;
//!
//! let message = indoc!("
//!     feat(auth)!: add OAuth login
//!
//!     Implements login with OAuth 2.0. The old form-based login is gone,
//!     see the migration notes for details.
//!
//!     BREAKING CHANGE: existing login method removed
//!     Fixes: #101
//! ");
//!
//! let commit = crisp::CommitMessage::parse(message).unwrap();
//!
//! // You can access all components of the header.
//! assert_eq!(commit.type_(), crisp::FEAT);
//! assert_eq!(commit.scope().unwrap(), "auth");
//! assert_eq!(commit.description(), "add OAuth login");
//! assert!(commit.breaking());
//!
//! // The free-form body.
//! assert!(commit.body().starts_with("Implements login"));
//!
//! // And the recognized footers.
//! assert_eq!(commit.footer(crisp::FooterKey::Fixes), Some("#101"));
//!
//! // The parsed message is then linted against a fixed set of rules.
//! assert_eq!(crisp::validate(&commit), Ok(crisp::VALID_COMMIT_MESSAGE));
//!
//! let commit = crisp::CommitMessage::parse("Feat: add OAuth login").unwrap();
//! assert_eq!(
//!     crisp::validate(&commit).unwrap_err().to_string(),
//!     r#"invalid commit message casing, "Feat" should be "feat""#,
//! );
//! ```

#![warn(missing_docs)]

mod commit;
mod error;
mod parser;
mod validator;

pub use commit::{CommitMessage, FooterKey, Scope, Type};
pub use error::{Error, ParseError, ParseErrorKind, ValidationError};
pub use validator::{validate, MAX_SUBJECT_LENGTH, VALID_COMMIT_MESSAGE};

/// Commit type for changes to the build system or dependencies.
pub const BUILD: Type<'static> = Type::BUILD;
/// Commit type for changes to CI configuration.
pub const CI: Type<'static> = Type::CI;
/// Possible commit type for changing documentation.
pub const DOCS: Type<'static> = Type::DOCS;
/// Commit type when introducing new features (correlates with `minor` in semver)
pub const FEAT: Type<'static> = Type::FEAT;
/// Commit type when patching a bug (correlates with `patch` in semver)
pub const FIX: Type<'static> = Type::FIX;
/// Possible commit type for performance optimizations.
pub const PERF: Type<'static> = Type::PERF;
/// Possible commit type for refactoring code structure.
pub const REFACTOR: Type<'static> = Type::REFACTOR;
/// Possible commit type for changing code style.
pub const STYLE: Type<'static> = Type::STYLE;
/// Possible commit type for addressing tests.
pub const TEST: Type<'static> = Type::TEST;
/// Possible commit type for other things.
pub const CHORE: Type<'static> = Type::CHORE;

/// Parse and validate a raw commit message in one go.
///
/// # Errors
///
/// Returns the parse failure, or the first lint rule the message violates.
pub fn lint(raw: &str) -> Result<&'static str, Error> {
    let message = CommitMessage::parse(raw)?;
    Ok(validate(&message)?)
}
