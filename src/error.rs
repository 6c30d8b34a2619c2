//! All errors related to linting a commit message.

use std::fmt;

/// The error returned when parsing a commit message fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    kind: ParseErrorKind,

    line: Option<String>,
}

impl ParseError {
    /// Create a new error from a `ParseErrorKind`.
    pub(crate) fn new(kind: ParseErrorKind) -> Self {
        Self { kind, line: None }
    }

    /// Attach the line that failed to parse.
    pub(crate) fn with_line(mut self, line: &str) -> Self {
        self.line = Some(line.to_owned());
        self
    }

    /// The kind of error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The offending line, if the failure can be pinned to one.
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)?;
        if let Some(line) = &self.line {
            write!(f, ": {line:?}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// All possible error kinds returned when parsing a commit message.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The message is empty, or its first line is blank.
    EmptyMessage,

    /// The header does not match `<type>[(<scope>)][!]: <description>`.
    MalformedHeader,

    /// A footer key outside of the recognized set.
    InvalidFooter,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::EmptyMessage => f.write_str("empty message"),
            ParseErrorKind::MalformedHeader => f.write_str("malformed header"),
            ParseErrorKind::InvalidFooter => f.write_str("unrecognized footer key"),
        }
    }
}

/// The first lint rule a commit message violates.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    /// The type is not part of the accepted vocabulary.
    InvalidType {
        /// The type as written.
        given: String,
    },

    /// The type is known, but not written in lowercase.
    InvalidCasing {
        /// The type as written.
        given: String,
        /// The lowercase form.
        expected: String,
    },

    /// The scope is not written in lowercase.
    InvalidScopeCasing {
        /// The scope as written.
        given: String,
        /// The lowercase form.
        expected: String,
    },

    /// The subject is empty, starts with an uppercase letter or ends with a
    /// period.
    InvalidSubject,

    /// The subject is longer than the allowed number of characters.
    SubjectTooLong {
        /// Length of the subject in characters.
        length: usize,
        /// The maximum allowed length.
        max: usize,
    },
}

impl ValidationError {
    /// Name of the violated rule.
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::InvalidType { .. } | ValidationError::InvalidCasing { .. } => "type",
            ValidationError::InvalidScopeCasing { .. } => "scope",
            ValidationError::InvalidSubject => "subject",
            ValidationError::SubjectTooLong { .. } => "length",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidType { given } => {
                write!(f, "invalid commit message type: {given}")
            }
            ValidationError::InvalidCasing { given, expected } => {
                write!(
                    f,
                    "invalid commit message casing, \"{given}\" should be \"{expected}\""
                )
            }
            ValidationError::InvalidScopeCasing { given, expected } => {
                write!(
                    f,
                    "invalid commit message scope casing, \"{given}\" should be \"{expected}\""
                )
            }
            ValidationError::InvalidSubject => f.write_str(
                "commit message subject should be lowercased & not end with a period(.)",
            ),
            ValidationError::SubjectTooLong { length, max } => {
                write!(
                    f,
                    "commit message exceeds {max} characters, current length: {length}"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Either half of the lint pipeline failing.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The message could not be parsed.
    Parse(ParseError),

    /// The message parsed, but broke a lint rule.
    Validation(ValidationError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => fmt::Display::fmt(err, f),
            Error::Validation(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Validation(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}
