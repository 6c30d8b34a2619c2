//! The parsed commit message and its components.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::parser::parse;
use crate::{ParseError, ParseErrorKind};

/// A commit message, split into its conventional components.
///
/// Values are only built by [`CommitMessage::parse`] or the `new`/`with_*`
/// constructors and are never mutated in place afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitMessage<'a> {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    ty: Type<'a>,
    scope: Option<Scope<'a>>,
    breaking: bool,
    description: &'a str,
    body: String,
    footers: BTreeMap<FooterKey, &'a str>,
}

impl<'a> CommitMessage<'a> {
    /// Parse a raw commit message.
    ///
    /// # Errors
    ///
    /// This function returns an error if the message is empty or the first
    /// line is not a `<type>[(<scope>)][!]: <description>` header.
    pub fn parse(string: &'a str) -> Result<Self, ParseError> {
        let (ty, scope, breaking, description, body, footers) = parse(string)?;

        Ok(Self {
            ty: Type::new_unchecked(ty),
            scope: scope.map(Scope::new_unchecked),
            breaking,
            description,
            body,
            footers,
        })
    }

    /// Assemble a message by hand, e.g. to lint one that was never written
    /// out as text.
    pub fn new(ty: &'a str, description: &'a str) -> Self {
        Self {
            ty: Type::new_unchecked(ty),
            scope: None,
            breaking: false,
            description,
            body: String::new(),
            footers: BTreeMap::new(),
        }
    }

    /// Set the scope. An empty scope means no scope.
    pub fn with_scope(mut self, scope: &'a str) -> Self {
        self.scope = (!scope.is_empty()).then_some(Scope::new_unchecked(scope));
        self
    }

    /// Set the breaking-change marker.
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a footer, replacing any earlier value for the same key.
    pub fn with_footer(mut self, key: FooterKey, value: &'a str) -> Self {
        self.footers.insert(key, value);
        self
    }

    /// The type of the commit.
    pub fn type_(&self) -> Type<'a> {
        self.ty
    }

    /// The optional scope of the commit.
    pub fn scope(&self) -> Option<Scope<'a>> {
        self.scope
    }

    /// The scope, or `""` when there is none.
    pub fn scope_str(&self) -> &'a str {
        self.scope.map(|s| s.as_str()).unwrap_or_default()
    }

    /// Whether the header carries a `!` before the colon, e.g.:
    /// ```text
    /// feat(scope)!: this is a breaking change
    /// ```
    pub fn breaking(&self) -> bool {
        self.breaking
    }

    /// The commit description, also known as the subject.
    pub fn description(&self) -> &'a str {
        self.description
    }

    /// The free-form body between the header and the footers. Empty when
    /// there is none.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// All recognized footers.
    pub fn footers(&self) -> &BTreeMap<FooterKey, &'a str> {
        &self.footers
    }

    /// The value of a single footer.
    pub fn footer(&self, key: FooterKey) -> Option<&'a str> {
        self.footers.get(&key).copied()
    }

    /// The `BREAKING CHANGE` footer, if any.
    pub fn breaking_description(&self) -> Option<&'a str> {
        self.footer(FooterKey::BreakingChange)
    }
}

impl fmt::Display for CommitMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_().as_str())?;

        if let Some(scope) = &self.scope() {
            write!(f, "({scope})")?;
        }

        if self.breaking() {
            f.write_str("!")?;
        }

        write!(f, ": {}", self.description())?;

        if !self.body().is_empty() {
            write!(f, "\n\n{}", self.body())?;
        }

        if !self.footers().is_empty() {
            f.write_str("\n")?;
            for (key, value) in self.footers() {
                write!(f, "\n{key}: {value}")?;
            }
        }

        Ok(())
    }
}

/// A trailer key the linter recognizes.
///
/// Lines shaped like `Key: value` with any other key stay part of the body.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum FooterKey {
    /// "BREAKING CHANGE"
    #[cfg_attr(feature = "serde", serde(rename = "BREAKING CHANGE"))]
    BreakingChange,

    /// "Closes"
    Closes,

    /// "Fixes"
    Fixes,

    /// "Refs"
    Refs,
}

impl FooterKey {
    /// Every recognized key.
    pub const ALL: [FooterKey; 4] = [
        FooterKey::BreakingChange,
        FooterKey::Closes,
        FooterKey::Fixes,
        FooterKey::Refs,
    ];

    /// Access `str` representation of `FooterKey`
    pub fn as_str(self) -> &'static str {
        match self {
            FooterKey::BreakingChange => "BREAKING CHANGE",
            FooterKey::Closes => "Closes",
            FooterKey::Fixes => "Fixes",
            FooterKey::Refs => "Refs",
        }
    }
}

impl Deref for FooterKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<&'_ str> for FooterKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for FooterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl FromStr for FooterKey {
    type Err = ParseError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        FooterKey::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidFooter).with_line(key))
    }
}

macro_rules! unicase_components {
    ($($ty:ident),+) => (
        $(
            /// A component of the conventional commit, compared
            /// case-insensitively.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $ty<'a>(unicase::UniCase<&'a str>);

            impl<'a> $ty<'a> {
                /// See `parse` for ensuring the data is valid.
                pub const fn new_unchecked(value: &'a str) -> Self {
                    $ty(unicase::UniCase::unicode(value))
                }

                /// Access `str` representation
                pub fn as_str(&self) -> &'a str {
                    self.0.into_inner()
                }

                /// Whether the text is written entirely in lowercase.
                pub fn is_lowercase(&self) -> bool {
                    self.as_str() == self.as_str().to_lowercase()
                }
            }

            impl Deref for $ty<'_> {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    self.as_str()
                }
            }

            impl PartialEq<&'_ str> for $ty<'_> {
                fn eq(&self, other: &&str) -> bool {
                    *self == $ty::new_unchecked(*other)
                }
            }

            impl fmt::Display for $ty<'_> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }

            #[cfg(feature = "serde")]
            impl serde::Serialize for $ty<'_> {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self)
                }
            }
        )+
    )
}

unicase_components![Type, Scope];

impl<'a> Type<'a> {
    /// Parse a `str` into a `Type`.
    ///
    /// # Errors
    ///
    /// The text must consist of word characters only.
    pub fn parse(value: &'a str) -> Result<Self, ParseError> {
        use winnow::Parser as _;

        crate::parser::type_
            .parse(value)
            .map(Type::new_unchecked)
            .map_err(|_| ParseError::new(ParseErrorKind::MalformedHeader).with_line(value))
    }

    /// Whether the lowercased type is one of [`Type::KNOWN`].
    pub fn is_known(&self) -> bool {
        let lowered = self.as_str().to_lowercase();
        Type::KNOWN.iter().any(|known| known.as_str() == lowered)
    }
}

/// Accepted commit types
impl Type<'static> {
    /// Commit type for changes to the build system or dependencies.
    pub const BUILD: Type<'static> = Type::new_unchecked("build");
    /// Commit type for changes to CI configuration.
    pub const CI: Type<'static> = Type::new_unchecked("ci");
    /// Possible commit type for changing documentation.
    pub const DOCS: Type<'static> = Type::new_unchecked("docs");
    /// Commit type when introducing new features (correlates with `minor` in semver)
    pub const FEAT: Type<'static> = Type::new_unchecked("feat");
    /// Commit type when patching a bug (correlates with `patch` in semver)
    pub const FIX: Type<'static> = Type::new_unchecked("fix");
    /// Possible commit type for performance optimizations.
    pub const PERF: Type<'static> = Type::new_unchecked("perf");
    /// Possible commit type for refactoring code structure.
    pub const REFACTOR: Type<'static> = Type::new_unchecked("refactor");
    /// Possible commit type for changing code style.
    pub const STYLE: Type<'static> = Type::new_unchecked("style");
    /// Possible commit type for addressing tests.
    pub const TEST: Type<'static> = Type::new_unchecked("test");
    /// Possible commit type for other things.
    pub const CHORE: Type<'static> = Type::new_unchecked("chore");

    /// The full vocabulary accepted by the linter.
    pub const KNOWN: [Type<'static>; 10] = [
        Type::BUILD,
        Type::CI,
        Type::DOCS,
        Type::FEAT,
        Type::FIX,
        Type::PERF,
        Type::REFACTOR,
        Type::STYLE,
        Type::TEST,
        Type::CHORE,
    ];
}

impl<'a> Scope<'a> {
    /// Parse a `str` into a `Scope`.
    ///
    /// # Errors
    ///
    /// The text must be non-empty and free of parentheses and newlines.
    pub fn parse(value: &'a str) -> Result<Self, ParseError> {
        use winnow::Parser as _;

        crate::parser::scope
            .parse(value)
            .map(Scope::new_unchecked)
            .map_err(|_| ParseError::new(ParseErrorKind::MalformedHeader).with_line(value))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use indoc::indoc;
    #[cfg(feature = "serde")]
    use serde_test::Token;

    #[test]
    fn test_valid_simple_commit() {
        let commit = CommitMessage::parse("type(my scope): hello world").unwrap();

        assert_eq!(commit.type_(), "type");
        assert_eq!(commit.scope().unwrap(), "my scope");
        assert_eq!(commit.description(), "hello world");
        assert!(!commit.breaking());
        assert_eq!(commit.body(), "");
        assert!(commit.footers().is_empty());
    }

    #[test]
    fn test_scopeless_header() {
        let commit = CommitMessage::parse("fix: correct typo").unwrap();

        assert_eq!(Type::FIX, commit.type_());
        assert_eq!(commit.scope(), None);
        assert_eq!(commit.scope_str(), "");
        assert_eq!(commit.description(), "correct typo");
    }

    #[test]
    fn test_trailing_newlines_without_body() {
        let commit = CommitMessage::parse("type: hello world\n\n\n").unwrap();

        assert_eq!(commit.type_(), "type");
        assert_eq!(commit.scope(), None);
        assert_eq!(commit.description(), "hello world");
        assert_eq!(commit.body(), "");
    }

    #[test]
    fn test_parenthetical_statement() {
        let commit = CommitMessage::parse("type: hello world (#1)").unwrap();

        assert_eq!(commit.scope(), None);
        assert_eq!(commit.description(), "hello world (#1)");
    }

    #[test]
    fn test_breaking_change() {
        let commit = CommitMessage::parse("feat!: this is a breaking change").unwrap();
        assert_eq!(Type::FEAT, commit.type_());
        assert!(commit.breaking());
        assert_eq!(commit.breaking_description(), None);

        let commit = CommitMessage::parse("feat(api)!: drop v1").unwrap();
        assert_eq!(commit.scope().unwrap(), "api");
        assert!(commit.breaking());

        let commit = CommitMessage::parse(indoc!(
            "feat: message

            BREAKING CHANGE: breaking change"
        ))
        .unwrap();
        assert!(!commit.breaking());
        assert_eq!(commit.breaking_description(), Some("breaking change"));
    }

    #[test]
    fn test_valid_complex_commit() {
        let commit = CommitMessage::parse(
            "feat(auth): add OAuth login\n\nImplements login with OAuth 2.0.\n\nBREAKING CHANGE: existing login method removed\nFixes: #101",
        )
        .unwrap();

        assert_eq!(commit.type_().as_str(), "feat");
        assert_eq!(commit.scope_str(), "auth");
        assert_eq!(commit.description(), "add OAuth login");
        assert_eq!(commit.body(), "Implements login with OAuth 2.0.");
        assert_eq!(
            commit.footers(),
            &BTreeMap::from([
                (FooterKey::BreakingChange, "existing login method removed"),
                (FooterKey::Fixes, "#101"),
            ])
        );
    }

    #[test]
    fn test_multi_paragraph_body() {
        let commit = CommitMessage::parse(indoc! {"
            chore: improve changelog readability


            Change date notation from YYYY-MM-DD to YYYY.MM.DD to make it a tiny bit
            easier to parse while reading.

            Note: dates in old entries are left alone.

            Refs: #12
            Closes: #13
            Co-Authored-By: Lisa Simpson <lisa@simpsons.fam>
        "})
        .unwrap();

        assert_eq!(
            commit.body(),
            indoc!(
                "Change date notation from YYYY-MM-DD to YYYY.MM.DD to make it a tiny bit
                 easier to parse while reading.

                 Note: dates in old entries are left alone."
            )
        );
        assert_eq!(commit.footer(FooterKey::Refs), Some("#12"));
        assert_eq!(commit.footer(FooterKey::Closes), Some("#13"));
        assert_eq!(commit.footers().len(), 2);
    }

    #[test]
    fn test_header_round_trip() {
        for (ty, scope, description) in [
            ("feat", "parser", "add new feature"),
            ("Fix", "UI", "Handle Resize."),
            ("docs", "a b-c", "x"),
        ] {
            let raw = format!("{ty}({scope}): {description}");
            let commit = CommitMessage::parse(&raw).unwrap();
            assert_eq!(commit.type_().as_str(), ty);
            assert_eq!(commit.scope_str(), scope);
            assert_eq!(commit.description(), description);
        }
    }

    #[test]
    fn test_without_colon() {
        for raw in ["", "feat add", "feat(scope) add", "This is not a conventional commit"] {
            assert!(CommitMessage::parse(raw).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn test_missing_type() {
        let err = CommitMessage::parse(": no type").unwrap_err();

        assert_eq!(ParseErrorKind::MalformedHeader, err.kind());
        assert_eq!(err.line(), Some(": no type"));
    }

    #[test]
    fn test_empty_message() {
        let err = CommitMessage::parse("\n\nfeat: late header").unwrap_err();

        assert_eq!(ParseErrorKind::EmptyMessage, err.kind());
    }

    #[test]
    fn test_display() {
        let raw = "feat(auth)!: add OAuth login\n\nbody\n\nBREAKING CHANGE: old login removed\nRefs: #1";
        let commit = CommitMessage::parse(raw).unwrap();

        assert_eq!(commit.to_string(), raw);
        assert_eq!(CommitMessage::parse(&commit.to_string()).unwrap(), commit);
    }

    #[test]
    fn test_builder() {
        let commit = CommitMessage::new("feat", "add a new feature")
            .with_scope("")
            .with_footer(FooterKey::Refs, "#4");

        assert_eq!(commit.scope(), None);
        assert_eq!(commit.footer(FooterKey::Refs), Some("#4"));
        assert_eq!(commit.to_string(), "feat: add a new feature\n\nRefs: #4");
    }

    #[test]
    fn test_components() {
        assert_eq!(Type::parse("feat").unwrap(), Type::FEAT);
        assert_eq!(Type::parse("FEAT").unwrap(), Type::FEAT);
        assert!(Type::parse("feat!").is_err());
        assert!(Type::new_unchecked("Chore").is_known());
        assert!(!Type::new_unchecked("revert").is_known());
        assert!(!Type::new_unchecked("\u{17F}tyle").is_known());
        assert!(!Type::new_unchecked("Chore").is_lowercase());

        assert_eq!(Scope::parse("my scope").unwrap(), "MY SCOPE");
        assert!(Scope::parse("a(b").is_err());
        assert!(Scope::parse("").is_err());

        assert_eq!("Fixes".parse::<FooterKey>().unwrap(), FooterKey::Fixes);
        assert_eq!(FooterKey::BreakingChange, "BREAKING CHANGE");
        assert!("Reviewed-by".parse::<FooterKey>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_commit_serialize() {
        let commit = CommitMessage::parse("type(my scope): hello world\n\nRefs: #1").unwrap();
        serde_test::assert_ser_tokens(
            &commit,
            &[
                Token::Struct {
                    name: "CommitMessage",
                    len: 6,
                },
                Token::Str("type"),
                Token::Str("type"),
                Token::Str("scope"),
                Token::Some,
                Token::Str("my scope"),
                Token::Str("breaking"),
                Token::Bool(false),
                Token::Str("description"),
                Token::Str("hello world"),
                Token::Str("body"),
                Token::Str(""),
                Token::Str("footers"),
                Token::Map { len: Some(1) },
                Token::UnitVariant {
                    name: "FooterKey",
                    variant: "Refs",
                },
                Token::Str("#1"),
                Token::MapEnd,
                Token::StructEnd,
            ],
        );
    }
}
