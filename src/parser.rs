use std::collections::BTreeMap;

use winnow::ascii::space0;
use winnow::combinator::{delimited, opt, preceded, trace};
use winnow::token::{rest, take_till, take_while};
use winnow::{ModalResult, Parser};

use crate::commit::FooterKey;
use crate::{ParseError, ParseErrorKind};

type CommitDetails<'a> = (
    &'a str,
    Option<&'a str>,
    bool,
    &'a str,
    String,
    BTreeMap<FooterKey, &'a str>,
);

pub(crate) fn parse(raw: &str) -> Result<CommitDetails<'_>, ParseError> {
    let mut lines = raw.lines();
    let summary_line = match lines.next() {
        Some(line) if !line.trim().is_empty() => line.strip_suffix('\r').unwrap_or(line),
        _ => return Err(ParseError::new(ParseErrorKind::EmptyMessage)),
    };

    let (ty, scope, breaking, description) = trace("summary", summary)
        .parse(summary_line)
        .map_err(|_| ParseError::new(ParseErrorKind::MalformedHeader).with_line(summary_line))?;

    let (body, footers) = body_and_footers(lines);

    Ok((ty, scope, breaking, description, body, footers))
}

// <newline>         ::= [<CR>], <LF>
fn is_line_ending(c: char) -> bool {
    c == '\n' || c == '\r'
}

// <parens>          ::= "(" | ")"
fn is_parens(c: char) -> bool {
    c == '(' || c == ')'
}

// <word>            ::= <ASCII letter> | <ASCII digit> | "_"
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// <type>            ::= <word>+
pub(crate) fn type_<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    trace("type", take_while(1.., is_word)).parse_next(i)
}

// <scope>           ::= <any UTF8-octets except newline or parens>+
pub(crate) fn scope<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    trace(
        "scope",
        take_while(1.., |c: char| !is_line_ending(c) && !is_parens(c)),
    )
    .parse_next(i)
}

// <summary>         ::= <type>, ["(", <scope>, ")"], ["!"], ":", (" " | <TAB>)*, <text>
fn summary<'i>(i: &mut &'i str) -> ModalResult<(&'i str, Option<&'i str>, bool, &'i str)> {
    let (ty, scope, breaking, description) = (
        type_,
        opt(delimited('(', scope, ')')),
        opt('!'),
        preceded((':', space0), trace("description", text)),
    )
        .parse_next(i)?;
    Ok((ty, scope, breaking.is_some(), description))
}

// <text>            ::= <any UTF8-octets except LF>+
fn text<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c != '\n').parse_next(i)
}

// <footer>          ::= <footer-key>, ":", <value>
fn footer<'i>(i: &mut &'i str) -> ModalResult<(FooterKey, &'i str)> {
    let (key, _, value) = (footer_key, ':', rest).parse_next(i)?;
    Ok((key, value.trim()))
}

// <footer-key>      ::= <whitespace>*, ("BREAKING CHANGE" | "Closes" | "Fixes" | "Refs"), <whitespace>*
fn footer_key(i: &mut &str) -> ModalResult<FooterKey> {
    trace(
        "footer_key",
        take_till(1.., ':').verify_map(|key: &str| key.trim().parse::<FooterKey>().ok()),
    )
    .parse_next(i)
}

/// Split everything after the summary into a body and trailing footers.
///
/// The first recognized footer ends the body: from then on blank lines and
/// lines that are not footers are dropped.
fn body_and_footers<'a>(
    lines: impl Iterator<Item = &'a str>,
) -> (String, BTreeMap<FooterKey, &'a str>) {
    let mut body = Vec::new();
    let mut footers = BTreeMap::new();

    for line in lines.map(str::trim) {
        if let Ok((key, value)) = footer.parse(line) {
            footers.insert(key, value);
            continue;
        }

        if footers.is_empty() {
            body.push(line);
        }
    }

    (body.join("\n").trim().to_owned(), footers)
}
