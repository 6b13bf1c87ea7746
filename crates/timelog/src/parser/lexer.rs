//! Template tokenizer using winnow.
//!
//! Splits template source into literal text and `{{ ... }}` directives.
//! A directive is `{{`, any run of characters other than `{` and `}`, then
//! `}}`. Anything that does not fit that shape, such as `{{ a {b} }}`, stays
//! literal text. Brace balance between ranges is the tree builder's concern.

use winnow::combinator::{alt, delimited};
use winnow::prelude::*;
use winnow::token::{any, take_till, take_while};

use super::ast::{Token, TokenKind};

/// A piece of source recognised by a single parser step.
enum Piece<'i> {
    Text(&'i str),
    Directive { inner: &'i str, raw: &'i str },
}

/// Split template source into tagged tokens, preserving source order.
///
/// Adjacent literal text is merged into a single token, so literal and
/// directive tokens never need to be re-joined. An empty source produces no
/// tokens.
///
/// # Example
///
/// ```
/// use timelog::parser::{TokenKind, tokenize};
///
/// let tokens = tokenize("Hi {{ name }}!");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind, TokenKind::Placeholder("name".into()));
/// assert_eq!(tokens[2].offset, 13);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut input = source;
    let mut tokens: Vec<Token> = Vec::new();

    while !input.is_empty() {
        let offset = source.len() - input.len();
        let Ok(next) = piece(&mut input) else {
            // Unreachable for non-empty input; keep the remainder as text.
            push_literal(&mut tokens, input, offset);
            break;
        };
        match next {
            Piece::Text(text) => push_literal(&mut tokens, text, offset),
            Piece::Directive { inner, raw } => tokens.push(Token {
                kind: classify(inner),
                text: raw.to_string(),
                offset,
            }),
        }
    }

    tokens
}

/// Append literal text, merging it into a preceding literal token.
fn push_literal(tokens: &mut Vec<Token>, text: &str, offset: usize) {
    if let Some(prev) = tokens.last_mut() {
        if prev.kind == TokenKind::Literal {
            prev.text.push_str(text);
            return;
        }
    }
    tokens.push(Token {
        kind: TokenKind::Literal,
        text: text.to_string(),
        offset,
    });
}

/// Parse one piece: a directive, a run of text up to the next `{`, or a
/// lone `{` that does not start a directive.
fn piece<'i>(input: &mut &'i str) -> ModalResult<Piece<'i>> {
    alt((
        directive
            .with_taken()
            .map(|(inner, raw)| Piece::Directive { inner, raw }),
        take_till(1.., '{').map(Piece::Text),
        any.take().map(Piece::Text),
    ))
    .parse_next(input)
}

/// Parse `{{ ... }}`, returning the text between the braces.
fn directive<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited("{{", take_while(0.., |c: char| c != '{' && c != '}'), "}}").parse_next(input)
}

/// Decide what a directive means from the text between its braces.
///
/// Directives are written with one space of padding on each side. Exactly
/// that padding is stripped; an unpadded directive is a placeholder keyed by
/// its whole inner text.
fn classify(inner: &str) -> TokenKind {
    let Some(body) = inner.strip_prefix(' ').and_then(|s| s.strip_suffix(' ')) else {
        return TokenKind::Placeholder(inner.to_string());
    };
    match body {
        "end" => TokenKind::RangeClose,
        "if-nothing" => TokenKind::EmptyMarker,
        _ => match body.strip_prefix("range ") {
            Some(name) => TokenKind::RangeOpen(name.to_string()),
            None => TokenKind::Placeholder(body.to_string()),
        },
    }
}
