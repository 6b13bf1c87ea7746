//! Template tree builder.
//!
//! Folds the flat token stream into nested [`RangeNode`]s by recursive
//! descent. One cursor is shared by every level of the recursion, so a
//! nested range resumes its parent exactly after its own `end`.

use super::ast::{Node, RangeNode, Template, Token, TokenKind};
use super::error::ParseError;

/// Build a template tree from tokens produced by [`tokenize`](super::tokenize).
///
/// `source` is the text the tokens were produced from; it is only used to
/// turn token offsets into line and column numbers for errors.
///
/// # Errors
///
/// Returns an error if:
/// - An `end` marker appears with no open range
/// - The tokens run out while a range is still open
/// - A range has more than one `if-nothing` marker
/// - An `if-nothing` marker appears outside any range
pub fn build(source: &str, tokens: &[Token]) -> Result<Template, ParseError> {
    let mut builder = TreeBuilder {
        source,
        tokens,
        cursor: 0,
    };
    let nodes = builder.build_root()?;
    Ok(Template { nodes })
}

/// Per-range builder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeState {
    CollectingChildren,
    CollectingEmptyText,
}

struct TreeBuilder<'a> {
    source: &'a str,
    tokens: &'a [Token],
    cursor: usize,
}

impl<'a> TreeBuilder<'a> {
    /// Take the next token, advancing the shared cursor.
    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    /// Build the top-level node list. Running out of tokens ends it.
    fn build_root(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        while let Some(token) = self.advance() {
            match &token.kind {
                TokenKind::RangeOpen(name) => {
                    let range = self.build_range(name, token)?;
                    nodes.push(Node::Range(range));
                }
                TokenKind::RangeClose => {
                    let (line, column) = self.position(token);
                    return Err(ParseError::UnmatchedEnd { line, column });
                }
                TokenKind::EmptyMarker => {
                    let (line, column) = self.position(token);
                    return Err(ParseError::EmptyMarkerOutsideRange { line, column });
                }
                TokenKind::Literal => nodes.push(Node::Literal(token.text.clone())),
                TokenKind::Placeholder(field) => nodes.push(Node::Placeholder(field.clone())),
            }
        }
        Ok(nodes)
    }

    /// Build a range whose opening token has just been consumed, up to and
    /// including its matching `end`.
    fn build_range(&mut self, name: &str, opener: &Token) -> Result<RangeNode, ParseError> {
        let mut range = RangeNode {
            name: name.to_string(),
            ..RangeNode::default()
        };
        let mut state = RangeState::CollectingChildren;

        while let Some(token) = self.advance() {
            match (&token.kind, state) {
                // Ranges are recognised before fallback capture, even after `if-nothing`.
                (TokenKind::RangeOpen(inner), _) => {
                    let child = self.build_range(inner, token)?;
                    range.children.push(Node::Range(child));
                }
                (TokenKind::RangeClose, _) => return Ok(range),
                (TokenKind::EmptyMarker, RangeState::CollectingChildren) => {
                    state = RangeState::CollectingEmptyText;
                }
                (TokenKind::EmptyMarker, RangeState::CollectingEmptyText) => {
                    let (line, column) = self.position(token);
                    return Err(ParseError::DuplicateEmptyMarker {
                        range: range.name,
                        line,
                        column,
                    });
                }
                (
                    TokenKind::Literal | TokenKind::Placeholder(_),
                    RangeState::CollectingEmptyText,
                ) => range.empty.push_str(&token.text),
                (TokenKind::Literal, RangeState::CollectingChildren) => {
                    range.children.push(Node::Literal(token.text.clone()));
                }
                (TokenKind::Placeholder(field), RangeState::CollectingChildren) => {
                    range.children.push(Node::Placeholder(field.clone()));
                }
            }
        }

        let (line, column) = self.position(opener);
        Err(ParseError::UnclosedRange {
            name: range.name,
            line,
            column,
        })
    }

    fn position(&self, token: &Token) -> (usize, usize) {
        calculate_position(self.source, token.offset)
    }
}

/// Calculate 1-based line and column from a byte offset into the source.
fn calculate_position(source: &str, offset: usize) -> (usize, usize) {
    let consumed = source.get(..offset).unwrap_or(source);
    let line = consumed.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed.rfind('\n') {
        Some(pos) => consumed[pos + 1..].chars().count() + 1,
        None => consumed.chars().count() + 1,
    };
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_first_line() {
        assert_eq!(calculate_position("abc", 0), (1, 1));
        assert_eq!(calculate_position("abc", 2), (1, 3));
    }

    #[test]
    fn position_after_newlines() {
        let source = "one\ntwo\nthree";
        assert_eq!(calculate_position(source, 4), (2, 1));
        assert_eq!(calculate_position(source, 10), (3, 3));
    }

    #[test]
    fn position_counts_characters_not_bytes() {
        assert_eq!(calculate_position("héllo", 3), (1, 3));
    }
}
