//! Page template parser.
//!
//! Parsing happens in two phases: [`tokenize`] splits the source into tagged
//! tokens, and [`build`] folds the token stream into a [`Template`] tree.
//! [`parse_template`] runs both.

pub mod ast;
pub mod error;
mod lexer;
mod tree;

pub use ast::*;
pub use error::ParseError;
pub use lexer::tokenize;
pub use tree::build;

/// Parse template source into a tree ready for rendering.
///
/// # Example
///
/// ```
/// use timelog::parser::{Node, parse_template};
///
/// let template = parse_template("Hi {{ name }}!").unwrap();
/// assert_eq!(template.nodes[1], Node::Placeholder("name".into()));
/// ```
pub fn parse_template(source: &str) -> Result<Template, ParseError> {
    let tokens = tokenize(source);
    build(source, &tokens)
}
