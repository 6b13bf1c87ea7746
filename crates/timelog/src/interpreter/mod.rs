//! Template renderer.
//!
//! Walks a parsed [`Template`](crate::parser::Template) against a
//! [`Model`](crate::types::Model), substituting placeholders from scalar
//! fields and expanding ranges over named child collections.

mod error;
mod renderer;

pub use error::{RenderError, TemplateError, compute_suggestions};
pub use renderer::{render, render_str};
