//! Personal time logging with a small page template engine.
//!
//! The crate is organised around a parse-then-render pipeline:
//! - [`parser`] splits template text into tagged tokens and builds a
//!   [`Template`] tree with nested `range` sections.
//! - [`interpreter`] renders a template tree against a [`Model`].
//! - [`store`] persists one JSON file per logged [`TimeEntry`].
//! - [`report`] turns stored entries into the model a page renders.

pub mod interpreter;
pub mod parser;
pub mod report;
pub mod store;
pub mod types;

pub use interpreter::{RenderError, TemplateError, compute_suggestions, render, render_str};
pub use parser::{ParseError, Template, parse_template};
pub use report::recent_entries;
pub use store::{EventStore, StoreError};
pub use types::{FormError, Model, TimeEntry};

/// Creates a [`Model`] from `field => value` pairs.
///
/// Values are converted via `Into<String>`, so string slices and owned
/// strings can be mixed freely.
///
/// # Example
///
/// ```
/// use timelog::model;
///
/// let m = model! { "name" => "Ann", "project" => String::from("garden") };
/// assert_eq!(m.get("name"), Some("Ann"));
/// assert_eq!(m.get("project"), Some("garden"));
/// ```
#[macro_export]
macro_rules! model {
    {} => {
        $crate::Model::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut model = $crate::Model::new();
            $(
                model.set($key, $value);
            )+
            model
        }
    };
}
