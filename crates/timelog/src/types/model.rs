use std::collections::HashMap;

/// The data a template is rendered against.
///
/// A model has two parts:
/// - Scalar fields, looked up by `{{ field }}` placeholders
/// - Named child collections, expanded by `{{ range name }}` sections
///
/// Child collections are ordered; a range renders its children in the order
/// they were added. Field and range names are exact, case-sensitive keys.
///
/// # Example
///
/// ```
/// use timelog::{Model, model, render_str};
///
/// let mut page = Model::new();
/// page.push_child("items", model! { "n" => "1" });
/// page.push_child("items", model! { "n" => "2" });
///
/// let out = render_str("{{ range items }}{{ n }};{{ end }}", &page).unwrap();
/// assert_eq!(out, "1;2;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    /// Field name to scalar value.
    data: HashMap<String, String>,

    /// Range name to ordered child models.
    children: HashMap<String, Vec<Model>>,
}

impl Model {
    /// Returns an empty model with no fields and no child collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a scalar field, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.data.insert(field.into(), value.into());
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Get a scalar field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.data.get(field).map(String::as_str)
    }

    /// Names of all scalar fields, in no particular order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Append a child model to the named collection, creating it if needed.
    pub fn push_child(&mut self, range: impl Into<String>, child: Model) {
        self.children.entry(range.into()).or_default().push(child);
    }

    /// Builder-style: replace the named collection with `children`.
    pub fn with_children(mut self, range: impl Into<String>, children: Vec<Model>) -> Self {
        self.children.insert(range.into(), children);
        self
    }

    /// Get the child models bound to a range name.
    pub fn children(&self, range: &str) -> Option<&[Model]> {
        self.children.get(range).map(Vec::as_slice)
    }
}
