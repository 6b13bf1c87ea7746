//! Public token and tree types for page templates.
//!
//! These types are public so tooling (such as the `check` command) can
//! inspect templates without rendering them.

/// What a token means to the tree builder.
///
/// Directives are classified once, when the source is tokenized, so later
/// stages never re-inspect raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Plain text outside any directive.
    Literal,
    /// `{{ field }}`: substituted from the model's scalar fields.
    Placeholder(String),
    /// `{{ range name }}`: opens a repeated section.
    RangeOpen(String),
    /// `{{ end }}`: closes the nearest open range.
    RangeClose,
    /// `{{ if-nothing }}`: starts the enclosing range's fallback text.
    EmptyMarker,
}

/// A fragment of template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of this token, braces included for directives.
    pub text: String,
    /// Byte offset of the token in the template source.
    pub offset: usize,
}

/// A node of a parsed template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, emitted verbatim.
    Literal(String),
    /// A field looked up in the model at render time.
    Placeholder(String),
    /// A repeated section bound to a named child collection.
    Range(RangeNode),
}

/// A `{{ range name }} ... {{ end }}` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeNode {
    /// The range name, matched against the model's child collections.
    pub name: String,
    /// Nodes rendered once per child model.
    pub children: Vec<Node>,
    /// Raw text between `{{ if-nothing }}` and `{{ end }}`.
    ///
    /// Emitted in place of the section when its collection is missing or
    /// empty. Empty when the section has no `if-nothing` marker.
    pub empty: String,
}

/// A parsed template: the top-level sequence of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    pub nodes: Vec<Node>,
}

impl Template {
    /// Names of every range in the template, outermost first, in source order.
    pub fn range_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_range_names(&self.nodes, &mut names);
        names
    }
}

fn collect_range_names<'a>(nodes: &'a [Node], names: &mut Vec<&'a str>) {
    for node in nodes {
        if let Node::Range(range) = node {
            names.push(&range.name);
            collect_range_names(&range.children, names);
        }
    }
}
