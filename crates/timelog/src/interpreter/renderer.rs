//! Rendering of template trees.

use crate::interpreter::error::{RenderError, TemplateError, compute_suggestions};
use crate::parser::{Node, RangeNode, Template, parse_template};
use crate::types::Model;

/// Render a template tree against a model.
///
/// Output is the concatenation, in order, of each node's contribution:
/// - Literal text is copied verbatim
/// - A placeholder is replaced by the model's field of the same name
/// - A range is rendered once per child model in its named collection, or
///   replaced by its `if-nothing` text when the collection is absent or empty
///
/// Neither the template nor the model is modified, so rendering the same
/// pair twice yields identical output.
///
/// # Errors
///
/// Returns [`RenderError::MissingField`] if a placeholder names a field the
/// model at that level does not supply. There is no blank default.
pub fn render(template: &Template, model: &Model) -> Result<String, RenderError> {
    let mut output = String::new();
    let mut scope = Vec::new();
    render_nodes(&template.nodes, model, &mut scope, &mut output)?;
    Ok(output)
}

/// Parse and render template source in one step.
///
/// # Example
///
/// ```
/// use timelog::{model, render_str};
///
/// let page = render_str("Hi {{ name }}!", &model! { "name" => "Ann" }).unwrap();
/// assert_eq!(page, "Hi Ann!");
/// ```
pub fn render_str(source: &str, model: &Model) -> Result<String, TemplateError> {
    let template = parse_template(source)?;
    Ok(render(&template, model)?)
}

impl Template {
    /// Render this template against a model. See [`render`].
    pub fn render(&self, model: &Model) -> Result<String, RenderError> {
        render(self, model)
    }
}

fn render_nodes<'t>(
    nodes: &'t [Node],
    model: &Model,
    scope: &mut Vec<&'t str>,
    output: &mut String,
) -> Result<(), RenderError> {
    for node in nodes {
        match node {
            Node::Literal(text) => output.push_str(text),
            Node::Placeholder(field) => {
                let value = model.get(field).ok_or_else(|| RenderError::MissingField {
                    name: field.clone(),
                    scope: scope.iter().map(ToString::to_string).collect(),
                    suggestions: compute_suggestions(field, model.field_names()),
                })?;
                output.push_str(value);
            }
            Node::Range(range) => render_range(range, model, scope, output)?,
        }
    }
    Ok(())
}

fn render_range<'t>(
    range: &'t RangeNode,
    model: &Model,
    scope: &mut Vec<&'t str>,
    output: &mut String,
) -> Result<(), RenderError> {
    match model.children(&range.name) {
        Some(instances) if !instances.is_empty() => {
            scope.push(&range.name);
            for instance in instances {
                render_nodes(&range.children, instance, scope, output)?;
            }
            scope.pop();
        }
        _ => output.push_str(&range.empty),
    }
    Ok(())
}
