//! Error types for template rendering.

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;

/// An error that occurred while rendering a parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A placeholder names a field the model does not supply.
    #[error("missing field '{name}' in {}{}", scope_label(scope), suggestion_hint(suggestions))]
    MissingField {
        name: String,
        /// Names of the enclosing ranges, outermost first.
        scope: Vec<String>,
        /// Similar field names present in the model at that level.
        suggestions: Vec<String>,
    },
}

/// Any failure of [`render_str`](crate::render_str): parsing or rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

fn scope_label(scope: &[String]) -> String {
    if scope.is_empty() {
        "top-level model".to_string()
    } else {
        format!("range '{}'", scope.join("/"))
    }
}

fn suggestion_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}", suggestions.join(", "))
    }
}

/// Find up to three names in `available` close to `target`, closest first.
///
/// Names within Levenshtein distance 1 are considered for targets of up to
/// three characters, and within distance 2 for longer targets. Ties are
/// broken alphabetically so results are deterministic.
///
/// # Example
///
/// ```
/// use timelog::compute_suggestions;
///
/// let found = compute_suggestions("Projet", ["Project", "Hours"]);
/// assert_eq!(found, vec!["Project"]);
/// ```
pub fn compute_suggestions<'a>(
    target: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = available
        .into_iter()
        .map(|name| (levenshtein(target, name), name))
        .filter(|&(distance, _)| distance <= max_distance)
        .collect();
    scored.sort_unstable();
    scored
        .into_iter()
        .take(3)
        .map(|(_, name)| name.to_string())
        .collect()
}
