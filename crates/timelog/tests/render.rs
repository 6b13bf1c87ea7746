//! Integration tests for rendering templates against models.

use insta::assert_snapshot;
use timelog::{Model, RenderError, TemplateError, model, parse_template, render, render_str};

fn items(values: &[&str]) -> Vec<Model> {
    values.iter().map(|v| model! { "n" => *v }).collect()
}

// =============================================================================
// Literals and placeholders
// =============================================================================

#[test]
fn literal_template_renders_unchanged() {
    for source in ["", "plain text", "line one\nline two\n", "{ not } a {{ directive", "}}{{"] {
        assert_eq!(render_str(source, &Model::new()).unwrap(), source);
    }
}

/// Returns true if `text` contains a `{{`, brace-free text, then `}}`.
fn has_directive(text: &str) -> bool {
    text.match_indices("{{").any(|(start, _)| {
        let rest = &text[start + 2..];
        let inner = rest.find(['{', '}']).unwrap_or(rest.len());
        rest[inner..].starts_with("}}")
    })
}

#[test]
fn every_short_directive_free_text_renders_unchanged() {
    let alphabet = ['{', '}', ' ', 'a', '\n'];
    let mut level = vec![String::new()];
    let mut checked = 0;
    for _ in 0..=6 {
        for source in &level {
            if has_directive(source) {
                continue;
            }
            assert_eq!(render_str(source, &Model::new()).unwrap(), *source, "{source:?}");
            checked += 1;
        }
        level = level
            .iter()
            .flat_map(|prefix| alphabet.iter().map(move |c| format!("{prefix}{c}")))
            .collect();
    }
    assert!(checked > 19_000);
}

#[test]
fn placeholder_substitution() {
    let out = render_str("Hi {{ name }}!", &model! { "name" => "Ann" }).unwrap();
    assert_eq!(out, "Hi Ann!");
}

#[test]
fn placeholder_values_are_not_escaped() {
    let out = render_str("<p>{{ html }}</p>", &model! { "html" => "<b>&</b>" }).unwrap();
    assert_snapshot!(out, @"<p><b>&</b></p>");
}

#[test]
fn placeholder_value_is_not_reparsed() {
    let out = render_str("{{ a }}", &model! { "a" => "{{ b }}" }).unwrap();
    assert_eq!(out, "{{ b }}");
}

#[test]
fn field_names_are_case_sensitive() {
    let err = render_str("{{ Name }}", &model! { "name" => "Ann" }).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::Render(RenderError::MissingField { ref name, .. }) if name == "Name"
    ));
}

// =============================================================================
// Ranges
// =============================================================================

#[test]
fn range_expands_in_order() {
    let model = Model::new().with_children("items", items(&["1", "2"]));
    let out = render_str("{{ range items }}{{ n }};{{ end }}", &model).unwrap();
    assert_eq!(out, "1;2;");
}

#[test]
fn range_with_surrounding_text() {
    let model = Model::new()
        .with("title", "Log")
        .with_children("items", items(&["a", "b", "c"]));
    let out = render_str("{{ title }}:{{ range items }} {{ n }}{{ end }}.", &model).unwrap();
    assert_snapshot!(out, @"Log: a b c.");
}

#[test]
fn absent_range_uses_if_nothing_text() {
    let out = render_str("{{ range items }}{{ if-nothing }}none{{ end }}", &Model::new()).unwrap();
    assert_eq!(out, "none");
}

#[test]
fn empty_range_uses_if_nothing_text() {
    let model = Model::new().with_children("items", Vec::new());
    let out = render_str("{{ range items }}{{ if-nothing }}none{{ end }}", &model).unwrap();
    assert_eq!(out, "none");
}

#[test]
fn range_without_if_nothing_renders_empty() {
    let out = render_str("[{{ range items }}{{ n }}{{ end }}]", &Model::new()).unwrap();
    assert_eq!(out, "[]");
}

#[test]
fn if_nothing_text_is_ignored_when_children_exist() {
    let model = Model::new().with_children("items", items(&["1"]));
    let out = render_str("{{ range items }}{{ n }}{{ if-nothing }}none{{ end }}", &model).unwrap();
    assert_eq!(out, "1");
}

#[test]
fn if_nothing_placeholders_are_emitted_raw() {
    let out = render_str("{{ range items }}{{ if-nothing }}no {{ n }}{{ end }}", &Model::new()).unwrap();
    assert_eq!(out, "no {{ n }}");
}

#[test]
fn range_children_do_not_see_parent_fields() {
    let model = Model::new()
        .with("title", "Log")
        .with_children("items", vec![Model::new()]);
    let err = render_str("{{ range items }}{{ title }}{{ end }}", &model).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::Render(RenderError::MissingField { ref name, ref scope, .. })
            if name == "title" && scope == &["items".to_string()]
    ));
}

#[test]
fn missing_field_in_empty_range_is_not_an_error() {
    let out = render_str("{{ range items }}{{ anything }}{{ end }}", &Model::new()).unwrap();
    assert_eq!(out, "");
}

// =============================================================================
// Nesting
// =============================================================================

#[test]
fn nested_ranges_use_each_childs_own_collections() {
    let first = Model::new()
        .with("name", "A")
        .with_children("inner", items(&["1", "2"]));
    let second = Model::new().with("name", "B");
    let third = Model::new()
        .with("name", "C")
        .with_children("inner", items(&["3"]));
    let model = Model::new().with_children("outer", vec![first, second, third]);

    let source = "{{ range outer }}{{ name }}({{ range inner }}{{ n }}{{ if-nothing }}-{{ end }}) {{ end }}";
    let out = render_str(source, &model).unwrap();
    assert_snapshot!(out, @"A(12) B(-) C(3) ");
}

#[test]
fn nested_missing_field_reports_full_scope() {
    let inner = Model::new().with("value", "x");
    let outer = Model::new().with_children("inner", vec![inner]);
    let model = Model::new().with_children("outer", vec![outer]);

    let err = render_str("{{ range outer }}{{ range inner }}{{ valeu }}{{ end }}{{ end }}", &model)
        .unwrap_err();
    let TemplateError::Render(RenderError::MissingField {
        name,
        scope,
        suggestions,
    }) = err
    else {
        panic!("expected a missing field error");
    };
    assert_eq!(name, "valeu");
    assert_eq!(scope, vec!["outer".to_string(), "inner".to_string()]);
    assert_eq!(suggestions, vec!["value".to_string()]);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn missing_placeholder_is_an_error() {
    let err = render_str("{{ missing }}", &Model::new()).unwrap_err();
    assert_eq!(
        err,
        TemplateError::Render(RenderError::MissingField {
            name: "missing".into(),
            scope: Vec::new(),
            suggestions: Vec::new(),
        })
    );
}

#[test]
fn missing_field_message() {
    let err = render_str("{{ Projet }}", &model! { "Project" => "x", "Hours" => "1" }).unwrap_err();
    assert_snapshot!(err.to_string(), @"missing field 'Projet' in top-level model, did you mean: Project");
}

#[test]
fn missing_field_message_inside_range() {
    let model = Model::new().with_children("today", vec![Model::new()]);
    let err = render_str("{{ range today }}{{ Hours }}{{ end }}", &model).unwrap_err();
    assert_snapshot!(err.to_string(), @"missing field 'Hours' in range 'today'");
}

#[test]
fn parse_errors_surface_through_render_str() {
    let err = render_str("{{ end }}", &Model::new()).unwrap_err();
    assert!(matches!(err, TemplateError::Parse(_)));
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn rendering_twice_is_identical() {
    let template = parse_template("{{ range items }}<{{ n }}>{{ if-nothing }}none{{ end }}").unwrap();
    let model = Model::new().with_children("items", items(&["x", "y"]));

    let first = render(&template, &model).unwrap();
    let second = template.render(&model).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "<x><y>");
}
