//! Integration tests for tokenizing and tree building.

use timelog::parser::{Node, ParseError, RangeNode, TokenKind, parse_template, tokenize};

fn literal(text: &str) -> Node {
    Node::Literal(text.into())
}

fn placeholder(name: &str) -> Node {
    Node::Placeholder(name.into())
}

// =============================================================================
// Tokenizer
// =============================================================================

#[test]
fn test_empty_source_has_no_tokens() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_pure_literal_is_one_token() {
    let tokens = tokenize("Hello,\nworld!");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Literal);
    assert_eq!(tokens[0].text, "Hello,\nworld!");
}

#[test]
fn test_directive_kinds() {
    let tokens = tokenize("{{ range a }}{{ x }}{{ if-nothing }}{{ end }}");
    let kinds: Vec<TokenKind> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::RangeOpen("a".into()),
            TokenKind::Placeholder("x".into()),
            TokenKind::EmptyMarker,
            TokenKind::RangeClose,
        ]
    );
}

#[test]
fn test_tokens_keep_raw_text_and_offsets() {
    let tokens = tokenize("a{{ b }}c");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].text, "{{ b }}");
    assert_eq!(tokens[1].offset, 1);
    assert_eq!(tokens[2].offset, 8);
    assert_eq!(tokens[2].kind, TokenKind::Literal);
}

#[test]
fn test_tokens_concatenate_to_source() {
    let source = "x {{ a }}{ {{ range r }}}}{{{ b }}\n{{ end }} {{c";
    let joined: String = tokenize(source).iter().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, source);
}

#[test]
fn test_extra_opening_brace_is_literal() {
    let tokens = tokenize("{{{ a }}");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "{");
    assert_eq!(tokens[1].kind, TokenKind::Placeholder("a".into()));
}

#[test]
fn test_extra_closing_brace_is_literal() {
    let tokens = tokenize("{{ a }}}");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Placeholder("a".into()));
    assert_eq!(tokens[1].text, "}");
}

#[test]
fn test_inner_braces_prevent_directive() {
    let tokens = tokenize("{{ a {b} }}");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Literal);
}

#[test]
fn test_unterminated_directive_is_literal() {
    let tokens = tokenize("before {{ name");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "before {{ name");
}

#[test]
fn test_single_braces_are_literal() {
    let tokens = tokenize("fn main() { body }");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Literal);
}

// =============================================================================
// Tree building
// =============================================================================

#[test]
fn test_empty_template() {
    let t = parse_template("").unwrap();
    assert!(t.nodes.is_empty());
}

#[test]
fn test_literal_and_placeholders() {
    let t = parse_template("Hi {{ name }}!").unwrap();
    assert_eq!(t.nodes, vec![literal("Hi "), placeholder("name"), literal("!")]);
}

#[test]
fn test_range_collects_children() {
    let t = parse_template("<ul>{{ range items }}<li>{{ n }}</li>{{ end }}</ul>").unwrap();
    assert_eq!(
        t.nodes,
        vec![
            literal("<ul>"),
            Node::Range(RangeNode {
                name: "items".into(),
                children: vec![literal("<li>"), placeholder("n"), literal("</li>")],
                empty: String::new(),
            }),
            literal("</ul>"),
        ]
    );
}

#[test]
fn test_if_nothing_text_is_captured() {
    let t = parse_template("{{ range items }}{{ n }}{{ if-nothing }}none{{ end }}").unwrap();
    assert_eq!(
        t.nodes,
        vec![Node::Range(RangeNode {
            name: "items".into(),
            children: vec![placeholder("n")],
            empty: "none".into(),
        })]
    );
}

#[test]
fn test_if_nothing_keeps_placeholders_as_raw_text() {
    let t = parse_template("{{ range items }}{{ if-nothing }}no {{ kind }} yet{{ end }}").unwrap();
    let Node::Range(range) = &t.nodes[0] else {
        panic!("expected range");
    };
    assert!(range.children.is_empty());
    assert_eq!(range.empty, "no {{ kind }} yet");
}

#[test]
fn test_range_after_if_nothing_is_still_a_child() {
    let t = parse_template("{{ range a }}{{ if-nothing }}x{{ range b }}y{{ end }}z{{ end }}").unwrap();
    let Node::Range(range) = &t.nodes[0] else {
        panic!("expected range");
    };
    assert_eq!(range.empty, "xz");
    assert_eq!(
        range.children,
        vec![Node::Range(RangeNode {
            name: "b".into(),
            children: vec![literal("y")],
            empty: String::new(),
        })]
    );
}

#[test]
fn test_nested_ranges_resume_parent() {
    let t = parse_template("{{ range outer }}[{{ range inner }}{{ v }}{{ end }}]{{ end }}after").unwrap();
    assert_eq!(
        t.nodes,
        vec![
            Node::Range(RangeNode {
                name: "outer".into(),
                children: vec![
                    literal("["),
                    Node::Range(RangeNode {
                        name: "inner".into(),
                        children: vec![placeholder("v")],
                        empty: String::new(),
                    }),
                    literal("]"),
                ],
                empty: String::new(),
            }),
            literal("after"),
        ]
    );
}

#[test]
fn test_sequential_ranges() {
    let t = parse_template("{{ range a }}1{{ end }}{{ range b }}2{{ end }}").unwrap();
    assert_eq!(t.range_names(), vec!["a", "b"]);
}

#[test]
fn test_range_names_are_depth_first() {
    let t = parse_template("{{ range a }}{{ range b }}{{ end }}{{ end }}{{ range c }}{{ end }}").unwrap();
    assert_eq!(t.range_names(), vec!["a", "b", "c"]);
}

// =============================================================================
// Malformed templates
// =============================================================================

#[test]
fn test_unmatched_end() {
    let err = parse_template("text\n  {{ end }}").unwrap_err();
    assert_eq!(err, ParseError::UnmatchedEnd { line: 2, column: 3 });
}

#[test]
fn test_unclosed_range_points_at_opener() {
    let err = parse_template("a\n{{ range items }}{{ n }}").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnclosedRange {
            name: "items".into(),
            line: 2,
            column: 1,
        }
    );
}

#[test]
fn test_unclosed_inner_range() {
    let err = parse_template("{{ range a }}{{ range b }}{{ end }}").unwrap_err();
    assert!(matches!(err, ParseError::UnclosedRange { ref name, .. } if name == "a"));
}

#[test]
fn test_duplicate_if_nothing() {
    let err = parse_template("{{ range a }}{{ if-nothing }}x{{ if-nothing }}y{{ end }}").unwrap_err();
    assert_eq!(
        err,
        ParseError::DuplicateEmptyMarker {
            range: "a".into(),
            line: 1,
            column: 31,
        }
    );
}

#[test]
fn test_if_nothing_outside_range() {
    let err = parse_template("{{ if-nothing }}").unwrap_err();
    assert_eq!(err, ParseError::EmptyMarkerOutsideRange { line: 1, column: 1 });
}

#[test]
fn test_error_messages_name_position() {
    let err = parse_template("{{ range today }}").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("today"));
    assert!(msg.contains("1:1"));
    assert_eq!(err.position(), (1, 1));
}
