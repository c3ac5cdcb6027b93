use serde_json::json;
use trellis::renderer::{MiniJinjaRenderer, TemplateRenderer};

#[test]
fn test_renders_spec_variables() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({ "name": "test", "value": 42 });

    let result = engine.render("Hello {{ name }}!", &context).unwrap();
    assert_eq!(result, "Hello test!");

    let result = engine.render("Value: {{ value }}", &context).unwrap();
    assert_eq!(result, "Value: 42");
}

#[test]
fn test_undefined_variables_render_blank() {
    let engine = MiniJinjaRenderer::new();
    let result = engine.render("{{ missing }}", &json!({})).unwrap();
    assert_eq!(result, "");
}

#[test]
fn test_invalid_syntax_is_an_error() {
    let engine = MiniJinjaRenderer::new();
    assert!(engine.render("{% endfor %}", &json!({})).is_err());
    assert!(engine.render("{{ unclosed", &json!({})).is_err());
}

#[test]
fn test_case_helpers() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({ "name": "my project" });

    let result = engine.render("{{ name | title }}", &context).unwrap();
    assert_eq!(result, "My Project");

    let result = engine.render("{{ name | upper }}", &context).unwrap();
    assert_eq!(result, "MY PROJECT");

    let result = engine.render("{{ 'LOUD' | lower }}", &context).unwrap();
    assert_eq!(result, "loud");
}

#[test]
fn test_replace_helpers() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({});

    let result = engine
        .render("{{ 'a-b-c' | stringreplace('-', '_') }}", &context)
        .unwrap();
    assert_eq!(result, "a_b_c");

    let result = engine
        .render("{{ 'abc123def' | regexreplace('[0-9]+', '#') }}", &context)
        .unwrap();
    assert_eq!(result, "abc#def");

    let result = engine.render("{{ 'x' | regexreplace('[', '#') }}", &context);
    assert!(result.is_err());
}

#[test]
fn test_json_helpers() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({ "meta": { "a": 1 } });

    let result = engine.render("{{ json(meta) }}", &context).unwrap();
    assert_eq!(result, r#"{"a":1}"#);

    let result = engine.render("{{ jsonindent(meta) }}", &context).unwrap();
    assert!(result.contains('\n'));
    assert!(result.contains("\"a\""));
}

#[test]
fn test_add_helper() {
    let engine = MiniJinjaRenderer::new();
    let result = engine.render("{{ add(1, 2) }}", &json!({})).unwrap();
    assert_eq!(result, "3");
}

#[test]
fn test_now_helper() {
    let engine = MiniJinjaRenderer::new();
    let result = engine.render("{{ now() }}", &json!({})).unwrap();
    // RFC 3339 timestamps carry a date/time separator.
    assert!(result.contains('T'), "got: {}", result);
}

#[test]
fn test_unescape_helper() {
    let engine = MiniJinjaRenderer::new();
    let result = engine
        .render("{{ unescape('<b>bold</b>') }}", &json!({}))
        .unwrap();
    assert_eq!(result, "<b>bold</b>");
}
