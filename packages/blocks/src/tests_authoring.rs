use crate::authoring::{
    assign_fields, field_bool, field_link, field_text, has_named_fields, hidden_field, resolve_fields, AUE_FILTER,
    AUE_PROP,
};
use crate::{AuthoringField, FieldKind, FieldShape, FieldSpec};
use storefront_dom::{parse_element, Element};

const TABLE: [FieldSpec; 3] = [
    FieldSpec::new("title", FieldShape::Text),
    FieldSpec::new("link", FieldShape::Link),
    FieldSpec::new("flag", FieldShape::Boolean),
];

fn children(html: &str) -> Vec<Element> {
    parse_element(html)
        .expect("Failed to parse")
        .take_element_children()
}

#[test]
fn test_authoring_field_round_trip() {
    let field = AuthoringField::new("text", FieldKind::RichText, "Text Content").with_filter("text");
    let mut el = Element::new("div");
    field.apply(&mut el);

    assert_eq!(el.attr(AUE_PROP), Some("text"));
    assert_eq!(el.attr(AUE_FILTER), Some("text"));
    assert_eq!(AuthoringField::read(&el), Some(field));
}

#[test]
fn test_read_requires_known_type() {
    let el = Element::new("div")
        .with_attr("data-aue-prop", "x")
        .with_attr("data-aue-type", "widget");
    assert_eq!(AuthoringField::read(&el), None);
}

#[test]
fn test_hidden_field() {
    let field = AuthoringField::new("variation", FieldKind::Select, "Variation");
    let el = hidden_field(Some("my-variation"), "wide", &field);

    assert!(el.has_class("my-variation"));
    assert_eq!(el.text_content(), "wide");
    assert_eq!(el.style("display"), Some("none"));
    assert_eq!(el.attr("data-aue-type"), Some("select"));
}

#[test]
fn test_resolve_fields_positional() {
    let mut fields = resolve_fields(
        children(r#"<div><div><p>Hello</p></div><div><a href="/go">go</a></div><div>true</div></div>"#),
        &TABLE,
    );

    assert!(!fields.resolved_by_name());
    assert_eq!(fields.get("title").map(field_text), Some("Hello".to_string()));
    assert_eq!(fields.get("link").and_then(field_link), Some("/go".to_string()));
    assert!(fields.take("flag").is_some_and(|flag| field_bool(&flag)));
    assert!(!fields.contains("flag"));
}

#[test]
fn test_resolve_fields_by_name_with_fallback() {
    let html = r#"<div><div data-aue-prop="flag">false</div><div><p data-aue-prop="title">Named</p></div><div><a href="/x">x</a></div></div>"#;
    let fields = resolve_fields(children(html), &TABLE);

    assert!(fields.resolved_by_name());
    assert_eq!(fields.get("title").map(field_text), Some("Named".to_string()));
    assert!(fields.get("flag").is_some_and(|flag| !field_bool(flag)));
    // the unnamed child fills the remaining slot
    assert_eq!(fields.get("link").and_then(field_link), Some("/x".to_string()));
}

#[test]
fn test_assign_fields_reports_missing() {
    let cells = children("<div><div>only</div></div>");
    let assignment = assign_fields(cells.iter(), &TABLE);

    assert!(assignment.has("title"));
    assert!(!assignment.has("link"));
    assert!(!has_named_fields(cells.iter(), &TABLE));
}

#[test]
fn test_field_link_ignores_blank_href() {
    let el = parse_element(r#"<div><a href="  ">x</a></div>"#).expect("Failed to parse");
    assert_eq!(field_link(&el), None);
}
