use crate::{Block, BlockRegistry};
use storefront_dom::query::{class, tag};
use storefront_dom::Element;

fn decorate(html: &str) -> Block {
    let block = Block::parse(html).expect("Failed to parse block");
    BlockRegistry::with_defaults()
        .decorate(block)
        .expect("Failed to decorate")
        .into_block()
}

fn row(inner: &str) -> String {
    format!("<div><div>{}</div></div>", inner)
}

fn block_html(rows: &[&str]) -> String {
    let rows: String = rows.iter().map(|inner| row(inner)).collect();
    format!(r#"<div class="text-with-button">{}</div>"#, rows)
}

fn buttons(block: &Block) -> Vec<&Element> {
    block.root().find_all(|el| el.is("a") && el.has_class("button"))
}

#[test]
fn test_text_with_button_positional() {
    let html = block_html(&[
        "<p>Hello <strong>world</strong></p>",
        "<p>Shop</p>",
        r#"<p><a href="/shop">/shop</a></p>"#,
        "<p>TRUE</p>",
        "<p>More</p>",
        r#"<p><a href="/more">/more</a></p>"#,
        "<p>false</p>",
    ]);
    let block = decorate(&html);

    println!("Decorated:\n{}", block.to_html());

    let text = block
        .root()
        .find(class("text-with-button__text"))
        .expect("text wrapper should exist");
    assert_eq!(text.inner_html(), "<p>Hello <strong>world</strong></p>");

    let links = buttons(&block);
    assert_eq!(links.len(), 2);

    assert_eq!(links[0].attr("href"), Some("/shop"));
    assert_eq!(links[0].text_content(), "Shop");
    assert_eq!(links[0].attr("aria-label"), Some("Shop"));
    assert_eq!(links[0].attr("role"), Some("button"));
    assert_eq!(links[0].attr("target"), Some("_blank"));
    assert_eq!(links[0].attr("rel"), Some("noopener noreferrer"));

    assert_eq!(links[1].attr("href"), Some("/more"));
    assert_eq!(links[1].attr("target"), Some("_self"));
    assert!(links[1].attr("rel").is_none());

    let wrappers = block.root().find_all(class("text-with-button__button"));
    assert_eq!(wrappers.len(), 2);
}

#[test]
fn test_text_with_button_requires_label_and_link() {
    let html = block_html(&[
        "<p>Copy</p>",
        "<p>   </p>",
        r#"<p><a href="/shop">/shop</a></p>"#,
        "<p>false</p>",
        "<p>Second</p>",
        r#"<p><a href="/second">/second</a></p>"#,
        "<p>false</p>",
    ]);
    let block = decorate(&html);

    let links = buttons(&block);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].attr("href"), Some("/second"));
}

#[test]
fn test_text_with_button_without_buttons() {
    let block = decorate(&block_html(&["<p>Only text</p>"]));
    let root = block.root();

    assert_eq!(root.element_count(), 1);
    assert!(root.find(class("text-with-button__buttons")).is_none());
    assert!(root.find(class("text-with-button__text")).is_some());
}

#[test]
fn test_text_with_button_resolves_fields_by_name() {
    // authored out of order; the metadata names decide
    let html = r#"<div class="text-with-button"><div data-aue-prop="buttonOneLink"><div><p><a href="/named">/named</a></p></div></div><div data-aue-prop="openInNewTab"><div><p>True</p></div></div><div data-aue-prop="text"><div><p>Body</p></div></div><div data-aue-prop="buttonOneLabel"><div><p>Named</p></div></div></div>"#;
    let block = decorate(html);

    let text = block
        .root()
        .find(class("text-with-button__text"))
        .expect("text wrapper should exist");
    assert_eq!(text.text_content(), "Body");

    let links = buttons(&block);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].attr("href"), Some("/named"));
    assert_eq!(links[0].text_content(), "Named");
    assert_eq!(links[0].attr("target"), Some("_blank"));
}

#[test]
fn test_text_with_button_new_tab_is_case_insensitive() {
    for value in ["true", "True", "TRUE"] {
        let html = block_html(&[
            "<p>Copy</p>",
            "<p>Go</p>",
            r#"<p><a href="/go">/go</a></p>"#,
            &format!("<p>{}</p>", value),
        ]);
        let block = decorate(&html);
        let link = block.root().find(tag("a")).expect("button should exist");
        assert_eq!(link.attr("target"), Some("_blank"), "value {}", value);
    }
}
