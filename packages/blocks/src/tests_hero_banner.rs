use crate::authoring::{AUE_LABEL, AUE_PROP, AUE_TYPE};
use crate::decorators::hero_banner::HeroVariation;
use crate::{Block, BlockRegistry};

fn decorate(html: &str) -> Block {
    let block = Block::parse(html).expect("Failed to parse block");
    BlockRegistry::with_defaults()
        .decorate(block)
        .expect("Failed to decorate")
        .into_block()
}

#[test]
fn test_hero_banner_keeps_authored_variation() {
    let block = decorate(
        r#"<div class="hero-banner"><div><div>centerAligned</div></div><div><div><h1>Hi</h1><p><a href="/go" data-link-type="primary">Go</a></p></div></div></div>"#,
    );
    let root = block.root();

    println!("Decorated:\n{}", block.to_html());

    assert_eq!(root.attr("data-variation"), Some("centerAligned"));
    assert!(root.has_class("hero-banner--centerAligned"));
    assert_eq!(root.element_count(), 2);

    let field = root.first_element_child().expect("variation cell should be kept");
    assert_eq!(field.text_content(), "centerAligned");
    assert_eq!(field.style("display"), Some("none"));
    assert_eq!(field.attr(AUE_PROP), Some("variation"));
    assert_eq!(field.attr(AUE_LABEL), Some("Banner Variation"));
    assert_eq!(field.attr(AUE_TYPE), Some("select"));
}

#[test]
fn test_hero_banner_defaults_to_left_aligned() {
    let block = decorate(r#"<div class="hero-banner"><div><div><h1>Hi</h1></div></div></div>"#);
    let root = block.root();

    assert_eq!(root.attr("data-variation"), Some("leftAligned"));
    assert!(root.has_class("hero-banner--leftAligned"));

    // a hidden field is created in front of the content
    assert_eq!(root.element_count(), 2);
    let field = root.first_element_child().expect("variation field should exist");
    assert_eq!(field.text_content(), "leftAligned");
    assert_eq!(field.style("display"), Some("none"));
    assert_eq!(field.attr(AUE_PROP), Some("variation"));
}

#[test]
fn test_hero_banner_invalid_variation_falls_back() {
    let block = decorate(
        r#"<div class="hero-banner"><div><div>rightAligned</div></div><div><div><h1>Hi</h1></div></div></div>"#,
    );
    let root = block.root();

    assert_eq!(root.attr("data-variation"), Some("leftAligned"));
    assert_eq!(root.element_count(), 3);

    let authored = root.element_children().nth(1).expect("authored cell should remain");
    assert_eq!(authored.text_content(), "rightAligned");
    assert!(authored.style("display").is_none());
}

#[test]
fn test_hero_banner_without_link_does_not_fail() {
    let block = decorate(r#"<div class="hero-banner"><div><div>leftAligned</div></div></div>"#);

    assert!(block.is_decorated());
    let classes: Vec<&str> = block.root().classes().collect();
    assert_eq!(classes, vec!["hero-banner", "hero-banner--leftAligned"]);
}

#[test]
fn test_hero_variation_parse() {
    assert_eq!(HeroVariation::parse("centerAligned"), Some(HeroVariation::CenterAligned));
    assert_eq!(HeroVariation::parse("center"), None);
    assert_eq!(HeroVariation::default().as_str(), "leftAligned");
}
