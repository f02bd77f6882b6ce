use crate::page::block_name;
use crate::{
    decorate_page, put_block, take_blocks_named, Block, BlockRegistry, DecorateError, DecorationState, PageReport,
};
use storefront_dom::query::class;
use storefront_dom::{parse_element, Element};

const PAGE: &str = r#"<main><div class="section"><div class="column-layout"><div><div>a</div><div>b</div></div></div><div class="unknown-block"><div class="column-layout"><div><div>nested</div></div></div></div></div><div class="hero-banner" data-block-status="decorated"><div>leftAligned</div></div><div class="columns"></div></main>"#;

#[test]
fn test_decorate_page_report() {
    let registry = BlockRegistry::with_defaults();
    let mut page = parse_element(PAGE).expect("Failed to parse page");

    let report = decorate_page(&mut page, &registry);

    assert_eq!(
        report,
        PageReport {
            decorated: 2,
            already_decorated: 1,
            inert: 1,
        }
    );
    assert_eq!(report.total(), 4);
    assert_eq!(page.find_all(class("column-layout-decorated")).len(), 2);

    let columns = page.find(class("columns")).expect("columns block should remain");
    assert!(!columns.has_attr("data-block-status"));
}

#[test]
fn test_decorate_page_twice_changes_nothing() {
    let registry = BlockRegistry::with_defaults();
    let mut page = parse_element(PAGE).expect("Failed to parse page");

    decorate_page(&mut page, &registry);
    let first = page.clone();
    let report = decorate_page(&mut page, &registry);

    assert_eq!(report.decorated, 0);
    assert_eq!(report.already_decorated, 3);
    assert_eq!(page, first);
}

#[test]
fn test_take_and_put_blocks() {
    let mut page = parse_element(
        r#"<main><div class="section"><div class="mini-cart"><div>a</div></div></div><div class="mini-cart"><div>b</div></div></main>"#,
    )
    .expect("Failed to parse page");

    let taken = take_blocks_named(&mut page, "mini-cart");
    assert_eq!(taken.len(), 2);
    assert!(page.find(class("mini-cart")).is_none());
    assert_eq!(taken[0].0.indices(), &[0, 0]);
    assert_eq!(taken[1].1.root().text_content(), "b");

    for (path, mut block) in taken {
        block.root_mut().add_class("done");
        assert!(put_block(&mut page, &path, block));
    }

    assert_eq!(page.find_all(class("done")).len(), 2);
    assert_eq!(page.element_count(), 2);
}

#[test]
fn test_block_name_requires_div() {
    let section = Element::new("section").with_class("columns");
    assert_eq!(block_name(&section), None);

    let div = Element::new("div").with_class("columns").with_class("wide");
    assert_eq!(block_name(&div), Some("columns"));
}

#[test]
fn test_block_state_from_markup() {
    let fresh = Block::parse(r#"<div class="columns"></div>"#).expect("Failed to parse");
    assert_eq!(fresh.state(), DecorationState::Pending);

    let done = Block::parse(r#"<div class="columns" data-block-status="decorated"></div>"#).expect("Failed to parse");
    assert_eq!(done.state(), DecorationState::Decorated);

    assert!(matches!(Block::parse("<div></div>"), Err(DecorateError::Unnamed)));
}

#[test]
fn test_registry_names_and_unknown_block() {
    let registry = BlockRegistry::with_defaults();
    assert_eq!(
        registry.names(),
        vec![
            "column",
            "column-card-item",
            "column-item",
            "column-layout",
            "columns",
            "hero-banner",
            "text-with-button",
            "text-with-image",
        ]
    );

    let block = Block::parse(r#"<div class="carousel"></div>"#).expect("Failed to parse");
    assert!(matches!(registry.decorate(block), Err(DecorateError::UnknownBlock(name)) if name == "carousel"));
}
