use crate::authoring::{AUE_LABEL, AUE_PROP, AUE_TYPE};
use crate::{Block, BlockRegistry, Decoration};
use storefront_dom::query::{class, tag};
use storefront_dom::Element;

fn decorate(html: &str) -> Block {
    let block = Block::parse(html).expect("Failed to parse block");
    BlockRegistry::with_defaults()
        .decorate(block)
        .expect("Failed to decorate")
        .into_block()
}

fn texts(elements: Vec<&Element>) -> Vec<String> {
    elements.into_iter().map(|el| el.text_content().trim().to_string()).collect()
}

const THREE_WITH_MARKER: &str = r#"<div class="column"><div><div>3</div></div><div><div><p><picture><img src="a.jpg" /></picture></p><h3>A</h3><p>Alpha <a href="/a">Go</a></p></div></div><div><div><h3>B</h3></div></div><div><div><h3>C</h3></div></div></div>"#;

#[test]
fn test_column_with_marker() {
    let block = decorate(THREE_WITH_MARKER);
    let root = block.root();

    println!("Decorated:\n{}", block.to_html());

    assert!(block.is_decorated());
    assert!(root.has_class("column-block"));
    assert!(root.has_class("column-3-cols"));
    assert_eq!(root.attr("data-cols"), Some("3"));

    let cards = root.find_all(class("column-card"));
    assert_eq!(cards.len(), 3);
    assert_eq!(texts(root.find_all(class("column-card-title"))), vec!["A", "B", "C"]);

    let grid = root.find(class("column-grid")).expect("grid should exist");
    assert_eq!(grid.element_count(), 3);
}

#[test]
fn test_column_hidden_variation_field() {
    let block = decorate(THREE_WITH_MARKER);
    let hidden = block
        .root()
        .find(class("column-variation"))
        .expect("variation field should exist");

    assert_eq!(hidden.text_content(), "3");
    assert_eq!(hidden.attr(AUE_PROP), Some("columns"));
    assert_eq!(hidden.attr(AUE_LABEL), Some("Number of Columns"));
    assert_eq!(hidden.attr(AUE_TYPE), Some("select"));
    assert_eq!(hidden.style("display"), Some("none"));
}

#[test]
fn test_column_card_split() {
    let block = decorate(THREE_WITH_MARKER);
    let card = block.root().find(class("column-card")).expect("card should exist");

    assert_eq!(card.attr(AUE_PROP), Some("card"));
    assert_eq!(card.attr(AUE_TYPE), Some("container"));

    let media = card.find(class("column-card-media")).expect("media should exist");
    assert!(media.contains(tag("picture")));

    let content = card.find(class("column-card-content")).expect("content should exist");
    assert_eq!(content.attr(AUE_PROP), Some("content"));
    assert_eq!(content.attr(AUE_TYPE), Some("richtext"));

    // the emptied picture paragraph is gone
    assert_eq!(content.element_count(), 2);
    let text = content.find(class("column-card-text")).expect("paragraph should be tagged");
    assert!(text.is("p"));
    let cta = content.find(class("column-card-cta")).expect("link should be tagged");
    assert_eq!(cta.attr("href"), Some("/a"));
}

#[test]
fn test_column_count_clamped_without_marker() {
    let four = decorate(
        r#"<div class="column"><div><div>A</div></div><div><div>B</div></div><div><div>C</div></div><div><div>D</div></div></div>"#,
    );
    assert!(four.root().has_class("column-3-cols"));
    assert_eq!(four.root().find_all(class("column-card")).len(), 4);
    assert!(four.root().find(class("column-variation")).is_none());

    let one = decorate(r#"<div class="column"><div><div>A</div></div></div>"#);
    assert!(one.root().has_class("column-2-cols"));
    assert_eq!(one.root().attr("data-cols"), Some("2"));
}

#[test]
fn test_column_authored_variation_prop() {
    let block = decorate(
        r#"<div class="column"><div data-aue-prop="variation"><div>2</div></div><div><div>A</div></div><div><div>B</div></div><div><div>C</div></div></div>"#,
    );
    let root = block.root();

    assert!(root.has_class("column-2-cols"));
    assert_eq!(root.find_all(class("column-card")).len(), 3);

    let hidden = root.find(class("column-variation")).expect("variation field should exist");
    assert_eq!(hidden.attr(AUE_PROP), Some("variation"));
    assert_eq!(hidden.text_content(), "2");
}

#[test]
fn test_column_authored_content_is_moved_verbatim() {
    let block = decorate(
        r#"<div class="column"><div><div><div data-aue-prop="text"><h4>Kept</h4><p>Rich</p></div></div></div><div><div>B</div></div></div>"#,
    );
    let content = block
        .root()
        .find(class("column-card-content"))
        .expect("content should exist");

    let first = content.first_element_child().expect("content should have children");
    assert!(first.is("h4"));
    // authored content is not re-tagged
    assert!(!first.has_class("column-card-title"));
    assert_eq!(content.element_count(), 2);
}

#[test]
fn test_column_decorating_twice_is_idempotent() {
    let registry = BlockRegistry::with_defaults();
    let once = decorate(THREE_WITH_MARKER);
    let html = once.to_html();

    let again = Block::parse(&html).expect("Failed to parse decorated markup");
    assert!(again.is_decorated());

    let decoration = registry.decorate(again).expect("Failed to decorate");
    assert!(matches!(decoration, Decoration::AlreadyDecorated(_)));

    let twice = decoration.into_block();
    assert_eq!(twice.root().classes().count(), once.root().classes().count());
    assert_eq!(twice.root().find_all(class("column-grid")).len(), 1);
    assert_eq!(twice.root().find_all(class("column-card")).len(), 3);
    assert_eq!(twice.root().find_all(class("column-variation")).len(), 1);
}

#[test]
fn test_column_item_builds_single_card() {
    let block = decorate(
        r#"<div class="column-item"><div><div><picture><img src="i.jpg" /></picture></div></div><div><div><h2>Title</h2><p>Body <a href="/more">More</a></p></div></div></div>"#,
    );
    let root = block.root();

    println!("Decorated:\n{}", block.to_html());

    assert_eq!(root.element_count(), 1);
    let card = root.first_element_child().expect("card should exist");
    assert!(card.has_class("column-card"));
    assert!(card.find(class("column-card-media")).is_some_and(|media| media.contains(tag("img"))));

    let content = card.find(class("column-card-content")).expect("content should exist");
    assert_eq!(texts(content.find_all(class("column-card-title"))), vec!["Title"]);
    assert!(content.find(class("column-card-cta")).is_some());
}

#[test]
fn test_column_item_keeps_authored_empty_paragraphs() {
    let block = decorate(
        r#"<div class="column-item"><div><div><p><picture><img src="i.jpg" /></picture></p><h2>Title</h2><p></p><p>Body</p></div></div></div>"#,
    );
    let content = block
        .root()
        .find(class("column-card-content"))
        .expect("content should exist");

    println!("Decorated:\n{}", block.to_html());

    // only the paragraph that held the picture is dropped
    assert_eq!(content.element_count(), 3);
    let paragraphs: Vec<&Element> = content.element_children().filter(|el| el.is("p")).collect();
    assert_eq!(paragraphs.len(), 2);
    assert!(paragraphs[0].is_empty());
    assert!(block.root().find(class("column-card-media")).is_some_and(|media| media.contains(tag("picture"))));
}

#[test]
fn test_column_card_item_completes_build() {
    let block = decorate(
        r#"<div class="column-card-item"><div><div><img src="c.png" /></div></div><div><div><h3>Card</h3><p>Copy</p></div></div></div>"#,
    );
    let root = block.root();

    assert!(root.has_class("column-card-item-decorated"));
    assert_eq!(root.element_count(), 1);

    let card = root.first_element_child().expect("card should exist");
    assert!(card.has_class("column-card-item"));
    assert!(!card.has_attr(AUE_PROP));
    assert!(card.find(class("column-card-item-media")).is_some());

    let content = card.find(class("column-card-item-content")).expect("content should exist");
    assert_eq!(texts(content.find_all(class("column-card-title"))), vec!["Card"]);
    assert_eq!(texts(content.find_all(class("column-card-text"))), vec!["Copy"]);
}

#[test]
fn test_column_layout_counts_first_row() {
    let block = decorate(r#"<div class="column-layout"><div><div>a</div><div>b</div></div></div>"#);
    assert!(block.root().has_class("column-layout-decorated"));
    assert!(block.root().has_class("columns-2-cols"));

    let empty = decorate(r#"<div class="column-layout"></div>"#);
    assert!(empty.root().has_class("column-layout-decorated"));
    assert_eq!(empty.root().classes().count(), 2);
}

const COLUMNS: &str = r#"<div class="columns"><div><div><p><picture><source srcset="a.webp" /><img src="a.jpg" /></picture></p><h2 id="title">  Title  </h2><p>  Text  </p><p class="button-container"><a class="button" href="/x">Shop</a></p></div><div><p>Only text</p></div></div></div>"#;

#[test]
fn test_columns_rows_and_images() {
    let block = decorate(COLUMNS);
    let root = block.root();

    println!("Decorated:\n{}", block.to_html());

    assert!(root.has_class("columns-2-cols"));
    assert!(root.has_class("column-layout-block"));
    assert!(root.first_element_child().is_some_and(|row| row.has_class("column-layout-row")));

    let image = root.find(class("columns-img")).expect("image wrapper should exist");
    let picture = image.find(tag("picture")).expect("picture should be rebuilt");
    assert_eq!(picture.element_count(), 2);
    let img = picture.find(tag("img")).expect("img should be copied");
    assert_eq!(img.attr("alt"), Some(""));
    assert!(root.find(|el| el.is("p") && el.contains(tag("picture"))).is_none());
}

#[test]
fn test_columns_text_wrapper() {
    let block = decorate(COLUMNS);
    let text = block.root().find(class("columns-text")).expect("text wrapper should exist");

    let tags: Vec<&str> = text.element_children().map(Element::tag).collect();
    assert_eq!(tags, vec!["p", "p", "h2"]);

    let title = text.find(class("columns-title")).expect("title should be tagged");
    assert!(!title.has_attr("id"));
    assert_eq!(title.text_content(), "Title");
    assert_eq!(text.first_element_child().map(Element::text_content), Some("Text".to_string()));

    let link = text.find(tag("a")).expect("link should be kept");
    assert!(!link.has_class("button"));
}

#[test]
fn test_columns_promotional_background() {
    let block = decorate(
        r#"<div class="columns promotional-layout"><div><div><p><picture><img src="bg.jpg" /></picture></p><h3>Promo</h3><p class="button-container"><a class="button" href="/p">Buy</a></p></div></div></div>"#,
    );
    let col = block
        .root()
        .first_element_child()
        .and_then(Element::first_element_child)
        .expect("column should exist");

    assert!(col.has_class("has-background"));
    assert_eq!(col.style("background-image"), Some("url(bg.jpg)"));
    assert_eq!(col.style("background-size"), Some("cover"));
    assert_eq!(col.style("background-position"), Some("center"));
    assert!(!col.contains(tag("picture")));
    assert!(col.find(tag("a")).is_some_and(|a| a.has_class("button")));
}

#[test]
fn test_columns_popular_brands_links_image() {
    let block = decorate(
        r#"<div class="columns popular-brands"><div><div><p><picture><img src="b.png" alt="Brand" /></picture></p><p><a href="/brand">Brand</a></p></div></div></div>"#,
    );
    let image = block.root().find(class("columns-img")).expect("image wrapper should exist");
    let anchor = image.first_element_child().expect("anchor should exist");

    assert!(anchor.is("a"));
    assert_eq!(anchor.attr("href"), Some("/brand"));
    assert_eq!(anchor.find(tag("img")).and_then(|img| img.attr("alt")), Some("Brand"));
}

#[test]
fn test_columns_drops_unresolved_images() {
    let block = decorate(
        r#"<div class="columns"><div><div><p><img src="about:error" /></p><p>Kept</p></div></div></div>"#,
    );
    assert!(block.root().find(|el| el.attr("src") == Some("about:error")).is_none());
    assert!(block.root().find(class("columns-text")).is_some_and(|text| text.text_content() == "Kept"));
}

#[test]
fn test_columns_without_rows_is_inert() {
    let registry = BlockRegistry::with_defaults();
    let block = Block::parse(r#"<div class="columns"></div>"#).expect("Failed to parse block");
    let before = block.to_html();

    let decoration = registry.decorate(block).expect("Failed to decorate");
    assert!(matches!(decoration, Decoration::Inert(_)));

    let block = decoration.into_block();
    assert!(!block.is_decorated());
    assert_eq!(block.to_html(), before);
}
