//! `columns`: rows of image and text columns.
//!
//! Two block classes change the image handling: `promotional-layout` turns the
//! image into the cell background, `popular-brands` links the image to the
//! cell's first link.

use crate::block::Block;
use crate::content::drop_error_images;
use crate::registry::{Decorator, Outcome};
use storefront_dom::query::{tag, tags};
use storefront_dom::{Element, VNode};
use tracing::debug;

pub struct Columns;

#[derive(Debug, Clone, Copy, Default)]
struct Layout {
    promotional: bool,
    popular_brands: bool,
}

impl Layout {
    fn of(root: &Element) -> Self {
        Self {
            promotional: root.has_class("promotional-layout"),
            popular_brands: root.has_class("popular-brands"),
        }
    }
}

fn is_picture_paragraph(el: &Element) -> bool {
    el.is("p") && el.contains(tag("picture"))
}

/// Fresh `picture` holding copies of the sources and image of `picture`
fn rebuild_picture(picture: &Element) -> Element {
    let mut rebuilt = Element::new("picture");
    for source in picture.find_all(tag("source")) {
        rebuilt.append(source.clone());
    }
    if let Some(img) = picture.find(tag("img")) {
        let mut img = img.clone();
        if img.attr("alt").is_none() {
            img.set_attr("alt", "");
        }
        rebuilt.append(img);
    }
    rebuilt
}

fn place_image(col: &mut Element, layout: Layout) {
    let Some(paragraph) = col.find(is_picture_paragraph) else {
        return;
    };
    let Some(picture) = paragraph.find(tag("picture")) else {
        return;
    };

    if layout.promotional {
        let Some(src) = picture.find(tag("img")).map(|img| img.attr("src").unwrap_or_default().to_string()) else {
            return;
        };
        col.set_style("background-image", &format!("url({})", src));
        col.set_style("background-size", "cover");
        col.set_style("background-position", "center");
        col.add_class("has-background");
        col.take_first(is_picture_paragraph);
        return;
    }

    let rebuilt = rebuild_picture(picture);
    let mut image = Element::new("div").with_class("columns-img");
    let link = if layout.popular_brands {
        col.find(|el| el.is("a") && el.has_attr("href"))
            .and_then(|a| a.attr("href"))
            .map(str::to_string)
    } else {
        None
    };
    match link {
        Some(href) => image.append(Element::new("a").with_attr("href", href).with_child(rebuilt)),
        None => image.append(rebuilt),
    }

    if col.replace_first(is_picture_paragraph, VNode::Element(image)).is_err() {
        debug!("Picture paragraph vanished before replacement");
    }
}

fn decorate_cell(col: &mut Element, layout: Layout) {
    drop_error_images(col);
    place_image(col, layout);

    let mut text = Element::new("div").with_class("columns-text");
    for mut paragraph in col.take_all(|el| el.is("p") && !el.contains(tag("img"))) {
        paragraph.trim_whitespace();
        text.append(paragraph);
    }
    for mut title in col.take_all(tags(&["h1", "h2", "h3", "h4"])) {
        title.remove_attr("id");
        title.add_class("columns-title");
        title.trim_whitespace();
        text.append(title);
    }
    col.append(text);

    if !layout.promotional {
        col.for_each_match(
            |el| el.is("p") && el.has_class("button-container"),
            |container| {
                container.for_each_match(|el| el.is("a") && el.has_class("button"), |link| {
                    link.remove_class("button");
                })
            },
        );
    }
}

impl Decorator for Columns {
    fn name(&self) -> &'static str {
        "columns"
    }

    fn transform(&self, mut block: Block) -> Outcome {
        let root = block.root_mut();
        let Some(cols) = root.first_element_child().map(Element::element_count) else {
            return Outcome::Inert {
                block,
                reason: "block has no rows".to_string(),
            };
        };

        let layout = Layout::of(root);
        root.add_class(&format!("columns-{}-cols", cols));
        root.add_class("column-layout-block");

        for row in root.element_children_mut() {
            row.add_class("column-layout-row");
            for col in row.element_children_mut() {
                decorate_cell(col, layout);
            }
        }

        debug!(cols, promotional = layout.promotional, "Decorated columns rows");

        Outcome::Decorated(block)
    }
}
