//! Content helpers shared by the card decorators.

use crate::authoring::{AuthoringField, FieldKind, AUE_PROP};
use storefront_dom::query::tag;
use storefront_dom::{Element, VNode};
use tracing::debug;

/// Class vocabulary of one card flavour
#[derive(Debug, Clone, Copy)]
pub struct CardClasses {
    pub card: &'static str,
    pub media: &'static str,
    pub content: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub cta: &'static str,
    /// Emit authoring metadata on the card and content wrappers
    pub authoring: bool,
}

pub const COLUMN_CARD: CardClasses = CardClasses {
    card: "column-card",
    media: "column-card-media",
    content: "column-card-content",
    title: "column-card-title",
    text: "column-card-text",
    cta: "column-card-cta",
    authoring: true,
};

pub const COLUMN_CARD_ITEM: CardClasses = CardClasses {
    card: "column-card-item",
    media: "column-card-item-media",
    content: "column-card-item-content",
    title: "column-card-title",
    text: "column-card-text",
    cta: "column-card-cta",
    authoring: false,
};

/// An image whose source failed to resolve
pub fn is_error_image(element: &Element) -> bool {
    element.is("img") && element.attr("src") == Some("about:error")
}

/// Drop every paragraph holding an unresolved image
pub fn drop_error_images(element: &mut Element) -> usize {
    let removed = element.remove_where(|el| el.is("p") && el.contains(is_error_image));
    if removed > 0 {
        debug!(removed, "Dropped paragraphs with unresolved images");
    }
    removed
}

/// Unwrap the plain `div` layers the authoring pipeline puts around a cell's
/// content and return the content elements.
pub fn cell_contents(mut cell: Element) -> Vec<Element> {
    loop {
        let is_wrapper = cell.element_count() == 1
            && has_no_text(&cell)
            && cell.first_element_child().is_some_and(|child| {
                child.is("div") && !child.has_attr(AUE_PROP) && child.element_count() > 0
            });
        if !is_wrapper {
            break;
        }
        match cell.take_element_children().into_iter().next() {
            Some(inner) => cell = inner,
            None => break,
        }
    }
    cell.take_element_children()
}

fn has_no_text(element: &Element) -> bool {
    element.children.iter().all(|child| match child {
        VNode::Text { content } => content.trim().is_empty(),
        _ => true,
    })
}

/// Split an authored cell into a card: media wrapper for the first picture or
/// image, content wrapper for everything else. Authored nodes are moved.
pub fn build_card(mut item: Element, classes: &CardClasses) -> Element {
    drop_error_images(&mut item);

    let mut card = Element::new("div").with_class(classes.card);
    if classes.authoring {
        AuthoringField::new("card", FieldKind::Container, "Column Card").apply(&mut card);
    }

    if let Some(media) = take_media(&mut item) {
        card.append(Element::new("div").with_class(classes.media).with_child(media));
    }

    let mut content = Element::new("div").with_class(classes.content);
    if classes.authoring {
        AuthoringField::new("content", FieldKind::RichText, "Card Content").apply(&mut content);
    }

    let authored = item.take_first(|el| matches!(el.attr(AUE_PROP), Some("text") | Some("content")));
    match authored {
        Some(mut authored) => content.children.extend(authored.take_children()),
        None => {
            for mut child in cell_contents(item) {
                tag_card_content(&mut child, classes);
                content.append(child);
            }
        }
    }

    card.append(content);
    card
}

/// Detach the first picture or image. Plain wrappers on its path that the
/// move leaves empty are removed with it; other empty elements stay.
fn take_media(element: &mut Element) -> Option<Element> {
    for index in 0..element.children.len() {
        let VNode::Element(child) = &mut element.children[index] else {
            continue;
        };
        if child.is("picture") || child.is("img") {
            return element.children.remove(index).into_element();
        }
        if let Some(media) = take_media(child) {
            if (child.is("p") || child.is("div")) && child.is_empty() && !child.has_attr(AUE_PROP) {
                element.children.remove(index);
            }
            return Some(media);
        }
    }
    None
}

fn tag_card_content(child: &mut Element, classes: &CardClasses) {
    if child.is_heading() {
        child.add_class(classes.title);
    } else if child.is("p") {
        if let Some(link) = child.find_mut(tag("a")) {
            link.add_class(classes.cta);
        }
        child.add_class(classes.text);
    }
}
