//! `text-with-image`: an image with overlaid or adjacent text.
//!
//! Two authored shapes exist. Legacy blocks carry `[image, text]`; current
//! ones carry `[variation, image, text]`. The child count decides the shape,
//! unless a child is explicitly named `variation`.

use super::cell_text;
use crate::authoring::{
    assign_fields, has_named_fields, hidden_field, resolve_fields, AuthoringField, FieldKind, FieldShape,
    FieldSpec,
};
use crate::block::Block;
use crate::content::cell_contents;
use crate::registry::{Decorator, Outcome};
use storefront_dom::query::tag;
use storefront_dom::Element;
use tracing::debug;

pub static FIELDS: [FieldSpec; 3] = [
    FieldSpec::new("variation", FieldShape::Select),
    FieldSpec::new("image", FieldShape::Media),
    FieldSpec::new("text", FieldShape::RichText),
];

pub static LEGACY_FIELDS: [FieldSpec; 2] = [
    FieldSpec::new("image", FieldShape::Media),
    FieldSpec::new("text", FieldShape::RichText),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextImageVariation {
    #[default]
    OverlayRight,
    OverlayLeft,
    SideBySideLeft,
    SideBySideRight,
    TextBelow,
}

impl TextImageVariation {
    const ALL: [TextImageVariation; 5] = [
        TextImageVariation::OverlayRight,
        TextImageVariation::OverlayLeft,
        TextImageVariation::SideBySideLeft,
        TextImageVariation::SideBySideRight,
        TextImageVariation::TextBelow,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variation| variation.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextImageVariation::OverlayRight => "overlay-right",
            TextImageVariation::OverlayLeft => "overlay-left",
            TextImageVariation::SideBySideLeft => "side-by-side-left",
            TextImageVariation::SideBySideRight => "side-by-side-right",
            TextImageVariation::TextBelow => "text-below",
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, TextImageVariation::OverlayRight | TextImageVariation::OverlayLeft)
    }

    /// Text goes on the left, so it precedes the image
    pub fn text_first(&self) -> bool {
        matches!(self, TextImageVariation::OverlayLeft | TextImageVariation::SideBySideLeft)
    }

    /// Variation named by a legacy block class
    pub fn from_classes(block: &Element) -> Option<Self> {
        [
            TextImageVariation::OverlayLeft,
            TextImageVariation::SideBySideLeft,
            TextImageVariation::SideBySideRight,
            TextImageVariation::TextBelow,
        ]
        .into_iter()
        .find(|variation| block.has_class(variation.as_str()))
    }
}

pub struct TextWithImage;

/// Field table matching the authored shape of `root`
fn field_table(root: &Element) -> &'static [FieldSpec] {
    if root.element_count() == 3 || has_named_fields(root.element_children(), &FIELDS[..1]) {
        &FIELDS
    } else {
        &LEGACY_FIELDS
    }
}

/// Classify one authored text element and move it into `target`
fn place_text_element(mut element: Element, target: &mut Element) {
    if matches!(element.tag.to_ascii_lowercase().as_str(), "h1" | "h2" | "h3" | "h4") {
        element.set_class_name("text-with-image-title");
    } else if element.is("p") {
        match element.find_mut(tag("a")) {
            Some(link) => {
                link.set_class_name("text-with-image-cta button");
                element.set_class_name("button-container");
            }
            None => element.set_class_name("text-with-image-description"),
        }
    } else if element.is("a") {
        element.set_class_name("text-with-image-cta button");
        target.append(Element::new("p").with_class("button-container").with_child(element));
        return;
    }
    target.append(element);
}

impl Decorator for TextWithImage {
    fn name(&self) -> &'static str {
        "text-with-image"
    }

    fn transform(&self, mut block: Block) -> Outcome {
        let table = field_table(block.root());
        let assignment = assign_fields(block.root().element_children(), table);
        if !assignment.has("image") || !assignment.has("text") {
            return Outcome::Inert {
                block,
                reason: "requires both image and text sections".to_string(),
            };
        }

        let root = block.root_mut();
        let mut fields = resolve_fields(root.take_element_children(), table);

        let authored = fields.take("variation");
        let variation = match &authored {
            Some(cell) => TextImageVariation::parse(&cell_text(cell)).unwrap_or_default(),
            None => TextImageVariation::from_classes(root).unwrap_or_default(),
        };
        debug!(variation = variation.as_str(), authored = authored.is_some(), "Resolved text-with-image variation");

        root.set_attr("data-variation", variation.as_str());

        let mut container = Element::new("div")
            .with_class("text-with-image-container")
            .with_class(&format!("text-with-image-{}", variation.as_str()));

        if authored.is_some() {
            let field = AuthoringField::new("variation", FieldKind::Select, "Layout Variation");
            container.append(hidden_field(Some("text-with-image-variation"), variation.as_str(), &field));
        }

        let mut image = Element::new("div").with_class("text-with-image-image");
        AuthoringField::new("image", FieldKind::Media, "Background Image").apply(&mut image);
        if let Some(mut img) = fields.take("image").and_then(|mut cell| cell.take_first(tag("img"))) {
            img.set_attr("loading", "lazy");
            image.append(img);
        }

        let mut content = Element::new("div").with_class("text-with-image-content");
        let elements = fields.take("text").map(cell_contents).unwrap_or_default();
        if variation.is_overlay() {
            let mut inner = Element::new("div");
            AuthoringField::new("text", FieldKind::RichText, "Text Content")
                .with_filter("text")
                .apply(&mut inner);
            for element in elements {
                place_text_element(element, &mut inner);
            }
            content.append(Element::new("div").with_child(Element::new("p").with_child(inner)));
        } else {
            for element in elements {
                place_text_element(element, &mut content);
            }
        }
        let text = Element::new("div").with_class("text-with-image-text").with_child(content);

        if variation.text_first() {
            container.append(text);
            container.append(image);
        } else {
            container.append(image);
            container.append(text);
        }

        root.append(container);
        Outcome::Decorated(block)
    }
}
