//! `text-with-button`: rich text followed by up to two call-to-action buttons.

use crate::authoring::{field_bool, field_link, field_text, resolve_fields, FieldShape, FieldSpec, ResolvedFields};
use crate::block::Block;
use crate::registry::{Decorator, Outcome};
use storefront_dom::query::tag;
use storefront_dom::{Element, VNode};
use tracing::debug;

pub const FIELDS: [FieldSpec; 7] = [
    FieldSpec::new("text", FieldShape::RichText),
    FieldSpec::new("buttonOneLabel", FieldShape::Text),
    FieldSpec::new("buttonOneLink", FieldShape::Link),
    FieldSpec::new("openInNewTab", FieldShape::Boolean),
    FieldSpec::new("buttonTwoLabel", FieldShape::Text),
    FieldSpec::new("buttonTwoLink", FieldShape::Link),
    FieldSpec::new("openInNewTabTwo", FieldShape::Boolean),
];

/// Field names of one button: label, link, new-tab flag
struct ButtonFields {
    label: &'static str,
    link: &'static str,
    new_tab: &'static str,
}

const BUTTONS: [ButtonFields; 2] = [
    ButtonFields {
        label: "buttonOneLabel",
        link: "buttonOneLink",
        new_tab: "openInNewTab",
    },
    ButtonFields {
        label: "buttonTwoLabel",
        link: "buttonTwoLink",
        new_tab: "openInNewTabTwo",
    },
];

pub struct TextWithButton;

fn build_text(fields: &mut ResolvedFields) -> Element {
    let mut wrapper = Element::new("div").with_class("text-with-button__text");
    if let Some(mut text) = fields.take("text") {
        let children = match text.take_first(tag("div")) {
            Some(mut inner) => inner.take_children(),
            None => text.take_children(),
        };
        wrapper.children = children;
        wrapper.trim_whitespace();
    }
    wrapper
}

/// A button, if both a label and a link were authored
fn build_button(fields: &ResolvedFields, names: &ButtonFields) -> Option<Element> {
    let label = fields.get(names.label).map(field_text).filter(|label| !label.is_empty())?;
    let href = fields.get(names.link).and_then(field_link)?;
    let new_tab = fields.get(names.new_tab).is_some_and(field_bool);

    let mut link = Element::new("a")
        .with_attr("href", href)
        .with_class("button")
        .with_attr("aria-label", label.as_str())
        .with_attr("role", "button");
    if new_tab {
        link.set_attr("target", "_blank");
        link.set_attr("rel", "noopener noreferrer");
    } else {
        link.set_attr("target", "_self");
    }
    link.append(VNode::text(label));

    Some(Element::new("div").with_class("text-with-button__button").with_child(link))
}

impl Decorator for TextWithButton {
    fn name(&self) -> &'static str {
        "text-with-button"
    }

    fn transform(&self, mut block: Block) -> Outcome {
        let root = block.root_mut();
        let mut fields = resolve_fields(root.take_element_children(), &FIELDS);

        root.append(build_text(&mut fields));

        let buttons: Vec<Element> = BUTTONS
            .iter()
            .filter_map(|names| build_button(&fields, names))
            .collect();
        debug!(buttons = buttons.len(), by_name = fields.resolved_by_name(), "Built text-with-button");

        if !buttons.is_empty() {
            root.append(
                Element::new("div")
                    .with_class("text-with-button__buttons")
                    .with_children(buttons.into_iter().map(Into::into)),
            );
        }

        Outcome::Decorated(block)
    }
}
