//! `hero-banner`: banner with a left or center aligned layout.

use super::cell_text;
use crate::authoring::{hidden_field, AuthoringField, FieldKind};
use crate::block::Block;
use crate::registry::{Decorator, Outcome};
use storefront_dom::Element;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeroVariation {
    #[default]
    LeftAligned,
    CenterAligned,
}

impl HeroVariation {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "leftAligned" => Some(HeroVariation::LeftAligned),
            "centerAligned" => Some(HeroVariation::CenterAligned),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeroVariation::LeftAligned => "leftAligned",
            HeroVariation::CenterAligned => "centerAligned",
        }
    }
}

pub struct HeroBanner;

fn variation_field() -> AuthoringField {
    AuthoringField::new("variation", FieldKind::Select, "Banner Variation")
}

/// Link type of the trailing call-to-action, if one was authored
fn cta_link_type(root: &Element) -> Option<&str> {
    root.element_children()
        .last()?
        .find(|el| el.is("a"))?
        .attr("data-link-type")
}

impl Decorator for HeroBanner {
    fn name(&self) -> &'static str {
        "hero-banner"
    }

    fn transform(&self, mut block: Block) -> Outcome {
        let root = block.root_mut();

        let authored = root
            .first_element_child()
            .and_then(|first| HeroVariation::parse(&cell_text(first)));
        let variation = authored.unwrap_or_default();

        match cta_link_type(root) {
            Some(link_type) => debug!(link_type, "Hero banner call to action"),
            None => debug!("Hero banner has no call to action"),
        }

        root.set_attr("data-variation", variation.as_str());
        root.add_class(&format!("hero-banner--{}", variation.as_str()));

        if authored.is_some() {
            if let Some(cell) = root.element_children_mut().next() {
                cell.hide();
                variation_field().apply(cell);
            }
        } else {
            root.prepend(hidden_field(None, variation.as_str(), &variation_field()));
        }

        Outcome::Decorated(block)
    }
}
