//! `column-card-item`: a single item rendered as a lightweight card.

use crate::block::Block;
use crate::content::{build_card, COLUMN_CARD_ITEM};
use crate::registry::{Decorator, Outcome};
use storefront_dom::Element;

pub struct ColumnCardItem;

impl Decorator for ColumnCardItem {
    fn name(&self) -> &'static str {
        "column-card-item"
    }

    fn transform(&self, mut block: Block) -> Outcome {
        let root = block.root_mut();
        root.add_class("column-card-item-decorated");
        let item = Element::new("div").with_children(root.take_children());
        root.append(build_card(item, &COLUMN_CARD_ITEM));
        Outcome::Decorated(block)
    }
}
