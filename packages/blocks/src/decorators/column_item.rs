//! `column-item`: a single authored item rendered as one column card.

use crate::block::Block;
use crate::content::{build_card, COLUMN_CARD};
use crate::registry::{Decorator, Outcome};
use storefront_dom::Element;

pub struct ColumnItem;

impl Decorator for ColumnItem {
    fn name(&self) -> &'static str {
        "column-item"
    }

    fn transform(&self, mut block: Block) -> Outcome {
        let root = block.root_mut();
        let item = Element::new("div").with_children(root.take_children());
        root.append(build_card(item, &COLUMN_CARD));
        Outcome::Decorated(block)
    }
}
