//! `column-layout`: tags the block with its column count.

use crate::block::Block;
use crate::registry::{Decorator, Outcome};

pub struct ColumnLayout;

impl Decorator for ColumnLayout {
    fn name(&self) -> &'static str {
        "column-layout"
    }

    fn transform(&self, mut block: Block) -> Outcome {
        let root = block.root_mut();
        root.add_class("column-layout-decorated");

        let cols = root.first_element_child().map(|row| row.element_count());
        if let Some(cols) = cols {
            root.add_class(&format!("columns-{}-cols", cols));
        }

        Outcome::Decorated(block)
    }
}
