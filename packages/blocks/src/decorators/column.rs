//! `column`: a two or three column card grid.
//!
//! An optional leading cell selects the column count. Without one the count is
//! inferred from the number of cells and clamped to the supported range.

use super::cell_text;
use crate::authoring::{hidden_field, AuthoringField, FieldKind, AUE_PROP};
use crate::block::Block;
use crate::content::{build_card, COLUMN_CARD};
use crate::registry::{Decorator, Outcome};
use storefront_dom::Element;
use tracing::debug;

const VARIATION_PROPS: [&str; 2] = ["columns", "variation"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnCount {
    Two,
    Three,
}

impl ColumnCount {
    /// Parse an authored count. Leading digits are read, anything else is ignored.
    pub fn from_authored(value: &str) -> Option<Self> {
        let digits: String = value.trim().chars().take_while(char::is_ascii_digit).collect();
        match digits.parse::<usize>() {
            Ok(2) => Some(ColumnCount::Two),
            Ok(3) => Some(ColumnCount::Three),
            _ => None,
        }
    }

    pub fn clamp(cells: usize) -> Self {
        if cells >= 3 {
            ColumnCount::Three
        } else {
            ColumnCount::Two
        }
    }

    pub fn get(&self) -> usize {
        match self {
            ColumnCount::Two => 2,
            ColumnCount::Three => 3,
        }
    }
}

pub struct Column;

/// Variation prop carried by an element itself
fn flagged_prop(el: &Element) -> Option<&str> {
    el.attr(AUE_PROP).filter(|prop| VARIATION_PROPS.contains(prop))
}

/// Authored prop name of a variation cell, on the cell or its descendants
fn variation_prop(cell: &Element) -> Option<&str> {
    flagged_prop(cell).or_else(|| cell.find(|el| flagged_prop(el).is_some()).and_then(flagged_prop))
}

/// Index of the variation cell, if the block has one
fn variation_cell(cells: &[Element]) -> Option<usize> {
    let first = cells.first()?;
    if matches!(cell_text(first).as_str(), "2" | "3") {
        return Some(0);
    }
    cells.iter().position(|cell| variation_prop(cell).is_some())
}

impl Decorator for Column {
    fn name(&self) -> &'static str {
        "column"
    }

    fn transform(&self, mut block: Block) -> Outcome {
        let root = block.root_mut();
        let mut cells = root.take_element_children();

        let variation = variation_cell(&cells).map(|index| cells.remove(index));
        let count = variation
            .as_ref()
            .and_then(|cell| ColumnCount::from_authored(&cell_text(cell)))
            .unwrap_or_else(|| ColumnCount::clamp(cells.len()));
        let n = count.get();
        debug!(columns = n, authored = variation.is_some(), "Resolved column count");

        root.add_class("column-block");
        root.add_class(&format!("column-{}-cols", n));
        root.set_attr("data-cols", n.to_string());

        if let Some(cell) = &variation {
            let prop = variation_prop(cell).unwrap_or("columns");
            let field = AuthoringField::new(prop, FieldKind::Select, "Number of Columns");
            root.append(hidden_field(Some("column-variation"), &n.to_string(), &field));
        }

        let mut grid = Element::new("div").with_class("column-grid");
        for cell in cells {
            grid.append(build_card(cell, &COLUMN_CARD));
        }
        root.append(grid);

        Outcome::Decorated(block)
    }
}
