//! Built-in block decorators, one module per block.

pub mod column;
pub mod column_card_item;
pub mod column_item;
pub mod column_layout;
pub mod columns;
pub mod hero_banner;
pub mod text_with_button;
pub mod text_with_image;

use storefront_dom::Element;

/// Trimmed text of an authored cell
pub(crate) fn cell_text(element: &Element) -> String {
    element.text_content().trim().to_string()
}
