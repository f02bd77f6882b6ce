use serde::Serialize;
use storefront_blocks::{read_block_config, Block};

/// Links authored in the mini-cart block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniCartConfig {
    pub start_shopping_url: String,
    pub cart_url: String,
    pub checkout_url: String,
}

impl MiniCartConfig {
    pub fn from_block(block: &Block) -> Self {
        let config = read_block_config(block.root());
        Self {
            start_shopping_url: config.get_or("start-shopping-url", "").to_string(),
            cart_url: config.get_or("cart-url", "").to_string(),
            checkout_url: config.get_or("checkout-url", "").to_string(),
        }
    }
}

/// Prefix a storefront path with the store root. Absolute URLs pass through.
pub fn root_link(root: &str, link: &str) -> String {
    let root = root.trim_end_matches('/');
    if root.is_empty() || link.contains("://") || !link.starts_with('/') {
        return link.to_string();
    }
    format!("{}{}", root, link)
}
