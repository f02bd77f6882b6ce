//! Cart data and the cart mutation API.

use crate::error::MiniCartResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUrl {
    pub url_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageProps {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A line of the cart as the mini-cart displays it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub uid: String,
    pub sku: String,
    #[serde(default)]
    pub top_level_sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: ProductUrl,
    pub quantity: u32,
    /// Unit price
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<ImageProps>,
}

/// Cart contents, as stored in a cart file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartData {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl CartData {
    pub async fn load(path: &Path) -> MiniCartResult<Self> {
        debug!(path = %path.display(), "Reading cart data");
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Requested quantity for one cart line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemUpdate {
    pub uid: String,
    pub quantity: u32,
}

/// A cart line returned by a mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub uid: String,
    /// Unit price, when the cart reports one
    pub price: Option<f64>,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<CartLine>,
}

impl CartSnapshot {
    pub fn line(&self, uid: &str) -> Option<&CartLine> {
        self.items.iter().find(|line| line.uid == uid)
    }
}

/// Cart mutations provided by the commerce backend
#[async_trait]
pub trait CartApi: Send + Sync {
    /// Set quantities. `None` means the cart could not be read back.
    async fn update_products_from_cart(&self, updates: Vec<CartItemUpdate>) -> MiniCartResult<Option<CartSnapshot>>;
}

/// Resolves the cart API, which may have to be loaded first
#[async_trait]
pub trait CartApiLoader: Send + Sync {
    async fn load(&self) -> MiniCartResult<Arc<dyn CartApi>>;
}

/// A loader for an API that is already available
pub struct LoadedCartApi(pub Arc<dyn CartApi>);

#[async_trait]
impl CartApiLoader for LoadedCartApi {
    async fn load(&self) -> MiniCartResult<Arc<dyn CartApi>> {
        Ok(self.0.clone())
    }
}

/// Offline cart: echoes requested quantities back with the known unit prices
#[derive(Debug, Clone, Default)]
pub struct StaticCart {
    prices: HashMap<String, f64>,
}

impl StaticCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: &[CartItem]) -> Self {
        Self {
            prices: items
                .iter()
                .filter_map(|item| item.price.map(|price| (item.uid.clone(), price)))
                .collect(),
        }
    }

    pub fn with_price(mut self, uid: impl Into<String>, price: f64) -> Self {
        self.prices.insert(uid.into(), price);
        self
    }
}

#[async_trait]
impl CartApi for StaticCart {
    async fn update_products_from_cart(&self, updates: Vec<CartItemUpdate>) -> MiniCartResult<Option<CartSnapshot>> {
        let items = updates
            .into_iter()
            .map(|update| CartLine {
                price: self.prices.get(&update.uid).copied(),
                uid: update.uid,
                quantity: update.quantity,
            })
            .collect();
        Ok(Some(CartSnapshot { items }))
    }
}
