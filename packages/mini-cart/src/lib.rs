//! Mini-cart block decorator.
//!
//! Unlike the synchronous decorators in `storefront-blocks`, the mini-cart is
//! wired to collaborators: a placeholder source for translated messages, the
//! commerce cart API, a renderer for the vendor mini-cart container and an
//! event bus for cart notifications. Each is a trait so the decorator can run
//! against the real storefront services or the offline implementations here.

pub mod cart;
pub mod config;
pub mod decorate;
pub mod error;
pub mod events;
pub mod message;
pub mod placeholders;
pub mod quantity;
pub mod render;


pub use cart::{
    CartApi, CartApiLoader, CartData, CartItem, CartItemUpdate, CartLine, CartSnapshot, ImageProps, LoadedCartApi,
    ProductUrl, StaticCart,
};
pub use config::{root_link, MiniCartConfig};
pub use decorate::{close_panel, decorate, MiniCart, MiniCartDeps, BLOCK_NAME};
pub use error::{MiniCartError, MiniCartResult};
pub use events::{EventBus, EventHandler, ListenerOptions, LocalEventBus, Subscription, PRODUCT_ADDED, PRODUCT_UPDATED};
pub use message::UpdateMessage;
pub use placeholders::{JsonPlaceholders, PlaceholderSource, Placeholders};
pub use quantity::{format_price, QuantityControl};
pub use render::{MiniCartProps, MiniCartRenderer, StaticMiniCart, ThumbnailContext, ThumbnailSlot};
