//! Mini-cart container rendering.
//!
//! The container itself belongs to the commerce library; the decorator only
//! supplies routes and the thumbnail slot. [`StaticMiniCart`] reproduces the
//! container markup from a known cart for offline rendering.

use crate::cart::{CartData, CartItem, ImageProps};
use crate::error::MiniCartResult;
use async_trait::async_trait;
use serde::Serialize;
use storefront_dom::{Element, VNode};

/// Routes handed to the mini-cart container. `None` hides the matching action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniCartProps {
    pub route_empty_cart_cta: Option<String>,
    pub route_cart: Option<String>,
    pub route_checkout: Option<String>,
}

/// What the container passes to the thumbnail slot for one cart line
#[derive(Debug, Clone)]
pub struct ThumbnailContext<'a> {
    pub item: &'a CartItem,
    pub default_image_props: ImageProps,
}

/// Custom thumbnail content for each cart line
pub trait ThumbnailSlot: Send + Sync {
    fn render(&self, ctx: &ThumbnailContext<'_>) -> Vec<VNode>;
}

#[async_trait]
pub trait MiniCartRenderer: Send + Sync {
    /// Render the container into nodes for the block
    async fn render(&self, props: &MiniCartProps, thumbnail: &dyn ThumbnailSlot) -> MiniCartResult<Vec<VNode>>;
}

pub const PRODUCTS_CLASS: &str = "cart-mini-cart__products";

const THUMBNAIL_SIZE: u32 = 300;

/// Renders the container for a fixed cart
#[derive(Debug, Clone, Default)]
pub struct StaticMiniCart {
    cart: CartData,
}

impl StaticMiniCart {
    pub fn new(cart: CartData) -> Self {
        Self { cart }
    }

    fn default_image_props(item: &CartItem) -> ImageProps {
        let image = item.image.clone().unwrap_or_default();
        ImageProps {
            alt: if image.alt.is_empty() { item.name.clone() } else { image.alt },
            width: image.width.or(Some(THUMBNAIL_SIZE)),
            height: image.height.or(Some(THUMBNAIL_SIZE)),
            src: image.src,
        }
    }

    fn render_item(item: &CartItem, thumbnail: &dyn ThumbnailSlot) -> Element {
        let ctx = ThumbnailContext {
            item,
            default_image_props: Self::default_image_props(item),
        };

        Element::new("div")
            .with_class("dropin-cart-item")
            .with_child(
                Element::new("div")
                    .with_class("dropin-cart-item__image")
                    .with_children(thumbnail.render(&ctx)),
            )
            .with_child(
                Element::new("div")
                    .with_class("dropin-cart-item__title")
                    .with_text(item.name.as_str()),
            )
    }
}

fn action(class: &str, href: Option<&str>, label: &str) -> Option<Element> {
    href.map(|href| {
        Element::new("a")
            .with_class(class)
            .with_attr("href", href)
            .with_text(label)
    })
}

#[async_trait]
impl MiniCartRenderer for StaticMiniCart {
    async fn render(&self, props: &MiniCartProps, thumbnail: &dyn ThumbnailSlot) -> MiniCartResult<Vec<VNode>> {
        let mut container = Element::new("div").with_class("cart-mini-cart");

        if self.cart.items.is_empty() {
            let mut empty = Element::new("div")
                .with_class("cart-mini-cart__empty-cart")
                .with_child(Element::new("p").with_text("Your cart is empty"));
            if let Some(cta) = action("cart-mini-cart__start-shopping", props.route_empty_cart_cta.as_deref(), "Start shopping") {
                empty.append(cta);
            }
            container.append(empty);
            return Ok(vec![container.into()]);
        }

        let products = Element::new("div")
            .with_class(PRODUCTS_CLASS)
            .with_children(self.cart.items.iter().map(|item| VNode::from(Self::render_item(item, thumbnail))));
        container.append(products);

        let footer = Element::new("div").with_class("cart-mini-cart__footer").with_children(
            [
                action("cart-mini-cart__cart-link", props.route_cart.as_deref(), "View Cart"),
                action("cart-mini-cart__checkout-link", props.route_checkout.as_deref(), "Checkout"),
            ]
            .into_iter()
            .flatten()
            .map(VNode::from),
        );
        container.append(footer);

        Ok(vec![container.into()])
    }
}
