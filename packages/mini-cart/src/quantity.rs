//! Quantity incrementer for one cart line.

use crate::cart::{CartApi, CartItem, CartItemUpdate};
use std::sync::Arc;
use storefront_dom::query::class;
use storefront_dom::{Element, VNode};
use tracing::{debug, warn};

pub const UID_ATTR: &str = "data-cart-item-uid";

const DECREASE_BUTTON: &str = "dropin-incrementer__decrease-button";
const INPUT: &str = "dropin-incrementer__input";
const PRICE: &str = "dropin-cart-item__price";

/// Display price for `quantity` units. Empty when the unit price is unknown or zero.
pub fn format_price(unit_price: Option<f64>, quantity: u32) -> String {
    match unit_price {
        Some(price) if price != 0.0 => format!("${:.2}", price * f64::from(quantity)),
        _ => String::new(),
    }
}

/// Parse a typed quantity. Anything that is not a number, or is below one, becomes 1.
fn parse_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 1.0 => value.floor().min(f64::from(u32::MAX)) as u32,
        _ => 1,
    }
}

/// Local state of one incrementer, kept in sync with the cart through mutations
pub struct QuantityControl {
    uid: String,
    unit_price: Option<f64>,
    quantity: u32,
    price_text: String,
    api: Arc<dyn CartApi>,
}

impl QuantityControl {
    pub fn new(item: &CartItem, api: Arc<dyn CartApi>) -> Self {
        Self {
            uid: item.uid.clone(),
            unit_price: item.price,
            quantity: item.quantity,
            price_text: format_price(item.price, item.quantity),
            api,
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    pub fn can_decrease(&self) -> bool {
        self.quantity > 1
    }

    pub async fn increment(&mut self) {
        self.update(self.quantity.saturating_add(1)).await;
    }

    /// Decrease by one. No-op at a quantity of one.
    pub async fn decrement(&mut self) {
        if self.can_decrease() {
            self.update(self.quantity - 1).await;
        }
    }

    /// Apply a value typed into the quantity input
    pub async fn set_input(&mut self, raw: &str) {
        self.update(parse_quantity(raw)).await;
    }

    async fn update(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
        self.price_text = format_price(self.unit_price, self.quantity);

        let update = CartItemUpdate {
            uid: self.uid.clone(),
            quantity: self.quantity,
        };
        match self.api.update_products_from_cart(vec![update]).await {
            Ok(Some(snapshot)) => {
                let reconciled = snapshot
                    .line(&self.uid)
                    .filter(|line| line.price.is_some_and(|price| price != 0.0))
                    .map(|line| format_price(line.price, line.quantity));
                if let Some(price_text) = reconciled {
                    self.price_text = price_text;
                }
                debug!(uid = %self.uid, quantity = self.quantity, "Cart line updated");
            }
            Ok(None) => debug!(uid = %self.uid, "Cart mutation returned no cart"),
            Err(err) => warn!(uid = %self.uid, error = %err, "Cart mutation failed, keeping local quantity"),
        }
    }

    /// Incrementer markup for the current state
    pub fn element(&self) -> Element {
        let decrease = Element::new("button")
            .with_attr("type", "button")
            .with_attr("aria-label", "Decrease Quantity")
            .with_class(DECREASE_BUTTON)
            .with_child(decrease_icon());

        let input = Element::new("input")
            .with_attr("type", "number")
            .with_attr("name", "quantity")
            .with_class(INPUT)
            .with_attr("aria-label", "Quantity")
            .with_attr("min", "1")
            .with_attr("step", "1");

        let increase = Element::new("button")
            .with_attr("type", "button")
            .with_attr("aria-label", "Increase Quantity")
            .with_class("dropin-incrementer__increase-button")
            .with_child(increase_icon());

        let content = Element::new("div")
            .with_class("dropin-incrementer__content")
            .with_class("dropin-incrementer__content--medium")
            .with_child(button_container(decrease))
            .with_child(input)
            .with_child(button_container(increase))
            .with_child(Element::new("span").with_class(PRICE));

        let mut incrementer = Element::new("div")
            .with_class("dropin-incrementer")
            .with_class("dropin-incrementer--medium")
            .with_class("dropin-cart-item__quantity__incrementer")
            .with_attr(UID_ATTR, self.uid.as_str())
            .with_child(content);
        self.apply_to(&mut incrementer);
        incrementer
    }

    /// Write quantity, button state and price into rendered incrementer markup
    pub fn apply_to(&self, incrementer: &mut Element) {
        if let Some(button) = incrementer.find_mut(class(DECREASE_BUTTON)) {
            if self.can_decrease() {
                button.remove_attr("disabled");
            } else {
                button.set_attr("disabled", "");
            }
        }
        if let Some(input) = incrementer.find_mut(class(INPUT)) {
            input.set_attr("value", self.quantity.to_string());
        }
        if let Some(price) = incrementer.find_mut(class(PRICE)) {
            price.children = vec![VNode::text(self.price_text.as_str())];
        }
    }
}

fn button_container(button: Element) -> Element {
    Element::new("div")
        .with_class("dropin-incrementer__button-container")
        .with_child(button)
}

fn icon(modifier: &str) -> Element {
    Element::new("svg")
        .with_attr("width", "16")
        .with_attr("height", "16")
        .with_attr("viewBox", "4 2 20 20")
        .with_attr("fill", "none")
        .with_attr("xmlns", "http://www.w3.org/2000/svg")
        .with_class("dropin-icon")
        .with_class("dropin-icon--shape-stroke-1")
        .with_class(modifier)
}

fn stroke(element: Element) -> Element {
    element
        .with_attr("vector-effect", "non-scaling-stroke")
        .with_attr("fill", "none")
        .with_attr("stroke", "currentColor")
}

fn decrease_icon() -> Element {
    icon("dropin-incrementer__down").with_child(
        stroke(Element::new("path"))
            .with_attr("d", "M17.3332 11.75H6.6665")
            .with_attr("stroke-width", "1.5")
            .with_attr("stroke-linecap", "square")
            .with_attr("stroke-linejoin", "round"),
    )
}

fn increase_icon() -> Element {
    icon("dropin-incrementer__add")
        .with_child(stroke(Element::new("path")).with_attr("d", "M12 5.65V18.35M5.65 12H18.35").with_attr("stroke-width", "1.5"))
}
