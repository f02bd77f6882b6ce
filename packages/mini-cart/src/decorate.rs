use crate::cart::{CartApi, CartApiLoader};
use crate::config::{root_link, MiniCartConfig};
use crate::error::{MiniCartError, MiniCartResult};
use crate::events::{EventBus, EventHandler, ListenerOptions, Subscription, PRODUCT_ADDED, PRODUCT_UPDATED};
use crate::message::{UpdateMessage, WRAPPER_CLASS};
use crate::placeholders::{PlaceholderSource, Placeholders};
use crate::quantity::{QuantityControl, UID_ATTR};
use crate::render::{MiniCartProps, MiniCartRenderer, ThumbnailContext, ThumbnailSlot, PRODUCTS_CLASS};
use serde_json::Value;
use std::sync::{Arc, Mutex, PoisonError};
use storefront_blocks::Block;
use storefront_dom::query::class;
use storefront_dom::{Element, VNode};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

/// Name of the mini-cart block
pub const BLOCK_NAME: &str = "commerce-mini-cart";

const PANEL_CLASS: &str = "minicart-panel";
const PANEL_VISIBLE: &str = "nav-tools-panel--show";

/// Collaborators the mini-cart decorator is wired to
pub struct MiniCartDeps {
    pub placeholders: Arc<dyn PlaceholderSource>,
    pub cart: Arc<dyn CartApiLoader>,
    pub renderer: Arc<dyn MiniCartRenderer>,
    pub events: Arc<dyn EventBus>,
    /// Store root prefixed to every storefront link
    pub root_path: String,
}

/// Thumbnail slot: product link with the item image, then the quantity incrementer
struct QuantitySlot {
    api: Arc<dyn CartApi>,
    root_path: String,
    controls: Mutex<Vec<QuantityControl>>,
}

impl ThumbnailSlot for QuantitySlot {
    fn render(&self, ctx: &ThumbnailContext<'_>) -> Vec<VNode> {
        let item = ctx.item;
        let href = root_link(
            &self.root_path,
            &format!("/products/{}/{}", item.url.url_key, item.top_level_sku),
        );

        let mut anchor = Element::new("a").with_attr("href", href);
        let image = &ctx.default_image_props;
        if !image.src.is_empty() {
            let mut img = Element::new("img")
                .with_attr("src", image.src.as_str())
                .with_attr("alt", image.alt.as_str());
            if let Some(width) = image.width {
                img.set_attr("width", width.to_string());
            }
            if let Some(height) = image.height {
                img.set_attr("height", height.to_string());
            }
            anchor.append(img.with_attr("loading", "lazy"));
        }

        let control = QuantityControl::new(item, self.api.clone());
        let incrementer = control.element();
        self.controls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(control);

        vec![anchor.into(), incrementer.into()]
    }
}

/// A decorated mini-cart with its live quantity controls and message
pub struct MiniCart {
    block: Block,
    config: MiniCartConfig,
    controls: Vec<QuantityControl>,
    message: UpdateMessage,
    events: Arc<dyn EventBus>,
    subscriptions: Vec<Subscription>,
}

impl MiniCart {
    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn config(&self) -> &MiniCartConfig {
        &self.config
    }

    pub fn message(&self) -> &UpdateMessage {
        &self.message
    }

    pub fn controls(&self) -> &[QuantityControl] {
        &self.controls
    }

    pub fn control_mut(&mut self, uid: &str) -> Option<&mut QuantityControl> {
        self.controls.iter_mut().find(|control| control.uid() == uid)
    }

    /// Write control and message state into the block markup
    pub fn sync(&mut self) {
        let controls = &self.controls;
        let root = self.block.root_mut();

        root.for_each_match(
            |el| el.has_attr(UID_ATTR),
            |incrementer| {
                let control = incrementer
                    .attr(UID_ATTR)
                    .and_then(|uid| controls.iter().find(|control| control.uid() == uid));
                if let Some(control) = control {
                    control.apply_to(incrementer);
                }
            },
        );

        if let Some(wrapper) = root.find_mut(class(WRAPPER_CLASS)) {
            self.message.apply_to(wrapper);
        }
    }

    /// Hide the mini-cart panel of `page`
    pub fn close(&self, page: &mut Element) -> bool {
        close_panel(page)
    }

    /// Final markup. Event subscriptions are released.
    pub fn into_block(mut self) -> Block {
        self.sync();
        self.release();
        std::mem::replace(&mut self.block, Block::new(BLOCK_NAME, Element::new("div")))
    }

    fn release(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            self.events.off(&subscription);
        }
    }
}

impl Drop for MiniCart {
    fn drop(&mut self) {
        self.release();
    }
}

/// Remove the visible state from the page's mini-cart panel, if there is one
pub fn close_panel(page: &mut Element) -> bool {
    let panel = if page.has_class(PANEL_CLASS) {
        Some(page)
    } else {
        page.find_mut(class(PANEL_CLASS))
    };
    match panel {
        Some(panel) => {
            panel.remove_class(PANEL_VISIBLE);
            true
        }
        None => {
            debug!("No mini cart panel to close");
            false
        }
    }
}

fn close_icon() -> Element {
    let path = Element::new("path")
        .with_attr("d", "M18 6L6 18M6 6l12 12")
        .with_attr("stroke", "currentColor")
        .with_attr("stroke-width", "2")
        .with_attr("stroke-linecap", "round")
        .with_attr("stroke-linejoin", "round");
    let svg = Element::new("svg")
        .with_attr("width", "24")
        .with_attr("height", "24")
        .with_attr("viewBox", "0 0 24 24")
        .with_attr("fill", "none")
        .with_attr("xmlns", "http://www.w3.org/2000/svg")
        .with_child(path);
    let button = Element::new("button")
        .with_attr("type", "button")
        .with_class("commerce-mini-cart__close-button")
        .with_attr("aria-label", "Close mini cart")
        .with_child(svg);

    Element::new("div")
        .with_class("commerce-mini-cart__close-icon")
        .with_child(button)
}

fn subscribe(events: &dyn EventBus, event: &str, message: &UpdateMessage, text: Option<&str>) -> Subscription {
    let message = message.clone();
    let text = text.unwrap_or_default().to_string();
    let handler: EventHandler = Arc::new(move |_: &Value| message.show(&text));
    events.on(event, handler, ListenerOptions::eager())
}

fn route(root_path: &str, link: &str) -> Option<String> {
    (!link.is_empty()).then(|| root_link(root_path, link))
}

/// Decorate a mini-cart block.
///
/// The cart API is resolved before any quantity control is built, so every
/// control can issue mutations from the start.
pub async fn decorate(mut block: Block, deps: &MiniCartDeps) -> MiniCartResult<MiniCart> {
    if block.is_decorated() {
        return Err(MiniCartError::AlreadyDecorated);
    }

    let config = MiniCartConfig::from_block(&block);
    debug!(?config, "Read mini cart config");

    let placeholders = match deps.placeholders.fetch_placeholders().await {
        Ok(placeholders) => placeholders,
        Err(err) => {
            warn!(error = %err, "Placeholders unavailable, cart messages will be empty");
            Placeholders::default()
        }
    };

    let api = deps.cart.load().await?;
    let runtime = Handle::try_current().map_err(|_| MiniCartError::NoRuntime)?;
    let message = UpdateMessage::new(runtime);

    let events = deps.events.clone();
    let subscriptions = vec![
        subscribe(events.as_ref(), PRODUCT_ADDED, &message, placeholders.added_message()),
        subscribe(events.as_ref(), PRODUCT_UPDATED, &message, placeholders.updated_message()),
    ];

    let root = block.root_mut();
    root.clear();
    root.add_class(BLOCK_NAME);

    let props = MiniCartProps {
        route_empty_cart_cta: route(&deps.root_path, &config.start_shopping_url),
        route_cart: route(&deps.root_path, &config.cart_url),
        route_checkout: route(&deps.root_path, &config.checkout_url),
    };
    let slot = QuantitySlot {
        api,
        root_path: deps.root_path.clone(),
        controls: Mutex::new(Vec::new()),
    };

    let nodes = match deps.renderer.render(&props, &slot).await {
        Ok(nodes) => nodes,
        Err(err) => {
            for subscription in &subscriptions {
                events.off(subscription);
            }
            return Err(err);
        }
    };
    let controls = slot.controls.into_inner().unwrap_or_else(PoisonError::into_inner);

    let root = block.root_mut();
    root.children.extend(nodes);
    root.append(close_icon());

    let wrapper = message.element();
    match root.find_mut(class(PRODUCTS_CLASS)) {
        Some(products) => products.prepend(wrapper),
        None => {
            info!("Products container not found, appending message to block");
            root.append(wrapper);
        }
    }

    block.mark_decorated();
    info!(items = controls.len(), "Decorated mini cart");

    Ok(MiniCart {
        block,
        config,
        controls,
        message,
        events,
        subscriptions,
    })
}
