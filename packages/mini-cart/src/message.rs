//! Transient "cart updated" message shown above the mini-cart products.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use storefront_dom::query::class;
use storefront_dom::{Element, VNode};
use tokio::runtime::Handle;

pub const WRAPPER_CLASS: &str = "commerce-mini-cart__message-wrapper";
pub const MESSAGE_CLASS: &str = "commerce-mini-cart__update-message";
const WRAPPER_VISIBLE: &str = "commerce-mini-cart__message-wrapper--visible";
const MESSAGE_VISIBLE: &str = "commerce-mini-cart__update-message--visible";

const HIDE_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
struct MessageState {
    text: String,
    visible: bool,
    generation: u64,
}

/// The single message element of a mini-cart.
///
/// Showing a message while one is visible replaces its text and restarts the
/// hide timer: each show bumps a generation counter, and a timer only hides the
/// message if no newer show happened since it was started.
#[derive(Clone)]
pub struct UpdateMessage {
    state: Arc<Mutex<MessageState>>,
    runtime: Handle,
    hide_after: Duration,
}

impl UpdateMessage {
    pub fn new(runtime: Handle) -> Self {
        Self {
            state: Arc::new(Mutex::new(MessageState::default())),
            runtime,
            hide_after: HIDE_AFTER,
        }
    }

    pub fn with_hide_after(mut self, hide_after: Duration) -> Self {
        self.hide_after = hide_after;
        self
    }

    pub fn show(&self, text: &str) {
        let generation = {
            let mut state = self.lock();
            state.text = text.to_string();
            state.visible = true;
            state.generation += 1;
            state.generation
        };

        let state = self.state.clone();
        let hide_after = self.hide_after;
        self.runtime.spawn(async move {
            tokio::time::sleep(hide_after).await;
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.generation == generation {
                state.visible = false;
            }
        });
    }

    pub fn is_visible(&self) -> bool {
        self.lock().visible
    }

    pub fn text(&self) -> String {
        self.lock().text.clone()
    }

    /// Wrapper markup reflecting the current state
    pub fn element(&self) -> Element {
        let mut wrapper = Element::new("div")
            .with_class(WRAPPER_CLASS)
            .with_child(Element::new("div").with_class(MESSAGE_CLASS));
        self.apply_to(&mut wrapper);
        wrapper
    }

    /// Write the current text and visibility into rendered wrapper markup
    pub fn apply_to(&self, wrapper: &mut Element) {
        let (text, visible) = {
            let state = self.lock();
            (state.text.clone(), state.visible)
        };

        toggle_class(wrapper, WRAPPER_VISIBLE, visible);
        if let Some(message) = wrapper.find_mut(class(MESSAGE_CLASS)) {
            message.children = vec![VNode::text(text)];
            toggle_class(message, MESSAGE_VISIBLE, visible);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MessageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn toggle_class(element: &mut Element, name: &str, on: bool) {
    if on {
        element.add_class(name);
    } else {
        element.remove_class(name);
    }
}
