//! Event bus contract and an in-process implementation.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

pub const PRODUCT_ADDED: &str = "cart/product/added";
pub const PRODUCT_UPDATED: &str = "cart/product/updated";

pub type EventHandler = Arc<dyn Fn(&Value) + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Replay the last payload of the event on subscription
    pub eager: bool,
}

impl ListenerOptions {
    pub fn eager() -> Self {
        Self { eager: true }
    }
}

/// Handle returned by [`EventBus::on`], used to unsubscribe
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subscription {
    event: String,
    id: u64,
}

impl Subscription {
    pub fn event(&self) -> &str {
        &self.event
    }
}

pub trait EventBus: Send + Sync {
    fn on(&self, event: &str, handler: EventHandler, options: ListenerOptions) -> Subscription;

    fn off(&self, subscription: &Subscription);
}

#[derive(Default)]
struct BusState {
    next_id: u64,
    listeners: HashMap<String, Vec<(u64, EventHandler)>>,
    last: HashMap<String, Value>,
}

/// Event bus living in this process. Handlers run on the emitting thread.
#[derive(Default)]
pub struct LocalEventBus {
    state: Mutex<BusState>,
}

impl LocalEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `payload` to every listener of `event` and remember it for eager subscribers
    pub fn emit(&self, event: &str, payload: Value) {
        let handlers: Vec<EventHandler> = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.last.insert(event.to_string(), payload.clone());
            state
                .listeners
                .get(event)
                .map(|listeners| listeners.iter().map(|(_, handler)| handler.clone()).collect())
                .unwrap_or_default()
        };

        debug!(event, listeners = handlers.len(), "Emitting event");
        for handler in handlers {
            handler(&payload);
        }
    }

    pub fn listener_count(&self, event: &str) -> usize {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.listeners.get(event).map_or(0, Vec::len)
    }
}

impl EventBus for LocalEventBus {
    fn on(&self, event: &str, handler: EventHandler, options: ListenerOptions) -> Subscription {
        let (id, replay) = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.next_id += 1;
            let id = state.next_id;
            state
                .listeners
                .entry(event.to_string())
                .or_default()
                .push((id, handler.clone()));
            let replay = if options.eager {
                state.last.get(event).cloned()
            } else {
                None
            };
            (id, replay)
        };

        if let Some(payload) = replay {
            debug!(event, "Replaying last payload to eager listener");
            handler(&payload);
        }

        Subscription {
            event: event.to_string(),
            id,
        }
    }

    fn off(&self, subscription: &Subscription) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(listeners) = state.listeners.get_mut(&subscription.event) {
            listeners.retain(|(id, _)| *id != subscription.id);
        }
    }
}
