use crate::block::Block;
use crate::decorators;
use crate::error::{DecorateError, DecorateResult};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Result of running a decorator over a block
#[derive(Debug)]
pub enum Outcome {
    /// The block was rebuilt into its final markup
    Decorated(Block),

    /// Mandatory sections were missing; the block is handed back unchanged
    Inert { block: Block, reason: String },
}

/// A synchronous block transform
pub trait Decorator: Send + Sync {
    /// Block name this decorator handles (the block's first class)
    fn name(&self) -> &'static str;

    fn transform(&self, block: Block) -> Outcome;
}

/// What happened to a block passed through [`apply`]
#[derive(Debug)]
pub enum Decoration {
    Applied(Block),
    AlreadyDecorated(Block),
    Inert(Block),
}

impl Decoration {
    pub fn into_block(self) -> Block {
        match self {
            Decoration::Applied(block)
            | Decoration::AlreadyDecorated(block)
            | Decoration::Inert(block) => block,
        }
    }

    pub fn block(&self) -> &Block {
        match self {
            Decoration::Applied(block)
            | Decoration::AlreadyDecorated(block)
            | Decoration::Inert(block) => block,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Decoration::Applied(_))
    }
}

/// Run a decorator, honouring and updating the block's decoration state
pub fn apply(decorator: &dyn Decorator, block: Block) -> Decoration {
    if block.is_decorated() {
        debug!(block = block.name(), "Block already decorated, skipping");
        return Decoration::AlreadyDecorated(block);
    }

    match decorator.transform(block) {
        Outcome::Decorated(mut block) => {
            block.mark_decorated();
            debug!(block = block.name(), "Decorated block");
            Decoration::Applied(block)
        }
        Outcome::Inert { block, reason } => {
            warn!(block = block.name(), %reason, "Block left undecorated");
            Decoration::Inert(block)
        }
    }
}

/// Decorators keyed by block name
pub struct BlockRegistry {
    decorators: HashMap<&'static str, Box<dyn Decorator>>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            decorators: HashMap::new(),
        }
    }

    /// Registry with every built-in synchronous decorator
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(decorators::column::Column);
        registry.register(decorators::column_item::ColumnItem);
        registry.register(decorators::column_card_item::ColumnCardItem);
        registry.register(decorators::column_layout::ColumnLayout);
        registry.register(decorators::columns::Columns);
        registry.register(decorators::hero_banner::HeroBanner);
        registry.register(decorators::text_with_button::TextWithButton);
        registry.register(decorators::text_with_image::TextWithImage);
        registry
    }

    /// Register a decorator, replacing any previous one with the same name
    pub fn register<D: Decorator + 'static>(&mut self, decorator: D) {
        self.decorators.insert(decorator.name(), Box::new(decorator));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Decorator> {
        self.decorators.get(name).map(|decorator| decorator.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.decorators.contains_key(name)
    }

    /// Registered block names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.decorators.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Decorate a block with the decorator registered under its name
    pub fn decorate(&self, block: Block) -> DecorateResult<Decoration> {
        let decorator = self
            .get(block.name())
            .ok_or_else(|| DecorateError::UnknownBlock(block.name().to_string()))?;
        Ok(apply(decorator, block))
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
