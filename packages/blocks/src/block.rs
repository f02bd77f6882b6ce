use crate::error::{DecorateError, DecorateResult};
use storefront_dom::{parse_element, render_element, Element, RenderOptions};

/// Attribute persisting the decoration state in rendered markup
pub const BLOCK_STATUS_ATTR: &str = "data-block-status";

const DECORATED: &str = "decorated";

/// Whether a block has already been turned into its final markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationState {
    Pending,
    Decorated,
}

/// An authored block and its decoration state
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    name: String,
    root: Element,
    state: DecorationState,
}

impl Block {
    /// Wrap an element as the named block. The state is read back from
    /// [`BLOCK_STATUS_ATTR`] so markup decorated earlier is recognized.
    pub fn new(name: impl Into<String>, root: Element) -> Self {
        let state = match root.attr(BLOCK_STATUS_ATTR) {
            Some(DECORATED) => DecorationState::Decorated,
            _ => DecorationState::Pending,
        };
        Self {
            name: name.into(),
            root,
            state,
        }
    }

    /// Wrap an element, naming the block after its first class
    pub fn from_element(root: Element) -> DecorateResult<Self> {
        let name = root
            .classes()
            .next()
            .map(str::to_string)
            .ok_or(DecorateError::Unnamed)?;
        Ok(Self::new(name, root))
    }

    /// Parse block markup
    pub fn parse(html: &str) -> DecorateResult<Self> {
        Self::from_element(parse_element(html)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> DecorationState {
        self.state
    }

    pub fn is_decorated(&self) -> bool {
        self.state == DecorationState::Decorated
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn into_element(self) -> Element {
        self.root
    }

    /// Record a successful build: sets the flag and the status attribute
    pub fn mark_decorated(&mut self) {
        self.state = DecorationState::Decorated;
        self.root.set_attr(BLOCK_STATUS_ATTR, DECORATED);
    }

    pub fn to_html(&self) -> String {
        render_element(&self.root, &RenderOptions::default())
    }
}
