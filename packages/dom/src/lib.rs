//! Owned HTML tree used by the block decorators.
//!
//! Authored fragments are parsed into [`VNode`] trees, transformed by value and
//! rendered back to markup. Nodes are moved between parents rather than shared,
//! so a transform never leaves two owners of the same authored content.

pub mod error;
pub mod parse;
pub mod query;
pub mod render;
pub mod vdom;


pub use error::{DomError, DomResult};
pub use parse::{decode_entities, parse_element, parse_fragment};
pub use render::{render, render_element, render_nodes, RenderOptions};
pub use vdom::{Attributes, Element, VNode};
