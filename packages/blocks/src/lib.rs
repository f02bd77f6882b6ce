//! Block decorators for the storefront.
//!
//! A block is an authored content unit (a `div` whose first class names the
//! block) that is turned into final styled markup by its decorator. Decoration
//! is a transform over an owned tree: the decorator takes the [`Block`] by value
//! and hands back the rebuilt one.
//!
//! ```rust,ignore
//! use storefront_blocks::{Block, BlockRegistry};
//!
//! let registry = BlockRegistry::with_defaults();
//! let block = Block::parse(r#"<div class="column"><div>3</div><div>A</div><div>B</div><div>C</div></div>"#)?;
//! let decorated = registry.decorate(block)?.into_block();
//! println!("{}", decorated.to_html());
//! ```

pub mod authoring;
pub mod block;
pub mod config;
pub mod content;
pub mod decorators;
pub mod error;
pub mod page;
pub mod registry;

#[cfg(test)]
mod tests_authoring;

#[cfg(test)]
mod tests_columns;

#[cfg(test)]
mod tests_config;

#[cfg(test)]
mod tests_hero_banner;

#[cfg(test)]
mod tests_page;

#[cfg(test)]
mod tests_text_with_button;


pub use authoring::{AuthoringField, FieldKind, FieldShape, FieldSpec, ResolvedFields};
pub use block::{Block, DecorationState, BLOCK_STATUS_ATTR};
pub use config::{read_block_config, to_class_name, BlockConfig, ConfigValue};
pub use error::{DecorateError, DecorateResult};
pub use page::{decorate_page, put_block, take_blocks_named, BlockPath, PageReport};
pub use registry::{apply, BlockRegistry, Decoration, Decorator, Outcome};
