use storefront_dom::DomError;
use thiserror::Error;

pub type DecorateResult<T> = Result<T, DecorateError>;

/// Errors that can occur before a decorator runs.
///
/// Missing authored content is never an error: decorators treat it as an
/// absent feature or leave the block inert.
#[derive(Error, Debug)]
pub enum DecorateError {
    #[error("Markup error: {0}")]
    Markup(#[from] DomError),

    #[error("Block root has no class naming the block")]
    Unnamed,

    #[error("No decorator registered for block '{0}'")]
    UnknownBlock(String),
}
