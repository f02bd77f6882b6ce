use storefront_blocks::DecorateError;
use thiserror::Error;

pub type MiniCartResult<T> = Result<T, MiniCartError>;

#[derive(Error, Debug)]
pub enum MiniCartError {
    #[error("Failed to fetch placeholders: {0}")]
    Placeholders(String),

    #[error("Cart API unavailable: {0}")]
    CartApi(String),

    #[error("Cart mutation failed: {0}")]
    Mutation(String),

    #[error("Mini cart render failed: {0}")]
    Render(String),

    #[error("Mini cart block is already decorated")]
    AlreadyDecorated,

    #[error("No async runtime available for the update message timer")]
    NoRuntime,

    #[error("Block error: {0}")]
    Block(#[from] DecorateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
