use thiserror::Error;

pub type DomResult<T> = Result<T, DomError>;

/// Errors that can occur while reading authored markup
#[derive(Error, Debug)]
pub enum DomError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Fragment contains no element")]
    NoElement,
}
