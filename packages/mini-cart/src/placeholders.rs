use crate::error::MiniCartResult;
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Translated strings, grouped by namespace (`{"Global": {"MiniCartAddedMessage": ..}}`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placeholders(Value);

impl Placeholders {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn get(&self, namespace: &str, key: &str) -> Option<&str> {
        self.0.get(namespace)?.get(key)?.as_str()
    }

    pub fn added_message(&self) -> Option<&str> {
        self.get("Global", "MiniCartAddedMessage")
    }

    pub fn updated_message(&self) -> Option<&str> {
        self.get("Global", "MiniCartUpdatedMessage")
    }
}

#[async_trait]
pub trait PlaceholderSource: Send + Sync {
    async fn fetch_placeholders(&self) -> MiniCartResult<Placeholders>;
}

#[async_trait]
impl PlaceholderSource for Placeholders {
    async fn fetch_placeholders(&self) -> MiniCartResult<Placeholders> {
        Ok(self.clone())
    }
}

/// Placeholders read from a JSON file
#[derive(Debug, Clone)]
pub struct JsonPlaceholders {
    path: PathBuf,
}

impl JsonPlaceholders {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PlaceholderSource for JsonPlaceholders {
    async fn fetch_placeholders(&self) -> MiniCartResult<Placeholders> {
        debug!(path = %self.path.display(), "Reading placeholders");
        let content = tokio::fs::read_to_string(&self.path).await?;
        let value: Value = serde_json::from_str(&content)?;
        Ok(Placeholders(value))
    }
}
