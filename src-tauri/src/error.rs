use thiserror::Error;

use crate::datasource::ResolveError;

#[derive(Debug, Error)]
pub enum InsightdeckError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error(transparent)]
    DataSource(#[from] ResolveError),

    #[error("Chat error: {0}")]
    Chat(String),
}

impl From<InsightdeckError> for String {
    fn from(err: InsightdeckError) -> Self {
        err.to_string()
    }
}
