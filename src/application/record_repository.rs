// Repository trait for backend record access
use crate::domain::query::QueryParameters;
use async_trait::async_trait;
use thiserror::Error;

/// One backend-returned data item. The shape is backend-defined and varies
/// between records, so it stays opaque JSON until field extraction.
pub type Record = serde_json::Value;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned status {status}: {body}")]
    Backend { status: u16, body: String },
}

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Fetch the full ordered record sequence for one relative time-range
    /// query. Exactly one retrieval per call; no retry or timeout.
    async fn fetch_records(&self, params: &QueryParameters)
        -> Result<Vec<Record>, RetrievalError>;
}
