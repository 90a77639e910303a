use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::catalog::CatalogQuery;
use crate::domain::entities::record::{ListPage, Product};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("http {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status: 404, .. })
    }
}

/// One page of records from a backend list endpoint.
#[async_trait]
pub trait RemoteListSource<R>: Send + Sync {
    async fn fetch(&self, page: u32, limit: u32) -> Result<ListPage<R>, FetchError>;
}

/// Single-record reads and mutations on a backend collection.
#[async_trait]
pub trait RecordStore<R>: Send + Sync {
    async fn get(&self, id: &str) -> Result<R, FetchError>;

    /// Returns the created record, or `None` when the backend answers with an empty body.
    async fn create(&self, draft: &Value) -> Result<Option<R>, FetchError>;

    async fn update(&self, id: &str, draft: &Value) -> Result<Option<R>, FetchError>;

    async fn delete(&self, id: &str) -> Result<(), FetchError>;
}

/// Server-ordered, server-paginated product listings for the catalog pages.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn products(&self, query: &CatalogQuery) -> Result<ListPage<Product>, FetchError>;
}
