use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::domain::catalog::CatalogQuery;
use crate::domain::entities::record::{ListPage, Product, Record};
use crate::infra::http::client::ApiClient;
use crate::usecase::ports::remote::{CatalogSource, FetchError, RecordStore, RemoteListSource};

/// REST collection at `{base}/{R::KIND.path()}`.
pub struct HttpResource<R> {
    api: Arc<ApiClient>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for HttpResource<R> {
    fn clone(&self) -> Self {
        HttpResource {
            api: self.api.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> HttpResource<R> {
    pub fn new(api: Arc<ApiClient>) -> Self {
        HttpResource {
            api,
            _record: PhantomData,
        }
    }

    fn item_path(id: &str) -> String {
        format!("{}/{id}", R::KIND.path())
    }
}

#[async_trait]
impl<R: Record> RemoteListSource<R> for HttpResource<R> {
    async fn fetch(&self, page: u32, limit: u32) -> Result<ListPage<R>, FetchError> {
        let query = [("page", page.to_string()), ("limit", limit.to_string())];
        self.api.get_json(R::KIND.path(), &query).await
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for HttpResource<R> {
    async fn get(&self, id: &str) -> Result<R, FetchError> {
        self.api.get_json(&Self::item_path(id), &[]).await
    }

    async fn create(&self, draft: &Value) -> Result<Option<R>, FetchError> {
        self.api.send_json(Method::POST, R::KIND.path(), draft).await
    }

    async fn update(&self, id: &str, draft: &Value) -> Result<Option<R>, FetchError> {
        self.api
            .send_json(Method::PUT, &Self::item_path(id), draft)
            .await
    }

    async fn delete(&self, id: &str) -> Result<(), FetchError> {
        self.api.delete(&Self::item_path(id)).await
    }
}

/// Product listings at `{base}/product/{category|group}/{id}`.
#[derive(Clone)]
pub struct HttpCatalog {
    api: Arc<ApiClient>,
}

impl HttpCatalog {
    pub fn new(api: Arc<ApiClient>) -> Self {
        HttpCatalog { api }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn products(&self, query: &CatalogQuery) -> Result<ListPage<Product>, FetchError> {
        let path = format!("product/{}/{}", query.scope.path(), query.scope_id);
        self.api.get_json(&path, &query.query_params()).await
    }
}
