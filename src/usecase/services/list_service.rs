use std::sync::Arc;

use tracing::{debug, info_span, warn, Instrument};

use crate::domain::catalog::CatalogQuery;
use crate::domain::entities::record::{ListPage, Product, Record, ResourceKind};
use crate::usecase::ports::remote::{CatalogSource, FetchError, RemoteListSource};
use crate::usecase::services::mutation_service::ChangeEvent;

/// The `page`/`limit` pair sent to a list endpoint. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub page: u32,
    pub limit: u32,
}

impl FetchWindow {
    pub fn first(limit: u32) -> Self {
        FetchWindow { page: 1, limit }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus<R> {
    Loading,
    Ready(ListPage<R>),
    Failed(FetchError),
}

/// Identifies one fetch; only the newest ticket may update the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Load state of one list view: which fetch is current, what it returned,
/// and which change events invalidate it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListController<R> {
    window: FetchWindow,
    watches: Vec<ResourceKind>,
    generation: u64,
    status: ListStatus<R>,
}

impl<R: Record> ListController<R> {
    pub fn new(window: FetchWindow) -> Self {
        ListController {
            window,
            watches: vec![R::KIND],
            generation: 0,
            status: ListStatus::Loading,
        }
    }

    /// Also refetch when `kind` changes.
    pub fn watching(mut self, kind: ResourceKind) -> Self {
        if !self.watches.contains(&kind) {
            self.watches.push(kind);
        }
        self
    }

    pub fn window(&self) -> FetchWindow {
        self.window
    }

    /// `true` until the first fetch settles. Refetches keep showing the last data.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, ListStatus::Loading)
    }

    pub fn records(&self) -> &[R] {
        match &self.status {
            ListStatus::Ready(page) => &page.records,
            _ => &[],
        }
    }

    pub fn total_count(&self) -> Option<u64> {
        match &self.status {
            ListStatus::Ready(page) => Some(page.total_count),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            ListStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Starts a fetch, superseding any fetch still in flight.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        if matches!(self.status, ListStatus::Failed(_)) {
            self.status = ListStatus::Loading;
        }
        FetchTicket(self.generation)
    }

    /// Applies a fetch result. Returns `false` for a superseded ticket.
    pub fn finish(&mut self, ticket: FetchTicket, result: Result<ListPage<R>, FetchError>) -> bool {
        if ticket.0 != self.generation {
            debug!(resource = ?R::KIND, ticket = ticket.0, current = self.generation, "discarding stale list response");
            return false;
        }
        self.status = match result {
            Ok(page) => ListStatus::Ready(page),
            Err(err) => {
                warn!(resource = ?R::KIND, error = %err, "list fetch failed");
                ListStatus::Failed(err)
            }
        };
        true
    }

    /// Whether `event` invalidates this list and it should refetch.
    pub fn on_change(&self, event: &ChangeEvent) -> bool {
        self.watches.contains(&event.resource)
    }
}

/// Runs list fetches against a remote source.
pub struct ListService<R> {
    source: Arc<dyn RemoteListSource<R>>,
}

impl<R> Clone for ListService<R> {
    fn clone(&self) -> Self {
        ListService {
            source: self.source.clone(),
        }
    }
}

impl<R: Record> ListService<R> {
    pub fn new(source: Arc<dyn RemoteListSource<R>>) -> Self {
        ListService { source }
    }

    pub async fn fetch(&self, window: FetchWindow) -> Result<ListPage<R>, FetchError> {
        let span = info_span!("list_fetch", resource = ?R::KIND, page = window.page, limit = window.limit);
        async {
            let result = self.source.fetch(window.page, window.limit).await;
            if let Ok(page) = &result {
                debug!(records = page.records.len(), total = page.total_count, "list page loaded");
            }
            result
        }
        .instrument(span)
        .await
    }
}

pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl Clone for CatalogService {
    fn clone(&self) -> Self {
        CatalogService {
            source: self.source.clone(),
        }
    }
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        CatalogService { source }
    }

    pub async fn fetch(&self, query: &CatalogQuery) -> Result<ListPage<Product>, FetchError> {
        let span = info_span!(
            "catalog_fetch",
            scope = query.scope.path(),
            id = %query.scope_id,
            order = %query.order,
            page = query.page
        );
        self.source.products(query).instrument(span).await
    }
}
