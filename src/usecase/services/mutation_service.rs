use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::domain::entities::record::{Record, ResourceKind};
use crate::usecase::ports::remote::{FetchError, RecordStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Created,
    Updated,
    Deleted,
}

/// "Data changed for resource X", sent from a mutation to the lists that show X.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub resource: ResourceKind,
    pub change: Change,
    pub id: String,
}

pub struct MutationService<R> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R> Clone for MutationService<R> {
    fn clone(&self) -> Self {
        MutationService {
            store: self.store.clone(),
        }
    }
}

impl<R: Record> MutationService<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        MutationService { store }
    }

    fn event(change: Change, id: impl Into<String>) -> ChangeEvent {
        ChangeEvent {
            resource: R::KIND,
            change,
            id: id.into(),
        }
    }

    pub async fn get(&self, id: &str) -> Result<R, FetchError> {
        self.store.get(id).await
    }

    /// The event id is the created record's id, or empty when the backend
    /// does not echo the record.
    ///
    /// The admin pages have no record forms, so only `get` and `delete` are
    /// reached from the UI; `create` and `update` serve draft-submitting callers.
    pub async fn create(&self, draft: &Value) -> Result<(Option<R>, ChangeEvent), FetchError> {
        let created = self.store.create(draft).await?;
        let id = created.as_ref().map(|r| r.id().to_string()).unwrap_or_default();
        info!(resource = ?R::KIND, %id, "record created");
        Ok((created, Self::event(Change::Created, id)))
    }

    pub async fn update(&self, id: &str, draft: &Value) -> Result<(Option<R>, ChangeEvent), FetchError> {
        let updated = self.store.update(id, draft).await?;
        info!(resource = ?R::KIND, %id, "record updated");
        Ok((updated, Self::event(Change::Updated, id)))
    }

    pub async fn delete(&self, id: &str) -> Result<ChangeEvent, FetchError> {
        self.store.delete(id).await?;
        info!(resource = ?R::KIND, %id, "record deleted");
        Ok(Self::event(Change::Deleted, id))
    }
}
