use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Backend collections this app lists and mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Product,
    Category,
}

impl ResourceKind {
    /// Path segment of the backend collection.
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Product => "product",
            ResourceKind::Category => "category",
        }
    }

    /// Plural label used in empty-table messages.
    pub fn plural_label(self) -> &'static str {
        match self {
            ResourceKind::Product => "productos",
            ResourceKind::Category => "categorías",
        }
    }
}

/// A backend-owned entity that can be listed and mutated over HTTP.
pub trait Record: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default)]
    pub stock: f64,
    #[serde(default)]
    pub unities_sold: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub name: String,
}

// Missing optional fields fall back to defaults instead of failing the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub stock: Stock,
    #[serde(default)]
    pub category: CategoryRef,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub rating: f64,
}

impl Record for Product {
    const KIND: ResourceKind = ResourceKind::Product;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Record for Category {
    const KIND: ResourceKind = ResourceKind::Category;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// One fetched page: the records plus the server-side unfiltered count.
///
/// Decoded from the backend's `[records, totalCount]` tuple.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "(Vec<R>, u64)")]
#[serde(bound(deserialize = "R: DeserializeOwned"))]
pub struct ListPage<R> {
    pub records: Vec<R>,
    pub total_count: u64,
}

impl<R> From<(Vec<R>, u64)> for ListPage<R> {
    fn from((records, total_count): (Vec<R>, u64)) -> Self {
        ListPage {
            records,
            total_count,
        }
    }
}

impl<R> Default for ListPage<R> {
    fn default() -> Self {
        ListPage {
            records: Vec::new(),
            total_count: 0,
        }
    }
}
