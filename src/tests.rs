use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::record::{Category, ListPage, Product, ResourceKind, Stock};
use crate::domain::entities::table::{PageWindow, RowsPerPage, SortConfig, SortDirection};
use crate::domain::pipeline::{build_rows, page_slice};
use crate::domain::projection::{CategoryRows, ProductRows, RowProjector};
use crate::domain::stats::sold_by_category;
use crate::ui::components::table::{table_body, TableBody};
use crate::ui::state::table_state::ChangeLog;
use crate::usecase::ports::remote::{FetchError, RecordStore, RemoteListSource};
use crate::usecase::services::list_service::{FetchWindow, ListController, ListService};
use crate::usecase::services::mutation_service::{Change, MutationService};

fn product(id: &str, name: &str, price: f64, sold: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        stock: Stock {
            stock: 10.0,
            unities_sold: sold,
        },
        ..Product::default()
    }
}

/// In-memory backend collection.
struct MemoryProducts {
    items: Mutex<Vec<Product>>,
}

impl MemoryProducts {
    fn with(items: Vec<Product>) -> Arc<Self> {
        Arc::new(MemoryProducts {
            items: Mutex::new(items),
        })
    }

    fn snapshot(&self) -> Vec<Product> {
        self.items.lock().expect("store lock").clone()
    }
}

#[async_trait]
impl RemoteListSource<Product> for MemoryProducts {
    async fn fetch(&self, page: u32, limit: u32) -> Result<ListPage<Product>, FetchError> {
        let items = self.snapshot();
        let start = ((page.max(1) - 1) * limit) as usize;
        let records = items.iter().skip(start).take(limit as usize).cloned().collect();
        Ok(ListPage {
            records,
            total_count: items.len() as u64,
        })
    }
}

#[async_trait]
impl RecordStore<Product> for MemoryProducts {
    async fn get(&self, id: &str) -> Result<Product, FetchError> {
        self.snapshot()
            .into_iter()
            .find(|product| product.id == id)
            .ok_or(FetchError::Status {
                status: 404,
                body: String::new(),
            })
    }

    async fn create(&self, draft: &Value) -> Result<Option<Product>, FetchError> {
        let created: Product =
            serde_json::from_value(draft.clone()).map_err(|err| FetchError::Decode(err.to_string()))?;
        self.items.lock().expect("store lock").push(created.clone());
        Ok(Some(created))
    }

    async fn update(&self, _id: &str, _draft: &Value) -> Result<Option<Product>, FetchError> {
        Ok(None)
    }

    async fn delete(&self, id: &str) -> Result<(), FetchError> {
        let mut items = self.items.lock().expect("store lock");
        let before = items.len();
        items.retain(|product| product.id != id);
        if items.len() == before {
            return Err(FetchError::Status {
                status: 404,
                body: "not found".to_string(),
            });
        }
        Ok(())
    }
}

fn names(rows: &[crate::domain::entities::row::DisplayRow]) -> Vec<&str> {
    rows.iter().map(|row| row.name()).collect()
}

#[tokio::test]
async fn fetched_products_flow_through_search_and_sort() {
    let store = MemoryProducts::with(vec![
        product("1", "Alpha", 10.0, 3.0),
        product("2", "beta", 5.0, 8.0),
        product("3", "Gamma100", 100.0, 1.0),
    ]);
    let service = ListService::<Product>::new(store.clone());
    let mut controller = ListController::<Product>::new(FetchWindow::first(100));

    let ticket = controller.begin();
    let result = service.fetch(controller.window()).await;
    assert!(controller.finish(ticket, result), "newest fetch should apply");

    let by_price = SortConfig::new("price", SortDirection::Asc);
    let rows = build_rows(&ProductRows, controller.records(), "", &by_price);
    assert_eq!(names(&rows), vec!["beta", "Alpha", "Gamma100"]);

    let rows = build_rows(&ProductRows, controller.records(), "", &by_price.toggle("price"));
    assert_eq!(names(&rows), vec!["Gamma100", "Alpha", "beta"]);

    let rows = build_rows(&ProductRows, controller.records(), "GAM", &SortConfig::default());
    assert_eq!(names(&rows), vec!["Gamma100"], "search should ignore case");

    let rows = build_rows(&ProductRows, controller.records(), "zzz", &SortConfig::default());
    assert_eq!(
        table_body(rows.len(), controller.is_loading(), ResourceKind::Product, &PageWindow::default()),
        TableBody::Empty {
            message: "No hay productos".to_string()
        }
    );
}

#[test]
fn loading_table_ignores_rows() {
    let controller = ListController::<Product>::new(FetchWindow::first(100));
    let rows = build_rows(&ProductRows, controller.records(), "", &SortConfig::default());

    assert_eq!(
        table_body(rows.len(), controller.is_loading(), ResourceKind::Product, &PageWindow::default()),
        TableBody::Loading { skeleton_rows: 10 }
    );
}

#[test]
fn changing_rows_per_page_returns_to_first_page() {
    let products: Vec<Product> = (0..120)
        .map(|idx| product(&format!("p-{idx:03}"), &format!("Producto {idx:03}"), idx as f64, 0.0))
        .collect();
    let rows = build_rows(
        &ProductRows,
        &products,
        "",
        &SortConfig::new("name", SortDirection::Asc),
    );

    let mut window = PageWindow::default();
    window.set_page(2);
    assert_eq!(page_slice(&rows, &window).len(), 20);
    assert_eq!(window.label(rows.len()), "41-60 de 120");

    window.set_rows_per_page(RowsPerPage::Fifty);

    assert_eq!(window.page(), 0, "page should reset");
    assert_eq!(page_slice(&rows, &window)[0].name(), "Producto 000");
    assert_eq!(window.label(rows.len()), "1-50 de 120");
}

#[tokio::test]
async fn delete_publishes_event_that_refreshes_watching_lists() {
    let store = MemoryProducts::with(vec![
        product("1", "Alpha", 10.0, 3.0),
        product("2", "beta", 5.0, 8.0),
    ]);
    let list = ListService::<Product>::new(store.clone());
    let mutations = MutationService::<Product>::new(store.clone());
    let mut products = ListController::<Product>::new(FetchWindow::first(100));
    let categories =
        ListController::<Category>::new(FetchWindow::first(100)).watching(ResourceKind::Product);

    let ticket = products.begin();
    let result = list.fetch(products.window()).await;
    products.finish(ticket, result);
    assert_eq!(products.records().len(), 2);

    let mut log = ChangeLog::default();
    let seen = log.sequence();
    let event = mutations.delete("1").await.expect("delete should succeed");
    assert_eq!(event.change, Change::Deleted);
    log.publish(event);

    let event = log.since(seen).next().expect("delete should be visible");
    assert!(products.on_change(event), "product list watches products");
    assert!(categories.on_change(event), "category sales depend on products");

    let ticket = products.begin();
    assert!(!products.is_loading(), "refetch should keep previous rows");
    let result = list.fetch(products.window()).await;
    products.finish(ticket, result);

    assert_eq!(products.total_count(), Some(1));
    assert_eq!(products.records()[0].name, "beta");
}

#[tokio::test]
async fn failed_mutation_emits_no_event() {
    let store = MemoryProducts::with(vec![product("1", "Alpha", 10.0, 3.0)]);
    let mutations = MutationService::<Product>::new(store.clone());

    let result = mutations.delete("missing").await;

    assert!(
        matches!(&result, Err(err) if err.is_not_found()),
        "unexpected result: {result:?}"
    );
    assert_eq!(store.snapshot().len(), 1);
}

#[tokio::test]
async fn created_record_id_is_carried_by_the_event() {
    let store = MemoryProducts::with(Vec::new());
    let mutations = MutationService::<Product>::new(store.clone());

    let (created, event) = mutations
        .create(&serde_json::json!({ "id": "p-9", "name": "Silla", "price": 120000 }))
        .await
        .expect("create should succeed");

    assert_eq!(created.map(|product| product.price), Some(120000.0));
    assert_eq!(event.id, "p-9");
    assert_eq!(event.resource, ResourceKind::Product);
}

#[tokio::test]
async fn slow_first_response_does_not_overwrite_newer_data() {
    let store = MemoryProducts::with(vec![product("1", "Alpha", 10.0, 3.0)]);
    let service = ListService::<Product>::new(store.clone());
    let mut controller = ListController::<Product>::new(FetchWindow::first(100));

    let first = controller.begin();
    let stale = service.fetch(controller.window()).await;

    store
        .items
        .lock()
        .expect("store lock")
        .push(product("2", "beta", 5.0, 8.0));
    let second = controller.begin();
    let fresh = service.fetch(controller.window()).await;

    assert!(controller.finish(second, fresh));
    assert!(!controller.finish(first, stale), "stale response should be dropped");
    assert_eq!(controller.total_count(), Some(2));
}

#[test]
fn category_table_and_sales_share_the_same_records() {
    let categories = vec![
        Category {
            id: "c-1".to_string(),
            name: "Hogar".to_string(),
            description: "Casa".to_string(),
            products: vec![product("1", "Lámpara", 10.0, 4.0), product("2", "Mesa", 20.0, 6.0)],
            ..Category::default()
        },
        Category {
            id: "c-2".to_string(),
            name: "Audio".to_string(),
            products: vec![product("3", "Parlante", 30.0, 2.0)],
            ..Category::default()
        },
    ];

    let rows = build_rows(
        &CategoryRows,
        &categories,
        "",
        &SortConfig::new("name", SortDirection::Asc),
    );
    assert_eq!(names(&rows), vec!["Audio", "Hogar"]);
    assert_eq!(rows[1].get("description").and_then(|v| v.as_str()), Some("Casa"));
    assert_eq!(rows[0].id(), "c-2");
    assert!(CategoryRows.sort_columns().iter().all(|column| !column.label.is_empty()));

    let sales = sold_by_category(&categories);
    assert_eq!(sales[0].value, 10.0);
    assert_eq!(sales[1].value, 2.0);
}
