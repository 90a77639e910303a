use dioxus::prelude::*;
use tracing::error;

use crate::app::{AppServices, Route};
use crate::domain::pipeline::build_rows;
use crate::domain::projection::{ProductRows, RowProjector};
use crate::domain::stats::top_products;
use crate::ui::components::charts::{BarList, NotFound};
use crate::ui::components::table::DataTable;
use crate::ui::components::toolbar::{SearchBox, SortControl};
use crate::ui::pages::confirm_delete;
use crate::ui::state::list_state::use_remote_list;
use crate::ui::state::table_state::{ChangeLog, TableState};
use crate::usecase::services::list_service::{FetchWindow, ListController};

const TOP_PRODUCTS: usize = 5;

#[component]
pub fn ProductsPage() -> Element {
    let services = use_context::<AppServices>();
    let mut route = use_context::<Signal<Route>>();
    let mut changes = use_context::<Signal<ChangeLog>>();
    let TableState {
        mut search_term,
        sort,
        mut busy,
        mut status,
    } = TableState::new();

    let limit = services.list_limit;
    let (controller, reload) = use_remote_list(services.products.clone(), move || {
        ListController::new(FetchWindow::first(limit))
    });
    let mutations = services.product_mutations.clone();

    let (rows, server_total, failure, is_loading, best_sellers) = {
        let list = controller.read();
        (
            build_rows(&ProductRows, list.records(), &search_term(), &sort()),
            list.total_count(),
            list.error().cloned(),
            list.is_loading(),
            top_products(list.records(), TOP_PRODUCTS),
        )
    };

    let content = match failure {
        Some(err) => rsx! {
            NotFound { message: format!("No se pudieron cargar los productos: {err}") }
        },
        None => rsx! {
            DataTable {
                columns: ProductRows.columns(),
                rows: rows,
                is_loading: is_loading,
                kind: ProductRows.kind(),
                images: services.images.clone(),
                on_edit: move |id: String| route.set(Route::ProductDetail { id }),
                on_delete: move |id: String| {
                    let name = controller
                        .peek()
                        .records()
                        .iter()
                        .find(|product| product.id == id)
                        .map(|product| product.name.clone())
                        .unwrap_or_else(|| id.clone());
                    if !confirm_delete("Eliminar producto", &name) {
                        return;
                    }
                    let mutations = mutations.clone();
                    busy.set(true);
                    spawn(async move {
                        match mutations.delete(&id).await {
                            Ok(event) => {
                                status.set(format!("Producto \"{name}\" eliminado"));
                                changes.write().publish(event);
                            }
                            Err(err) => {
                                error!(%id, error = %err, "product delete failed");
                                status.set(format!("No se pudo eliminar el producto: {err}"));
                            }
                        }
                        busy.set(false);
                    });
                },
            }
            {server_total.map(|total| rsx! {
                p { style: "color: #666; margin: 4px 0;", "{total} en el servidor" }
            })}
            BarList { title: "Productos más vendidos", data: best_sellers }
        },
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; margin-bottom: 12px;",
            h2 { style: "margin: 0; flex: 1;", "Gestionar Productos" }
            SearchBox { placeholder: "Buscar", on_search: move |term: String| search_term.set(term) }
            SortControl { columns: ProductRows.sort_columns(), sort: sort }
            button {
                disabled: busy(),
                onclick: move |_| reload.call(()),
                "Recargar"
            }
        }
        {content}
        if !status().is_empty() {
            p { style: "color: #444;", "{status}" }
        }
    }
}
