use dioxus::prelude::*;
use tracing::error;

use crate::app::{AppServices, Route};
use crate::domain::catalog::CatalogScope;
use crate::domain::entities::record::ResourceKind;
use crate::domain::pipeline::build_rows;
use crate::domain::projection::{CategoryRows, RowProjector};
use crate::domain::stats::sold_by_category;
use crate::ui::components::charts::{BarList, NotFound};
use crate::ui::components::table::DataTable;
use crate::ui::components::toolbar::{SearchBox, SortControl};
use crate::ui::pages::confirm_delete;
use crate::ui::state::list_state::use_remote_list;
use crate::ui::state::table_state::{ChangeLog, TableState};
use crate::usecase::services::list_service::{FetchWindow, ListController};

#[component]
pub fn CategoriesPage() -> Element {
    let services = use_context::<AppServices>();
    let mut route = use_context::<Signal<Route>>();
    let mut changes = use_context::<Signal<ChangeLog>>();
    let TableState {
        mut search_term,
        sort,
        mut busy,
        mut status,
    } = TableState::new();

    // Sales per category come from the embedded products.
    let limit = services.list_limit;
    let (controller, reload) = use_remote_list(services.categories.clone(), move || {
        ListController::new(FetchWindow::first(limit)).watching(ResourceKind::Product)
    });
    let mutations = services.category_mutations.clone();

    let (rows, server_total, failure, is_loading, sales) = {
        let list = controller.read();
        (
            build_rows(&CategoryRows, list.records(), &search_term(), &sort()),
            list.total_count(),
            list.error().cloned(),
            list.is_loading(),
            sold_by_category(list.records()),
        )
    };

    let category_name = move |id: &str| {
        controller
            .peek()
            .records()
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    let content = match failure {
        Some(err) => rsx! {
            NotFound { message: format!("No se pudieron cargar las categorías: {err}") }
        },
        None => rsx! {
            DataTable {
                columns: CategoryRows.columns(),
                rows: rows,
                is_loading: is_loading,
                kind: CategoryRows.kind(),
                images: services.images.clone(),
                on_edit: move |id: String| {
                    let title = category_name(&id);
                    route.set(Route::Catalog {
                        scope: CatalogScope::Category,
                        id,
                        title,
                    });
                },
                on_delete: move |id: String| {
                    let name = category_name(&id);
                    if !confirm_delete("Eliminar categoría", &name) {
                        return;
                    }
                    let mutations = mutations.clone();
                    busy.set(true);
                    spawn(async move {
                        match mutations.delete(&id).await {
                            Ok(event) => {
                                status.set(format!("Categoría \"{name}\" eliminada"));
                                changes.write().publish(event);
                            }
                            Err(err) => {
                                error!(%id, error = %err, "category delete failed");
                                status.set(format!("No se pudo eliminar la categoría: {err}"));
                            }
                        }
                        busy.set(false);
                    });
                },
            }
            {server_total.map(|total| rsx! {
                p { style: "color: #666; margin: 4px 0;", "{total} en el servidor" }
            })}
            BarList { title: "Ventas por Categoría", data: sales }
        },
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; margin-bottom: 12px;",
            h2 { style: "margin: 0; flex: 1;", "Gestionar Categorías" }
            SearchBox { placeholder: "Buscar", on_search: move |term: String| search_term.set(term) }
            SortControl { columns: CategoryRows.sort_columns(), sort: sort }
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
