use dioxus::prelude::*;

use crate::domain::entities::record::ResourceKind;
use crate::domain::entities::row::DisplayRow;
use crate::domain::entities::table::{ColumnDef, PageWindow, RowsPerPage};
use crate::domain::projection::{ACTIONS_COLUMN, IMAGE_COLUMN};
use crate::infra::assets::ImageResolver;

pub const SKELETON_ROWS: usize = 10;

/// What the table body shows for the current inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Placeholder rows; `rows` is ignored while loading.
    Loading { skeleton_rows: usize },
    /// A single full-width message row.
    Empty { message: String },
    /// The `start..end` window of the rows.
    Ready { start: usize, end: usize },
}

pub fn table_body(row_count: usize, is_loading: bool, kind: ResourceKind, window: &PageWindow) -> TableBody {
    if is_loading {
        return TableBody::Loading {
            skeleton_rows: SKELETON_ROWS,
        };
    }
    if row_count == 0 {
        return TableBody::Empty {
            message: format!("No hay {}", kind.plural_label()),
        };
    }
    let (start, end) = window.range(row_count);
    TableBody::Ready { start, end }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedCell {
    Actions { row_id: String },
    Image { src: String },
    Text(String),
}

pub fn render_cell(column: &ColumnDef, row: &DisplayRow, images: &ImageResolver) -> RenderedCell {
    match column.id {
        ACTIONS_COLUMN => RenderedCell::Actions {
            row_id: row.id().to_string(),
        },
        IMAGE_COLUMN => {
            let reference = row
                .get(IMAGE_COLUMN)
                .and_then(|value| value.as_str())
                .unwrap_or_default();
            RenderedCell::Image {
                src: images.resolve(reference),
            }
        }
        id => RenderedCell::Text(
            row.get(id)
                .map(|value| column.format.apply(value))
                .unwrap_or_default(),
        ),
    }
}

pub fn table_container_style() -> &'static str {
    "max-height: 440px; overflow: auto; border: 1px solid #ddd; border-radius: 8px; background: #fff;"
}

pub fn table_header_cell_style(column: &ColumnDef) -> String {
    format!(
        "position: sticky; top: 0; z-index: 1; background: #fafafa; white-space: nowrap; color: #666; font-weight: bold; font-size: 1rem; padding: 8px; border-bottom: 1px solid #ddd; text-align: {}; min-width: {}px;",
        column.align.css(),
        column.min_width
    )
}

fn body_cell_style(column: &ColumnDef) -> String {
    format!(
        "padding: 8px; border-bottom: 1px solid #eee; font-size: 1rem; text-align: {};",
        column.align.css()
    )
}

fn cell_view(
    column: &ColumnDef,
    row: &DisplayRow,
    images: &ImageResolver,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    match render_cell(column, row, images) {
        RenderedCell::Actions { row_id } => {
            let edit_id = row_id.clone();
            rsx! {
                td { key: "{column.id}", style: "{body_cell_style(column)}",
                    button {
                        title: "Editar",
                        style: "color: #1565c0; border: none; background: none; cursor: pointer;",
                        onclick: move |_| on_edit.call(edit_id.clone()),
                        "Editar"
                    }
                    button {
                        title: "Eliminar",
                        style: "color: #c62828; border: none; background: none; cursor: pointer;",
                        onclick: move |_| on_delete.call(row_id.clone()),
                        "Eliminar"
                    }
                }
            }
        }
        RenderedCell::Image { src } => rsx! {
            td { key: "{column.id}", style: "padding: 4px; text-align: center;",
                img {
                    src: "{src}",
                    alt: "{row.name()}",
                    style: "width: 50px; height: 50px; object-fit: cover;",
                }
            }
        },
        RenderedCell::Text(text) => rsx! {
            td { key: "{column.id}", style: "{body_cell_style(column)}", "{text}" }
        },
    }
}

/// Fixed-schema table over already sorted rows. Page index and size are
/// local; paging never triggers a fetch.
#[component]
pub fn DataTable(
    columns: &'static [ColumnDef],
    rows: Vec<DisplayRow>,
    is_loading: bool,
    kind: ResourceKind,
    images: ImageResolver,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let mut window = use_signal(PageWindow::default);
    let current = window();
    let column_count = columns.len();
    let rows_per_page = current.rows_per_page().value();
    let label = current.label(rows.len());
    let has_previous = current.has_previous();
    let has_next = current.has_next(rows.len());

    let body_rows = match table_body(rows.len(), is_loading, kind, &current) {
        TableBody::Loading { skeleton_rows } => rsx! {
            for idx in 0..skeleton_rows {
                tr { key: "skeleton-{idx}",
                    for column in columns.iter() {
                        td { key: "{column.id}", style: "padding: 8px;",
                            div { style: "width: 100%; height: 20px; background: #e8e8e8; border-radius: 4px;" }
                        }
                    }
                }
            }
        },
        TableBody::Empty { message } => rsx! {
            tr {
                td { colspan: "{column_count}", style: "padding: 16px; text-align: center;", "{message}" }
            }
        },
        TableBody::Ready { start, end } => rsx! {
            for row in rows[start..end].iter() {
                tr { key: "{row.id()}",
                    for column in columns.iter() {
                        {cell_view(column, row, &images, on_edit, on_delete)}
                    }
                }
            }
        },
    };

    rsx! {
        div {
            style: "{table_container_style()}",
            table { style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column.id}", style: "{table_header_cell_style(column)}", "{column.label}" }
                        }
                    }
                }
                tbody { {body_rows} }
            }
        }
        div {
            style: "display: flex; gap: 12px; align-items: center; justify-content: flex-end; padding: 8px 0;",
            span { "Filas por página:" }
            select {
                value: "{rows_per_page}",
                onchange: move |event| {
                    if let Some(choice) = event
                        .value()
                        .parse::<usize>()
                        .ok()
                        .and_then(RowsPerPage::from_value)
                    {
                        window.write().set_rows_per_page(choice);
                    }
                },
                for choice in RowsPerPage::ALL {
                    option {
                        value: "{choice.value()}",
                        selected: choice.value() == rows_per_page,
                        "{choice.value()}"
                    }
                }
            }
            span { "{label}" }
            button {
                disabled: !has_previous,
                onclick: move |_| {
                    let page = window().page();
                    window.write().set_page(page.saturating_sub(1));
                },
                "‹"
            }
            button {
                disabled: !has_next,
                onclick: move |_| {
                    let page = window().page();
                    window.write().set_page(page + 1);
                },
                "›"
            }
        }
    }
}
