use dioxus::prelude::*;

use crate::domain::entities::table::{ColumnDef, SortConfig, SortDirection};

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

pub fn dropdown_label(options: &[DropdownOption], selected: Option<&str>) -> String {
    selected
        .and_then(|value| options.iter().find(|opt| opt.value == value))
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| "(sin selección)".to_string())
}

/// Label for the sort button, e.g. `Precio ↑`.
pub fn sort_label(columns: &[&ColumnDef], sort: &SortConfig) -> String {
    match columns.iter().find(|column| column.id == sort.key) {
        Some(column) => {
            let arrow = match sort.direction {
                SortDirection::Asc => "↑",
                SortDirection::Desc => "↓",
            };
            format!("{} {arrow}", column.label)
        }
        None => "Ordenar".to_string(),
    }
}

#[component]
pub fn SearchBox(placeholder: &'static str, on_search: EventHandler<String>) -> Element {
    rsx! {
        input {
            style: "border: 1px solid #bbb; border-radius: 6px; padding: 6px 10px; min-width: 220px;",
            placeholder: "{placeholder}",
            oninput: move |event| on_search.call(event.value()),
        }
    }
}

#[component]
pub fn DropdownSelect(
    label: String,
    options: Vec<DropdownOption>,
    selected: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    let mut is_open = use_signal(|| false);
    let mut dropdown_pos = use_signal(|| (0.0_f64, 0.0_f64));
    let selected_label = if options.is_empty() {
        label.clone()
    } else {
        dropdown_label(&options, selected.as_deref())
    };
    let (left, top) = dropdown_pos();

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center; gap: 6px;",
            span { "{label}" }
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                onclick: move |event| {
                    event.stop_propagation();
                    if is_open() {
                        is_open.set(false);
                        return;
                    }
                    let point = event.client_coordinates();
                    dropdown_pos.set((point.x, point.y + 24.0));
                    is_open.set(true);
                },
                "{selected_label}"
            }
        }

        if is_open() {
            div {
                style: "position: fixed; left: {left}px; top: {top}px; min-width: 200px; max-height: 320px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200;",
                onclick: move |event| event.stop_propagation(),
                {options.iter().map(|opt| {
                    let value = opt.value.clone();
                    let label = opt.label.clone();
                    let is_selected = selected.as_deref() == Some(value.as_str());
                    let background = if is_selected { "#eef4ff" } else { "transparent" };
                    rsx!(
                        div {
                            key: "{value}",
                            style: "padding: 8px 10px; cursor: pointer; background: {background};",
                            onclick: move |_| {
                                on_select.call(value.clone());
                                is_open.set(false);
                            },
                            "{label}"
                        }
                    )
                })}
            }
        }
    }
}

/// Picks the sort column; choosing the active ascending column flips it to descending.
#[component]
pub fn SortControl(columns: Vec<&'static ColumnDef>, sort: Signal<SortConfig>) -> Element {
    let mut sort = sort;
    let current = sort();
    let options = columns
        .iter()
        .map(|column| DropdownOption {
            value: column.id.to_string(),
            label: column.label.to_string(),
        })
        .collect::<Vec<_>>();
    let label = sort_label(&columns, &current);
    let selected = (!current.is_unsorted()).then(|| current.key.clone());

    rsx! {
        DropdownSelect {
            label: label,
            options: options,
            selected: selected,
            on_select: move |key: String| {
                let next = sort.peek().toggle(&key);
                sort.set(next);
            },
        }
    }
}
