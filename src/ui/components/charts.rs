use dioxus::prelude::*;

use crate::domain::format::format_thousands;
use crate::domain::stats::{bar_percent, BarDatum};

/// Row key for one bar. Labels can repeat, so the position is part of it.
pub fn bar_key(index: usize, datum: &BarDatum) -> String {
    format!("{index}-{}", datum.label)
}

#[component]
pub fn BarList(title: &'static str, data: Vec<BarDatum>) -> Element {
    let max = data.iter().map(|datum| datum.value).fold(0.0_f64, f64::max);

    rsx! {
        section {
            style: "margin-top: 16px; padding: 12px; border: 1px solid #ddd; border-radius: 8px; background: #fff;",
            h3 { style: "margin: 0 0 8px 0;", "{title}" }
            if data.is_empty() {
                p { style: "color: #888;", "Sin datos" }
            }
            for (index, datum) in data.iter().enumerate() {
                div {
                    key: "{bar_key(index, datum)}",
                    style: "display: grid; grid-template-columns: 180px 1fr 80px; gap: 8px; align-items: center; padding: 2px 0;",
                    span { style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{datum.label}" }
                    div { style: "background: #f0f0f0; border-radius: 4px; height: 14px;",
                        div { style: "width: {bar_percent(datum.value, max)}%; height: 100%; background: #1565c0; border-radius: 4px;" }
                    }
                    span { style: "text-align: right;", "{format_thousands(datum.value)}" }
                }
            }
        }
    }
}

#[component]
pub fn NotFound(message: String) -> Element {
    rsx! {
        div {
            style: "padding: 32px; text-align: center; color: #666; border: 1px dashed #ccc; border-radius: 8px;",
            h2 { style: "margin: 0 0 8px 0;", "No encontrado" }
            p { "{message}" }
        }
    }
}
