use dioxus::prelude::*;
use tracing::warn;

use crate::app::{AppServices, Route};
use crate::domain::format::{format_currency, format_date, format_thousands, parse_date};

pub const PRODUCT_LOAD_ERROR: &str = "Lo sentimos, ha ocurrido un error al cargar el producto";

#[component]
pub fn ProductDetailPage(id: String) -> Element {
    let services = use_context::<AppServices>();
    let mut route = use_context::<Signal<Route>>();

    let mutations = services.product_mutations.clone();
    let product_id = id.clone();
    let product = use_resource(move || {
        let mutations = mutations.clone();
        let id = product_id.clone();
        async move {
            let result = mutations.get(&id).await;
            if let Err(err) = &result {
                warn!(%id, error = %err, "product detail failed to load");
            }
            result
        }
    });

    let body = match &*product.read() {
        None => rsx! { p { "Cargando..." } },
        Some(Err(_)) => rsx! {
            div { style: "padding: 32px; text-align: center; color: #c62828;", "{PRODUCT_LOAD_ERROR}" }
        },
        Some(Ok(product)) => {
            let created = parse_date(&product.creation_date)
                .map(format_date)
                .unwrap_or_else(|| product.creation_date.clone());
            rsx! {
                div { style: "display: flex; gap: 24px;",
                    div { style: "display: flex; flex-direction: column; gap: 8px;",
                        for (idx, image) in product.image_urls.iter().enumerate() {
                            img {
                                key: "{idx}",
                                src: "{services.images.resolve(image)}",
                                alt: "{product.name}",
                                style: "width: 240px; height: 240px; object-fit: cover; border-radius: 8px;",
                            }
                        }
                    }
                    div {
                        h2 { "{product.name}" }
                        p { style: "font-size: 1.4rem; color: #1565c0;", "{format_currency(product.price)}" }
                        p { "Tipo: {product.kind}" }
                        p { "Categoría: {product.category.name}" }
                        p { "Stock: {format_thousands(product.stock.stock)}" }
                        p { "Unidades vendidas: {format_thousands(product.stock.unities_sold)}" }
                        p { "Calificación: {product.rating}" }
                        p { "Estatus: {product.status}" }
                        p { "Fecha de creación: {created}" }
                    }
                }
            }
        }
    };

    rsx! {
        button {
            style: "margin-bottom: 12px;",
            onclick: move |_| route.set(Route::Products),
            "‹ Volver"
        }
        {body}
    }
}
