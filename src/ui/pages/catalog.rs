use dioxus::prelude::*;

use crate::app::{AppServices, Route};
use crate::domain::catalog::{display_name_from_slug, CatalogOrder, CatalogQuery, CatalogScope};
use crate::domain::entities::record::Product;
use crate::domain::format::format_currency;
use crate::infra::assets::ImageResolver;
use crate::ui::components::charts::NotFound;

fn product_card(product: &Product, images: &ImageResolver, mut route: Signal<Route>) -> Element {
    let id = product.id.clone();
    let src = images.resolve(product.image_urls.first().map(String::as_str).unwrap_or_default());
    rsx! {
        div {
            key: "{product.id}",
            style: "border: 1px solid #ddd; border-radius: 8px; padding: 8px; background: #fff; cursor: pointer;",
            onclick: move |_| route.set(Route::ProductDetail { id: id.clone() }),
            img { src: "{src}", alt: "{product.name}", style: "width: 100%; height: 140px; object-fit: cover;" }
            p { style: "margin: 6px 0 2px 0; font-weight: bold;", "{product.name}" }
            p { style: "margin: 0; color: #1565c0;", "{format_currency(product.price)}" }
        }
    }
}

/// Page heading: the given name as-is, or a name derived from the slug
/// when no name is known.
pub fn catalog_heading(title: &str, slug: &str) -> String {
    if title.trim().is_empty() {
        display_name_from_slug(slug)
    } else {
        title.to_string()
    }
}

/// Product grid of one category or group with server-side ordering and paging.
#[component]
pub fn CatalogPage(scope: CatalogScope, id: String, title: String) -> Element {
    let services = use_context::<AppServices>();
    let route = use_context::<Signal<Route>>();
    let mut query = use_signal(|| CatalogQuery::new(scope, id.clone()));

    let catalog = services.catalog.clone();
    let page = use_resource(move || {
        let catalog = catalog.clone();
        let current = query();
        async move { catalog.fetch(&current).await }
    });

    let heading = catalog_heading(&title, &id);
    let current = query();
    let order_label = current.order.label();
    let body = match &*page.read() {
        None => rsx! { p { "Cargando..." } },
        Some(Err(err)) => rsx! {
            NotFound { message: format!("No se pudo cargar \"{heading}\": {err}") }
        },
        Some(Ok(list)) => {
            let page_count = current.page_count(list.total_count).max(1);
            let has_previous = current.page > 1;
            let has_next = u64::from(current.page) < page_count;
            rsx! {
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 12px;",
                    for product in list.records.iter() {
                        {product_card(product, &services.images, route)}
                    }
                }
                if list.records.is_empty() {
                    p { "No hay productos" }
                }
                div {
                    style: "display: flex; gap: 12px; align-items: center; justify-content: center; padding: 12px 0;",
                    button {
                        disabled: !has_previous,
                        onclick: move |_| {
                            let previous = query.peek().page.saturating_sub(1);
                            let next = query.peek().with_page(previous);
                            query.set(next);
                        },
                        "‹"
                    }
                    span { "Página {current.page} de {page_count}" }
                    button {
                        disabled: !has_next,
                        onclick: move |_| {
                            let following = query.peek().page + 1;
                            let next = query.peek().with_page(following);
                            query.set(next);
                        },
                        "›"
                    }
                }
            }
        }
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; margin-bottom: 12px;",
            h2 { style: "margin: 0; flex: 1;", "{heading}" }
            span { "Ordenar por:" }
            select {
                value: "{order_label}",
                onchange: move |event| {
                    let order = CatalogOrder::from_label(&event.value());
                    let next = query.peek().with_order(order);
                    query.set(next);
                },
                for order in CatalogOrder::ALL {
                    option {
                        value: "{order.label()}",
                        selected: order.label() == order_label,
                        "{order.label()}"
                    }
                }
            }
        }
        {body}
    }
}
