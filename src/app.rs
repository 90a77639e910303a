use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::catalog::CatalogScope;
use crate::domain::entities::record::{Category, Product};
use crate::infra::assets::ImageResolver;
use crate::infra::http::client::ApiClient;
use crate::infra::http::resource::{HttpCatalog, HttpResource};
use crate::ui::pages::catalog::CatalogPage;
use crate::ui::pages::categories::CategoriesPage;
use crate::ui::pages::product_detail::ProductDetailPage;
use crate::ui::pages::products::ProductsPage;
use crate::ui::state::table_state::ChangeLog;
use crate::usecase::ports::remote::FetchError;
use crate::usecase::services::list_service::{CatalogService, ListService};
use crate::usecase::services::mutation_service::MutationService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Products,
    Categories,
    Catalog {
        scope: CatalogScope,
        id: String,
        title: String,
    },
    ProductDetail {
        id: String,
    },
}

impl Route {
    pub fn title(&self) -> String {
        match self {
            Route::Products => "Productos".to_string(),
            Route::Categories => "Categorías".to_string(),
            Route::Catalog { title, .. } => title.clone(),
            Route::ProductDetail { .. } => "Producto".to_string(),
        }
    }
}

/// Everything the pages need to talk to the backend, shared through context.
#[derive(Clone)]
pub struct AppServices {
    pub products: ListService<Product>,
    pub categories: ListService<Category>,
    pub product_mutations: MutationService<Product>,
    pub category_mutations: MutationService<Category>,
    pub catalog: CatalogService,
    pub images: ImageResolver,
    pub list_limit: u32,
}

impl AppServices {
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let api = Arc::new(ApiClient::new(&config.api)?);
        let products = Arc::new(HttpResource::<Product>::new(api.clone()));
        let categories = Arc::new(HttpResource::<Category>::new(api.clone()));

        Ok(AppServices {
            products: ListService::new(products.clone()),
            categories: ListService::new(categories.clone()),
            product_mutations: MutationService::new(products),
            category_mutations: MutationService::new(categories),
            catalog: CatalogService::new(Arc::new(HttpCatalog::new(api))),
            images: ImageResolver::new(&config.assets),
            list_limit: config.list_limit,
        })
    }
}

fn nav_button_style(active: bool) -> &'static str {
    if active {
        "border: none; background: #1565c0; color: #fff; padding: 6px 14px; border-radius: 6px; cursor: pointer;"
    } else {
        "border: 1px solid #bbb; background: #fff; padding: 6px 14px; border-radius: 6px; cursor: pointer;"
    }
}

#[component]
pub fn App() -> Element {
    let mut route = use_context_provider(|| Signal::new(Route::Products));
    use_context_provider(|| Signal::new(ChangeLog::default()));

    let current = route();
    let page = match current.clone() {
        Route::Products => rsx! { ProductsPage {} },
        Route::Categories => rsx! { CategoriesPage {} },
        Route::Catalog { scope, id, title } => rsx! {
            CatalogPage { key: "{id}", scope: scope, id: id.clone(), title: title }
        },
        Route::ProductDetail { id } => rsx! {
            ProductDetailPage { key: "{id}", id: id.clone() }
        },
    };

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 16px; background: #f6f7f9; min-height: 100vh; box-sizing: border-box;",
            nav {
                style: "display: flex; gap: 8px; align-items: center; margin-bottom: 16px;",
                strong { style: "margin-right: 12px;", "Storefront Admin" }
                button {
                    style: nav_button_style(current == Route::Products),
                    onclick: move |_| route.set(Route::Products),
                    "Productos"
                }
                button {
                    style: nav_button_style(current == Route::Categories),
                    onclick: move |_| route.set(Route::Categories),
                    "Categorías"
                }
                span { style: "margin-left: auto; color: #888;", "{current.title()}" }
            }
            {page}
        }
    }
}
