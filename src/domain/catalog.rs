use std::fmt;

pub const CATALOG_PAGE_SIZE: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogScope {
    Category,
    Group,
}

impl CatalogScope {
    pub fn path(self) -> &'static str {
        match self {
            CatalogScope::Category => "category",
            CatalogScope::Group => "group",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Price,
    Rating,
    SoldUnits,
}

impl OrderField {
    pub fn as_param(self) -> &'static str {
        match self {
            OrderField::Price => "price",
            OrderField::Rating => "rating",
            OrderField::SoldUnits => "sold_units",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_param(self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// Server-side ordering presets offered on the catalog pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogOrder {
    Cheapest,
    MostExpensive,
    BestRated,
    WorstRated,
    #[default]
    BestSelling,
    LeastSelling,
}

impl CatalogOrder {
    pub const ALL: [CatalogOrder; 6] = [
        CatalogOrder::Cheapest,
        CatalogOrder::MostExpensive,
        CatalogOrder::BestRated,
        CatalogOrder::WorstRated,
        CatalogOrder::BestSelling,
        CatalogOrder::LeastSelling,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CatalogOrder::Cheapest => "Menos costosos",
            CatalogOrder::MostExpensive => "Más costosos",
            CatalogOrder::BestRated => "Mejor votados",
            CatalogOrder::WorstRated => "Peor votados",
            CatalogOrder::BestSelling => "Más vendidos",
            CatalogOrder::LeastSelling => "Menos vendidos",
        }
    }

    /// Case-insensitive label lookup; unknown labels fall back to best selling.
    pub fn from_label(label: &str) -> CatalogOrder {
        let wanted = label.trim().to_lowercase();
        CatalogOrder::ALL
            .into_iter()
            .find(|order| order.label().to_lowercase() == wanted)
            .unwrap_or_default()
    }

    pub fn field(self) -> OrderField {
        match self {
            CatalogOrder::Cheapest | CatalogOrder::MostExpensive => OrderField::Price,
            CatalogOrder::BestRated | CatalogOrder::WorstRated => OrderField::Rating,
            CatalogOrder::BestSelling | CatalogOrder::LeastSelling => OrderField::SoldUnits,
        }
    }

    pub fn direction(self) -> OrderDirection {
        match self {
            CatalogOrder::Cheapest | CatalogOrder::WorstRated | CatalogOrder::LeastSelling => {
                OrderDirection::Asc
            }
            CatalogOrder::MostExpensive | CatalogOrder::BestRated | CatalogOrder::BestSelling => {
                OrderDirection::Desc
            }
        }
    }
}

impl fmt::Display for CatalogOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Query sent to the catalog endpoints. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub scope: CatalogScope,
    pub scope_id: String,
    pub order: CatalogOrder,
    pub page: u32,
    pub limit: u32,
}

impl CatalogQuery {
    pub fn new(scope: CatalogScope, scope_id: impl Into<String>) -> Self {
        CatalogQuery {
            scope,
            scope_id: scope_id.into(),
            order: CatalogOrder::default(),
            page: 1,
            limit: CATALOG_PAGE_SIZE,
        }
    }

    /// Picking a new ordering starts over from the first page.
    pub fn with_order(&self, order: CatalogOrder) -> Self {
        CatalogQuery {
            order,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        CatalogQuery {
            page: page.max(1),
            ..self.clone()
        }
    }

    pub fn page_count(&self, total_count: u64) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        total_count.div_ceil(u64::from(self.limit))
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("filter", self.order.field().as_param().to_string()),
            ("order", self.order.direction().as_param().to_string()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// `"ropa-de-hombre"` becomes `"Ropa de hombre"`.
pub fn display_name_from_slug(slug: &str) -> String {
    let mut chars = slug.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    capitalized.replace('-', " ")
}
