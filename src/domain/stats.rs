use std::cmp::Ordering;

use crate::domain::entities::record::{Category, Product};

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

/// Units sold per category, summed over each category's products.
pub fn sold_by_category(categories: &[Category]) -> Vec<BarDatum> {
    categories
        .iter()
        .map(|category| BarDatum {
            label: category.name.clone(),
            value: category
                .products
                .iter()
                .map(|product| product.stock.unities_sold)
                .sum(),
        })
        .collect()
}

/// The `limit` best-selling products, highest first.
pub fn top_products(products: &[Product], limit: usize) -> Vec<BarDatum> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by(|a, b| {
        b.stock
            .unities_sold
            .partial_cmp(&a.stock.unities_sold)
            .unwrap_or(Ordering::Equal)
    });
    ranked
        .into_iter()
        .take(limit)
        .map(|product| BarDatum {
            label: product.name.clone(),
            value: product.stock.unities_sold,
        })
        .collect()
}

/// Bar width as a percentage of the largest value.
pub fn bar_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}
