use std::cmp::Ordering;

use crate::domain::entities::row::{CellValue, DisplayRow};
use crate::domain::entities::table::{PageWindow, SortConfig, SortDirection};
use crate::domain::projection::RowProjector;

/// Keeps rows whose `name` contains `term`, ignoring case. Order is preserved.
pub fn filter_rows(rows: Vec<DisplayRow>, term: &str) -> Vec<DisplayRow> {
    if term.is_empty() {
        return rows;
    }
    let needle = term.to_lowercase();
    rows.into_iter()
        .filter(|row| row.name().to_lowercase().contains(&needle))
        .collect()
}

// A missing cell sorts like an empty one.
fn compare_rows(a: &DisplayRow, b: &DisplayRow, config: &SortConfig) -> Ordering {
    let empty = CellValue::empty();
    let left = a.get(&config.key).unwrap_or(&empty);
    let right = b.get(&config.key).unwrap_or(&empty);
    match config.direction {
        SortDirection::Asc => left.compare(right),
        SortDirection::Desc => left.compare(right).reverse(),
    }
}

/// Orders rows by `config.key`. The sort is stable: equal cells keep their
/// incoming order. An empty key returns the input untouched.
pub fn sort_rows(mut rows: Vec<DisplayRow>, config: &SortConfig) -> Vec<DisplayRow> {
    if config.is_unsorted() {
        return rows;
    }
    rows.sort_by(|a, b| compare_rows(a, b, config));
    rows
}

/// The rows visible in `window`. The last page may be shorter.
pub fn page_slice<'a>(rows: &'a [DisplayRow], window: &PageWindow) -> &'a [DisplayRow] {
    let (start, end) = window.range(rows.len());
    &rows[start..end]
}

/// Project, then filter by the search term, then sort.
pub fn build_rows<P: RowProjector>(
    projector: &P,
    records: &[P::Record],
    search_term: &str,
    sort: &SortConfig,
) -> Vec<DisplayRow> {
    let rows = projector.project_all(records);
    sort_rows(filter_rows(rows, search_term), sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::entities::record::Product;
    use crate::domain::projection::ProductRows;
    use crate::domain::entities::table::RowsPerPage;

    fn row(id: &str, name: &str, price: f64) -> DisplayRow {
        DisplayRow::new(id).with("name", name).with("price", price)
    }

    fn names(rows: &[DisplayRow]) -> Vec<&str> {
        rows.iter().map(DisplayRow::name).collect()
    }

    fn sample_rows() -> Vec<DisplayRow> {
        vec![
            row("1", "Alpha", 10.0),
            row("2", "beta", 5.0),
            row("3", "Gamma100", 20.0),
        ]
    }

    #[test]
    fn empty_term_is_identity() {
        let rows = sample_rows();
        assert_eq!(filter_rows(rows.clone(), ""), rows);
    }

    #[test]
    fn filter_is_case_insensitive_and_order_preserving() {
        let filtered = filter_rows(sample_rows(), "A");
        assert_eq!(names(&filtered), vec!["Alpha", "beta", "Gamma100"]);

        let filtered = filter_rows(sample_rows(), "GAM");
        assert_eq!(names(&filtered), vec!["Gamma100"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let once = filter_rows(sample_rows(), "ph");
        let twice = filter_rows(once.clone(), "ph");
        assert_eq!(once, twice);
        assert_eq!(names(&once), vec!["Alpha"]);
    }

    #[test]
    fn empty_sort_key_preserves_order() {
        let rows = sample_rows();
        assert_eq!(sort_rows(rows.clone(), &SortConfig::default()), rows);
    }

    #[test]
    fn sort_by_price_ascending_and_descending() {
        let asc = sort_rows(sample_rows(), &SortConfig::new("price", SortDirection::Asc));
        assert_eq!(names(&asc), vec!["beta", "Alpha", "Gamma100"]);

        let desc = sort_rows(sample_rows(), &SortConfig::new("price", SortDirection::Desc));
        assert_eq!(names(&desc), vec!["Gamma100", "Alpha", "beta"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let config = SortConfig::new("name", SortDirection::Desc);
        let once = sort_rows(sample_rows(), &config);
        let twice = sort_rows(once.clone(), &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn direction_toggle_leaves_ties_in_place() {
        let rows = vec![
            row("1", "first", 7.0),
            row("2", "cheap", 1.0),
            row("3", "second", 7.0),
        ];

        let asc = sort_rows(rows.clone(), &SortConfig::new("price", SortDirection::Asc));
        let desc = sort_rows(rows, &SortConfig::new("price", SortDirection::Desc));

        assert_eq!(names(&asc), vec!["cheap", "first", "second"]);
        assert_eq!(names(&desc), vec!["first", "second", "cheap"]);
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let sorted = sort_rows(sample_rows(), &SortConfig::new("name", SortDirection::Asc));
        assert_eq!(names(&sorted), vec!["Alpha", "Gamma100", "beta"]);
    }

    fn assert_kinds_grouped_and_ordered(rows: &[DisplayRow], key: &str, direction: SortDirection) {
        let empty = CellValue::empty();
        let cells: Vec<&CellValue> = rows.iter().map(|row| row.get(key).unwrap_or(&empty)).collect();
        for pair in cells.windows(2) {
            let order = pair[0].compare(pair[1]);
            let in_order = match direction {
                SortDirection::Asc => order != Ordering::Greater,
                SortDirection::Desc => order != Ordering::Less,
            };
            assert!(in_order, "cells out of order: {:?} then {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn mixed_kind_column_sorts_each_kind_in_order() {
        let rows: Vec<DisplayRow> = (0..200)
            .map(|idx| {
                let cell = match idx % 3 {
                    0 => CellValue::empty(),
                    1 => CellValue::Number(((idx * 37) % 101) as f64),
                    _ => CellValue::Date(
                        NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date")
                            + chrono::Days::new((idx * 53 % 365) as u64),
                    ),
                };
                let row = DisplayRow::new(idx.to_string()).with("name", format!("item-{idx}"));
                if idx % 7 == 0 {
                    row
                } else {
                    row.with("stock", cell)
                }
            })
            .collect();

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_rows(rows.clone(), &SortConfig::new("stock", direction));
            assert_eq!(sorted.len(), rows.len());
            assert_kinds_grouped_and_ordered(&sorted, "stock", direction);
        }
    }

    #[test]
    fn missing_creation_dates_do_not_break_date_order() {
        let products: Vec<Product> = (0..60)
            .map(|idx| {
                let creation_date = match idx % 4 {
                    0 => String::new(),
                    1 => "sin fecha".to_string(),
                    _ => format!("2024-{:02}-{:02}", (idx * 7) % 12 + 1, (idx * 11) % 28 + 1),
                };
                Product {
                    id: format!("p-{idx}"),
                    name: format!("Producto {idx}"),
                    creation_date,
                    ..Product::default()
                }
            })
            .collect();

        let asc = build_rows(
            &ProductRows,
            &products,
            "",
            &SortConfig::new("creation_date", SortDirection::Asc),
        );
        let dates: Vec<NaiveDate> = asc
            .iter()
            .filter_map(|row| match row.get("creation_date") {
                Some(CellValue::Date(date)) => Some(*date),
                _ => None,
            })
            .collect();

        assert_eq!(dates.len(), 30, "every parseable date should be projected");
        assert!(
            dates.windows(2).all(|pair| pair[0] <= pair[1]),
            "dated rows should be ascending: {dates:?}"
        );
        assert!(
            matches!(asc[0].get("creation_date"), Some(CellValue::Text(_))),
            "undated rows should come first when ascending"
        );

        let desc = build_rows(
            &ProductRows,
            &products,
            "",
            &SortConfig::new("creation_date", SortDirection::Desc),
        );
        assert!(matches!(desc[0].get("creation_date"), Some(CellValue::Date(_))));
        assert_kinds_grouped_and_ordered(&desc, "creation_date", SortDirection::Desc);
    }

    #[test]
    fn currency_sorts_numerically_not_by_formatted_text() {
        let rows = vec![row("1", "ten", 10.0), row("2", "nine", 9.0)];

        let sorted = sort_rows(rows, &SortConfig::new("price", SortDirection::Asc));

        assert_eq!(names(&sorted), vec!["nine", "ten"]);
        assert_eq!(sorted[0].get("price"), Some(&CellValue::Number(9.0)));
    }

    #[test]
    fn pages_cover_every_row_exactly_once() {
        let rows: Vec<_> = (0..45)
            .map(|idx| row(&idx.to_string(), &format!("item-{idx}"), idx as f64))
            .collect();
        let mut window = PageWindow::default();
        assert_eq!(window.rows_per_page(), RowsPerPage::Twenty);

        let mut seen = Vec::new();
        for page in 0..window.page_count(rows.len()) {
            window.set_page(page);
            let slice = page_slice(&rows, &window);
            seen.extend(slice.iter().map(|r| r.id().to_string()));
            if page == 2 {
                assert_eq!(slice.len(), 5, "last page should be shorter");
            }
        }

        let expected: Vec<_> = rows.iter().map(|r| r.id().to_string()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let rows = sample_rows();
        let mut window = PageWindow::default();
        window.set_page(4);
        assert!(page_slice(&rows, &window).is_empty());
    }
}
