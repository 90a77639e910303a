use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::entities::table::ColumnDef;

/// A scalar table cell. Raw values are kept; formatting happens at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn empty() -> Self {
        CellValue::Text(String::new())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Text(_) => 0,
            CellValue::Number(_) => 1,
            CellValue::Date(_) => 2,
        }
    }

    /// Total order over cells: text before numbers before dates, then by
    /// value within a kind. NaN sorts after every other number.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

/// Flat, render-ready projection of one record, keyed by column id.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    id: String,
    cells: BTreeMap<String, CellValue>,
}

impl DisplayRow {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut cells = BTreeMap::new();
        cells.insert("id".to_string(), CellValue::Text(id.clone()));
        DisplayRow { id, cells }
    }

    pub fn with(mut self, column: &str, value: impl Into<CellValue>) -> Self {
        self.set(column, value);
        self
    }

    /// Sets a cell. The `id` cell is owned by the row and cannot be replaced.
    pub fn set(&mut self, column: &str, value: impl Into<CellValue>) {
        if column == "id" {
            return;
        }
        self.cells.insert(column.to_string(), value.into());
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// The `name` cell as text, or `""` when absent.
    pub fn name(&self) -> &str {
        self.get("name").and_then(CellValue::as_str).unwrap_or("")
    }

    /// Fills every configured column the projector left out with an empty cell.
    pub fn conform(mut self, columns: &[ColumnDef]) -> Self {
        for column in columns {
            self.cells
                .entry(column.id.to_string())
                .or_insert_with(CellValue::empty);
        }
        self
    }
}
