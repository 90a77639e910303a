use crate::domain::entities::row::CellValue;
use crate::domain::format::{format_currency, format_date, format_plain_number, format_thousands};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    pub fn css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// How a column renders its raw cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFormat {
    #[default]
    Plain,
    /// en-US grouping, e.g. `12,500`.
    Thousands,
    /// Colombian pesos without decimals, e.g. `$ 12.500`.
    Currency,
    /// `dd/mm/yyyy`.
    Date,
}

impl CellFormat {
    pub fn apply(self, value: &CellValue) -> String {
        match (self, value) {
            (_, CellValue::Text(text)) => text.clone(),
            (CellFormat::Thousands, CellValue::Number(n)) => format_thousands(*n),
            (CellFormat::Currency, CellValue::Number(n)) => format_currency(*n),
            (_, CellValue::Number(n)) => format_plain_number(*n),
            (_, CellValue::Date(date)) => format_date(*date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub id: &'static str,
    pub label: &'static str,
    pub min_width: u32,
    pub align: Align,
    pub format: CellFormat,
}

impl ColumnDef {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        min_width: u32,
        align: Align,
        format: CellFormat,
    ) -> Self {
        ColumnDef {
            id,
            label,
            min_width,
            align,
            format,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Active ordering. An empty `key` keeps fetch order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        SortConfig {
            key: key.into(),
            direction,
        }
    }

    pub fn is_unsorted(&self) -> bool {
        self.key.is_empty()
    }

    /// Selecting the active key while ascending flips to descending;
    /// anything else starts ascending on `key`.
    pub fn toggle(&self, key: &str) -> SortConfig {
        let direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        SortConfig::new(key, direction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowsPerPage {
    #[default]
    Twenty,
    Fifty,
    Hundred,
}

impl RowsPerPage {
    pub const ALL: [RowsPerPage; 3] = [RowsPerPage::Twenty, RowsPerPage::Fifty, RowsPerPage::Hundred];

    pub fn value(self) -> usize {
        match self {
            RowsPerPage::Twenty => 20,
            RowsPerPage::Fifty => 50,
            RowsPerPage::Hundred => 100,
        }
    }

    pub fn from_value(value: usize) -> Option<Self> {
        RowsPerPage::ALL.into_iter().find(|option| option.value() == value)
    }
}

/// Client-local page index and page size over the filtered and sorted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageWindow {
    page: usize,
    rows_per_page: RowsPerPage,
}

impl PageWindow {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> RowsPerPage {
        self.rows_per_page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: RowsPerPage) {
        self.rows_per_page = rows_per_page;
        self.page = 0;
    }

    pub fn start(&self) -> usize {
        self.page * self.rows_per_page.value()
    }

    /// Slice bounds of the current page, clamped to `len`.
    pub fn range(&self, len: usize) -> (usize, usize) {
        let start = self.start().min(len);
        let end = (self.start() + self.rows_per_page.value()).min(len);
        (start, end)
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.rows_per_page.value())
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page + 1 < self.page_count(len)
    }

    /// `from-to de count`, as shown under the table.
    pub fn label(&self, count: usize) -> String {
        let from = if count == 0 { 0 } else { self.start() + 1 };
        let to = (self.start() + self.rows_per_page.value()).min(count);
        format!("{from}-{to} de {count}")
    }
}
