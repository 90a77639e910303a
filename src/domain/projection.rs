use crate::domain::entities::record::{Category, Product, Record, ResourceKind};
use crate::domain::entities::row::{CellValue, DisplayRow};
use crate::domain::entities::table::{Align, CellFormat, ColumnDef};
use crate::domain::format::parse_date;

/// Column rendered as edit/delete controls.
pub const ACTIONS_COLUMN: &str = "actions";
/// Column rendered as a thumbnail.
pub const IMAGE_COLUMN: &str = "image";

pub const PRODUCT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new(IMAGE_COLUMN, "", 50, Align::Center, CellFormat::Plain),
    ColumnDef::new("name", "Nombre Producto", 100, Align::Center, CellFormat::Plain),
    ColumnDef::new("type", "Tipo", 100, Align::Center, CellFormat::Plain),
    ColumnDef::new("category", "Categoria", 100, Align::Center, CellFormat::Plain),
    ColumnDef::new("id", "ID", 170, Align::Center, CellFormat::Plain),
    ColumnDef::new("price", "Precio", 100, Align::Center, CellFormat::Currency),
    ColumnDef::new("unities_sold", "Unidades Vendidas", 100, Align::Center, CellFormat::Thousands),
    ColumnDef::new("stock", "Stock", 80, Align::Center, CellFormat::Thousands),
    ColumnDef::new("status", "Estatus", 100, Align::Center, CellFormat::Plain),
    ColumnDef::new("creation_date", "Fecha de Creación", 80, Align::Center, CellFormat::Date),
    ColumnDef::new(ACTIONS_COLUMN, "Acciones", 120, Align::Center, CellFormat::Plain),
];

pub const CATEGORY_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new(IMAGE_COLUMN, "", 50, Align::Center, CellFormat::Plain),
    ColumnDef::new("name", "Nombre Categoría", 100, Align::Center, CellFormat::Plain),
    ColumnDef::new("description", "Descripción", 100, Align::Center, CellFormat::Plain),
    ColumnDef::new("id", "ID", 170, Align::Center, CellFormat::Plain),
    ColumnDef::new(ACTIONS_COLUMN, "Acciones", 120, Align::Center, CellFormat::Plain),
];

/// Maps a record of one resource to a display row under a fixed column schema.
pub trait RowProjector {
    type Record: Record;

    fn columns(&self) -> &'static [ColumnDef];

    fn kind(&self) -> ResourceKind {
        Self::Record::KIND
    }

    fn project(&self, record: &Self::Record) -> DisplayRow;

    /// Projects every record and fills the columns the projector left empty.
    fn project_all(&self, records: &[Self::Record]) -> Vec<DisplayRow> {
        records
            .iter()
            .map(|record| self.project(record).conform(self.columns()))
            .collect()
    }

    /// Columns offered by the sort control.
    fn sort_columns(&self) -> Vec<&'static ColumnDef> {
        self.columns()
            .iter()
            .filter(|column| !matches!(column.id, IMAGE_COLUMN | ACTIONS_COLUMN) && !column.label.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductRows;

impl RowProjector for ProductRows {
    type Record = Product;

    fn columns(&self) -> &'static [ColumnDef] {
        PRODUCT_COLUMNS
    }

    fn project(&self, product: &Product) -> DisplayRow {
        let creation_date = match parse_date(&product.creation_date) {
            Some(date) => CellValue::Date(date),
            None => CellValue::text(product.creation_date.as_str()),
        };

        DisplayRow::new(product.id.as_str())
            .with("name", product.name.as_str())
            .with("type", product.kind.as_str())
            .with("creation_date", creation_date)
            .with("price", product.price)
            .with(
                IMAGE_COLUMN,
                product.image_urls.first().cloned().unwrap_or_default(),
            )
            .with("category", product.category.name.as_str())
            .with("status", product.status.as_str())
            .with("stock", product.stock.stock)
            .with("unities_sold", product.stock.unities_sold)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryRows;

impl RowProjector for CategoryRows {
    type Record = Category;

    fn columns(&self) -> &'static [ColumnDef] {
        CATEGORY_COLUMNS
    }

    fn project(&self, category: &Category) -> DisplayRow {
        DisplayRow::new(category.id.as_str())
            .with("name", category.name.as_str())
            .with(IMAGE_COLUMN, category.image_url.clone().unwrap_or_default())
            .with("description", category.description.as_str())
    }
}
