//! Mapping spreadsheet rows onto supplier stock records.

use calamine::{Data, Range};
use log::{debug, warn};

use crate::error::{Result, SyncError};
use crate::models::SupplierStockRecord;

const CODE_COLUMN: &str = "Код";
const NAME_COLUMN: &str = "Наименование товара";
const PRICE_COLUMN: &str = "Цена";
const QUANTITY_COLUMN: &str = "Количество";

struct Columns {
    code: usize,
    quantity: usize,
    price: usize,
    name: Option<usize>,
}

/// Renders a cell the way the reconcilers expect it.
///
/// Whole numbers lose their fractional part (`71301.0` -> `"71301"`), text is
/// trimmed and empty cells become `""`.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn find_columns(row: &[Data]) -> Option<Columns> {
    let position = |title: &str| row.iter().position(|cell| cell_to_string(cell) == title);
    Some(Columns {
        code: position(CODE_COLUMN)?,
        quantity: position(QUANTITY_COLUMN)?,
        price: position(PRICE_COLUMN)?,
        name: position(NAME_COLUMN),
    })
}

fn cell_at(row: &[Data], column: usize) -> String {
    row.get(column).map(cell_to_string).unwrap_or_default()
}

/// Reads stock records from the supplier worksheet.
///
/// The export starts with a block of letterhead rows, so the header is the
/// first row that names the code, quantity and price columns. Rows after it
/// without a code (brand headings, blank lines) are skipped.
pub fn parse_stock_rows(range: &Range<Data>) -> Result<Vec<SupplierStockRecord>> {
    let mut rows = range.rows().enumerate();

    let columns = loop {
        match rows.next() {
            Some((index, row)) => {
                if let Some(columns) = find_columns(row) {
                    debug!("Found header row at worksheet row {index}");
                    break columns;
                }
            }
            None => {
                warn!("No header row found in supplier worksheet");
                return Err(SyncError::Feed(format!(
                    "no header row with '{CODE_COLUMN}', '{QUANTITY_COLUMN}' and '{PRICE_COLUMN}' columns"
                )));
            }
        }
    };

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (_, row) in rows {
        let code = cell_at(row, columns.code);
        if code.is_empty() {
            skipped += 1;
            continue;
        }
        records.push(SupplierStockRecord {
            code,
            quantity: cell_at(row, columns.quantity),
            price: cell_at(row, columns.price),
            name: columns
                .name
                .map(|column| cell_at(row, column))
                .filter(|name| !name.is_empty()),
        });
    }

    debug!(
        "Parsed {} stock rows, skipped {skipped} rows without code",
        records.len()
    );
    Ok(records)
}
