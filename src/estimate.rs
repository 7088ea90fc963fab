//! Table width heuristic
//!
//! Not real text metrics: roughly 8 units per character plus padding, with
//! caps so one long column or one pathological cell cannot dominate.

use crate::table::{Table, Value};

/// Width reported for a table with no rows or no columns
pub const EMPTY_TABLE_WIDTH: u32 = 300;
/// Reserved for the index column
pub const INDEX_COLUMN_WIDTH: f64 = 80.0;
pub const MIN_COLUMN_WIDTH: f64 = 80.0;
pub const MAX_COLUMN_WIDTH: f64 = 250.0;

const CHAR_WIDTH: f64 = 8.0;
const HEADER_PADDING: f64 = 20.0;
const CELL_PADDING: f64 = 16.0;
const MISSING_CELL_WIDTH: f64 = 30.0;
const LONG_CELL_CHARS: usize = 50;
const LONG_CELL_WIDTH: f64 = 400.0;
const SAMPLE_ROWS: usize = 10;

/// Estimate the rendered width of `table` in pixel-like units.
pub fn estimate_table_width(table: &Table) -> u32 {
    if table.is_empty() {
        return EMPTY_TABLE_WIDTH;
    }

    let total: f64 = INDEX_COLUMN_WIDTH
        + table
            .columns()
            .iter()
            .enumerate()
            .map(|(i, header)| column_width(header, table.column(i).take(SAMPLE_ROWS)))
            .sum::<f64>();

    total as u32
}

fn column_width<'a>(header: &str, sample: impl Iterator<Item = &'a Value>) -> f64 {
    let header_width = header.chars().count() as f64 * CHAR_WIDTH + HEADER_PADDING;

    let (sum, count) = sample.fold((0.0, 0usize), |(sum, n), v| (sum + cell_width(v), n + 1));
    let avg_content_width = if count == 0 { 50.0 } else { sum / count as f64 };

    header_width
        .max(avg_content_width)
        .max(MIN_COLUMN_WIDTH)
        .min(MAX_COLUMN_WIDTH)
}

fn cell_width(value: &Value) -> f64 {
    if value.is_missing() {
        return MISSING_CELL_WIDTH;
    }
    let len = value.to_string().chars().count();
    if len > LONG_CELL_CHARS {
        LONG_CELL_WIDTH
    } else {
        len as f64 * CHAR_WIDTH + CELL_PADDING
    }
}
