//! Tabular report data
//!
//! `Table` is the rectangular, labeled structure the renderers consume: an
//! ordered list of column names, one index label per row, and rows of
//! [`Value`] cells. It serializes in the "split" layout
//! (`{"columns": [...], "index": [...], "data": [[...], ...]}`) so report
//! payloads produced elsewhere can be handed over as JSON.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Whether the cell counts as absent. `NaN` floats are treated like `Null`.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(i) => write!(f, "{}", i),
            // Whole floats keep their decimal point ("3.0", not "3")
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{:.1}", x)
            }
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::Text(s.clone()),
            other => Value::Text(other.to_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// A rectangular table with named columns and a row index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SplitTable")]
pub struct Table {
    columns: Vec<String>,
    index: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Wire shape accepted on deserialization; normalised into a rectangular `Table`.
#[derive(Deserialize)]
struct SplitTable {
    columns: Vec<String>,
    #[serde(default)]
    index: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

impl From<SplitTable> for Table {
    fn from(raw: SplitTable) -> Self {
        let mut table = Table::new(raw.columns);
        let mut labels = raw.index.into_iter();
        for row in raw.data {
            match labels.next() {
                Some(label) => table.push_labeled_row(label, row),
                None => table.push_row(row),
            }
        }
        table
    }
}

impl Table {
    /// Create an empty table with the given column names
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            index: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Build a table from a list of JSON objects.
    ///
    /// Columns appear in order of first occurrence across all records; keys a
    /// record lacks become `Null` cells. Records that are not objects are
    /// skipped.
    pub fn from_records(records: &[serde_json::Value]) -> Self {
        let objects: Vec<&serde_json::Map<String, serde_json::Value>> = records
            .iter()
            .enumerate()
            .filter_map(|(i, record)| {
                let object = record.as_object();
                if object.is_none() {
                    warn!("Skipping record {}: expected a JSON object", i);
                }
                object
            })
            .collect();

        let mut columns: Vec<String> = Vec::new();
        for object in &objects {
            for key in object.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let mut table = Table::new(columns);
        for object in objects {
            let row: Vec<Value> = table
                .columns
                .iter()
                .map(|c| object.get(c).map(Value::from).unwrap_or(Value::Null))
                .collect();
            table.push_row(row);
        }
        table
    }

    /// Append a row labeled with its position (`"0"`, `"1"`, ...).
    pub fn push_row<I, V>(&mut self, cells: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let label = self.data.len().to_string();
        self.push_labeled_row(label, cells);
    }

    /// Append a row with an explicit index label.
    ///
    /// Short rows are padded with `Null`; extra cells are dropped.
    pub fn push_labeled_row<I, V>(&mut self, label: impl Into<String>, cells: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut row: Vec<Value> = cells
            .into_iter()
            .take(self.columns.len())
            .map(Into::into)
            .collect();
        row.resize(self.columns.len(), Value::Null);
        self.index.push(label.into());
        self.data.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn num_rows(&self) -> usize {
        self.data.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() || self.columns.is_empty()
    }

    /// Iterate `(index label, cells)` pairs in row order
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.index
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().map(Vec::as_slice))
    }

    /// Iterate the cells of column `col` from top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Value> {
        self.data.iter().filter_map(move |row| row.get(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_are_padded_and_truncated() {
        let mut t = Table::new(["a", "b"]);
        t.push_row([Value::Int(1)]);
        t.push_row([Value::Int(1), Value::Int(2), Value::Int(3)]);
        let rows: Vec<_> = t.rows().collect();
        assert_eq!(rows[0].1, &[Value::Int(1), Value::Null]);
        assert_eq!(rows[1].1, &[Value::Int(1), Value::Int(2)]);
        assert_eq!(t.index(), &["0", "1"]);
    }

    #[test]
    fn empty_means_no_rows_or_no_columns() {
        assert!(Table::new(["a"]).is_empty());
        let mut no_cols = Table::new(Vec::<String>::new());
        no_cols.push_row(Vec::<Value>::new());
        assert!(no_cols.is_empty());
        let mut t = Table::new(["a"]);
        t.push_row(["x"]);
        assert!(!t.is_empty());
    }

    #[test]
    fn from_records_orders_columns_by_first_appearance() {
        let records = vec![
            json!({"name": "alpha", "count": 3}),
            json!({"count": 4.5, "extra": null, "flag": true}),
            json!({"zeta": 1, "alpha": 2}),
        ];
        let t = Table::from_records(&records);
        assert_eq!(t.columns(), &["name", "count", "extra", "flag", "zeta", "alpha"]);
        assert_eq!(t.num_rows(), 3);

        let cells: Vec<_> = t.column(0).cloned().collect();
        assert_eq!(cells, vec![Value::Text("alpha".into()), Value::Null, Value::Null]);
        let counts: Vec<_> = t.column(1).cloned().collect();
        assert_eq!(counts, vec![Value::Int(3), Value::Float(4.5), Value::Null]);
    }

    #[test]
    fn from_records_skips_non_objects() {
        let t = Table::from_records(&[json!([1, 2]), json!({"a": "x"}), json!(null)]);
        assert_eq!(t.columns(), &["a"]);
        assert_eq!(t.num_rows(), 1);
        assert_eq!(t.index(), &["0"]);
    }

    #[test]
    fn deserializes_split_layout() {
        let t: Table = serde_json::from_value(json!({
            "columns": ["x", "y"],
            "index": ["first"],
            "data": [[1, null], [2.5, "b"]]
        }))
        .unwrap();
        assert_eq!(t.index(), &["first", "1"]);
        assert_eq!(t.rows().nth(1).unwrap().1, &[Value::Float(2.5), Value::Text("b".into())]);
        assert!(t.rows().next().unwrap().1[1].is_missing());
    }

    #[test]
    fn display_matches_report_formatting() {
        assert_eq!(Value::Float(3.0).to_string(), "3.0");
        assert_eq!(Value::Float(0.25).to_string(), "0.25");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Null.to_string(), "");
        assert!(Value::Float(f64::NAN).is_missing());
    }
}
