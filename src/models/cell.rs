//! Cell and grid models.
//!
//! A [`Grid`] is the raw snapshot of one sheet handed over by the spreadsheet
//! collaborator. Cells keep the source format's distinction between text and
//! numeric (date-encoded) values instead of forcing everything through string
//! parsing.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// One raw value from a sheet.
///
/// On the wire a cell is a JSON string (text), a JSON number (numeric) or
/// `null` (no declared type). A numeric cell whose raw value is not a finite
/// number fails to serialize rather than turning into text.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "Value")]
pub enum Cell {
    /// The sheet declares no type at this position.
    #[default]
    Unset,
    /// A text cell holding its raw string.
    Text(String),
    /// A numeric cell holding its raw, unparsed representation.
    Numeric(String),
}

impl Cell {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Creates a numeric cell from its raw representation (e.g. `"44927"`).
    pub fn numeric(raw: impl Into<String>) -> Self {
        Cell::Numeric(raw.into())
    }

    /// Returns the raw value as the sheet stores it; unset cells read as `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::Cell;
    ///
    /// assert_eq!(Cell::text("OFF").raw_value(), "OFF");
    /// assert_eq!(Cell::numeric("44927").raw_value(), "44927");
    /// assert_eq!(Cell::Unset.raw_value(), "");
    /// ```
    pub fn raw_value(&self) -> &str {
        match self {
            Cell::Unset => "",
            Cell::Text(value) | Cell::Numeric(value) => value,
        }
    }

    /// Parses a numeric cell's raw value as a floating-point serial.
    ///
    /// Text cells never yield a serial, even when they look numeric.
    pub fn serial(&self) -> Option<f64> {
        match self {
            Cell::Numeric(raw) => raw.trim().parse::<f64>().ok(),
            Cell::Unset | Cell::Text(_) => None,
        }
    }
}

impl TryFrom<Value> for Cell {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Cell::Unset),
            Value::String(text) => Ok(Cell::Text(text)),
            Value::Number(number) => Ok(Cell::Numeric(number.to_string())),
            other => Err(format!(
                "cell must be a string, number or null, got {}",
                other
            )),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Unset => serializer.serialize_none(),
            Cell::Text(text) => serializer.serialize_str(text),
            Cell::Numeric(raw) => {
                if let Ok(int) = raw.trim().parse::<i64>() {
                    return serializer.serialize_i64(int);
                }
                match raw.trim().parse::<f64>() {
                    Ok(number) if number.is_finite() => serializer.serialize_f64(number),
                    _ => Err(<S::Error as serde::ser::Error>::custom(format!(
                        "numeric cell '{}' is not a finite number",
                        raw
                    ))),
                }
            }
        }
    }
}

/// A rectangular-ish snapshot of one sheet's cells, indexed `[row][column]`.
///
/// Rows may have different lengths; positions past the end of a row behave
/// like [`Cell::Unset`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a grid from rows of cells.
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns a single row, if present.
    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows in the grid.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the cell at `(row, column)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    /// Iterates over the cells of one column as `(row_index, cell)` pairs,
    /// skipping rows too short to reach it.
    pub fn column(&self, column: usize) -> impl Iterator<Item = (usize, &Cell)> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(move |(row_index, cells)| cells.get(column).map(|cell| (row_index, cell)))
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::new(rows)
    }
}
