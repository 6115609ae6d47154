pub mod render;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PipsError;

/// An immutable rectangular grid of pip values, the puzzle instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<u32>>", try_from = "Vec<Vec<u32>>")]
pub struct PipBoard {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl PipBoard {
    /// Build a board from its rows.  All rows must be non-empty and of the
    /// same length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<PipBoard, PipsError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if n_rows == 0 || n_cols == 0 {
            return Err(PipsError::NonPositiveDimensions {
                rows: n_rows,
                cols: n_cols,
            });
        }
        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(PipsError::RaggedBoard {
                    row: i,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(PipBoard {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    /// Row-major cells, already validated by the caller.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<u32>) -> PipBoard {
        debug_assert_eq!(rows * cols, cells.len());
        PipBoard { rows, cols, cells }
    }

    /// Parse the canonical serialization, e.g. `[[0,1],[2,3]]`.  Whitespace is
    /// tolerated on input.
    pub fn from_json(s: &str) -> Result<PipBoard, PipsError> {
        let rows: Vec<Vec<u32>> = serde_json::from_str(s)?;
        PipBoard::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Pip value at row `x`, column `y`.
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.cells[x * self.cols + y]
    }

    pub fn row(&self, x: usize) -> &[u32] {
        &self.cells[x * self.cols..(x + 1) * self.cols]
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.rows).map(|x| self.row(x).to_vec()).collect()
    }

    /// The largest pip value on the board.
    pub fn max_pips(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Canonical serialization: rows in order, no whitespace, e.g.
    /// `[[0,1],[2,3]]`.  Used for deduplication and as the storage payload.
    pub fn to_json_string(&self) -> String {
        let mut out = String::with_capacity(2 + self.cells.len() * 3);
        out.push('[');
        for i in 0..self.rows {
            let row = self.row(i);
            if i > 0 {
                out.push(',');
            }
            out.push('[');
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    out.push(',');
                }
                out.push_str(&v.to_string());
            }
            out.push(']');
        }
        out.push(']');
        out
    }
}

impl From<PipBoard> for Vec<Vec<u32>> {
    fn from(board: PipBoard) -> Self {
        board.to_rows()
    }
}

impl TryFrom<Vec<Vec<u32>>> for PipBoard {
    type Error = PipsError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        PipBoard::from_rows(rows)
    }
}

impl FromStr for PipBoard {
    type Err = PipsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PipBoard::from_json(s)
    }
}

impl fmt::Display for PipBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json_string())
    }
}

/// The mutable assignment of domino indices to board cells built up during a
/// search.  `None` marks an uncovered cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    rows: usize,
    cols: usize,
    cells: Vec<Option<usize>>,
}

impl Placement {
    /// An all-empty placement grid.
    pub fn new(rows: usize, cols: usize) -> Placement {
        Placement {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// An all-empty placement grid with the same shape as `board`.
    pub fn for_board(board: &PipBoard) -> Placement {
        Placement::new(board.rows(), board.cols())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, x: usize, y: usize) -> Option<usize> {
        self.cells[x * self.cols + y]
    }

    pub fn set(&mut self, x: usize, y: usize, value: Option<usize>) {
        self.cells[x * self.cols + y] = value;
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some()
    }

    /// True if no cell is covered.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// True if every cell is covered.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    pub fn to_rows(&self) -> Vec<Vec<Option<usize>>> {
        (0..self.rows)
            .map(|x| self.cells[x * self.cols..(x + 1) * self.cols].to_vec())
            .collect()
    }

    pub(crate) fn check_shape(&self, board: &PipBoard) -> Result<(), PipsError> {
        if self.rows != board.rows() || self.cols != board.cols() {
            return Err(PipsError::DimensionMismatch {
                rows: board.rows(),
                cols: board.cols(),
                found_rows: self.rows,
                found_cols: self.cols,
            });
        }
        Ok(())
    }
}
