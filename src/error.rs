use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipsError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    NonPositiveDimensions { rows: usize, cols: usize },

    #[error("a {rows}x{cols} board is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("a {rows}x{cols} board has an odd number of cells")]
    OddCellCount { rows: usize, cols: usize },

    #[error("a {rows}x{cols} board has an odd number of columns, dominoes are laid in column pairs")]
    OddColumnCount { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("placement grid is {found_rows}x{found_cols} but the board is {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    #[error("ran out of dominoes after placing {placed} on a {rows}x{cols} board")]
    Exhausted {
        placed: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid value {value:?} for setting {key}")]
    InvalidSetting { key: String, value: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("could not load environment file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("could not start the worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl PipsError {
    /// True for errors caused by a malformed request (bad dimensions, bad
    /// board text, bad settings), as opposed to a broken layout invariant or a
    /// failure to start the worker pool.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            PipsError::Exhausted { .. } | PipsError::ThreadPool(_)
        )
    }
}

/// Reject dimensions that cannot be tiled by the row-major layout.
pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<(), PipsError> {
    if rows == 0 || cols == 0 {
        return Err(PipsError::NonPositiveDimensions { rows, cols });
    }
    let cells = rows
        .checked_mul(cols)
        .ok_or(PipsError::TooLarge { rows, cols })?;
    if cells % 2 != 0 {
        return Err(PipsError::OddCellCount { rows, cols });
    }
    if cols % 2 != 0 {
        return Err(PipsError::OddColumnCount { rows, cols });
    }
    Ok(())
}
