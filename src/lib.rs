//! Domino tiling puzzles: lay a complete domino set over a grid of pips so
//! that every cell is covered exactly once.
//!
//! - [`domino::generate`] builds the complete set for a maximum pip value.
//! - [`generator::synthesize`] makes a random board that is solvable by
//!   construction, [`generator::enumerate_all`] lists every distinct board the
//!   same layout can produce.
//! - [`solver::solve`] is a backtracking search for an exact cover,
//!   [`solver::parallel::solve_parallel`] its multi-threaded variant.

pub mod board;
pub mod config;
pub mod domino;
pub mod error;
pub mod generator;
pub mod solver;

pub use board::{PipBoard, Placement};
pub use domino::Domino;
pub use error::PipsError;
