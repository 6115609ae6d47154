use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use rayon::prelude::*;

use super::{can_place, Orientation, Search};
use crate::board::{PipBoard, Placement};
use crate::domino::Domino;
use crate::error::PipsError;

/// Solve `board` by fanning out the sibling branches at the top-left cell over
/// a pool of `workers` threads.  Every branch searches its own placement grid
/// and consumption set; the first branch to cover the board raises a shared
/// flag and the others stop at their next step.
///
/// Returns the placement of whichever branch finished first, which need not
/// be the one the serial search would find.
pub fn solve_parallel(
    board: &PipBoard,
    dominoes: &[Domino],
    workers: usize,
) -> Result<Option<Placement>, PipsError> {
    let empty = Placement::for_board(board);
    let branches: Vec<(usize, Orientation)> = dominoes
        .iter()
        .enumerate()
        .flat_map(|(i, d)| Orientation::ALL.into_iter().map(move |o| (i, d, o)))
        .filter(|(_, d, o)| can_place(board, &empty, d, 0, 0, *o))
        .map(|(i, _, o)| (i, o))
        .collect();
    debug!(
        "fanning out {} branches over {} workers",
        branches.len(),
        workers
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .build()?;
    let found = AtomicBool::new(false);
    let solution = pool.install(|| {
        branches
            .par_iter()
            .find_map_any(|&(i, orientation)| solve_branch(board, dominoes, i, orientation, &found))
    });
    Ok(solution)
}

/// Search the subtree where domino `i` covers the top-left cell.
fn solve_branch(
    board: &PipBoard,
    dominoes: &[Domino],
    i: usize,
    orientation: Orientation,
    found: &AtomicBool,
) -> Option<Placement> {
    if found.load(Ordering::Relaxed) {
        return None;
    }
    let mut placement = Placement::for_board(board);
    let solved = {
        let mut search = Search::new(board, dominoes, &mut placement, Some(found));
        search.place(i, 0, 0, orientation);
        search.run(0, 1)
    };
    if solved {
        found.store(true, Ordering::Relaxed);
        Some(placement)
    } else {
        None
    }
}
