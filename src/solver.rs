pub mod parallel;

use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use crate::board::{PipBoard, Placement};
use crate::domino::{self, Domino};
use crate::error::PipsError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// The second cell covered by a domino anchored at `(x, y)`.
    pub fn partner(self, x: usize, y: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (x, y + 1),
            Orientation::Vertical => (x + 1, y),
        }
    }
}

/// Which dominoes of the input list are in use, keyed by index.  Lives for
/// one search only, the dominoes themselves carry no search state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumedSet {
    words: Vec<u64>,
}

impl ConsumedSet {
    pub fn new(len: usize) -> ConsumedSet {
        ConsumedSet {
            words: vec![0; len.div_ceil(64)],
        }
    }

    pub fn contains(&self, i: usize) -> bool {
        self.words[i / 64] & (1 << (i % 64)) != 0
    }

    pub fn insert(&mut self, i: usize) {
        self.words[i / 64] |= 1 << (i % 64);
    }

    pub fn remove(&mut self, i: usize) {
        self.words[i / 64] &= !(1 << (i % 64));
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of search steps taken.
    pub nodes: u64,
    /// Number of placements undone.
    pub backtracks: u64,
}

/// Can `domino` cover the cell `(x, y)` and its neighbour in the given
/// direction?  Both cells must be on the board and uncovered, and the pips
/// must match the domino in either order.
pub fn can_place(
    board: &PipBoard,
    placement: &Placement,
    domino: &Domino,
    x: usize,
    y: usize,
    orientation: Orientation,
) -> bool {
    let (x2, y2) = orientation.partner(x, y);
    if x2 >= board.rows() || y2 >= board.cols() {
        return false;
    }
    if placement.is_set(x, y) || placement.is_set(x2, y2) {
        return false;
    }
    domino.matches(board.get(x, y), board.get(x2, y2))
}

/// Depth-first search state for one solve call.
struct Search<'a> {
    board: &'a PipBoard,
    dominoes: &'a [Domino],
    placement: &'a mut Placement,
    consumed: ConsumedSet,
    cancel: Option<&'a AtomicBool>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(
        board: &'a PipBoard,
        dominoes: &'a [Domino],
        placement: &'a mut Placement,
        cancel: Option<&'a AtomicBool>,
    ) -> Search<'a> {
        Search {
            board,
            dominoes,
            placement,
            consumed: ConsumedSet::new(dominoes.len()),
            cancel,
            stats: SearchStats::default(),
        }
    }

    fn place(&mut self, i: usize, x: usize, y: usize, orientation: Orientation) {
        let (x2, y2) = orientation.partner(x, y);
        self.consumed.insert(i);
        self.placement.set(x, y, Some(i));
        self.placement.set(x2, y2, Some(i));
    }

    fn unplace(&mut self, i: usize, x: usize, y: usize, orientation: Orientation) {
        let (x2, y2) = orientation.partner(x, y);
        self.placement.set(x, y, None);
        self.placement.set(x2, y2, None);
        self.consumed.remove(i);
        self.stats.backtracks += 1;
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Cover every cell from `(x, y)` onwards in row-major order.  Leaves the
    /// placement as it found it when returning false.
    fn run(&mut self, x: usize, y: usize) -> bool {
        self.stats.nodes += 1;
        if self.is_cancelled() {
            return false;
        }
        if y >= self.board.cols() {
            return self.run(x + 1, 0);
        }
        if x >= self.board.rows() {
            return true;
        }
        if self.placement.is_set(x, y) {
            return self.run(x, y + 1);
        }

        for i in 0..self.dominoes.len() {
            if self.consumed.contains(i) {
                continue;
            }
            for orientation in Orientation::ALL {
                if !can_place(self.board, self.placement, &self.dominoes[i], x, y, orientation) {
                    continue;
                }
                self.place(i, x, y, orientation);
                // advance one cell, the skip rule steps over the partner cell
                if self.run(x, y + 1) {
                    return true;
                }
                self.unplace(i, x, y, orientation);
            }
        }
        false
    }
}

/// Find an exact cover of `board` using each domino of `dominoes` at most
/// once.  On success `placement` holds the index of the covering domino for
/// every cell.  On failure `placement` is left untouched.
///
/// `Ok(false)` means no cover exists; errors are reserved for a placement grid
/// that does not match the board.
pub fn solve(
    board: &PipBoard,
    placement: &mut Placement,
    dominoes: &[Domino],
) -> Result<bool, PipsError> {
    solve_from(board, placement, dominoes, 0, 0)
}

/// Same as [`solve`], starting the row-major scan at row `x`, column `y`.
pub fn solve_from(
    board: &PipBoard,
    placement: &mut Placement,
    dominoes: &[Domino],
    x: usize,
    y: usize,
) -> Result<bool, PipsError> {
    let (solved, _) = solve_with_stats(board, placement, dominoes, x, y)?;
    Ok(solved)
}

/// Same as [`solve_from`], also reporting how much work the search did.
pub fn solve_with_stats(
    board: &PipBoard,
    placement: &mut Placement,
    dominoes: &[Domino],
    x: usize,
    y: usize,
) -> Result<(bool, SearchStats), PipsError> {
    placement.check_shape(board)?;
    let mut search = Search::new(board, dominoes, placement, None);
    let solved = search.run(x, y);
    // a failed search has undone every trial
    debug_assert!(solved || search.consumed.is_empty());
    let stats = search.stats;
    debug!(
        "search on {}x{} board with {} dominoes: solved={}, {} nodes, {} backtracks",
        board.rows(),
        board.cols(),
        dominoes.len(),
        solved,
        stats.nodes,
        stats.backtracks
    );
    Ok((solved, stats))
}

/// Solve `board` with the complete domino set for its largest pip.
pub fn solve_board(board: &PipBoard) -> Result<Option<Placement>, PipsError> {
    let dominoes = domino::generate(board.max_pips());
    let mut placement = Placement::for_board(board);
    if solve(board, &mut placement, &dominoes)? {
        Ok(Some(placement))
    } else {
        Ok(None)
    }
}
