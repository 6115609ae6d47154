use std::collections::HashSet;

use itertools::Itertools;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::PipBoard;
use crate::domino::{self, Domino};
use crate::error::{check_dimensions, PipsError};

/// Largest pip used for a board of this size.
pub fn max_pips_for(rows: usize, cols: usize) -> Result<u32, PipsError> {
    if rows == 0 || cols == 0 {
        return Err(PipsError::NonPositiveDimensions { rows, cols });
    }
    u32::try_from(rows.max(cols) - 1).map_err(|_| PipsError::TooLarge { rows, cols })
}

/// Lay dominoes row-major onto an empty `rows x cols` grid: each row is
/// filled left to right in column pairs, the next domino's first side going
/// to the left cell and its second side to the right cell.
pub fn lay_out<'a, I>(rows: usize, cols: usize, dominoes: I) -> Result<PipBoard, PipsError>
where
    I: IntoIterator<Item = &'a Domino>,
{
    let mut cells: Vec<Option<u32>> = vec![None; rows * cols];
    let mut supply = dominoes.into_iter();
    let mut placed = 0;
    for i in 0..rows {
        for j in (0..cols).step_by(2) {
            let domino = supply
                .next()
                .ok_or(PipsError::Exhausted { placed, rows, cols })?;
            cells[i * cols + j] = Some(domino.side1());
            if j + 1 < cols {
                cells[i * cols + j + 1] = Some(domino.side2());
            }
            placed += 1;
        }
    }
    let cells = cells
        .into_iter()
        .collect::<Option<Vec<u32>>>()
        .ok_or(PipsError::Exhausted { placed, rows, cols })?;
    Ok(PipBoard::from_cells(rows, cols, cells))
}

/// Synthesize a random board that is solvable by construction, using the
/// thread-local random generator.
pub fn synthesize(rows: usize, cols: usize) -> Result<PipBoard, PipsError> {
    synthesize_with_rng(rows, cols, &mut rand::thread_rng())
}

/// Same as [`synthesize`] with an explicit random source.
pub fn synthesize_with_rng<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<PipBoard, PipsError> {
    check_dimensions(rows, cols)?;
    let mut dominoes = domino::generate(max_pips_for(rows, cols)?);
    dominoes.shuffle(rng);
    let board = lay_out(rows, cols, &dominoes)?;
    info!("synthesized {}x{} board {}", rows, cols, board);
    Ok(board)
}

/// Every distinct board the row-major layout can produce from the complete
/// domino set, in the order first seen while walking the permutations of the
/// set in lexicographic order.
///
/// The layout only reads the first `rows * cols / 2` dominoes of a
/// permutation, so the walk is over permutations of that length; the boards
/// and their order are the same as for full-length permutations.  The cost is
/// still factorial in the size of the domino set and this is only usable for
/// small boards (a 4x4 board visits about 1.8 million permutations).
pub fn enumerate_all(rows: usize, cols: usize) -> Result<Vec<PipBoard>, PipsError> {
    check_dimensions(rows, cols)?;
    let dominoes = domino::generate(max_pips_for(rows, cols)?);
    let needed = rows * cols / 2;
    if needed > dominoes.len() {
        return Err(PipsError::Exhausted {
            placed: dominoes.len(),
            rows,
            cols,
        });
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut boards: Vec<PipBoard> = Vec::new();
    let mut count: u64 = 0;
    for permutation in dominoes.iter().permutations(needed) {
        count += 1;
        let board = lay_out(rows, cols, permutation)?;
        if seen.insert(board.to_json_string()) {
            boards.push(board);
        }
        if count % 1_000_000 == 0 {
            debug!("{} permutations, {} distinct boards", count, boards.len());
        }
    }
    info!(
        "enumerated {} distinct {}x{} boards from {} permutations",
        boards.len(),
        rows,
        cols,
        count
    );
    Ok(boards)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::error::Error;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::board::Placement;
    use crate::solver::solve;

    #[test]
    fn test_lay_out() -> Result<(), Box<dyn Error>> {
        let dominoes = vec![Domino(0, 1), Domino(2, 3), Domino(4, 5)];
        let board = lay_out(2, 2, &dominoes)?;
        assert_eq!(board.to_json_string(), "[[0,1],[2,3]]");
        let board = lay_out(1, 6, &dominoes)?;
        assert_eq!(board.to_json_string(), "[[0,1,2,3,4,5]]");
        Ok(())
    }

    #[test]
    fn test_lay_out_exhausted() {
        let dominoes = vec![Domino(0, 1)];
        let res = lay_out(2, 2, &dominoes);
        assert!(matches!(
            res,
            Err(PipsError::Exhausted {
                placed: 1,
                rows: 2,
                cols: 2
            })
        ));
    }

    #[test]
    fn test_synthesize_filled_and_solvable() -> Result<(), Box<dyn Error>> {
        let mut rng = StdRng::seed_from_u64(20240917);
        for (rows, cols) in [(1, 2), (2, 2), (2, 4), (4, 2), (3, 4), (4, 4), (2, 6), (6, 6)] {
            for _ in 0..5 {
                let board = synthesize_with_rng(rows, cols, &mut rng)?;
                assert_eq!(board.rows(), rows);
                assert_eq!(board.cols(), cols);
                let max_pips = max_pips_for(rows, cols)?;
                assert!(board.max_pips() <= max_pips);

                let dominoes = domino::generate(max_pips);
                let mut placement = Placement::for_board(&board);
                assert!(solve(&board, &mut placement, &dominoes)?);
                assert!(placement.is_complete());
            }
        }
        Ok(())
    }

    #[test]
    fn test_synthesize_uses_each_domino_once() -> Result<(), Box<dyn Error>> {
        let board = synthesize(4, 4)?;
        let mut pairs = HashSet::new();
        for i in 0..4 {
            for j in (0..4).step_by(2) {
                let (a, b) = (board.get(i, j), board.get(i, j + 1));
                assert!(pairs.insert((a.min(b), a.max(b))));
            }
        }
        assert_eq!(pairs.len(), 8);
        Ok(())
    }

    #[test]
    fn test_synthesize_bad_dimensions() {
        assert!(matches!(
            synthesize(3, 3),
            Err(PipsError::OddCellCount { rows: 3, cols: 3 })
        ));
        assert!(matches!(
            synthesize(0, 2),
            Err(PipsError::NonPositiveDimensions { .. })
        ));
        assert!(matches!(
            synthesize(4, 7),
            Err(PipsError::OddColumnCount { .. })
        ));
        assert!(synthesize(3, 3).unwrap_err().is_configuration());
    }

    #[test]
    fn test_max_pips_for() -> Result<(), Box<dyn Error>> {
        assert_eq!(max_pips_for(1, 2)?, 1);
        assert_eq!(max_pips_for(8, 4)?, 7);
        assert!(matches!(
            max_pips_for(0, 2),
            Err(PipsError::NonPositiveDimensions { .. })
        ));
        // only representable where usize is wider than u32
        if let Ok(wide) = usize::try_from(u64::from(u32::MAX) + 2) {
            assert!(matches!(
                max_pips_for(2, wide),
                Err(PipsError::TooLarge { .. })
            ));
        }
        Ok(())
    }

    #[test]
    fn test_synthesize_too_large() {
        assert!(matches!(
            synthesize(usize::MAX / 2 + 1, 4),
            Err(PipsError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_enumerate_1x2() -> Result<(), Box<dyn Error>> {
        let boards = enumerate_all(1, 2)?;
        let strs: Vec<String> = boards.iter().map(|b| b.to_json_string()).collect();
        assert_eq!(strs, vec!["[[0,0]]", "[[0,1]]", "[[1,1]]"]);
        Ok(())
    }

    #[test]
    fn test_enumerate_2x2() -> Result<(), Box<dyn Error>> {
        let boards = enumerate_all(2, 2)?;
        let strs: Vec<String> = boards.iter().map(|b| b.to_json_string()).collect();
        assert_eq!(
            strs,
            vec![
                "[[0,0],[0,1]]",
                "[[0,0],[1,1]]",
                "[[0,1],[0,0]]",
                "[[0,1],[1,1]]",
                "[[1,1],[0,0]]",
                "[[1,1],[0,1]]",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_enumerate_distinct() -> Result<(), Box<dyn Error>> {
        let boards = enumerate_all(2, 4)?;
        assert_eq!(boards.len(), 5040);
        let distinct: HashSet<String> = boards.iter().map(|b| b.to_json_string()).collect();
        assert_eq!(distinct.len(), boards.len());
        assert_eq!(boards[0].to_json_string(), "[[0,0,0,1],[0,2,0,3]]");
        Ok(())
    }

    #[test]
    fn test_enumerate_bad_dimensions() {
        assert!(matches!(
            enumerate_all(1, 1),
            Err(PipsError::OddCellCount { .. })
        ));
        assert!(matches!(
            enumerate_all(2, 3),
            Err(PipsError::OddColumnCount { .. })
        ));
    }
}
