use crate::board::{PipBoard, Placement};
use crate::domino::Domino;

/// Draw the board as a text grid.  When `show_solution` is set, walls are
/// drawn only between cells that belong to different dominoes in `placement`.
///
/// ```text
/// +---+---+
/// | 1   2 |
/// +---+---+
/// | 3   4 |
/// +---+---+
/// ```
pub fn render_board(board: &PipBoard, placement: &Placement, show_solution: bool) -> String {
    let rows = board.rows();
    let cols = board.cols();
    let mut out = String::new();

    for _ in 0..cols {
        out.push_str("+---");
    }
    out.push_str("+\n");

    for i in 0..rows {
        for j in 0..cols {
            let wall = if show_solution {
                j == 0 || placement.get(i, j) != placement.get(i, j - 1)
            } else {
                j == 0
            };
            out.push_str(if wall { "| " } else { "  " });
            out.push_str(&format!("{} ", board.get(i, j)));
        }
        out.push_str("|\n");

        for j in 0..cols {
            out.push('+');
            if i + 1 < rows {
                let wall = show_solution && placement.get(i, j) != placement.get(i + 1, j);
                out.push_str(if wall { "---" } else { "   " });
            } else {
                out.push_str("---");
            }
        }
        out.push_str("+\n");
    }
    out
}

/// List a domino set, one line per pip value `0..=max_pips`, grouping the
/// dominoes by their second side.
pub fn render_dominoes(dominoes: &[Domino], max_pips: u32) -> String {
    let mut out = String::new();
    for pip in 0..=max_pips {
        for domino in dominoes.iter().filter(|d| d.side2() == pip) {
            out.push_str(&format!("{} ", domino));
        }
        out.push('\n');
    }
    out
}
