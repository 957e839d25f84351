use super::board::Board;
use super::types::{Mark, WinningLine};

/// Scan order is fixed: rows, then columns, then diagonals. The first
/// completed line decides the result, so callers must not feed boards
/// with several completed lines and expect anything beyond that.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = board[a];
        if mark != Mark::Empty && board[b] == mark && board[c] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::empty_board;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = empty_board();
        for &(index, mark) in marks {
            board[index] = mark;
        }
        board
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(check_win(&empty_board()), None);
        assert_eq!(check_win_with_line(&empty_board()), None);
    }

    #[test]
    fn test_each_line_wins_for_both_marks() {
        for line in WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(&[
                    (line[0], mark),
                    (line[1], mark),
                    (line[2], mark),
                ]);
                assert_eq!(check_win(&board), Some(mark), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_winning_line_reports_cells() {
        let board = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.cells, [2, 4, 6]);
        assert!(line.contains(4));
        assert!(!line.contains(0));
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::O)]);
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins_on_degenerate_board() {
        // Not reachable by alternating play, but the scan order pins
        // the answer down anyway.
        let board = [Mark::X; 9];
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.cells, [0, 1, 2]);
    }
}
