use super::types::Mark;
use super::win_detector::check_win;

pub const BOARD_CELLS: usize = 9;

/// 3x3 grid in row-major order, indices 0-8.
pub type Board = [Mark; BOARD_CELLS];

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_CELLS]
}

pub fn available_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

pub fn is_terminal(board: &Board) -> bool {
    check_win(board).is_some() || is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_nine_moves() {
        let board = empty_board();
        assert_eq!(available_moves(&board), (0..9).collect::<Vec<_>>());
        assert!(!is_full(&board));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_available_moves_skips_occupied_cells() {
        let mut board = empty_board();
        board[0] = Mark::X;
        board[4] = Mark::O;
        board[8] = Mark::X;
        assert_eq!(available_moves(&board), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_full_board_is_terminal() {
        let board = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ];
        assert!(is_full(&board));
        assert!(is_terminal(&board));
        assert!(available_moves(&board).is_empty());
    }

    #[test]
    fn test_won_board_is_terminal_even_when_not_full() {
        let mut board = empty_board();
        board[0] = Mark::X;
        board[1] = Mark::X;
        board[2] = Mark::X;
        assert!(!is_full(&board));
        assert!(is_terminal(&board));
    }
}
