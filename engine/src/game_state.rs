use super::board::{Board, BOARD_CELLS, empty_board, is_full};
use super::types::{GameMode, GameStatus, Mark, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scores {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

/// One game session. X always moves first; the frontend decides which
/// side the computer plays (O, in single-player mode).
#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub scores: Scores,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: empty_board(),
            mode,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            scores: Scores::default(),
        }
    }

    /// Places the current mark, resolves the game if this move ended it,
    /// otherwise passes the turn.
    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("game is already over".to_string());
        }
        if index >= BOARD_CELLS {
            return Err(format!("cell index {} is out of range", index));
        }
        if self.board[index] != Mark::Empty {
            return Err(format!("cell {} is already marked", index));
        }

        self.board[index] = self.current_mark;
        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Starts a new round, keeping the score tallies.
    pub fn reset(&mut self) {
        self.board = empty_board();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.status = match line.mark {
                Mark::X => {
                    self.scores.x_wins += 1;
                    GameStatus::XWon
                }
                Mark::O => {
                    self.scores.o_wins += 1;
                    GameStatus::OWon
                }
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if is_full(&self.board) {
            self.scores.draws += 1;
            self.status = GameStatus::Draw;
        }
    }
}
