pub mod board;
pub mod bot_controller;
pub mod config;
pub mod game_state;
pub mod logger;
pub mod session_rng;
pub mod types;
pub mod win_detector;

pub use board::{Board, BOARD_CELLS, available_moves, empty_board, is_full, is_terminal};
pub use bot_controller::{DEFAULT_DIFFICULTY, choose_move, find_best_move};
pub use config::{GameConfig, Validate, load_config, parse_config, save_config};
pub use game_state::{GameState, Scores};
pub use session_rng::SessionRng;
pub use types::{GameMode, GameStatus, Mark, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
