use super::board::{Board, BOARD_CELLS, available_moves, is_full};
use super::session_rng::SessionRng;
use super::types::Mark;
use super::win_detector::check_win;

/// Positions still unresolved this many plies deep are scored as neutral.
/// This is a deliberate strength limiter, not an optimization.
const DEPTH_LIMIT: i32 = 4;

/// Candidates within this distance of the best score are all playable,
/// which injects variety without giving up much strength.
const SCORE_TOLERANCE: i32 = 2;

pub const DEFAULT_DIFFICULTY: f64 = 0.7;

/// Picks a cell for the computer (O). With probability `1 - difficulty`
/// the computer plays a uniformly random empty cell instead of searching.
pub fn choose_move(
    board: &Board,
    difficulty: f64,
    rng: &mut SessionRng,
) -> Result<usize, String> {
    if !(0.0..=1.0).contains(&difficulty) {
        return Err(format!(
            "difficulty must be within [0, 1], got {}",
            difficulty
        ));
    }
    validate_board(board)?;

    let roll: f64 = rng.random();
    if roll > difficulty {
        let moves = available_moves(board);
        Ok(moves[rng.random_range(0..moves.len())])
    } else {
        Ok(search_best_move(board, rng))
    }
}

/// Full-strength move selection: minimax every empty cell, then pick
/// uniformly among the candidates inside the tolerance band.
pub fn find_best_move(board: &Board, rng: &mut SessionRng) -> Result<usize, String> {
    validate_board(board)?;
    Ok(search_best_move(board, rng))
}

fn validate_board(board: &Board) -> Result<(), String> {
    if let Some(mark) = check_win(board) {
        return Err(format!("game is already decided, {:?} has won", mark));
    }
    if is_full(board) {
        return Err("board has no empty cells".to_string());
    }
    Ok(())
}

fn search_best_move(board: &Board, rng: &mut SessionRng) -> usize {
    let mut scratch = *board;
    let mut candidates: Vec<(usize, i32)> = Vec::new();
    let mut best_score = i32::MIN;
    let mut best_index = 0;

    for index in 0..BOARD_CELLS {
        if scratch[index] != Mark::Empty {
            continue;
        }
        scratch[index] = Mark::O;
        let score = minimax(&mut scratch, 0, false);
        scratch[index] = Mark::Empty;

        candidates.push((index, score));
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }

    let good_moves: Vec<usize> = candidates
        .iter()
        .filter(|(_, score)| {
            *score >= best_score - SCORE_TOLERANCE && *score <= best_score + SCORE_TOLERANCE
        })
        .map(|(index, _)| *index)
        .collect();

    // The best candidate always qualifies, but don't index an empty vec
    // if that ever stops holding.
    if good_moves.is_empty() {
        return best_index;
    }
    good_moves[rng.random_range(0..good_moves.len())]
}

/// Depth-limited minimax. O maximizes, X minimizes; faster wins score
/// higher and faster losses lower. Every hypothetical placement is
/// undone before the next sibling, so the board comes back unchanged.
fn minimax(board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
    match check_win(board) {
        Some(Mark::O) => return 10 - depth,
        Some(Mark::X) => return depth - 10,
        _ => {}
    }
    if is_full(board) {
        return 0;
    }
    if depth >= DEPTH_LIMIT {
        return 0;
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for index in 0..BOARD_CELLS {
            if board[index] != Mark::Empty {
                continue;
            }
            board[index] = Mark::O;
            best = best.max(minimax(board, depth + 1, false));
            board[index] = Mark::Empty;
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in 0..BOARD_CELLS {
            if board[index] != Mark::Empty {
                continue;
            }
            board[index] = Mark::X;
            best = best.min(minimax(board, depth + 1, true));
            board[index] = Mark::Empty;
        }
        best
    }
}
