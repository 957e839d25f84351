use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use tictactoe_engine::{
    GameMode, GameState, GameStatus, Mark, SessionRng, Validate, WinningLine, choose_move, log,
    load_config, logger,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Human (X) against the computer (O)
    Single,
    /// Two humans at one keyboard
    Two,
}

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    #[arg(long, default_value = "tictactoe.yaml")]
    config: String,

    #[arg(long, value_enum, default_value = "single")]
    mode: Mode,

    /// Overrides the configured difficulty, 0.0 to 1.0
    #[arg(long)]
    difficulty: Option<f64>,

    /// Overrides the configured RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    logger::init_logger();

    let mut config = load_config(&args.config)?;
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("session seed: {}", rng.seed());

    let mode = match args.mode {
        Mode::Single => GameMode::HumanVsComputer,
        Mode::Two => GameMode::HumanVsHuman,
    };
    let mut state = GameState::new(mode);

    loop {
        render(&state);

        if state.status != GameStatus::InProgress {
            announce(&state);
            print_scores(&state);
            print!("Press r to play again, q to quit: ");
            flush()?;
            match read_command()?.as_str() {
                "r" => {
                    state.reset();
                    continue;
                }
                "q" => break,
                _ => continue,
            }
        }

        if mode == GameMode::HumanVsComputer && state.current_mark == Mark::O {
            // Purely presentational pause, the move is computed after it.
            thread::sleep(Duration::from_millis(config.move_delay_ms));
            let index = choose_move(&state.board, config.difficulty, &mut rng)?;
            log!("computer plays cell {}", index + 1);
            state.place_mark(index)?;
            continue;
        }

        println!("Player {}'s turn", state.current_mark.as_char());
        print!("Enter cell (1-9), r to restart, q to quit: ");
        flush()?;

        match read_command()?.as_str() {
            "q" => break,
            "r" => state.reset(),
            input => match parse_cell(input) {
                Some(index) => {
                    if let Err(e) = state.place_mark(index) {
                        println!("{}", e);
                    }
                }
                None => println!("Unrecognized input: {}", input),
            },
        }
    }

    Ok(())
}

fn parse_cell(input: &str) -> Option<usize> {
    match input.parse::<usize>() {
        Ok(cell) if (1..=9).contains(&cell) => Some(cell - 1),
        _ => None,
    }
}

fn render(state: &GameState) {
    let line = state.winning_line();
    println!();
    for row in 0..3 {
        if row > 0 {
            println!("---+---+---");
        }
        let cells: Vec<String> = (0..3)
            .map(|col| render_cell(state, row * 3 + col, line))
            .collect();
        println!("{}", cells.join("|"));
    }
    println!();
}

fn render_cell(state: &GameState, index: usize, line: Option<WinningLine>) -> String {
    match state.board[index] {
        Mark::Empty => format!(" {} ", index + 1),
        mark => {
            let highlighted = line.map(|l| l.contains(index)).unwrap_or(false);
            if highlighted {
                format!("[{}]", mark.as_char())
            } else {
                format!(" {} ", mark.as_char())
            }
        }
    }
}

fn announce(state: &GameState) {
    match state.status {
        GameStatus::XWon => println!("Player X wins!"),
        GameStatus::OWon => println!("Player O wins!"),
        GameStatus::Draw => println!("Game ended in a draw!"),
        GameStatus::InProgress => {}
    }
}

fn print_scores(state: &GameState) {
    println!(
        "Score  X: {}  O: {}  Draws: {}",
        state.scores.x_wins, state.scores.o_wins, state.scores.draws
    );
}

fn read_command() -> Result<String, String> {
    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if bytes == 0 {
        // EOF, treat as quit.
        return Ok("q".to_string());
    }
    Ok(input.trim().to_lowercase())
}

fn flush() -> Result<(), String> {
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {}", e))
}
