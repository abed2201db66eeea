use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use tictactoe_engine::{Bot, CELL_COUNT, GameState, GameStatus, Mark, log};

use crate::config::GameConfig;

pub fn run_game(config: &GameConfig) -> Result<(), String> {
    let mut state = GameState::new(config.first_player);
    let mut bot = Bot::new(config.bot_type);

    log!(
        "Starting game: {:?} bot, {:?} moves first",
        bot.bot_type(),
        state.current_mark
    );
    println!("You are X, the computer is O. Empty cells show their number.");

    while !state.is_over() {
        if state.current_mark == Mark::Human {
            render(&state);
            let cell = read_cell()?;
            if let Err(message) = state.place_mark(Mark::Human, cell) {
                println!("{}", message);
            }
        } else {
            thread::sleep(Duration::from_millis(config.thinking_delay_ms));
            let cell = bot.calculate_move(&state)?;
            state.place_mark(Mark::Computer, cell)?;
            log!("Computer plays cell {}", cell);
        }
    }

    render(&state);
    announce(&state);
    Ok(())
}

fn render(state: &GameState) {
    println!();
    for row in 0..3 {
        if row > 0 {
            println!("---+---+---");
        }
        let cells: Vec<String> = (1..=3)
            .map(|col| {
                let cell = row * 3 + col;
                match state.board.mark_at(cell) {
                    Mark::Empty => cell.to_string(),
                    mark => mark.symbol().to_string(),
                }
            })
            .collect();
        println!(" {} | {} | {} ", cells[0], cells[1], cells[2]);
    }
    println!();
}

fn read_cell() -> Result<usize, String> {
    loop {
        print!("Your move: ");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if bytes == 0 {
            return Err("Input stream closed".to_string());
        }

        match input.trim().parse::<usize>() {
            Ok(cell) if (1..=CELL_COUNT).contains(&cell) => return Ok(cell),
            _ => println!("Enter a number between 1 and {}.", CELL_COUNT),
        }
    }
}

fn announce(state: &GameState) {
    match state.status {
        GameStatus::HumanWon => println!("You win!"),
        GameStatus::ComputerWon => println!("The computer wins."),
        GameStatus::Draw => println!("It's a draw."),
        GameStatus::InProgress => {}
    }

    if let Some(line) = state.winning_line {
        println!(
            "Winning line: {} {} {}",
            line.cells[0], line.cells[1], line.cells[2]
        );
    }
}
