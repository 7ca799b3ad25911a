//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI

use super::advice::{free_letters, letter_advice};
use crate::output::{print_advice_result, print_free_letters, print_solve_result};
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line typed at the puzzle prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    Free,
    Advice,
    Help,
    Puzzle(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "free" | "f" => Self::Free,
            "advice" | "a" => Self::Advice,
            "help" | "h" | "?" => Self::Help,
            _ => Self::Puzzle(line.trim().to_string()),
        }
    }
}

fn print_help() {
    println!("Enter the board with '_' (or '-') for each hidden letter, e.g. G__D _S N_W");
    println!("Then enter the clue or category (or leave it empty).\n");
    println!("Commands: 'free' for the bonus round letters, 'advice' for letter advice,");
    println!("          'help' for this text, 'quit' to exit\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(solver: &Solver<'_>) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║         Wheel of Fortune Solver - Interactive Mode           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut solved = 0;

    loop {
        let Some(line) = prompt(&mut lines, "Puzzle")? else {
            break;
        };

        match Input::parse(&line) {
            Input::Quit => break,
            Input::Help => print_help(),
            Input::Free => print_free_letters(&free_letters()),
            Input::Advice => {
                let revealed = prompt(&mut lines, "Revealed letters")?.unwrap_or_default();
                let clue = prompt(&mut lines, "Clue")?.unwrap_or_default();
                print_advice_result(&letter_advice(&revealed, &clue));
                println!();
            }
            Input::Puzzle(puzzle) if puzzle.is_empty() => {}
            Input::Puzzle(puzzle) => {
                let clue = prompt(&mut lines, "Clue")?.unwrap_or_default();
                let analysis = solver.analyze(&puzzle, &clue);
                print_solve_result(&analysis, false);
                println!();
                solved += 1;
            }
        }
    }

    println!(
        "\n👋 Thanks for playing! {} solved.\n",
        format!("{solved} puzzle{}", if solved == 1 { "" } else { "s" }).bright_cyan()
    );
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    lines
        .next()
        .transpose()
        .map(|line| line.map(|l| l.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Input::parse("quit"), Input::Quit);
        assert_eq!(Input::parse("  Q "), Input::Quit);
        assert_eq!(Input::parse("FREE"), Input::Free);
        assert_eq!(Input::parse("advice"), Input::Advice);
        assert_eq!(Input::parse("?"), Input::Help);
    }

    #[test]
    fn parse_puzzle_keeps_text() {
        assert_eq!(
            Input::parse(" g__d _s n_w "),
            Input::Puzzle("g__d _s n_w".to_string())
        );
        assert_eq!(Input::parse(""), Input::Puzzle(String::new()));
    }

    #[test]
    fn prompt_reads_lines_until_eof() {
        let mut lines = io::Cursor::new("  first \nsecond\n").lines();
        assert_eq!(prompt(&mut lines, "x").unwrap().as_deref(), Some("first"));
        assert_eq!(prompt(&mut lines, "x").unwrap().as_deref(), Some("second"));
        assert_eq!(prompt(&mut lines, "x").unwrap(), None);
    }
}
