//! TUI application state and logic

use crate::commands::{AdviceResult, letter_advice};
use crate::solver::{Analysis, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;
const MAX_HISTORY: usize = 20;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub puzzle_input: String,
    pub clue_input: String,
    pub focus: Field,
    pub analysis: Analysis<'a>,
    pub advice: AdviceResult,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Which input field receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Puzzle,
    Clue,
}

/// A board the user committed with Enter
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub puzzle: String,
    pub clue: String,
    pub solution: String,
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: Solver<'a>) -> Self {
        Self {
            solver,
            puzzle_input: String::new(),
            clue_input: String::new(),
            focus: Field::Puzzle,
            analysis: solver.analyze("", ""),
            advice: letter_advice("", ""),
            history: Vec::new(),
            messages: vec![
                Message {
                    text: "Type the board with '_' for hidden letters, e.g. G__D _S N_W".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB switches to the clue field".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Re-solve from the current field contents
    pub fn refresh(&mut self) {
        self.analysis = self.solver.analyze(&self.puzzle_input, &self.clue_input);
        self.advice = letter_advice(self.analysis.puzzle.as_str(), &self.clue_input);
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Puzzle => &mut self.puzzle_input,
            Field::Clue => &mut self.clue_input,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
        self.refresh();
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
        self.refresh();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Puzzle => Field::Clue,
            Field::Clue => Field::Puzzle,
        };
    }

    /// Record the current board in the history
    pub fn submit(&mut self) {
        if self.analysis.puzzle.is_empty() {
            self.add_message("Nothing to solve yet", MessageStyle::Error);
            return;
        }

        let result = &self.analysis.result;
        let entry = HistoryEntry {
            puzzle: self.analysis.puzzle.to_string(),
            clue: self.clue_input.trim().to_string(),
            solution: result.solution.clone(),
            confidence: result.confidence,
        };

        let message = if self.analysis.matched() {
            format!(
                "Solved: {} ({:.0}%)",
                entry.solution,
                entry.confidence * 100.0
            )
        } else {
            "No dictionary entry fits this board".to_string()
        };
        let style = if self.analysis.matched() {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };

        self.history.push(entry);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        self.add_message(&message, style);
    }

    /// Clear both fields for a new board
    pub fn new_board(&mut self) {
        self.puzzle_input.clear();
        self.clue_input.clear();
        self.focus = Field::Puzzle;
        self.refresh();
        self.add_message("New board", MessageStyle::Info);
    }

    /// Bring back the last committed board
    pub fn recall_last(&mut self) {
        if let Some(entry) = self.history.last() {
            self.puzzle_input = entry.puzzle.clone();
            self.clue_input = entry.clue.clone();
            self.refresh();
            self.add_message("Recalled last board", MessageStyle::Info);
        } else {
            self.add_message("History is empty", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('n') if ctrl => app.new_board(),
                KeyCode::Char('r') if ctrl => app.recall_last(),
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
