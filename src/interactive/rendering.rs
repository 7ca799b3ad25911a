//! TUI rendering with ratatui
//!
//! Visualizations for the puzzle solver interface.

use super::app::{App, Field, MessageStyle};
use crate::output::formatters::{board_tiles, confidence_label, letter_list};
use crate::solver::MatchPass;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Puzzle input
            Constraint::Length(3), // Clue input
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, Field::Puzzle, chunks[2]);
    render_input(f, app, Field::Clue, chunks[3]);

    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎡 WHEEL OF FORTUNE SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Solution
            Constraint::Percentage(30), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_solution(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_solution(f: &mut Frame, app: &App, area: Rect) {
    let analysis = &app.analysis;
    let block = Block::default()
        .title(" Solution ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if analysis.puzzle.is_empty() {
        let paragraph = Paragraph::new("Enter a puzzle board below").block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let solution_style = if analysis.matched() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    };
    let category = if analysis.category.is_known() {
        analysis.category.name()
    } else {
        "unknown"
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Board:     "),
            Span::raw(board_tiles(&analysis.puzzle)),
        ]),
        Line::from(vec![
            Span::raw("Solution:  "),
            Span::styled(analysis.result.solution.clone(), solution_style),
        ]),
        Line::from(vec![
            Span::raw("Call next: "),
            Span::styled(
                letter_list(&analysis.result.suggested_letters),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Category:  {category}")),
        Line::from(format!(
            "Match:     {} pass, {} candidates",
            analysis.pass,
            analysis.candidates.len()
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let analysis = &app.analysis;

    let content = if analysis.pass == MatchPass::None {
        vec![Line::from("No candidates")]
    } else {
        let mut lines: Vec<Line> = analysis
            .candidates
            .iter()
            .take(8)
            .enumerate()
            .map(|(i, candidate)| {
                let style = if i == 0 {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(Span::styled(format!("  {candidate}"), style))
            })
            .collect();
        if analysis.candidates.len() > 8 {
            lines.push(Line::from(format!(
                "  ... and {} more",
                analysis.candidates.len() - 8
            )));
        }
        lines
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, entry)| {
            let content = format!(
                "{}: {} → {} ({:.0}%)",
                app.history.len() - i,
                entry.puzzle,
                entry.solution,
                entry.confidence * 100.0
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Confidence gauge
            Constraint::Percentage(60), // Letter advice
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_confidence(f, app, chunks[0]);
    render_advice(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_confidence(f: &mut Frame, app: &App, area: Rect) {
    let confidence = app.analysis.result.confidence;
    let percent = (confidence * 100.0).round().clamp(0.0, 100.0) as u16;
    let color = match confidence_label(confidence) {
        "high" => Color::Green,
        "medium" => Color::Yellow,
        _ => Color::Red,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Confidence ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{percent}% ({})", confidence_label(confidence)));

    f.render_widget(gauge, area);
}

fn render_advice(f: &mut Frame, app: &App, area: Rect) {
    let top = app.advice.scores.first().map_or(1.0, |s| s.score);
    let items: Vec<ListItem> = app
        .advice
        .scores
        .iter()
        .take(8)
        .map(|score| {
            let bar_len = ((score.score / top) * 12.0).round() as usize;
            let bar = "█".repeat(bar_len.min(12)) + &"░".repeat(12_usize.saturating_sub(bar_len));
            ListItem::new(format!("{}  {bar} {:5.2}", score.letter, score.score))
        })
        .collect();

    let advice = List::new(items).block(
        Block::default()
            .title(" Letter Frequency ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(advice, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, field: Field, area: Rect) {
    let (title, content) = match field {
        Field::Puzzle => (" Puzzle (_ for hidden letters) ", app.puzzle_input.as_str()),
        Field::Clue => (" Clue or Category ", app.clue_input.as_str()),
    };
    let (color, border) = if app.focus == field {
        (Color::Yellow, BorderType::Double)
    } else {
        (Color::DarkGray, BorderType::Plain)
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(border)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = format!(
        "Boards: {} | TAB: Switch field | Enter: Save | Ctrl-N: New | Ctrl-R: Recall | Esc: Quit",
        app.history.len()
    );
    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
