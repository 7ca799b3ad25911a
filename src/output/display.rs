//! Display functions for command results

use super::formatters::{board_tiles, confidence_bar, confidence_label, letter_list};
use crate::commands::{AdviceResult, BenchmarkResult};
use crate::solver::{Analysis, MatchPass, MAX_SUGGESTIONS};
use colored::Colorize;

/// Print the analysis of a solved board
pub fn print_solve_result(analysis: &Analysis<'_>, verbose: bool) {
    let result = &analysis.result;

    println!("\n{}", "─".repeat(60).cyan());
    println!("Board:    {}", board_tiles(&analysis.puzzle).bright_white());
    let category = if analysis.category.is_known() {
        analysis.category.to_string()
    } else {
        "unknown".to_string()
    };
    println!("Category: {}", category.bright_cyan());
    println!("{}", "─".repeat(60).cyan());

    let solution = if analysis.matched() {
        result.solution.bright_green().bold()
    } else {
        result.solution.bright_red().bold()
    };
    println!("\n🎯 Solution:   {solution}");
    if !analysis.matched() {
        println!("   {}", "No dictionary entry fits this board".red());
    }

    println!(
        "💡 Call next:  {}",
        letter_list(&result.suggested_letters).bright_yellow().bold()
    );
    println!(
        "📊 Confidence: [{}] {} ({})",
        confidence_bar(result.confidence, 30).green(),
        format!("{:.0}%", result.confidence * 100.0).bright_yellow(),
        confidence_label(result.confidence)
    );

    if verbose {
        println!(
            "\n   Candidates: {:.1}  Reveal: {:.1}  Fit: {:.2}",
            analysis.confidence.candidates, analysis.confidence.reveal, analysis.confidence.fit
        );
        println!(
            "   Match pass: {} ({} candidates)",
            analysis.pass,
            analysis.candidates.len()
        );
        if analysis.pass != MatchPass::None {
            for candidate in &analysis.candidates {
                println!("   • {candidate}");
            }
        }
    }
}

/// Print frequency-based letter advice
pub fn print_advice_result(result: &AdviceResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER ADVICE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if result.category.is_known() {
        println!("\n   Category: {}", result.category.to_string().bright_cyan());
    }
    if !result.revealed.is_empty() {
        println!("   Revealed: {}", result.revealed);
    }

    let top = result.scores.first().map_or(1.0, |s| s.score);
    println!();
    for (i, score) in result.scores.iter().take(MAX_SUGGESTIONS * 2).enumerate() {
        let bar = confidence_bar(score.score / top, 20);
        let letter = if i < MAX_SUGGESTIONS {
            score.letter.to_string().bright_yellow().bold()
        } else {
            score.letter.to_string().normal()
        };
        println!("   {letter}  [{}] {:5.2}", bar.green(), score.score);
    }

    println!(
        "\n💡 Call next: {}",
        letter_list(&result.suggestions()).bright_yellow().bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles tested:   {}", result.total_puzzles);
    println!(
        "   Solved:           {}",
        format!("{} ({:.1}%)", result.solved, result.accuracy * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Mean confidence:  {}",
        format!("{:.3}", result.mean_confidence).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    println!("\n📈 {}", "Match passes:".bright_cyan().bold());
    for pass in [
        MatchPass::Category,
        MatchPass::Common,
        MatchPass::Partial,
        MatchPass::None,
    ] {
        if let Some(&count) = result.pass_distribution.get(&pass) {
            let pct = (count as f64 / result.total_puzzles.max(1) as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {:<11} {bar} {count:4} ({pct:5.1}%)", pass.to_string());
        }
    }
}

/// Print the free bonus round letters
pub fn print_free_letters(letters: &[char]) {
    println!(
        "🎁 Free bonus round letters: {}",
        letter_list(letters).bright_yellow().bold()
    );
}
