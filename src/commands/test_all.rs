//! Test all entries - bonus round evaluation
//!
//! Masks every dictionary entry the way the bonus round does (R, S, T, L, N
//! and E revealed), solves it with its own category as the clue and
//! gathers statistics.

use crate::core::{Category, LetterSet, PuzzleText};
use crate::solver::{BONUS_ROUND_LETTERS, MatchPass, Solver};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single entry
#[derive(Debug, Clone)]
pub struct EntryTestResult {
    pub entry: String,
    pub category: Category,
    pub board: PuzzleText,
    pub solution: String,
    pub pass: MatchPass,
    pub candidates: usize,
    pub confidence: f64,
    pub success: bool,
}

/// Statistics from testing all entries
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_entries: usize,
    pub solved: usize,
    pub failed: usize,
    pub pass_distribution: HashMap<MatchPass, usize>,
    pub average_confidence: f64,
    pub total_time: Duration,
    /// Lowest-confidence entries, failures first
    pub hardest: Vec<EntryTestResult>,
}

/// Bonus round board for `entry`
#[must_use]
pub fn bonus_round_board(entry: &str) -> PuzzleText {
    PuzzleText::masked(entry, BONUS_ROUND_LETTERS.into_iter().collect::<LetterSet>())
}

fn test_entry(solver: &Solver<'_>, category: Category, entry: &str) -> EntryTestResult {
    let board = bonus_round_board(entry);
    let analysis = solver.analyze(board.as_str(), category.name());
    EntryTestResult {
        entry: entry.to_string(),
        category,
        success: analysis.result.solution == entry,
        solution: analysis.result.solution,
        pass: analysis.pass,
        candidates: analysis.candidates.len(),
        confidence: analysis.result.confidence,
        board,
    }
}

/// Run the bonus round over every entry (or a limited subset)
///
/// Entries are solved in parallel; `show_progress` draws a progress bar.
pub fn run_test_all(
    solver: &Solver<'_>,
    limit: Option<usize>,
    show_progress: bool,
) -> TestAllStatistics {
    let entries: Vec<(Category, &str)> = solver
        .dictionary()
        .categorized()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    let pb = if show_progress {
        println!("🎯 Testing {} entries...", entries.len());
        let pb = ProgressBar::new(entries.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();

    let results: Vec<EntryTestResult> = entries
        .par_iter()
        .map(|&(category, entry)| {
            let result = test_entry(solver, category, entry);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");
    let total_time = total_start.elapsed();

    let solved = results.iter().filter(|r| r.success).count();
    let mut pass_distribution: HashMap<MatchPass, usize> = HashMap::new();
    for result in &results {
        *pass_distribution.entry(result.pass).or_insert(0) += 1;
    }

    let average_confidence = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.confidence).sum::<f64>() / results.len() as f64
    };

    let mut hardest = results.clone();
    hardest.sort_by(|a, b| {
        a.success
            .cmp(&b.success)
            .then(a.confidence.total_cmp(&b.confidence))
    });
    hardest.truncate(10);

    TestAllStatistics {
        total_entries: results.len(),
        solved,
        failed: results.len() - solved,
        pass_distribution,
        average_confidence,
        total_time,
        hardest,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Bonus Round Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_entries.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total entries tested: {}", stats.total_entries);
    println!(
        "  Solved:               {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed:               {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average confidence:   {}",
        format!("{:.3}", stats.average_confidence)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Match Pass Distribution".bright_cyan().bold());
    let max_count = stats.pass_distribution.values().copied().max().unwrap_or(1);
    for pass in [
        MatchPass::Category,
        MatchPass::Common,
        MatchPass::Partial,
        MatchPass::None,
    ] {
        let count = stats.pass_distribution.get(&pass).copied().unwrap_or(0);
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!(
            "  {:<11} {bar} {count:4} ({:5.1}%)",
            pass.to_string(),
            count as f64 / total * 100.0
        );
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Entries".yellow().bold());
        for result in stats.hardest.iter().take(5) {
            let mark = if result.success {
                "✓".green()
            } else {
                "✗".red()
            };
            println!(
                "  {mark} {} [{}] {} ({:.2})",
                result.board.to_string().bright_white(),
                result.category,
                result.entry.yellow(),
                result.confidence
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    #[test]
    fn bonus_round_board_reveals_rstlne() {
        assert_eq!(bonus_round_board("WHEEL OF FORTUNE").as_str(), "__EEL __ __RT_NE");
        assert_eq!(bonus_round_board("GOOD AS NEW").as_str(), "____ _S NE_");
    }

    #[test]
    fn every_seed_entry_survives_the_bonus_round() {
        let stats = run_test_all(&Solver::embedded(), None, false);
        assert_eq!(stats.total_entries, 73);
        assert_eq!(stats.solved, 73);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.pass_distribution.get(&MatchPass::Category), Some(&73));
        assert!((0.0..=1.0).contains(&stats.average_confidence));
    }

    #[test]
    fn limit_restricts_entries() {
        let stats = run_test_all(&Solver::embedded(), Some(5), false);
        assert_eq!(stats.total_entries, 5);
        assert_eq!(stats.solved + stats.failed, 5);
        let sum: usize = stats.pass_distribution.values().sum();
        assert_eq!(sum, 5);
    }

    #[test]
    fn hardest_lists_failures_first() {
        let dictionary = Dictionary::from_sections([(
            Category::Phrase,
            vec!["BIG DEAL".to_string(), "BAG DEAL".to_string()],
        )]);
        let stats = run_test_all(&Solver::new(&dictionary), None, false);

        // Both boards read "___ _E_L"; the first entry wins both times
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.hardest[0].entry, "BAG DEAL");
        assert!(!stats.hardest[0].success);
        assert_eq!(stats.hardest[0].solution, "BIG DEAL");
        assert_eq!(stats.hardest[0].candidates, 2);
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::default();
        let stats = run_test_all(&Solver::new(&dictionary), None, false);
        assert_eq!(stats.total_entries, 0);
        assert!(stats.hardest.is_empty());
        assert!(stats.average_confidence.abs() < f64::EPSILON);
    }
}
