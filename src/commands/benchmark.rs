//! Benchmark command
//!
//! Solves randomly sampled, partly revealed dictionary entries and measures
//! accuracy and throughput.

use crate::core::{Category, LetterSet, PuzzleText};
use crate::solver::{MatchPass, Solver};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Benchmark settings
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub samples: usize,
    /// Fraction of each entry's distinct letters to reveal, in `[0, 1]`
    pub reveal_fraction: f64,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            reveal_fraction: 0.4,
            seed: None,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub solved: usize,
    pub accuracy: f64,
    pub mean_confidence: f64,
    pub pass_distribution: HashMap<MatchPass, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Reveal a random share of the distinct letters of `answer`
pub fn reveal_random<R: Rng + ?Sized>(answer: &str, fraction: f64, rng: &mut R) -> PuzzleText {
    let mut letters: Vec<char> = LetterSet::from_text(answer).iter().collect();
    letters.shuffle(rng);
    let count = (fraction.clamp(0.0, 1.0) * letters.len() as f64).round() as usize;
    let revealed: LetterSet = letters.into_iter().take(count).collect();
    PuzzleText::masked(answer, revealed)
}

/// Run the benchmark over random entries of the solver's dictionary
pub fn run_benchmark(solver: &Solver<'_>, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let entries: Vec<(Category, &str)> = solver.dictionary().categorized().collect();

    let start = Instant::now();
    let mut solved = 0;
    let mut total_confidence = 0.0;
    let mut total_puzzles = 0;
    let mut pass_distribution: HashMap<MatchPass, usize> = HashMap::new();

    for _ in 0..config.samples {
        let Some(&(category, answer)) = entries.choose(&mut rng) else {
            break;
        };
        let board = reveal_random(answer, config.reveal_fraction, &mut rng);
        let analysis = solver.analyze(board.as_str(), category.name());

        if analysis.result.solution == answer {
            solved += 1;
        } else {
            debug!("missed {answer}: {board} -> {}", analysis.result.solution);
        }
        total_confidence += analysis.result.confidence;
        total_puzzles += 1;
        *pass_distribution.entry(analysis.pass).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let (accuracy, mean_confidence) = if total_puzzles == 0 {
        (0.0, 0.0)
    } else {
        (
            solved as f64 / total_puzzles as f64,
            total_confidence / total_puzzles as f64,
        )
    };

    BenchmarkResult {
        total_puzzles,
        solved,
        accuracy,
        mean_confidence,
        pass_distribution,
        duration,
        puzzles_per_second: total_puzzles as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
