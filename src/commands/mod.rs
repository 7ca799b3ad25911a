//! Command implementations

pub mod advice;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use advice::{AdviceResult, free_letters, letter_advice};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use simple::run_simple;
pub use solve::{SolveConfig, solve_puzzle};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
