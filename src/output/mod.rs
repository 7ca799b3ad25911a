//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_advice_result, print_benchmark_result, print_free_letters, print_solve_result,
};
