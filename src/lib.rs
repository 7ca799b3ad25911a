//! Wheel of Fortune Solver
//!
//! Matches a partly revealed puzzle board against a dictionary of known
//! answers, suggests letters to call next and reports how sure it is.
//!
//! # Quick Start
//!
//! ```rust
//! use fortune_solver::solver::Solver;
//!
//! let result = Solver::embedded().solve("_____ ______", "PERSON");
//! assert_eq!(result.solution, "HELEN KELLER");
//! println!("Call one of {:?} ({:.0}% sure)", result.suggested_letters, result.confidence * 100.0);
//! ```

// Core domain types
pub mod core;

// Answer dictionary
pub mod dictionary;

// Error types
pub mod error;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
