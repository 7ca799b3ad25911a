//! Wheel of Fortune Solver - CLI
//!
//! Puzzle board solver with TUI and CLI modes: dictionary pattern matching,
//! letter suggestions and a confidence estimate.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fortune_solver::{
    commands::{
        BenchmarkConfig, SolveConfig, free_letters, letter_advice, print_test_all_statistics,
        run_benchmark, run_simple, run_test_all, solve_puzzle,
    },
    dictionary::{Dictionary, loader::load_from_file},
    output::{
        formatters::letter_list, print_advice_result, print_benchmark_result, print_free_letters,
        print_solve_result,
    },
    solver::Solver,
};
use log::{LevelFilter, info};

#[derive(Parser)]
#[command(
    name = "fortune_solver",
    about = "Wheel of Fortune puzzle solver: dictionary pattern matching with letter suggestions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default, built-in seed lists) or path to a sectioned file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a puzzle board
    Solve {
        /// The board, with '_' or '-' for hidden letters (quote it)
        puzzle: String,

        /// Clue or category name
        #[arg(short, long)]
        clue: Option<String>,

        /// Show the confidence breakdown and all candidates
        #[arg(long)]
        verbose_candidates: bool,
    },

    /// Rank letters to call by English frequency
    Suggest {
        /// Letters already revealed on the board
        #[arg(short, long, default_value = "")]
        revealed: String,

        /// Clue or category name
        #[arg(short, long)]
        clue: Option<String>,
    },

    /// Show the letters given for free in the bonus round
    FreeLetters,

    /// Benchmark solver accuracy on randomly revealed entries
    Benchmark {
        /// Number of random entries to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Fraction of each entry's letters to reveal
        #[arg(long, default_value = "0.4")]
        reveal: f64,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test solver on every dictionary entry as a bonus round
    TestAll {
        /// Limit number of entries to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the dictionary selected with the -d flag
fn load_dictionary(source: &str) -> Result<Dictionary> {
    if source == "embedded" {
        return Ok(Dictionary::embedded().clone());
    }
    let dictionary =
        load_from_file(source).with_context(|| format!("failed to load dictionary {source}"))?;
    info!("using dictionary {source} ({} entries)", dictionary.len());
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.dictionary)?;
    let solver = Solver::new(&dictionary);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(solver),
        Commands::Simple => run_simple(&solver).context("interactive session failed"),
        Commands::Solve {
            puzzle,
            clue,
            verbose_candidates,
        } => run_solve_command(&solver, &puzzle, clue.as_deref(), verbose_candidates),
        Commands::Suggest { revealed, clue } => {
            print_advice_result(&letter_advice(&revealed, clue.as_deref().unwrap_or_default()));
            Ok(())
        }
        Commands::FreeLetters => {
            print_free_letters(&free_letters());
            Ok(())
        }
        Commands::Benchmark {
            count,
            reveal,
            seed,
        } => {
            run_benchmark_command(&solver, count, reveal, seed);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&solver, limit);
            Ok(())
        }
    }
}

fn run_solve_command(
    solver: &Solver<'_>,
    puzzle: &str,
    clue: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let mut config = SolveConfig::from_args(Some(puzzle), clue)?;
    if verbose {
        config.max_candidates = usize::MAX;
    }
    let analysis = solve_puzzle(&config, solver);
    print_solve_result(&analysis, verbose);
    Ok(())
}

fn run_benchmark_command(solver: &Solver<'_>, count: usize, reveal: f64, seed: Option<u64>) {
    println!(
        "Running benchmark on {count} random entries with {:.0}% of letters revealed...",
        reveal * 100.0
    );

    let config = BenchmarkConfig {
        samples: count,
        reveal_fraction: reveal,
        seed,
    };
    let result = run_benchmark(solver, &config);
    print_benchmark_result(&result);
}

fn run_test_all_command(solver: &Solver<'_>, limit: Option<usize>) {
    println!("\n{}", "═".repeat(70));
    println!(" Bonus Round Evaluation ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} dictionary entries",
        solver.dictionary().len()
    );
    println!("Free letters: {}\n", letter_list(&free_letters()));

    let stats = run_test_all(solver, limit, true);
    print_test_all_statistics(&stats);
}

fn run_play_command(solver: Solver<'_>) -> Result<()> {
    use fortune_solver::interactive::{App, run_tui};

    let app = App::new(solver);
    run_tui(app)
}
