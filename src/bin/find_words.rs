use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use scrabble_finder::{Board, Dictionary, Solver};
use std::fs::read_to_string;
use std::time::Instant;

/// Find the scrabble words you can play with your rack
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The letters on your rack
    rack: String,

    /// Word file: one word per line, followed by its definition
    #[arg(short, long, default_value = "words.txt")]
    dictionary: String,

    /// Board file: 15 lines of 15 squares, '.' for an empty square.
    /// Without a board the words are found for an empty board.
    #[arg(short, long)]
    board: Option<String>,

    /// Maximum number of scores to show
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Show debug output
    #[arg(long)]
    debug: bool,
}

fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn read_board(path: Option<&str>) -> Result<Board> {
    let path = match path {
        Some(path) => path,
        None => return Ok(Board::new()),
    };
    let contents =
        read_to_string(path).with_context(|| format!("Board \"{}\" could not be read", path))?;
    let board = parse_board(&contents).with_context(|| format!("Invalid board \"{}\"", path))?;
    Ok(board)
}

/// Parse the rows of a board file; line endings may be `\n` or `\r\n`, empty lines are skipped.
fn parse_board(contents: &str) -> Result<Board, scrabble_finder::Error> {
    let rows: Vec<&str> = contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .collect();
    Board::from_strings(&rows)
}

fn run(cli: Cli) -> Result<()> {
    let t0 = Instant::now();
    let dictionary = Dictionary::from_file(&cli.dictionary)?;
    info!("Loading {} took {:?}", dictionary, t0.elapsed());
    let solver = Solver::new(dictionary);
    let board = read_board(cli.board.as_deref())?;

    let t0 = Instant::now();
    let results = solver.find_words(&board, &cli.rack)?;
    info!(
        "Found {} scores with {} in {:?}",
        results.len(),
        cli.rack,
        t0.elapsed()
    );

    let limit = cli.limit.unwrap_or(usize::MAX);
    for (score, words) in results.iter().rev().take(limit) {
        println!("{}:", score);
        for (word, definition) in words {
            println!("  {} - {}", word, definition);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.debug);
    if let Err(err) = run(cli) {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
}
