use clap::{Parser, Subcommand};
use doku::Grid;
use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "doku", version, about = "A backtracking sudoku solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve line-format puzzles from a file or stdin, first solution each.
    ///
    /// Every line with at least 81 characters is a puzzle: '1'..'9' are
    /// entries, any other character an empty cell. Shorter lines are
    /// skipped. Each puzzle is printed, followed by its solution if it has
    /// one.
    Solve {
        /// File with one puzzle per line, stdin if omitted.
        path: Option<PathBuf>,
    },
    /// Explore every solution of a single puzzle and print search statistics.
    ///
    /// Takes one strict 81 character puzzle: '1'..'9' are entries and '0',
    /// '.' or '_' empty cells. Prints elapsed time, node count and solution
    /// count, then every solution.
    Enumerate {
        /// The puzzle as an 81 character string.
        puzzle: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Solve { path } => solve_stream(path),
        Command::Enumerate { puzzle } => enumerate(&puzzle),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn solve_stream(path: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let line = line?;
        let grid = match Grid::from_str_line_permissive(&line) {
            Some(grid) => grid,
            None => {
                debug!("skipping line with fewer than 81 characters");
                continue;
            }
        };

        println!("{}", grid);
        let mut solution = grid;
        if solution.solve() {
            println!("{}", solution);
        } else {
            debug!("puzzle has no solution");
        }
    }
    Ok(())
}

fn enumerate(puzzle: &str) -> Result<(), Box<dyn Error>> {
    let grid = Grid::from_str_line(puzzle)?;
    let report = grid.solve_all();

    println!("{}", report);
    for solution in &report.solutions {
        println!();
        println!("{}", solution);
    }
    Ok(())
}
