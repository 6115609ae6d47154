use std::error::Error;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use pips::board::render::{render_board, render_dominoes};
use pips::config::{load_env_file, Settings};
use pips::domino;
use pips::generator::{enumerate_all, synthesize};
use pips::solver::{parallel::solve_parallel, solve_board};
use pips::{PipBoard, Placement};

#[derive(Parser, Debug)]
#[command(version, about = "Generate and solve domino tiling puzzles", long_about = None)]
struct Args {
    /// Environment name, settings are read from .env/<env>.env if it exists
    #[arg(short, long, default_value = "prod")]
    env: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Make a random board that is solvable by construction
    Generate {
        #[arg(short, long)]
        rows: usize,
        #[arg(short, long)]
        cols: usize,
    },
    /// List every distinct board obtainable from the domino set.  Only
    /// practical for very small boards.
    Enumerate {
        #[arg(short, long)]
        rows: usize,
        #[arg(short, long)]
        cols: usize,
    },
    /// Solve a board given as a JSON array of rows, e.g. '[[1,2],[2,1]]'
    Solve {
        #[arg(short, long)]
        board: String,
        /// Spread the search over the worker pool
        #[arg(short, long)]
        parallel: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    load_env_file(&args.env)?;
    let settings = Settings::from_env()?;

    match args.command {
        Command::Generate { rows, cols } => {
            let board = synthesize(rows, cols)?;
            println!("{}", board.to_json_string());
            print!("{}", render_board(&board, &Placement::for_board(&board), false));
        }
        Command::Enumerate { rows, cols } => {
            let boards = enumerate_all(rows, cols)?;
            let limit = settings.enumerate_limit.unwrap_or(boards.len());
            for board in boards.iter().take(limit) {
                println!("{}", board.to_json_string());
            }
            println!("{} distinct boards", boards.len());
        }
        Command::Solve { board, parallel } => {
            let board: PipBoard = board.parse()?;
            let max_pips = board.max_pips();
            let dominoes = domino::generate(max_pips);

            println!("Domino Board:");
            print!("{}", render_board(&board, &Placement::for_board(&board), false));
            println!("\nDominos:");
            print!("{}", render_dominoes(&dominoes, max_pips));

            let solution = if parallel {
                solve_parallel(&board, &dominoes, settings.workers)?
            } else {
                solve_board(&board)?
            };
            match solution {
                Some(placement) => {
                    info!("Solution found for the domino puzzle.");
                    println!("\nSolution:");
                    print!("{}", render_board(&board, &placement, true));
                }
                None => {
                    info!("No solution exists for the domino puzzle.");
                    println!("\nNo solution exists.");
                }
            }
        }
    }
    Ok(())
}
