use std::io;

use clap::{Parser, ValueEnum};
use othello_core::Side;
use othello_engine::Difficulty;
use othello_ui::{run, TerminalConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Human {
    Black,
    White,
    None,
}

#[derive(Parser, Debug)]
#[command(name = "othello", about = "Play Othello against the computer in the terminal")]
struct Args {
    /// Computer strength: 1 random, 2 greedy, 3 minimax (anything else plays greedily)
    #[arg(long, default_value_t = 3)]
    level: u8,

    /// Side played from the keyboard; `none` lets the computer play both sides
    #[arg(long, value_enum, default_value_t = Human::Black)]
    human: Human,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = TerminalConfig {
        human: match args.human {
            Human::Black => Some(Side::Black),
            Human::White => Some(Side::White),
            Human::None => None,
        },
        difficulty: Difficulty::from_level(args.level),
        seed: args.seed,
    };
    log::info!("starting game: {:?}", config);

    run(config, io::stdin().lock(), io::stdout().lock())
}
