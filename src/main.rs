//! Checkers-Rust: an American checkers engine with flat Monte-Carlo search.
//!
//! ## Usage
//!
//! - `checkers-rust` - Play against the engine in the terminal
//! - `checkers-rust play` - Same as above
//! - `checkers-rust demo` - Search the opening position and show the result

use anyhow::Result;
use clap::{Parser, Subcommand};

use checkers_rust::console::ConsoleGame;
use checkers_rust::mcts::{BoardNode, dump_children};
use checkers_rust::position::{Position, apply_move, legal_moves};

/// Checkers-Rust: an American checkers Monte-Carlo engine
#[derive(Parser)]
#[command(name = "checkers-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play White against the engine in the terminal
    Play,
    /// Search the opening position and print the chosen move
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo) => run_demo(),
        Some(Commands::Play) | None => ConsoleGame::new().run(),
    }
}

fn run_demo() -> Result<()> {
    let pos = Position::initial();
    println!("{pos}\n");
    println!(
        "{} to move, {} legal moves",
        pos.turn(),
        legal_moves(&pos).len()
    );

    // Run the playouts by hand so the searched tree is still around to dump
    let mut root = BoardNode::new(pos.clone(), None);
    while root.simulations() < checkers_rust::constants::N_SIMS {
        root.simulate();
    }
    dump_children(&root);

    if let Some(mv) = root.best_move() {
        println!("engine opens with {mv}");
        let next = apply_move(&pos, mv)?;
        println!("\n{next}");
    }
    Ok(())
}
