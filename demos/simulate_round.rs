//! Deals a round, plays it out, and prints the table as JSON.
//!
//! Usage: `cargo run --example simulate_round --features serde -- [seed]`
//! Set `RUST_LOG=trace` to watch every turn.

use std::time::{SystemTime, UNIX_EPOCH};

use big2::{GameOptions, Table};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    println!("seed: {seed}");

    let roster = ["Adam", "Ben", "Charlie", "Derek"];
    let table = match Table::seated(roster, GameOptions::default(), seed) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("setup error: {err}");
            return;
        }
    };

    print_state(&table.state());

    match table.start_game() {
        Ok(state) => print_state(&state),
        Err(err) => eprintln!("play error: {err}"),
    }

    table.with_game(|game| {
        for turn in game.history() {
            println!("{turn}");
        }
    });
}

fn print_state(state: &big2::TableState) {
    match serde_json::to_string_pretty(state) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("serialize error: {err}"),
    }
}
