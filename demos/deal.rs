//! Prints a fresh deck, then draws and prints every card until it is empty.
//!
//! Usage: `cargo run --example deal [seed]`

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use gofish::{Deck, DrawError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    if let Err(err) = run(seed) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(seed: u64) -> Result<(), DrawError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = Deck::standard();

    for (index, card) in deck.cards().iter().enumerate() {
        println!("{index}: {card}");
    }

    while deck.has_cards_left() {
        let card = deck.draw(&mut rng)?;
        println!("{card}");
    }

    Ok(())
}
