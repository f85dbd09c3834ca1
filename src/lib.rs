//! Deck, draw and hand primitives for a Go Fish card game, with optional
//! `no_std` support.
//!
//! A [`Deck`] holds the undealt cards and hands out uniformly random draws
//! from a caller-supplied random number generator. A [`Player`] is dealt a
//! hand from a deck at construction. A [`Table`] wraps a deck, a seeded
//! generator and the seated players behind locks so it can be shared.
//!
//! # Example
//!
//! ```
//! use gofish::{Table, TableOptions};
//!
//! let table = Table::new(TableOptions::default().with_hand_size(5), 42);
//! let seat = table.seat("Ada").unwrap();
//! assert_eq!(table.player(seat).unwrap().hand().len(), 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod player;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANK_COUNT, SUIT_COUNT, Suit};
pub use deck::Deck;
pub use error::{DrawError, SuitError};
pub use options::TableOptions;
pub use player::Player;
pub use table::Table;
