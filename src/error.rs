//! Error types for deck and card operations.

use thiserror::Error;

/// Errors that can occur when resolving a raw suit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitError {
    /// The value does not name one of the four suits.
    #[error("invalid suit value {0}")]
    InvalidSuit(u8),
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left to draw")]
    EmptyDeck,
}
