//! A named player holding a hand dealt from a deck.

use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DrawError;

/// A player with a hand of cards and a count of completed books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    name: String,
    /// Cards in the hand, in draw order.
    hand: Vec<Card>,
    /// Completed four-of-a-kind sets.
    books: u8,
}

impl Player {
    /// Deals a new player `hand_size` cards from `deck`.
    ///
    /// Cards are drawn one at a time and kept in draw order.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck runs out before the hand
    /// is full. Cards drawn before the failure are not returned to the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{Deck, Player};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(3);
    /// let mut deck = Deck::standard();
    /// let player = Player::deal(&mut deck, "Ada", 7, &mut rng).unwrap();
    /// assert_eq!(player.hand().len(), 7);
    /// assert_eq!(deck.len(), 45);
    /// ```
    pub fn deal<R: Rng>(
        deck: &mut Deck,
        name: impl Into<String>,
        hand_size: u8,
        rng: &mut R,
    ) -> Result<Self, DrawError> {
        let name = name.into();
        let mut hand = Vec::with_capacity(usize::from(hand_size));

        for _ in 0..hand_size {
            match deck.draw(rng) {
                Ok(card) => hand.push(card),
                Err(err) => {
                    log::warn!(
                        "dealing {name} failed after {} of {hand_size} cards; drawn cards are lost",
                        hand.len()
                    );
                    return Err(err);
                }
            }
        }

        log::debug!("dealt {hand_size} cards to {name}");
        Ok(Self {
            name,
            hand,
            books: 0,
        })
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Returns the number of completed books.
    #[must_use]
    pub const fn books(&self) -> u8 {
        self.books
    }
}
