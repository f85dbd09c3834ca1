//! The deck of undealt cards and random draws from it.

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::card::{Card, DECK_SIZE, RANK_COUNT, Suit};
use crate::error::DrawError;

/// A shrinking pool of playing cards.
///
/// Cards have no positional meaning: [`Deck::draw`] picks uniformly among the
/// remaining cards, so the order of [`Deck::cards`] changes as cards are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a standard 52-card deck, one card per rank and suit.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in 0..RANK_COUNT {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        log::debug!("created standard deck of {} cards", cards.len());
        Self { cards }
    }

    /// Creates a deck holding exactly the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns whether there are cards remaining in the deck.
    #[must_use]
    pub fn has_cards_left(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes and returns a card chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards are left. The deck is
    /// unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let mut deck = Deck::standard();
    /// let card = deck.draw(&mut rng).unwrap();
    /// assert!(!deck.cards().contains(&card));
    /// ```
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::EmptyDeck);
        }

        let index = rng.random_range(0..self.cards.len());
        let card = self.cards.swap_remove(index);
        log::trace!("drew {card} at index {index}, {} left", self.cards.len());
        Ok(card)
    }

    /// Puts previously drawn cards back into the deck.
    pub fn restore<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Renders the deck as text, one `"{rank} of {suit}"` line per card.
    #[must_use]
    pub fn render(&self) -> String {
        use alloc::string::ToString;

        self.to_string()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
