//! A shared deck with its own random source and seated players.

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DrawError;
use crate::options::TableOptions;
use crate::player::Player;
use crate::sync::Mutex;

/// A table that deals from one deck to any number of callers.
///
/// The deck lives behind a single mutex so that a draw and the removal it
/// implies are never interleaved with another caller's.
pub struct Table {
    /// Cards not yet dealt.
    deck: Mutex<Deck>,
    /// Table options.
    pub options: TableOptions,
    /// Seated players, indexed by seat.
    players: Mutex<Vec<Player>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a table with a standard deck and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{DECK_SIZE, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            deck: Mutex::new(Deck::standard()),
            options,
            players: Mutex::new(Vec::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Draws one card from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck is exhausted.
    pub fn draw(&self) -> Result<Card, DrawError> {
        let mut deck = self.deck.lock();
        let mut rng = self.rng.lock();
        deck.draw(&mut *rng)
    }

    /// Seats a new player and deals them a hand of `options.hand_size` cards.
    ///
    /// Returns the seat index.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck cannot fill the hand. With
    /// `restore_on_failed_deal` the deck is left untouched; otherwise the
    /// cards drawn before the failure are lost.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "deck lock is held for the whole deal"
    )]
    pub fn seat(&self, name: impl Into<String>) -> Result<usize, DrawError> {
        let name = name.into();
        let hand_size = self.options.hand_size;
        let mut deck = self.deck.lock();

        if self.options.restore_on_failed_deal && deck.len() < usize::from(hand_size) {
            log::warn!(
                "cannot seat {name}: {} cards left for a hand of {hand_size}; deck untouched",
                deck.len()
            );
            return Err(DrawError::EmptyDeck);
        }

        let player = {
            let mut rng = self.rng.lock();
            Player::deal(&mut *deck, name, hand_size, &mut *rng)?
        };

        let mut players = self.players.lock();
        players.push(player);
        Ok(players.len() - 1)
    }

    /// Returns a clone of the player in the given seat.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<Player> {
        self.players.lock().get(seat).cloned()
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns whether there are cards remaining in the deck.
    #[must_use]
    pub fn has_cards_left(&self) -> bool {
        self.deck.lock().has_cards_left()
    }

    /// Returns a clone of the current deck.
    #[must_use]
    pub fn deck(&self) -> Deck {
        self.deck.lock().clone()
    }

    /// Replaces the deck with a fresh standard deck and clears all seats.
    ///
    /// The random source carries on from its current state. Both locks are
    /// held together, in the same order as [`Table::seat`], so no seating can
    /// land between the new deck and the cleared seats.
    pub fn reset(&self) {
        {
            let mut deck = self.deck.lock();
            let mut players = self.players.lock();
            *deck = Deck::standard();
            players.clear();
        }
        log::debug!("table reset");
    }
}
