//! Card types and suit names.

use core::fmt;

use crate::error::SuitError;

/// Card suit.
///
/// The discriminants match the raw values accepted by
/// [`Suit::try_from`]: Spades is 0, Hearts 1, Clubs 2 and Diamonds 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spades = 0,
    /// Hearts.
    Hearts = 1,
    /// Clubs.
    Clubs = 2,
    /// Diamonds.
    Diamonds = 3,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Self; SUIT_COUNT] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
        }
    }

    /// Resolves the display name of a raw suit value.
    ///
    /// # Errors
    ///
    /// Returns [`SuitError::InvalidSuit`] if `raw` is not one of the four suits.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{Suit, SuitError};
    ///
    /// assert_eq!(Suit::name_of(1), Ok("Hearts"));
    /// assert_eq!(Suit::name_of(99), Err(SuitError::InvalidSuit(99)));
    /// ```
    pub fn name_of(raw: u8) -> Result<&'static str, SuitError> {
        Self::try_from(raw).map(Self::name)
    }
}

impl TryFrom<u8> for Suit {
    type Error = SuitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Spades),
            1 => Ok(Self::Hearts),
            2 => Ok(Self::Clubs),
            3 => Ok(Self::Diamonds),
            other => Err(SuitError::InvalidSuit(other)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card, `0..RANK_COUNT`.
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from a raw suit value.
    ///
    /// # Errors
    ///
    /// Returns [`SuitError::InvalidSuit`] if `suit` is not one of the four suits.
    pub fn from_raw(rank: u8, suit: u8) -> Result<Self, SuitError> {
        Ok(Self::new(rank, Suit::try_from(suit)?))
    }
}

/// Formats as `"{rank} of {suit}"`, e.g. `"3 of Hearts"`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of ranks per suit.
pub const RANK_COUNT: u8 = 13;

/// Number of suits.
pub const SUIT_COUNT: usize = 4;

/// Number of cards per deck.
pub const DECK_SIZE: usize = RANK_COUNT as usize * SUIT_COUNT;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn raw_suits_round_trip_through_discriminant() {
        for suit in Suit::ALL {
            assert_eq!(Suit::try_from(suit as u8), Ok(suit));
        }
        assert_eq!(Suit::try_from(4), Err(SuitError::InvalidSuit(4)));
    }

    #[test]
    fn card_display() {
        assert_eq!(Card::new(3, Suit::Hearts).to_string(), "3 of Hearts");
        assert_eq!(Card::new(0, Suit::Spades).to_string(), "0 of Spades");
    }

    #[test]
    fn from_raw_rejects_unknown_suit() {
        assert_eq!(Card::from_raw(12, 3), Ok(Card::new(12, Suit::Diamonds)));
        assert_eq!(Card::from_raw(1, 255), Err(SuitError::InvalidSuit(255)));
    }
}
