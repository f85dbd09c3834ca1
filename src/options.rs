//! Table configuration options.

/// Default number of cards dealt to each seated player.
pub const DEFAULT_HAND_SIZE: u8 = 7;

/// Configuration options for a [`Table`](crate::Table).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gofish::TableOptions;
///
/// let options = TableOptions::default()
///     .with_hand_size(5)
///     .with_restore_on_failed_deal(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Number of cards dealt to each seated player.
    pub hand_size: u8,
    /// Whether a seating that runs out of cards returns the partial hand
    /// to the deck. When `false`, those cards are lost.
    pub restore_on_failed_deal: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            restore_on_failed_deal: false,
        }
    }
}

impl TableOptions {
    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::TableOptions;
    ///
    /// let options = TableOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether a failed seating restores its partial hand to the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::TableOptions;
    ///
    /// let options = TableOptions::default().with_restore_on_failed_deal(true);
    /// assert!(options.restore_on_failed_deal);
    /// ```
    #[must_use]
    pub const fn with_restore_on_failed_deal(mut self, restore: bool) -> Self {
        self.restore_on_failed_deal = restore;
        self
    }
}
