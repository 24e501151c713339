//! Game configuration options.

/// Scores above this limit are bust.
pub const BUST_LIMIT: u8 = 21;

/// Score at which the dealer stops drawing unless configured otherwise.
///
/// This table's dealer stands on 16, one below the casino convention.
pub const DEALER_STANDS_AT: u8 = 16;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_dealer_stands_at(17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of standard decks in the draw pile, and in every refill.
    pub decks: u8,
    /// The dealer keeps drawing while its score is below this value.
    pub dealer_stands_at: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            dealer_stands_at: DEALER_STANDS_AT,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the score at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(17);
    /// assert_eq!(options.dealer_stands_at, 17);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, score: u8) -> Self {
        self.dealer_stands_at = score;
        self
    }
}
