//! Game configuration options.

/// How the game sources its shoe between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShoeMode {
    /// A new shoe is built and shuffled at every round start.
    #[default]
    Fresh,
    /// One shoe is kept across rounds and can be recycled or cleared by hand.
    Recycled,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjshoe::{GameOptions, ShoeMode};
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_shoe_mode(ShoeMode::Recycled)
///     .with_shuffle_passes(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of decks (1 to 8).
    pub decks: u8,
    /// Whether bets and payouts are tracked.
    pub wagering: bool,
    /// Shoe lifecycle.
    pub shoe_mode: ShoeMode,
    /// Shuffle passes applied to each newly built shoe.
    pub shuffle_passes: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 2,
            wagering: true,
            shoe_mode: ShoeMode::Fresh,
            shuffle_passes: 2,
        }
    }
}

impl GameOptions {
    /// Options for a table without bets that keeps and recycles one shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::{GameOptions, ShoeMode};
    ///
    /// let options = GameOptions::recycling();
    /// assert!(!options.wagering);
    /// assert_eq!(options.shoe_mode, ShoeMode::Recycled);
    /// ```
    #[must_use]
    pub fn recycling() -> Self {
        Self {
            wagering: false,
            shoe_mode: ShoeMode::Recycled,
            ..Self::default()
        }
    }

    /// Sets the number of decks.
    ///
    /// The count is validated when the game is created.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether bets and payouts are tracked.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::GameOptions;
    ///
    /// let options = GameOptions::default().with_wagering(false);
    /// assert_eq!(options.wagering, false);
    /// ```
    #[must_use]
    pub const fn with_wagering(mut self, wagering: bool) -> Self {
        self.wagering = wagering;
        self
    }

    /// Sets the shoe lifecycle.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::{GameOptions, ShoeMode};
    ///
    /// let options = GameOptions::default().with_shoe_mode(ShoeMode::Recycled);
    /// assert_eq!(options.shoe_mode, ShoeMode::Recycled);
    /// ```
    #[must_use]
    pub const fn with_shoe_mode(mut self, mode: ShoeMode) -> Self {
        self.shoe_mode = mode;
        self
    }

    /// Sets the number of shuffle passes for a newly built shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_passes(1);
    /// assert_eq!(options.shuffle_passes, 1);
    /// ```
    #[must_use]
    pub const fn with_shuffle_passes(mut self, passes: u8) -> Self {
        self.shuffle_passes = passes;
        self
    }
}
