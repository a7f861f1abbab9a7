//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when configuring a shoe or a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Deck count is zero.
    #[error("a shoe must have a number of decks")]
    NoDecks,
    /// Deck count exceeds the maximum.
    #[error("a shoe can have at most {max} decks, got {decks}")]
    TooManyDecks {
        /// Requested deck count.
        decks: u8,
        /// Largest accepted deck count.
        max: u8,
    },
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero, negative or not a number.
    #[error("bet amount must be greater than 0")]
    NotPositive,
    /// A round was started without a bet.
    #[error("a bet must be placed before starting the round")]
    NoBet,
    /// The table was configured without wagering.
    #[error("wagering is disabled at this table")]
    WageringDisabled,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Cannot double down on this hand.
    #[error("double down is only allowed on the first two cards of a live round")]
    CannotDouble,
}

/// Errors that can occur when recycling the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The table keeps a fresh shoe per round.
    #[error("shoe recycling is disabled at this table")]
    RecyclingDisabled,
}
