//! Table and end-of-round snapshot types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameState;

/// A side's cards together with their total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedCards {
    /// Sum of the card values.
    pub total: u32,
    /// The cards, in the order they were dealt.
    pub cards: Vec<Card>,
}

/// Bet and payout of a wagering round.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stake {
    /// The bet for the round, including any doubling.
    pub bet: f64,
    /// The amount paid back to the player (0 while the round is live).
    pub payout: f64,
}

/// The table as seen after a deal or a hit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// The player's cards.
    pub player: FormattedCards,
    /// The dealer's cards.
    pub dealer: FormattedCards,
    /// Bet and payout; `None` when the table is not wagering.
    pub stake: Option<Stake>,
}

/// Snapshot handed to end-of-round observers.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundEnd {
    /// The terminal state the round ended in.
    pub state: GameState,
    /// The player's final cards.
    pub player: FormattedCards,
    /// The dealer's final cards.
    pub dealer: FormattedCards,
    /// Final bet and payout; `None` when the table is not wagering.
    pub stake: Option<Stake>,
}
