//! Game state types.

use core::fmt;

/// Round state.
///
/// [`GameState::Waiting`] is the only state in which the player may act; every
/// other state ends the round until the next start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Waiting for the player's decision.
    #[default]
    Waiting,
    /// Player wins with 21.
    PlayerBlackjack,
    /// Player wins.
    PlayerWin,
    /// Player and dealer tie.
    Draw,
    /// Dealer wins with 21.
    DealerBlackjack,
    /// Dealer wins.
    DealerWin,
}

impl GameState {
    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Waiting)
    }

    /// Returns the snake-case name of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::PlayerBlackjack => "player_blackjack",
            Self::PlayerWin => "player_win",
            Self::Draw => "draw",
            Self::DealerBlackjack => "dealer_blackjack",
            Self::DealerWin => "dealer_win",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
