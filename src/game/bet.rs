use crate::error::BetError;
use crate::options::ShoeMode;
use crate::result::Table;

use super::{Game, GameState};

impl Game {
    /// Stages a bet for the next round.
    ///
    /// The amount is picked up by the next [`Game::start`]; a bet placed while
    /// a round is running does not change that round's bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not greater than zero or the table
    /// is not wagering.
    pub fn place_bet(&mut self, amount: f64) -> Result<(), BetError> {
        if !self.options.wagering {
            return Err(BetError::WageringDisabled);
        }

        if amount.is_nan() || amount <= 0.0 {
            return Err(BetError::NotPositive);
        }

        self.staged_bet = amount;
        Ok(())
    }

    /// Starts a round: prepares the shoe and deals two cards each.
    ///
    /// The player is dealt two cards first, then the dealer. With
    /// [`ShoeMode::Fresh`] a new shuffled shoe is built for the round; with
    /// [`ShoeMode::Recycled`] the existing shoe is kept and only rebuilt after
    /// it has been cleared. A short shoe deals short hands.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NoBet`] if the table is wagering and no positive
    /// bet has been placed.
    pub fn start(&mut self) -> Result<Table, BetError> {
        if self.options.wagering && self.staged_bet <= 0.0 {
            return Err(BetError::NoBet);
        }

        let rebuild = match self.options.shoe_mode {
            ShoeMode::Fresh => true,
            ShoeMode::Recycled => self.shoe.is_empty(),
        };
        if rebuild {
            self.shoe = self.fresh_shoe();
        }

        self.player.clear();
        self.dealer.clear();
        self.player.extend(self.shoe.deal(2));
        self.dealer.extend(self.shoe.deal(2));

        self.state = GameState::Waiting;
        self.in_round = true;
        self.bet = if self.options.wagering {
            self.staged_bet
        } else {
            0.0
        };
        self.payout = 0.0;

        tracing::debug!(
            bet = self.bet,
            player = self.player.total(),
            dealer = self.dealer.total(),
            remaining = self.shoe.remaining(),
            "round started"
        );

        Ok(self.table())
    }
}
