use crate::error::ActionError;
use crate::result::Table;

use super::{Game, GameState};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// Returns `None` without touching the game unless a round is in
    /// progress. After the card is added the round ends with
    /// [`GameState::PlayerBlackjack`] if the player holds exactly two cards
    /// totalling 21, or with [`GameState::DealerWin`] if the player is over 21.
    /// An empty shoe adds no card but the checks still run.
    pub fn hit(&mut self) -> Option<Table> {
        if !self.is_round_in_progress() {
            return None;
        }

        if let Some(card) = self.shoe.deal_one() {
            tracing::trace!(%card, "player hits");
            self.player.add_card(card);
        }

        let total = self.player.total();
        if self.player.len() == 2 && total == 21 {
            self.end_round(GameState::PlayerBlackjack);
        } else if total > 21 {
            self.end_round(GameState::DealerWin);
        }

        Some(self.table())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer plays out their hand and the round is resolved. Does
    /// nothing unless a round is in progress.
    pub fn stand(&mut self) {
        if !self.is_round_in_progress() {
            return;
        }

        self.settle();
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotDouble`] unless
    /// [`Game::can_double_down`] holds.
    pub fn double_down(&mut self) -> Result<(), ActionError> {
        if !self.can_double_down() {
            return Err(ActionError::CannotDouble);
        }

        self.bet *= 2.0;
        if let Some(card) = self.shoe.deal_one() {
            tracing::trace!(%card, bet = self.bet, "player doubles down");
            self.player.add_card(card);
        }

        self.settle();
        Ok(())
    }

    /// Returns whether the player may double down right now.
    ///
    /// True only while waiting on the player with exactly two cards in hand.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        self.state == GameState::Waiting && self.player.len() == 2
    }
}
