use super::{Game, GameState};

/// Blackjack payout ratio.
pub const BLACKJACK_PAYS: f64 = 1.5;

/// Total at which the dealer stops drawing.
pub const DEALER_STANDS_ON: u32 = 17;

/// Returns the payout for a round that ended in `state` with `bet` at stake.
///
/// A blackjack pays the bet times [`BLACKJACK_PAYS`], a win pays the bet, a
/// draw returns the bet and a loss pays nothing. Returns `None` for
/// [`GameState::Waiting`].
///
/// # Example
///
/// ```
/// use bjshoe::{GameState, payout_for};
///
/// assert_eq!(payout_for(GameState::PlayerBlackjack, 100.0), Some(150.0));
/// assert_eq!(payout_for(GameState::DealerWin, 100.0), Some(0.0));
/// assert_eq!(payout_for(GameState::Waiting, 100.0), None);
/// ```
#[must_use]
pub fn payout_for(state: GameState, bet: f64) -> Option<f64> {
    match state {
        GameState::Waiting => None,
        GameState::PlayerBlackjack => Some(bet * BLACKJACK_PAYS),
        GameState::PlayerWin | GameState::Draw => Some(bet),
        GameState::DealerWin | GameState::DealerBlackjack => Some(0.0),
    }
}

/// Compares final totals once the dealer has played.
///
/// A busted player never reaches the winning branch; their result falls
/// through to the draw and dealer branches.
const fn resolve(player: u32, dealer: u32) -> GameState {
    if player <= 21 && (dealer > 21 || dealer < player) {
        if player == 21 {
            GameState::PlayerBlackjack
        } else {
            GameState::PlayerWin
        }
    } else if dealer == player {
        GameState::Draw
    } else if dealer == 21 {
        GameState::DealerBlackjack
    } else {
        GameState::DealerWin
    }
}

impl Game {
    /// Dealer draws until reaching [`DEALER_STANDS_ON`] or running out of cards.
    fn dealer_play(&mut self) {
        while self.dealer.total() < DEALER_STANDS_ON {
            let Some(card) = self.shoe.deal_one() else {
                tracing::debug!(dealer = self.dealer.total(), "shoe empty during dealer play");
                break;
            };
            tracing::trace!(%card, "dealer draws");
            self.dealer.add_card(card);
        }
    }

    /// Plays out the dealer (unless the player busted) and ends the round.
    pub(super) fn settle(&mut self) {
        let player = self.player.total();
        if player <= 21 {
            self.dealer_play();
        }

        let state = resolve(player, self.dealer.total());
        self.end_round(state);
    }

    /// Recomputes the payout from the current state and bet.
    ///
    /// Runs automatically whenever a round ends. While the round is still
    /// waiting the stored payout is left as it is. Returns `None` when the
    /// table is not wagering.
    pub fn calculate_payout(&mut self) -> Option<f64> {
        if !self.options.wagering {
            return None;
        }

        if let Some(payout) = payout_for(self.state, self.bet) {
            self.payout = payout;
        }

        Some(self.payout)
    }

    /// Moves to a terminal state, settles the payout and notifies observers.
    pub(super) fn end_round(&mut self, state: GameState) {
        self.state = state;
        self.in_round = false;
        self.calculate_payout();

        tracing::debug!(
            state = %state,
            player = self.player.total(),
            dealer = self.dealer.total(),
            bet = self.bet,
            payout = self.payout,
            "round ended"
        );

        self.emit_end();
    }
}
