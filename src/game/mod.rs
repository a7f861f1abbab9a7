//! Game engine and state management.

use alloc::boxed::Box;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::ConfigError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{RoundEnd, Stake, Table};
use crate::shoe::{Shoe, validate_decks};

mod actions;
mod bet;
mod dealer;
mod events;
mod recycle;
pub mod state;

pub use dealer::{BLACKJACK_PAYS, DEALER_STANDS_ON, payout_for};
pub use state::GameState;

type EndHandler = Box<dyn FnMut(&RoundEnd)>;

/// A single-player blackjack game against the dealer.
///
/// The game owns the shoe, both hands and the round state. Use
/// [`GameOptions`] to choose the deck count, whether bets are tracked and
/// whether the shoe is rebuilt every round or recycled by hand.
pub struct Game {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Game options.
    options: GameOptions,
    /// Current round state.
    state: GameState,
    /// Whether cards have been dealt and the round has not ended yet.
    in_round: bool,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Bet staged for the next round.
    staged_bet: f64,
    /// Bet of the current round, including any doubling.
    bet: f64,
    /// Payout of the current round.
    payout: f64,
    /// End-of-round observers, in registration order.
    end_handlers: Vec<EndHandler>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The shoe is built and shuffled immediately, so [`Game::cards_remaining`]
    /// reports a full shoe before the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck count is zero or above
    /// [`MAX_DECKS`](crate::shoe::MAX_DECKS).
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_decks(3), 42).unwrap();
    /// assert_eq!(game.cards_remaining(), 3 * 52);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        validate_decks(options.decks)?;

        let mut game = Self {
            shoe: Shoe::default(),
            options,
            state: GameState::Waiting,
            in_round: false,
            player: Hand::new(),
            dealer: Hand::new(),
            staged_bet: 0.0,
            bet: 0.0,
            payout: 0.0,
            end_handlers: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.shoe = game.fresh_shoe();

        Ok(game)
    }

    /// Builds a full shoe and shuffles it with the configured pass count.
    fn fresh_shoe(&mut self) -> Shoe {
        let mut shoe = Shoe::build(self.options.decks);
        shoe.shuffle(&mut self.rng, self.options.shuffle_passes);
        tracing::debug!(
            decks = self.options.decks,
            passes = self.options.shuffle_passes,
            "built new shoe"
        );
        shoe
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether cards are dealt and the player may still act.
    #[must_use]
    pub fn is_round_in_progress(&self) -> bool {
        self.in_round && self.state == GameState::Waiting
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the bet of the current round.
    #[must_use]
    pub const fn bet(&self) -> f64 {
        self.bet
    }

    /// Returns the bet staged for the next round.
    #[must_use]
    pub const fn staged_bet(&self) -> f64 {
        self.staged_bet
    }

    /// Returns the payout of the current round.
    #[must_use]
    pub const fn payout(&self) -> f64 {
        self.payout
    }

    /// Returns the bet and payout, or `None` when the table is not wagering.
    #[must_use]
    pub const fn stake(&self) -> Option<Stake> {
        if self.options.wagering {
            Some(Stake {
                bet: self.bet,
                payout: self.payout,
            })
        } else {
            None
        }
    }

    /// Returns a snapshot of both hands and the stake.
    #[must_use]
    pub fn table(&self) -> Table {
        Table {
            player: self.player.formatted(),
            dealer: self.dealer.formatted(),
            stake: self.stake(),
        }
    }

    /// Returns the end-of-round snapshot once the round is over.
    ///
    /// Returns `None` while the state is [`GameState::Waiting`].
    #[must_use]
    pub fn outcome(&self) -> Option<RoundEnd> {
        self.state.is_terminal().then(|| self.round_end())
    }

    fn round_end(&self) -> RoundEnd {
        RoundEnd {
            state: self.state,
            player: self.player.formatted(),
            dealer: self.dealer.formatted(),
            stake: self.stake(),
        }
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Replaces the shoe, e.g. with a stacked one from [`Shoe::from_cards`].
    ///
    /// In [`ShoeMode::Fresh`](crate::ShoeMode::Fresh) the next start builds a
    /// new shoe anyway, so this only affects the round in progress.
    pub fn set_shoe(&mut self, shoe: Shoe) {
        self.shoe = shoe;
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }
}
