//! The card shoe: live cards waiting to be dealt and the pile already dealt.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, RANK_ORDER, Suit};
use crate::error::ConfigError;

/// Largest number of decks a shoe may hold.
pub const MAX_DECKS: u8 = 8;

/// Checks that a deck count lies within `1..=MAX_DECKS`.
///
/// # Errors
///
/// Returns [`ConfigError::NoDecks`] for zero and [`ConfigError::TooManyDecks`]
/// above [`MAX_DECKS`].
pub const fn validate_decks(decks: u8) -> Result<u8, ConfigError> {
    if decks == 0 {
        return Err(ConfigError::NoDecks);
    }
    if decks > MAX_DECKS {
        return Err(ConfigError::TooManyDecks {
            decks,
            max: MAX_DECKS,
        });
    }
    Ok(decks)
}

/// A multi-deck shoe.
///
/// Cards are dealt from the front of the live sequence and appended to the
/// back of the dealt pile, so `remaining() + dealt_count()` stays constant
/// until [`Shoe::clear`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shoe {
    /// Cards not yet dealt, front first.
    live: VecDeque<Card>,
    /// Cards already dealt, oldest first.
    dealt: VecDeque<Card>,
}

impl Shoe {
    /// Creates an unshuffled shoe holding `decks` full 52-card decks.
    ///
    /// # Errors
    ///
    /// Returns an error if `decks` is zero or greater than [`MAX_DECKS`].
    pub fn new(decks: u8) -> Result<Self, ConfigError> {
        validate_decks(decks).map(Self::build)
    }

    /// Builds a shoe from an already validated deck count.
    pub(crate) fn build(decks: u8) -> Self {
        let mut live = VecDeque::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in RANK_ORDER {
                    live.push_back(Card::new(suit, rank));
                }
            }
        }

        Self {
            live,
            dealt: VecDeque::new(),
        }
    }

    /// Creates a stacked shoe that deals `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            live: cards.into(),
            dealt: VecDeque::new(),
        }
    }

    /// Shuffles the live cards `times` times.
    ///
    /// Each pass walks every position from the back to the front and swaps
    /// it with a randomly chosen *different* position, re-drawing whenever
    /// the draw lands on the position itself. Fewer than two live cards are
    /// left as they are. The dealt pile is not touched.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R, times: u8) {
        let cards = self.live.make_contiguous();
        let len = cards.len();
        if len < 2 {
            return;
        }

        for _ in 0..times {
            for position in (0..len).rev() {
                let mut other = rng.random_range(0..len);
                while other == position {
                    other = rng.random_range(0..len);
                }
                cards.swap(position, other);
            }
        }

        tracing::trace!(cards = len, passes = times, "shuffled shoe");
    }

    /// Deals up to `count` cards from the front of the shoe.
    ///
    /// Dealt cards are also appended to the dealt pile in order. When the
    /// shoe runs out the returned vector is simply shorter than `count`.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count.min(self.live.len()));

        for _ in 0..count {
            let Some(card) = self.live.pop_front() else {
                tracing::debug!(requested = count, dealt = cards.len(), "shoe exhausted");
                break;
            };
            self.dealt.push_back(card);
            cards.push(card);
        }

        cards
    }

    /// Deals a single card, if any remain.
    pub fn deal_one(&mut self) -> Option<Card> {
        self.deal(1).pop()
    }

    /// Moves the oldest dealt card back to the front of the live cards.
    ///
    /// Returns the recycled card, or `None` if nothing has been dealt.
    pub fn recycle_one(&mut self) -> Option<Card> {
        let card = self.dealt.pop_front()?;
        self.live.push_front(card);
        Some(card)
    }

    /// Empties both the live cards and the dealt pile.
    pub fn clear(&mut self) {
        self.live.clear();
        self.dealt.clear();
    }

    /// Returns the cards not yet dealt, next card first.
    #[must_use]
    pub const fn live(&self) -> &VecDeque<Card> {
        &self.live
    }

    /// Returns the dealt pile, oldest card first.
    #[must_use]
    pub const fn dealt(&self) -> &VecDeque<Card> {
        &self.dealt
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.live.len()
    }

    /// Returns the number of cards in the dealt pile.
    #[must_use]
    pub fn dealt_count(&self) -> usize {
        self.dealt.len()
    }

    /// Returns the total number of cards, live and dealt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len() + self.dealt.len()
    }

    /// Returns whether the shoe holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty() && self.dealt.is_empty()
    }
}
