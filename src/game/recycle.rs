use crate::card::Card;
use crate::error::ShoeError;
use crate::options::ShoeMode;

use super::Game;

impl Game {
    /// Returns whether the shoe can be recycled and cleared by hand.
    #[must_use]
    pub fn is_recycling(&self) -> bool {
        self.options.shoe_mode == ShoeMode::Recycled
    }

    fn ensure_recycling(&self) -> Result<(), ShoeError> {
        if self.is_recycling() {
            Ok(())
        } else {
            Err(ShoeError::RecyclingDisabled)
        }
    }

    /// Puts the oldest dealt card back on top of the shoe.
    ///
    /// Returns the recycled card, or `None` if no card has been dealt yet.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game uses [`ShoeMode::Recycled`].
    pub fn replace_deck(&mut self) -> Result<Option<Card>, ShoeError> {
        self.ensure_recycling()?;

        let card = self.shoe.recycle_one();
        if let Some(card) = card {
            tracing::trace!(%card, remaining = self.shoe.remaining(), "recycled card");
        }
        Ok(card)
    }

    /// Empties the shoe, live cards and dealt pile alike.
    ///
    /// The next [`Game::start`] builds and shuffles a new shoe.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game uses [`ShoeMode::Recycled`].
    pub fn clear_deck(&mut self) -> Result<(), ShoeError> {
        self.ensure_recycling()?;

        self.shoe.clear();
        tracing::debug!("cleared shoe");
        Ok(())
    }
}
