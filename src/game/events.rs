use alloc::boxed::Box;

use crate::result::RoundEnd;

use super::Game;

impl Game {
    /// Registers an observer called whenever a round ends.
    ///
    /// Observers run synchronously, in registration order, exactly once per
    /// round, after the payout has been settled.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// use bjshoe::{Game, GameOptions};
    ///
    /// let ended = Rc::new(RefCell::new(Vec::new()));
    /// let mut game = Game::new(GameOptions::default(), 7).unwrap();
    ///
    /// let sink = Rc::clone(&ended);
    /// game.on_end(move |end| sink.borrow_mut().push(end.state));
    ///
    /// game.place_bet(10.0).unwrap();
    /// game.start().unwrap();
    /// game.stand();
    /// assert_eq!(ended.borrow().len(), 1);
    /// ```
    pub fn on_end<F>(&mut self, handler: F)
    where
        F: FnMut(&RoundEnd) + 'static,
    {
        self.end_handlers.push(Box::new(handler));
    }

    /// Returns the number of registered end-of-round observers.
    #[must_use]
    pub fn end_handler_count(&self) -> usize {
        self.end_handlers.len()
    }

    pub(super) fn emit_end(&mut self) {
        let snapshot = self.round_end();
        for handler in &mut self.end_handlers {
            handler(&snapshot);
        }
    }
}
