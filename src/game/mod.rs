//! Game engine and state management.

use alloc::vec::Vec;

use rand::RngCore;
use rand_chacha::ChaCha8Rng;

use crate::action::Action;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::options::GameOptions;
use crate::result::{RoundOutcome, Tally};

mod actions;
mod dealer;
mod round;
pub mod state;

pub use round::Round;
pub use state::RoundState;

/// A blackjack session against the dealer.
///
/// The game owns the deck and the win tally for as long as the session runs.
/// Each round is a separate [`Round`] value dealt from that deck; hand it back
/// to [`Game::finish`] once it is resolved to have it counted.
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    /// Cards left to draw.
    deck: Deck<R>,
    /// Game options.
    options: GameOptions,
    /// Rounds won so far.
    tally: Tally,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let round = game.deal();
    /// assert_eq!(round.player().len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::seeded(options.decks, seed))
    }
}

impl<R: RngCore> Game<R> {
    /// Creates a game that draws from `deck`.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck<R>) -> Self {
        Self {
            deck,
            options,
            tally: Tally::new(),
        }
    }

    /// Deals a fresh round.
    #[must_use]
    pub fn deal(&mut self) -> Round {
        Round::deal(&mut self.deck, &self.options)
    }

    /// Applies a player decision to `round`, drawing from this game's deck.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn act(&mut self, round: &mut Round, action: Action) -> Result<Option<Card>, ActionError> {
        round.act(action, &mut self.deck)
    }

    /// Plays one dealer step of `round`. See [`Round::dealer_draw`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn dealer_draw(&mut self, round: &mut Round) -> Result<Option<Card>, ActionError> {
        round.dealer_draw(&mut self.deck)
    }

    /// Plays the dealer's whole turn of `round`.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn dealer_play(&mut self, round: &mut Round) -> Result<Vec<Card>, ActionError> {
        round.dealer_play(&mut self.deck)
    }

    /// Records a resolved round in the tally and discards its hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is still in play.
    pub fn finish(&mut self, round: Round) -> Result<RoundOutcome, ActionError> {
        let outcome = round.outcome().ok_or(ActionError::RoundNotOver)?;
        self.tally.record(outcome);
        log::info!("{outcome}; {}", self.tally);
        Ok(outcome)
    }

    /// Returns the wins recorded so far.
    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck<R> {
        &self.deck
    }
}
