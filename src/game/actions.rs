use rand::RngCore;

use crate::action::Action;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::result::RoundOutcome;

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == RoundState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::NotPlayerTurn)
        }
    }

    /// Applies a player decision.
    ///
    /// Returns the card drawn on a hit.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn act<R: RngCore>(
        &mut self,
        action: Action,
        deck: &mut Deck<R>,
    ) -> Result<Option<Card>, ActionError> {
        match action {
            Action::Hit => self.hit(deck).map(Some),
            Action::Stay => self.stay().map(|()| None),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 resolves the round as [`RoundOutcome::PlayerBust`]; the
    /// dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit<R: RngCore>(&mut self, deck: &mut Deck<R>) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = deck.draw();
        self.player.add_card(card);

        if self.player.is_bust() {
            self.resolve(RoundOutcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: Stay (keep current hand, dealer plays next).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stay(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        log::debug!("player stays on {}", self.player.score());
        self.state = RoundState::DealerTurn;

        Ok(())
    }
}
