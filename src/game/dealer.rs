use alloc::vec::Vec;

use rand::RngCore;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::result::RoundOutcome;

use super::{Round, RoundState};

impl Round {
    /// Plays one step of the dealer's turn.
    ///
    /// Below the standing score the dealer draws a card and returns it,
    /// resolving [`RoundOutcome::DealerBust`] if that takes it over 21.
    /// Otherwise the dealer stands, the scores are compared, and `None` is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_draw<R: RngCore>(
        &mut self,
        deck: &mut Deck<R>,
    ) -> Result<Option<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::NotDealerTurn);
        }

        if self.dealer.score() >= self.dealer_stands_at {
            self.resolve(RoundOutcome::compare(
                self.player.score(),
                self.dealer.score(),
            ));
            return Ok(None);
        }

        let card = deck.draw();
        self.dealer.add_card(card);

        if self.dealer.is_bust() {
            self.resolve(RoundOutcome::DealerBust);
        }

        Ok(Some(card))
    }

    /// Dealer plays their whole hand.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play<R: RngCore>(&mut self, deck: &mut Deck<R>) -> Result<Vec<Card>, ActionError> {
        let mut drawn_cards = Vec::new();

        while let Some(card) = self.dealer_draw(deck)? {
            drawn_cards.push(card);
            if self.is_over() {
                break;
            }
        }

        Ok(drawn_cards)
    }
}
