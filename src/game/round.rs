use rand::RngCore;

use crate::deck::Deck;
use crate::hand::{Hand, Role};
use crate::options::GameOptions;
use crate::result::RoundOutcome;

use super::RoundState;

/// One round of play: the two hands and the turn they are on.
///
/// A round never holds the deck; every transition that needs cards borrows
/// it, so one deck can feed every round of a session.
#[derive(Debug, Clone)]
pub struct Round {
    /// The player's hand.
    pub(super) player: Hand,
    /// The dealer's hand.
    pub(super) dealer: Hand,
    /// Current turn, or the outcome once resolved.
    pub(super) state: RoundState,
    /// The dealer draws while below this score.
    pub(super) dealer_stands_at: u8,
}

impl Round {
    /// Deals a new round: two cards to the player, then two to the dealer.
    #[must_use]
    pub fn deal<R: RngCore>(deck: &mut Deck<R>, options: &GameOptions) -> Self {
        let first = deck.draw();
        let second = deck.draw();
        let player = Hand::new(Role::Player, first, second);

        let first = deck.draw();
        let second = deck.draw();
        let dealer = Hand::new(Role::Dealer, first, second);

        log::debug!(
            "dealt player {} / dealer {}",
            player.score(),
            dealer.score()
        );

        Self {
            player,
            dealer,
            state: RoundState::PlayerTurn,
            dealer_stands_at: options.dealer_stands_at,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::Resolved(outcome) => Some(outcome),
            RoundState::PlayerTurn | RoundState::DealerTurn => None,
        }
    }

    /// Returns whether the round is resolved.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, RoundState::Resolved(_))
    }

    pub(super) fn resolve(&mut self, outcome: RoundOutcome) {
        log::debug!(
            "round resolved: {outcome:?} (player {}, dealer {})",
            self.player.score(),
            self.dealer.score()
        );
        self.state = RoundState::Resolved(outcome);
    }
}
