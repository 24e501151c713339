//! Round state types.

use crate::result::RoundOutcome;

/// Where a round stands.
///
/// Rounds move `PlayerTurn → DealerTurn → Resolved`, or straight from
/// `PlayerTurn` to `Resolved` when the player busts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended with the given outcome.
    Resolved(RoundOutcome),
}
