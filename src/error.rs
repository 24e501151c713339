//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Input that names neither `hit` nor `stay`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized action `{0}`")]
pub struct ParseActionError(pub String);

/// Errors that can occur when driving a round out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The player tried to act outside their turn.
    #[error("it is not the player's turn")]
    NotPlayerTurn,
    /// The dealer was asked to play outside its turn.
    #[error("it is not the dealer's turn")]
    NotDealerTurn,
    /// The round has not been resolved yet.
    #[error("the round is not over")]
    RoundNotOver,
}
