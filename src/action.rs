//! Player decisions and the tokens that name them.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::ParseActionError;

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Keep the current hand and pass the turn to the dealer.
    Stay,
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Accepts `hit`, `h`, `stay` or `s`, ignoring case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("hit") || token.eq_ignore_ascii_case("h") {
            Ok(Self::Hit)
        } else if token.eq_ignore_ascii_case("stay") || token.eq_ignore_ascii_case("s") {
            Ok(Self::Stay)
        } else {
            Err(ParseActionError(token.to_string()))
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stay => "stay",
        })
    }
}

/// Returns whether an answer to the play-again prompt asks for another round.
///
/// Only `yes` and `y` (any case) continue; every other answer ends the session.
#[must_use]
pub fn wants_another_round(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}
