//! Round outcomes and the session tally.

use core::cmp::Ordering;
use core::fmt;

use crate::hand::Role;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The player went over 21; the dealer wins without playing.
    PlayerBust,
    /// The dealer went over 21; the player wins.
    DealerBust,
    /// Neither busted and the player scored higher.
    PlayerWin,
    /// Neither busted and the dealer scored higher.
    DealerWin,
    /// Neither busted and the scores are equal.
    Tie,
}

impl RoundOutcome {
    /// Resolves a round in which neither party busted.
    #[must_use]
    pub fn compare(player_score: u8, dealer_score: u8) -> Self {
        match player_score.cmp(&dealer_score) {
            Ordering::Greater => Self::PlayerWin,
            Ordering::Less => Self::DealerWin,
            Ordering::Equal => Self::Tie,
        }
    }

    /// Returns the party that won the round, or `None` on a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Role> {
        match self {
            Self::DealerBust | Self::PlayerWin => Some(Role::Player),
            Self::PlayerBust | Self::DealerWin => Some(Role::Dealer),
            Self::Tie => None,
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBust => "Dealer wins! (Player Busted)",
            Self::DealerBust => "Player wins! (Dealer Busted)",
            Self::PlayerWin => "Player Wins!",
            Self::DealerWin => "Dealer Wins!",
            Self::Tie => "It's a Tie!",
        })
    }
}

/// Wins accumulated over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tally {
    /// Rounds won by the player.
    pub player_wins: u32,
    /// Rounds won by the dealer.
    pub dealer_wins: u32,
}

impl Tally {
    /// Creates an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_wins: 0,
            dealer_wins: 0,
        }
    }

    /// Credits the winner of `outcome`. Ties change nothing.
    pub const fn record(&mut self, outcome: RoundOutcome) {
        match outcome.winner() {
            Some(Role::Player) => self.player_wins += 1,
            Some(Role::Dealer) => self.dealer_wins += 1,
            None => {}
        }
    }

    /// Returns the number of rounds that had a winner.
    #[must_use]
    pub const fn decisive(&self) -> u32 {
        self.player_wins + self.dealer_wins
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: Player {} - Dealer {}",
            self.player_wins, self.dealer_wins
        )
    }
}
