//! Player and dealer hand representations.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;
use crate::options::BUST_LIMIT;

/// Returns the best score for `cards` and whether an ace still counts 11.
///
/// Every ace starts at 11; while the total is over 21, aces are downgraded to
/// 1 one at a time. Scores above `u8::MAX` saturate, which is still bust.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let limit = usize::from(BUST_LIMIT);
    let total: usize = cards.iter().map(|card| usize::from(card.value())).sum();
    let aces = cards.iter().filter(|card| card.is_ace()).count();

    let needed = total.saturating_sub(limit).div_ceil(10);
    let downgraded = aces.min(needed);
    let value = total - 10 * downgraded;

    let is_soft = downgraded < aces && value <= limit;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// The party a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player.
    Player,
    /// The automated dealer.
    Dealer,
}

impl Role {
    /// Returns the label printed in front of this party's cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Player => "Player Hand",
            Self::Dealer => "Dealer Hand",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        })
    }
}

/// Cards held by one party during a round.
///
/// A hand is dealt two cards and only grows afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in draw order.
    cards: Vec<Card>,
    /// Who holds the hand.
    role: Role,
}

impl Hand {
    /// Creates a hand from its two initial cards.
    #[must_use]
    pub fn new(role: Role, first: Card, second: Card) -> Self {
        Self {
            cards: alloc::vec![first, second],
            role,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns who holds the hand.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Calculates the score of the hand.
    ///
    /// Aces are counted as 11 where possible without busting, otherwise as 1.
    /// The result may exceed 21.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BUST_LIMIT
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty (never, since a hand is dealt two
    /// cards).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a listing of every card, face up.
    #[must_use]
    pub const fn view(&self) -> HandView<'_> {
        HandView {
            hand: self,
            label: self.role.label(),
            masked: false,
        }
    }

    /// Returns a listing for use while the round is in play.
    ///
    /// A dealer hand shows its second card face down; a player hand is
    /// shown in full.
    #[must_use]
    pub const fn concealed(&self) -> HandView<'_> {
        HandView {
            hand: self,
            label: self.role.label(),
            masked: matches!(self.role, Role::Dealer),
        }
    }
}

/// Printable listing of a [`Hand`].
///
/// Renders as `"<label>: <card>  <card>"`.
#[derive(Debug, Clone, Copy)]
pub struct HandView<'a> {
    hand: &'a Hand,
    label: &'a str,
    masked: bool,
}

impl<'a> HandView<'a> {
    /// Replaces the role label printed before the cards.
    #[must_use]
    pub const fn labeled(self, label: &'a str) -> Self {
        Self { label, ..self }
    }
}

/// Placeholder printed for a face-down card.
const HIDDEN: &str = "XX";

impl fmt::Display for HandView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.label)?;
        for (index, card) in self.hand.cards.iter().enumerate() {
            let separator = if index == 0 { " " } else { "  " };
            if self.masked && index == 1 {
                write!(f, "{separator}{HIDDEN}")?;
            } else {
                write!(f, "{separator}{card}")?;
            }
        }
        Ok(())
    }
}
