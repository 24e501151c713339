//! The draw pile.

use alloc::collections::VecDeque;

use rand::RngCore;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered pile of cards that refills itself when exhausted.
///
/// The random source is injected so callers (and tests) decide how the deck
/// is shuffled. Drawing never fails: an empty deck is repopulated with the
/// deck count it was created with and reshuffled before the draw.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    /// Cards left to draw, front first.
    cards: VecDeque<Card>,
    /// Number of standard decks per population.
    decks: u8,
    /// Shuffle source.
    rng: R,
}

impl<R: RngCore> Deck<R> {
    /// Creates a shuffled deck made of `decks` standard 52-card decks.
    ///
    /// A deck count of zero is treated as one.
    #[must_use]
    pub fn new(decks: u8, rng: R) -> Self {
        let mut deck = Self {
            cards: VecDeque::with_capacity(usize::from(decks.max(1)) * DECK_SIZE),
            decks: decks.max(1),
            rng,
        };
        deck.populate();
        deck
    }

    /// Creates a deck whose next draws are exactly `draws`, in order.
    ///
    /// Once those cards are gone the deck refills and reshuffles like any
    /// other deck of `decks` standard decks.
    #[must_use]
    pub fn stacked(decks: u8, draws: impl IntoIterator<Item = Card>, rng: R) -> Self {
        Self {
            cards: draws.into_iter().collect(),
            decks: decks.max(1),
            rng,
        }
    }

    /// Removes and returns the front card, refilling the deck first if it is
    /// empty.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop_front() {
                log::trace!("drew {card}, {} left", self.cards.len());
                return card;
            }
            log::debug!("deck exhausted, repopulating {} deck(s)", self.decks);
            self.populate();
        }
    }

    /// Returns the number of cards left before the next refill.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the next draw will refill the deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of standard decks used per population.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Refills with every (rank, suit) pair once per deck, then shuffles the
    /// whole pile.
    fn populate(&mut self) {
        self.cards.clear();
        for _ in 0..self.decks {
            for rank in Rank::ALL {
                for suit in Suit::ALL {
                    self.cards.push_back(Card::new(rank, suit));
                }
            }
        }
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }
}

impl Deck<ChaCha8Rng> {
    /// Creates a shuffled deck driven by a `ChaCha8Rng` seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::seeded(2, 7);
    /// assert_eq!(deck.len(), 2 * DECK_SIZE);
    /// ```
    #[must_use]
    pub fn seeded(decks: u8, seed: u64) -> Self {
        Self::new(decks, ChaCha8Rng::seed_from_u64(seed))
    }
}
