//! Text console front end.
//!
//! [`Console`] reads decisions from any [`BufRead`] and writes the table to
//! any [`Write`], so a whole session can be played against in-memory buffers.
//! The engine never touches I/O; this module turns its states into prompts
//! and announcements.

use core::time::Duration;
use std::io::{self, BufRead, Write};
use std::thread;

use rand::RngCore;

use crate::action::{Action, wants_another_round};
use crate::game::{Game, Round};
use crate::hand::Hand;
use crate::result::{RoundOutcome, Tally};

/// Timing of console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after each character of a typed-out line.
    pub typing_delay: Duration,
    /// Pause after each card the dealer draws.
    pub dealer_pause: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_millis(30),
            dealer_pause: Duration::from_secs(1),
        }
    }
}

impl Pacing {
    /// No pauses at all.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            typing_delay: Duration::ZERO,
            dealer_pause: Duration::ZERO,
        }
    }
}

const PLAYER_TURN: &str = "=============== Player's Turn ===============";
const DEALER_TURN: &str = "=============== Dealer's Turn ===============";
const FINAL_RESULTS: &str = "=============== Final Results ===============";

/// Interactive blackjack over a line-oriented text stream.
#[derive(Debug)]
pub struct Console<I, O> {
    input: I,
    output: O,
    pacing: Pacing,
}

impl<I: BufRead, O: Write> Console<I, O> {
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: I, output: O, pacing: Pacing) -> Self {
        Self {
            input,
            output,
            pacing,
        }
    }

    /// Consumes the console and returns its output stream.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Writes a line immediately.
    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Writes a line one character at a time.
    fn say(&mut self, text: &str) -> io::Result<()> {
        if self.pacing.typing_delay.is_zero() {
            return self.line(text);
        }
        for ch in text.chars() {
            write!(self.output, "{ch}")?;
            self.output.flush()?;
            thread::sleep(self.pacing.typing_delay);
        }
        writeln!(self.output)
    }

    /// Prints `text` and reads one line. Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(answer))
    }

    /// Prints the welcome banner and the house rules.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn banner(&mut self, dealer_stands_at: u8) -> io::Result<()> {
        self.say("Welcome to Blackjack!")?;
        self.say("Rules:")?;
        self.say("1. The goal is to get as close to 21 as possible without exceeding it.")?;
        self.say("2. Face cards (J, Q, K) are worth 10 points; Aces are worth 11 or 1.")?;
        self.say(
            "3. On your turn, you can either 'hit' to draw another card or 'stay' to keep your current hand.",
        )?;
        self.say(&format!(
            "4. The dealer must draw until they reach at least {dealer_stands_at}."
        ))?;
        self.say("5. If you go over 21, you bust and lose the round.")?;
        self.say("6. The game will continue until you choose to stop. Enjoy!\n")
    }

    /// Asks for hit or stay until a valid answer arrives.
    ///
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn read_action(&mut self) -> io::Result<Option<Action>> {
        loop {
            let Some(answer) = self.prompt("\"hit\" or \"stay\"? ")? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(action) => return Ok(Some(action)),
                Err(err) => {
                    log::debug!("{err}");
                    self.line("Invalid choice. Please try again.")?;
                }
            }
        }
    }

    /// Asks whether to play another round. End of input counts as no.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn read_replay(&mut self) -> io::Result<bool> {
        Ok(self
            .prompt("\nDo you want to play again? (yes/no): ")?
            .is_some_and(|answer| wants_another_round(&answer)))
    }

    fn show_score(&mut self, hand: &Hand) -> io::Result<()> {
        self.say(&format!("{} Score: {}", hand.role(), hand.score()))
    }

    fn show_table(&mut self, round: &Round) -> io::Result<()> {
        self.line("")?;
        self.say(&round.dealer().concealed().to_string())?;
        self.say(&round.player().view().to_string())?;
        self.show_score(round.player())?;
        self.line("\n")
    }

    fn show_dealer(&mut self, round: &Round) -> io::Result<()> {
        self.say(&round.dealer().view().to_string())?;
        self.show_score(round.dealer())
    }

    fn show_final(&mut self, round: &Round) -> io::Result<()> {
        self.say(&format!("{FINAL_RESULTS}\n"))?;
        self.say(&round.dealer().view().to_string())?;
        let dealer_score = format!("Dealer Score: {}\n", round.dealer().score());
        self.say(&dealer_score)?;
        self.say(&round.player().view().to_string())?;
        self.show_score(round.player())?;
        self.say("\n")
    }

    /// Runs the player's turn. Returns `false` if input ended first.
    fn player_turn<R: RngCore>(&mut self, game: &mut Game<R>, round: &mut Round) -> io::Result<bool> {
        self.say(PLAYER_TURN)?;

        while !round.is_over() {
            self.show_table(round)?;
            let Some(action) = self.read_action()? else {
                return Ok(false);
            };
            match game.act(round, action) {
                Ok(Some(card)) => {
                    self.line(&format!("\nPlayer Hits! Draws: {card}\n"))?;
                    if round.is_over() {
                        self.line("\nPlayer Busts!\n")?;
                    }
                }
                Ok(None) => {
                    self.line("\nPlayer Stays!\n")?;
                    break;
                }
                Err(err) => return Err(io::Error::other(err)),
            }
        }

        Ok(true)
    }

    fn dealer_turn<R: RngCore>(&mut self, game: &mut Game<R>, round: &mut Round) -> io::Result<()> {
        self.say(&format!("{DEALER_TURN}\n"))?;
        self.show_dealer(round)?;

        loop {
            match game.dealer_draw(round) {
                Ok(Some(card)) => {
                    self.say(&format!("Dealer Hits! Draws: {card}\n"))?;
                    thread::sleep(self.pacing.dealer_pause);
                    self.show_dealer(round)?;
                    if round.is_over() {
                        return self.say("\nDealer Busts!\n");
                    }
                }
                Ok(None) => return self.say("\nDealer Stays!\n"),
                Err(err) => return Err(io::Error::other(err)),
            }
        }
    }

    /// Plays one round: the player's turn, the dealer's turn if reached, and
    /// the final results.
    ///
    /// Returns `None` if input ended mid-round; that round is not counted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn play_round<R: RngCore>(&mut self, game: &mut Game<R>) -> io::Result<Option<RoundOutcome>> {
        let mut round = game.deal();

        if !self.player_turn(game, &mut round)? {
            return Ok(None);
        }
        if !round.is_over() {
            self.dealer_turn(game, &mut round)?;
        }

        self.show_final(&round)?;
        let outcome = game.finish(round).map_err(io::Error::other)?;
        self.say(&outcome.to_string())?;

        Ok(Some(outcome))
    }

    /// Plays rounds until the player declines to continue.
    ///
    /// Returns the final tally.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn run<R: RngCore>(&mut self, game: &mut Game<R>) -> io::Result<Tally> {
        self.banner(game.options().dealer_stands_at)?;

        loop {
            if self.play_round(game)?.is_none() {
                break;
            }
            self.say(&format!("\n{}", game.tally()))?;

            if !self.read_replay()? {
                break;
            }
            self.line("\n")?;
        }

        self.say("Thanks for playing!")?;
        self.output.flush()?;
        Ok(game.tally())
    }
}
