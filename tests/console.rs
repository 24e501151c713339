//! Console session tests.

use std::io::Cursor;

use blackjack::console::{Console, Pacing};
use blackjack::{Card, Deck, Game, GameOptions, Rank, Suit, Tally};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn game_with_draws(draws: &[Card]) -> Game {
    let deck = Deck::stacked(1, draws.iter().copied(), ChaCha8Rng::seed_from_u64(0));
    Game::with_deck(GameOptions::default(), deck)
}

fn play(game: &mut Game, input: &str) -> (Tally, String) {
    let mut console = Console::new(Cursor::new(input.to_owned()), Vec::new(), Pacing::instant());
    let tally = console.run(game).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    (tally, output)
}

#[test]
fn two_round_session() {
    let mut game = game_with_draws(&[
        card(Rank::Five, Suit::Clubs),    // player
        card(Rank::Six, Suit::Hearts),    // player
        card(Rank::Nine, Suit::Clubs),    // dealer
        card(Rank::Seven, Suit::Spades),  // dealer
        card(Rank::Nine, Suit::Hearts),   // player hit
        card(Rank::Ten, Suit::Clubs),     // player
        card(Rank::Six, Suit::Diamonds),  // player
        card(Rank::Ten, Suit::Hearts),    // dealer
        card(Rank::Nine, Suit::Diamonds), // dealer
    ]);

    let (tally, output) = play(&mut game, "maybe\nh\ns\nyes\ns\nno\n");

    assert_eq!(tally.player_wins, 1);
    assert_eq!(tally.dealer_wins, 1);
    assert_eq!(output.matches("\"hit\" or \"stay\"? ").count(), 4);
    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 1);
    assert!(output.contains("Dealer Hand: 9\u{2663}  XX"));
    assert!(output.contains("Player Hand: 5\u{2663}  6\u{2665}"));
    assert!(output.contains("Player Hits! Draws: 9\u{2665}"));
    assert!(output.contains("Player Score: 20"));
    assert!(output.contains("Player Stays!"));
    assert!(output.contains("Dealer Stays!"));
    assert!(output.contains("Player Wins!"));
    assert!(output.contains("Score: Player 1 - Dealer 0"));
    assert!(output.contains("Dealer Wins!"));
    assert!(output.contains("Score: Player 1 - Dealer 1"));
    assert!(output.ends_with("Thanks for playing!\n"));
}

#[test]
fn invalid_answer_draws_nothing() {
    let mut game = game_with_draws(&[
        card(Rank::King, Suit::Clubs),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Three, Suit::Clubs),
    ]);
    let left_after_deal = game.deck().len() - 4;

    let (tally, output) = play(&mut game, "maybe\nMAYBE\n");

    assert_eq!(tally, Tally::new());
    assert_eq!(output.matches("\"hit\" or \"stay\"? ").count(), 3);
    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
    assert_eq!(output.matches("Player Hand: K\u{2663}  2\u{2665}\n").count(), 1);
    assert!(!output.contains("Player Hits!"));
    assert_eq!(game.deck().len(), left_after_deal);
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = game_with_draws(&[
        card(Rank::King, Suit::Clubs),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
        card(Rank::Queen, Suit::Hearts),
    ]);

    let (tally, output) = play(&mut game, "HIT\nn\n");

    assert_eq!(tally.dealer_wins, 1);
    assert!(output.contains("Player Busts!"));
    assert!(!output.contains("Dealer's Turn"));
    assert!(output.contains("Dealer Hand: 2\u{2663}  3\u{2660}"));
    assert!(output.contains("Dealer wins! (Player Busted)"));
    assert!(output.contains("Score: Player 0 - Dealer 1"));
}

#[test]
fn dealer_bust_is_announced() {
    let mut game = game_with_draws(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::King, Suit::Clubs),
    ]);

    let (tally, output) = play(&mut game, "stay\nno\n");

    assert_eq!(tally.player_wins, 1);
    assert!(output.contains("Dealer Hits! Draws: K\u{2663}"));
    assert!(output.contains("Dealer Score: 25"));
    assert!(output.contains("Dealer Busts!"));
    assert!(output.contains("Player wins! (Dealer Busted)"));
}

#[test]
fn end_of_input_mid_round_ends_session() {
    let mut game = game_with_draws(&[
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Four, Suit::Clubs),
    ]);

    let (tally, output) = play(&mut game, "h\n");

    assert_eq!(tally, Tally::new());
    assert!(!output.contains("Score: Player"));
    assert!(output.ends_with("Thanks for playing!\n"));
}

#[test]
fn banner_states_dealer_threshold() {
    let mut console = Console::new(Cursor::new(String::new()), Vec::new(), Pacing::instant());
    console.banner(16).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();

    assert!(output.starts_with("Welcome to Blackjack!\n"));
    assert!(output.contains("The dealer must draw until they reach at least 16."));
}

#[test]
fn replay_prompt_treats_end_of_input_as_no() {
    let mut console = Console::new(Cursor::new("Y\n".to_owned()), Vec::new(), Pacing::instant());
    assert!(console.read_replay().unwrap());
    assert!(!console.read_replay().unwrap());
}
