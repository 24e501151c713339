//! Play blackjack against the dealer in the terminal.

use core::time::Duration;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack::console::{Console, Pacing};
use blackjack::{DEALER_STANDS_AT, Game, GameOptions};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Standard 52-card decks in the draw pile
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..))]
    decks: u8,
    /// Seed for the shuffle; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
    /// The dealer draws while below this score
    #[arg(long, default_value_t = DEALER_STANDS_AT)]
    dealer_stands_at: u8,
    /// Milliseconds between typed-out characters
    #[arg(long, default_value_t = 30)]
    typing_delay_ms: u64,
    /// Milliseconds to pause after each dealer draw
    #[arg(long, default_value_t = 1000)]
    dealer_pause_ms: u64,
    /// Print everything at once
    #[arg(long)]
    fast: bool,
}

impl Args {
    fn pacing(&self) -> Pacing {
        if self.fast {
            Pacing::instant()
        } else {
            Pacing {
                typing_delay: Duration::from_millis(self.typing_delay_ms),
                dealer_pause: Duration::from_millis(self.dealer_pause_ms),
            }
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::debug!("seed {seed}");

    let options = GameOptions::default()
        .with_decks(args.decks)
        .with_dealer_stands_at(args.dealer_stands_at);
    let mut game = Game::new(options, seed);

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), args.pacing());
    console.run(&mut game)?;
    Ok(())
}
