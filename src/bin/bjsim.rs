//! Plays a run of automated blackjack rounds and prints the game log.

use std::path::PathBuf;

use bjsim::{Blackjack, GameOptions, RunOutcome, ShuffleOptions, ShufflePlan};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Simulate rounds of blackjack against the dealer")]
struct Args {
    /// Money the player starts with.
    #[arg(long, default_value_t = 100)]
    wallet: usize,

    /// Number of rounds to play.
    #[arg(long, default_value_t = 10)]
    rounds: usize,

    /// Score at which the player stops drawing.
    #[arg(long, default_value_t = 17)]
    stand_threshold: u8,

    /// Seed for the per-round shuffle counts.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Fixed shuffle applied every round, e.g. `modified_overhand=2,mongean=3`.
    #[arg(long)]
    shuffle: Option<ShuffleOptions>,

    /// Directory receiving the game summary file.
    #[arg(long, default_value = "game_summaries")]
    summary_dir: PathBuf,

    /// Do not write a game summary file.
    #[arg(long)]
    no_summary: bool,
}

fn main() -> Result<(), Box<dyn core::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut options = GameOptions::default();
    if let Some(shuffle) = args.shuffle {
        options = options.with_shuffle(ShufflePlan::Fixed(shuffle));
    }
    if !args.no_summary {
        options = options.with_summary_dir(args.summary_dir);
    }

    let mut game = Blackjack::new(args.wallet, options, args.seed);
    info!(
        game = game.game_number(),
        wallet = args.wallet,
        rounds = args.rounds,
        "starting game"
    );

    let outcome = game.play_round(args.rounds, args.stand_threshold)?;

    print!("{}", game.get_log());
    println!();
    match outcome {
        RunOutcome::Completed => println!("Played {} round(s).", game.history().len()),
        RunOutcome::NotEnoughCards => println!("Stopped early: the deck ran out."),
        RunOutcome::InsufficientFunds => println!("Stopped early: out of money."),
    }
    println!("Final wallet: {}", game.wallet());
    if let Some(path) = game.summary_path() {
        println!("Summary written to {}", path.display());
    }

    Ok(())
}
