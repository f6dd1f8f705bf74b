//! Seeded survival run that prints one JSON record per round.
//!
//! Usage: `cargo run --example survival_run -- [seed] [rounds] [log.jsonl]`
//!
//! Records go to stdout, or are appended to the given file. Set `RUST_LOG`
//! (for example `RUST_LOG=countess=debug`) to see engine logs on stderr.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};

use countess::{EconomyConfig, Rules, RunConfig, Simulation, Status, Step};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn core::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), 7)?;
    let rounds = parse_arg(args.next(), 10_000)?;
    let mut sink: Box<dyn Write> = match args.next() {
        Some(path) => Box::new(BufWriter::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let run = RunConfig::default().with_seed(seed).with_hands_cap(rounds);
    let mut sim = Simulation::new(Rules::default(), EconomyConfig::default(), run)?;

    loop {
        match sim.step() {
            Step::Played(played) => {
                serde_json::to_writer(&mut sink, &played.record)?;
                writeln!(sink)?;
                if played.trace.reshuffled {
                    info!(remaining = played.trace.shoe_remaining, "shoe reshuffled");
                }
                if played.record.status == Status::Dead {
                    info!(hand = played.record.hand, "credits depleted, shutting down");
                }
            }
            Step::Skipped { hand } => info!(hand, "bankroll empty, cannot bet"),
            Step::Halted(reason) => {
                info!(?reason, "run halted");
                break;
            }
        }
    }
    sink.flush()?;

    let stats = sim.stats();
    info!(
        hands = stats.hands,
        bankroll = stats.bankroll,
        net_profit = stats.net_profit,
        max_drawdown = stats.max_drawdown,
        credits = stats.credits,
        wins = stats.tally.wins,
        pushes = stats.tally.pushes,
        losses = stats.tally.losses,
        blackjacks = stats.tally.blackjacks,
        status = ?stats.status,
        "run complete"
    );
    Ok(())
}

fn parse_arg(arg: Option<String>, default: u64) -> Result<u64, core::num::ParseIntError> {
    arg.map_or(Ok(default), |value| value.parse())
}
