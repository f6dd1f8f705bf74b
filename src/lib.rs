//! A deterministic blackjack round simulator with optional `no_std` support.
//!
//! A [`Table`] plays complete rounds by a fixed basic strategy: it checks
//! shoe penetration, deals, splits and doubles, plays the dealer and settles
//! every hand, returning a [`RoundResult`] and an ordered event trace. A
//! [`SurvivalEconomy`] turns round profits into a credit balance that either
//! survives or runs out, and a [`Simulation`] drives both over a seeded run.
//!
//! # Example
//!
//! ```
//! use countess::{EconomyConfig, Rules, SurvivalEconomy, Table};
//!
//! let mut table = Table::new(Rules::default(), 42).unwrap();
//! let mut economy = SurvivalEconomy::new(EconomyConfig::default()).unwrap();
//!
//! let (result, _trace) = table.play_round(1.0).unwrap();
//! let step = economy.step(result.profit).unwrap();
//! assert!(step.credits > 0.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod economy;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod replay;
pub mod result;
pub mod shoe;
pub mod simulation;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use economy::{EconomyStep, SurvivalEconomy};
pub use error::{BetError, ConfigError, ExperimentOver, ReplayError};
pub use event::{RoundEvent, RoundTrace, Seat};
pub use game::{RoundPhase, Table, settle, settle_hand};
pub use hand::{Hand, hand_value, is_blackjack, is_pair};
pub use options::{EconomyConfig, Rules, RunConfig};
pub use replay::ReplayedRound;
pub use result::{HandResult, Outcome, RoundResult, Settlement};
pub use shoe::Shoe;
pub use simulation::{HaltReason, PlayedRound, RoundRecord, Simulation, Stats, Status, Step, Tally};
pub use strategy::{Action, decide};
