//! A seeded simulation run: one table, one economy, one bankroll.

use alloc::boxed::Box;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::economy::SurvivalEconomy;
use crate::error::ConfigError;
use crate::event::RoundTrace;
use crate::game::Table;
use crate::options::{EconomyConfig, Rules, RunConfig};
use crate::result::{Outcome, RoundResult};

/// Whether the run can still play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Credits remain.
    Alive,
    /// Credits are depleted.
    Dead,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// The survival economy ran out of credits.
    CreditsDepleted,
    /// The configured number of rounds was reached.
    HandsCap,
    /// The table refused the base bet.
    BetRejected,
}

/// Flat per-round record for append-only export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// One-based round index.
    pub hand: u64,
    /// Bankroll after the round.
    pub bankroll: f64,
    /// Credits after the economy step.
    pub credits: f64,
    /// Cumulative profit of the run.
    pub net_profit: f64,
    /// Profit of this round.
    pub profit: f64,
    /// Base bet of the round.
    pub bet: f64,
    /// Aggregate outcome label.
    pub outcome: Outcome,
    /// Whether the economy granted a refill.
    pub refill: bool,
    /// Run status after the round.
    pub status: Status,
    /// Cards left in the shoe.
    pub shoe_remaining: usize,
}

/// A played round with its record, result and trace.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedRound {
    /// Exported record.
    pub record: RoundRecord,
    /// Round result.
    pub result: RoundResult,
    /// Event trace and final layout.
    pub trace: RoundTrace,
}

/// Result of [`Simulation::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A round was played.
    Played(Box<PlayedRound>),
    /// The bankroll is empty; the round index advanced without a bet.
    Skipped {
        /// One-based round index.
        hand: u64,
    },
    /// The run is over and nothing happened.
    Halted(HaltReason),
}

/// Outcome counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    /// Rounds won.
    pub wins: u64,
    /// Rounds pushed.
    pub pushes: u64,
    /// Rounds lost.
    pub losses: u64,
    /// Rounds with a blackjack.
    pub blackjacks: u64,
}

impl Tally {
    const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Push => self.pushes += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Blackjack => self.blackjacks += 1,
        }
    }
}

/// Snapshot of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Rounds stepped (played or skipped).
    pub hands: u64,
    /// Current bankroll.
    pub bankroll: f64,
    /// Cumulative profit.
    pub net_profit: f64,
    /// Highest bankroll seen.
    pub peak_bankroll: f64,
    /// Largest drop from the peak.
    pub max_drawdown: f64,
    /// Current credits.
    pub credits: f64,
    /// Outcome counts.
    pub tally: Tally,
    /// Run status.
    pub status: Status,
}

/// A simulation run.
///
/// Owns its table, shoe and economy outright, so independent runs can be
/// driven from separate threads without sharing anything.
///
/// ```
/// use countess::{EconomyConfig, Rules, RunConfig, Simulation};
///
/// let run = RunConfig::default().with_hands_cap(20);
/// let mut sim = Simulation::new(Rules::default(), EconomyConfig::default(), run).unwrap();
/// let records = sim.run_batch(100);
/// assert_eq!(records.len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    rules: Rules,
    run: RunConfig,
    table: Table,
    economy: SurvivalEconomy,
    bankroll: f64,
    net_profit: f64,
    hand: u64,
    peak_bankroll: f64,
    max_drawdown: f64,
    tally: Tally,
    status: Status,
}

impl Simulation {
    /// Creates a run from its rules, economy and run parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three configurations is invalid.
    pub fn new(rules: Rules, economy: EconomyConfig, run: RunConfig) -> Result<Self, ConfigError> {
        run.validate()?;
        let table = Table::new(rules.clone(), run.seed)?;
        let economy = SurvivalEconomy::new(economy)?;
        Ok(Self::build(rules, run, table, economy))
    }

    /// Creates a run around an existing table.
    ///
    /// # Errors
    ///
    /// Returns an error if the economy or run parameters are invalid.
    pub fn with_table(
        table: Table,
        economy: EconomyConfig,
        run: RunConfig,
    ) -> Result<Self, ConfigError> {
        run.validate()?;
        let economy = SurvivalEconomy::new(economy)?;
        Ok(Self::build(table.rules().clone(), run, table, economy))
    }

    fn build(rules: Rules, run: RunConfig, table: Table, economy: SurvivalEconomy) -> Self {
        info!(
            seed = run.seed,
            base_bet = run.base_bet,
            bankroll = run.initial_bankroll,
            credits = economy.credits(),
            burn = economy.config().burn_per_hand,
            "simulation starting"
        );
        Self {
            rules,
            bankroll: run.initial_bankroll,
            peak_bankroll: run.initial_bankroll,
            run,
            table,
            economy,
            net_profit: 0.0,
            hand: 0,
            max_drawdown: 0.0,
            tally: Tally::default(),
            status: Status::Alive,
        }
    }

    /// Advances the run by one round.
    pub fn step(&mut self) -> Step {
        if self.status == Status::Dead {
            return Step::Halted(HaltReason::CreditsDepleted);
        }
        if self.hand >= self.run.hands_cap {
            return Step::Halted(HaltReason::HandsCap);
        }

        if self.bankroll <= 0.0 {
            self.hand += 1;
            debug!(hand = self.hand, "bankroll empty, cannot bet");
            return Step::Skipped { hand: self.hand };
        }

        let (result, trace) = match self.table.play_round(self.run.base_bet) {
            Ok(round) => round,
            Err(err) => {
                warn!(hand = self.hand, bet = self.run.base_bet, %err, "bet rejected");
                return Step::Halted(HaltReason::BetRejected);
            }
        };

        self.bankroll += result.profit;
        self.net_profit += result.profit;
        self.hand += 1;
        self.update_drawdown();
        self.tally.record(result.outcome);

        let refill = match self.economy.step(result.profit) {
            Ok(step) => step.refill,
            Err(over) => {
                warn!(hand = self.hand, credits = over.credits, "experiment over");
                self.status = Status::Dead;
                false
            }
        };

        let record = RoundRecord {
            hand: self.hand,
            bankroll: self.bankroll,
            credits: self.economy.credits(),
            net_profit: self.net_profit,
            profit: result.profit,
            bet: result.bet,
            outcome: result.outcome,
            refill,
            status: self.status,
            shoe_remaining: trace.shoe_remaining,
        };

        Step::Played(Box::new(PlayedRound {
            record,
            result,
            trace,
        }))
    }

    /// Steps up to `rounds` times, stopping early when the run halts.
    ///
    /// Returns the records of the rounds actually played.
    pub fn run_batch(&mut self, rounds: u64) -> Vec<RoundRecord> {
        let mut records = Vec::new();
        for _ in 0..rounds {
            match self.step() {
                Step::Played(played) => records.push(played.record),
                Step::Skipped { .. } => {}
                Step::Halted(reason) => {
                    debug!(?reason, hand = self.hand, "run halted");
                    break;
                }
            }
        }
        records
    }

    fn update_drawdown(&mut self) {
        if self.bankroll > self.peak_bankroll {
            self.peak_bankroll = self.bankroll;
        }
        let drawdown = self.peak_bankroll - self.bankroll;
        if drawdown > self.max_drawdown {
            self.max_drawdown = drawdown;
        }
    }

    /// Returns a snapshot of the run.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        Stats {
            hands: self.hand,
            bankroll: self.bankroll,
            net_profit: self.net_profit,
            peak_bankroll: self.peak_bankroll,
            max_drawdown: self.max_drawdown,
            credits: self.economy.credits(),
            tally: self.tally,
            status: self.status,
        }
    }

    /// Returns the run status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the survival economy.
    #[must_use]
    pub const fn economy(&self) -> &SurvivalEconomy {
        &self.economy
    }

    /// Restarts the run from its configuration with a freshly seeded shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be rebuilt from the rules.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.table = Table::new(self.rules.clone(), self.run.seed)?;
        self.economy.reset();
        self.bankroll = self.run.initial_bankroll;
        self.peak_bankroll = self.run.initial_bankroll;
        self.net_profit = 0.0;
        self.hand = 0;
        self.max_drawdown = 0.0;
        self.tally = Tally::default();
        self.status = Status::Alive;
        debug!(seed = self.run.seed, "simulation reset");
        Ok(())
    }
}
