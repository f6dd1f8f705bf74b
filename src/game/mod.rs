//! Round engine and table state.

use alloc::vec::Vec;
use tracing::{debug, trace, warn};

use crate::card::Card;
use crate::error::{BetError, ConfigError};
use crate::event::{RoundEvent, RoundTrace};
use crate::hand::Hand;
use crate::options::Rules;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use dealer::{settle, settle_hand};
pub use state::RoundPhase;

/// A blackjack table that plays complete rounds by basic strategy.
///
/// The table owns its shoe; nothing else mutates it. Rounds run to
/// completion inside [`Table::play_round`], so a table can be paused between
/// rounds but never inside one.
#[derive(Debug, Clone)]
pub struct Table {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Table rules.
    rules: Rules,
    /// Current round phase.
    phase: RoundPhase,
    /// Number of completed rounds.
    rounds: u64,
}

/// Working state of the round in progress.
struct Round {
    bet: f64,
    events: Vec<RoundEvent>,
    hands: Vec<Hand>,
    dealer: Vec<Card>,
    splits: u8,
    reshuffled: bool,
}

impl Round {
    const fn new(bet: f64) -> Self {
        Self {
            bet,
            events: Vec::new(),
            hands: Vec::new(),
            dealer: Vec::new(),
            splits: 0,
            reshuffled: false,
        }
    }

    fn into_trace(self, shoe_remaining: usize) -> RoundTrace {
        RoundTrace {
            events: self.events,
            dealer_cards: self.dealer,
            player_hands: self.hands,
            shoe_remaining,
            reshuffled: self.reshuffled,
        }
    }
}

impl Table {
    /// Creates a table with a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules fail [`Rules::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use countess::{Rules, Table};
    ///
    /// let mut table = Table::new(Rules::default(), 7).unwrap();
    /// let (result, trace) = table.play_round(1.0).unwrap();
    /// assert_eq!(result.player_hands, trace.player_hands.len());
    /// ```
    pub fn new(rules: Rules, seed: u64) -> Result<Self, ConfigError> {
        rules.validate()?;
        let shoe = Shoe::new(rules.decks, seed)?;
        Ok(Self::build(rules, shoe))
    }

    /// Creates a table that deals from the given shoe.
    ///
    /// The shoe is used as-is; its size need not match `rules.decks`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules fail [`Rules::validate`].
    pub fn with_shoe(rules: Rules, shoe: Shoe) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Self::build(rules, shoe))
    }

    fn build(rules: Rules, shoe: Shoe) -> Self {
        debug!(
            decks = rules.decks,
            stand_on_soft_17 = rules.stand_on_soft_17,
            double_after_split = rules.double_after_split,
            resplit_aces = rules.resplit_aces,
            max_splits = rules.max_splits,
            blackjack_pays = rules.blackjack_pays,
            penetration = rules.penetration,
            shoe = shoe.len(),
            "table ready"
        );
        Self {
            shoe,
            rules,
            phase: RoundPhase::Idle,
            rounds: 0,
        }
    }

    /// Returns the table rules.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the phase of the current or last round.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the number of completed rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u64 {
        self.rounds
    }

    /// Plays one full round at the given bet.
    ///
    /// Checks penetration, deals, plays every player hand by basic strategy,
    /// plays the dealer and settles. Returns the result together with the
    /// ordered event trace.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NotPositive`] if `bet` is not a positive finite
    /// amount. The shoe is untouched in that case.
    pub fn play_round(&mut self, bet: f64) -> Result<(RoundResult, RoundTrace), BetError> {
        if !bet.is_finite() || bet <= 0.0 {
            return Err(BetError::NotPositive);
        }

        let mut round = Round::new(bet);

        self.enter(RoundPhase::ShuffleCheck);
        self.check_reshuffle(&mut round);

        self.enter(RoundPhase::DealInitial);
        self.deal_initial(&mut round);

        self.enter(RoundPhase::PlayHands);
        self.play_hands(&mut round);

        self.enter(RoundPhase::DealerReveal);
        self.reveal_hole(&mut round);

        self.enter(RoundPhase::DealerPlay);
        self.dealer_play(&mut round);

        self.enter(RoundPhase::Settle);
        let result = self.settle_round(&mut round);

        self.enter(RoundPhase::Done);
        self.rounds += 1;

        debug!(
            round = self.rounds,
            bet,
            profit = result.profit,
            outcome = result.outcome.label(),
            dealer_total = result.dealer_total,
            hands = result.player_hands,
            shoe_remaining = self.shoe.remaining(),
            "round settled"
        );

        Ok((result, round.into_trace(self.shoe.remaining())))
    }

    fn enter(&mut self, phase: RoundPhase) {
        trace!(?phase, "round phase");
        self.phase = phase;
    }

    /// Draws a card, reshuffling in place if the shoe has run dry.
    fn draw(&mut self, events: &mut Vec<RoundEvent>) -> Card {
        loop {
            if let Some(card) = self.shoe.deal() {
                return card;
            }
            warn!(cards = self.shoe.len(), "shoe exhausted mid-round, reshuffling");
            self.shoe.shuffle();
            events.push(RoundEvent::Shuffle { mid_round: true });
        }
    }
}
