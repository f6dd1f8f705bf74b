//! Table rules, survival economy and run configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Table rules for a simulation run.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use countess::Rules;
///
/// let rules = Rules::default()
///     .with_decks(8)
///     .with_blackjack_pays(1.2)
///     .with_stand_on_soft_17(false);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Number of decks.
    pub decks: u8,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Whether double down is allowed after split.
    ///
    /// Informational: the engine doubles any two-card hand the strategy
    /// asks it to.
    pub double_after_split: bool,
    /// Whether split aces may be split again.
    ///
    /// Informational: an ace pair on the hand in play is split again whenever
    /// `max_splits` allows it.
    pub resplit_aces: bool,
    /// Maximum number of splits in one round.
    pub max_splits: u8,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Deck penetration (fraction of the shoe played before reshuffle).
    pub penetration: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            decks: 6,
            stand_on_soft_17: true,
            double_after_split: true,
            resplit_aces: false,
            max_splits: 3,
            blackjack_pays: 1.5,
            penetration: 0.75,
        }
    }
}

impl Rules {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use countess::Rules;
    ///
    /// let rules = Rules::default().with_decks(2);
    /// assert_eq!(rules.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use countess::Rules;
    ///
    /// let rules = Rules::default().with_stand_on_soft_17(false);
    /// assert_eq!(rules.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether double down is allowed after split.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets whether split aces may be split again.
    ///
    /// # Example
    ///
    /// ```
    /// use countess::Rules;
    ///
    /// let rules = Rules::default().with_resplit_aces(true);
    /// assert!(rules.resplit_aces);
    /// ```
    #[must_use]
    pub const fn with_resplit_aces(mut self, allowed: bool) -> Self {
        self.resplit_aces = allowed;
        self
    }

    /// Sets the maximum number of splits per round.
    ///
    /// # Example
    ///
    /// ```
    /// use countess::Rules;
    ///
    /// let rules = Rules::default().with_max_splits(0);
    /// assert_eq!(rules.max_splits, 0);
    /// ```
    #[must_use]
    pub const fn with_max_splits(mut self, splits: u8) -> Self {
        self.max_splits = splits;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use countess::Rules;
    ///
    /// let rules = Rules::default().with_blackjack_pays(1.2);
    /// assert_eq!(rules.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use countess::Rules;
    ///
    /// let rules = Rules::default().with_penetration(0.80);
    /// assert_eq!(rules.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Checks the rules for values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no decks, the penetration is outside
    /// `[0, 1)`, or the blackjack payout is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        if !(0.0..1.0).contains(&self.penetration) {
            return Err(ConfigError::InvalidPenetration);
        }
        if !self.blackjack_pays.is_finite() || self.blackjack_pays <= 0.0 {
            return Err(ConfigError::InvalidPayout);
        }
        Ok(())
    }
}

/// Survival economy parameters.
///
/// ```
/// use countess::EconomyConfig;
///
/// let economy = EconomyConfig::default()
///     .with_initial_credits(5.0)
///     .with_refill(5.0, 20.0);
/// assert_eq!(economy.refill_amount, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomyConfig {
    /// Credits at the start of the run.
    pub initial_credits: f64,
    /// Cost charged for every round played.
    pub burn_per_hand: f64,
    /// Share of positive round profit credited back.
    pub tax_rate_on_positive_profit: f64,
    /// Balance at or below which a refill is granted.
    pub refill_threshold: f64,
    /// Amount granted by a refill.
    pub refill_amount: f64,
    /// Balance at or below which the run ends.
    pub death_threshold: f64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            initial_credits: 50.0,
            burn_per_hand: 0.0005,
            tax_rate_on_positive_profit: 0.20,
            refill_threshold: 5.0,
            refill_amount: 20.0,
            death_threshold: 0.0,
        }
    }
}

impl EconomyConfig {
    /// Sets the starting credit balance.
    #[must_use]
    pub const fn with_initial_credits(mut self, credits: f64) -> Self {
        self.initial_credits = credits;
        self
    }

    /// Sets the per-round burn cost.
    #[must_use]
    pub const fn with_burn_per_hand(mut self, burn: f64) -> Self {
        self.burn_per_hand = burn;
        self
    }

    /// Sets the share of positive profit credited back.
    #[must_use]
    pub const fn with_tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate_on_positive_profit = rate;
        self
    }

    /// Sets the refill threshold and amount.
    #[must_use]
    pub const fn with_refill(mut self, threshold: f64, amount: f64) -> Self {
        self.refill_threshold = threshold;
        self.refill_amount = amount;
        self
    }

    /// Sets the balance at or below which the run ends.
    #[must_use]
    pub const fn with_death_threshold(mut self, threshold: f64) -> Self {
        self.death_threshold = threshold;
        self
    }

    /// Checks the economy for unusable values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEconomy`] if any value is not finite or
    /// the burn, tax rate or refill amount is negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.initial_credits,
            self.burn_per_hand,
            self.tax_rate_on_positive_profit,
            self.refill_threshold,
            self.refill_amount,
            self.death_threshold,
        ];
        if values.iter().any(|value| !value.is_finite())
            || self.burn_per_hand < 0.0
            || self.tax_rate_on_positive_profit < 0.0
            || self.refill_amount < 0.0
        {
            return Err(ConfigError::InvalidEconomy);
        }
        Ok(())
    }
}

/// Parameters of a simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Seed for the shoe's random number generator.
    pub seed: u64,
    /// Maximum number of rounds in the run.
    pub hands_cap: u64,
    /// Bet placed on every round.
    pub base_bet: f64,
    /// Bankroll at the start of the run.
    pub initial_bankroll: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            hands_cap: 500_000,
            base_bet: 1.0,
            initial_bankroll: 500.0,
        }
    }
}

impl RunConfig {
    /// Sets the random seed.
    ///
    /// # Example
    ///
    /// ```
    /// use countess::RunConfig;
    ///
    /// let run = RunConfig::default().with_seed(42).with_hands_cap(1_000);
    /// assert_eq!(run.seed, 42);
    /// assert_eq!(run.hands_cap, 1_000);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the maximum number of rounds.
    #[must_use]
    pub const fn with_hands_cap(mut self, cap: u64) -> Self {
        self.hands_cap = cap;
        self
    }

    /// Sets the bet placed on every round.
    #[must_use]
    pub const fn with_base_bet(mut self, bet: f64) -> Self {
        self.base_bet = bet;
        self
    }

    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_initial_bankroll(mut self, bankroll: f64) -> Self {
        self.initial_bankroll = bankroll;
        self
    }

    /// Checks the run parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseBet`] if the base bet is not a
    /// positive finite amount.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_bet.is_finite() || self.base_bet <= 0.0 {
            return Err(ConfigError::InvalidBaseBet);
        }
        Ok(())
    }
}
