//! Survival credit economy.
//!
//! Every round costs a fixed burn. A share of positive round profit is
//! credited back, a refill is granted when the balance runs low, and the run
//! ends once the balance falls to the death threshold even after a refill.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ConfigError, ExperimentOver};
use crate::options::EconomyConfig;

/// Balance after one economy step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomyStep {
    /// Credit balance after the step.
    pub credits: f64,
    /// Whether a refill was granted in this step.
    pub refill: bool,
}

/// The survival credit counter.
#[derive(Debug, Clone)]
pub struct SurvivalEconomy {
    config: EconomyConfig,
    credits: f64,
    depleted: bool,
}

impl SurvivalEconomy {
    /// Creates an economy holding the configured initial credits.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`EconomyConfig::validate`].
    pub fn new(config: EconomyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            credits: config.initial_credits,
            config,
            depleted: false,
        })
    }

    /// Applies one round's profit to the credit balance.
    ///
    /// # Errors
    ///
    /// Returns [`ExperimentOver`] when the balance is at or below the death
    /// threshold after the refill check. The economy stays depleted, and
    /// every later call fails without touching the balance, until
    /// [`SurvivalEconomy::reset`].
    ///
    /// # Example
    ///
    /// ```
    /// use countess::{EconomyConfig, SurvivalEconomy};
    ///
    /// let config = EconomyConfig::default().with_initial_credits(10.0);
    /// let mut economy = SurvivalEconomy::new(config).unwrap();
    /// let step = economy.step(-1.0).unwrap();
    /// assert!(!step.refill);
    /// assert!(step.credits < 10.0);
    /// ```
    pub fn step(&mut self, profit: f64) -> Result<EconomyStep, ExperimentOver> {
        if self.depleted {
            return Err(ExperimentOver {
                credits: self.credits,
            });
        }

        self.credits -= self.config.burn_per_hand;

        if profit > 0.0 {
            self.credits += profit * self.config.tax_rate_on_positive_profit;
        }

        let mut refill = false;
        if self.credits <= self.config.refill_threshold {
            self.credits += self.config.refill_amount;
            refill = true;
            info!(
                amount = self.config.refill_amount,
                credits = self.credits,
                "credits refilled"
            );
        }

        if self.credits <= self.config.death_threshold {
            self.depleted = true;
            warn!(credits = self.credits, "credits depleted");
            return Err(ExperimentOver {
                credits: self.credits,
            });
        }

        Ok(EconomyStep {
            credits: self.credits,
            refill,
        })
    }

    /// Returns the current credit balance.
    #[must_use]
    pub const fn credits(&self) -> f64 {
        self.credits
    }

    /// Returns whether the credits have been depleted.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.depleted
    }

    /// Returns the economy configuration.
    #[must_use]
    pub const fn config(&self) -> &EconomyConfig {
        &self.config
    }

    /// Restores the initial balance and clears the depleted flag.
    pub const fn reset(&mut self) {
        self.credits = self.config.initial_credits;
        self.depleted = false;
    }
}
