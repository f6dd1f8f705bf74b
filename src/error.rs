//! Error types for table, economy and replay operations.

use thiserror::Error;

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shoe must hold at least one deck.
    #[error("deck count must be at least one")]
    NoDecks,
    /// Penetration must lie in `[0, 1)`.
    #[error("penetration must be in [0, 1)")]
    InvalidPenetration,
    /// Blackjack payout must be positive and finite.
    #[error("blackjack payout must be positive")]
    InvalidPayout,
    /// A stacked shoe was built from no cards.
    #[error("shoe has no cards")]
    EmptyShoe,
    /// Economy values must be finite; burn, tax and refill must not be negative.
    #[error("invalid survival economy configuration")]
    InvalidEconomy,
    /// Base bet must be positive and finite.
    #[error("base bet must be positive")]
    InvalidBaseBet,
}

/// Errors that can occur when placing the round bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet is zero, negative or not a finite number.
    #[error("bet must be a positive amount")]
    NotPositive,
}

/// Terminal signal from the survival economy: credits are depleted.
///
/// This is not a fault. The caller decides whether to stop or reset.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("credits depleted ({credits:.4}), the experiment ends")]
pub struct ExperimentOver {
    /// Credit balance at the moment of depletion.
    pub credits: f64,
}

/// Errors that can occur while replaying an event trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// A card was dealt to a hand that does not exist.
    #[error("deal to unknown hand {0}")]
    UnknownHand(usize),
    /// The hole card was revealed but never dealt face down.
    #[error("reveal without a face-down hole card")]
    MissingHoleCard,
    /// A player card was dealt face down.
    #[error("player card dealt face down")]
    HiddenPlayerCard,
    /// A split was recorded on a hand that does not hold exactly two cards.
    #[error("split of hand {0} which does not hold two cards")]
    InvalidSplit(usize),
}
