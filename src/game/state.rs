//! Round phase types.

/// Phase of the round currently (or last) being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round has been played yet.
    Idle,
    /// Checking shoe penetration.
    ShuffleCheck,
    /// Dealing two cards each to the player and the dealer.
    DealInitial,
    /// Playing player hands by basic strategy.
    PlayHands,
    /// Turning over the dealer's hole card.
    DealerReveal,
    /// Dealer draws to its standing total.
    DealerPlay,
    /// Settling every hand against the dealer.
    Settle,
    /// Round has ended.
    Done,
}
