//! Round phase.

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundPhase {
    /// No round has been dealt yet.
    #[default]
    Idle,
    /// Two cards each are being dealt, alternating player and dealer.
    Dealing,
    /// The player draws until reaching the stand threshold.
    PlayerTurn,
    /// The dealer has revealed and draws until reaching the dealer stand score.
    DealerTurn,
    /// Scores were compared and the wallet settled.
    Settled,
}
