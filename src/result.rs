//! Round outcome types.

/// Verdict of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player beats the dealer, or the dealer busts.
    PlayerWins,
    /// Player hits the win limit exactly.
    FlawlessVictory,
    /// Dealer beats the player.
    DealerWins,
    /// Player busts; the dealer wins without comparing scores.
    DealerWinsByDefault,
    /// Both scores are equal and below the win limit.
    Push,
}

impl Outcome {
    /// Returns whether the player won, including a flawless victory.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::PlayerWins | Self::FlawlessVictory)
    }

    /// Returns whether the dealer won, including by default.
    #[must_use]
    pub const fn dealer_won(self) -> bool {
        matches!(self, Self::DealerWins | Self::DealerWinsByDefault)
    }
}

/// Result of a round after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The verdict.
    pub outcome: Outcome,
    /// The dealer's final score.
    pub dealer_score: u16,
    /// The player's final score.
    pub player_score: u16,
    /// Whether the dealer went over the limit.
    pub dealer_bust: bool,
    /// Whether the player went over the limit.
    pub player_bust: bool,
}
