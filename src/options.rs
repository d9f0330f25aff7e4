//! Game configuration options.

/// Configuration options for a game of 21.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_win_limit(31)
///     .with_dealer_margin(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Score that wins outright; anything above it is a bust.
    pub win_limit: u16,
    /// The dealer keeps drawing while their score is at most
    /// `win_limit - dealer_margin`.
    pub dealer_margin: u16,
    /// Cards dealt to each participant at the start of a round.
    pub opening_cards: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            win_limit: 21,
            dealer_margin: 4,
            opening_cards: 2,
        }
    }
}

impl GameOptions {
    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_win_limit(25);
    /// assert_eq!(options.win_limit, 25);
    /// ```
    #[must_use]
    pub const fn with_win_limit(mut self, win_limit: u16) -> Self {
        self.win_limit = win_limit;
        self
    }

    /// Sets how far below the limit the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_margin(3);
    /// assert_eq!(options.dealer_margin, 3);
    /// ```
    #[must_use]
    pub const fn with_dealer_margin(mut self, margin: u16) -> Self {
        self.dealer_margin = margin;
        self
    }

    /// Sets the number of cards each participant receives when a round opens.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_opening_cards(3);
    /// assert_eq!(options.opening_cards, 3);
    /// ```
    #[must_use]
    pub const fn with_opening_cards(mut self, cards: u8) -> Self {
        self.opening_cards = cards;
        self
    }

    /// Highest score at which the dealer still draws.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().dealer_draw_threshold(), 17);
    /// ```
    #[must_use]
    pub const fn dealer_draw_threshold(&self) -> u16 {
        self.win_limit.saturating_sub(self.dealer_margin)
    }
}
