//! Game session and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::error::ActionError;
use crate::options::GameOptions;
use crate::rules;

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// A game of 21 between one player and the dealer.
///
/// The game owns the draw pile, both hands and the random number generator.
/// Every shuffle draws from the same seeded stream, so consecutive rounds
/// never repeat an order.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards still to be dealt.
    pile: Deck,
    /// Dealer's hand.
    dealer: Deck,
    /// Player's hand.
    player: Deck,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingToDeal);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            pile: Deck::new(),
            dealer: Deck::new(),
            player: Deck::new(),
            options,
            state: GameState::WaitingToDeal,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Empties, refills and shuffles the draw pile.
    pub fn reset_deck(&mut self) {
        self.pile.clear();
        self.pile.populate();
        self.pile.shuffle(&mut self.rng);
    }

    /// Starts a new round with a fresh, shuffled pile.
    ///
    /// The opening hands are dealt with [`rules::deal_opening_hands`] and the
    /// dealer's first card is turned face down.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the pile runs out while
    /// dealing. Call [`Game::clear_round`] first to abandon an unfinished
    /// round.
    pub fn start_round(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::WaitingToDeal && self.state != GameState::RoundOver {
            return Err(ActionError::InvalidState);
        }

        self.reset_deck();
        self.deal_round()
    }

    /// Deals the opening hands from the current pile without reshuffling.
    ///
    /// This is what [`Game::start_round`] does after resetting the deck; it is
    /// exposed for callers that arrange the pile themselves with
    /// [`Game::set_pile`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the pile runs out while
    /// dealing.
    pub fn deal_round(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::WaitingToDeal && self.state != GameState::RoundOver {
            return Err(ActionError::InvalidState);
        }

        let attempts = rules::deal_opening_hands(
            &mut self.pile,
            &mut self.dealer,
            &mut self.player,
            &self.options,
        )?;
        if !self.dealer.is_empty() {
            self.dealer.set_hidden(0, true)?;
        }

        debug!(
            attempts,
            player_score = self.player_score(),
            remaining = self.pile.len(),
            "opening hands dealt"
        );

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Clears both hands and returns the game to the `WaitingToDeal` state.
    ///
    /// This works from any state, so a round cut short by an empty pile can
    /// be abandoned and a new one started. The pile is left untouched.
    pub fn clear_round(&mut self) {
        self.dealer.clear();
        self.player.clear();
        self.state = GameState::WaitingToDeal;
    }

    /// Replaces the draw pile. The last card of `pile` is dealt first.
    pub fn set_pile(&mut self, pile: Deck) {
        self.pile = pile;
    }

    /// Returns the draw pile.
    #[must_use]
    pub const fn pile(&self) -> &Deck {
        &self.pile
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Deck {
        &self.dealer
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Deck {
        &self.player
    }

    /// Returns the player's current score.
    #[must_use]
    pub fn player_score(&self) -> u16 {
        self.player.score(self.options.win_limit)
    }

    /// Returns the dealer's current score, hidden cards included.
    #[must_use]
    pub fn dealer_score(&self) -> u16 {
        self.dealer.score(self.options.win_limit)
    }

    /// Returns the number of cards remaining in the pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.pile.len()
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }
}
