use tracing::{debug, info};

use crate::error::{ActionError, ShowdownError};
use crate::result::RoundResult;
use crate::rules;

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals the hole card. If the player has not gone over the
    /// limit, the dealer draws while their score is at most
    /// [`GameOptions::dealer_draw_threshold`](crate::GameOptions::dealer_draw_threshold).
    ///
    /// Returns the number of cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the pile is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<usize, ActionError> {
        if self.state != GameState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        self.dealer.reveal_all();

        let limit = self.options.win_limit;
        let threshold = self.options.dealer_draw_threshold();
        let mut drawn = 0;

        if self.player.score(limit) <= limit {
            while self.dealer.score(limit) <= threshold {
                self.pile.deal(&mut self.dealer)?;
                drawn += 1;
            }
        }

        debug!(
            drawn,
            dealer_score = self.dealer.score(limit),
            "dealer finished drawing"
        );

        self.state = GameState::RoundOver;
        Ok(drawn)
    }

    /// Compares both hands and returns the verdict.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let limit = self.options.win_limit;
        let dealer_score = self.dealer.score(limit);
        let player_score = self.player.score(limit);
        let outcome = rules::decide_outcome(&self.dealer, &self.player, &self.options);

        info!(?outcome, dealer_score, player_score, "round settled");

        Ok(RoundResult {
            outcome,
            dealer_score,
            player_score,
            dealer_bust: dealer_score > limit,
            player_bust: player_score > limit,
        })
    }
}
