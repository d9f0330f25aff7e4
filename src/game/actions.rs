use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::rules;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Once either hand reaches the win limit the player's turn ends and the
    /// game moves on to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the pile is
    /// empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.pile.deal(&mut self.player)?.clone();

        if rules::has_winner(&self.player, &self.dealer, &self.options) {
            debug!(
                player_score = self.player_score(),
                "player reached the limit"
            );
            self.state = GameState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.state = GameState::DealerTurn;
        Ok(())
    }
}
