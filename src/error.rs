//! Error types for deck and game operations.

use thiserror::Error;

/// Errors that can occur when dealing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The source pile has no cards left.
    #[error("no cards left in the pile")]
    EmptyPile,
}

/// Errors that can occur when concealing or revealing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConcealError {
    /// There is no card at the requested position.
    #[error("card index {index} out of range for a hand of {len} cards")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of cards in the hand.
        len: usize,
    },
}

/// Errors that can occur during game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the pile.
    #[error("no cards left in the pile")]
    EmptyPile,
    /// A card could not be concealed or revealed.
    #[error(transparent)]
    Conceal(#[from] ConcealError),
}

impl From<DealError> for ActionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::EmptyPile => Self::EmptyPile,
        }
    }
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
}
