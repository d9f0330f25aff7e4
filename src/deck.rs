//! The card container used for both the draw pile and each hand.

use alloc::vec::Vec;
use core::slice;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::card::{Card, CardValue, DECK_SIZE, Rank, Suit};
use crate::error::{ConcealError, DealError};

/// Scores `cards`, counting Aces high where that keeps the total within
/// `limit`. Returns the total and whether an Ace is still counted high.
fn evaluate_cards<'a, I>(cards: I, limit: u16) -> (u16, bool)
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut value: u16 = 0;
    let mut high_aces: u16 = 0;

    for card in cards {
        match card.base_value() {
            CardValue::Points(points) => value += u16::from(points),
            CardValue::Ace => {
                high_aces += 1;
                value += CardValue::ACE_HIGH;
            }
        }
    }

    while value > limit && high_aces > 0 {
        value -= CardValue::ACE_HIGH - CardValue::ACE_LOW;
        high_aces -= 1;
    }

    (value, high_aces > 0)
}

/// An ordered, owned collection of cards.
///
/// The same type serves as the draw pile and as a player's hand. Cards are
/// dealt from the back of the sequence, so the last card of a populated deck
/// is the first one dealt. Moving a card with [`Deck::deal`] transfers
/// ownership, which keeps every card in exactly one container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a new empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck holding the full 52-card domain in canonical order.
    #[must_use]
    pub fn populated() -> Self {
        let mut deck = Self::new();
        deck.populate();
        deck
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Appends one card of every (rank, suit) pair, suit-major and
    /// rank-ascending.
    ///
    /// Calling this on a non-empty deck appends a second full domain.
    pub fn populate(&mut self) {
        self.cards.reserve(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
    }

    /// Randomly permutes the cards in place.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use twentyone::Deck;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let mut deck = Deck::populated();
    /// deck.shuffle(&mut rng);
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        debug!(cards = self.cards.len(), "shuffled deck");
    }

    /// Moves the top card of this deck onto `target` and returns it.
    ///
    /// The dealt card always arrives face up.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyPile`] if this deck has no cards.
    pub fn deal<'a>(&mut self, target: &'a mut Self) -> Result<&'a Card, DealError> {
        let mut card = self.cards.pop().ok_or(DealError::EmptyPile)?;
        card.set_hidden(false);
        trace!(%card, remaining = self.cards.len(), "dealt card");
        Ok(target.push(card))
    }

    fn push(&mut self, card: Card) -> &Card {
        self.cards.push(card);
        let last = self.cards.len() - 1;
        &self.cards[last]
    }

    /// Sets the hidden flag of the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ConcealError::IndexOutOfRange`] if there is no card at
    /// `index`.
    pub fn set_hidden(&mut self, index: usize, hidden: bool) -> Result<(), ConcealError> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(ConcealError::IndexOutOfRange { index, len })?;
        card.set_hidden(hidden);
        Ok(())
    }

    /// Turns every card face up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.set_hidden(false);
        }
    }

    /// Calculates the score of the deck.
    ///
    /// Each Ace counts 11 unless that would push the total over `limit`, in
    /// which case Aces are demoted to 1 one at a time. A total that is still
    /// over `limit` with every Ace at 1 is returned as is.
    ///
    /// Hidden cards are included.
    #[must_use]
    pub fn score(&self, limit: u16) -> u16 {
        evaluate_cards(&self.cards, limit).0
    }

    /// Calculates the score of the face-up cards only.
    #[must_use]
    pub fn visible_score(&self, limit: u16) -> u16 {
        evaluate_cards(self.cards.iter().filter(|card| !card.is_hidden()), limit).0
    }

    /// Returns whether an Ace is counted as 11 in [`Deck::score`].
    #[must_use]
    pub fn is_soft(&self, limit: u16) -> bool {
        evaluate_cards(&self.cards, limit).1
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards, bottom first.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the card that the next [`Deck::deal`] would move.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns whether the deck holds a card of the given rank and suit.
    #[must_use]
    pub fn contains(&self, rank: Rank, suit: Suit) -> bool {
        self.cards.iter().any(|card| card.is(rank, suit))
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Deck {
    /// Builds a deck from cards listed bottom first.
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
