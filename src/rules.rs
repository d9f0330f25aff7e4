//! Round rules: terminal checks, verdicts and the opening deal.

use tracing::debug;

use crate::deck::Deck;
use crate::error::DealError;
use crate::options::GameOptions;
use crate::result::Outcome;

/// Returns whether either hand has reached the win limit.
///
/// A `true` result means no more cards should be dealt to this pair: the
/// opening deal is redone, or the player's turn ends.
#[must_use]
pub fn has_winner(a: &Deck, b: &Deck, options: &GameOptions) -> bool {
    let limit = options.win_limit;
    a.score(limit) >= limit || b.score(limit) >= limit
}

/// Decides the verdict for two finished hands.
#[must_use]
pub fn decide_outcome(dealer: &Deck, player: &Deck, options: &GameOptions) -> Outcome {
    let limit = options.win_limit;
    outcome_for_scores(dealer.score(limit), player.score(limit), limit)
}

/// Decides the verdict from raw scores.
///
/// A player bust is checked before a dealer bust, and a player on exactly
/// `win_limit` wins regardless of the dealer's score.
///
/// # Example
///
/// ```
/// use twentyone::{Outcome, rules::outcome_for_scores};
///
/// assert_eq!(outcome_for_scores(18, 19, 21), Outcome::PlayerWins);
/// assert_eq!(outcome_for_scores(20, 23, 21), Outcome::DealerWinsByDefault);
/// ```
#[must_use]
pub const fn outcome_for_scores(dealer: u16, player: u16, win_limit: u16) -> Outcome {
    if player > win_limit {
        Outcome::DealerWinsByDefault
    } else if dealer > win_limit {
        Outcome::PlayerWins
    } else if player == win_limit {
        Outcome::FlawlessVictory
    } else if player > dealer {
        Outcome::PlayerWins
    } else if player < dealer || dealer == win_limit {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}

/// Deals the opening hands from `pile`.
///
/// Both hands are cleared and dealt alternately, dealer first, until each
/// holds `options.opening_cards` cards. If either hand already reaches the
/// win limit the deal is thrown away and repeated from the remaining pile.
/// Returns the number of attempts.
///
/// # Errors
///
/// Returns [`DealError::EmptyPile`] if the pile runs out.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use twentyone::{Deck, GameOptions, rules};
///
/// let options = GameOptions::default();
/// let mut pile = Deck::populated();
/// pile.shuffle(&mut ChaCha8Rng::seed_from_u64(3));
///
/// let (mut dealer, mut player) = (Deck::new(), Deck::new());
/// rules::deal_opening_hands(&mut pile, &mut dealer, &mut player, &options).unwrap();
/// assert!(!rules::has_winner(&player, &dealer, &options));
/// ```
pub fn deal_opening_hands(
    pile: &mut Deck,
    dealer: &mut Deck,
    player: &mut Deck,
    options: &GameOptions,
) -> Result<usize, DealError> {
    let mut attempts = 0;

    loop {
        attempts += 1;
        player.clear();
        dealer.clear();

        for _ in 0..options.opening_cards {
            pile.deal(dealer)?;
            pile.deal(player)?;
        }

        // With no opening cards nothing changes between attempts.
        if options.opening_cards == 0 || !has_winner(player, dealer, options) {
            break;
        }

        debug!(
            attempts,
            player_score = player.score(options.win_limit),
            dealer_score = dealer.score(options.win_limit),
            remaining = pile.len(),
            "opening deal reached the limit, redealing"
        );
    }

    Ok(attempts)
}
