//! Property tests for scoring, shuffling and the opening deal.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{
    Card, CardValue, DECK_SIZE, Deck, GameOptions, Rank, Suit, deal_opening_hands, has_winner,
};

/// Best total over every way of valuing the Aces in `ranks`.
fn brute_force_score(ranks: &[Rank], limit: u16) -> u16 {
    let mut fixed = 0;
    let mut aces = 0;
    for rank in ranks {
        match rank.base_value() {
            CardValue::Points(points) => fixed += u16::from(points),
            CardValue::Ace => aces += 1,
        }
    }

    let totals = (0..=aces).map(|high| {
        fixed + high * CardValue::ACE_HIGH + (aces - high) * CardValue::ACE_LOW
    });
    totals
        .clone()
        .filter(|&total| total <= limit)
        .max()
        .unwrap_or_else(|| totals.min().unwrap_or(fixed))
}

fn rank_strategy() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

proptest! {
    /// Greedy Ace demotion always finds the best total.
    #[test]
    fn prop_score_matches_brute_force(
        ranks in prop::collection::vec(rank_strategy(), 0..12),
        limit in 10u16..=40,
    ) {
        let deck: Deck = ranks
            .iter()
            .zip(Suit::ALL.iter().cycle())
            .map(|(&rank, &suit)| Card::new(rank, suit))
            .collect();

        prop_assert_eq!(deck.score(limit), brute_force_score(&ranks, limit));
    }

    /// Concealment never changes the score.
    #[test]
    fn prop_hidden_flags_do_not_change_score(
        ranks in prop::collection::vec(rank_strategy(), 1..8),
        hide in any::<prop::sample::Index>(),
    ) {
        let mut deck: Deck = ranks
            .iter()
            .map(|&rank| Card::new(rank, Suit::Spades))
            .collect();
        let before = deck.score(21);

        deck.set_hidden(hide.index(ranks.len()), true).unwrap();
        prop_assert_eq!(deck.score(21), before);
    }

    /// Shuffling only reorders.
    #[test]
    fn prop_shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::populated();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        let seen: HashSet<(Rank, Suit)> =
            deck.iter().map(|card| (card.rank(), card.suit())).collect();
        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(seen.len(), DECK_SIZE);
    }

    /// The opening deal never hands out a finished hand, and every card stays
    /// in exactly one place.
    #[test]
    fn prop_opening_deal_conserves_cards(seed in any::<u64>()) {
        let options = GameOptions::default();
        let mut pile = Deck::populated();
        pile.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let (mut dealer, mut player) = (Deck::new(), Deck::new());

        let attempts = deal_opening_hands(&mut pile, &mut dealer, &mut player, &options).unwrap();

        prop_assert!(!has_winner(&player, &dealer, &options));
        prop_assert_eq!(pile.len() + 4 * attempts, DECK_SIZE);

        let held: HashSet<(Rank, Suit)> = pile
            .iter()
            .chain(&dealer)
            .chain(&player)
            .map(|card| (card.rank(), card.suit()))
            .collect();
        prop_assert_eq!(held.len(), pile.len() + dealer.len() + player.len());
    }
}
