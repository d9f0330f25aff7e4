//! Rules engine tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{
    Card, DealError, Deck, GameOptions, Outcome, Rank, Suit, deal_opening_hands, decide_outcome,
    has_winner, outcome_for_scores,
};

fn hand(cards: &[(Rank, Suit)]) -> Deck {
    cards
        .iter()
        .map(|&(rank, suit)| Card::new(rank, suit))
        .collect()
}

#[test]
fn outcome_examples() {
    assert_eq!(outcome_for_scores(18, 19, 21), Outcome::PlayerWins);
    assert_eq!(outcome_for_scores(22, 20, 21), Outcome::PlayerWins);
    assert_eq!(outcome_for_scores(20, 23, 21), Outcome::DealerWinsByDefault);
    assert_eq!(outcome_for_scores(20, 18, 21), Outcome::DealerWins);
    assert_eq!(outcome_for_scores(21, 19, 21), Outcome::DealerWins);
    assert_eq!(outcome_for_scores(17, 21, 21), Outcome::FlawlessVictory);
}

#[test]
fn player_bust_beats_dealer_bust() {
    assert_eq!(outcome_for_scores(25, 23, 21), Outcome::DealerWinsByDefault);
}

#[test]
fn player_on_the_limit_wins_even_against_dealer_on_the_limit() {
    let outcome = outcome_for_scores(21, 21, 21);
    assert_eq!(outcome, Outcome::FlawlessVictory);
    assert!(outcome.player_won());
}

#[test]
fn equal_scores_below_the_limit_push() {
    let outcome = outcome_for_scores(18, 18, 21);
    assert_eq!(outcome, Outcome::Push);
    assert!(!outcome.player_won());
    assert!(!outcome.dealer_won());
}

#[test]
fn outcome_uses_configured_limit() {
    assert_eq!(outcome_for_scores(20, 25, 21), Outcome::DealerWinsByDefault);
    assert_eq!(outcome_for_scores(20, 25, 31), Outcome::PlayerWins);
    assert_eq!(outcome_for_scores(20, 31, 31), Outcome::FlawlessVictory);
}

#[test]
fn decide_outcome_scores_real_hands() {
    let options = GameOptions::default();
    let dealer = hand(&[(Rank::King, Suit::Hearts), (Rank::Eight, Suit::Clubs)]);
    let player = hand(&[
        (Rank::Ace, Suit::Spades),
        (Rank::Ace, Suit::Diamonds),
        (Rank::Seven, Suit::Hearts),
    ]);

    assert_eq!(
        decide_outcome(&dealer, &player, &options),
        Outcome::PlayerWins
    );

    let busted = hand(&[
        (Rank::Ten, Suit::Spades),
        (Rank::Nine, Suit::Diamonds),
        (Rank::Five, Suit::Hearts),
    ]);
    assert_eq!(
        decide_outcome(&dealer, &busted, &options),
        Outcome::DealerWinsByDefault
    );
    assert!(decide_outcome(&dealer, &busted, &options).dealer_won());
}

#[test]
fn has_winner_checks_both_hands() {
    let options = GameOptions::default();
    let low = hand(&[(Rank::Five, Suit::Hearts), (Rank::Six, Suit::Clubs)]);
    let natural = hand(&[(Rank::Ace, Suit::Spades), (Rank::Queen, Suit::Hearts)]);
    let bust = hand(&[
        (Rank::King, Suit::Spades),
        (Rank::Queen, Suit::Clubs),
        (Rank::Two, Suit::Diamonds),
    ]);

    assert!(!has_winner(&low, &low, &options));
    assert!(has_winner(&natural, &low, &options));
    assert!(has_winner(&low, &natural, &options));
    assert!(has_winner(&low, &bust, &options));
    assert!(!has_winner(&natural, &low, &options.with_win_limit(22)));
}

#[test]
fn opening_deal_alternates_dealer_first() {
    let options = GameOptions::default();
    // Dealt from the back: dealer 9H, player 8C, dealer 7D, player 6S.
    let mut pile = hand(&[
        (Rank::Two, Suit::Clubs),
        (Rank::Six, Suit::Spades),
        (Rank::Seven, Suit::Diamonds),
        (Rank::Eight, Suit::Clubs),
        (Rank::Nine, Suit::Hearts),
    ]);
    let mut dealer = hand(&[(Rank::King, Suit::Spades)]);
    let mut player = hand(&[(Rank::Queen, Suit::Spades)]);

    let attempts = deal_opening_hands(&mut pile, &mut dealer, &mut player, &options).unwrap();

    assert_eq!(attempts, 1);
    assert_eq!(pile.len(), 1);
    assert_eq!(
        dealer.iter().map(Card::rank).collect::<Vec<_>>(),
        [Rank::Nine, Rank::Seven]
    );
    assert_eq!(
        player.iter().map(Card::rank).collect::<Vec<_>>(),
        [Rank::Eight, Rank::Six]
    );
}

#[test]
fn opening_deal_retries_without_refilling_the_pile() {
    let options = GameOptions::default();
    // First attempt gives the player Ace + King; second attempt is clean.
    let mut pile = hand(&[
        (Rank::Six, Suit::Spades),
        (Rank::Seven, Suit::Diamonds),
        (Rank::Eight, Suit::Clubs),
        (Rank::Nine, Suit::Hearts),
        (Rank::Ace, Suit::Diamonds),
        (Rank::Five, Suit::Clubs),
        (Rank::King, Suit::Spades),
        (Rank::Ace, Suit::Hearts),
    ]);
    let (mut dealer, mut player) = (Deck::new(), Deck::new());

    let attempts = deal_opening_hands(&mut pile, &mut dealer, &mut player, &options).unwrap();

    assert_eq!(attempts, 2);
    assert!(pile.is_empty());
    assert_eq!(player.score(21), 14);
    assert_eq!(dealer.score(21), 16);
    assert!(!has_winner(&player, &dealer, &options));
}

#[test]
fn opening_deal_fails_when_the_pile_runs_out() {
    let options = GameOptions::default();
    let mut pile = hand(&[
        (Rank::Ten, Suit::Spades),
        (Rank::Ace, Suit::Hearts),
        (Rank::Two, Suit::Clubs),
    ]);
    let (mut dealer, mut player) = (Deck::new(), Deck::new());

    assert_eq!(
        deal_opening_hands(&mut pile, &mut dealer, &mut player, &options).unwrap_err(),
        DealError::EmptyPile
    );
}

#[test]
fn opening_deal_never_leaves_a_finished_hand() {
    let options = GameOptions::default();

    for seed in 0..200 {
        let mut pile = Deck::populated();
        pile.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let (mut dealer, mut player) = (Deck::new(), Deck::new());

        let attempts = deal_opening_hands(&mut pile, &mut dealer, &mut player, &options).unwrap();

        assert_eq!(player.len(), 2);
        assert_eq!(dealer.len(), 2);
        assert!(!has_winner(&player, &dealer, &options));
        assert_eq!(pile.len() + 4 * attempts, 52);
    }
}
