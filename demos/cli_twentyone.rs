//! CLI "21" example.
//!
//! Set `RUST_LOG=twentyone=debug` to watch the engine's events.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use twentyone::{Card, Deck, Game, GameOptions, GameState, Outcome, RoundResult};

const CLEAR_SCREEN: &str = "\u{1b}[H\u{1b}[2J";
const CARD_ROWS: usize = 5;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    let limit = game.options().win_limit;

    loop {
        clear_screen();
        println!("Playing with score limit {limit}.");
        println!("Dealing cards...");

        if let Err(err) = game.start_round() {
            println!("Deal error: {err}");
            break;
        }

        print_table(&game);

        while game.state() == GameState::PlayerTurn {
            let Some(another) = yes_or_no("Do you want another card?") else {
                return;
            };

            let result = if another {
                clear_screen();
                println!("\n");
                game.hit().map(|_| ())
            } else {
                game.stand()
            };

            if let Err(err) = result {
                println!("Action error: {err}");
                break;
            }

            if another {
                print_table(&game);
            }
        }

        if game.state() == GameState::DealerTurn {
            if game.player_score() <= limit {
                println!("Dealer's turn.\nDealing cards....");
            }
            if let Err(err) = game.dealer_play() {
                println!("Dealer error: {err}");
            }
        }

        match game.showdown() {
            Ok(result) => {
                if !result.player_bust {
                    println!("Dealer's hand:");
                    print_hand(game.dealer_hand());
                    println!("Dealer score: {}", result.dealer_score);
                    println!("Your score: {}", result.player_score);
                }
                println!("{}", outcome_message(&result));
            }
            Err(err) => println!("Showdown error: {err}"),
        }

        println!("Game over.");
        game.clear_round();

        if yes_or_no("Would you like to play again?") != Some(true) {
            break;
        }
    }
}

fn clear_screen() {
    print!("{CLEAR_SCREEN}");
    let _ = io::stdout().flush();
}

/// Asks until the user answers y or n. `None` means stdin was closed.
fn yes_or_no(prompt: &str) -> Option<bool> {
    print!("\n{prompt}\n> ");
    let _ = io::stdout().flush();

    loop {
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        match input.trim().chars().next() {
            Some('y' | 'Y') => return Some(true),
            Some('n' | 'N') => return Some(false),
            _ => {
                print!("Invalid input.\n> ");
                let _ = io::stdout().flush();
            }
        }
    }
}

fn print_table(game: &Game) {
    let limit = game.options().win_limit;

    println!("Dealer's hand:");
    print_hand(game.dealer_hand());
    println!("[Dealer shows: {}]", game.dealer_hand().visible_score(limit));

    println!("Your hand:");
    print_hand(game.player_hand());
    println!("[Your score: {}]\n", game.player_score());
}

fn print_hand(hand: &Deck) {
    if hand.is_empty() {
        println!("(no cards)");
        return;
    }

    let art: Vec<[String; CARD_ROWS]> = hand.iter().map(card_art).collect();
    for row in 0..CARD_ROWS {
        let line = art
            .iter()
            .map(|card| card[row].as_str())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");
    }
}

fn card_art(card: &Card) -> [String; CARD_ROWS] {
    if card.is_hidden() {
        return [
            ".-----.".to_string(),
            "|/////|".to_string(),
            "|/////|".to_string(),
            "|/////|".to_string(),
            "'-----'".to_string(),
        ];
    }

    let rank = card.rank().symbol();
    let suit = card.suit().symbol();
    [
        ".-----.".to_string(),
        format!("|{rank:<5}|"),
        format!("|  {suit}  |"),
        format!("|{rank:>5}|"),
        "'-----'".to_string(),
    ]
}

const fn outcome_message(result: &RoundResult) -> &'static str {
    match result.outcome {
        Outcome::PlayerWins if result.dealer_bust => "Dealer went too high! You win!",
        Outcome::PlayerWins => "Player has won!",
        Outcome::FlawlessVictory => "Player has won!\nFLAWLESS VICTORY.",
        Outcome::DealerWins => "Dealer has won!",
        Outcome::DealerWinsByDefault => "You went too high! Dealer wins by default.",
        Outcome::Push => "Push. Nobody wins.",
    }
}
