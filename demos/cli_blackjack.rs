//! CLI blackjack demo.
//!
//! Run with `RUST_LOG=bjshoe=debug` to follow the engine's round logging.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjshoe::{Card, FormattedCards, Game, GameOptions, Suit, Table};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let decks = prompt_number("Decks (1-8): ").unwrap_or(3.0) as u8;

    let mut game = match Game::new(GameOptions::default().with_decks(decks), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Config error: {err}");
            return;
        }
    };

    game.on_end(|end| {
        println!();
        println!("Round over: {}", end.state);
        println!("Dealer: {}", format_side(&end.dealer));
        println!("Player: {}", format_side(&end.player));
        if let Some(stake) = end.stake {
            println!("Bet {} | payout {}", stake.bet, stake.payout);
        }
    });

    loop {
        let Some(bet) = prompt_number("Bet amount (0 to quit): ") else {
            break;
        };

        if bet <= 0.0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        let table = match game.start() {
            Ok(table) => table,
            Err(err) => {
                println!("Start error: {err}");
                continue;
            }
        };
        print_table(&table);

        while game.is_round_in_progress() {
            let double = if game.can_double_down() {
                " [d]ouble"
            } else {
                ""
            };
            let action = prompt_line(&format!("[h]it [s]tand{double}: "));

            match action.as_str() {
                "h" | "hit" => {
                    if let Some(table) = game.hit() {
                        if game.is_round_in_progress() {
                            print_table(&table);
                        }
                    }
                }
                "s" | "stand" => game.stand(),
                "d" | "double" => {
                    if let Err(err) = game.double_down() {
                        println!("Action error: {err}");
                    }
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        println!("Shoe: {} cards remaining", game.cards_remaining());
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_number(prompt: &str) -> Option<f64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<f64>() {
            Ok(value) if value >= 0.0 => return Some(value),
            _ => println!("Please enter a number."),
        }
    }
}

fn print_table(table: &Table) {
    println!();
    if let Some(card) = table.dealer.cards.first() {
        println!("Dealer: {} ??", format_card(card));
    }
    println!("Player: {}", format_side(&table.player));
    println!();
}

fn format_side(side: &FormattedCards) -> String {
    if side.cards.is_empty() {
        return "(no cards)".to_string();
    }
    let cards = side
        .cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{cards} (total {})", side.total)
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
