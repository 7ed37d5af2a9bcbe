//! Interactive command-line demo.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    ActionError, BetError, CardView, Game, GameOptions, GameState, HandView, Outcome, RoundResult,
    SeenCard, Turn,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Twenty-one (type 'help' at the action prompt, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        let points = game.balance();
        if points == 0 {
            println!("You are out of points. Game over.");
            break;
        }

        let Some(bet) = prompt_isize(&format!("You have {points} points. Bet (q to quit): ")) else {
            println!("Goodbye.");
            break;
        };

        match game.place_bet(bet) {
            Ok(()) => {}
            Err(BetError::NotEnoughCards) => {
                println!("Deck is running low, reshuffling.");
                game.reshuffle();
                continue;
            }
            Err(err) => {
                println!("Bet rejected: {err}");
                continue;
            }
        }

        print_dealer(&game.peek_dealer_hand(false));
        print_player(&game.peek_player_hand());

        while game.state() == GameState::InProgress {
            let Some(command) = prompt_line("What do you want to do? ") else {
                println!("Goodbye.");
                return;
            };
            match command.as_str() {
                "h" | "hit" => match game.hit() {
                    Ok(Turn::Continue { card, total }) => {
                        println!("You drew the {card}. Your total is {total}.\n");
                    }
                    Ok(Turn::Finished(result)) => {
                        println!("You busted!\n");
                        print_result(&result);
                    }
                    Err(ActionError::NoCards) => {
                        println!("The deck is empty, reshuffling.\n");
                        game.reshuffle();
                    }
                    Err(err) => println!("Hit failed: {err}"),
                },
                "s" | "stay" => match game.stay() {
                    Ok(result) => {
                        println!("You have finished your turn, now the dealer will go.\n");
                        print_result(&result);
                    }
                    Err(ActionError::NoCards) => {
                        println!("The deck is empty, reshuffling.\n");
                        game.reshuffle();
                    }
                    Err(err) => println!("Stay failed: {err}"),
                },
                "c" => print_player(&game.peek_player_hand()),
                "d" => print_dealer(&game.peek_dealer_hand(false)),
                "q" | "quit" => return,
                "help" => print_help(),
                _ => println!("Enter a valid command. Type 'help' to see your options.\n"),
            }
        }
    }
}

/// Reads one trimmed, lowercased line. Returns `None` at end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_isize(prompt: &str) -> Option<isize> {
    loop {
        let input = prompt_line(prompt)?;
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<isize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_help() {
    println!("How to play:");
    println!("    h - hit");
    println!("    s - stay");
    println!("    c - show the cards in your hand");
    println!("    d - show the cards the dealer has");
    println!("    q - quit the game");
    println!();
}

fn print_player(hand: &HandView) {
    println!("your hand");
    println!("-----------");
    for card in hand.face_up() {
        println!("{}", format_card(card));
    }
    println!();
    if let Some(total) = hand.total {
        println!("your hand total: {total}");
    }
    println!();
}

fn print_dealer(hand: &HandView) {
    println!("dealer hand");
    println!("-----------");
    for seen in &hand.cards {
        match seen {
            SeenCard::FaceDown => println!("-- face down --"),
            SeenCard::FaceUp(card) => println!("{}", format_card(card)),
        }
    }
    println!();
}

fn print_result(result: &RoundResult) {
    println!("dealer's final hand");
    println!("-----------");
    for card in &result.dealer_cards {
        println!("{}", format_card(card));
    }
    println!();

    match result.outcome {
        Outcome::PlayerWin => println!("**You won!**"),
        Outcome::PlayerLoss => println!("**You lost!**"),
        Outcome::Draw => println!("Draw"),
    }
    println!("Your total is {}", result.player_total);
    println!("The dealer's total is {}", result.dealer_total);
    println!("Net {} points, balance {}\n", result.net, result.balance);
}

fn format_card(card: &CardView) -> String {
    card.card().to_string()
}
