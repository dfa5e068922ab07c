//! CLI advisor example.
//!
//! Type commands as the speech recognizer would deliver them (`play`,
//! `scan`, `assist`, `stand`, `thanks`, or their Spanish keywords). `scan`
//! asks for a card payload such as `10 Hearts`. Set `RUST_LOG=debug` to see
//! the advisor's estimates.
//!
//! End the session with `thanks`, or interrupt it with end of input (Ctrl-D);
//! both release the command and card sources. Ctrl-C kills the process
//! without that cleanup.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjassist::{AdvisorOptions, Command, Event, Narrator, Session, Strategy};

/// Prints narration to stdout.
struct Console;

impl Narrator for Console {
    fn narrate(&mut self, event: &Event) {
        println!("{event}");
        if let Event::Advice(advice) = event {
            if let Some(estimate) = advice.estimate {
                println!("  ({estimate})");
            }
        }
    }
}

/// Stands in for the subscribed recognizer and camera; released on drop.
struct Subscription;

impl Drop for Subscription {
    fn drop(&mut self) {
        log::info!("command and card sources released");
        println!("Session closed.");
    }
}

fn main() {
    env_logger::init();

    let decks = prompt_line("Decks in the shoe (default 8): ")
        .and_then(|line| line.parse().ok())
        .unwrap_or(8);
    let options = AdvisorOptions::default()
        .with_decks(decks)
        .with_strategy(Strategy::Auto);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let session = Session::new(options, seed);
    println!(
        "Advising with {:?} on {} deck(s).",
        session.options().strategy.resolve(decks),
        session.options().decks
    );

    let _subscription = Subscription;
    let mut console = Console;
    println!("Hello, let's play! (Ctrl-D to quit)");

    let mut source = || prompt_line("Card (e.g. '10 Hearts', empty if none): ");

    loop {
        let Some(text) = prompt_line("Command: ") else {
            println!("Interrupted.");
            break;
        };
        let Some(command) = Command::parse(&text) else {
            continue;
        };

        match prompt_line(&format!("Did you say '{command}'? (y/n): ")).as_deref() {
            Some("y" | "yes") => {}
            Some(_) => continue,
            None => break,
        }

        match session.handle(command, &mut source) {
            Ok(event) => {
                console.narrate(&event);
                if event.ends_session() {
                    break;
                }
            }
            Err(err) => println!("Scan error: {err}"),
        }

        println!(
            "  [hand: {}, cards left: {}]",
            format_hand(&session),
            session.cards_remaining()
        );
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_owned()),
    }
}

fn format_hand(session: &Session) -> String {
    let hand = session.hand();
    if hand.is_empty() {
        return String::from("empty");
    }

    let cards: Vec<String> = hand.cards().iter().map(ToString::to_string).collect();
    format!("{} = {}", cards.join(", "), hand.value())
}
