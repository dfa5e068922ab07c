//! Session events and the external collaborators that consume or feed them.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::advisor::{Action, Recommendation};
use crate::card::Card;

/// Outcome of a handled command, ready to be narrated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The advisor is ready to play.
    Ready,
    /// A scanned card was added to the hand.
    CardAdded(Card),
    /// The scanner found no card.
    NoCard,
    /// Advice for the current hand. A bust hand has already been cleared.
    Advice(Recommendation),
    /// The player stood and the hand was cleared.
    Stood,
    /// The player ended the session.
    Farewell,
}

impl Event {
    /// Returns whether the session should stop listening for commands.
    #[must_use]
    pub const fn ends_session(&self) -> bool {
        matches!(self, Self::Farewell)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("Hello, I am ready to help."),
            Self::CardAdded(card) => write!(f, "The card is the {card}."),
            Self::NoCard => f.write_str("I could not find a card."),
            Self::Advice(advice) => {
                write!(f, "Your score is {}. ", advice.value)?;
                match advice.action {
                    Action::Bust => f.write_str("Sorry, you have lost."),
                    action => write!(f, "My suggestion is to {action}."),
                }
            }
            Self::Stood => f.write_str("You chose to stand. Good luck!"),
            Self::Farewell => f.write_str("Goodbye, have a nice day."),
        }
    }
}

/// Supplies decoded card payloads, e.g. from a camera and QR decoder.
pub trait CardSource {
    /// Captures and decodes one card payload such as `"10 Hearts"`.
    ///
    /// Returns `None` if nothing could be decoded.
    fn scan(&mut self) -> Option<String>;
}

impl<F> CardSource for F
where
    F: FnMut() -> Option<String>,
{
    fn scan(&mut self) -> Option<String> {
        self()
    }
}

/// Reports events to the player, e.g. through speech synthesis.
pub trait Narrator {
    /// Narrates one event.
    fn narrate(&mut self, event: &Event);
}
