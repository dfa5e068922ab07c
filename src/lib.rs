//! A blackjack hit/stand advisor with optional `no_std` support.
//!
//! The crate tracks a continuously depleting multi-deck shoe and the
//! player's hand, and recommends whether to hit or stand using either random
//! playouts against the remaining cards or the remaining low/high card
//! composition. A [`Session`] ties the shoe, the hand and the configured
//! [`AdvisorOptions`] together.
//!
//! # Example
//!
//! ```
//! use bjassist::{AdvisorOptions, Card, Rank, Session, Strategy, Suit};
//!
//! let options = AdvisorOptions::default()
//!     .with_decks(1)
//!     .with_strategy(Strategy::Composition);
//! let session = Session::new(options, 42);
//!
//! session.add_card(Card::new(Rank::Ten, Suit::Hearts)).unwrap();
//! session.add_card(Card::new(Rank::Six, Suit::Spades)).unwrap();
//!
//! let advice = session.assist();
//! assert_eq!(advice.value, 16);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod advisor;
pub mod card;
pub mod command;
pub mod error;
pub mod hand;
pub mod options;
pub mod session;
pub mod shoe;
mod sync;

// Re-export main types
pub use advisor::{Action, Estimate, Recommendation, Rule, Simulator, suggest};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use command::Command;
pub use error::{ParseCardError, ScanError, ShoeError};
pub use hand::{Hand, hand_value};
pub use options::{AdvisorOptions, Strategy};
pub use session::{CardSource, Event, Narrator, Session};
pub use shoe::Shoe;
