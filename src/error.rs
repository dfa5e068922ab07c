//! Error types for shoe and scan operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while updating the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The card has no copies left in the shoe.
    #[error("{card} is not available in the shoe")]
    CardNotAvailable {
        /// The card that was requested.
        card: Card,
    },
    /// More copies of a card were supplied than the shoe's decks hold.
    #[error("more copies of {card} than the shoe's decks contain")]
    TooManyCopies {
        /// The card that exceeded its limit.
        card: Card,
    },
}

/// Errors that can occur while parsing a scanned card payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The payload is empty.
    #[error("card payload is empty")]
    Empty,
    /// The payload has a rank but no suit.
    #[error("card payload is missing a suit")]
    MissingSuit,
    /// The rank token is not recognized.
    #[error("unknown card rank")]
    UnknownRank,
    /// The suit token is not recognized.
    #[error("unknown card suit")]
    UnknownSuit,
    /// The payload has extra tokens after the suit.
    #[error("unexpected input after card suit")]
    TrailingInput,
}

/// Errors that can occur while scanning a card into the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The payload could not be decoded into a card.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
    /// The card could not be taken from the shoe.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}
