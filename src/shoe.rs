//! Shoe inventory.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// Cards still available to be dealt, counted per `(rank, suit)`.
///
/// The shoe only shrinks: cards leave through [`Shoe::remove`] and are never
/// put back within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    /// Remaining copies per card. Cards with no copies left are kept at 0.
    counts: HashMap<Card, u8>,
    /// Number of decks the shoe was built from.
    decks: u8,
}

impl Shoe {
    /// Creates a full shoe of `decks` standard 52-card decks.
    #[must_use]
    pub fn new(decks: u8) -> Self {
        let mut counts = HashMap::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                counts.insert(Card::new(rank, suit), decks);
            }
        }

        Self { counts, decks }
    }

    /// Creates a shoe holding exactly `cards`, sized for `decks` decks.
    ///
    /// Useful for advising against a known partial shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::TooManyCopies`] if any card appears more than
    /// `decks` times.
    pub fn from_cards<I>(decks: u8, cards: I) -> Result<Self, ShoeError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut shoe = Self::new(0);
        shoe.decks = decks;

        for card in cards {
            let count = shoe.counts.entry(card).or_insert(0);
            if *count >= decks {
                return Err(ShoeError::TooManyCopies { card });
            }
            *count += 1;
        }

        Ok(shoe)
    }

    /// Returns the number of decks the shoe was built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the remaining copies of a specific card.
    #[must_use]
    pub fn count(&self, card: Card) -> u8 {
        self.counts.get(&card).copied().unwrap_or(0)
    }

    /// Returns the remaining copies of `rank` across all suits.
    #[must_use]
    pub fn remaining_count(&self, rank: Rank) -> usize {
        Suit::ALL
            .into_iter()
            .map(|suit| usize::from(self.count(Card::new(rank, suit))))
            .sum()
    }

    /// Returns the remaining copies of every rank, indexed by [`Rank::index`].
    #[must_use]
    pub fn rank_counts(&self) -> [usize; 13] {
        Rank::ALL.map(|rank| self.remaining_count(rank))
    }

    /// Removes one copy of `card`.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::CardNotAvailable`] if no copy is left. The shoe is
    /// unchanged in that case.
    pub fn remove(&mut self, card: Card) -> Result<(), ShoeError> {
        match self.counts.get_mut(&card) {
            Some(count) if *count > 0 => {
                *count -= 1;
                log::debug!("{card} removed from shoe, {count} left");
                Ok(())
            }
            _ => {
                log::warn!("{card} requested but none left in the shoe");
                Err(ShoeError::CardNotAvailable { card })
            }
        }
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().map(|&count| usize::from(count)).sum()
    }

    /// Returns whether the shoe has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&count| count == 0)
    }
}
