//! Hand valuation and the advised player's hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::error::ShoeError;
use crate::shoe::Shoe;

/// Evaluates ranks into the best hand value.
///
/// Every ace starts at 11; while the total is over 21 and an ace is still
/// counted at 11, one ace drops to 1. Values past `u32::MAX` saturate.
pub(crate) fn evaluate<I>(ranks: I) -> u32
where
    I: IntoIterator<Item = Rank>,
{
    let mut value: u64 = 0;
    let mut aces: u64 = 0;

    for rank in ranks {
        if rank == Rank::Ace {
            aces = aces.saturating_add(1);
        }
        value = value.saturating_add(u64::from(rank.value()));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Returns the best blackjack value of `cards`.
///
/// Aces are counted as 11 if possible without busting, otherwise as 1. An
/// empty slice is worth 0.
///
/// ```
/// use bjassist::{Card, Rank, Suit, hand_value};
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Ace, Suit::Spades),
/// ];
/// assert_eq!(hand_value(&cards), 12);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u32 {
    evaluate(cards.iter().map(|card| card.rank))
}

/// The advised player's hand.
///
/// Cards only enter through [`Hand::take`], which removes them from the shoe
/// at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Takes `card` out of `shoe` and appends it to the hand.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::CardNotAvailable`] if the shoe has no copy of the
    /// card. The hand is left untouched in that case.
    pub fn take(&mut self, card: Card, shoe: &mut Shoe) -> Result<(), ShoeError> {
        shoe.remove(card)?;
        self.cards.push(card);
        log::debug!("{card} added to hand, value now {}", self.value());
        Ok(())
    }

    /// Returns the cards in the hand, in the order they were added.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    ///
    /// Cards are not returned to the shoe.
    pub fn reset(&mut self) {
        self.cards.clear();
    }
}
