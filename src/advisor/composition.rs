//! Low/high card composition of the remaining shoe.

use crate::card::Rank;
use crate::shoe::Shoe;

use super::{Action, Estimate, Recommendation, Rule};

/// Remaining aces through nines.
#[must_use]
pub fn low_chance(shoe: &Shoe) -> usize {
    Rank::ALL
        .into_iter()
        .filter(|rank| !rank.is_high())
        .map(|rank| shoe.remaining_count(rank))
        .sum()
}

/// Remaining tens and face cards.
#[must_use]
pub fn high_chance(shoe: &Shoe) -> usize {
    Rank::ALL
        .into_iter()
        .filter(|rank| rank.is_high())
        .map(|rank| shoe.remaining_count(rank))
        .sum()
}

/// Decides a hand worth 12 through 20 by card composition.
pub(super) fn advise(value: u32, shoe: &Shoe) -> Recommendation {
    let low_chance = low_chance(shoe);
    let high_chance = high_chance(shoe);
    log::debug!("{low_chance} low cards, {high_chance} high cards remaining");

    let (action, rule) = if low_chance > high_chance {
        (Action::Hit, Rule::LowCardsDominate)
    } else {
        (Action::Stand, Rule::HighCardsDominate)
    };

    Recommendation {
        action,
        value,
        rule,
        estimate: Some(Estimate::Composition {
            low_chance,
            high_chance,
        }),
    }
}
