//! Hit/stand advice for the current hand.

use core::fmt;

use rand::Rng;

use crate::card::Card;
use crate::hand::hand_value;
use crate::options::{AdvisorOptions, Strategy};
use crate::shoe::Shoe;

mod composition;
mod simulation;

pub use composition::{high_chance, low_chance};
pub use simulation::Simulator;

/// Recommended action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Stop drawing.
    Stand,
    /// The hand is already over 21.
    Bust,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Bust => "bust",
        })
    }
}

/// The policy branch that produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The hand is worth exactly 21.
    TwentyOne,
    /// The hand is worth more than 21.
    Busted,
    /// No single card can bust a hand worth 11 or less.
    SafeHit,
    /// Simulated bust probability is above the threshold.
    BustRisk,
    /// Simulated probability of reaching 21 is above the alternative threshold.
    WinChance,
    /// Simulated bust probability is at or below the threshold.
    Default,
    /// More low cards than high cards remain.
    LowCardsDominate,
    /// At least as many high cards as low cards remain.
    HighCardsDominate,
    /// Nothing is left to draw.
    ShoeExhausted,
}

/// Figures an estimation strategy computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Results of the two simulation passes.
    Simulation {
        /// Fraction of trials that went over 21 before stopping.
        bust_probability: f64,
        /// Fraction of trials that stopped on exactly 21.
        win_probability: f64,
    },
    /// Remaining low and high card counts.
    Composition {
        /// Remaining aces through nines.
        low_chance: usize,
        /// Remaining tens and face cards.
        high_chance: usize,
    },
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Simulation {
                bust_probability,
                win_probability,
            } => write!(
                f,
                "bust chance {}%, chance of 21 {}%",
                percent(bust_probability),
                percent(win_probability)
            ),
            Self::Composition {
                low_chance,
                high_chance,
            } => write!(f, "{low_chance} low cards, {high_chance} high cards left"),
        }
    }
}

/// Advice for a hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    /// The recommended action.
    pub action: Action,
    /// The hand value the advice was computed for.
    pub value: u32,
    /// The policy branch that fired.
    pub rule: Rule,
    /// Strategy output, if a strategy ran.
    pub estimate: Option<Estimate>,
}

impl Recommendation {
    const fn decided(action: Action, value: u32, rule: Rule) -> Self {
        Self {
            action,
            value,
            rule,
            estimate: None,
        }
    }
}

#[cfg(feature = "std")]
fn percent(probability: f64) -> u8 {
    (probability * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn percent(probability: f64) -> u8 {
    libm::round(probability * 100.0).clamp(0.0, 100.0) as u8
}

/// Recommends an action for `cards` given what is left in `shoe`.
///
/// Hands worth 21 stand, hands over 21 are bust and hands worth 11 or less
/// always hit. Anything in between is decided by the configured
/// [`Strategy`]. Neither `cards` nor `shoe` is modified.
///
/// ```
/// use bjassist::{Action, AdvisorOptions, Card, Rank, Shoe, Suit, suggest};
/// use rand::SeedableRng;
///
/// let shoe = Shoe::new(8);
/// let cards = [Card::new(Rank::Ace, Suit::Clubs), Card::new(Rank::King, Suit::Clubs)];
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
///
/// let advice = suggest(&cards, &shoe, &AdvisorOptions::default(), &mut rng);
/// assert_eq!(advice.action, Action::Stand);
/// ```
pub fn suggest<R: Rng + ?Sized>(
    cards: &[Card],
    shoe: &Shoe,
    options: &AdvisorOptions,
    rng: &mut R,
) -> Recommendation {
    let value = hand_value(cards);

    let recommendation = match value {
        21 => Recommendation::decided(Action::Stand, value, Rule::TwentyOne),
        22.. => Recommendation::decided(Action::Bust, value, Rule::Busted),
        ..=11 => Recommendation::decided(Action::Hit, value, Rule::SafeHit),
        _ => match options.strategy.resolve(shoe.decks()) {
            Strategy::Composition => composition::advise(value, shoe),
            Strategy::Simulation | Strategy::Auto => {
                simulation::advise(cards, value, shoe, options, rng)
            }
        },
    };

    log::info!(
        "hand {value}: {} ({:?})",
        recommendation.action,
        recommendation.rule
    );
    recommendation
}
