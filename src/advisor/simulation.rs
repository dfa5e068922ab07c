//! Monte Carlo playouts against the remaining shoe.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::card::{Card, Rank};
use crate::hand::evaluate;
use crate::options::AdvisorOptions;
use crate::shoe::Shoe;

use super::{Action, Estimate, Recommendation, Rule};

/// Plays out a hand by drawing from a snapshot of the shoe's composition.
///
/// Draws are made with replacement: every draw sees the same composition,
/// and the shoe itself is never touched.
#[derive(Debug, Clone)]
pub struct Simulator {
    start: Vec<Rank>,
    draws: WeightedIndex<u32>,
    stop_value: u32,
}

impl Simulator {
    /// Creates a simulator for `cards` against the current contents of `shoe`.
    ///
    /// Every trial draws at least one card, then stops once the hand reaches
    /// `stop_value` (capped at 21) or goes over 21. Returns `None` if the
    /// shoe is empty.
    #[must_use]
    pub fn new(cards: &[Card], shoe: &Shoe, stop_value: u8) -> Option<Self> {
        let weights = shoe.rank_counts().map(|count| count as u32);
        let draws = WeightedIndex::new(weights).ok()?;

        Some(Self {
            start: cards.iter().map(|card| card.rank).collect(),
            draws,
            stop_value: u32::from(stop_value).min(21),
        })
    }

    /// Plays one trial and returns the final hand value.
    fn play<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let mut ranks = self.start.clone();

        loop {
            ranks.push(Rank::ALL[self.draws.sample(rng)]);
            let value = evaluate(ranks.iter().copied());
            if value >= self.stop_value {
                return value;
            }
        }
    }

    /// Fraction of `trials` playouts whose value satisfies `outcome`.
    fn frequency<R, F>(&self, trials: u32, rng: &mut R, outcome: F) -> f64
    where
        R: Rng + ?Sized,
        F: Fn(u32) -> bool,
    {
        let trials = trials.max(1);
        let hits = (0..trials).filter(|_| outcome(self.play(rng))).count();

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for trial counts"
        )]
        let frequency = hits as f64 / f64::from(trials);
        frequency
    }

    /// Estimates the probability of going over 21 before stopping.
    pub fn bust_probability<R: Rng + ?Sized>(&self, trials: u32, rng: &mut R) -> f64 {
        self.frequency(trials, rng, |value| value > 21)
    }

    /// Estimates the probability of stopping on exactly 21.
    pub fn win_probability<R: Rng + ?Sized>(&self, trials: u32, rng: &mut R) -> f64 {
        self.frequency(trials, rng, |value| value == 21)
    }
}

/// Decides a hand worth 12 through 20 by simulation.
///
/// The bust and win estimates come from two independent passes.
pub(super) fn advise<R: Rng + ?Sized>(
    cards: &[Card],
    value: u32,
    shoe: &Shoe,
    options: &AdvisorOptions,
    rng: &mut R,
) -> Recommendation {
    let Some(simulator) = Simulator::new(cards, shoe, options.stop_value) else {
        log::warn!("shoe is empty, nothing left to draw");
        return Recommendation::decided(Action::Stand, value, Rule::ShoeExhausted);
    };

    let bust_probability = simulator.bust_probability(options.trials, rng);
    let win_probability = simulator.win_probability(options.trials, rng);
    log::debug!("bust probability {bust_probability:.3}, win probability {win_probability:.3}");

    let (action, rule) = if bust_probability > options.bust_threshold {
        (Action::Stand, Rule::BustRisk)
    } else if options
        .win_threshold
        .is_some_and(|threshold| win_probability > threshold)
    {
        (Action::Hit, Rule::WinChance)
    } else {
        (Action::Hit, Rule::Default)
    };

    Recommendation {
        action,
        value,
        rule,
        estimate: Some(Estimate::Simulation {
            bust_probability,
            win_probability,
        }),
    }
}
