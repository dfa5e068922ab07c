//! Advisory session and its state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Rank;
use crate::hand::Hand;
use crate::options::AdvisorOptions;
use crate::shoe::Shoe;

mod commands;
pub mod event;

pub use event::{CardSource, Event, Narrator};

/// An advisory session for one player at one shoe.
///
/// The session owns the shoe and the player's hand. Cards move from the shoe
/// into the hand as they are scanned; the hand is cleared on stand or bust
/// while the shoe keeps depleting until the session ends.
pub struct Session {
    /// Session options.
    options: AdvisorOptions,
    /// Cards not yet dealt.
    shoe: Mutex<Shoe>,
    /// The advised player's hand.
    hand: Mutex<Hand>,
    /// Random number generator for simulations.
    rng: Mutex<ChaCha8Rng>,
}

impl Session {
    /// Creates a new session with a full shoe and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjassist::{AdvisorOptions, Session};
    ///
    /// let session = Session::new(AdvisorOptions::default().with_decks(1), 42);
    /// assert_eq!(session.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: AdvisorOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks);
        Self::with_shoe(options, shoe, seed)
    }

    /// Creates a session that advises against an existing shoe.
    #[must_use]
    pub fn with_shoe(options: AdvisorOptions, shoe: Shoe, seed: u64) -> Self {
        log::info!(
            "session started: {} deck(s), {} cards, {:?} strategy",
            shoe.decks(),
            shoe.len(),
            options.strategy
        );

        Self {
            options,
            shoe: Mutex::new(shoe),
            hand: Mutex::new(Hand::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &AdvisorOptions {
        &self.options
    }

    /// Returns a clone of the player's hand.
    pub fn hand(&self) -> Hand {
        self.hand.lock().clone()
    }

    /// Returns the value of the player's hand.
    pub fn hand_value(&self) -> u32 {
        self.hand.lock().value()
    }

    /// Returns a clone of the shoe.
    pub fn shoe(&self) -> Shoe {
        self.shoe.lock().clone()
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.lock().len()
    }

    /// Returns the remaining copies of `rank` in the shoe.
    pub fn remaining_count(&self, rank: Rank) -> usize {
        self.shoe.lock().remaining_count(rank)
    }

    /// Clears the hand for a new round. Cards stay out of the shoe.
    pub fn reset(&self) {
        self.hand.lock().reset();
        log::info!("hand cleared");
    }
}
