//! Advisor configuration options.

/// Estimation strategy used for hands worth 12 through 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Strategy {
    /// Random playouts against the remaining shoe.
    #[default]
    Simulation,
    /// Counts of remaining low versus high cards.
    Composition,
    /// Composition for a single-deck shoe, simulation otherwise.
    Auto,
}

impl Strategy {
    /// Resolves [`Strategy::Auto`] for a shoe of `decks` decks.
    #[must_use]
    pub const fn resolve(self, decks: u8) -> Self {
        match self {
            Self::Auto if decks <= 1 => Self::Composition,
            Self::Auto => Self::Simulation,
            other => other,
        }
    }
}

/// Configuration options for an advisory session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjassist::{AdvisorOptions, Strategy};
///
/// let options = AdvisorOptions::default()
///     .with_decks(1)
///     .with_strategy(Strategy::Composition)
///     .with_trials(500);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Estimation strategy.
    pub strategy: Strategy,
    /// Number of trials per simulation pass.
    pub trials: u32,
    /// A simulated hand stops drawing at or above this value.
    pub stop_value: u8,
    /// Recommend standing when the simulated bust probability exceeds this.
    pub bust_threshold: f64,
    /// Alternative rule: hit when the simulated probability of reaching 21
    /// exceeds this. `None` (the default) leaves the rule inactive.
    ///
    /// The rule is checked after the bust rule and its fall-through is also
    /// a hit, so enabling it only changes the reported
    /// [`Rule`](crate::Rule), never the action.
    pub win_threshold: Option<f64>,
    /// Recognized commands at or below this confidence are ignored.
    pub min_confidence: f32,
}

impl Default for AdvisorOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            strategy: Strategy::Simulation,
            trials: 1000,
            stop_value: 17,
            bust_threshold: 0.40,
            win_threshold: None,
            min_confidence: 0.51,
        }
    }
}

impl AdvisorOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjassist::AdvisorOptions;
    ///
    /// let options = AdvisorOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the estimation strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjassist::{AdvisorOptions, Strategy};
    ///
    /// let options = AdvisorOptions::default().with_strategy(Strategy::Auto);
    /// assert_eq!(options.strategy, Strategy::Auto);
    /// ```
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the number of trials per simulation pass.
    ///
    /// # Example
    ///
    /// ```
    /// use bjassist::AdvisorOptions;
    ///
    /// let options = AdvisorOptions::default().with_trials(250);
    /// assert_eq!(options.trials, 250);
    /// ```
    #[must_use]
    pub const fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the value at which a simulated hand stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjassist::AdvisorOptions;
    ///
    /// let options = AdvisorOptions::default().with_stop_value(18);
    /// assert_eq!(options.stop_value, 18);
    /// ```
    #[must_use]
    pub const fn with_stop_value(mut self, value: u8) -> Self {
        self.stop_value = value;
        self
    }

    /// Sets the bust probability above which the advisor recommends standing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjassist::AdvisorOptions;
    ///
    /// let options = AdvisorOptions::default().with_bust_threshold(0.5);
    /// assert_eq!(options.bust_threshold, 0.5);
    /// ```
    #[must_use]
    pub const fn with_bust_threshold(mut self, threshold: f64) -> Self {
        self.bust_threshold = threshold;
        self
    }

    /// Enables or disables the alternative win-probability rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjassist::AdvisorOptions;
    ///
    /// let options = AdvisorOptions::default().with_win_threshold(Some(0.25));
    /// assert_eq!(options.win_threshold, Some(0.25));
    /// ```
    #[must_use]
    pub const fn with_win_threshold(mut self, threshold: Option<f64>) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Sets the minimum recognition confidence for spoken commands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjassist::AdvisorOptions;
    ///
    /// let options = AdvisorOptions::default().with_min_confidence(0.7);
    /// assert_eq!(options.min_confidence, 0.7);
    /// ```
    #[must_use]
    pub const fn with_min_confidence(mut self, confidence: f32) -> Self {
        self.min_confidence = confidence;
        self
    }
}
