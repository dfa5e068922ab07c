use crate::advisor::{Action, Recommendation, suggest};
use crate::card::Card;
use crate::command::Command;
use crate::error::{ScanError, ShoeError};

use super::{CardSource, Event, Session};

impl Session {
    /// Moves `card` from the shoe into the hand.
    ///
    /// The shoe and hand are locked together, so the card leaves the shoe
    /// and enters the hand as one step.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::CardNotAvailable`] if the shoe has no copy of the
    /// card, e.g. because the same card was scanned twice. Neither the shoe
    /// nor the hand changes in that case.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn add_card(&self, card: Card) -> Result<(), ShoeError> {
        let mut shoe = self.shoe.lock();
        let mut hand = self.hand.lock();
        hand.take(card, &mut shoe)
    }

    /// Adds the card described by a scanned payload such as `"10 Hearts"`.
    ///
    /// A missing or blank payload means nothing was detected and is not an
    /// error: it returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a card or the card is not in the
    /// shoe. The hand is unchanged in both cases.
    pub fn scan(&self, payload: Option<&str>) -> Result<Option<Card>, ScanError> {
        let Some(payload) = payload.map(str::trim).filter(|payload| !payload.is_empty()) else {
            log::warn!("no card detected");
            return Ok(None);
        };

        let card: Card = payload.parse().inspect_err(|err| {
            log::warn!("could not read card payload {payload:?}: {err}");
        })?;
        self.add_card(card)?;
        Ok(Some(card))
    }

    /// Recommends an action for the current hand without changing any state.
    pub fn suggest(&self) -> Recommendation {
        let shoe = self.shoe.lock();
        let hand = self.hand.lock();
        let mut rng = self.rng.lock();
        suggest(hand.cards(), &shoe, &self.options, &mut *rng)
    }

    /// Recommends an action for the current hand, clearing it if it is bust.
    ///
    /// The shoe and hand stay locked from the valuation until a bust hand is
    /// cleared.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn assist(&self) -> Recommendation {
        let shoe = self.shoe.lock();
        let mut hand = self.hand.lock();
        let recommendation = {
            let mut rng = self.rng.lock();
            suggest(hand.cards(), &shoe, &self.options, &mut *rng)
        };

        if recommendation.action == Action::Bust {
            hand.reset();
            log::info!("bust hand cleared");
        }
        recommendation
    }

    /// Stands: clears the hand. Cards stay out of the shoe.
    pub fn stand(&self) {
        self.reset();
    }

    /// Handles one command, scanning from `source` when asked to look.
    ///
    /// # Errors
    ///
    /// Returns an error if a scanned payload is not a card or the card is not
    /// in the shoe. The session remains usable afterwards.
    pub fn handle<S>(&self, command: Command, source: &mut S) -> Result<Event, ScanError>
    where
        S: CardSource + ?Sized,
    {
        log::debug!("handling {command}");

        let event = match command {
            Command::Play => Event::Ready,
            Command::Scan => {
                let payload = source.scan();
                match self.scan(payload.as_deref())? {
                    Some(card) => Event::CardAdded(card),
                    None => Event::NoCard,
                }
            }
            Command::Assist => Event::Advice(self.assist()),
            Command::Stand => {
                self.stand();
                Event::Stood
            }
            Command::ThankYou => Event::Farewell,
        };

        Ok(event)
    }
}
