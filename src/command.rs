//! Spoken command vocabulary.

use core::fmt;

/// A discrete command delivered by the speech recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start playing.
    Play,
    /// Look at the table and scan a card.
    Scan,
    /// Ask for advice on the current hand.
    Assist,
    /// Stand and clear the hand.
    Stand,
    /// End the session.
    ThankYou,
}

impl Command {
    /// All commands.
    pub const ALL: [Self; 5] = [
        Self::Play,
        Self::Scan,
        Self::Assist,
        Self::Stand,
        Self::ThankYou,
    ];

    /// Keywords that map to this command, Spanish first.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Play => &["jugar", "play"],
            Self::Scan => &["ver", "look", "scan"],
            Self::Assist => &["ayudar", "assist", "help"],
            Self::Stand => &["quedar", "stand"],
            Self::ThankYou => &["gracias", "thanks", "thank you"],
        }
    }

    /// Maps a recognized keyword to a command.
    ///
    /// Matching ignores case and surrounding whitespace. Empty or unknown
    /// text yields `None`.
    ///
    /// ```
    /// use bjassist::Command;
    ///
    /// assert_eq!(Command::parse(" Ayudar "), Some(Command::Assist));
    /// assert_eq!(Command::parse(""), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            log::warn!("empty command ignored");
            return None;
        }

        let command = Self::ALL.into_iter().find(|command| {
            command
                .keywords()
                .iter()
                .any(|keyword| keyword.eq_ignore_ascii_case(text))
        });
        if command.is_none() {
            log::warn!("unknown command {text:?} ignored");
        }
        command
    }

    /// Maps a recognition result to a command, dropping it unless
    /// `confidence` is above `min_confidence`.
    #[must_use]
    pub fn recognize(text: &str, confidence: f32, min_confidence: f32) -> Option<Self> {
        if confidence <= min_confidence {
            log::warn!("recognition {text:?} dropped at confidence {confidence:.2}");
            return None;
        }
        Self::parse(text)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Play => "play",
            Self::Scan => "scan",
            Self::Assist => "assist",
            Self::Stand => "stand",
            Self::ThankYou => "thank you",
        })
    }
}
