use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::bank::WordList;

/// Newtype wrapper for card IDs. Issued by the owning `CardSequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The grammatical role a card plays in the composed prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    #[serde(rename = "Actor")]
    Actor,
    #[serde(rename = "Actor Modifier")]
    ActorModifier,
    #[serde(rename = "Motivator")]
    Motivator,
    #[serde(rename = "Element")]
    Element,
    #[serde(rename = "Element Modifier")]
    ElementModifier,
    #[serde(rename = "Conflict")]
    Conflict,
}

impl CardType {
    /// Every card type, in the order the card picker lists them.
    pub const ALL: [CardType; 6] = [
        Self::Actor,
        Self::ActorModifier,
        Self::Motivator,
        Self::Element,
        Self::ElementModifier,
        Self::Conflict,
    ];

    /// Human-readable label, e.g. "Actor Modifier".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Actor => "Actor",
            Self::ActorModifier => "Actor Modifier",
            Self::Motivator => "Motivator",
            Self::Element => "Element",
            Self::ElementModifier => "Element Modifier",
            Self::Conflict => "Conflict",
        }
    }

    /// The word list this card type draws its values from.
    /// Both modifier types share one list.
    pub fn word_list(&self) -> WordList {
        match self {
            Self::Actor => WordList::Actors,
            Self::ActorModifier | Self::ElementModifier => WordList::Modifiers,
            Self::Motivator => WordList::Motivators,
            Self::Element => WordList::Elements,
            Self::Conflict => WordList::Conflicts,
        }
    }

    pub fn is_modifier(&self) -> bool {
        matches!(self, Self::ActorModifier | Self::ElementModifier)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no card type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card type: '{0}'")]
pub struct ParseCardTypeError(pub String);

impl FromStr for CardType {
    type Err = ParseCardTypeError;

    /// Accepts labels ("Actor Modifier") and snake/kebab forms
    /// ("actor_modifier", "actor-modifier"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "actor" => Ok(Self::Actor),
            "actormodifier" => Ok(Self::ActorModifier),
            "motivator" => Ok(Self::Motivator),
            "element" => Ok(Self::Element),
            "elementmodifier" => Ok(Self::ElementModifier),
            "conflict" => Ok(Self::Conflict),
            _ => Err(ParseCardTypeError(s.to_string())),
        }
    }
}

/// One typed, independently rerollable slot in the prompt.
///
/// `value` stays `None` until a draw fills it. A blank value is treated
/// the same as a missing one by the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub card_type: CardType,
    #[serde(default)]
    pub value: Option<String>,
}

impl Card {
    pub fn new(id: CardId, card_type: CardType) -> Self {
        Self {
            id,
            card_type,
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The trimmed value, or `None` if the card is empty or blank.
    pub fn filled_value(&self) -> Option<&str> {
        self.value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn is_filled(&self) -> bool {
        self.filled_value().is_some()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.filled_value() {
            Some(value) => write!(f, "{}: {}", self.card_type, value),
            None => write!(f, "{}:", self.card_type),
        }
    }
}
