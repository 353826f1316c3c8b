/// Prompt composer — turns a card snapshot into one sentence.
///
/// Cards are read strictly left to right. Modifiers wait for the next
/// actor or element, a motivator waits for the next element, and anything
/// still missing at the end falls back to filler text.
use serde::{Deserialize, Serialize};

use crate::core::article::article;
use crate::schema::card::{Card, CardType};

/// Actor clause when no actor card is filled.
pub const NO_ACTOR: &str = "someone";
/// Motivator clause when there are no motivator/element pairs.
pub const NO_MOTIVATOR: &str = "does something";
/// Conflict clause when no conflict card is filled.
pub const NO_CONFLICT: &str = "faces an obstacle";
/// Object paired with a motivator that never met an element.
pub const UNPAIRED_MOTIVATOR_OBJECT: &str = "something";
/// Verb paired with an element that had no motivator before it.
pub const UNPAIRED_ELEMENT_VERB: &str = "does something with";

/// The three clause lists a card sequence composes into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptParts {
    /// Completed actor phrases, e.g. "a tall grey elf".
    pub actors: Vec<String>,
    /// Motivator/element pairs, e.g. "fears a shadow".
    pub pairs: Vec<String>,
    /// Conflict values, verbatim.
    pub conflicts: Vec<String>,
}

impl PromptParts {
    pub fn actor_clause(&self) -> String {
        if self.actors.is_empty() {
            NO_ACTOR.to_string()
        } else {
            self.actors.join(" and ")
        }
    }

    pub fn motivator_clause(&self) -> String {
        if self.pairs.is_empty() {
            NO_MOTIVATOR.to_string()
        } else {
            self.pairs.join(", who ")
        }
    }

    pub fn conflict_clause(&self) -> String {
        if self.conflicts.is_empty() {
            format!("but {}", NO_CONFLICT)
        } else {
            format!("but {}", self.conflicts.join(" and "))
        }
    }

    /// Assemble the final sentence with its first letter upper-cased.
    pub fn sentence(&self) -> String {
        let prompt = format!(
            "{} {}, {}.",
            self.actor_clause(),
            self.motivator_clause(),
            self.conflict_clause()
        );
        capitalize_first(&prompt)
    }
}

/// Compose a card snapshot into a prompt sentence.
///
/// Total over its input: an empty snapshot yields
/// "Someone does something, but faces an obstacle."
pub fn compose(cards: &[Card]) -> String {
    compose_parts(cards).sentence()
}

/// Run the composition scan and return the clause lists without
/// assembling them.
pub fn compose_parts(cards: &[Card]) -> PromptParts {
    let mut acc = Accumulator::default();
    for card in cards {
        // Empty cards contribute nothing and leave pending state alone.
        if let Some(value) = card.filled_value() {
            acc.feed(card.card_type, value);
        }
    }
    acc.finish()
}

#[derive(Default)]
struct Accumulator<'a> {
    actor_modifiers: Vec<&'a str>,
    element_modifiers: Vec<&'a str>,
    motivator: Option<&'a str>,
    parts: PromptParts,
}

impl<'a> Accumulator<'a> {
    fn feed(&mut self, card_type: CardType, value: &'a str) {
        match card_type {
            CardType::ActorModifier => self.actor_modifiers.push(value),
            CardType::Actor => {
                let phrase = noun_phrase(&self.actor_modifiers, value);
                self.parts.actors.push(phrase);
                self.actor_modifiers.clear();
            }
            CardType::Motivator => {
                self.flush_motivator();
                self.motivator = Some(value);
            }
            CardType::ElementModifier => self.element_modifiers.push(value),
            CardType::Element => {
                let phrase = noun_phrase(&self.element_modifiers, value);
                let pair = match self.motivator.take() {
                    Some(motivator) => format!("{} {}", motivator, phrase),
                    None => format!("{} {}", UNPAIRED_ELEMENT_VERB, phrase),
                };
                self.parts.pairs.push(pair);
                self.element_modifiers.clear();
            }
            CardType::Conflict => self.parts.conflicts.push(value.to_string()),
        }
    }

    fn flush_motivator(&mut self) {
        if let Some(motivator) = self.motivator.take() {
            self.parts
                .pairs
                .push(format!("{} {}", motivator, UNPAIRED_MOTIVATOR_OBJECT));
        }
    }

    fn finish(mut self) -> PromptParts {
        self.flush_motivator();
        self.parts
    }
}

/// "<article> <modifiers...> <noun>". The article follows the first
/// modifier when there is one, otherwise the noun.
fn noun_phrase(modifiers: &[&str], noun: &str) -> String {
    let head = modifiers.first().copied().unwrap_or(noun);
    let mut words = Vec::with_capacity(modifiers.len() + 2);
    if let Some(article) = article(head) {
        words.push(article);
    }
    words.extend_from_slice(modifiers);
    words.push(noun);
    words.join(" ")
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
