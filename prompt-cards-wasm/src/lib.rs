//! WASM bindings for prompt-cards — powers the card-row web page.

use wasm_bindgen::prelude::*;

use prompt_cards::core::bank::{WordBank, WordList};
use prompt_cards::core::deck::{Deck, DeckError};
use prompt_cards::schema::card::{CardId, CardType};

// ---------------------------------------------------------------------------
// Embedded word data — compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const ACTORS: &str = include_str!("../../word_data/actors.json");
    pub const MODIFIERS: &str = include_str!("../../word_data/modifiers.json");
    pub const MOTIVATORS: &str = include_str!("../../word_data/motivators.json");
    pub const ELEMENTS: &str = include_str!("../../word_data/elements.json");
    pub const CONFLICTS: &str = include_str!("../../word_data/conflicts.json");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct CardInfo<'a> {
    id: u64,
    #[serde(rename = "type")]
    card_type: &'static str,
    value: Option<&'a str>,
}

fn embedded_bank() -> Result<WordBank, JsError> {
    WordBank::parse_json_lists(&[
        (WordList::Actors, data::ACTORS),
        (WordList::Modifiers, data::MODIFIERS),
        (WordList::Motivators, data::MOTIVATORS),
        (WordList::Elements, data::ELEMENTS),
        (WordList::Conflicts, data::CONFLICTS),
    ])
    .map_err(|e| JsError::new(&format!("Error loading prompt data: {e}")))
}

fn parse_type(label: &str) -> Result<CardType, JsError> {
    label
        .parse::<CardType>()
        .map_err(|e| JsError::new(&e.to_string()))
}

fn deck_error(e: DeckError) -> JsError {
    JsError::new(&e.to_string())
}

// ---------------------------------------------------------------------------
// PromptDeck — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct PromptDeck {
    deck: Deck,
}

#[wasm_bindgen]
impl PromptDeck {
    /// Create a deck dealt with the standard five cards.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<PromptDeck, JsError> {
        let deck = Deck::builder()
            .seed(seed)
            .with_word_bank(embedded_bank()?)
            .build()
            .map_err(deck_error)?;
        Ok(PromptDeck { deck })
    }

    /// The current prompt sentence.
    pub fn prompt(&self) -> String {
        self.deck.prompt().to_string()
    }

    /// JSON array of `{ "id", "type", "value" }`, in display order.
    pub fn cards(&self) -> Result<String, JsError> {
        let cards: Vec<CardInfo<'_>> = self
            .deck
            .cards()
            .iter()
            .map(|c| CardInfo {
                id: c.id.0,
                card_type: c.card_type.label(),
                value: c.filled_value(),
            })
            .collect();
        serde_json::to_string(&cards)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Append a drawn card. Returns the new card's id.
    pub fn add_card(&mut self, card_type: &str) -> Result<u64, JsError> {
        let card_type = parse_type(card_type)?;
        self.deck
            .add_card(card_type)
            .map(|id| id.0)
            .map_err(deck_error)
    }

    /// Insert a drawn card after card `after` (the "+" button).
    pub fn insert_after(&mut self, after: u64, card_type: &str) -> Result<u64, JsError> {
        let card_type = parse_type(card_type)?;
        self.deck
            .insert_after(CardId(after), card_type)
            .map(|id| id.0)
            .map_err(deck_error)
    }

    pub fn remove_card(&mut self, id: u64) -> Result<(), JsError> {
        self.deck
            .remove_card(CardId(id))
            .map(|_| ())
            .map_err(deck_error)
    }

    /// Draw a new value for one card ("Try again").
    pub fn reroll(&mut self, id: u64) -> Result<(), JsError> {
        self.deck.reroll(CardId(id)).map_err(deck_error)
    }

    pub fn set_type(&mut self, id: u64, card_type: &str) -> Result<(), JsError> {
        let card_type = parse_type(card_type)?;
        self.deck.set_type(CardId(id), card_type).map_err(deck_error)
    }

    pub fn move_card(&mut self, id: u64, to_index: usize) -> Result<(), JsError> {
        self.deck.move_card(CardId(id), to_index).map_err(deck_error)
    }

    /// Regenerate the whole prompt.
    pub fn regenerate(&mut self) -> Result<(), JsError> {
        self.deck.regenerate().map_err(deck_error)
    }

    /// Append the current prompt to the saved text.
    pub fn save_prompt(&mut self) {
        self.deck.save_prompt();
    }

    pub fn saved_text(&self) -> String {
        self.deck.saved_text().to_string()
    }

    /// Keep the saved text in sync with the page's text area.
    pub fn set_saved_text(&mut self, text: &str) {
        self.deck.set_saved_text(text);
    }

    /// Return JSON array of card type labels.
    pub fn card_types() -> String {
        let labels: Vec<&str> = CardType::ALL.iter().map(CardType::label).collect();
        serde_json::to_string(&labels).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bank_loads() {
        let bank = WordBank::parse_json_lists(&[
            (WordList::Actors, data::ACTORS),
            (WordList::Modifiers, data::MODIFIERS),
            (WordList::Motivators, data::MOTIVATORS),
            (WordList::Elements, data::ELEMENTS),
            (WordList::Conflicts, data::CONFLICTS),
        ])
        .unwrap();
        assert!(bank.word_count() > 0);
    }

    #[test]
    fn card_types_lists_labels() {
        let json = PromptDeck::card_types();
        assert!(json.contains("\"Actor Modifier\""));
        assert!(json.contains("\"Conflict\""));
    }
}
