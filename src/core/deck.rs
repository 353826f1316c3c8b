/// The prompt deck: word bank, card sequence, RNG and saved prompts.
///
/// Every mutation that changes a card's type, value or position
/// re-composes the prompt, so `prompt()` is always current.
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::bank::{BankError, WordBank};
use crate::core::composer::{compose, compose_parts, PromptParts};
use crate::core::draw::draw;
use crate::schema::card::{Card, CardId, CardType, ParseCardTypeError};
use crate::schema::sequence::{CardSequence, SequenceError};

/// The five cards a fresh deck is dealt.
pub const STANDARD_LAYOUT: [CardType; 5] = [
    CardType::ActorModifier,
    CardType::Actor,
    CardType::Motivator,
    CardType::Element,
    CardType::Conflict,
];

/// Default file name for exported prompts.
pub const DEFAULT_EXPORT_NAME: &str = "saved_prompts.txt";

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("word bank error: {0}")]
    Bank(#[from] BankError),
    #[error("sequence error: {0}")]
    Sequence(#[from] SequenceError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    UnknownCardType(#[from] ParseCardTypeError),
    #[error("no word bank configured")]
    NoWordBank,
}

pub struct Deck {
    bank: WordBank,
    sequence: CardSequence,
    rng: StdRng,
    seed: u64,
    prompt: String,
    saved: String,
}

/// Builder for constructing a `Deck`.
pub struct DeckBuilder {
    word_bank_dir: Option<PathBuf>,
    /// Directly provided bank (for testing without files).
    word_bank: Option<WordBank>,
    layout: Vec<CardType>,
    seed: u64,
}

impl Deck {
    pub fn builder() -> DeckBuilder {
        DeckBuilder {
            word_bank_dir: None,
            word_bank: None,
            layout: STANDARD_LAYOUT.to_vec(),
            seed: 0,
        }
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn sequence(&self) -> &CardSequence {
        &self.sequence
    }

    pub fn cards(&self) -> &[Card] {
        self.sequence.as_slice()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.sequence.get(id)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The sentence composed from the current cards.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The intermediate clause lists behind `prompt()`.
    pub fn parts(&self) -> PromptParts {
        compose_parts(self.sequence.as_slice())
    }

    /// Append a card of `card_type` and draw its value.
    pub fn add_card(&mut self, card_type: CardType) -> Result<CardId, DeckError> {
        let id = self.sequence.push(card_type);
        self.fill(id)?;
        tracing::debug!(%id, %card_type, "added card");
        self.refresh();
        Ok(id)
    }

    /// Insert a drawn card at `index`.
    pub fn insert_card(&mut self, index: usize, card_type: CardType) -> Result<CardId, DeckError> {
        let id = self.sequence.insert(index, card_type)?;
        self.fill(id)?;
        tracing::debug!(%id, %card_type, index, "inserted card");
        self.refresh();
        Ok(id)
    }

    /// Insert a drawn card directly after `after`.
    pub fn insert_after(&mut self, after: CardId, card_type: CardType) -> Result<CardId, DeckError> {
        let id = self.sequence.insert_after(after, card_type)?;
        self.fill(id)?;
        tracing::debug!(%id, %after, %card_type, "inserted card");
        self.refresh();
        Ok(id)
    }

    pub fn remove_card(&mut self, id: CardId) -> Result<Card, DeckError> {
        let card = self.sequence.remove(id)?;
        tracing::debug!(%id, "removed card");
        self.refresh();
        Ok(card)
    }

    /// Draw a new value for one card.
    pub fn reroll(&mut self, id: CardId) -> Result<(), DeckError> {
        self.fill(id)?;
        self.refresh();
        Ok(())
    }

    /// Change a card's type and draw a value from the new type's list.
    pub fn set_type(&mut self, id: CardId, card_type: CardType) -> Result<(), DeckError> {
        self.sequence.set_type(id, card_type)?;
        self.fill(id)?;
        tracing::debug!(%id, %card_type, "retyped card");
        self.refresh();
        Ok(())
    }

    pub fn move_card(&mut self, id: CardId, to_index: usize) -> Result<(), DeckError> {
        self.sequence.move_card(id, to_index)?;
        tracing::debug!(%id, to_index, "moved card");
        self.refresh();
        Ok(())
    }

    /// Regenerate the whole prompt.
    ///
    /// A deck of up to five cards is reset to the standard layout. A
    /// larger deck keeps its layout and every card is rerolled.
    pub fn regenerate(&mut self) -> Result<(), DeckError> {
        if self.sequence.len() <= STANDARD_LAYOUT.len() {
            self.deal(&STANDARD_LAYOUT)
        } else {
            for id in self.sequence.ids() {
                self.fill(id)?;
            }
            self.refresh();
            Ok(())
        }
    }

    /// Replace every card with freshly drawn cards of the given types.
    pub fn deal(&mut self, layout: &[CardType]) -> Result<(), DeckError> {
        self.sequence.clear();
        for card_type in layout {
            let id = self.sequence.push(*card_type);
            self.fill(id)?;
        }
        tracing::debug!(cards = layout.len(), "dealt cards");
        self.refresh();
        Ok(())
    }

    /// Restart the random stream. Existing card values are kept.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Append the current prompt as a new line of the saved text.
    pub fn save_prompt(&mut self) {
        if !self.saved.is_empty() && !self.saved.ends_with('\n') {
            self.saved.push('\n');
        }
        self.saved.push_str(&self.prompt);
        self.saved.push('\n');
    }

    pub fn saved_text(&self) -> &str {
        &self.saved
    }

    /// Replace the saved text, e.g. after the user edited it.
    pub fn set_saved_text(&mut self, text: impl Into<String>) {
        self.saved = text.into();
    }

    /// Write the saved text to a plain-text file.
    pub fn export_saved(&self, path: &Path) -> Result<(), DeckError> {
        std::fs::write(path, &self.saved)?;
        tracing::info!(path = %path.display(), bytes = self.saved.len(), "exported saved prompts");
        Ok(())
    }

    fn fill(&mut self, id: CardId) -> Result<(), DeckError> {
        let card_type = self
            .sequence
            .get(id)
            .map(|c| c.card_type)
            .ok_or(SequenceError::CardNotFound(id))?;
        let word = draw(&self.bank, card_type, &mut self.rng)?.to_string();
        self.sequence.set_value(id, word)?;
        Ok(())
    }

    fn refresh(&mut self) {
        self.prompt = compose(self.sequence.as_slice());
    }
}

impl DeckBuilder {
    pub fn word_bank_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.word_bank_dir = Some(path.into());
        self
    }

    /// Provide the word bank directly (for testing without files).
    pub fn with_word_bank(mut self, bank: WordBank) -> Self {
        self.word_bank = Some(bank);
        self
    }

    /// Card types dealt on build. Defaults to `STANDARD_LAYOUT`.
    pub fn layout(mut self, layout: &[CardType]) -> Self {
        self.layout = layout.to_vec();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<Deck, DeckError> {
        let bank = match (self.word_bank, self.word_bank_dir) {
            (Some(bank), _) => bank,
            (None, Some(dir)) => WordBank::load_from_dir(&dir)?,
            (None, None) => return Err(DeckError::NoWordBank),
        };

        let mut deck = Deck {
            bank,
            sequence: CardSequence::new(),
            rng: StdRng::seed_from_u64(self.seed),
            seed: self.seed,
            prompt: String::new(),
            saved: String::new(),
        };
        deck.deal(&self.layout)?;
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bank::WordList;

    fn test_bank() -> WordBank {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        WordBank::from_lists(vec![
            (WordList::Actors, list(&["elf", "king"])),
            (WordList::Modifiers, list(&["tall", "ancient"])),
            (WordList::Motivators, list(&["seeks", "fears"])),
            (WordList::Elements, list(&["shadow", "oath"])),
            (WordList::Conflicts, list(&["time is short"])),
        ])
        .unwrap()
    }

    fn build_test_deck(seed: u64) -> Deck {
        Deck::builder()
            .seed(seed)
            .with_word_bank(test_bank())
            .build()
            .unwrap()
    }

    fn types(deck: &Deck) -> Vec<CardType> {
        deck.cards().iter().map(|c| c.card_type).collect()
    }

    #[test]
    fn build_deals_standard_layout() {
        let deck = build_test_deck(42);
        assert_eq!(types(&deck), STANDARD_LAYOUT.to_vec());
        assert!(deck.cards().iter().all(Card::is_filled));
        assert!(deck.prompt().ends_with(", but time is short."));
    }

    #[test]
    fn build_without_bank_fails() {
        assert!(matches!(
            Deck::builder().build(),
            Err(DeckError::NoWordBank)
        ));
    }

    #[test]
    fn build_with_empty_layout() {
        let deck = Deck::builder()
            .with_word_bank(test_bank())
            .layout(&[])
            .build()
            .unwrap();
        assert!(deck.cards().is_empty());
        assert_eq!(deck.prompt(), "Someone does something, but faces an obstacle.");
    }

    #[test]
    fn builder_with_seed() {
        let deck = build_test_deck(12345);
        assert_eq!(deck.seed(), 12345);
    }

    #[test]
    fn same_seed_same_prompt() {
        assert_eq!(build_test_deck(9).prompt(), build_test_deck(9).prompt());
    }

    #[test]
    fn add_and_remove_recompose() {
        let mut deck = Deck::builder()
            .with_word_bank(test_bank())
            .layout(&[CardType::Actor])
            .build()
            .unwrap();
        let id = deck.add_card(CardType::Conflict).unwrap();
        assert!(deck.prompt().ends_with("but time is short."));

        deck.remove_card(id).unwrap();
        assert!(deck.prompt().ends_with("but faces an obstacle."));
    }

    #[test]
    fn insert_after_places_drawn_card() {
        let mut deck = build_test_deck(1);
        let actor = deck.cards()[1].id;
        let id = deck.insert_after(actor, CardType::Actor).unwrap();
        assert_eq!(deck.sequence().position(id), Some(2));
        assert!(deck.card(id).unwrap().is_filled());
        assert!(deck.parts().actors.len() == 2);
    }

    #[test]
    fn set_type_redraws_from_new_list() {
        let mut deck = build_test_deck(5);
        let id = deck.cards()[4].id;
        deck.set_type(id, CardType::Element).unwrap();
        let card = deck.card(id).unwrap();
        assert_eq!(card.card_type, CardType::Element);
        let value = card.filled_value().unwrap();
        assert!(value == "shadow" || value == "oath");
    }

    #[test]
    fn reroll_missing_card() {
        let mut deck = build_test_deck(5);
        assert!(matches!(
            deck.reroll(CardId(999)),
            Err(DeckError::Sequence(SequenceError::CardNotFound(CardId(999))))
        ));
    }

    #[test]
    fn regenerate_small_deck_resets_layout() {
        let mut deck = build_test_deck(3);
        let first = deck.cards()[0].id;
        deck.remove_card(first).unwrap();
        deck.regenerate().unwrap();
        assert_eq!(types(&deck), STANDARD_LAYOUT.to_vec());
    }

    #[test]
    fn regenerate_large_deck_keeps_layout() {
        let mut deck = build_test_deck(3);
        deck.add_card(CardType::Conflict).unwrap();
        let before: Vec<CardId> = deck.sequence().ids();
        deck.regenerate().unwrap();
        assert_eq!(deck.sequence().ids(), before);
        assert_eq!(deck.cards().len(), 6);
    }

    #[test]
    fn saved_prompts_accumulate() {
        let mut deck = build_test_deck(8);
        deck.save_prompt();
        deck.regenerate().unwrap();
        deck.save_prompt();
        let lines: Vec<&str> = deck.saved_text().lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], deck.prompt());

        deck.set_saved_text("my own note");
        deck.save_prompt();
        assert!(deck.saved_text().starts_with("my own note\n"));
    }
}
