use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::{Card, CardId, CardType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("card not found: {0}")]
    CardNotFound(CardId),
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// An ordered, owned list of cards. Order is the left-to-right order of
/// the composed sentence.
///
/// Card ids come from a counter owned by the sequence and are never
/// reused, even after the card they named is removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardSequence {
    cards: Vec<Card>,
    next_id: u64,
}

impl CardSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence of empty cards with the given types.
    pub fn from_types(types: &[CardType]) -> Self {
        let mut sequence = Self::new();
        for card_type in types {
            sequence.push(*card_type);
        }
        sequence
    }

    fn issue_id(&mut self) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append an empty card.
    pub fn push(&mut self, card_type: CardType) -> CardId {
        let id = self.issue_id();
        self.cards.push(Card::new(id, card_type));
        id
    }

    /// Insert an empty card at `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, card_type: CardType) -> Result<CardId, SequenceError> {
        if index > self.cards.len() {
            return Err(SequenceError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        let id = self.issue_id();
        self.cards.insert(index, Card::new(id, card_type));
        Ok(id)
    }

    /// Insert an empty card directly after the card `after`.
    pub fn insert_after(&mut self, after: CardId, card_type: CardType) -> Result<CardId, SequenceError> {
        let index = self.position(after).ok_or(SequenceError::CardNotFound(after))?;
        self.insert(index + 1, card_type)
    }

    pub fn remove(&mut self, id: CardId) -> Result<Card, SequenceError> {
        let index = self.position(id).ok_or(SequenceError::CardNotFound(id))?;
        Ok(self.cards.remove(index))
    }

    pub fn set_value(&mut self, id: CardId, value: impl Into<String>) -> Result<(), SequenceError> {
        self.get_mut(id)?.value = Some(value.into());
        Ok(())
    }

    pub fn clear_value(&mut self, id: CardId) -> Result<(), SequenceError> {
        self.get_mut(id)?.value = None;
        Ok(())
    }

    /// Change a card's type. The stored value came from the old type's
    /// word list, so it is cleared.
    pub fn set_type(&mut self, id: CardId, card_type: CardType) -> Result<(), SequenceError> {
        let card = self.get_mut(id)?;
        if card.card_type != card_type {
            card.card_type = card_type;
            card.value = None;
        }
        Ok(())
    }

    /// Move a card so that it ends up at `to_index`.
    pub fn move_card(&mut self, id: CardId, to_index: usize) -> Result<(), SequenceError> {
        let from = self.position(id).ok_or(SequenceError::CardNotFound(id))?;
        if to_index >= self.cards.len() {
            return Err(SequenceError::IndexOutOfRange {
                index: to_index,
                len: self.cards.len(),
            });
        }
        let card = self.cards.remove(from);
        self.cards.insert(to_index, card);
        Ok(())
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: CardId) -> Result<&mut Card, SequenceError> {
        self.cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(SequenceError::CardNotFound(id))
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Read-only snapshot handed to the composer.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Remove every card. Ids keep counting up from where they were.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl<'a> IntoIterator for &'a CardSequence {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
