/// Word bank — the candidate word lists cards draw from.
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::schema::card::CardType;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("unknown word list: '{0}'")]
    UnknownList(String),
    #[error("word list '{0}' is missing")]
    MissingList(WordList),
    #[error("word list '{0}' has no candidates")]
    EmptyCandidateList(WordList),
    #[error("no word list registered for card type '{0}'")]
    UnknownType(CardType),
}

/// One of the five source collections. Actor and element modifiers
/// share `Modifiers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordList {
    Actors,
    Modifiers,
    Motivators,
    Elements,
    Conflicts,
}

impl WordList {
    pub const ALL: [WordList; 5] = [
        Self::Actors,
        Self::Modifiers,
        Self::Motivators,
        Self::Elements,
        Self::Conflicts,
    ];

    /// File stem used on disk and as the key in RON banks.
    pub fn stem(&self) -> &'static str {
        match self {
            Self::Actors => "actors",
            Self::Modifiers => "modifiers",
            Self::Motivators => "motivators",
            Self::Elements => "elements",
            Self::Conflicts => "conflicts",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.stem())
    }

    pub fn from_stem(stem: &str) -> Option<WordList> {
        Self::ALL.into_iter().find(|list| list.stem() == stem)
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// Read-only candidate lists, one per `WordList`.
///
/// Every list in a constructed bank is non-empty; draws can rely on it.
#[derive(Debug, Clone)]
pub struct WordBank {
    lists: FxHashMap<WordList, Vec<String>>,
}

impl WordBank {
    /// Build a bank from in-memory lists. Entries are trimmed and blank
    /// entries dropped; every word list must end up non-empty.
    pub fn from_lists(
        lists: impl IntoIterator<Item = (WordList, Vec<String>)>,
    ) -> Result<WordBank, BankError> {
        let mut cleaned: FxHashMap<WordList, Vec<String>> = FxHashMap::default();
        for (list, words) in lists {
            let entries = cleaned.entry(list).or_default();
            entries.extend(
                words
                    .into_iter()
                    .map(|w| w.trim().to_string())
                    .filter(|w| !w.is_empty()),
            );
        }

        for list in WordList::ALL {
            match cleaned.get(&list) {
                None => return Err(BankError::MissingList(list)),
                Some(words) if words.is_empty() => {
                    return Err(BankError::EmptyCandidateList(list))
                }
                Some(_) => {}
            }
        }

        Ok(WordBank { lists: cleaned })
    }

    /// Load `actors.json`, `modifiers.json`, `motivators.json`,
    /// `elements.json` and `conflicts.json` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<WordBank, BankError> {
        let mut lists = Vec::with_capacity(WordList::ALL.len());
        for list in WordList::ALL {
            let path = dir.join(list.file_name());
            if !path.exists() {
                return Err(BankError::MissingList(list));
            }
            lists.push((list, read_word_file(&path)?));
        }
        let bank = Self::from_lists(lists)?;
        tracing::info!(dir = %dir.display(), words = bank.word_count(), "loaded word bank");
        Ok(bank)
    }

    /// Build a bank from the JSON text of each word list, e.g. data
    /// embedded in a binary.
    pub fn parse_json_lists(sources: &[(WordList, &str)]) -> Result<WordBank, BankError> {
        let mut lists = Vec::with_capacity(sources.len());
        for (list, text) in sources {
            let words = parse_word_json(text).map_err(|source| BankError::Json {
                path: PathBuf::from(list.file_name()),
                source,
            })?;
            lists.push((*list, words));
        }
        Self::from_lists(lists)
    }

    /// Load a bank from a single RON file.
    pub fn load_from_ron(path: &Path) -> Result<WordBank, BankError> {
        let contents = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_ron(&contents)
    }

    /// Parse a bank from a RON map keyed by list stem:
    /// `{ "actors": ["elf"], "modifiers": ["tall"], ... }`.
    pub fn parse_ron(input: &str) -> Result<WordBank, BankError> {
        let raw: HashMap<String, Vec<String>> = ron::from_str(input)?;
        let mut lists = Vec::with_capacity(raw.len());
        for (stem, words) in raw {
            let list = WordList::from_stem(&stem).ok_or(BankError::UnknownList(stem))?;
            lists.push((list, words));
        }
        Self::from_lists(lists)
    }

    /// The candidates a card of `card_type` draws from.
    pub fn candidates(&self, card_type: CardType) -> Result<&[String], BankError> {
        self.lists
            .get(&card_type.word_list())
            .map(Vec::as_slice)
            .ok_or(BankError::UnknownType(card_type))
    }

    pub fn list(&self, list: WordList) -> Option<&[String]> {
        self.lists.get(&list).map(Vec::as_slice)
    }

    /// Total number of words across all lists.
    pub fn word_count(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }
}

/// Read one word file as-is (no trimming or filtering).
pub fn read_word_file(path: &Path) -> Result<Vec<String>, BankError> {
    let contents = std::fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_word_json(&contents).map_err(|source| BankError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_word_json(text: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn full_lists() -> Vec<(WordList, Vec<String>)> {
        vec![
            (WordList::Actors, words(&["elf", "king"])),
            (WordList::Modifiers, words(&["tall", "grey"])),
            (WordList::Motivators, words(&["seeks"])),
            (WordList::Elements, words(&["shadow"])),
            (WordList::Conflicts, words(&["time is short"])),
        ]
    }

    #[test]
    fn from_lists_valid() {
        let bank = WordBank::from_lists(full_lists()).unwrap();
        assert_eq!(bank.word_count(), 7);
        assert_eq!(bank.candidates(CardType::Actor).unwrap(), &["elf", "king"]);
    }

    #[test]
    fn modifier_types_share_candidates() {
        let bank = WordBank::from_lists(full_lists()).unwrap();
        assert_eq!(
            bank.candidates(CardType::ActorModifier).unwrap(),
            bank.candidates(CardType::ElementModifier).unwrap()
        );
    }

    #[test]
    fn empty_list_rejected() {
        let mut lists = full_lists();
        lists[3].1.clear();
        let err = WordBank::from_lists(lists).unwrap_err();
        assert!(matches!(err, BankError::EmptyCandidateList(WordList::Elements)));
    }

    #[test]
    fn blank_entries_dropped() {
        let mut lists = full_lists();
        lists[2].1 = words(&["  ", ""]);
        let err = WordBank::from_lists(lists).unwrap_err();
        assert!(matches!(err, BankError::EmptyCandidateList(WordList::Motivators)));

        let mut lists = full_lists();
        lists[0].1 = words(&[" elf ", ""]);
        let bank = WordBank::from_lists(lists).unwrap();
        assert_eq!(bank.candidates(CardType::Actor).unwrap(), &["elf"]);
    }

    #[test]
    fn missing_list_rejected() {
        let mut lists = full_lists();
        lists.remove(4);
        let err = WordBank::from_lists(lists).unwrap_err();
        assert!(matches!(err, BankError::MissingList(WordList::Conflicts)));
    }

    #[test]
    fn parse_ron_bank() {
        let input = r#"{
            "actors": ["elf"],
            "modifiers": ["tall"],
            "motivators": ["seeks"],
            "elements": ["shadow"],
            "conflicts": ["the map is wrong"],
        }"#;
        let bank = WordBank::parse_ron(input).unwrap();
        assert_eq!(bank.list(WordList::Conflicts).unwrap(), &["the map is wrong"]);
    }

    #[test]
    fn parse_ron_unknown_list() {
        let input = r#"{ "villains": ["moriarty"] }"#;
        let err = WordBank::parse_ron(input).unwrap_err();
        assert!(matches!(err, BankError::UnknownList(ref s) if s == "villains"));
    }

    #[test]
    fn parse_json_lists_reports_file() {
        let err = WordBank::parse_json_lists(&[(WordList::Actors, "[\"elf\",")]).unwrap_err();
        assert!(err.to_string().contains("actors.json"));
    }

    #[test]
    fn load_word_data_dir() {
        let bank = WordBank::load_from_dir(Path::new("word_data")).unwrap();
        for card_type in CardType::ALL {
            assert!(!bank.candidates(card_type).unwrap().is_empty());
        }
    }

    #[test]
    fn load_missing_dir() {
        let err = WordBank::load_from_dir(Path::new("no/such/dir")).unwrap_err();
        assert!(matches!(err, BankError::MissingList(WordList::Actors)));
    }
}
