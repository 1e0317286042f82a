use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Present-tense conjugations, one slot per grammatical person.
/// Any slot may be missing in the source data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentTense {
    pub ik: Option<String>,
    pub jij: Option<String>,
    pub hij: Option<String>,
    pub wij: Option<String>,
    pub jullie: Option<String>,
    pub zij: Option<String>,
}

impl PresentTense {
    /// Populated forms, in person order.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        [&self.ik, &self.jij, &self.hij, &self.wij, &self.jullie, &self.zij]
            .into_iter()
            .filter_map(|form| form.as_deref())
    }
}

/// Simple-past conjugations. Dutch collapses the persons into a
/// singular and a plural form, keyed here as ik/wij.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PastTense {
    pub ik: Option<String>,
    pub wij: Option<String>,
}

impl PastTense {
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        [&self.ik, &self.wij]
            .into_iter()
            .filter_map(|form| form.as_deref())
    }
}

/// One dictionary record. The infinitive is the canonical key; every
/// other field is optional display data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerbEntry {
    #[serde(skip)]
    pub infinitive: String,
    #[serde(rename = "tegenwoordige_tijd", default)]
    pub present: PresentTense,
    #[serde(rename = "verleden_tijd", default)]
    pub past: PastTense,
    #[serde(rename = "voltooid_deelwoord", default)]
    pub past_participle: String,
    #[serde(rename = "hulpwerkwoord", default)]
    pub auxiliary: String,
    #[serde(rename = "english", default)]
    pub translation: String,
}

impl VerbEntry {
    /// Every textual realization of the verb a query can match against:
    /// infinitive, present forms, past forms, past participle. Empty
    /// strings are excluded.
    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.infinitive.as_str())
            .chain(self.present.forms())
            .chain(self.past.forms())
            .chain(std::iter::once(self.past_participle.as_str()))
            .filter(|form| !form.is_empty())
    }

    /// Auxiliary-verb alternatives. The source field may hold a single
    /// verb ("hebben") or a comma-delimited list ("hebben,zijn").
    pub fn auxiliaries(&self) -> Vec<&str> {
        self.auxiliary
            .split(',')
            .map(str::trim)
            .filter(|aux| !aux.is_empty())
            .collect()
    }
}

/// Read-only verb dictionary. Entries are kept sorted alphabetically by
/// infinitive, which is the iteration order every search result follows.
#[derive(Debug, Clone, Default)]
pub struct VerbIndex {
    entries: Vec<VerbEntry>,
    by_infinitive: HashMap<String, usize>,
}

impl VerbIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a list of entries. Infinitives are normalized
    /// the same way queries are; on duplicates the last entry wins.
    pub fn from_entries(entries: Vec<VerbEntry>) -> Self {
        let preprocessor = DefaultPreprocessor;
        let mut by_key: HashMap<String, VerbEntry> = HashMap::new();

        for mut entry in entries {
            entry.infinitive = preprocessor.process(&entry.infinitive);
            if entry.infinitive.is_empty() {
                continue;
            }
            by_key.insert(entry.infinitive.clone(), entry);
        }

        let mut entries: Vec<VerbEntry> = by_key.into_values().collect();
        entries.sort_by(|a, b| a.infinitive.cmp(&b.infinitive));

        let by_infinitive = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.infinitive.clone(), idx))
            .collect();

        Self { entries, by_infinitive }
    }

    pub fn lookup(&self, infinitive: &str) -> Option<&VerbEntry> {
        self.by_infinitive
            .get(infinitive)
            .and_then(|&idx| self.entries.get(idx))
    }

    /// All entries in alphabetical order.
    pub fn entries(&self) -> impl Iterator<Item = &VerbEntry> {
        self.entries.iter()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another index into this one. Entries from the other index
    /// with the same infinitive override existing ones.
    pub fn merge(self, other: VerbIndex) -> Self {
        let mut entries = self.entries;
        entries.extend(other.entries);
        Self::from_entries(entries)
    }
}
