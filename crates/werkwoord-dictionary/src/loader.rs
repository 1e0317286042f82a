use std::collections::HashMap;
use std::path::Path;

use werkwoord_core::dictionary::{VerbEntry, VerbIndex};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid verb data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse the verb dictionary format: a JSON object keyed by infinitive,
/// each value holding the conjugation fields. Unknown keys are ignored
/// and every field is optional.
pub fn from_json(json: &str) -> Result<VerbIndex, LoadError> {
    let raw: HashMap<String, VerbEntry> = serde_json::from_str(json)?;

    let entries: Vec<VerbEntry> = raw
        .into_iter()
        .map(|(infinitive, mut entry)| {
            entry.infinitive = infinitive;
            entry
        })
        .collect();

    Ok(VerbIndex::from_entries(entries))
}

pub struct VerbsLoader;

impl VerbsLoader {
    /// Load the compiled-in default dictionary.
    pub fn load_embedded() -> Result<VerbIndex, LoadError> {
        let json = include_str!("../data/werkwoorden.json");
        tracing::info!("Loading embedded verb dictionary...");
        let index = from_json(json)?;
        tracing::info!("Loaded {} verb entries", index.entry_count());
        Ok(index)
    }

    /// Load a dictionary in the same format from a file path.
    pub fn load_from_file(path: &Path) -> Result<VerbIndex, LoadError> {
        tracing::info!("Loading verb dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let index = from_json(&json)?;
        tracing::info!("Loaded {} verb entries from file", index.entry_count());
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_dictionary_format() {
        let json = r#"{
            "werken": {
                "tegenwoordige_tijd": {
                    "ik": "werk", "jij": "werkt", "hij": "werkt",
                    "wij": "werken", "jullie": "werken", "zij": "werken"
                },
                "verleden_tijd": {"ik": "werkte", "wij": "werkten"},
                "voltooid_deelwoord": "gewerkt",
                "hulpwerkwoord": "hebben",
                "english": "to work"
            }
        }"#;

        let index = from_json(json).unwrap();
        let verb = index.lookup("werken").unwrap();

        assert_eq!(verb.present.ik.as_deref(), Some("werk"));
        assert_eq!(verb.past.wij.as_deref(), Some("werkten"));
        assert_eq!(verb.past_participle, "gewerkt");
        assert_eq!(verb.translation, "to work");
    }

    #[test]
    fn tolerates_missing_fields_and_unknown_keys() {
        let json = r#"{
            "gaan": {
                "voltooid_deelwoord": "gegaan",
                "russisch": "идти"
            }
        }"#;

        let index = from_json(json).unwrap();
        let verb = index.lookup("gaan").unwrap();

        assert!(verb.present.ik.is_none());
        assert_eq!(verb.past_participle, "gegaan");
        assert!(verb.translation.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = from_json("{ not json");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn embedded_dictionary_loads() {
        let index = VerbsLoader::load_embedded().unwrap();
        assert!(index.entry_count() >= 25);
        assert!(index.lookup("werken").is_some());
        assert!(index.lookup("zijn").is_some());
    }
}
