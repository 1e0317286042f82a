use crate::dictionary::{VerbEntry, VerbIndex};
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Outcome of resolving a query against the index.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<'a> {
    NotFound,
    Unique(&'a VerbEntry),
    /// Two or more candidate infinitives, in index (alphabetical) order.
    Ambiguous(Vec<String>),
}

/// Resolve a raw query to a verb entry.
///
/// The query is normalized, then matched in two passes: an exact pass
/// over every surface form of every entry, and only if that finds
/// nothing, a substring pass. An exact hit anywhere in the index beats
/// any substring hit, so "maken" resolves to maken even though it also
/// occurs inside the forms of smaken.
///
/// There is no minimum query length; a short query legitimately matches
/// many entries, and an empty query is a substring of every form.
pub fn resolve<'a>(index: &'a VerbIndex, query: &str) -> SearchResult<'a> {
    let query = DefaultPreprocessor.process(query);

    for verb in index.entries() {
        if verb.surface_forms().any(|form| form == query) {
            return SearchResult::Unique(verb);
        }
    }

    let matches: Vec<&VerbEntry> = index
        .entries()
        .filter(|verb| verb.surface_forms().any(|form| form.contains(&query)))
        .collect();

    match matches.as_slice() {
        [] => SearchResult::NotFound,
        [verb] => SearchResult::Unique(*verb),
        _ => SearchResult::Ambiguous(
            matches.iter().map(|verb| verb.infinitive.clone()).collect(),
        ),
    }
}
