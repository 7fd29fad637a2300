use std::sync::OnceLock;

use eyre::{Result, WrapErr};

use crate::models::{Chapter, Lore};

const CHAPTERS_JSON: &str = include_str!("../data/chapters.json");
const LORE_JSON: &str = include_str!("../data/lore.json");

/// The static content set for the whole process: every chapter of the
/// serial plus the lore collections, deserialized once from the bundled
/// fixtures and immutable afterwards.
#[derive(Debug)]
pub struct ContentStore {
    chapters: Vec<Chapter>,
    lore: Lore,
}

static STORE: OnceLock<ContentStore> = OnceLock::new();

impl ContentStore {
    /// The process-wide store, loaded on first access.
    ///
    /// The payload is trusted (it ships inside the binary), but a
    /// malformed fixture still surfaces as an error here rather than a
    /// panic deeper in the UI.
    pub fn get() -> Result<&'static ContentStore> {
        if let Some(store) = STORE.get() {
            return Ok(store);
        }
        let store = Self::from_bundled()?;
        Ok(STORE.get_or_init(|| store))
    }

    fn from_bundled() -> Result<Self> {
        Self::from_json(CHAPTERS_JSON, LORE_JSON)
    }

    /// Build a store from raw JSON. Split out so tests can feed their
    /// own fixtures without touching the process-wide store.
    pub fn from_json(chapters_json: &str, lore_json: &str) -> Result<Self> {
        let chapters: Vec<Chapter> =
            serde_json::from_str(chapters_json).wrap_err("malformed chapters fixture")?;
        let lore: Lore = serde_json::from_str(lore_json).wrap_err("malformed lore fixture")?;
        Ok(Self { chapters, lore })
    }

    /// All chapters, in ascending id order as stored.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn lore(&self) -> &Lore {
        &self.lore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_fixtures_parse() {
        let store = ContentStore::from_json(CHAPTERS_JSON, LORE_JSON).unwrap();
        assert!(!store.chapters().is_empty());
        assert!(!store.lore().characters.is_empty());
        assert!(!store.lore().locations.is_empty());
        assert!(!store.lore().concepts.is_empty());
    }

    #[test]
    fn test_chapter_ids_unique_and_ascending() {
        let store = ContentStore::from_json(CHAPTERS_JSON, LORE_JSON).unwrap();
        let ids: Vec<u32> = store.chapters().iter().map(|ch| ch.id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "ids must be strictly ascending: {:?}", ids);
        }
        assert!(ids.iter().all(|&id| id >= 1));
    }

    #[test]
    fn test_lore_ids_unique_per_category() {
        let store = ContentStore::from_json(CHAPTERS_JSON, LORE_JSON).unwrap();
        let lore = store.lore();

        let mut character_ids: Vec<&str> =
            lore.characters.iter().map(|c| c.id.as_str()).collect();
        character_ids.sort_unstable();
        character_ids.dedup();
        assert_eq!(character_ids.len(), lore.characters.len());

        let mut location_ids: Vec<&str> = lore.locations.iter().map(|l| l.id.as_str()).collect();
        location_ids.sort_unstable();
        location_ids.dedup();
        assert_eq!(location_ids.len(), lore.locations.len());

        let mut concept_ids: Vec<&str> = lore.concepts.iter().map(|c| c.id.as_str()).collect();
        concept_ids.sort_unstable();
        concept_ids.dedup();
        assert_eq!(concept_ids.len(), lore.concepts.len());
    }

    #[test]
    fn test_chapters_have_paragraph_bodies() {
        let store = ContentStore::from_json(CHAPTERS_JSON, LORE_JSON).unwrap();
        for chapter in store.chapters() {
            assert!(chapter.paragraphs().count() > 1, "chapter {} has no body", chapter.id);
        }
    }

    #[test]
    fn test_get_returns_same_store() {
        let a = ContentStore::get().unwrap();
        let b = ContentStore::get().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_malformed_fixture_is_an_error() {
        assert!(ContentStore::from_json("not json", LORE_JSON).is_err());
        assert!(ContentStore::from_json(CHAPTERS_JSON, "[]").is_err());
    }
}
