use crate::models::{Character, Concept, Location, Lore, LoreTab};

/// A lore record viewed through the tab bar, whichever category it
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoreEntry<'a> {
    Character(&'a Character),
    Location(&'a Location),
    Concept(&'a Concept),
}

impl<'a> LoreEntry<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            LoreEntry::Character(c) => &c.name,
            LoreEntry::Location(l) => &l.name,
            LoreEntry::Concept(c) => &c.name,
        }
    }

    pub fn description(&self) -> &'a str {
        match self {
            LoreEntry::Character(c) => &c.description,
            LoreEntry::Location(l) => &l.description,
            LoreEntry::Concept(c) => &c.description,
        }
    }

    /// The category-specific badge shown next to the name: role for a
    /// character, type for a location, category for a concept.
    pub fn badge(&self) -> &'a str {
        match self {
            LoreEntry::Character(c) => &c.role,
            LoreEntry::Location(l) => &l.kind,
            LoreEntry::Concept(c) => &c.category,
        }
    }
}

/// Project the lore collection matching the active tab. Pure; order is
/// the fixture order.
pub fn select_lore(lore: &Lore, tab: LoreTab) -> Vec<LoreEntry<'_>> {
    match tab {
        LoreTab::Characters => lore.characters.iter().map(LoreEntry::Character).collect(),
        LoreTab::Locations => lore.locations.iter().map(LoreEntry::Location).collect(),
        LoreTab::Concepts => lore.concepts.iter().map(LoreEntry::Concept).collect(),
    }
}

/// Entry count for a tab, shown in the tab bar.
pub fn tab_count(lore: &Lore, tab: LoreTab) -> usize {
    match tab {
        LoreTab::Characters => lore.characters.len(),
        LoreTab::Locations => lore.locations.len(),
        LoreTab::Concepts => lore.concepts.len(),
    }
}
