use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One installment of the serial: ordering metadata plus the full body text.
/// Paragraphs in `content` are separated by blank lines.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: u32,
    pub title: String,
    pub publish_date: NaiveDate,
    pub word_count: u32,
    pub content: String,
}

impl Chapter {
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split("\n\n").filter(|p| !p.trim().is_empty())
    }

    pub fn first_paragraph(&self) -> &str {
        self.paragraphs().next().unwrap_or("")
    }

    /// Estimated reading time at 200 words per minute, rounded up.
    pub fn reading_minutes(&self) -> u32 {
        self.word_count.div_ceil(200)
    }

    /// Publish date formatted the way the chapter list shows it,
    /// e.g. "January 15, 2024".
    pub fn publish_date_display(&self) -> String {
        self.publish_date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterStatus {
    Living,
    #[serde(rename = "Living Dead")]
    LivingDead,
    Unknown,
}

impl CharacterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CharacterStatus::Living => "Living",
            CharacterStatus::LivingDead => "Living Dead",
            CharacterStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub traits: Vec<String>,
    pub status: CharacterStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Concept {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
}

/// The three lore collections, as bundled in `data/lore.json`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Lore {
    pub characters: Vec<Character>,
    pub locations: Vec<Location>,
    pub concepts: Vec<Concept>,
}

/// The four navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Chapters,
    Reader,
    Lore,
}

impl Page {
    /// Parse a page name from the CLI. Unknown names fall back to the
    /// home page; this is the documented default, not an error.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "chapters" => Page::Chapters,
            "reader" => Page::Reader,
            "lore" => Page::Lore,
            _ => Page::Home,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Chapters => "Chapters",
            Page::Reader => "Reader",
            Page::Lore => "Lore",
        }
    }
}

/// Active lore category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoreTab {
    #[default]
    Characters,
    Locations,
    Concepts,
}

impl LoreTab {
    pub const ALL: [LoreTab; 3] = [LoreTab::Characters, LoreTab::Locations, LoreTab::Concepts];

    pub fn label(&self) -> &'static str {
        match self {
            LoreTab::Characters => "Characters",
            LoreTab::Locations => "Locations",
            LoreTab::Concepts => "Concepts",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            LoreTab::Characters => LoreTab::Locations,
            LoreTab::Locations => LoreTab::Concepts,
            LoreTab::Concepts => LoreTab::Characters,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            LoreTab::Characters => LoreTab::Concepts,
            LoreTab::Locations => LoreTab::Characters,
            LoreTab::Concepts => LoreTab::Locations,
        }
    }
}

/// Reader text size. In the terminal a larger size means a narrower
/// column and more space between paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    /// Wrap width for the reader column.
    pub fn text_width(&self) -> usize {
        match self {
            FontSize::Small => 90,
            FontSize::Medium => 72,
            FontSize::Large => 56,
        }
    }

    /// Blank lines between paragraphs.
    pub fn paragraph_spacing(&self) -> usize {
        match self {
            FontSize::Small | FontSize::Medium => 1,
            FontSize::Large => 2,
        }
    }

    pub fn larger(&self) -> Self {
        match self {
            FontSize::Small => FontSize::Medium,
            FontSize::Medium | FontSize::Large => FontSize::Large,
        }
    }

    pub fn smaller(&self) -> Self {
        match self {
            FontSize::Large => FontSize::Medium,
            FontSize::Medium | FontSize::Small => FontSize::Small,
        }
    }
}

/// Thousands-separated count for display, e.g. 2450 -> "2,450".
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
