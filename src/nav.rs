use crate::models::Chapter;

/// Position of a chapter within the ordered chapter sequence, used to
/// compute previous/next adjacency.
///
/// An unknown id yields a position with no index; every accessor then
/// reports the not-found outcome (`None` / `false`) instead of panicking
/// or wrapping around.
#[derive(Debug, Clone, Copy)]
pub struct ChapterPosition<'a> {
    chapters: &'a [Chapter],
    index: Option<usize>,
}

/// Locate `chapter_id` in `chapters` (first match wins).
pub fn locate(chapters: &[Chapter], chapter_id: u32) -> ChapterPosition<'_> {
    let index = chapters.iter().position(|chapter| chapter.id == chapter_id);
    ChapterPosition { chapters, index }
}

impl<'a> ChapterPosition<'a> {
    pub fn chapter(&self) -> Option<&'a Chapter> {
        self.index.map(|i| &self.chapters[i])
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    pub fn has_next(&self) -> bool {
        matches!(self.index, Some(i) if i + 1 < self.chapters.len())
    }

    /// The chapter before this one, or `None` at the start of the serial.
    pub fn previous(&self) -> Option<&'a Chapter> {
        if self.has_previous() {
            self.index.map(|i| &self.chapters[i - 1])
        } else {
            None
        }
    }

    /// The chapter after this one, or `None` at the end of the serial.
    pub fn next(&self) -> Option<&'a Chapter> {
        if self.has_next() {
            self.index.map(|i| &self.chapters[i + 1])
        } else {
            None
        }
    }

    pub fn total(&self) -> usize {
        self.chapters.len()
    }
}
