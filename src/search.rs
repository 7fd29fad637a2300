use crate::models::Chapter;

/// Filter chapters by a case-insensitive substring match against title or
/// content.
///
/// An empty or all-whitespace query returns every chapter. Anything else
/// matches as typed: surrounding whitespace is part of the needle. The
/// filter is stable: retained chapters keep their original relative order.
/// No match yields an empty vec, which the caller renders as an explicit
/// empty state rather than an error.
pub fn filter_chapters<'a>(chapters: &'a [Chapter], query: &str) -> Vec<&'a Chapter> {
    if query.trim().is_empty() {
        return chapters.iter().collect();
    }

    let needle = query.to_lowercase();
    chapters
        .iter()
        .filter(|chapter| {
            chapter.title.to_lowercase().contains(&needle)
                || chapter.content.to_lowercase().contains(&needle)
        })
        .collect()
}
