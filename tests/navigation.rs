#[cfg(test)]
mod tests {
    use threshold::content::ContentStore;
    use threshold::nav::locate;
    use threshold::search::filter_chapters;

    #[test]
    fn test_search_then_open_result() {
        let store = ContentStore::get().unwrap();

        // "echo" matches chapter 2 by title, case-insensitively.
        let hits = filter_chapters(store.chapters(), "echo");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        let position = locate(store.chapters(), hits[0].id);
        assert_eq!(position.index(), Some(1));
        assert!(position.has_previous());
        assert!(position.has_next());
    }

    #[test]
    fn test_walking_the_whole_serial() {
        let store = ContentStore::get().unwrap();
        let first = store.chapters().first().unwrap();

        let mut position = locate(store.chapters(), first.id);
        let mut visited = vec![first.id];
        while let Some(next) = position.next() {
            visited.push(next.id);
            position = locate(store.chapters(), next.id);
        }

        let ids: Vec<u32> = store.chapters().iter().map(|ch| ch.id).collect();
        assert_eq!(visited, ids);
        assert!(!position.has_next());
    }

    #[test]
    fn test_unknown_chapter_is_not_found() {
        let store = ContentStore::get().unwrap();
        let position = locate(store.chapters(), 99);
        assert!(!position.is_found());
        assert!(position.chapter().is_none());
        assert!(position.previous().is_none());
        assert!(position.next().is_none());
    }
}
