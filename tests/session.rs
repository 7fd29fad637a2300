#[cfg(test)]
mod tests {
    use threshold::models::{FontSize, LoreTab, Page};
    use threshold::session::Session;

    #[test]
    fn test_reading_session_flow() {
        let mut session = Session::new(FontSize::Medium);
        assert_eq!(session.page, Page::Home);

        // Browse to the chapter list and type a query.
        session.navigate(Page::Chapters, None);
        session.search_input = true;
        for c in "echo".chars() {
            session.push_search_char(c);
        }
        assert_eq!(session.search_query, "echo");
        assert_eq!(session.chapter_selected, 0);

        // Open a chapter, scroll, then bump the text size.
        session.navigate(Page::Reader, Some(2));
        assert_eq!(session.chapter_id, 2);
        assert_eq!(session.scroll, 0);
        assert!(!session.search_input);

        session.scroll = 40;
        session.grow_font();
        assert_eq!(session.font_size, FontSize::Large);

        // Moving to the next chapter starts it from the top.
        session.navigate(Page::Reader, Some(3));
        assert_eq!(session.scroll, 0);
        assert_eq!(session.font_size, FontSize::Large);

        // The query survives the detour through the reader.
        session.navigate(Page::Chapters, None);
        assert_eq!(session.search_query, "echo");
    }

    #[test]
    fn test_lore_tab_switching_resets_scroll() {
        let mut session = Session::new(FontSize::Medium);
        session.navigate(Page::Lore, None);
        session.scroll = 12;

        // Re-selecting the active tab keeps the position.
        session.select_tab(LoreTab::Characters);
        assert_eq!(session.scroll, 12);

        session.select_tab(LoreTab::Concepts);
        assert_eq!(session.tab, LoreTab::Concepts);
        assert_eq!(session.scroll, 0);
    }

    #[test]
    fn test_unknown_page_name_lands_on_home() {
        let mut session = Session::new(FontSize::Medium);
        session.navigate(Page::from_name("archive"), None);
        assert_eq!(session.page, Page::Home);
    }
}
