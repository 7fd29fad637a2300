use crate::models::{FontSize, LoreTab, Page};

/// The whole of the UI selection state, owned by the event loop and
/// mutated only in response to key events. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub page: Page,
    /// Chapter the reader view shows. Retained across page changes that
    /// do not name a chapter.
    pub chapter_id: u32,
    pub search_query: String,
    /// True while the chapter list is capturing typed search input.
    pub search_input: bool,
    /// Selected row in the chapter list (index into the filtered list).
    pub chapter_selected: usize,
    /// Selected card in the home view's latest-chapters strip.
    pub home_selected: usize,
    pub tab: LoreTab,
    pub font_size: FontSize,
    /// Scroll offset of the active view, in rows. Reset on navigation.
    pub scroll: usize,
    pub show_help: bool,
    pub should_quit: bool,
}

impl Session {
    pub fn new(font_size: FontSize) -> Self {
        Self {
            page: Page::Home,
            chapter_id: 1,
            search_query: String::new(),
            search_input: false,
            chapter_selected: 0,
            home_selected: 0,
            tab: LoreTab::default(),
            font_size,
            scroll: 0,
            show_help: false,
            should_quit: false,
        }
    }

    /// Transition to `page`, optionally selecting a chapter at the same
    /// time. Any transition scrolls the new view back to the top.
    pub fn navigate(&mut self, page: Page, chapter_id: Option<u32>) {
        self.page = page;
        if let Some(id) = chapter_id {
            self.chapter_id = id;
        }
        self.scroll = 0;
        self.search_input = false;
    }

    pub fn set_search_query(&mut self, query: String) {
        if query != self.search_query {
            self.search_query = query;
            // A changed query invalidates the old selection.
            self.chapter_selected = 0;
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut query = self.search_query.clone();
        query.push(c);
        self.set_search_query(query);
    }

    pub fn pop_search_char(&mut self) {
        let mut query = self.search_query.clone();
        query.pop();
        self.set_search_query(query);
    }

    pub fn select_tab(&mut self, tab: LoreTab) {
        if tab != self.tab {
            self.tab = tab;
            self.scroll = 0;
        }
    }

    pub fn grow_font(&mut self) {
        self.font_size = self.font_size.larger();
    }

    pub fn shrink_font(&mut self) {
        self.font_size = self.font_size.smaller();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FontSize::default())
    }
}
