use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use eyre::Result;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::config::Config;
use crate::content::ContentStore;
use crate::models::{LoreTab, Page};
use crate::nav;
use crate::search::filter_chapters;
use crate::session::Session;
use crate::settings::Settings;
use crate::ui::pages::{chapters, home, lore, reader};
use crate::ui::windows::help::HelpWindow;

const NAV_BAR_ROWS: u16 = 3;

/// The interactive reader: owns the terminal, the content store handle,
/// and the whole of the session state.
pub struct App {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
    session: Session,
    store: &'static ContentStore,
}

impl App {
    pub fn new(config: Config, session: Session, store: &'static ContentStore) -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            config,
            session,
            store,
        })
    }

    /// Run the main application loop. The terminal is restored even when
    /// the loop exits with an error.
    pub fn run(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;

        let result = self.event_loop();
        let restored = self.restore_terminal();

        resolve_exit(result, restored)
    }

    fn event_loop(&mut self) -> Result<()> {
        self.terminal.clear()?;
        self.terminal.hide_cursor()?;

        loop {
            if self.session.should_quit {
                break;
            }

            self.clamp_scroll()?;

            {
                let Self {
                    terminal,
                    config,
                    session,
                    store,
                } = self;
                terminal.draw(|f| render_static(f, session, store, &config.settings))?;
            }

            if !crossterm::event::poll(Duration::from_secs(60))? {
                continue;
            }

            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key)?;
                }
                // A resize is handled by the next draw.
                _ => {}
            }
        }

        // Remember the text size the reader ended with.
        if self.session.font_size != self.config.settings.font_size {
            self.config.settings.font_size = self.session.font_size;
            self.config.save()?;
        }

        Ok(())
    }

    fn restore_terminal(&mut self) -> Result<()> {
        self.terminal.clear()?;
        self.terminal.show_cursor()?;
        crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
        crossterm::terminal::disable_raw_mode()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // The help popup swallows the next key press.
        if self.session.show_help {
            self.session.show_help = false;
            return Ok(());
        }

        // Search input captures printable keys before global bindings.
        if self.session.page == Page::Chapters && self.session.search_input {
            self.handle_search_input_keys(key);
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') => self.session.quit(),
            KeyCode::Char('?') => self.session.show_help = true,
            KeyCode::Char('b') => self.session.navigate(Page::Home, None),
            KeyCode::Char('c') => self.session.navigate(Page::Chapters, None),
            KeyCode::Char('w') => self.session.navigate(Page::Lore, None),
            _ => match self.session.page {
                Page::Home => self.handle_home_keys(key),
                Page::Chapters => self.handle_chapters_keys(key),
                Page::Reader => self.handle_reader_keys(key)?,
                Page::Lore => self.handle_lore_keys(key)?,
            },
        }

        Ok(())
    }

    fn handle_home_keys(&mut self, key: KeyEvent) {
        let featured = home::featured(self.store);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if !featured.is_empty() {
                    self.session.home_selected =
                        (self.session.home_selected + 1).min(featured.len() - 1);
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.session.home_selected = self.session.home_selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(chapter) = featured.get(self.session.home_selected) {
                    let id = chapter.id;
                    self.session.navigate(Page::Reader, Some(id));
                }
            }
            KeyCode::Char('s') => {
                if let Some(first) = self.store.chapters().first() {
                    let id = first.id;
                    self.session.navigate(Page::Reader, Some(id));
                }
            }
            _ => {}
        }
    }

    fn handle_chapters_keys(&mut self, key: KeyEvent) {
        let filtered = filter_chapters(self.store.chapters(), &self.session.search_query);
        match key.code {
            KeyCode::Char('/') => self.session.search_input = true,
            KeyCode::Char('j') | KeyCode::Down => {
                if !filtered.is_empty() {
                    self.session.chapter_selected =
                        (self.session.chapter_selected + 1).min(filtered.len() - 1);
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.session.chapter_selected = self.session.chapter_selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(chapter) = filtered.get(self.session.chapter_selected) {
                    let id = chapter.id;
                    self.session.navigate(Page::Reader, Some(id));
                }
            }
            KeyCode::Esc => self.session.navigate(Page::Home, None),
            _ => {}
        }
    }

    fn handle_search_input_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.session.search_input = false,
            KeyCode::Backspace => self.session.pop_search_char(),
            KeyCode::Char(c) => self.session.push_search_char(c),
            _ => {}
        }
    }

    fn handle_reader_keys(&mut self, key: KeyEvent) -> Result<()> {
        let position = nav::locate(self.store.chapters(), self.session.chapter_id);

        if !position.is_found() {
            // Only exits are meaningful on the not-found screen.
            if key.code == KeyCode::Enter || key.code == KeyCode::Esc {
                self.session.navigate(Page::Chapters, None);
            }
            return Ok(());
        }

        let size = self.terminal.size()?;
        let max = self.max_scroll(size.width, size.height);
        let page_rows = reader_visible_rows(size.height, &self.config.settings);

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.session.scroll = (self.session.scroll + 1).min(max);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.session.scroll = self.session.scroll.saturating_sub(1);
            }
            KeyCode::Char(' ') | KeyCode::PageDown => {
                self.session.scroll = (self.session.scroll + page_rows).min(max);
            }
            KeyCode::PageUp => {
                self.session.scroll = self.session.scroll.saturating_sub(page_rows);
            }
            KeyCode::Char('g') | KeyCode::Home => self.session.scroll = 0,
            KeyCode::Char('G') | KeyCode::End => self.session.scroll = max,
            KeyCode::Char('H') | KeyCode::Left => {
                if let Some(previous) = position.previous() {
                    let id = previous.id;
                    self.session.navigate(Page::Reader, Some(id));
                }
            }
            KeyCode::Char('L') | KeyCode::Right => {
                if let Some(next) = position.next() {
                    let id = next.id;
                    self.session.navigate(Page::Reader, Some(id));
                }
            }
            KeyCode::Char('+') => self.session.grow_font(),
            KeyCode::Char('-') => self.session.shrink_font(),
            KeyCode::Esc => self.session.navigate(Page::Chapters, None),
            _ => {}
        }

        Ok(())
    }

    fn handle_lore_keys(&mut self, key: KeyEvent) -> Result<()> {
        let size = self.terminal.size()?;
        let max = self.max_scroll(size.width, size.height);

        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.session.select_tab(self.session.tab.next());
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.session.select_tab(self.session.tab.previous());
            }
            KeyCode::Char('1') => self.session.select_tab(LoreTab::Characters),
            KeyCode::Char('2') => self.session.select_tab(LoreTab::Locations),
            KeyCode::Char('3') => self.session.select_tab(LoreTab::Concepts),
            KeyCode::Char('j') | KeyCode::Down => {
                self.session.scroll = (self.session.scroll + 1).min(max);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.session.scroll = self.session.scroll.saturating_sub(1);
            }
            KeyCode::Esc => self.session.navigate(Page::Home, None),
            _ => {}
        }

        Ok(())
    }

    /// Keep the scroll offset inside the current content, e.g. after a
    /// resize or a font-size change re-wrapped the text.
    fn clamp_scroll(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        let max = self.max_scroll(size.width, size.height);
        if self.session.scroll > max {
            self.session.scroll = max;
        }
        Ok(())
    }

    fn max_scroll(&self, width: u16, height: u16) -> usize {
        match self.session.page {
            Page::Reader => {
                let position = nav::locate(self.store.chapters(), self.session.chapter_id);
                let Some(chapter) = position.chapter() else {
                    return 0;
                };
                let rows =
                    reader::wrapped_rows(chapter, self.session.font_size, width as usize);
                rows.saturating_sub(reader_visible_rows(height, &self.config.settings))
            }
            Page::Lore => {
                let rows =
                    lore::content_rows(self.store.lore(), self.session.tab, width as usize);
                rows.saturating_sub(lore_visible_rows(height, &self.config.settings))
            }
            // The list views keep their selection visible on their own.
            Page::Home | Page::Chapters => 0,
        }
    }
}

/// Combine the loop's outcome with the terminal restore's. The loop's
/// error is the interesting one; a restore failure only surfaces when
/// the loop itself succeeded.
fn resolve_exit(result: Result<()>, restored: Result<()>) -> Result<()> {
    match result {
        Ok(()) => restored,
        Err(err) => Err(err),
    }
}

/// Rows of chapter body visible between the reader chrome.
fn reader_visible_rows(height: u16, settings: &Settings) -> usize {
    let hint = if settings.show_hint_bar { 1 } else { 0 };
    let footer = if settings.show_progress_footer {
        reader::FOOTER_ROWS
    } else {
        0
    };
    height
        .saturating_sub(NAV_BAR_ROWS + hint + reader::HEADER_ROWS + footer)
        .max(1) as usize
}

/// Rows of lore entries visible between the tab bar and the footer panel.
fn lore_visible_rows(height: u16, settings: &Settings) -> usize {
    let hint = if settings.show_hint_bar { 1 } else { 0 };
    // Tab bar (2) plus the About the World panel (4).
    height.saturating_sub(NAV_BAR_ROWS + hint + 6).max(1) as usize
}

fn render_static(frame: &mut Frame, session: &Session, store: &ContentStore, settings: &Settings) {
    let hint = if settings.show_hint_bar { 1 } else { 0 };
    let [nav_area, content_area, hint_area] = Layout::vertical([
        Constraint::Length(NAV_BAR_ROWS),
        Constraint::Min(0),
        Constraint::Length(hint),
    ])
    .areas(frame.area());

    render_nav_bar(frame, nav_area, session.page);

    match session.page {
        Page::Home => home::render(frame, content_area, store, session),
        Page::Chapters => chapters::render(frame, content_area, store, session),
        Page::Reader => reader::render(frame, content_area, store, session, settings),
        Page::Lore => lore::render(frame, content_area, store, session),
    }

    if settings.show_hint_bar {
        render_hint_bar(frame, hint_area, session);
    }

    if session.show_help {
        let whole = frame.area();
        HelpWindow::render(frame, whole);
    }
}

fn render_nav_bar(frame: &mut Frame, area: Rect, active: Page) {
    let mut spans = vec![
        Span::styled(
            " THRESHOLD ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for page in [Page::Home, Page::Chapters, Page::Reader, Page::Lore] {
        let style = if page == active {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", page.title()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_hint_bar(frame: &mut Frame, area: Rect, session: &Session) {
    let hints = match session.page {
        Page::Home => "j/k select \u{b7} Enter read \u{b7} s start at chapter 1 \u{b7} c chapters \u{b7} w lore \u{b7} ? help \u{b7} q quit",
        Page::Chapters if session.search_input => "type to search \u{b7} Backspace delete \u{b7} Esc done",
        Page::Chapters => "/ search \u{b7} j/k select \u{b7} Enter read \u{b7} b home \u{b7} ? help \u{b7} q quit",
        Page::Reader => "j/k scroll \u{b7} Space page \u{b7} H/L chapters \u{b7} +/- text size \u{b7} c chapters \u{b7} q quit",
        Page::Lore => "Tab/1/2/3 category \u{b7} j/k scroll \u{b7} b home \u{b7} ? help \u{b7} q quit",
    };

    frame.render_widget(
        Paragraph::new(Line::from(hints)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
