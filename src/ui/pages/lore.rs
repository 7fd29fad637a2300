use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::content::ContentStore;
use crate::lore::{LoreEntry, select_lore, tab_count};
use crate::models::{CharacterStatus, Lore, LoreTab};
use crate::session::Session;

const ABOUT: &str = "The world of Threshold exists at the intersection of our reality and \
something else\u{2014}a place where the rules of life and death bend, where creatures from \
nightmares walk among us, and where certain individuals can perceive both worlds \
simultaneously. As the story unfolds, more characters, locations, and concepts will be \
revealed.";

/// Rows the active tab's entries occupy at the given width. Used to
/// clamp scrolling.
pub fn content_rows(lore: &Lore, tab: LoreTab, width: usize) -> usize {
    build_lines(lore, tab, width).len()
}

pub fn render(frame: &mut Frame, area: Rect, store: &ContentStore, session: &Session) {
    let [tabs_area, content_area, about_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(4),
    ])
    .areas(area);

    render_tab_bar(frame, tabs_area, store.lore(), session.tab);

    let lines = build_lines(store.lore(), session.tab, content_area.width as usize);
    let content = Paragraph::new(lines).scroll((session.scroll as u16, 0));
    frame.render_widget(content, content_area);

    render_about(frame, about_area);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, lore: &Lore, active: LoreTab) {
    let mut spans = Vec::new();
    for tab in LoreTab::ALL {
        let label = format!(" {} ({}) ", tab.label(), tab_count(lore, tab));
        let style = if tab == active {
            Style::default().bg(Color::Blue).fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn build_lines(lore: &Lore, tab: LoreTab, width: usize) -> Vec<Line<'static>> {
    let wrap_width = width.saturating_sub(2).max(20);
    let mut lines = Vec::new();

    for entry in select_lore(lore, tab) {
        let mut heading = vec![
            Span::styled(
                entry.name().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", entry.badge()),
                Style::default().fg(Color::Cyan),
            ),
        ];
        if let LoreEntry::Character(character) = entry {
            heading.push(Span::raw("  "));
            heading.push(Span::styled(
                format!("[{}]", character.status.label()),
                Style::default().fg(status_color(character.status)),
            ));
        }
        lines.push(Line::from(heading));

        if let LoreEntry::Character(character) = entry
            && !character.traits.is_empty()
        {
            lines.push(Line::from(Span::styled(
                character.traits.join(" \u{b7} "),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }

        for wrapped in textwrap::wrap(entry.description(), wrap_width) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    }

    lines
}

fn status_color(status: CharacterStatus) -> Color {
    match status {
        CharacterStatus::Living => Color::Green,
        CharacterStatus::LivingDead => Color::Magenta,
        CharacterStatus::Unknown => Color::Cyan,
    }
}

fn render_about(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(ABOUT)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title("About the World").borders(Borders::TOP)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_rows_nonzero_for_bundled_lore() {
        let store = ContentStore::get().unwrap();
        for tab in LoreTab::ALL {
            assert!(content_rows(store.lore(), tab, 80) > 0);
        }
    }

    #[test]
    fn test_characters_tab_includes_traits_row() {
        let store = ContentStore::get().unwrap();
        let with_traits = content_rows(store.lore(), LoreTab::Characters, 80);
        // Every bundled character carries traits, so the characters tab
        // has at least one extra row per entry compared to headings +
        // descriptions alone.
        assert!(with_traits > store.lore().characters.len() * 2);
    }

    #[test]
    fn test_narrow_width_grows_rows() {
        let store = ContentStore::get().unwrap();
        let wide = content_rows(store.lore(), LoreTab::Concepts, 120);
        let narrow = content_rows(store.lore(), LoreTab::Concepts, 40);
        assert!(narrow > wide);
    }
}
