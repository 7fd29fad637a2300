use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::content::ContentStore;
use crate::models::{Chapter, format_count};
use crate::session::Session;

/// How many chapters the latest-chapters strip shows.
pub const FEATURED_COUNT: usize = 3;

const SERIAL_KIND: &str = "A Supernatural Noir Serial";
const TAGLINE: &str =
    "Where the living meet the dead, and the line between worlds grows dangerously thin.";
const SYNOPSIS: &[&str] = &[
    "Detective Sarah Cross thought she understood death. Then Marcus walked into her \
     apartment\u{2014}a dead man with a warning: something is tearing holes between worlds, \
     and the bodies are piling up.",
    "Now she walks the threshold between reality and nightmare, hunting a killer who's \
     already crossed over. In a city where monsters hide in plain sight and nightclubs \
     serve as neutral ground, Sarah must solve a case that doesn't officially exist\u{2014}\
     before the final ritual opens a gate that can never be closed.",
];

/// The newest chapters, in reading order.
pub fn featured(store: &ContentStore) -> &[Chapter] {
    let chapters = store.chapters();
    let start = chapters.len().saturating_sub(FEATURED_COUNT);
    &chapters[start..]
}

pub fn render(frame: &mut Frame, area: Rect, store: &ContentStore, session: &Session) {
    let [banner_area, synopsis_area, latest_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(7),
        Constraint::Min(0),
    ])
    .areas(area);

    render_banner(frame, banner_area);
    render_synopsis(frame, synopsis_area);
    render_latest(frame, latest_area, store, session);
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            SERIAL_KIND,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
        .centered(),
        Line::from(Span::styled(
            "T H R E S H O L D",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))).centered(),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn render_synopsis(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for paragraph in SYNOPSIS {
        lines.push(Line::from(*paragraph));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Gray)),
        area,
    );
}

fn render_latest(frame: &mut Frame, area: Rect, store: &ContentStore, session: &Session) {
    let chapters = featured(store);

    let items: Vec<ListItem> = chapters
        .iter()
        .map(|chapter| {
            let title = Line::from(vec![
                Span::styled(
                    format!("Chapter {}: ", chapter.id),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    chapter.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]);
            let meta = Line::from(Span::styled(
                format!(
                    "{} words \u{b7} {} min read",
                    format_count(chapter.word_count),
                    chapter.reading_minutes()
                ),
                Style::default().fg(Color::DarkGray),
            ));
            let preview = Line::from(Span::styled(
                super::truncated(chapter.first_paragraph(), area.width.saturating_sub(4) as usize),
                Style::default().fg(Color::Gray),
            ));
            ListItem::new(vec![title, meta, preview, Line::from("")])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title("Latest Chapters").borders(Borders::TOP))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

    let mut state = ListState::default().with_selected(Some(session.home_selected));
    frame.render_stateful_widget(list, area, &mut state);
}
