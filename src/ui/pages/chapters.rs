use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::content::ContentStore;
use crate::models::{Chapter, format_count};
use crate::search::filter_chapters;
use crate::session::Session;

pub fn render(frame: &mut Frame, area: Rect, store: &ContentStore, session: &Session) {
    let [search_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    render_search_bar(frame, search_area, session);

    let filtered = filter_chapters(store.chapters(), &session.search_query);
    if filtered.is_empty() {
        render_empty(frame, list_area);
    } else {
        render_list(frame, list_area, &filtered, session);
    }
}

fn render_search_bar(frame: &mut Frame, area: Rect, session: &Session) {
    let mut spans = vec![Span::raw("/"), Span::raw(session.search_query.clone())];
    if session.search_input {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::Cyan)));
    }

    let title = if session.search_input {
        "Search (Esc to finish)"
    } else {
        "Search (press / to type)"
    };

    let style = if session.search_input {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let bar = Paragraph::new(Line::from(spans))
        .style(style)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(bar, area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("No chapters found matching your search.").centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Clear the query to see every chapter.",
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .centered(),
    ];

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_list(frame: &mut Frame, area: Rect, chapters: &[&Chapter], session: &Session) {
    let items: Vec<ListItem> = chapters.iter().map(|chapter| card(chapter, area)).collect();

    let list = List::new(items)
        .block(Block::default().title("Chapters").borders(Borders::TOP))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

    let selected = session.chapter_selected.min(chapters.len().saturating_sub(1));
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn card(chapter: &Chapter, area: Rect) -> ListItem<'static> {
    let title = Line::from(vec![
        Span::styled(format!("{:>3}  ", chapter.id), Style::default().fg(Color::Cyan)),
        Span::styled(chapter.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ]);
    let meta = Line::from(Span::styled(
        format!(
            "     {} \u{b7} {} words \u{b7} {} min read",
            chapter.publish_date_display(),
            format_count(chapter.word_count),
            chapter.reading_minutes()
        ),
        Style::default().fg(Color::DarkGray),
    ));

    let preview_width = area.width.saturating_sub(7) as usize;
    let preview = Line::from(Span::styled(
        format!("     {}", super::truncated(chapter.first_paragraph(), preview_width)),
        Style::default().fg(Color::Gray),
    ));

    ListItem::new(vec![title, meta, preview, Line::from("")])
}
