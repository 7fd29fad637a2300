use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::content::ContentStore;
use crate::models::{Chapter, FontSize, format_count};
use crate::nav;
use crate::session::Session;
use crate::settings::Settings;

/// Rows taken by the chapter header.
pub const HEADER_ROWS: u16 = 4;
/// Rows taken by the progress footer when enabled.
pub const FOOTER_ROWS: u16 = 4;

/// Effective wrap width for the reader column: the font's preset,
/// narrowed to fit the terminal.
pub fn effective_width(font_size: FontSize, area_width: usize) -> usize {
    font_size.text_width().min(area_width.saturating_sub(2)).max(20)
}

/// Total rows the wrapped chapter body occupies at the given width,
/// including blank rows between paragraphs. Used to clamp scrolling.
pub fn wrapped_rows(chapter: &Chapter, font_size: FontSize, area_width: usize) -> usize {
    let width = effective_width(font_size, area_width);
    let spacing = font_size.paragraph_spacing();

    let mut rows = 0;
    for (i, paragraph) in chapter.paragraphs().enumerate() {
        if i > 0 {
            rows += spacing;
        }
        rows += textwrap::wrap(paragraph, width).len();
    }
    rows
}

fn body_lines(chapter: &Chapter, font_size: FontSize, area_width: usize) -> Vec<Line<'static>> {
    let width = effective_width(font_size, area_width);
    let spacing = font_size.paragraph_spacing();

    let mut lines = Vec::new();
    for (i, paragraph) in chapter.paragraphs().enumerate() {
        if i > 0 {
            for _ in 0..spacing {
                lines.push(Line::from(""));
            }
        }
        for wrapped in textwrap::wrap(paragraph, width) {
            lines.push(Line::from(wrapped.into_owned()));
        }
    }
    lines
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    store: &ContentStore,
    session: &Session,
    settings: &Settings,
) {
    let position = nav::locate(store.chapters(), session.chapter_id);
    let Some(chapter) = position.chapter() else {
        render_not_found(frame, area, session.chapter_id);
        return;
    };

    let footer_rows = if settings.show_progress_footer { FOOTER_ROWS } else { 0 };
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_ROWS),
        Constraint::Min(0),
        Constraint::Length(footer_rows),
    ])
    .areas(area);

    render_header(frame, header_area, chapter, session.font_size);
    render_body(frame, body_area, chapter, session);
    if settings.show_progress_footer {
        render_footer(frame, footer_area, &position);
    }
}

fn render_header(frame: &mut Frame, area: Rect, chapter: &Chapter, font_size: FontSize) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Chapter {}  ", chapter.id),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                chapter.title.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "{} \u{b7} {} words \u{b7} {} min read \u{b7} text: {}",
                chapter.publish_date_display(),
                format_count(chapter.word_count),
                chapter.reading_minutes(),
                font_size.label()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn render_body(frame: &mut Frame, area: Rect, chapter: &Chapter, session: &Session) {
    let width = effective_width(session.font_size, area.width as usize);
    let lines = body_lines(chapter, session.font_size, area.width as usize);

    // Center the text column in the available area.
    let pad = (area.width as usize).saturating_sub(width) / 2;
    let column = Rect::new(
        area.x + pad as u16,
        area.y,
        width.min(area.width as usize) as u16,
        area.height,
    );

    let paragraph = Paragraph::new(lines).scroll((session.scroll as u16, 0));
    frame.render_widget(paragraph, column);
}

fn render_footer(frame: &mut Frame, area: Rect, position: &nav::ChapterPosition<'_>) {
    let (index, total) = (position.index().unwrap_or(0), position.total());

    let previous = if position.has_previous() {
        Span::styled("\u{2190} H previous", Style::default().fg(Color::Cyan))
    } else {
        Span::styled("\u{2190} H previous", Style::default().fg(Color::DarkGray))
    };
    let next = if position.has_next() {
        Span::styled("L next \u{2192}", Style::default().fg(Color::Cyan))
    } else {
        Span::styled("L next \u{2192}", Style::default().fg(Color::DarkGray))
    };

    let mut lines = vec![
        Line::from(vec![
            previous,
            Span::raw(format!("   Chapter {} of {}   ", index + 1, total)),
            next,
        ])
        .centered(),
    ];

    if let Some(up_next) = position.next() {
        lines.push(
            Line::from(Span::styled(
                format!("Up next \u{2014} Chapter {}: {}", up_next.id, up_next.title),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ))
            .centered(),
        );
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP)),
        area,
    );
}

fn render_not_found(frame: &mut Frame, area: Rect, chapter_id: u32) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Chapter not found",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(format!("There is no chapter with id {chapter_id}.")).centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Press c to go back to the chapter list.",
            Style::default().fg(Color::Cyan),
        ))
        .centered(),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn chapter(content: &str) -> Chapter {
        Chapter {
            id: 1,
            title: "The Crossing".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            word_count: 2450,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_effective_width_prefers_font_preset() {
        assert_eq!(effective_width(FontSize::Medium, 200), 72);
        assert_eq!(effective_width(FontSize::Small, 200), 90);
    }

    #[test]
    fn test_effective_width_clamps_to_terminal() {
        assert_eq!(effective_width(FontSize::Small, 50), 48);
        // Never collapses below a readable floor.
        assert_eq!(effective_width(FontSize::Small, 10), 20);
    }

    #[test]
    fn test_wrapped_rows_counts_spacing() {
        let ch = chapter("one two three\n\nfour five six");
        // Two short paragraphs, one row each, plus one spacing row.
        assert_eq!(wrapped_rows(&ch, FontSize::Medium, 100), 3);
        // Large size uses two blank rows between paragraphs.
        assert_eq!(wrapped_rows(&ch, FontSize::Large, 100), 4);
    }

    #[test]
    fn test_wrapped_rows_grows_when_column_narrows() {
        let ch = chapter(&"word ".repeat(200));
        let wide = wrapped_rows(&ch, FontSize::Small, 200);
        let narrow = wrapped_rows(&ch, FontSize::Large, 200);
        assert!(narrow > wide);
    }

    #[test]
    fn test_body_lines_match_row_count() {
        let ch = chapter("one two three\n\nfour five six\n\nseven");
        let rows = wrapped_rows(&ch, FontSize::Medium, 100);
        let lines = body_lines(&ch, FontSize::Medium, 100);
        assert_eq!(lines.len(), rows);
    }
}
