use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
    text::Line,
};

use crate::ui::windows::centered_popup_area;

pub struct HelpWindow;

const HELP_TEXT: &[&str] = &[
    " Everywhere:",
    "   b                 Home",
    "   c                 Chapter List",
    "   w                 Lore & World-Building",
    "   ?                 Help",
    "   q                 Quit",
    "",
    " Home:",
    "   j / k             Select a latest chapter",
    "   Enter             Read selected chapter",
    "   s                 Start reading from chapter 1",
    "",
    " Chapter List:",
    "   /                 Search by title or content",
    "   Esc               Leave search input",
    "   j / k             Move selection",
    "   Enter             Open chapter",
    "",
    " Reader:",
    "   j / k             Scroll",
    "   Space / PgDn      Page down",
    "   PgUp              Page up",
    "   g / G             Chapter start / end",
    "   H / Left          Previous chapter",
    "   L / Right         Next chapter",
    "   + / -             Larger / smaller text",
    "",
    " Lore:",
    "   Tab / Left/Right  Switch category",
    "   1 / 2 / 3         Characters / Locations / Concepts",
    "   j / k             Scroll",
];

impl HelpWindow {
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = centered_popup_area(area, 60, 90);
        frame.render_widget(Clear, popup_area);

        let content: Vec<Line> = HELP_TEXT.iter().map(|&s| Line::from(s)).collect();
        let paragraph = Paragraph::new(content)
            .block(Block::default().title("Help (any key to close)").borders(Borders::ALL));

        frame.render_widget(paragraph, popup_area);
    }
}
