pub mod help;

use ratatui::layout::Rect;

/// Compute a centered popup area within the given area.
pub fn centered_popup_area(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let width = (area.width * width_percent) / 100;
    let height = (area.height * height_percent) / 100;
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup_area(area, 50, 50);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 25);
        assert_eq!(popup.y, 10);
    }

    #[test]
    fn test_popup_respects_offset_origin() {
        let area = Rect::new(10, 5, 80, 20);
        let popup = centered_popup_area(area, 25, 50);
        assert_eq!(popup.x, 10 + 30);
        assert_eq!(popup.y, 5 + 5);
    }
}
