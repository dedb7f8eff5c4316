use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one navigation-panel button, including its trailing gap.
pub const NAV_CELL_WIDTH: u16 = 5;

pub struct ExamLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
    pub nav_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_exam_chunks(area: Rect) -> ExamLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(4),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Min(3)])
        .split(body[0]);

    ExamLayout {
        header_area: rows[0],
        question_area: left[0],
        answer_area: left[1],
        nav_area: body[1],
        help_area: rows[2],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        footer_area: chunks[2],
    }
}

/// Grid of button rects inside the bordered navigation panel. Buttons that
/// do not fit vertically are left out.
pub fn nav_cell_rects(nav_area: Rect, count: usize) -> Vec<Rect> {
    if nav_area.width < 2 || nav_area.height < 2 {
        return Vec::new();
    }
    let inner = Rect::new(
        nav_area.x + 1,
        nav_area.y + 1,
        nav_area.width - 2,
        nav_area.height - 2,
    );
    let columns = (inner.width / NAV_CELL_WIDTH).max(1) as usize;
    let cell_width = NAV_CELL_WIDTH.min(inner.width);

    (0..count)
        .map_while(|i| {
            let row = (i / columns) as u16;
            if row >= inner.height {
                return None;
            }
            let col = (i % columns) as u16;
            Some(Rect::new(
                inner.x + col * NAV_CELL_WIDTH,
                inner.y + row,
                cell_width.saturating_sub(1).max(1),
                1,
            ))
        })
        .collect()
}

/// Index of the navigation button under the terminal cell (column, row).
pub fn nav_cell_at(nav_area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    nav_cell_rects(nav_area, count).iter().position(|cell| {
        column >= cell.x && column < cell.x + cell.width && row >= cell.y && row < cell.y + cell.height
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_layout() {
        let layout = calculate_exam_chunks(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 4);
        assert!(layout.question_area.height > 0);
        assert!(layout.answer_area.height >= 3);
        assert!(layout.nav_area.x > layout.question_area.x);
        assert_eq!(layout.nav_area.height, layout.question_area.height + layout.answer_area.height);
    }

    #[test]
    fn test_summary_layout() {
        let layout = calculate_summary_chunks(Rect::new(0, 0, 100, 100));
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.footer_area.height, 3);
        assert_eq!(layout.content_area.height, 92);
    }

    #[test]
    fn test_nav_cells_wrap_into_rows() {
        // Inner width 20 fits four buttons per row.
        let area = Rect::new(10, 5, 22, 6);
        let cells = nav_cell_rects(area, 6);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Rect::new(11, 6, 4, 1));
        assert_eq!(cells[3].x, 11 + 15);
        assert_eq!(cells[4], Rect::new(11, 7, 4, 1));
    }

    #[test]
    fn test_nav_cells_clipped_to_height() {
        let area = Rect::new(0, 0, 12, 3);
        // One inner row, two buttons per row.
        assert_eq!(nav_cell_rects(area, 10).len(), 2);
    }

    #[test]
    fn test_nav_cell_hit_testing() {
        let area = Rect::new(10, 5, 22, 6);
        assert_eq!(nav_cell_at(area, 6, 11, 6), Some(0));
        assert_eq!(nav_cell_at(area, 6, 17, 6), Some(1));
        assert_eq!(nav_cell_at(area, 6, 12, 7), Some(4));
        // Gap between buttons, border, and empty slots miss.
        assert_eq!(nav_cell_at(area, 6, 15, 6), None);
        assert_eq!(nav_cell_at(area, 6, 10, 6), None);
        assert_eq!(nav_cell_at(area, 6, 22, 7), None);
    }
}
