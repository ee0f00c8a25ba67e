use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The studio screen regions: a one-line header, the form panel on the
/// left, the live preview filling the rest, and a one-line status bar.
#[derive(Debug, Clone, Copy)]
pub struct StudioRects {
    pub top: Rect,
    pub form: Rect,
    pub preview: Rect,
    pub status: Rect,
}

pub fn studio_layout(area: Rect, form_width: u16) -> StudioRects {
    let form_width = form_width.max(24).min(area.width.saturating_sub(20).max(24));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(1),    // body
            Constraint::Length(1), // status bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(form_width), Constraint::Min(1)])
        .split(rows[1]);

    StudioRects {
        top: rows[0],
        form: body[0],
        preview: body[1],
        status: rows[2],
    }
}
