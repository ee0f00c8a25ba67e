use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::layout::StudioRects;

/// Per-frame chrome around the form and preview panels.
pub struct ShellView<'a> {
    pub preset_name: &'a str,
    pub status_line: &'a str,
    pub exporting: bool,
    pub uptime_secs: u64,
}

pub fn render_shell(
    f: &mut Frame,
    rects: StudioRects,
    view: ShellView<'_>,
    form: impl FnOnce(&mut Frame, Rect),
    preview: impl FnOnce(&mut Frame, Rect),
) {
    let top = Paragraph::new(Line::from(format!(
        "BANNER STUDIO | {} | up {}s",
        view.preset_name, view.uptime_secs
    )))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(top, rects.top);

    form(f, rects.form);
    preview(f, rects.preview);

    let mut spans = vec![Span::raw(format!(" {}", view.status_line))];
    if view.exporting {
        spans.push(Span::styled(
            "  EXPORTING…",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Gray)),
        rects.status,
    );
}
