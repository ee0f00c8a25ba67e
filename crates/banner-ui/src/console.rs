use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use banner_core::console::Console;
use banner_core::logging::{LogEntry, LogLevel};

/// Rows taken by the title bar and the prompt line.
const CHROME_ROWS: u16 = 2;

/// Overlay height in rows for the current slide fraction, capped at half
/// the screen. `None` while the console is fully retracted.
fn overlay_height(area: Rect, fraction: f64) -> Option<u16> {
    if fraction <= 0.0 {
        return None;
    }
    let max = area.height / 2;
    let rows = ((max as f64) * fraction).round() as u16;
    // Even a mid-slide sliver needs the chrome rows plus one log row.
    Some(rows.max(CHROME_ROWS + 1))
}

/// Index range of the scrollback shown in a window of `rows` lines, with
/// `scroll` lines of history pulled back into view. Pinned to the tail
/// when `scroll` is zero.
fn visible_range(total: usize, rows: usize, scroll: usize) -> (usize, usize) {
    let end = total.saturating_sub(scroll);
    let start = end.saturating_sub(rows);
    (start, end)
}

fn level_span(level: LogLevel) -> Span<'static> {
    let color = match level {
        LogLevel::Error => Color::Red,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Green,
        LogLevel::Debug => Color::Cyan,
        LogLevel::Trace => Color::DarkGray,
    };
    Span::styled(
        format!(" {:5} ", level),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn log_line(entry: &LogEntry) -> Line<'_> {
    Line::from(vec![
        level_span(entry.level),
        Span::styled(
            format!("{} ", entry.target),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(entry.message.as_str()),
    ])
}

/// Draw the command console sliding over the top of the studio: a title
/// bar, the log scrollback, and the prompt line at the bottom edge.
pub fn render_console(
    f: &mut Frame,
    area: Rect,
    console: &Console,
    uptime_secs: u64,
    fraction: f64,
    show_cursor: bool,
) {
    let Some(height) = overlay_height(area, fraction) else {
        return;
    };
    if area.height <= CHROME_ROWS {
        return;
    }
    let overlay = Rect {
        height: height.min(area.height),
        ..area
    };
    f.render_widget(Clear, overlay);

    let title_row = Rect { height: 1, ..overlay };
    let log_rows = Rect {
        y: overlay.y + 1,
        height: overlay.height - CHROME_ROWS,
        ..overlay
    };
    let prompt_row = Rect {
        y: overlay.y + overlay.height - 1,
        height: 1,
        ..overlay
    };

    let title = Line::from(vec![
        Span::styled(
            " CONSOLE ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  up {uptime_secs}s")),
        Span::styled(
            "  ·  help lists commands  ·  ~ closes",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(title).style(Style::default().bg(Color::DarkGray).fg(Color::White)),
        title_row,
    );

    let entries = console.log_lines();
    let (start, end) = visible_range(
        entries.len(),
        log_rows.height as usize,
        console.scroll_offset(),
    );
    let lines: Vec<Line> = entries
        .iter()
        .skip(start)
        .take(end - start)
        .map(log_line)
        .collect();
    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(Color::Black)),
        log_rows,
    );

    let prompt = Line::from(vec![
        Span::styled(
            "» ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(console.input.text()),
    ]);
    f.render_widget(
        Paragraph::new(prompt).style(Style::default().bg(Color::Black).fg(Color::White)),
        prompt_row,
    );

    // The cursor lands in the prompt only once the slide has settled.
    if show_cursor {
        let col = console.input.text()[..console.input.cursor()].width() as u16;
        f.set_cursor_position((prompt_row.x + 2 + col, prompt_row.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retracted_overlay_draws_nothing() {
        assert_eq!(overlay_height(Rect::new(0, 0, 80, 24), 0.0), None);
    }

    #[test]
    fn overlay_grows_with_the_slide() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(overlay_height(area, 1.0), Some(12));
        assert_eq!(overlay_height(area, 0.5), Some(6));
        // Mid-animation slivers still fit the chrome rows.
        assert_eq!(overlay_height(area, 0.01), Some(3));
    }

    #[test]
    fn window_tracks_the_tail_until_scrolled() {
        assert_eq!(visible_range(100, 10, 0), (90, 100));
        assert_eq!(visible_range(100, 10, 25), (65, 75));
        assert_eq!(visible_range(4, 10, 0), (0, 4));
        assert_eq!(visible_range(0, 10, 5), (0, 0));
    }
}
