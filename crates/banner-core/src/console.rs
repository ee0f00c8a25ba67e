use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::editor::LineEditor;
use crate::logging::LogEntry;

/// How long the drop-down slide animation runs.
const SLIDE_DURATION: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slide {
    Closed,
    Opening(Instant),
    Open,
    Closing(Instant),
}

/// The drop-down command console: a scrollback of log lines plus an input
/// line, sliding over the top half of the screen.
pub struct Console {
    slide: Slide,
    log_lines: VecDeque<LogEntry>,
    pub input: LineEditor,
    history: Vec<String>,
    history_pos: Option<usize>,
    scroll_offset: usize,
    max_lines: usize,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Console {
    pub fn new(max_lines: usize) -> Self {
        Self {
            slide: Slide::Closed,
            log_lines: VecDeque::with_capacity(max_lines),
            input: LineEditor::new(),
            history: Vec::new(),
            history_pos: None,
            scroll_offset: 0,
            max_lines,
        }
    }

    /// Start sliding open or closed, from wherever the animation currently is.
    pub fn toggle(&mut self, now: Instant) {
        self.slide = match self.slide {
            Slide::Closed => Slide::Opening(now),
            Slide::Open => Slide::Closing(now),
            Slide::Opening(started) => Slide::Closing(mirrored_start(now, started)),
            Slide::Closing(started) => Slide::Opening(mirrored_start(now, started)),
        };
    }

    /// Settle the animation once its duration has elapsed.
    pub fn update(&mut self, now: Instant) {
        match self.slide {
            Slide::Opening(started) if now.duration_since(started) >= SLIDE_DURATION => {
                self.slide = Slide::Open;
            }
            Slide::Closing(started) if now.duration_since(started) >= SLIDE_DURATION => {
                self.slide = Slide::Closed;
            }
            _ => {}
        }
    }

    /// Fraction of the overlay height currently visible, 0.0–1.0.
    pub fn overlay_fraction(&self, now: Instant) -> f64 {
        match self.slide {
            Slide::Closed => 0.0,
            Slide::Open => 1.0,
            Slide::Opening(started) => progress(now, started),
            Slide::Closing(started) => 1.0 - progress(now, started),
        }
    }

    /// True while any part of the overlay should be drawn.
    pub fn is_visible(&self) -> bool {
        self.slide != Slide::Closed
    }

    /// True only when fully open — the console captures keys in this state.
    pub fn is_open(&self) -> bool {
        self.slide == Slide::Open
    }

    pub fn push_log(&mut self, entry: LogEntry) {
        if self.log_lines.len() >= self.max_lines {
            self.log_lines.pop_front();
            if self.scroll_offset > 0 {
                self.scroll_offset -= 1;
            }
        }
        self.log_lines.push_back(entry);
    }

    pub fn log_lines(&self) -> &VecDeque<LogEntry> {
        &self.log_lines
    }

    pub fn clear_logs(&mut self) {
        self.log_lines.clear();
        self.scroll_offset = 0;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn scroll_up(&mut self, amount: usize) {
        let max_offset = self.log_lines.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + amount).min(max_offset);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Submit the input line: record it in history and return it.
    pub fn submit_input(&mut self) -> String {
        let input = self.input.take();
        if !input.trim().is_empty() {
            self.history.push(input.clone());
        }
        self.history_pos = None;
        input
    }

    /// Recall the previous history entry into the input line.
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let pos = match self.history_pos {
            None => self.history.len() - 1,
            Some(0) => 0,
            Some(p) => p - 1,
        };
        self.history_pos = Some(pos);
        self.input.set_text(self.history[pos].clone());
    }

    /// Step forward in history; past the newest entry the input clears.
    pub fn history_next(&mut self) {
        let Some(pos) = self.history_pos else {
            return;
        };
        if pos + 1 < self.history.len() {
            self.history_pos = Some(pos + 1);
            self.input.set_text(self.history[pos + 1].clone());
        } else {
            self.history_pos = None;
            self.input.take();
        }
    }
}

/// When reversing mid-slide, pick a start instant that keeps the overlay at
/// its current height.
fn mirrored_start(now: Instant, started: Instant) -> Instant {
    let elapsed = now.duration_since(started).min(SLIDE_DURATION);
    now - (SLIDE_DURATION - elapsed)
}

fn progress(now: Instant, started: Instant) -> f64 {
    let elapsed = now.duration_since(started);
    (elapsed.as_secs_f64() / SLIDE_DURATION.as_secs_f64()).min(1.0)
}
