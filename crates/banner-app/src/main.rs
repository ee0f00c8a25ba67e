use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use image::RgbaImage;
use ratatui::{backend::CrosstermBackend, Terminal};

use banner_core::{
    bus::EventBus,
    command::{self, CommandContext, CommandOutput, CommandRegistry},
    console::Console,
    editor::LineEditor,
    event::Event,
    logging::{self, LogBuffer, LogEntry, LogLevel},
    state::AppState,
};
use banner_presets::PresetCatalog;
use banner_raster::FontBook;
use banner_ui::{
    console::render_console,
    form::{render_form, FormRow, FormView},
    graphics::{detect_backend, GraphicsBackend},
    iterm::render_iterm_preview,
    layout::studio_layout,
    preview::render_preview,
    shell::{render_shell, ShellView},
};

const FORM_WIDTH: u16 = 44;

struct App {
    state: AppState,
    catalog: PresetCatalog,
    bus: EventBus,
    log_buffer: LogBuffer,
    console: Console,
    commands: CommandRegistry,
    focus: FormRow,
    /// Present while the focused text field is in edit mode.
    editor: Option<LineEditor>,
    graphics: GraphicsBackend,
    /// Fonts for the iTerm2 full-fidelity preview. Export loads its own.
    fonts: Option<FontBook>,
    preview: PreviewCache,
    /// Receiver for the in-flight export worker, if any.
    export_rx: Option<mpsc::Receiver<Option<PathBuf>>>,
}

/// Banner pixels for the preview, recomputed only when marked dirty.
struct PreviewCache {
    pixels: RgbaImage,
    dirty: bool,
}

impl App {
    fn new(log_buffer: LogBuffer) -> Result<Self> {
        let catalog = PresetCatalog::load()?;
        let state = AppState::new(catalog.default_preset().id.clone());
        let graphics = detect_backend();
        tracing::info!(?graphics, presets = catalog.len(), "studio initialized");

        let fonts = match graphics {
            GraphicsBackend::ITerm2 => match FontBook::load() {
                Ok(book) => Some(book),
                Err(err) => {
                    tracing::warn!(error = %err, "no font for inline preview; using half-blocks");
                    None
                }
            },
            GraphicsBackend::UnicodeBlock => None,
        };

        Ok(Self {
            state,
            catalog,
            bus: EventBus::new(),
            log_buffer,
            console: Console::default(),
            commands: command::builtin_registry(),
            focus: FormRow::Preset,
            editor: None,
            graphics,
            fonts,
            preview: PreviewCache {
                pixels: RgbaImage::new(1, 1),
                dirty: true,
            },
            export_rx: None,
        })
    }

    /// Drain new entries from the shared log buffer into the console.
    fn sync_logs(&mut self) {
        if let Ok(mut buf) = self.log_buffer.lock() {
            for entry in buf.drain(..) {
                self.console.push_log(entry);
            }
        }
    }

    /// Recompute the preview pixels if anything changed since the last frame.
    ///
    /// Half-block cells only carry the background (text is overlaid at cell
    /// resolution); the iTerm2 path renders the full banner when fonts are
    /// available.
    fn refresh_preview(&mut self) {
        if !self.preview.dirty {
            return;
        }
        let preset = self.catalog.lookup(&self.state.preset_id);
        self.preview.pixels = match &self.fonts {
            Some(fonts) => {
                let tree = banner_compose::compose(preset, &self.state.fields);
                banner_raster::render_banner(preset, &tree, fonts)
            }
            None => banner_raster::render_background(preset),
        };
        self.preview.dirty = false;
    }

    /// Execute a console command and handle the output. Returns `true` when
    /// the app should quit.
    fn dispatch_command(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }

        // Echo the command itself
        self.console.push_log(LogEntry {
            level: LogLevel::Info,
            target: "console".into(),
            message: format!("> {}", input),
        });

        let trimmed = input.trim();

        // Special-case "help" with no args to list all commands from the registry
        if trimmed == "help" || trimmed == "?" {
            let lines: Vec<String> = self
                .commands
                .commands()
                .iter()
                .map(|cmd| {
                    let aliases = cmd.aliases();
                    if aliases.is_empty() {
                        format!("  {:18} {}", cmd.usage(), cmd.description())
                    } else {
                        format!(
                            "  {:18} {} (aliases: {})",
                            cmd.usage(),
                            cmd.description(),
                            aliases.join(", ")
                        )
                    }
                })
                .collect();
            for line in lines {
                self.console.push_log(LogEntry {
                    level: LogLevel::Info,
                    target: "help".into(),
                    message: line,
                });
            }
            return false;
        }

        let mut ctx = CommandContext {
            state: &mut self.state,
            console: &mut self.console,
            bus: &mut self.bus,
            catalog: &self.catalog,
        };

        match self.commands.execute(trimmed, &mut ctx) {
            CommandOutput::Lines(lines) => {
                for line in lines {
                    self.console.push_log(LogEntry {
                        level: LogLevel::Info,
                        target: "console".into(),
                        message: line,
                    });
                }
                false
            }
            CommandOutput::Quit => true,
        }
    }

    /// Spawn the export worker if the gate is free. A second trigger while
    /// busy is dropped without feedback, matching the command path.
    fn start_export(&mut self) {
        if !self.state.begin_export() {
            tracing::debug!("export already in flight; request dropped");
            return;
        }
        let preset = self.catalog.lookup(&self.state.preset_id).clone();
        let fields = self.state.fields.clone();
        let dir = banner_raster::export_dir();
        let (tx, rx) = mpsc::channel();
        self.export_rx = Some(rx);
        self.state.status_line = "EXPORTING…".to_string();

        std::thread::spawn(move || {
            let result = match banner_raster::export_banner(&preset, &fields, &dir) {
                Ok(path) => Some(path),
                Err(err) => {
                    tracing::warn!(error = %err, preset = %preset.id, "export failed");
                    None
                }
            };
            // Receiver gone means the app already exited.
            let _ = tx.send(result);
        });
    }

    /// Publish `ExportFinished` when the worker reports back.
    fn poll_export(&mut self) {
        let Some(rx) = &self.export_rx else { return };
        match rx.try_recv() {
            Ok(saved) => {
                self.export_rx = None;
                self.bus.publish(Event::ExportFinished { saved });
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.export_rx = None;
                self.bus.publish(Event::ExportFinished { saved: None });
            }
        }
    }

    /// Begin editing the focused text field, seeding the editor with its
    /// current value.
    fn begin_edit(&mut self) {
        if let FormRow::Field(field) = self.focus {
            self.editor = Some(LineEditor::with_text(self.state.fields.text(field)));
        }
    }

    /// Commit the edit buffer into the field set.
    fn commit_edit(&mut self) {
        if let (FormRow::Field(field), Some(mut editor)) = (self.focus, self.editor.take()) {
            *self.state.fields.text_mut(field) = editor.take();
            self.bus.publish(Event::FieldEdited { field });
        }
    }

    /// Step the preset selector forward or backward through the catalog.
    fn cycle_preset(&mut self, step: isize) {
        let count = self.catalog.len() as isize;
        let pos = self
            .catalog
            .position(&self.state.preset_id)
            .unwrap_or(0) as isize;
        let next = (pos + step).rem_euclid(count) as usize;
        let id = self.catalog.presets()[next].id.clone();
        self.state.preset_id = id.clone();
        self.bus.publish(Event::PresetSelected { id });
    }

    /// React to a drained event. Returns `true` when the app should quit.
    fn apply_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Quit => return true,
            Event::PresetSelected { id } => {
                let preset = self.catalog.lookup(id);
                self.state.status_line = format!("PRESET: {}", preset.name);
                self.preview.dirty = true;
            }
            Event::FieldEdited { field } => {
                self.state.status_line = format!("EDITED: {}", field.key());
                self.preview.dirty = true;
            }
            Event::VisibilityToggled { flag, visible } => {
                self.state.status_line = format!(
                    "{}: {}",
                    flag.key().to_uppercase(),
                    if *visible { "shown" } else { "hidden" }
                );
                self.preview.dirty = true;
            }
            Event::FieldsReset => {
                self.state.status_line = "FIELDS RESET.".to_string();
                self.preview.dirty = true;
            }
            Event::ExportRequested => self.start_export(),
            Event::ExportFinished { saved } => {
                self.state.finish_export();
                self.state.status_line = match saved {
                    Some(path) => {
                        tracing::info!(path = %path.display(), "export complete");
                        format!("SAVED {}", path.display())
                    }
                    None => "READY.".to_string(),
                };
            }
            Event::Tick { .. } | Event::Key(_) | Event::Resize { .. } => {}
        }
        false
    }

    /// Handle a key press while neither the console nor an editor is open.
    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.bus.publish(Event::Quit),
            KeyCode::Char('e') => self.bus.publish(Event::ExportRequested),
            KeyCode::Char('r') => {
                self.state.fields.reset();
                self.bus.publish(Event::FieldsReset);
            }
            KeyCode::Down | KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Up | KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Left if self.focus == FormRow::Preset => self.cycle_preset(-1),
            KeyCode::Right if self.focus == FormRow::Preset => self.cycle_preset(1),
            KeyCode::Char(' ') => {
                if let Some(flag) = self.focus.toggle() {
                    let visible = self.state.fields.toggle(flag);
                    self.bus.publish(Event::VisibilityToggled { flag, visible });
                }
            }
            KeyCode::Enter => self.begin_edit(),
            _ => {}
        }
    }

    /// Handle a key press while a text field is in edit mode.
    fn handle_edit_key(&mut self, code: KeyCode) {
        let Some(editor) = &mut self.editor else { return };
        match code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Esc => {
                self.editor = None; // discard, field keeps its old value
            }
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Delete => editor.delete(),
            KeyCode::Left => editor.left(),
            KeyCode::Right => editor.right(),
            KeyCode::Home => editor.home(),
            KeyCode::End => editor.end(),
            KeyCode::Char(c) => editor.insert(c),
            _ => {}
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let log_buffer = logging::init();
    tracing::info!("banner studio starting up");

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, log_buffer);
    restore_terminal(terminal)?;
    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, log_buffer: LogBuffer) -> Result<()> {
    let mut app = App::new(log_buffer)?;
    let tick_interval = Duration::from_millis(100);
    let poll_timeout = Duration::from_millis(16);
    let mut last_tick = Instant::now();

    loop {
        // ── Sync logs from tracing into console ──
        app.sync_logs();
        app.poll_export();

        // ── Update animation state ──
        let now = Instant::now();
        app.console.update(now);
        app.refresh_preview();

        // ── Render ──
        let mut iterm_rect = None;
        terminal.draw(|f| {
            let rects = studio_layout(f.area(), FORM_WIDTH);
            let preset = app.catalog.lookup(&app.state.preset_id);
            let tree = banner_compose::compose(preset, &app.state.fields);
            let uptime_secs = app.state.uptime().as_secs();

            let view = ShellView {
                preset_name: &preset.name,
                status_line: &app.state.status_line,
                exporting: app.state.is_exporting(),
                uptime_secs,
            };
            let form_view = FormView {
                fields: &app.state.fields,
                catalog: &app.catalog,
                preset_id: &app.state.preset_id,
                focus: app.focus,
                editor: app.editor.as_ref(),
            };
            let pixels = &app.preview.pixels;
            let graphics = app.graphics;
            let fonts_ready = app.fonts.is_some();

            render_shell(
                f,
                rects,
                view,
                |f, area| render_form(f, area, form_view),
                |f, area| {
                    render_preview(
                        f.buffer_mut(),
                        area,
                        preset,
                        &tree,
                        pixels.as_raw(),
                        pixels.width(),
                        pixels.height(),
                    );
                    if graphics == GraphicsBackend::ITerm2 && fonts_ready {
                        // Inner rect, inside the preview border.
                        iterm_rect = Some(ratatui::layout::Rect {
                            x: area.x + 1,
                            y: area.y + 1,
                            width: area.width.saturating_sub(2),
                            height: area.height.saturating_sub(2),
                        });
                    }
                },
            );

            // Console overlay on top
            if app.console.is_visible() {
                let fraction = app.console.overlay_fraction(now);
                let show_cursor = app.console.is_open();
                render_console(f, f.area(), &app.console, uptime_secs, fraction, show_cursor);
            }
        })?;

        // Inline images bypass the cell buffer; write them after the draw.
        if let Some(area) = iterm_rect {
            if !app.console.is_visible() {
                let pixels = &app.preview.pixels;
                render_iterm_preview(
                    terminal.backend_mut(),
                    area,
                    pixels.as_raw(),
                    pixels.width(),
                    pixels.height(),
                )?;
            }
        }

        // ── Poll → Publish ──
        if event::poll(poll_timeout)? {
            match event::read()? {
                CEvent::Key(key) => {
                    // Tilde always toggles the console
                    if key.code == KeyCode::Char('`') || key.code == KeyCode::Char('~') {
                        app.console.toggle(Instant::now());
                    } else if app.console.is_open() {
                        // Console captures all keys when fully open
                        match key.code {
                            KeyCode::Enter => {
                                let input = app.console.submit_input();
                                if app.dispatch_command(&input) {
                                    return Ok(());
                                }
                            }
                            KeyCode::Backspace => app.console.input.backspace(),
                            KeyCode::Left => app.console.input.left(),
                            KeyCode::Right => app.console.input.right(),
                            KeyCode::Up => app.console.history_prev(),
                            KeyCode::Down => app.console.history_next(),
                            KeyCode::PageUp => app.console.scroll_up(10),
                            KeyCode::PageDown => app.console.scroll_down(10),
                            KeyCode::Esc => app.console.toggle(Instant::now()),
                            KeyCode::Char(c) => app.console.input.insert(c),
                            _ => {}
                        }
                    } else if app.editor.is_some() {
                        app.handle_edit_key(key.code);
                    } else {
                        app.handle_form_key(key.code);
                    }
                }
                CEvent::Resize(cols, rows) => {
                    app.bus.publish(Event::Resize { cols, rows });
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_interval {
            last_tick = Instant::now();
            app.bus.publish(Event::Tick { now: last_tick });
        }

        // ── Drain → Apply ──
        let events = app.bus.drain();
        for ev in &events {
            if app.apply_event(ev) {
                return Ok(());
            }
        }
    }
}
