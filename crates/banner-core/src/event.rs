use std::path::PathBuf;
use std::time::Instant;

use crate::fields::{TextField, Toggle};

/// Events flowing through the app loop.
#[derive(Debug, Clone)]
pub enum Event {
    Tick { now: Instant },
    Key(crossterm::event::KeyEvent),
    Resize { cols: u16, rows: u16 },
    /// A text field's value changed.
    FieldEdited { field: TextField },
    /// A visibility flag was flipped.
    VisibilityToggled { flag: Toggle, visible: bool },
    /// The user picked a preset (id not yet resolved against the catalog).
    PresetSelected { id: String },
    /// The field set was restored to the default record.
    FieldsReset,
    /// Export was requested; the app decides whether it may start.
    ExportRequested,
    /// The export worker finished. `saved` is the written path on success.
    ExportFinished { saved: Option<PathBuf> },
    Quit,
}
