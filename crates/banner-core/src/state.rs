use std::time::{Duration, Instant};

use crate::fields::FieldSet;

/// Top-level mutable state: the single owner of everything the user edits.
pub struct AppState {
    pub started_at: Instant,
    pub fields: FieldSet,
    /// Active preset id. Resolved through the catalog on every use, so a
    /// stale id silently falls back to the default preset.
    pub preset_id: String,
    pub status_line: String,
    exporting: bool,
}

impl AppState {
    pub fn new(preset_id: impl Into<String>) -> Self {
        Self {
            started_at: Instant::now(),
            fields: FieldSet::default(),
            preset_id: preset_id.into(),
            status_line: "READY.".to_string(),
            exporting: false,
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// True while an export is in flight.
    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// Acquire the export gate. Returns `false` if an export is already in
    /// flight, in which case the caller must not start another.
    pub fn begin_export(&mut self) -> bool {
        if self.exporting {
            return false;
        }
        self.exporting = true;
        true
    }

    /// Release the export gate. Called on every completion path, success or
    /// failure.
    pub fn finish_export(&mut self) {
        self.exporting = false;
    }
}
