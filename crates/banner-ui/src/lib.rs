//! TUI rendering layer for the banner studio.
//!
//! Provides the studio layout, form panel, live preview and console overlay
//! widgets. All rendering uses [`ratatui`] — this crate owns the visual
//! presentation while [`banner_core`] owns the state.

pub mod console;
pub mod form;
pub mod graphics;
pub mod iterm;
pub mod layout;
pub mod preview;
pub mod shell;
