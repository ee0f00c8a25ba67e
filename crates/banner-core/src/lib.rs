//! State and plumbing for Banner Studio.
//!
//! This crate owns everything mutable: the [`fields::FieldSet`] the user
//! edits, the [`state::AppState`] that gates export re-entry, the FIFO
//! [`bus::EventBus`], the drop-down [`console::Console`] with its command
//! registry, and the tracing bootstrap. Rendering lives in `banner-ui`;
//! composition in `banner-compose`.

pub mod bus;
pub mod command;
pub mod console;
pub mod editor;
pub mod event;
pub mod fields;
pub mod logging;
pub mod state;
