//! Preset catalog for Banner Studio.
//!
//! Presets are fixed visual configurations (gradient, color roles, pattern,
//! frame, layout variant) versioned in source as a JSON document and parsed
//! once at startup. Nothing here is mutable after load.

pub mod catalog;
pub mod preset;

pub use catalog::PresetCatalog;
pub use preset::{Color, FrameStyle, Gradient, GradientStop, LayoutKind, Pattern, Preset};
