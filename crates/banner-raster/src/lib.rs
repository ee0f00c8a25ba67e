//! Pixel output: gradients, patterns, glyph rasterization and PNG export.
//!
//! The compositor in `banner-compose` decides *what* appears; this crate
//! decides *where*, in pixels, and writes the 1584×396 artifact. The TUI
//! preview reuses [`render::render_background`] so what you see in the
//! terminal is downsampled from the same pixels the export produces.

pub mod export;
pub mod font;
pub mod gradient;
pub mod pattern;
pub mod render;
pub mod text;

pub use export::{export_banner, export_dir, file_name};
pub use font::FontBook;
pub use render::{render_background, render_banner, HEIGHT, WIDTH};
