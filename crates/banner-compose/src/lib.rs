//! The layout compositor: (preset, fields) → banner tree.
//!
//! This is the branching heart of the app. [`compose::compose`] is pure and
//! side-effect-free; the app calls it explicitly after every state mutation
//! rather than relying on any implicit reactivity. Pixel measurement is not
//! done here — `banner-raster` walks the tree and places text.

pub mod compose;
pub mod scale;
pub mod tree;

pub use compose::compose;
pub use scale::{scale_for, TypeScale};
pub use tree::{BannerTree, FooterAlign, FooterRow, MetaBlock, MetaEntry, TitleBlock};
