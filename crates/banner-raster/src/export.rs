use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use banner_core::fields::FieldSet;
use banner_presets::Preset;

use crate::font::FontBook;
use crate::render;

/// `linkedin-banner-<preset-id>.png`
pub fn file_name(preset_id: &str) -> String {
    format!("linkedin-banner-{preset_id}.png")
}

/// Where exports land: `BANNER_EXPORT_DIR` when set, otherwise the
/// process working directory.
pub fn export_dir() -> PathBuf {
    std::env::var("BANNER_EXPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Compose, render and write the banner PNG into `dir`.
///
/// Returns the path written. Fonts are loaded per export; at one-shot
/// export cadence that is cheaper than keeping parsed faces resident.
pub fn export_banner(preset: &Preset, fields: &FieldSet, dir: &Path) -> Result<PathBuf> {
    let fonts = FontBook::load()?;
    let tree = banner_compose::compose(preset, fields);
    let canvas = render::render_banner(preset, &tree, &fonts);
    let path = dir.join(file_name(&preset.id));
    canvas
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), preset = %preset.id, "banner exported");
    Ok(path)
}
