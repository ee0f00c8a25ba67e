use std::collections::HashSet;

use anyhow::{bail, Context, Result};

use crate::preset::Preset;

/// The preset document, versioned in source next to this crate.
const EMBEDDED_CATALOG: &str = include_str!("../data/presets.json");

/// The full ordered list of presets, loaded once for the process lifetime.
///
/// Lookup by id never fails: unrecognized ids fall back to the first entry,
/// so a stale or mistyped id degrades to the default look instead of an
/// error.
#[derive(Debug)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Parse and validate the embedded preset document.
    pub fn load() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    fn from_json(doc: &str) -> Result<Self> {
        let presets: Vec<Preset> =
            serde_json::from_str(doc).context("preset document failed to parse")?;
        if presets.is_empty() {
            bail!("preset document contains no presets");
        }
        let mut seen = HashSet::new();
        for preset in &presets {
            if !seen.insert(preset.id.as_str()) {
                bail!("duplicate preset id: {}", preset.id);
            }
            if preset.gradient.stops.is_empty() {
                bail!("preset {} has no gradient stops", preset.id);
            }
        }
        Ok(Self { presets })
    }

    /// Look up a preset by id, falling back to the first catalog entry.
    pub fn lookup(&self, id: &str) -> &Preset {
        self.presets
            .iter()
            .find(|p| p.id == id)
            .unwrap_or(&self.presets[0])
    }

    /// The default preset (first catalog entry).
    pub fn default_preset(&self) -> &Preset {
        &self.presets[0]
    }

    /// All presets, in catalog order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Index of `id` in the catalog, if present. Used by the selector UI
    /// for prev/next cycling.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.presets.iter().position(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::{FrameStyle, LayoutKind, Pattern};

    #[test]
    fn embedded_catalog_loads() {
        let catalog = PresetCatalog::load().unwrap();
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.default_preset().id, "amber-ink");
    }

    #[test]
    fn all_ids_unique() {
        let catalog = PresetCatalog::load().unwrap();
        let mut seen = HashSet::new();
        for preset in catalog.presets() {
            assert!(seen.insert(preset.id.clone()), "duplicate id {}", preset.id);
        }
    }

    #[test]
    fn lookup_known_id() {
        let catalog = PresetCatalog::load().unwrap();
        let preset = catalog.lookup("midnight-brass");
        assert_eq!(preset.name, "Midnight Brass");
        assert_eq!(preset.layout, LayoutKind::Center);
        assert_eq!(preset.pattern, Pattern::Rings);
        assert_eq!(preset.frame, FrameStyle::None);
    }

    #[test]
    fn lookup_unknown_id_falls_back_to_first() {
        let catalog = PresetCatalog::load().unwrap();
        let preset = catalog.lookup("no-such-preset");
        assert_eq!(preset.id, catalog.default_preset().id);
    }

    #[test]
    fn position_tracks_catalog_order() {
        let catalog = PresetCatalog::load().unwrap();
        assert_eq!(catalog.position("amber-ink"), Some(0));
        assert_eq!(catalog.position("sandstone-wave"), Some(catalog.len() - 1));
        assert_eq!(catalog.position("nope"), None);
    }

    #[test]
    fn every_layout_variant_is_exercised() {
        let catalog = PresetCatalog::load().unwrap();
        let layouts: HashSet<LayoutKind> =
            catalog.presets().iter().map(|p| p.layout).collect();
        assert!(layouts.contains(&LayoutKind::Stack));
        assert!(layouts.contains(&LayoutKind::Split));
        assert!(layouts.contains(&LayoutKind::Center));
    }

    #[test]
    fn empty_document_is_rejected() {
        let err = PresetCatalog::from_json("[]");
        assert!(err.is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let doc = r##"[
            {"id":"a","name":"A","description":"","gradient":{"cx":0,"cy":0,"rx":1,"ry":1,"stops":[{"at":0,"color":"#000000"}]},"accent":"#000000","text":"#000000","soft_text":"#000000","pattern":"grain","frame":"none","layout":"stack"},
            {"id":"a","name":"A2","description":"","gradient":{"cx":0,"cy":0,"rx":1,"ry":1,"stops":[{"at":0,"color":"#000000"}]},"accent":"#000000","text":"#000000","soft_text":"#000000","pattern":"grain","frame":"none","layout":"stack"}
        ]"##;
        let err = PresetCatalog::from_json(doc);
        assert!(err.unwrap_err().to_string().contains("duplicate preset id"));
    }
}
