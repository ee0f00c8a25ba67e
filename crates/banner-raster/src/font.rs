use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fontdue::{Font, FontSettings};

/// Regular + bold faces used for banner text.
///
/// Fonts are discovered on disk rather than embedded: `BANNER_FONT` (and
/// optionally `BANNER_FONT_BOLD`) override discovery, otherwise common
/// system locations are probed. When no bold face is found the regular
/// face stands in for it.
pub struct FontBook {
    pub regular: Font,
    pub bold: Font,
}

/// Candidate (regular, bold) pairs, probed in order.
const CANDIDATES: &[(&str, &str)] = &[
    (
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    ),
    (
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    ),
    (
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    ),
];

impl FontBook {
    /// Discover and parse the banner fonts.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("BANNER_FONT") {
            let regular = load_font(Path::new(&path))?;
            let bold = match std::env::var("BANNER_FONT_BOLD") {
                Ok(bold_path) => load_font(Path::new(&bold_path))?,
                Err(_) => regular.clone(),
            };
            return Ok(Self { regular, bold });
        }

        for (regular_path, bold_path) in CANDIDATES {
            let regular_path = Path::new(regular_path);
            if !regular_path.exists() {
                continue;
            }
            let regular = load_font(regular_path)?;
            let bold = if Path::new(bold_path).exists() {
                load_font(Path::new(bold_path))?
            } else {
                regular.clone()
            };
            return Ok(Self { regular, bold });
        }

        anyhow::bail!(
            "no usable font found; set BANNER_FONT to a .ttf path (probed {} locations)",
            CANDIDATES.len()
        )
    }

    /// The path discovery would use, if any. Lets callers log what will
    /// happen at export time without parsing font data.
    pub fn discover_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("BANNER_FONT") {
            return Some(PathBuf::from(path));
        }
        CANDIDATES
            .iter()
            .map(|(regular, _)| Path::new(regular))
            .find(|p| p.exists())
            .map(Path::to_path_buf)
    }
}

fn load_font(path: &Path) -> Result<Font> {
    let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow::anyhow!("parsing font {}: {}", path.display(), e))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Serializes tests that touch the font env vars.
    pub static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// A face vendored with the repo so rasterization tests run on
    /// machines with no system fonts installed.
    pub const FIXTURE_FONT: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSans.ttf");

    pub fn fixture() -> FontBook {
        let regular = load_font(Path::new(FIXTURE_FONT)).expect("fixture font parses");
        FontBook {
            bold: regular.clone(),
            regular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{fixture, ENV_LOCK, FIXTURE_FONT};
    use super::*;

    #[test]
    fn fixture_face_rasterizes_glyphs() {
        let book = fixture();
        let (metrics, bitmap) = book.regular.rasterize('A', 32.0);
        assert!(metrics.width > 0);
        assert!(bitmap.iter().any(|&c| c > 0));
    }

    #[test]
    fn env_override_wins_over_discovery() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = std::env::var("BANNER_FONT").ok();
        std::env::set_var("BANNER_FONT", FIXTURE_FONT);
        std::env::remove_var("BANNER_FONT_BOLD");

        assert_eq!(
            FontBook::discover_path(),
            Some(PathBuf::from(FIXTURE_FONT))
        );
        // Without a bold override the regular face stands in for bold.
        let book = FontBook::load().unwrap();
        let (metrics, _) = book.bold.rasterize('B', 24.0);
        assert!(metrics.width > 0);

        match original {
            Some(v) => std::env::set_var("BANNER_FONT", v),
            None => std::env::remove_var("BANNER_FONT"),
        }
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let err = load_font(Path::new("/nonexistent/font.ttf"));
        assert!(err.is_err());
    }
}
