use banner_presets::LayoutKind;

/// The derived, ephemeral arrangement of a banner's content.
///
/// A pure function of (preset, fields): no hidden state, recomputed after
/// every mutation. Absent blocks mean "not rendered" — a hidden field never
/// appears grayed-out, it is simply not in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerTree {
    pub layout: LayoutKind,
    pub title: Option<TitleBlock>,
    pub meta: Option<MetaBlock>,
    pub footer: Option<FooterRow>,
}

/// The name/headline/tagline group. Each member is present iff its
/// visibility flag is set; empty strings stay present as blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBlock {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub tagline: Option<String>,
}

impl TitleBlock {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.headline.is_none() && self.tagline.is_none()
    }
}

/// The contact/meta fields, in the shape the active layout calls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaBlock {
    /// Center layout: one horizontal run with separators between items.
    Inline { items: Vec<String> },
    /// Stack layout: a right-aligned vertical list.
    List { entries: Vec<MetaEntry> },
    /// Split layout: label+value pairs in a two-column grid.
    Grid { entries: Vec<MetaEntry> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaEntry {
    pub label: &'static str,
    pub value: String,
}

/// Horizontal alignment of the footer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAlign {
    /// Branding only: left-aligned.
    Start,
    /// Website only: right-aligned.
    End,
    /// Both: justified to opposite edges.
    Between,
}

/// The bottom row: branding mark and/or website, never in center layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterRow {
    pub align: FooterAlign,
    /// Whether the branding mark (rule + wordmark) renders.
    pub brand: bool,
    /// Website text, when the website flag is set.
    pub website: Option<String>,
}
