use banner_presets::LayoutKind;

/// Presentation constants for one layout variant, in banner pixels.
///
/// Structurally insignificant: these numbers move text around but never
/// decide what appears in the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeScale {
    pub name_px: f32,
    pub headline_px: f32,
    pub tagline_px: f32,
    pub meta_px: f32,
    pub meta_label_px: f32,
    pub footer_brand_px: f32,
    pub footer_site_px: f32,
    /// Left padding; clears the zone where LinkedIn overlays the avatar.
    pub pad_left: f32,
    pub pad_right: f32,
    pub pad_y: f32,
}

/// Constants per layout variant. A match over the closed enum, not dynamic
/// dispatch: adding a variant must fail to compile until a scale exists.
pub fn scale_for(layout: LayoutKind) -> TypeScale {
    match layout {
        LayoutKind::Stack => TypeScale {
            name_px: 44.0,
            headline_px: 18.0,
            tagline_px: 17.0,
            meta_px: 15.0,
            meta_label_px: 0.0,
            footer_brand_px: 14.0,
            footer_site_px: 15.0,
            pad_left: 360.0,
            pad_right: 64.0,
            pad_y: 40.0,
        },
        LayoutKind::Split => TypeScale {
            name_px: 40.0,
            headline_px: 16.0,
            tagline_px: 17.0,
            meta_px: 13.0,
            meta_label_px: 10.0,
            footer_brand_px: 14.0,
            footer_site_px: 15.0,
            pad_left: 360.0,
            pad_right: 48.0,
            pad_y: 40.0,
        },
        LayoutKind::Center => TypeScale {
            name_px: 46.0,
            headline_px: 18.0,
            tagline_px: 17.0,
            meta_px: 12.0,
            meta_label_px: 0.0,
            footer_brand_px: 14.0,
            footer_site_px: 15.0,
            pad_left: 360.0,
            pad_right: 64.0,
            pad_y: 40.0,
        },
    }
}
