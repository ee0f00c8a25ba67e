use image::RgbaImage;

use banner_compose::{scale_for, BannerTree, FooterAlign, MetaBlock, TitleBlock, TypeScale};
use banner_presets::{Color, FrameStyle, LayoutKind, Preset};

use crate::font::FontBook;
use crate::text::{self, TextStyle};

/// LinkedIn's recommended banner size.
pub const WIDTH: u32 = 1584;
pub const HEIGHT: u32 = 396;

/// Width of the darkened band behind the avatar zone.
const SCRIM_WIDTH: f32 = 320.0;
const SCRIM_ALPHA: f32 = 0.15;

const HEADLINE_TRACKING: f32 = 0.24;
const CAPS_TRACKING: f32 = 0.2;
const BRAND_WORDMARK: &str = "Linkedin Banner";
const BRAND_RULE_WIDTH: f32 = 80.0;

/// Paint gradient, pattern, frame and scrim. No text; the TUI preview
/// uses this directly so it stays legible at cell resolution.
pub fn render_background(preset: &Preset) -> RgbaImage {
    let mut canvas = RgbaImage::new(WIDTH, HEIGHT);
    crate::gradient::paint(&mut canvas, &preset.gradient);
    crate::pattern::overlay(&mut canvas, preset.pattern);
    draw_frame(&mut canvas, preset.frame);
    draw_scrim(&mut canvas);
    canvas
}

/// Render the full banner: background plus the composed content tree.
pub fn render_banner(preset: &Preset, tree: &BannerTree, fonts: &FontBook) -> RgbaImage {
    let mut canvas = render_background(preset);
    let scale = scale_for(tree.layout);
    match tree.layout {
        LayoutKind::Center => draw_center(&mut canvas, preset, tree, fonts, &scale),
        LayoutKind::Stack | LayoutKind::Split => {
            draw_sided(&mut canvas, preset, tree, fonts, &scale)
        }
    }
    canvas
}

/// Left-to-transparent darkening so white avatars and text both read
/// against busy gradients.
fn draw_scrim(canvas: &mut RgbaImage) {
    let height = canvas.height();
    let ink = Color::rgb(0, 0, 0);
    for x in 0..SCRIM_WIDTH as u32 {
        let alpha = SCRIM_ALPHA * (1.0 - x as f32 / SCRIM_WIDTH);
        for y in 0..height {
            text::blend_pixel(canvas, x, y, ink, alpha);
        }
    }
}

fn draw_frame(canvas: &mut RgbaImage, frame: FrameStyle) {
    match frame {
        FrameStyle::None => {}
        FrameStyle::Ink => {
            stroke_rounded_rect(canvas, 24.0, 22.0, 2.0, Color::rgb(0, 0, 0), 0.4);
        }
        FrameStyle::Paper => {
            stroke_rounded_rect(canvas, 20.0, 22.0, 2.0, Color::rgb(0, 0, 0), 0.1);
            stroke_rounded_rect(canvas, 24.0, 18.0, 1.0, Color::rgb(255, 255, 255), 0.5);
        }
    }
}

/// Stroke an inset rounded rectangle by thresholding its signed distance.
fn stroke_rounded_rect(
    canvas: &mut RgbaImage,
    inset: f32,
    radius: f32,
    stroke: f32,
    color: Color,
    alpha: f32,
) {
    let (width, height) = canvas.dimensions();
    let half_w = width as f32 / 2.0 - inset;
    let half_h = height as f32 / 2.0 - inset;
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    for y in 0..height {
        for x in 0..width {
            let qx = (x as f32 + 0.5 - cx).abs() - (half_w - radius);
            let qy = (y as f32 + 0.5 - cy).abs() - (half_h - radius);
            let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
            let sdf = outside + qx.max(qy).min(0.0) - radius;
            let d = sdf.abs() - stroke / 2.0;
            if d < 0.5 {
                // 1px anti-aliased edge on either side of the stroke.
                let coverage = (0.5 - d).clamp(0.0, 1.0);
                text::blend_pixel(canvas, x, y, color, alpha * coverage);
            }
        }
    }
}

// ── Stack / split placement ──

fn draw_sided(
    canvas: &mut RgbaImage,
    preset: &Preset,
    tree: &BannerTree,
    fonts: &FontBook,
    scale: &TypeScale,
) {
    let right_edge = WIDTH as f32 - scale.pad_right;
    if let Some(title) = &tree.title {
        let max_width = (right_edge - scale.pad_left) * 0.65;
        draw_title(canvas, preset, title, fonts, scale, scale.pad_left, max_width);
    }
    match &tree.meta {
        Some(MetaBlock::List { entries }) => {
            // Right-aligned vertical run of bare values.
            let style = TextStyle::plain(scale.meta_px);
            let mut y = scale.pad_y;
            for entry in entries {
                let width = text::measure(&fonts.regular, style, &entry.value);
                text::draw_line(
                    canvas,
                    &fonts.regular,
                    style,
                    preset.text,
                    right_edge - width,
                    y,
                    &entry.value,
                );
                y += text::line_height(&fonts.regular, style) + 6.0;
            }
        }
        Some(MetaBlock::Grid { entries }) => {
            // Label-over-value rows, right-aligned.
            let label_style = TextStyle::tracked_caps(scale.meta_label_px, CAPS_TRACKING);
            let value_style = TextStyle::plain(scale.meta_px);
            let mut y = scale.pad_y;
            for entry in entries {
                let label_w = text::measure(&fonts.regular, label_style, entry.label);
                text::draw_line(
                    canvas,
                    &fonts.regular,
                    label_style,
                    preset.soft_text,
                    right_edge - label_w,
                    y,
                    entry.label,
                );
                y += text::line_height(&fonts.regular, label_style) + 2.0;
                let value_w = text::measure(&fonts.regular, value_style, &entry.value);
                text::draw_line(
                    canvas,
                    &fonts.regular,
                    value_style,
                    preset.text,
                    right_edge - value_w,
                    y,
                    &entry.value,
                );
                y += text::line_height(&fonts.regular, value_style) + 10.0;
            }
        }
        Some(MetaBlock::Inline { .. }) | None => {}
    }
    if let Some(footer) = &tree.footer {
        draw_footer(canvas, preset, footer, fonts, scale);
    }
}

fn draw_title(
    canvas: &mut RgbaImage,
    preset: &Preset,
    title: &TitleBlock,
    fonts: &FontBook,
    scale: &TypeScale,
    x: f32,
    max_width: f32,
) {
    let mut y = scale.pad_y;
    if let Some(name) = &title.name {
        let style = TextStyle::plain(scale.name_px);
        text::draw_line(canvas, &fonts.bold, style, preset.text, x, y, name);
        y += text::line_height(&fonts.bold, style) + 8.0;
    }
    if let Some(headline) = &title.headline {
        let style = TextStyle::tracked_caps(scale.headline_px, HEADLINE_TRACKING);
        text::draw_line(canvas, &fonts.regular, style, preset.accent, x, y, headline);
        y += text::line_height(&fonts.regular, style) + 12.0;
    }
    if let Some(tagline) = &title.tagline {
        let style = TextStyle::plain(scale.tagline_px);
        for line in text::wrap(&fonts.regular, style, tagline, max_width) {
            text::draw_line(canvas, &fonts.regular, style, preset.soft_text, x, y, &line);
            y += text::line_height(&fonts.regular, style);
        }
    }
}

fn draw_footer(
    canvas: &mut RgbaImage,
    preset: &Preset,
    footer: &banner_compose::FooterRow,
    fonts: &FontBook,
    scale: &TypeScale,
) {
    let right_edge = WIDTH as f32 - scale.pad_right;
    let brand_style = TextStyle::tracked_caps(scale.footer_brand_px, CAPS_TRACKING);
    let site_style = TextStyle::plain(scale.footer_site_px);
    let row_h = text::line_height(&fonts.regular, site_style);
    let y = HEIGHT as f32 - scale.pad_y - row_h;

    let draw_brand = |canvas: &mut RgbaImage| {
        let rule_y = (y + row_h / 2.0) as u32;
        for x in 0..BRAND_RULE_WIDTH as u32 {
            for dy in 0..2u32 {
                text::blend_pixel(
                    canvas,
                    scale.pad_left as u32 + x,
                    rule_y + dy,
                    preset.accent,
                    0.9,
                );
            }
        }
        text::draw_line(
            canvas,
            &fonts.regular,
            brand_style,
            preset.accent,
            scale.pad_left + BRAND_RULE_WIDTH + 16.0,
            y + (row_h - scale.footer_brand_px * 1.2) / 2.0,
            BRAND_WORDMARK,
        );
    };
    let draw_site = |canvas: &mut RgbaImage, site: &str| {
        let width = text::measure(&fonts.regular, site_style, site);
        text::draw_line(
            canvas,
            &fonts.regular,
            site_style,
            preset.text,
            right_edge - width,
            y,
            site,
        );
    };

    match footer.align {
        FooterAlign::Start => draw_brand(canvas),
        FooterAlign::End => {
            if let Some(site) = &footer.website {
                draw_site(canvas, site);
            }
        }
        FooterAlign::Between => {
            draw_brand(canvas);
            if let Some(site) = &footer.website {
                draw_site(canvas, site);
            }
        }
    }
}

// ── Center placement ──

fn draw_center(
    canvas: &mut RgbaImage,
    preset: &Preset,
    tree: &BannerTree,
    fonts: &FontBook,
    scale: &TypeScale,
) {
    let mid = WIDTH as f32 / 2.0;
    let mut y = scale.pad_y * 2.0;
    if let Some(title) = &tree.title {
        if let Some(name) = &title.name {
            let style = TextStyle::plain(scale.name_px);
            let w = text::measure(&fonts.bold, style, name);
            text::draw_line(canvas, &fonts.bold, style, preset.text, mid - w / 2.0, y, name);
            y += text::line_height(&fonts.bold, style) + 8.0;
        }
        if let Some(headline) = &title.headline {
            let style = TextStyle::tracked_caps(scale.headline_px, HEADLINE_TRACKING);
            let w = text::measure(&fonts.regular, style, headline);
            text::draw_line(
                canvas,
                &fonts.regular,
                style,
                preset.accent,
                mid - w / 2.0,
                y,
                headline,
            );
            y += text::line_height(&fonts.regular, style) + 12.0;
        }
        if let Some(tagline) = &title.tagline {
            let style = TextStyle::plain(scale.tagline_px);
            for line in text::wrap(&fonts.regular, style, tagline, WIDTH as f32 * 0.5) {
                let w = text::measure(&fonts.regular, style, &line);
                text::draw_line(
                    canvas,
                    &fonts.regular,
                    style,
                    preset.soft_text,
                    mid - w / 2.0,
                    y,
                    &line,
                );
                y += text::line_height(&fonts.regular, style);
            }
        }
    }
    if let Some(MetaBlock::Inline { items }) = &tree.meta {
        draw_inline_meta(canvas, preset, items, fonts, scale);
    }
}

/// One centered run near the bottom edge, items joined by small dots.
fn draw_inline_meta(
    canvas: &mut RgbaImage,
    preset: &Preset,
    items: &[String],
    fonts: &FontBook,
    scale: &TypeScale,
) {
    let style = TextStyle::tracked_caps(scale.meta_px, CAPS_TRACKING);
    let gap = 18.0;
    let dot = 2.0;
    let total: f32 = items
        .iter()
        .map(|item| text::measure(&fonts.regular, style, item))
        .sum::<f32>()
        + (items.len().saturating_sub(1)) as f32 * (gap * 2.0 + dot);
    let row_h = text::line_height(&fonts.regular, style);
    let y = HEIGHT as f32 - scale.pad_y - row_h;
    let mut x = (WIDTH as f32 - total) / 2.0;

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            x += gap;
            let dot_y = (y + row_h / 2.0) as u32;
            for dx in 0..dot as u32 {
                for dy in 0..dot as u32 {
                    text::blend_pixel(canvas, x as u32 + dx, dot_y + dy, preset.soft_text, 0.9);
                }
            }
            x += dot + gap;
        }
        x += text::draw_line(canvas, &fonts.regular, style, preset.soft_text, x, y, item);
    }
}
