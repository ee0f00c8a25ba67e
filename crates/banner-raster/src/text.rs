use fontdue::Font;
use image::RgbaImage;

use banner_presets::Color;

/// A styled run of text: size, tracking (letter spacing as a fraction of
/// the font size) and optional uppercasing, mirroring the design sources.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub px: f32,
    pub tracking: f32,
    pub uppercase: bool,
}

impl TextStyle {
    pub const fn plain(px: f32) -> Self {
        Self {
            px,
            tracking: 0.0,
            uppercase: false,
        }
    }

    pub const fn tracked_caps(px: f32, tracking: f32) -> Self {
        Self {
            px,
            tracking,
            uppercase: true,
        }
    }

    fn letter_spacing(&self) -> f32 {
        self.tracking * self.px
    }

    fn apply_case(&self, text: &str) -> String {
        if self.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}

/// Advance width of `text` in pixels, including letter spacing between
/// (but not after) glyphs.
pub fn measure(font: &Font, style: TextStyle, text: &str) -> f32 {
    let text = style.apply_case(text);
    let spacing = style.letter_spacing();
    let mut width = 0.0;
    let mut glyphs = 0usize;
    for ch in text.chars() {
        let metrics = font.metrics(ch, style.px);
        width += metrics.advance_width;
        glyphs += 1;
    }
    if glyphs > 1 {
        width += spacing * (glyphs - 1) as f32;
    }
    width
}

/// Line height for a style, from the font's own metrics.
pub fn line_height(font: &Font, style: TextStyle) -> f32 {
    font.horizontal_line_metrics(style.px)
        .map(|m| m.new_line_size)
        .unwrap_or(style.px * 1.2)
}

/// Draw a single line with its top edge at `y`. Returns the advance width
/// actually consumed.
pub fn draw_line(
    canvas: &mut RgbaImage,
    font: &Font,
    style: TextStyle,
    color: Color,
    x: f32,
    y: f32,
    text: &str,
) -> f32 {
    let text = style.apply_case(text);
    let ascent = font
        .horizontal_line_metrics(style.px)
        .map(|m| m.ascent)
        .unwrap_or(style.px * 0.8);
    let baseline = y + ascent;
    let spacing = style.letter_spacing();

    let mut pen_x = x;
    let mut first = true;
    for ch in text.chars() {
        if !first {
            pen_x += spacing;
        }
        first = false;
        let (metrics, coverage) = font.rasterize(ch, style.px);
        let glyph_x = pen_x + metrics.xmin as f32;
        let glyph_y = baseline - metrics.ymin as f32 - metrics.height as f32;
        blit_coverage(
            canvas,
            &coverage,
            metrics.width,
            metrics.height,
            glyph_x,
            glyph_y,
            color,
        );
        pen_x += metrics.advance_width;
    }
    pen_x - x
}

/// Greedy word wrap to `max_width` pixels. A single over-long word gets its
/// own line rather than being split.
pub fn wrap(font: &Font, style: TextStyle, text: &str, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure(font, style, &candidate) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Alpha-blend a glyph coverage bitmap onto the canvas.
fn blit_coverage(
    canvas: &mut RgbaImage,
    coverage: &[u8],
    width: usize,
    height: usize,
    x: f32,
    y: f32,
    color: Color,
) {
    let (canvas_w, canvas_h) = canvas.dimensions();
    let x0 = x.round() as i64;
    let y0 = y.round() as i64;
    for gy in 0..height {
        for gx in 0..width {
            let alpha = coverage[gy * width + gx];
            if alpha == 0 {
                continue;
            }
            let px = x0 + gx as i64;
            let py = y0 + gy as i64;
            if px < 0 || py < 0 || px >= canvas_w as i64 || py >= canvas_h as i64 {
                continue;
            }
            blend_pixel(canvas, px as u32, py as u32, color, alpha as f32 / 255.0);
        }
    }
}

/// Source-over blend of an opaque color at fractional alpha. Writes
/// outside the canvas are dropped, matching the glyph blitter.
pub fn blend_pixel(canvas: &mut RgbaImage, x: u32, y: u32, color: Color, alpha: f32) {
    let (canvas_w, canvas_h) = canvas.dimensions();
    if x >= canvas_w || y >= canvas_h {
        return;
    }
    let pixel = canvas.get_pixel_mut(x, y);
    let mix = |dst: u8, src: u8| -> u8 {
        (dst as f32 + (src as f32 - dst as f32) * alpha).round() as u8
    };
    pixel.0 = [
        mix(pixel.0[0], color.r),
        mix(pixel.0[1], color.g),
        mix(pixel.0[2], color.b),
        255,
    ];
}
