use image::RgbaImage;

use banner_presets::{Color, Pattern};

use crate::text::blend_pixel;

/// Pattern overlays sit well below legibility thresholds.
const STRENGTH: f32 = 0.12;

const GRID_STEP: u32 = 36;
const DOT_STEP: u32 = 18;

/// Draw the preset's texture over the gradient.
///
/// All four textures are deterministic: grain uses a coordinate hash, not
/// an RNG, so the same preset always produces byte-identical pixels.
pub fn overlay(canvas: &mut RgbaImage, pattern: Pattern) {
    match pattern {
        Pattern::Grain => grain(canvas),
        Pattern::Grid => grid(canvas),
        Pattern::Dots => dots(canvas),
        Pattern::Rings => rings(canvas),
    }
}

/// Per-pixel monochrome noise from a coordinate hash.
fn grain(canvas: &mut RgbaImage) {
    let (width, height) = canvas.dimensions();
    for y in 0..height {
        for x in 0..width {
            let n = hash(x, y);
            // Map the hash to [-1, 1] and push the pixel toward black or
            // white accordingly.
            let signed = (n as f32 / u32::MAX as f32) * 2.0 - 1.0;
            let tint = if signed >= 0.0 {
                Color::rgb(255, 255, 255)
            } else {
                Color::rgb(0, 0, 0)
            };
            blend_pixel(canvas, x, y, tint, signed.abs() * STRENGTH);
        }
    }
}

/// Dark hairlines on a square lattice.
fn grid(canvas: &mut RgbaImage) {
    let (width, height) = canvas.dimensions();
    let ink = Color::rgb(0, 0, 0);
    for y in 0..height {
        for x in 0..width {
            if x % GRID_STEP == 0 || y % GRID_STEP == 0 {
                blend_pixel(canvas, x, y, ink, STRENGTH);
            }
        }
    }
}

/// Small dark dots on a tighter lattice.
fn dots(canvas: &mut RgbaImage) {
    let (width, height) = canvas.dimensions();
    let ink = Color::rgb(0, 0, 0);
    for y in (0..height).step_by(DOT_STEP as usize) {
        for x in (0..width).step_by(DOT_STEP as usize) {
            for (dx, dy) in [(0i64, 0i64), (1, 0), (0, 1), (1, 1)] {
                let px = x as i64 + dx;
                let py = y as i64 + dy;
                if px < width as i64 && py < height as i64 {
                    blend_pixel(canvas, px as u32, py as u32, ink, STRENGTH);
                }
            }
        }
    }
}

/// Two soft white radial highlights, echoing the ring motifs in the
/// source designs.
fn rings(canvas: &mut RgbaImage) {
    let (width, height) = canvas.dimensions();
    let w = width as f32;
    let h = height as f32;
    let centers = [
        (0.15 * w, 0.20 * h, 0.45 * w),
        (0.80 * w, 0.10 * h, 0.40 * w),
    ];
    let white = Color::rgb(255, 255, 255);
    for y in 0..height {
        for x in 0..width {
            let mut alpha = 0.0f32;
            for (cx, cy, radius) in centers {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                if d < radius {
                    // Fades linearly from the center out.
                    alpha += (1.0 - d / radius) * STRENGTH;
                }
            }
            if alpha > 0.0 {
                blend_pixel(canvas, x, y, white, alpha.min(1.0));
            }
        }
    }
}

fn hash(x: u32, y: u32) -> u32 {
    // fxhash-style integer mix, good enough for visual noise.
    let mut h = x.wrapping_mul(0x9e37_79b9) ^ y.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846c_a68b);
    h ^ (h >> 16)
}
