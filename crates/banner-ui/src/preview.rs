use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use unicode_width::UnicodeWidthStr;

use banner_compose::{BannerTree, FooterAlign, MetaBlock};
use banner_presets::{LayoutKind, Preset};

/// Fraction of the banner width LinkedIn covers with the avatar circle.
/// Cell-level text placement respects the same zone the renderer does.
const AVATAR_ZONE: f32 = 360.0 / 1584.0;

/// Render the banner preview into a terminal rect.
///
/// The background pixels come from the same renderer the PNG export uses,
/// downsampled to half-block cells (two vertical pixels per cell, `▀` with
/// fg/bg). Text is then overlaid at cell resolution because downsampled
/// glyphs would be illegible.
pub fn render_preview(
    buf: &mut Buffer,
    area: Rect,
    preset: &Preset,
    tree: &BannerTree,
    data: &[u8],
    src_width: u32,
    src_height: u32,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", preset.name));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    render_pixels(buf, inner, data, src_width, src_height);
    overlay_content(buf, inner, preset, tree);
}

/// Nearest-neighbour downsample into half-block cells.
fn render_pixels(buf: &mut Buffer, inner: Rect, data: &[u8], src_width: u32, src_height: u32) {
    if src_width == 0 || src_height == 0 {
        return;
    }
    let expected_len = match (src_width as u64)
        .checked_mul(src_height as u64)
        .and_then(|v| v.checked_mul(4))
    {
        Some(v) => v,
        None => return,
    };
    if (data.len() as u64) < expected_len {
        return;
    }

    let cell_w = inner.width as u32;
    let cell_h = inner.height as u32;
    let pixel_h = cell_h * 2;

    for cy in 0..cell_h {
        for cx in 0..cell_w {
            let top_py = (cy * 2 * src_height) / pixel_h;
            let bot_py = ((cy * 2 + 1) * src_height) / pixel_h;
            let px = (cx * src_width) / cell_w;

            let top = match sample_pixel(data, src_width, px, top_py) {
                Some(p) => p,
                None => continue,
            };
            let bot = match sample_pixel(data, src_width, px, bot_py) {
                Some(p) => p,
                None => continue,
            };

            let x = inner.x + cx as u16;
            let y = inner.y + cy as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char('▀');
                cell.set_fg(Color::Rgb(top.0, top.1, top.2));
                cell.set_bg(Color::Rgb(bot.0, bot.1, bot.2));
            }
        }
    }
}

/// Read an RGBA pixel from row-major data.
fn sample_pixel(data: &[u8], width: u32, x: u32, y: u32) -> Option<(u8, u8, u8)> {
    let idx = (y as usize)
        .checked_mul(width as usize)?
        .checked_add(x as usize)?
        .checked_mul(4)?;
    let r = *data.get(idx)?;
    let g = *data.get(idx + 1)?;
    let b = *data.get(idx + 2)?;
    Some((r, g, b))
}

fn rgb(c: banner_presets::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Place the composed tree's text over the pixel cells, following the same
/// regions the pixel renderer uses.
fn overlay_content(buf: &mut Buffer, inner: Rect, preset: &Preset, tree: &BannerTree) {
    let text = Style::default().fg(rgb(preset.text));
    let bold = text.add_modifier(Modifier::BOLD);
    let accent = Style::default().fg(rgb(preset.accent));
    let soft = Style::default().fg(rgb(preset.soft_text));

    let left = inner.x + (inner.width as f32 * AVATAR_ZONE) as u16;
    let centered = tree.layout == LayoutKind::Center;

    let mut y = inner.y + 1;
    if let Some(title) = &tree.title {
        if let Some(name) = &title.name {
            put_line(buf, inner, left, y, name, bold, centered);
            y += 2;
        }
        if let Some(headline) = &title.headline {
            put_line(buf, inner, left, y, &headline.to_uppercase(), accent, centered);
            y += 1;
        }
        if let Some(tagline) = &title.tagline {
            put_line(buf, inner, left, y, tagline, soft, centered);
        }
    }

    match &tree.meta {
        Some(MetaBlock::Inline { items }) => {
            let run = items.join(" · ");
            let y = inner.bottom().saturating_sub(2);
            put_line(buf, inner, left, y, &run, soft, true);
        }
        Some(MetaBlock::List { entries }) => {
            let mut y = inner.y + 1;
            for entry in entries {
                put_right(buf, inner, y, &entry.value, text);
                y += 1;
            }
        }
        Some(MetaBlock::Grid { entries }) => {
            let mut y = inner.y + 1;
            for entry in entries {
                put_right(buf, inner, y, &entry.label.to_uppercase(), soft);
                put_right(buf, inner, y + 1, &entry.value, text);
                y += 3;
            }
        }
        None => {}
    }

    if let Some(footer) = &tree.footer {
        let y = inner.bottom().saturating_sub(2);
        match footer.align {
            FooterAlign::Start => {
                put_line(buf, inner, left, y, "── LINKEDIN BANNER", accent, false);
            }
            FooterAlign::End => {
                if let Some(site) = &footer.website {
                    put_right(buf, inner, y, site, text);
                }
            }
            FooterAlign::Between => {
                put_line(buf, inner, left, y, "── LINKEDIN BANNER", accent, false);
                if let Some(site) = &footer.website {
                    put_right(buf, inner, y, site, text);
                }
            }
        }
    }
}

/// Write a line at `x` (or centered over the full inner width), truncated
/// to the inner rect.
fn put_line(buf: &mut Buffer, inner: Rect, x: u16, y: u16, text: &str, style: Style, center: bool) {
    if y >= inner.bottom() {
        return;
    }
    let width = text.width() as u16;
    let x = if center {
        inner.x + inner.width.saturating_sub(width) / 2
    } else {
        x
    };
    let max = inner.right().saturating_sub(x) as usize;
    buf.set_stringn(x, y, text, max, style);
}

fn put_right(buf: &mut Buffer, inner: Rect, y: u16, text: &str, style: Style) {
    if y >= inner.bottom() {
        return;
    }
    let width = (text.width() as u16).min(inner.width.saturating_sub(1));
    let x = inner.right().saturating_sub(width + 1);
    buf.set_stringn(x, y, text, width as usize, style);
}
