//! iTerm2 inline image protocol renderer.
//!
//! Draws the banner preview at full pixel resolution via iTerm2's OSC 1337
//! escape sequence, which iTerm2 and WezTerm both understand. Much higher
//! fidelity than half-block cells for gradients and patterns.
//!
//! ratatui's cell buffer cannot carry inline images, so the caller writes
//! this sequence directly to the terminal backend after `terminal.draw()`
//! completes.

use std::io::{self, Write};

use image::ImageFormat;
use ratatui::layout::Rect;

/// Cache of the last encoded frame.
///
/// The preview pixels only change when the preset changes, but the render
/// loop runs every tick; caching the PNG+base64 skips nearly all encodes.
struct ImageCache {
    last_data_ptr: usize,
    last_width: u32,
    last_height: u32,
    last_encoded: String,
}

impl ImageCache {
    fn new() -> Self {
        Self {
            last_data_ptr: 0,
            last_width: 0,
            last_height: 0,
            last_encoded: String::new(),
        }
    }

    /// Get the cached encoding, or compute a new one when the data changed.
    fn get_or_encode(&mut self, data: &[u8], width: u32, height: u32) -> io::Result<String> {
        let data_ptr = data.as_ptr() as usize;

        // Same pointer and dimensions means the same frame.
        if data_ptr == self.last_data_ptr
            && width == self.last_width
            && height == self.last_height
            && !self.last_encoded.is_empty()
        {
            return Ok(self.last_encoded.clone());
        }

        let rgba_image = image::RgbaImage::from_raw(width, height, data.to_vec())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "invalid RGBA dimensions"))?;

        let mut png_bytes = Vec::new();
        rgba_image
            .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(io::Error::other)?;

        self.last_encoded = base64_encode(&png_bytes);
        self.last_data_ptr = data_ptr;
        self.last_width = width;
        self.last_height = height;

        Ok(self.last_encoded.clone())
    }
}

/// Write the banner pixels as an inline image filling `area`.
///
/// `area` is the inner preview rect in terminal cells. The caller owns
/// cursor positioning before and after.
pub fn render_iterm_preview(
    writer: &mut impl Write,
    area: Rect,
    data: &[u8],
    src_width: u32,
    src_height: u32,
) -> io::Result<()> {
    if area.width == 0 || area.height == 0 {
        return Ok(());
    }

    thread_local! {
        static CACHE: std::cell::RefCell<ImageCache> = std::cell::RefCell::new(ImageCache::new());
    }

    let encoded = CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_encode(data, src_width, src_height)
    })?;

    // Cursor position is 1-indexed in ANSI escape codes.
    write!(writer, "\x1b[{};{}H", area.y + 1, area.x + 1)?;
    write!(
        writer,
        "\x1b]1337;File=inline=1;width={};height={};preserveAspectRatio=0:{}\x07",
        area.width, area.height, encoded
    )?;

    Ok(())
}

/// Base64-encode bytes using the standard alphabet.
fn base64_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut result = String::with_capacity(data.len().div_ceil(3) * 4);

    for chunk in data.chunks(3) {
        let mut buf = [0u8; 3];
        buf[..chunk.len()].copy_from_slice(chunk);

        result.push(ALPHABET[(buf[0] >> 2) as usize] as char);
        result.push(ALPHABET[(((buf[0] & 0x03) << 4) | (buf[1] >> 4)) as usize] as char);

        if chunk.len() > 1 {
            result.push(ALPHABET[(((buf[1] & 0x0f) << 2) | (buf[2] >> 6)) as usize] as char);
            if chunk.len() > 2 {
                result.push(ALPHABET[(buf[2] & 0x3f) as usize] as char);
            } else {
                result.push('=');
            }
        } else {
            result.push('=');
            result.push('=');
        }
    }

    result
}
