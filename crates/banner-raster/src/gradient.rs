use image::RgbaImage;

use banner_presets::Gradient;

/// Fill the canvas with the preset's radial gradient.
///
/// Each pixel samples the ramp at its normalized elliptical distance from
/// the gradient center; `Gradient::sample` clamps, so pixels outside the
/// ellipse hold the last stop's color.
pub fn paint(canvas: &mut RgbaImage, gradient: &Gradient) {
    let (width, height) = canvas.dimensions();
    let cx = gradient.cx * width as f32;
    let cy = gradient.cy * height as f32;
    for y in 0..height {
        for x in 0..width {
            let dx = (x as f32 - cx) / gradient.rx;
            let dy = (y as f32 - cy) / gradient.ry;
            let t = (dx * dx + dy * dy).sqrt();
            let color = gradient.sample(t);
            canvas.put_pixel(x, y, image::Rgba([color.r, color.g, color.b, 255]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banner_presets::{Color, GradientStop};

    fn two_stop() -> Gradient {
        Gradient {
            cx: 0.0,
            cy: 0.0,
            rx: 100.0,
            ry: 100.0,
            stops: vec![
                GradientStop { at: 0.0, color: Color::rgb(255, 0, 0) },
                GradientStop { at: 1.0, color: Color::rgb(0, 0, 255) },
            ],
        }
    }

    #[test]
    fn center_pixel_takes_first_stop() {
        let mut canvas = RgbaImage::new(100, 100);
        paint(&mut canvas, &two_stop());
        assert_eq!(canvas.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn far_corner_takes_last_stop() {
        let mut canvas = RgbaImage::new(200, 200);
        paint(&mut canvas, &two_stop());
        // (199, 199) lies well outside the 100px ellipse.
        assert_eq!(canvas.get_pixel(199, 199).0, [0, 0, 255, 255]);
    }

    #[test]
    fn every_pixel_is_opaque() {
        let mut canvas = RgbaImage::new(64, 16);
        paint(&mut canvas, &two_stop());
        assert!(canvas.pixels().all(|p| p.0[3] == 255));
    }
}
