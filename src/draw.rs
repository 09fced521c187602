//! Draw primitives over [`Frame`]: filled rectangles, centered text, centered
//! logo pastes, whole-image alpha blends, and filled diamonds.
//!
//! Every primitive takes the frame as an explicit in-out parameter and clips
//! to its bounds; nothing here retains the frame beyond the call.

use image::{imageops, RgbaImage};

use crate::assets::GlyphFont;
use crate::color::Color;
use crate::geometry::PixelBox;
use crate::video::Frame;

/// Reference text height in pixels at scale 1.0.
pub const TEXT_UNIT_PX: f32 = 22.0;

/// How the pixel size of a glyph run is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextSize {
    /// Multiple of the 22 px unit text height.
    Scale(f32),
    /// Fraction of the containing box's height.
    FitBox(f32),
}

impl TextSize {
    fn to_px(self, box_height: i32) -> f32 {
        match self {
            TextSize::Scale(scale) => scale * TEXT_UNIT_PX,
            TextSize::FitBox(scale) => box_height as f32 * scale,
        }
    }
}

/// Fill a box with a color, optionally alpha-blended with the existing pixels.
///
/// `opacity` is clamped to `[0, 1]`; at 1.0 the fill overwrites, below it the
/// result is `opacity·fill + (1−opacity)·original` per channel.
pub fn draw_rect(frame: &mut Frame, boxed: PixelBox, color: Color, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    let (x0, y0, x1, y1) = clip_box(frame, boxed);
    let fill = color.to_rgba();

    for y in y0..y1 {
        for x in x0..x1 {
            let pixel = frame.get_pixel_mut(x, y);
            if opacity >= 1.0 {
                *pixel = fill;
            } else {
                for ch in 0..3 {
                    pixel[ch] = (fill[ch] as f32 * opacity
                        + pixel[ch] as f32 * (1.0 - opacity)) as u8;
                }
            }
        }
    }
}

/// Draw a glyph run centered in a box.
///
/// The horizontal center can be shifted by `bias` (fraction of box width,
/// signed), which places two labels symmetrically inside a shared container.
pub fn draw_centered_text(
    frame: &mut Frame,
    text: &str,
    boxed: PixelBox,
    color: Color,
    size: TextSize,
    bias: f32,
    font: &dyn GlyphFont,
) {
    let px = size.to_px(boxed.height());
    let bitmap = font.rasterize(text, px);
    if bitmap.width == 0 || bitmap.height == 0 {
        return;
    }

    let (cx, cy) = boxed.center();
    let cx = cx + (bias * boxed.width() as f32) as i32;
    let origin_x = cx - bitmap.width as i32 / 2;
    let origin_y = cy - bitmap.height as i32 / 2;
    let rgba = color.to_rgba();

    for by in 0..bitmap.height {
        for bx in 0..bitmap.width {
            let value = bitmap.coverage[(by * bitmap.width + bx) as usize];
            if value == 0 {
                continue;
            }
            let x = origin_x + bx as i32;
            let y = origin_y + by as i32;
            if x < 0 || y < 0 || x as u32 >= frame.width() || y as u32 >= frame.height() {
                continue;
            }
            let alpha = value as f32 / 255.0;
            let pixel = frame.get_pixel_mut(x as u32, y as u32);
            for ch in 0..3 {
                pixel[ch] =
                    (rgba[ch] as f32 * alpha + pixel[ch] as f32 * (1.0 - alpha)) as u8;
            }
        }
    }
}

/// Resize a logo to exactly `(target_w, target_h)` and paste it centered in a
/// box, compositing with the logo's own alpha channel.
///
/// Aspect ratio is deliberately not preserved; callers pre-compute matching
/// dimensions through the layout tables' icon-aspect lookups.
pub fn draw_centered_logo(
    frame: &mut Frame,
    logo: &RgbaImage,
    target_w: u32,
    target_h: u32,
    boxed: PixelBox,
    bias: f32,
) {
    if target_w == 0 || target_h == 0 {
        return;
    }
    let resized = imageops::resize(logo, target_w, target_h, imageops::FilterType::Triangle);

    let (cx, cy) = boxed.center();
    let cx = cx + (bias * boxed.width() as f32) as i32;
    let origin_x = cx - target_w as i32 / 2;
    let origin_y = cy - target_h as i32 / 2;

    paste_with_alpha(frame, &resized, origin_x, origin_y);
}

/// Per-pixel blend of two same-sized RGBA images.
///
/// Alpha channels interpolate independently (`out_a = base_a·(1−alpha) +
/// over_a·alpha`, forced opaque where it would be zero), and RGB channels are
/// weighted by each source's own alpha times the blend alpha, normalized by
/// the output alpha. Used for the fade-in reveal of a logo before its
/// container is fully drawn.
pub fn alpha_blend_images(base: &RgbaImage, overlay: &RgbaImage, alpha: f32) -> RgbaImage {
    let alpha = alpha.clamp(0.0, 1.0);
    let width = base.width().min(overlay.width());
    let height = base.height().min(overlay.height());

    RgbaImage::from_fn(width, height, |x, y| {
        let b = base.get_pixel(x, y).0;
        let o = overlay.get_pixel(x, y).0;

        let base_a = b[3] as f32 / 255.0;
        let over_a = o[3] as f32 / 255.0;
        let mut out_a = base_a * (1.0 - alpha) + over_a * alpha;
        if out_a == 0.0 {
            out_a = 1.0;
        }

        let mut out = [0u8; 4];
        for ch in 0..3 {
            let blended = (b[ch] as f32 * base_a * (1.0 - alpha)
                + o[ch] as f32 * over_a * alpha)
                / out_a;
            out[ch] = blended.round().clamp(0.0, 255.0) as u8;
        }
        out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
        image::Rgba(out)
    })
}

/// Fill a diamond (square rotated 45°) and return its bounding box so callers
/// can anchor adjacent elements to its edges.
pub fn draw_diamond(
    frame: &mut Frame,
    center: (i32, i32),
    half_diagonal: i32,
    color: Color,
) -> PixelBox {
    let (cx, cy) = center;
    let l = half_diagonal;
    let fill = color.to_rgba();
    let (fw, fh) = (frame.width() as i32, frame.height() as i32);

    for y in (cy - l).max(0)..=(cy + l).min(fh - 1) {
        let dx = l - (y - cy).abs();
        for x in (cx - dx).max(0)..=(cx + dx).min(fw - 1) {
            frame.set_pixel(x as u32, y as u32, fill);
        }
    }

    PixelBox::new(cx - l, cy - l, cx + l, cy + l)
}

/// Paste an RGBA image onto the frame at an origin, compositing by the source
/// alpha and clipping to the frame.
pub fn paste_with_alpha(frame: &mut Frame, image: &RgbaImage, origin_x: i32, origin_y: i32) {
    for (sx, sy, pixel) in image.enumerate_pixels() {
        let src = pixel.0;
        if src[3] == 0 {
            continue;
        }
        let x = origin_x + sx as i32;
        let y = origin_y + sy as i32;
        if x < 0 || y < 0 || x as u32 >= frame.width() || y as u32 >= frame.height() {
            continue;
        }
        let alpha = src[3] as f32 / 255.0;
        let dst = frame.get_pixel_mut(x as u32, y as u32);
        for ch in 0..3 {
            dst[ch] = (src[ch] as f32 * alpha + dst[ch] as f32 * (1.0 - alpha)) as u8;
        }
    }
}

fn clip_box(frame: &Frame, boxed: PixelBox) -> (u32, u32, u32, u32) {
    let x0 = boxed.x0.clamp(0, frame.width() as i32) as u32;
    let y0 = boxed.y0.clamp(0, frame.height() as i32) as u32;
    let x1 = boxed.x1.clamp(0, frame.width() as i32) as u32;
    let y1 = boxed.y1.clamp(0, frame.height() as i32) as u32;
    (x0, y0, x1.max(x0), y1.max(y0))
}
