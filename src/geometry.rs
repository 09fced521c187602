//! Geometry primitives: fractional layout boxes, text auto-grow, and diamond
//! (rotated square) construction.
//!
//! Layout coordinates stay fractional (in `[0, 1]`, relative to frame width or
//! height) until the moment they are resolved against a concrete frame size,
//! so one geometry table serves every input resolution.

use crate::assets::GlyphFont;

/// A box in fractional coordinates.
///
/// `x1`/`y1` equal to the sentinel `1.0` select mirrored-margin addressing on
/// that axis: the start offset is treated as a margin from *both* edges. A box
/// that genuinely ends at the frame edge cannot be expressed explicitly; this
/// ambiguity is part of the layout-table contract and the tables avoid exact
/// 1.0 end coordinates where they mean "explicit".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FracBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl FracBox {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Mirrored margins on both axes.
    pub const fn margins(x0: f64, y0: f64) -> Self {
        Self { x0, y0, x1: 1.0, y1: 1.0 }
    }

    /// Resolve to pixel coordinates against a concrete frame size.
    ///
    /// Each axis independently: a sentinel end (`1.0`) mirrors the start
    /// offset as a margin from the opposite edge, a non-sentinel end is
    /// explicit. This yields the three addressing modes the layout tables
    /// use (fully mirrored, fully explicit, horizontally centered with an
    /// explicit vertical extent).
    pub fn resolve(&self, frame_w: u32, frame_h: u32) -> PixelBox {
        let w = frame_w as f64;
        let h = frame_h as f64;

        let x0 = self.x0 * w;
        let y0 = self.y0 * h;
        let x1 = if self.x1 == 1.0 { w - x0 } else { self.x1 * w };
        let y1 = if self.y1 == 1.0 { h - y0 } else { self.y1 * h };

        PixelBox {
            x0: x0.round() as i32,
            y0: y0.round() as i32,
            x1: x1.round() as i32,
            y1: y1.round() as i32,
        }
    }

    /// Shift both x coordinates by a fraction of the frame width, leaving y
    /// untouched. Used by the `center` layout variant. Sentinel ends stay
    /// sentinel (the mirrored margin shifts through `x0`).
    pub fn shift_x(&self, dx: f64) -> Self {
        Self {
            x0: self.x0 + dx,
            y0: self.y0,
            x1: if self.x1 == 1.0 { 1.0 } else { self.x1 + dx },
            y1: self.y1,
        }
    }
}

/// A box in absolute pixel coordinates, `(x0, y0)` top-left inclusive,
/// `(x1, y1)` bottom-right exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PixelBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.x0 + self.x1) / 2, (self.y0 + self.y1) / 2)
    }

    /// Split into top and bottom halves. Used for two-color jersey stripes.
    pub fn split_top_bottom(&self) -> (PixelBox, PixelBox) {
        let mid = (self.y0 + self.y1) / 2;
        (
            PixelBox::new(self.x0, self.y0, self.x1, mid),
            PixelBox::new(self.x0, mid, self.x1, self.y1),
        )
    }
}

/// Which way a text container is allowed to expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowDirection {
    /// Expand equally on both sides of the current center.
    Symmetric,
    /// Expand only the left edge outward.
    Left,
    /// Expand only the right edge outward.
    Right,
}

/// Expand a box horizontally until it can hold the widest of `texts`.
///
/// The font pixel size is derived from the box height and `font_scale`
/// (scale 1.0 means the glyph run is as tall as the box, see
/// [`crate::draw::TEXT_UNIT_PX`] for the unit). Exactly two candidate strings
/// are treated as a label pair sharing the container left/right of its
/// center, so each side grows by the full widest-label width. The result is
/// never narrower than the input.
pub fn grow_box_for_text(
    boxed: PixelBox,
    texts: &[&str],
    font_scale: f32,
    direction: GrowDirection,
    font: &dyn GlyphFont,
) -> PixelBox {
    let px = boxed.height() as f32 * font_scale;
    let widest = texts
        .iter()
        .map(|t| font.measure_width(t, px))
        .fold(0.0f32, f32::max)
        .ceil() as i32;

    let mut grown = boxed;
    match direction {
        GrowDirection::Symmetric if texts.len() == 2 => {
            grown.x0 -= widest;
            grown.x1 += widest;
        }
        GrowDirection::Symmetric => {
            let extra = ((widest - boxed.width()) / 2).max(0);
            grown.x0 -= extra;
            grown.x1 += extra;
        }
        GrowDirection::Left => {
            grown.x0 -= (widest - boxed.width()).max(0);
        }
        GrowDirection::Right => {
            grown.x1 += (widest - boxed.width()).max(0);
        }
    }
    grown
}

/// Vertices of a square rotated 45° (a rhombus with axis-aligned diagonals),
/// in N, E, S, W order, plus its bounding box.
pub fn diamond_vertices(cx: i32, cy: i32, half_diagonal: i32) -> ([(i32, i32); 4], PixelBox) {
    let l = half_diagonal;
    let vertices = [(cx, cy - l), (cx + l, cy), (cx, cy + l), (cx - l, cy)];
    let bbox = PixelBox::new(cx - l, cy - l, cx + l, cy + l);
    (vertices, bbox)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_support::FixedAdvanceFont;

    #[test]
    fn test_resolve_mirrored_margins() {
        for (w, h) in [(1920u32, 1080u32), (1080, 1920), (640, 640), (7, 13)] {
            let b = FracBox::margins(0.1, 0.1).resolve(w, h);
            assert_eq!(b.x0, (0.1 * w as f64).round() as i32);
            assert_eq!(b.x1, (w as f64 - 0.1 * w as f64).round() as i32);
            assert_eq!(b.y1, (h as f64 - 0.1 * h as f64).round() as i32);
        }
    }

    #[test]
    fn test_resolve_explicit() {
        let b = FracBox::new(0.25, 0.5, 0.75, 0.9).resolve(400, 200);
        assert_eq!(b, PixelBox::new(100, 100, 300, 180));
    }

    #[test]
    fn test_resolve_horizontally_centered_vertical_explicit() {
        let b = FracBox::new(0.05, 0.8, 1.0, 0.95).resolve(1000, 1000);
        assert_eq!(b, PixelBox::new(50, 800, 950, 950));
    }

    #[test]
    fn test_shift_x_leaves_y_untouched() {
        let shifted = FracBox::new(0.1, 0.2, 0.3, 0.4).shift_x(0.332);
        assert!((shifted.x0 - 0.432).abs() < 1e-12);
        assert!((shifted.x1 - 0.632).abs() < 1e-12);
        assert_eq!(shifted.y0, 0.2);
        assert_eq!(shifted.y1, 0.4);
    }

    #[test]
    fn test_grow_never_shrinks() {
        let font = FixedAdvanceFont::default();
        let original = PixelBox::new(100, 100, 140, 122);
        for texts in [
            vec![""],
            vec!["A"],
            vec!["FC AVONDALE UNITED"],
            vec!["HOME", "VISITORS FOOTBALL CLUB"],
            vec!["a", "bb", "ccc"],
        ] {
            for dir in [GrowDirection::Symmetric, GrowDirection::Left, GrowDirection::Right] {
                let grown = grow_box_for_text(original, &texts, 0.8, dir, &font);
                assert!(grown.width() >= original.width(), "{:?} {:?}", texts, dir);
                assert_eq!(grown.height(), original.height());
            }
        }
    }

    #[test]
    fn test_grow_pair_expands_both_sides_fully() {
        let font = FixedAdvanceFont::default();
        let original = PixelBox::new(100, 100, 120, 120);
        let grown =
            grow_box_for_text(original, &["AB", "CDEF"], 1.0, GrowDirection::Symmetric, &font);
        let widest = font.measure_width("CDEF", 20.0).ceil() as i32;
        assert_eq!(grown.x0, original.x0 - widest);
        assert_eq!(grown.x1, original.x1 + widest);
    }

    #[test]
    fn test_grow_one_sided() {
        let font = FixedAdvanceFont::default();
        let original = PixelBox::new(100, 100, 110, 120);
        let grown = grow_box_for_text(original, &["WIDE TEXT"], 1.0, GrowDirection::Left, &font);
        assert_eq!(grown.x1, original.x1);
        assert!(grown.x0 < original.x0);
    }

    #[test]
    fn test_diamond_bounding_box_is_square() {
        for (cx, cy, l) in [(0, 0, 1), (100, 50, 30), (-7, 12, 5)] {
            let (vertices, bbox) = diamond_vertices(cx, cy, l);
            assert_eq!(bbox.width(), 2 * l);
            assert_eq!(bbox.height(), 2 * l);
            assert_eq!(vertices[0], (cx, cy - l));
            assert_eq!(vertices[2], (cx, cy + l));
            assert_eq!(vertices[1].0 - vertices[3].0, 2 * l);
        }
    }
}
