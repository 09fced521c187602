//! Asset resolution: team/league logos, action icons, and the overlay font.
//!
//! Logos are addressed through [`LogoRef`], which is either a name resolved
//! against the asset root or an image the caller already decoded. Named
//! assets are loaded once and cached; a missing asset surfaces as
//! [`AssetError::Missing`] so callers can skip that element without aborting
//! the clip.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;
use tracing::debug;

use crate::error::AssetError;

/// A logo reference: either already decoded or a name to be resolved against
/// the asset root.
#[derive(Debug, Clone)]
pub enum LogoRef {
    Decoded(Arc<RgbaImage>),
    Named(String),
}

impl LogoRef {
    /// The asset identifier, if this reference is name-addressed.
    pub fn name(&self) -> Option<&str> {
        match self {
            LogoRef::Named(name) => Some(name),
            LogoRef::Decoded(_) => None,
        }
    }
}

impl From<&str> for LogoRef {
    fn from(name: &str) -> Self {
        LogoRef::Named(name.to_string())
    }
}

/// Loads and caches image assets from a fixed asset root.
///
/// The cache is keyed by asset name; the compositor is single-threaded per
/// clip, so interior mutability is a `RefCell`.
pub struct AssetStore {
    root: PathBuf,
    cache: RefCell<HashMap<String, Arc<RgbaImage>>>,
}

impl AssetStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into(), cache: RefCell::new(HashMap::new()) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a logo reference to a decoded image.
    ///
    /// Decoded references pass through untouched; named references load
    /// `<root>/<name>.png` on first use and hit the cache afterwards.
    pub fn resolve(&self, logo: &LogoRef) -> Result<Arc<RgbaImage>, AssetError> {
        match logo {
            LogoRef::Decoded(image) => Ok(Arc::clone(image)),
            LogoRef::Named(name) => self.load_named(name),
        }
    }

    /// Load a named image asset, consulting the cache first.
    pub fn load_named(&self, name: &str) -> Result<Arc<RgbaImage>, AssetError> {
        if let Some(cached) = self.cache.borrow().get(name) {
            return Ok(Arc::clone(cached));
        }

        let path = self.asset_path(name);
        if !path.exists() {
            return Err(AssetError::Missing { name: name.to_string() });
        }

        debug!("Loading asset '{}' from {:?}", name, path);
        let image = image::open(&path)
            .map_err(|e| AssetError::DecodeFailed { name: name.to_string(), reason: e.to_string() })?
            .to_rgba8();

        let image = Arc::new(image);
        self.cache.borrow_mut().insert(name.to_string(), Arc::clone(&image));
        Ok(image)
    }

    /// Insert a pre-decoded image under a name. Used to seed the cache when a
    /// caller hands over images it already holds.
    pub fn insert(&self, name: &str, image: RgbaImage) {
        self.cache.borrow_mut().insert(name.to_string(), Arc::new(image));
    }

    /// Load the overlay font (`<root>/font.ttf`).
    pub fn load_font(&self) -> Result<FontAsset, AssetError> {
        let path = self.root.join("font.ttf");
        FontAsset::from_file(&path)
    }

    fn asset_path(&self, name: &str) -> PathBuf {
        let mut path = self.root.join(name);
        if path.extension().is_none() {
            path.set_extension("png");
        }
        path
    }
}

/// A rasterized run of text: a single-channel coverage bitmap.
#[derive(Debug, Clone)]
pub struct TextBitmap {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

impl TextBitmap {
    pub fn empty() -> Self {
        Self { width: 0, height: 0, coverage: Vec::new() }
    }
}

/// Glyph measurement and rasterization seam.
///
/// The compositor only needs text extents and coverage bitmaps; keeping this
/// behind a trait lets tests run with fixed metrics instead of a font file.
pub trait GlyphFont {
    /// Width of the glyph run at the given pixel size.
    fn measure_width(&self, text: &str, px: f32) -> f32;

    /// Rasterize the glyph run at the given pixel size.
    fn rasterize(&self, text: &str, px: f32) -> TextBitmap;
}

/// Production [`GlyphFont`] backed by a TrueType font.
pub struct FontAsset {
    font: fontdue::Font,
}

impl FontAsset {
    pub fn from_file(path: &Path) -> Result<Self, AssetError> {
        let bytes = std::fs::read(path)
            .map_err(|_| AssetError::FontLoadFailed { path: path.display().to_string() })?;
        Self::from_bytes(&bytes)
            .map_err(|_| AssetError::FontLoadFailed { path: path.display().to_string() })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())?;
        Ok(Self { font })
    }
}

impl GlyphFont for FontAsset {
    fn measure_width(&self, text: &str, px: f32) -> f32 {
        text.chars().map(|ch| self.font.metrics(ch, px).advance_width).sum()
    }

    fn rasterize(&self, text: &str, px: f32) -> TextBitmap {
        // First pass: extents across the run.
        let mut total_width: i32 = 0;
        let mut max_ascent: i32 = 0;
        let mut max_descent: i32 = 0;
        for ch in text.chars() {
            let metrics = self.font.metrics(ch, px);
            let ascent = metrics.height as i32 + metrics.ymin;
            let descent = -metrics.ymin;
            max_ascent = max_ascent.max(ascent);
            max_descent = max_descent.max(descent);
            total_width += metrics.advance_width.round() as i32;
        }

        if total_width <= 0 || max_ascent + max_descent <= 0 {
            return TextBitmap::empty();
        }

        let width = total_width as u32;
        let height = (max_ascent + max_descent) as u32;
        let mut coverage = vec![0u8; (width * height) as usize];

        // Second pass: composite glyph coverage onto the run bitmap.
        let mut cursor_x: i32 = 0;
        for ch in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(ch, px);
            let glyph_x = cursor_x + metrics.xmin;
            let glyph_y = max_ascent - (metrics.height as i32 + metrics.ymin);

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let value = bitmap[gy * metrics.width + gx];
                    if value == 0 {
                        continue;
                    }
                    let x = glyph_x + gx as i32;
                    let y = glyph_y + gy as i32;
                    if x >= 0 && (x as u32) < width && y >= 0 && (y as u32) < height {
                        let idx = (y as u32 * width + x as u32) as usize;
                        coverage[idx] = coverage[idx].max(value);
                    }
                }
            }
            cursor_x += metrics.advance_width.round() as i32;
        }

        TextBitmap { width, height, coverage }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::{GlyphFont, TextBitmap};

    /// Deterministic font stub: every glyph advances `0.6 * px` and rasterizes
    /// as a solid block, so tests need no font file and can assert exact
    /// extents and pixel changes.
    pub struct FixedAdvanceFont {
        pub advance_ratio: f32,
    }

    impl Default for FixedAdvanceFont {
        fn default() -> Self {
            Self { advance_ratio: 0.6 }
        }
    }

    impl GlyphFont for FixedAdvanceFont {
        fn measure_width(&self, text: &str, px: f32) -> f32 {
            text.chars().count() as f32 * self.advance_ratio * px
        }

        fn rasterize(&self, text: &str, px: f32) -> TextBitmap {
            let width = self.measure_width(text, px).ceil() as u32;
            let height = px.ceil() as u32;
            if width == 0 || height == 0 {
                return TextBitmap::empty();
            }
            TextBitmap { width, height, coverage: vec![255; (width * height) as usize] }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::FixedAdvanceFont;

    #[test]
    fn test_named_asset_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path());
        let err = store.resolve(&LogoRef::from("nonexistent_badge")).unwrap_err();
        assert!(matches!(err, AssetError::Missing { ref name } if name == "nonexistent_badge"));
    }

    #[test]
    fn test_named_asset_loads_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([1, 2, 3, 255]));
        img.save(dir.path().join("badge.png")).unwrap();

        let store = AssetStore::new(dir.path());
        let first = store.resolve(&LogoRef::from("badge")).unwrap();
        assert_eq!(first.dimensions(), (4, 4));

        // Second resolve must come from the cache even if the file disappears.
        std::fs::remove_file(dir.path().join("badge.png")).unwrap();
        let second = store.resolve(&LogoRef::from("badge")).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_decoded_ref_passes_through() {
        let store = AssetStore::new("/nonexistent/root");
        let img = Arc::new(RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255])));
        let resolved = store.resolve(&LogoRef::Decoded(Arc::clone(&img))).unwrap();
        assert!(Arc::ptr_eq(&img, &resolved));
    }

    #[test]
    fn test_fixed_advance_font_extents() {
        let font = FixedAdvanceFont::default();
        assert_eq!(font.measure_width("abcd", 10.0), 24.0);
        let bitmap = font.rasterize("ab", 10.0);
        assert_eq!((bitmap.width, bitmap.height), (12, 10));
        assert!(bitmap.coverage.iter().all(|&c| c == 255));
    }
}
