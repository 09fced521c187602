//! The two visual template families.
//!
//! A [`Template`] turns resolved layout geometry plus clip facts into draw
//! calls for one phase of one frame. Exactly one template is selected per
//! clip from the configured [`TemplateKind`]; the compositor drives it in
//! fixed phase order (scoreboard, intro, action).

pub mod diamond;
pub mod rectangle;

pub use diamond::DiamondTemplate;
pub use rectangle::RectangleTemplate;

use std::sync::Arc;

use image::RgbaImage;
use tracing::warn;

use crate::assets::{AssetStore, GlyphFont, LogoRef};
use crate::config::{ClipMeta, TemplateColors};
use crate::error::Result;
use crate::layout::{LayoutGeometry, TemplateKind};
use crate::video::Frame;

/// Everything a template needs to draw one phase. Borrowed per frame; the
/// template retains nothing.
pub struct DrawContext<'a> {
    pub geometry: &'a LayoutGeometry,
    pub meta: &'a ClipMeta,
    pub colors: &'a TemplateColors,
    pub assets: &'a AssetStore,
    pub font: Option<&'a dyn GlyphFont>,
}

impl<'a> DrawContext<'a> {
    /// Resolve a logo, downgrading a missing or undecodable asset to a skip.
    ///
    /// A missing optional asset must not abort an otherwise-successful clip;
    /// the element is simply not drawn.
    pub fn logo(&self, logo: &LogoRef) -> Option<Arc<RgbaImage>> {
        match self.assets.resolve(logo) {
            Ok(image) => Some(image),
            Err(err) => {
                warn!("Skipping overlay element: {}", err);
                None
            }
        }
    }

    /// Resolve a named asset with the same skip-on-missing policy.
    pub fn named_asset(&self, name: &str) -> Option<Arc<RgbaImage>> {
        self.logo(&LogoRef::Named(name.to_string()))
    }
}

/// One visual template family's draw sequences.
pub trait Template {
    /// Template family name, for logs.
    fn name(&self) -> &str;

    /// Persistent score strip, drawn on every frame of the clip.
    fn draw_scoreboard(&self, frame: &mut Frame, ctx: &DrawContext) -> Result<()>;

    /// Team-vs-team reveal. `fade_alpha` in `[0, 1]` drives the progressive
    /// logo reveal; 1.0 is the fully-revealed hold state.
    fn draw_intro(&self, frame: &mut Frame, ctx: &DrawContext, fade_alpha: f64) -> Result<()>;

    /// Event icon and message callout.
    fn draw_action(&self, frame: &mut Frame, ctx: &DrawContext) -> Result<()>;
}

/// Select the template implementation for a configured kind.
pub fn select_template(kind: TemplateKind) -> Box<dyn Template> {
    match kind {
        TemplateKind::Rectangle => Box::new(RectangleTemplate::new()),
        TemplateKind::Diamond => Box::new(DiamondTemplate::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_template_matches_kind() {
        assert_eq!(select_template(TemplateKind::Rectangle).name(), "rectangle");
        assert_eq!(select_template(TemplateKind::Diamond).name(), "diamond");
    }
}
