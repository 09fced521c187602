//! Template layout resolution.
//!
//! Template kind, aspect ratio, and layout variant form a small closed set of
//! tagged variants. Each `aspect ratio × template kind` pair has a constant
//! table of fractional coordinates (see [`tables`]); this module selects the
//! right table, applies the variant's horizontal shift, and derives the pixel
//! dimensions for logos and icons. Everything else stays fractional until
//! draw time so the same geometry serves any resolution.

pub mod tables;

use serde::{Deserialize, Serialize};

use crate::assets::LogoRef;
use crate::error::LayoutError;
use crate::geometry::FracBox;

/// The visual template family. Exactly one family's geometry is used per
/// clip; no frame mixes rectangle and diamond coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Rectangle,
    Diamond,
}

/// Horizontal anchoring of the whole overlay group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    Left,
    Center,
}

/// The supported frame shapes. Geometry tables are authored per ratio, so an
/// unrecognized ratio is fatal for the clip rather than silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    Wide16x9,
    Tall9x16,
    Square1x1,
    Portrait4x5,
}

impl AspectRatio {
    /// Map a `[width, height]` ratio pair to the supported set, reducing by
    /// the greatest common divisor first (`[1920, 1080]` is 16:9).
    pub fn try_from_pair(pair: [u32; 2]) -> Result<Self, LayoutError> {
        let [w, h] = pair;
        if w == 0 || h == 0 {
            return Err(LayoutError::UnsupportedAspectRatio { width: w, height: h });
        }
        let g = gcd(w, h);
        match (w / g, h / g) {
            (16, 9) => Ok(Self::Wide16x9),
            (9, 16) => Ok(Self::Tall9x16),
            (1, 1) => Ok(Self::Square1x1),
            (4, 5) => Ok(Self::Portrait4x5),
            _ => Err(LayoutError::UnsupportedAspectRatio { width: w, height: h }),
        }
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Scoreboard strip boxes (rectangle family), in fractional coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreboardBoxes {
    pub home_logo: FracBox,
    pub home_stripe: FracBox,
    pub home_name: FracBox,
    pub home_score: FracBox,
    pub visiting_score: FracBox,
    pub visiting_name: FracBox,
    pub visiting_stripe: FracBox,
    pub visiting_logo: FracBox,
    pub league_logo: FracBox,
    pub clock: FracBox,
}

impl ScoreboardBoxes {
    fn shift_x(&self, dx: f64) -> Self {
        Self {
            home_logo: self.home_logo.shift_x(dx),
            home_stripe: self.home_stripe.shift_x(dx),
            home_name: self.home_name.shift_x(dx),
            home_score: self.home_score.shift_x(dx),
            visiting_score: self.visiting_score.shift_x(dx),
            visiting_name: self.visiting_name.shift_x(dx),
            visiting_stripe: self.visiting_stripe.shift_x(dx),
            visiting_logo: self.visiting_logo.shift_x(dx),
            league_logo: self.league_logo.shift_x(dx),
            clock: self.clock.shift_x(dx),
        }
    }
}

/// Intro strip boxes (rectangle family). The name boxes are seeds for
/// [`crate::geometry::grow_box_for_text`]: each team's identity block builds
/// outward from the league label at the horizontal center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroBoxes {
    pub league_label: FracBox,
    pub home_name: FracBox,
    pub visiting_name: FracBox,
    pub home_logo: FracBox,
    pub visiting_logo: FracBox,
    pub home_stripe: FracBox,
    pub visiting_stripe: FracBox,
}

impl IntroBoxes {
    fn shift_x(&self, dx: f64) -> Self {
        Self {
            league_label: self.league_label.shift_x(dx),
            home_name: self.home_name.shift_x(dx),
            visiting_name: self.visiting_name.shift_x(dx),
            home_logo: self.home_logo.shift_x(dx),
            visiting_logo: self.visiting_logo.shift_x(dx),
            home_stripe: self.home_stripe.shift_x(dx),
            visiting_stripe: self.visiting_stripe.shift_x(dx),
        }
    }
}

/// Action callout boxes, shared shape between both template families.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionBoxes {
    pub chip: FracBox,
    pub player_icon: FracBox,
    pub player_name: FracBox,
    pub action_icon: FracBox,
    pub message: FracBox,
}

impl ActionBoxes {
    fn shift_x(&self, dx: f64) -> Self {
        Self {
            chip: self.chip.shift_x(dx),
            player_icon: self.player_icon.shift_x(dx),
            player_name: self.player_name.shift_x(dx),
            action_icon: self.action_icon.shift_x(dx),
            message: self.message.shift_x(dx),
        }
    }
}

/// Resolved geometry for the rectangle template family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleGeometry {
    pub scoreboard: ScoreboardBoxes,
    pub intro: IntroBoxes,
    pub action: ActionBoxes,
}

/// Resolved geometry for the diamond template family. Fractional anchors;
/// the team blocks cantilever off the diamond's pixel bounding box at draw
/// time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiamondGeometry {
    pub badge_center: (f64, f64),
    pub badge_half_frac: f64,
    pub block_h_frac: f64,
    pub name_w_frac: f64,
    pub score_w_frac: f64,
    pub stripe_w_frac: f64,
    pub intro_home_center: (f64, f64),
    pub intro_visiting_center: (f64, f64),
    pub intro_half_frac: f64,
    /// Vertical band (y0, y1 fractions) for the intro team labels.
    pub intro_label_band: (f64, f64),
    pub action: ActionBoxes,
}

/// Template-specific geometry; exactly one family per clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemplateGeometry {
    Rectangle(RectangleGeometry),
    Diamond(DiamondGeometry),
}

/// The resolved layout for one clip: fractional coordinate tables plus the
/// derived pixel sizes. Computed once after the source resolution is known;
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGeometry {
    pub aspect: AspectRatio,
    pub kind: TemplateKind,
    pub frame_w: u32,
    pub frame_h: u32,
    pub home_logo_dims: (u32, u32),
    pub visiting_logo_dims: (u32, u32),
    pub league_logo_dims: (u32, u32),
    pub icon_dims: (u32, u32),
    pub template: TemplateGeometry,
}

impl LayoutGeometry {
    pub fn rectangle(&self) -> Option<&RectangleGeometry> {
        match &self.template {
            TemplateGeometry::Rectangle(geom) => Some(geom),
            TemplateGeometry::Diamond(_) => None,
        }
    }

    pub fn diamond(&self) -> Option<&DiamondGeometry> {
        match &self.template {
            TemplateGeometry::Diamond(geom) => Some(geom),
            TemplateGeometry::Rectangle(_) => None,
        }
    }
}

/// Width/height ratio for a named logo whose source art is not square.
///
/// Exact lookup by asset identifier; unknown assets stay square. (The source
/// system matched substrings inside asset paths, which invites false
/// positives; the identifiers and ratios are preserved, the matching is not.)
pub fn icon_aspect(logo: &LogoRef) -> f64 {
    match logo.name() {
        Some(name) => tables::ICON_ASPECT_OVERRIDES
            .iter()
            .find(|(id, _)| *id == name)
            .map(|(_, ratio)| *ratio)
            .unwrap_or(1.0),
        None => 1.0,
    }
}

/// Resolve the full layout for one clip.
///
/// Selects the constant table for `aspect × kind`, applies the fixed
/// horizontal shift when the layout variant is `center`, and derives pixel
/// dimensions for the logos and icons (consulting the icon-aspect overrides
/// for named art). Fails with `UnsupportedAspectRatio` before any frame is
/// processed.
#[allow(clippy::too_many_arguments)]
pub fn resolve_layout(
    aspect_pair: [u32; 2],
    kind: TemplateKind,
    variant: LayoutVariant,
    league_logo: &LogoRef,
    home_logo: &LogoRef,
    visiting_logo: &LogoRef,
    frame_w: u32,
    frame_h: u32,
) -> Result<LayoutGeometry, LayoutError> {
    let aspect = AspectRatio::try_from_pair(aspect_pair)?;
    if frame_w == 0 || frame_h == 0 {
        return Err(LayoutError::InvalidParameters {
            details: format!("frame size {}x{}", frame_w, frame_h),
        });
    }

    let logo_dims = |frac: f64, ratio: f64| {
        let h = (frame_h as f64 * frac).round().max(1.0) as u32;
        let w = (h as f64 * ratio).round().max(1.0) as u32;
        (w, h)
    };

    let (template, logo_frac, league_frac, icon_frac) = match kind {
        TemplateKind::Rectangle => {
            let table = tables::rectangle_table(aspect);
            let dx = match variant {
                LayoutVariant::Left => 0.0,
                LayoutVariant::Center => table.center_shift,
            };
            let geom = RectangleGeometry {
                scoreboard: table.scoreboard.shift_x(dx),
                intro: table.intro.shift_x(dx),
                action: table.action.shift_x(dx),
            };
            (
                TemplateGeometry::Rectangle(geom),
                table.logo_frac,
                table.league_logo_frac,
                table.icon_frac,
            )
        }
        TemplateKind::Diamond => {
            let table = tables::diamond_table(aspect);
            let dx = match variant {
                LayoutVariant::Left => 0.0,
                LayoutVariant::Center => table.center_shift,
            };
            let geom = DiamondGeometry {
                badge_center: (table.badge_center.0 + dx, table.badge_center.1),
                badge_half_frac: table.badge_half_frac,
                block_h_frac: table.block_h_frac,
                name_w_frac: table.name_w_frac,
                score_w_frac: table.score_w_frac,
                stripe_w_frac: table.stripe_w_frac,
                intro_home_center: (table.intro_home_center.0 + dx, table.intro_home_center.1),
                intro_visiting_center: (
                    table.intro_visiting_center.0 + dx,
                    table.intro_visiting_center.1,
                ),
                intro_half_frac: table.intro_half_frac,
                intro_label_band: table.intro_label_band,
                action: table.action.shift_x(dx),
            };
            (
                TemplateGeometry::Diamond(geom),
                table.logo_frac,
                table.league_logo_frac,
                table.icon_frac,
            )
        }
    };

    Ok(LayoutGeometry {
        aspect,
        kind,
        frame_w,
        frame_h,
        home_logo_dims: logo_dims(logo_frac, icon_aspect(home_logo)),
        visiting_logo_dims: logo_dims(logo_frac, icon_aspect(visiting_logo)),
        league_logo_dims: logo_dims(league_frac, icon_aspect(league_logo)),
        icon_dims: logo_dims(icon_frac, 1.0),
        template,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;

    fn named(name: &str) -> LogoRef {
        LogoRef::Named(name.to_string())
    }

    fn resolve(
        aspect: [u32; 2],
        kind: TemplateKind,
        variant: LayoutVariant,
    ) -> Result<LayoutGeometry, LayoutError> {
        resolve_layout(
            aspect,
            kind,
            variant,
            &named("league_badge"),
            &named("home_crest"),
            &named("visiting_crest"),
            1920,
            1080,
        )
    }

    #[test]
    fn test_aspect_ratio_from_pair() {
        assert_eq!(AspectRatio::try_from_pair([16, 9]).unwrap(), AspectRatio::Wide16x9);
        assert_eq!(AspectRatio::try_from_pair([1920, 1080]).unwrap(), AspectRatio::Wide16x9);
        assert_eq!(AspectRatio::try_from_pair([1080, 1920]).unwrap(), AspectRatio::Tall9x16);
        assert_eq!(AspectRatio::try_from_pair([720, 720]).unwrap(), AspectRatio::Square1x1);
        assert_eq!(AspectRatio::try_from_pair([864, 1080]).unwrap(), AspectRatio::Portrait4x5);
    }

    #[test]
    fn test_unsupported_ratio_is_an_error() {
        for pair in [[5, 7], [21, 9], [0, 9], [16, 0]] {
            assert!(matches!(
                AspectRatio::try_from_pair(pair),
                Err(LayoutError::UnsupportedAspectRatio { .. })
            ));
        }
    }

    #[test]
    fn test_every_table_resolves() {
        for pair in [[16, 9], [9, 16], [1, 1], [4, 5]] {
            for kind in [TemplateKind::Rectangle, TemplateKind::Diamond] {
                for variant in [LayoutVariant::Left, LayoutVariant::Center] {
                    resolve(pair, kind, variant).unwrap();
                }
            }
        }
    }

    #[test]
    fn test_center_variant_shifts_only_x() {
        let left = resolve([16, 9], TemplateKind::Rectangle, LayoutVariant::Left).unwrap();
        let center = resolve([16, 9], TemplateKind::Rectangle, LayoutVariant::Center).unwrap();

        let shift = tables::rectangle_table(AspectRatio::Wide16x9).center_shift;
        assert_eq!(shift, 0.332);

        let (l, c) = (left.rectangle().unwrap(), center.rectangle().unwrap());
        let pairs = [
            (l.scoreboard.home_logo, c.scoreboard.home_logo),
            (l.scoreboard.clock, c.scoreboard.clock),
            (l.intro.league_label, c.intro.league_label),
            (l.action.message, c.action.message),
        ];
        for (before, after) in pairs {
            assert!((after.x0 - before.x0 - shift).abs() < 1e-12);
            assert!((after.x1 - before.x1 - shift).abs() < 1e-12);
            assert_eq!(before.y0, after.y0);
            assert_eq!(before.y1, after.y1);
        }
    }

    #[test]
    fn test_icon_aspect_overrides_are_exact_match() {
        let (id, ratio) = tables::ICON_ASPECT_OVERRIDES[0];
        assert_eq!(icon_aspect(&named(id)), ratio);
        // A superstring must not match (the substring policy is gone).
        assert_eq!(icon_aspect(&named(&format!("{}_alt", id))), 1.0);
        assert_eq!(icon_aspect(&named("unknown_team")), 1.0);
    }

    #[test]
    fn test_logo_dims_follow_aspect_override() {
        let (id, ratio) = tables::ICON_ASPECT_OVERRIDES[0];
        let geom = resolve_layout(
            [16, 9],
            TemplateKind::Rectangle,
            LayoutVariant::Left,
            &named(id),
            &named("home_crest"),
            &named("visiting_crest"),
            1920,
            1080,
        )
        .unwrap();

        let (w, h) = geom.league_logo_dims;
        assert_eq!(w, (h as f64 * ratio).round() as u32);
        // Unlisted team crests stay square.
        let (hw, hh) = geom.home_logo_dims;
        assert_eq!(hw, hh);
    }

    #[test]
    fn test_template_families_do_not_mix() {
        let rect = resolve([16, 9], TemplateKind::Rectangle, LayoutVariant::Left).unwrap();
        assert!(rect.rectangle().is_some());
        assert!(rect.diamond().is_none());

        let diamond = resolve([16, 9], TemplateKind::Diamond, LayoutVariant::Left).unwrap();
        assert!(diamond.diamond().is_some());
        assert!(diamond.rectangle().is_none());
    }
}
