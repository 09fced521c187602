//! Rectangle template family: three stacked strips of filled boxes.

use image::imageops;

use crate::color::Color;
use crate::draw::{
    alpha_blend_images, draw_centered_logo, draw_centered_text, draw_rect, paste_with_alpha,
    TextSize,
};
use crate::error::{LayoutError, Result};
use crate::geometry::{grow_box_for_text, GrowDirection, PixelBox};
use crate::layout::RectangleGeometry;
use crate::video::Frame;

use super::{DrawContext, Template};

/// Opacity of the semi-transparent clock and message containers.
const PANEL_OPACITY: f32 = 0.6;
/// Text height as a fraction of its container box.
const LABEL_TEXT_SCALE: f32 = 0.55;

pub struct RectangleTemplate;

impl RectangleTemplate {
    pub fn new() -> Self {
        Self
    }

    fn geometry<'a>(&self, ctx: &'a DrawContext) -> Result<&'a RectangleGeometry> {
        ctx.geometry.rectangle().ok_or_else(|| {
            LayoutError::InvalidParameters {
                details: "rectangle template driven with non-rectangle geometry".to_string(),
            }
            .into()
        })
    }

    /// Jersey stripe: container split top/bottom into the two palette colors.
    fn draw_stripe(&self, frame: &mut Frame, boxed: PixelBox, palette: [Color; 2]) {
        let (top, bottom) = boxed.split_top_bottom();
        draw_rect(frame, top, palette[0], 1.0);
        draw_rect(frame, bottom, palette[1], 1.0);
    }

    /// Fade-in reveal: blend the resized logo over the frame region it will
    /// occupy, weighted by `alpha`. At alpha 1.0 this is a plain paste.
    fn draw_logo_with_fade(
        &self,
        frame: &mut Frame,
        logo: &image::RgbaImage,
        dims: (u32, u32),
        boxed: PixelBox,
        alpha: f64,
    ) {
        if alpha >= 1.0 {
            draw_centered_logo(frame, logo, dims.0, dims.1, boxed, 0.0);
            return;
        }
        if alpha <= 0.0 {
            return;
        }

        let resized = imageops::resize(logo, dims.0, dims.1, imageops::FilterType::Triangle);
        let (cx, cy) = boxed.center();
        let origin_x = cx - dims.0 as i32 / 2;
        let origin_y = cy - dims.1 as i32 / 2;
        // The blend needs the full region inside the frame; partially
        // off-screen logos skip the fade and appear at the hold state.
        if origin_x < 0
            || origin_y < 0
            || origin_x as u32 + dims.0 > frame.width()
            || origin_y as u32 + dims.1 > frame.height()
        {
            return;
        }

        let base = imageops::crop_imm(frame.as_image(), origin_x as u32, origin_y as u32, dims.0, dims.1)
            .to_image();
        let blended = alpha_blend_images(&base, &resized, alpha as f32);
        paste_with_alpha(frame, &blended, origin_x, origin_y);
    }
}

impl Template for RectangleTemplate {
    fn name(&self) -> &str {
        "rectangle"
    }

    fn draw_scoreboard(&self, frame: &mut Frame, ctx: &DrawContext) -> Result<()> {
        let geom = self.geometry(ctx)?;
        let sb = &geom.scoreboard;
        let (w, h) = (frame.width(), frame.height());
        let colors = ctx.colors;
        let meta = ctx.meta;

        // Home identity block
        let home_logo_box = sb.home_logo.resolve(w, h);
        draw_rect(frame, home_logo_box, colors.bg, 1.0);
        if let Some(logo) = ctx.named_asset(&meta.home.logo) {
            let (lw, lh) = ctx.geometry.home_logo_dims;
            draw_centered_logo(frame, &logo, lw, lh, home_logo_box, 0.0);
        }
        self.draw_stripe(frame, sb.home_stripe.resolve(w, h), meta.home.palette()?);

        let home_name_box = sb.home_name.resolve(w, h);
        draw_rect(frame, home_name_box, colors.fg, 1.0);
        if let Some(font) = ctx.font {
            draw_centered_text(
                frame,
                &meta.home.initials,
                home_name_box,
                colors.text,
                TextSize::FitBox(LABEL_TEXT_SCALE),
                0.0,
                font,
            );
        }

        // Score boxes are always white with dark text for legibility.
        let (home_score, visiting_score) = meta.score_text();
        for (text, frac) in [(home_score, sb.home_score), (visiting_score, sb.visiting_score)] {
            let score_box = frac.resolve(w, h);
            draw_rect(frame, score_box, Color::WHITE, 1.0);
            if let Some(font) = ctx.font {
                draw_centered_text(
                    frame,
                    &text,
                    score_box,
                    Color::BLACK,
                    TextSize::FitBox(LABEL_TEXT_SCALE),
                    0.0,
                    font,
                );
            }
        }

        // Visiting identity block, mirrored
        let visiting_name_box = sb.visiting_name.resolve(w, h);
        draw_rect(frame, visiting_name_box, colors.fg, 1.0);
        if let Some(font) = ctx.font {
            draw_centered_text(
                frame,
                &meta.visiting.initials,
                visiting_name_box,
                colors.text,
                TextSize::FitBox(LABEL_TEXT_SCALE),
                0.0,
                font,
            );
        }
        self.draw_stripe(frame, sb.visiting_stripe.resolve(w, h), meta.visiting.palette()?);

        let visiting_logo_box = sb.visiting_logo.resolve(w, h);
        draw_rect(frame, visiting_logo_box, colors.bg, 1.0);
        if let Some(logo) = ctx.named_asset(&meta.visiting.logo) {
            let (lw, lh) = ctx.geometry.visiting_logo_dims;
            draw_centered_logo(frame, &logo, lw, lh, visiting_logo_box, 0.0);
        }

        // League badge and semi-transparent match clock
        let league_box = sb.league_logo.resolve(w, h);
        draw_rect(frame, league_box, colors.border, 1.0);
        if let Some(logo) = ctx.named_asset(&meta.league_logo) {
            let (lw, lh) = ctx.geometry.league_logo_dims;
            draw_centered_logo(frame, &logo, lw, lh, league_box, 0.0);
        }

        let clock_box = sb.clock.resolve(w, h);
        draw_rect(frame, clock_box, colors.bg, PANEL_OPACITY);
        if let Some(font) = ctx.font {
            draw_centered_text(
                frame,
                &meta.game_clock,
                clock_box,
                colors.text,
                TextSize::FitBox(LABEL_TEXT_SCALE),
                0.0,
                font,
            );
        }

        Ok(())
    }

    fn draw_intro(&self, frame: &mut Frame, ctx: &DrawContext, fade_alpha: f64) -> Result<()> {
        let geom = self.geometry(ctx)?;
        let intro = &geom.intro;
        let (w, h) = (frame.width(), frame.height());
        let colors = ctx.colors;
        let meta = ctx.meta;

        // League label at the horizontal center; the two identity blocks
        // build outward from it. The label container grows to fit the league
        // name and the match date stacked in one box.
        let label_box = intro.league_label.resolve(w, h);
        let label_box = match ctx.font {
            Some(font) => grow_box_for_text(
                label_box,
                &[&meta.league_name, &meta.date_text()],
                LABEL_TEXT_SCALE,
                GrowDirection::Symmetric,
                font,
            ),
            None => label_box,
        };
        draw_rect(frame, label_box, colors.bg, 1.0);
        if let Some(font) = ctx.font {
            let size = TextSize::FitBox(LABEL_TEXT_SCALE * 0.5);
            let (top, bottom) = label_box.split_top_bottom();
            draw_centered_text(frame, &meta.league_name, top, colors.text, size, 0.0, font);
            draw_centered_text(frame, &meta.date_text(), bottom, colors.text, size, 0.0, font);
        }

        // Full-width team name labels, auto-grown away from the center
        for (team, frac, stripe_frac, grow) in [
            (&meta.home, intro.home_name, intro.home_stripe, GrowDirection::Left),
            (&meta.visiting, intro.visiting_name, intro.visiting_stripe, GrowDirection::Right),
        ] {
            let mut name_box = frac.resolve(w, h);
            if let Some(font) = ctx.font {
                name_box =
                    grow_box_for_text(name_box, &[&team.name], LABEL_TEXT_SCALE, grow, font);
            }
            draw_rect(frame, name_box, colors.fg, 1.0);
            if let Some(font) = ctx.font {
                draw_centered_text(
                    frame,
                    &team.name,
                    name_box,
                    colors.text,
                    TextSize::FitBox(LABEL_TEXT_SCALE),
                    0.0,
                    font,
                );
            }
            self.draw_stripe(frame, stripe_frac.resolve(w, h), team.palette()?);
        }

        // Team logos reveal through the fade before the hold state.
        for (team, frac, dims) in [
            (&meta.home, intro.home_logo, ctx.geometry.home_logo_dims),
            (&meta.visiting, intro.visiting_logo, ctx.geometry.visiting_logo_dims),
        ] {
            if let Some(logo) = ctx.named_asset(&team.logo) {
                // Intro logos render at twice the scoreboard size.
                let dims = (dims.0 * 2, dims.1 * 2);
                self.draw_logo_with_fade(frame, &logo, dims, frac.resolve(w, h), fade_alpha);
            }
        }

        Ok(())
    }

    fn draw_action(&self, frame: &mut Frame, ctx: &DrawContext) -> Result<()> {
        let geom = self.geometry(ctx)?;
        let action = &geom.action;
        let (w, h) = (frame.width(), frame.height());
        let colors = ctx.colors;
        let meta = ctx.meta;

        // Jersey-color chip ties the callout to the home team.
        draw_rect(frame, action.chip.resolve(w, h), meta.home.palette()?[0], 1.0);

        let icon_dims = ctx.geometry.icon_dims;

        let player_icon_box = action.player_icon.resolve(w, h);
        draw_rect(frame, player_icon_box, colors.bg, 1.0);
        if let Some(icon) = ctx.named_asset("player") {
            draw_centered_logo(frame, &icon, icon_dims.0, icon_dims.1, player_icon_box, 0.0);
        }

        if let Some(player_name) = meta.player_name.as_deref() {
            let mut name_box = action.player_name.resolve(w, h);
            if let Some(font) = ctx.font {
                name_box = grow_box_for_text(
                    name_box,
                    &[player_name],
                    LABEL_TEXT_SCALE,
                    GrowDirection::Right,
                    font,
                );
            }
            draw_rect(frame, name_box, colors.fg, 1.0);
            if let Some(font) = ctx.font {
                draw_centered_text(
                    frame,
                    player_name,
                    name_box,
                    colors.text,
                    TextSize::FitBox(LABEL_TEXT_SCALE),
                    0.0,
                    font,
                );
            }
        }

        let action_icon_box = action.action_icon.resolve(w, h);
        draw_rect(frame, action_icon_box, colors.bg, 1.0);
        if let Some(icon) = ctx.named_asset(meta.action.icon_name()) {
            draw_centered_logo(frame, &icon, icon_dims.0, icon_dims.1, action_icon_box, 0.0);
        }

        let message_box = action.message.resolve(w, h);
        draw_rect(frame, message_box, colors.bg, PANEL_OPACITY);
        if let Some(font) = ctx.font {
            draw_centered_text(
                frame,
                meta.action.message(),
                message_box,
                colors.text,
                TextSize::FitBox(LABEL_TEXT_SCALE),
                0.0,
                font,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_support::FixedAdvanceFont;
    use crate::assets::{AssetStore, LogoRef};
    use crate::config::test_support::sample_meta;
    use crate::config::TemplateConfig;
    use crate::layout::{resolve_layout, LayoutVariant, TemplateKind};

    fn context_parts() -> (crate::layout::LayoutGeometry, crate::config::ClipMeta, crate::config::TemplateColors)
    {
        let meta = sample_meta();
        let colors = TemplateConfig::default().colors().unwrap();
        let geometry = resolve_layout(
            [16, 9],
            TemplateKind::Rectangle,
            LayoutVariant::Left,
            &LogoRef::Named(meta.league_logo.clone()),
            &LogoRef::Named(meta.home.logo.clone()),
            &LogoRef::Named(meta.visiting.logo.clone()),
            640,
            360,
        )
        .unwrap();
        (geometry, meta, colors)
    }

    #[test]
    fn test_scoreboard_draws_without_assets() {
        // Every logo is missing: boxes and text must still be drawn and the
        // call must succeed.
        let (geometry, meta, colors) = context_parts();
        let store = AssetStore::new("/nonexistent");
        let font = FixedAdvanceFont::default();
        let ctx = DrawContext {
            geometry: &geometry,
            meta: &meta,
            colors: &colors,
            assets: &store,
            font: Some(&font),
        };

        let mut frame = Frame::new_filled(640, 360, [0, 0, 0, 255]);
        let template = RectangleTemplate::new();
        template.draw_scoreboard(&mut frame, &ctx).unwrap();

        // The home name container (fg #ffc300) got filled: R=255, G=195, B=0.
        let name_box = geometry.rectangle().unwrap().scoreboard.home_name.resolve(640, 360);
        let corner = frame.get_pixel(name_box.x0 as u32, name_box.y0 as u32);
        assert_eq!(corner, [255, 195, 0, 255]);
    }

    #[test]
    fn test_all_phases_mutate_frame() {
        let (geometry, meta, colors) = context_parts();
        let store = AssetStore::new("/nonexistent");
        let font = FixedAdvanceFont::default();
        let ctx = DrawContext {
            geometry: &geometry,
            meta: &meta,
            colors: &colors,
            assets: &store,
            font: Some(&font),
        };
        let template = RectangleTemplate::new();
        let blank = Frame::new_filled(640, 360, [7, 7, 7, 255]);

        for phase in 0..3 {
            let mut frame = blank.clone();
            match phase {
                0 => template.draw_scoreboard(&mut frame, &ctx).unwrap(),
                1 => template.draw_intro(&mut frame, &ctx, 1.0).unwrap(),
                _ => template.draw_action(&mut frame, &ctx).unwrap(),
            }
            let changed = frame
                .as_image()
                .pixels()
                .zip(blank.as_image().pixels())
                .any(|(a, b)| a != b);
            assert!(changed, "phase {} drew nothing", phase);
        }
    }

    #[test]
    fn test_rejects_diamond_geometry() {
        let meta = sample_meta();
        let colors = TemplateConfig::default().colors().unwrap();
        let geometry = resolve_layout(
            [16, 9],
            TemplateKind::Diamond,
            LayoutVariant::Left,
            &LogoRef::Named(meta.league_logo.clone()),
            &LogoRef::Named(meta.home.logo.clone()),
            &LogoRef::Named(meta.visiting.logo.clone()),
            640,
            360,
        )
        .unwrap();
        let store = AssetStore::new("/nonexistent");
        let ctx = DrawContext {
            geometry: &geometry,
            meta: &meta,
            colors: &colors,
            assets: &store,
            font: None,
        };

        let mut frame = Frame::new_filled(640, 360, [0, 0, 0, 255]);
        assert!(RectangleTemplate::new().draw_scoreboard(&mut frame, &ctx).is_err());
    }
}
