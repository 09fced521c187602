//! Diamond template family: rotated-square badges with team blocks
//! cantilevered off the badge's bounding box.

use crate::color::Color;
use crate::draw::{draw_centered_logo, draw_centered_text, draw_diamond, draw_rect, TextSize};
use crate::error::{LayoutError, Result};
use crate::geometry::{grow_box_for_text, GrowDirection, PixelBox};
use crate::layout::DiamondGeometry;
use crate::video::Frame;

use super::{DrawContext, Template};

const PANEL_OPACITY: f32 = 0.6;
const LABEL_TEXT_SCALE: f32 = 0.55;
/// Border diamond exceeds the fill diamond by this many pixels of diagonal.
const BORDER_EXTRA: i32 = 3;

pub struct DiamondTemplate;

impl DiamondTemplate {
    pub fn new() -> Self {
        Self
    }

    fn geometry<'a>(&self, ctx: &'a DrawContext) -> Result<&'a DiamondGeometry> {
        ctx.geometry.diamond().ok_or_else(|| {
            LayoutError::InvalidParameters {
                details: "diamond template driven with non-diamond geometry".to_string(),
            }
            .into()
        })
    }

    /// Badge: border diamond behind a filled diamond, logo centered on top.
    /// Returns the fill diamond's bounding box for anchoring neighbors.
    fn draw_badge(
        &self,
        frame: &mut Frame,
        ctx: &DrawContext,
        center: (i32, i32),
        half_diagonal: i32,
        fill: Color,
        logo_name: &str,
        logo_dims: (u32, u32),
    ) -> PixelBox {
        draw_diamond(frame, center, half_diagonal + BORDER_EXTRA, ctx.colors.border);
        let bbox = draw_diamond(frame, center, half_diagonal, fill);
        if let Some(logo) = ctx.named_asset(logo_name) {
            draw_centered_logo(frame, &logo, logo_dims.0, logo_dims.1, bbox, 0.0);
        }
        bbox
    }
}

impl Template for DiamondTemplate {
    fn name(&self) -> &str {
        "diamond"
    }

    fn draw_scoreboard(&self, frame: &mut Frame, ctx: &DrawContext) -> Result<()> {
        let geom = self.geometry(ctx)?;
        let (w, h) = (frame.width() as f64, frame.height() as f64);
        let colors = ctx.colors;
        let meta = ctx.meta;

        let center = (
            (geom.badge_center.0 * w).round() as i32,
            (geom.badge_center.1 * h).round() as i32,
        );
        let half = (geom.badge_half_frac * h).round() as i32;
        let bbox = self.draw_badge(
            frame,
            ctx,
            center,
            half,
            colors.fg,
            &meta.league_logo,
            ctx.geometry.league_logo_dims,
        );

        // Team blocks cantilever off the diamond's bounding box: score
        // adjacent to the badge, then name, then a jersey stripe outermost.
        let block_h = (geom.block_h_frac * h).round() as i32;
        let name_w = (geom.name_w_frac * w).round() as i32;
        let score_w = (geom.score_w_frac * w).round() as i32;
        let stripe_w = (geom.stripe_w_frac * w).round() as i32;
        let y0 = center.1 - block_h / 2;
        let y1 = center.1 + block_h / 2;

        let (home_score_text, visiting_score_text) = meta.score_text();
        let blocks = [
            (&meta.home, home_score_text, bbox.x0, -1),
            (&meta.visiting, visiting_score_text, bbox.x1, 1),
        ];

        for (team, score_text, anchor_x, dir) in blocks {
            let score_box = if dir < 0 {
                PixelBox::new(anchor_x - score_w, y0, anchor_x, y1)
            } else {
                PixelBox::new(anchor_x, y0, anchor_x + score_w, y1)
            };
            let name_box = if dir < 0 {
                PixelBox::new(score_box.x0 - name_w, y0, score_box.x0, y1)
            } else {
                PixelBox::new(score_box.x1, y0, score_box.x1 + name_w, y1)
            };
            let stripe_box = if dir < 0 {
                PixelBox::new(name_box.x0 - stripe_w, y0, name_box.x0, y1)
            } else {
                PixelBox::new(name_box.x1, y0, name_box.x1 + stripe_w, y1)
            };

            draw_rect(frame, score_box, Color::WHITE, 1.0);
            draw_rect(frame, name_box, colors.bg, 1.0);
            draw_rect(frame, stripe_box, team.palette()?[0], 1.0);

            if let Some(font) = ctx.font {
                let size = TextSize::FitBox(LABEL_TEXT_SCALE);
                draw_centered_text(frame, &score_text, score_box, Color::BLACK, size, 0.0, font);
                draw_centered_text(frame, &team.initials, name_box, colors.text, size, 0.0, font);
            }
        }

        Ok(())
    }

    fn draw_intro(&self, frame: &mut Frame, ctx: &DrawContext, _fade_alpha: f64) -> Result<()> {
        let geom = self.geometry(ctx)?;
        let (w, h) = (frame.width() as f64, frame.height() as f64);
        let meta = ctx.meta;
        let half = (geom.intro_half_frac * h).round() as i32;
        let band_y0 = (geom.intro_label_band.0 * h).round() as i32;
        let band_y1 = (geom.intro_label_band.1 * h).round() as i32;

        // One diamond per team, labels underneath growing toward each other.
        let sides = [
            (&meta.home, geom.intro_home_center, ctx.geometry.home_logo_dims, GrowDirection::Right),
            (
                &meta.visiting,
                geom.intro_visiting_center,
                ctx.geometry.visiting_logo_dims,
                GrowDirection::Left,
            ),
        ];
        for (team, center_frac, logo_dims, grow) in sides {
            let center = ((center_frac.0 * w).round() as i32, (center_frac.1 * h).round() as i32);
            let bbox = self.draw_badge(
                frame,
                ctx,
                center,
                half,
                team.palette()?[0],
                &team.logo,
                (logo_dims.0 * 2, logo_dims.1 * 2),
            );

            let mut label_box = PixelBox::new(bbox.x0, band_y0, bbox.x1, band_y1);
            if let Some(font) = ctx.font {
                label_box =
                    grow_box_for_text(label_box, &[&team.name], LABEL_TEXT_SCALE, grow, font);
            }
            draw_rect(frame, label_box, ctx.colors.bg, 1.0);
            if let Some(font) = ctx.font {
                draw_centered_text(
                    frame,
                    &team.name,
                    label_box,
                    ctx.colors.text,
                    TextSize::FitBox(LABEL_TEXT_SCALE),
                    0.0,
                    font,
                );
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
