//! The frame-by-frame overlay driver.
//!
//! [`OverlayCompositor`] owns one clip's worth of immutable inputs (template
//! configuration, match facts, asset store) and runs the compose loop:
//! resolve the layout once from the source metadata, then for every frame
//! decide the active phases and draw them in fixed order before handing the
//! frame to the sink. The sink is flushed on every exit path.

use tracing::{debug, info, warn};

use crate::assets::{AssetStore, GlyphFont, LogoRef};
use crate::config::{ClipMeta, TemplateConfig, TemplateColors};
use crate::error::Result;
use crate::layout::{resolve_layout, LayoutGeometry};
use crate::templates::{select_template, DrawContext, Template};
use crate::timeline::{classify_frame, INTRO_WINDOW};
use crate::video::{Frame, FrameSink, FrameSource};

/// What one compose run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeReport {
    /// Frames pulled from the source.
    pub frames_read: u64,
    /// Frames handed to the sink. Equals `frames_read`; every source frame
    /// is written, overlaid or not.
    pub frames_written: u64,
}

/// Composites the overlay onto every frame of one clip.
pub struct OverlayCompositor {
    config: TemplateConfig,
    meta: ClipMeta,
    colors: TemplateColors,
    assets: AssetStore,
    template: Box<dyn Template>,
    font: Option<Box<dyn GlyphFont>>,
}

impl OverlayCompositor {
    /// Build a compositor for one clip. Validates the match facts and parses
    /// the template colors up front so bad input fails before any I/O.
    pub fn new(config: TemplateConfig, meta: ClipMeta, assets: AssetStore) -> Result<Self> {
        meta.validate()?;
        let colors = config.colors()?;
        let template = select_template(config.template);
        Ok(Self { config, meta, colors, assets, template, font: None })
    }

    /// Attach a glyph font for the text elements. Without one, text elements
    /// are skipped the same way missing logo assets are.
    pub fn with_font(mut self, font: Box<dyn GlyphFont>) -> Self {
        self.font = Some(font);
        self
    }

    /// Run the compose loop, reading from `source` until it is exhausted and
    /// writing every frame to `sink`. The sink is finished on both the
    /// success and the error path.
    pub fn compose(
        &self,
        source: &mut dyn FrameSource,
        sink: &mut dyn FrameSink,
    ) -> Result<ComposeReport> {
        let result = self.run(source, sink);
        let finished = sink.finish();
        match result {
            Ok(report) => {
                finished?;
                Ok(report)
            }
            Err(err) => {
                if let Err(flush_err) = finished {
                    warn!("Sink flush after failure also failed: {}", flush_err);
                }
                Err(err)
            }
        }
    }

    fn run(&self, source: &mut dyn FrameSource, sink: &mut dyn FrameSink) -> Result<ComposeReport> {
        let metadata = source.metadata();
        let duration = metadata.frame_count;
        info!(
            "Composing {} template over {}x{}, {} frames",
            self.template.name(),
            metadata.width,
            metadata.height,
            duration
        );

        // One layout resolution per clip; an unsupported aspect ratio aborts
        // before the first frame is touched.
        let geometry = resolve_layout(
            self.config.aspect_ratio,
            self.config.template,
            self.config.layout,
            &LogoRef::from(self.meta.league_logo.as_str()),
            &LogoRef::from(self.meta.home.logo.as_str()),
            &LogoRef::from(self.meta.visiting.logo.as_str()),
            metadata.width,
            metadata.height,
        )?;

        let mut frame_index: u64 = 0;
        while let Some(mut frame) = source.next_frame()? {
            frame_index += 1;
            self.compose_frame(&mut frame, frame_index, duration, &geometry)?;
            sink.write_frame(&frame)?;
            if frame_index % 100 == 0 {
                debug!("Composed frame {}/{}", frame_index, duration);
            }
        }

        if frame_index < duration {
            debug!(
                "Source ended early at frame {} of declared {}",
                frame_index, duration
            );
        }
        info!("Clip complete: {} frames composed", frame_index);
        Ok(ComposeReport { frames_read: frame_index, frames_written: frame_index })
    }

    fn compose_frame(
        &self,
        frame: &mut Frame,
        frame_index: u64,
        duration: u64,
        geometry: &LayoutGeometry,
    ) -> Result<()> {
        let phases = classify_frame(frame_index, duration, self.config.template);
        if phases.is_empty() {
            return Ok(());
        }

        let ctx = DrawContext {
            geometry,
            meta: &self.meta,
            colors: &self.colors,
            assets: &self.assets,
            font: self.font.as_deref(),
        };

        // Fixed draw order so later phases layer on top.
        if phases.scoreboard {
            self.template.draw_scoreboard(frame, &ctx)?;
        }
        if phases.intro {
            let fade = INTRO_WINDOW.fade_alpha(frame_index, duration);
            self.template.draw_intro(frame, &ctx, fade)?;
        }
        if phases.action {
            self.template.draw_action(frame, &ctx)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_support::FixedAdvanceFont;
    use crate::config::test_support::sample_meta;
    use crate::video::{Frame, MemorySink, MemorySource, SourceMetadata};
    use image::RgbaImage;

    fn compositor(config: TemplateConfig) -> OverlayCompositor {
        let assets = AssetStore::new("/nonexistent/assets");
        OverlayCompositor::new(config, sample_meta(), assets)
            .unwrap()
            .with_font(Box::new(FixedAdvanceFont::default()))
    }

    fn differs(a: &Frame, b: &Frame) -> bool {
        a != b
    }

    #[test]
    fn test_phase_windows_drive_per_frame_output() {
        let mut source = MemorySource::new(640, 360, 100, [40, 40, 40, 255]);
        let mut sink = MemorySink::new();
        let report = compositor(TemplateConfig::default())
            .compose(&mut source, &mut sink)
            .unwrap();

        assert_eq!(report.frames_written, 100);
        assert_eq!(sink.frames.len(), 100);
        assert!(sink.finished);

        let frame = |i: u64| &sink.frames[(i - 1) as usize];

        // Scoreboard-only frames are identical to each other.
        assert!(!differs(frame(1), frame(2)));
        assert!(!differs(frame(1), frame(100)));
        // Intro appears on frames 3..=12 and nowhere else.
        assert!(differs(frame(3), frame(2)));
        assert!(!differs(frame(3), frame(12)));
        assert!(!differs(frame(13), frame(2)));
        // Action popup spans frames 31..=59.
        assert!(differs(frame(31), frame(30)));
        assert!(!differs(frame(31), frame(59)));
        assert!(!differs(frame(60), frame(2)));
        // The two overlays are distinct.
        assert!(differs(frame(3), frame(31)));
    }

    #[test]
    fn test_unsupported_aspect_ratio_writes_nothing() {
        let mut config = TemplateConfig::default();
        config.aspect_ratio = [5, 4];
        let mut source = MemorySource::new(640, 512, 100, [0, 0, 0, 255]);
        let mut sink = MemorySink::new();

        let result = compositor(config).compose(&mut source, &mut sink);
        assert!(result.is_err());
        assert!(sink.frames.is_empty());
        // The sink is still flushed on the failure path.
        assert!(sink.finished);
    }

    #[test]
    fn test_missing_logo_does_not_abort_the_clip() {
        let assets = AssetStore::new("/nonexistent/assets");
        // Only the home logo exists; the visiting and league logos stay
        // missing and their elements are skipped.
        assets.insert("home_crest", RgbaImage::from_pixel(12, 12, image::Rgba([9, 9, 9, 255])));

        let comp = OverlayCompositor::new(TemplateConfig::default(), sample_meta(), assets)
            .unwrap()
            .with_font(Box::new(FixedAdvanceFont::default()));

        let mut source = MemorySource::new(640, 360, 20, [40, 40, 40, 255]);
        let mut sink = MemorySink::new();
        let report = comp.compose(&mut source, &mut sink).unwrap();

        assert_eq!(report.frames_written, 20);
        // The rest of the overlay still landed: the scoreboard differs from
        // the untouched source frame.
        let raw = Frame::new_filled(640, 360, [40, 40, 40, 255]);
        assert!(differs(&sink.frames[0], &raw));
    }

    #[test]
    fn test_short_read_terminates_normally() {
        struct ShortSource {
            inner: MemorySource,
            claimed: SourceMetadata,
        }
        impl FrameSource for ShortSource {
            fn metadata(&self) -> SourceMetadata {
                self.claimed
            }
            fn next_frame(&mut self) -> Result<Option<Frame>> {
                self.inner.next_frame()
            }
        }

        let inner = MemorySource::new(640, 360, 40, [40, 40, 40, 255]);
        let mut claimed = inner.metadata();
        claimed.frame_count = 100;
        let mut source = ShortSource { inner, claimed };
        let mut sink = MemorySink::new();

        let report = compositor(TemplateConfig::default())
            .compose(&mut source, &mut sink)
            .unwrap();
        assert_eq!(report.frames_read, 40);
        assert_eq!(sink.frames.len(), 40);
        assert!(sink.finished);
    }

    #[test]
    fn test_diamond_template_composes() {
        let mut config = TemplateConfig::default();
        config.template = crate::layout::TemplateKind::Diamond;
        let mut source = MemorySource::new(640, 360, 10, [40, 40, 40, 255]);
        let mut sink = MemorySink::new();

        let report = compositor(config).compose(&mut source, &mut sink).unwrap();
        assert_eq!(report.frames_written, 10);
        let raw = Frame::new_filled(640, 360, [40, 40, 40, 255]);
        assert!(differs(&sink.frames[0], &raw));
    }
}
