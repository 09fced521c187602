//! # ReelGraph
//!
//! Deterministic broadcast-style overlays for sports highlight clips.
//!
//! ReelGraph burns a scoreboard strip, a team-vs-team intro reveal, and an
//! action callout onto every frame of a clip. Layout is template-driven:
//! constant fractional coordinate tables per template family and aspect
//! ratio, resolved once against the source resolution. The same clip, config,
//! and assets always produce identical output; there is no randomness and no
//! wall-clock dependency.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reelgraph::{
//!     assets::AssetStore,
//!     compositor::OverlayCompositor,
//!     config::JobConfig,
//!     video::{ImageSequenceSink, ImageSequenceSource},
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let job = JobConfig::from_file("job.json")?;
//! job.validate()?;
//!
//! let clip = &job.clips[0];
//! let mut source = ImageSequenceSource::open(&clip.input, 30.0)?;
//! let mut sink = ImageSequenceSink::create(&clip.output)?;
//!
//! let assets = AssetStore::new("assets/");
//! let compositor = OverlayCompositor::new(job.template.clone(), clip.meta.clone(), assets)?;
//! let report = compositor.compose(&mut source, &mut sink)?;
//! println!("composed {} frames", report.frames_written);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`color`], [`geometry`] - hex colors and fractional layout primitives
//! - [`draw`] - pixel-level draw primitives (rects, text, logos, diamonds)
//! - [`layout`] - per-template, per-aspect coordinate tables and the resolver
//! - [`timeline`] - frame-index phase windows and fade ramps
//! - [`templates`] - the rectangle and diamond template families
//! - [`compositor`] - the per-clip frame loop
//! - [`video`] - frame buffers and the source/sink seams
//!
//! ## Custom frame I/O
//!
//! Decoding and encoding live behind the [`video::FrameSource`] and
//! [`video::FrameSink`] traits; implement them to feed frames from any
//! pipeline:
//!
//! ```rust,no_run
//! use reelgraph::video::{Frame, FrameSource, SourceMetadata};
//! use reelgraph::error::Result;
//!
//! struct MyDecoder { /* ... */ }
//!
//! impl FrameSource for MyDecoder {
//!     fn metadata(&self) -> SourceMetadata {
//!         SourceMetadata { width: 1920, height: 1080, fps: 30.0, frame_count: 300 }
//!     }
//!
//!     fn next_frame(&mut self) -> Result<Option<Frame>> {
//!         // Pull the next decoded frame, or None at end of stream.
//!         Ok(None)
//!     }
//! }
//! ```

pub mod assets;
pub mod color;
pub mod compositor;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod templates;
pub mod timeline;
pub mod video;

// Re-export commonly used types for convenience
pub use crate::{
    color::Color,
    compositor::{ComposeReport, OverlayCompositor},
    config::{ClipMeta, JobConfig, TemplateConfig},
    error::{OverlayError, Result},
    layout::{resolve_layout, LayoutGeometry, LayoutVariant, TemplateKind},
    templates::Template, // Export Template trait
};
