//! Frame source and sink seams.
//!
//! The compositor reads frames from a [`FrameSource`] and hands finished
//! frames to a [`FrameSink`]; decoding and encoding proper live outside this
//! crate. The shipped implementations work on numbered PNG sequences
//! (`frame_000001.png`, ...), which external tooling can produce from and
//! feed back into an encoder. In-memory implementations back the tests.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, VideoError};
use crate::video::types::{Frame, SourceMetadata};

/// A readable stream of frames of known geometry.
pub trait FrameSource {
    /// Stream properties, queried before the frame loop; never hard-coded.
    fn metadata(&self) -> SourceMetadata;

    /// The next frame, or `None` once the stream is exhausted. A short read
    /// is a normal loop-termination signal, not an error.
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

/// A writable stream of frames.
pub trait FrameSink {
    fn write_frame(&mut self, frame: &Frame) -> Result<()>;

    /// Flush and close. Called on every exit path of the compositor.
    fn finish(&mut self) -> Result<()>;
}

/// Reads a directory of numbered PNG frames.
pub struct ImageSequenceSource {
    dir: PathBuf,
    paths: Vec<PathBuf>,
    metadata: SourceMetadata,
    cursor: usize,
}

impl ImageSequenceSource {
    /// Open a frame directory. The metadata (resolution, frame count) comes
    /// from the sequence itself: the first frame is decoded for dimensions.
    pub fn open<P: Into<PathBuf>>(dir: P, fps: f64) -> Result<Self> {
        let dir = dir.into();
        let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
            .map_err(|_| VideoError::OpenFailed { path: dir.display().to_string() })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().map(|e| e == "png").unwrap_or(false))
            .collect();
        paths.sort();

        let first = paths
            .first()
            .ok_or_else(|| VideoError::OpenFailed { path: dir.display().to_string() })?;
        let image = image::open(first)
            .map_err(|e| VideoError::ReadFailed { index: 0, reason: e.to_string() })?
            .to_rgba8();

        let metadata = SourceMetadata {
            width: image.width(),
            height: image.height(),
            fps,
            frame_count: paths.len() as u64,
        };
        info!(
            "Opened frame sequence {:?}: {}x{}, {} frames",
            dir, metadata.width, metadata.height, metadata.frame_count
        );

        Ok(Self { dir, paths, metadata, cursor: 0 })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FrameSource for ImageSequenceSource {
    fn metadata(&self) -> SourceMetadata {
        self.metadata
    }

    fn next_frame(&mut self) -> Result<Option<Frame>> {
        let Some(path) = self.paths.get(self.cursor) else {
            return Ok(None);
        };
        let image = image::open(path)
            .map_err(|e| VideoError::ReadFailed { index: self.cursor as u64, reason: e.to_string() })?
            .to_rgba8();
        self.cursor += 1;
        Ok(Some(Frame::new(image)))
    }
}

/// Writes frames as a numbered PNG sequence.
pub struct ImageSequenceSink {
    dir: PathBuf,
    written: u64,
}

impl ImageSequenceSink {
    pub fn create<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, written: 0 })
    }

    pub fn frames_written(&self) -> u64 {
        self.written
    }
}

impl FrameSink for ImageSequenceSink {
    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        let path = self.dir.join(format!("frame_{:06}.png", self.written));
        frame.save_png(&path).map_err(|e| VideoError::WriteFailed {
            index: self.written,
            reason: e.to_string(),
        })?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        debug!("Frame sequence complete: {} frames in {:?}", self.written, self.dir);
        Ok(())
    }
}

/// In-memory source for tests: serves a fixed number of identical frames.
pub struct MemorySource {
    metadata: SourceMetadata,
    template: Frame,
    served: u64,
}

impl MemorySource {
    pub fn new(width: u32, height: u32, frame_count: u64, fill: [u8; 4]) -> Self {
        Self {
            metadata: SourceMetadata { width, height, fps: 30.0, frame_count },
            template: Frame::new_filled(width, height, fill),
            served: 0,
        }
    }
}

impl FrameSource for MemorySource {
    fn metadata(&self) -> SourceMetadata {
        self.metadata
    }

    fn next_frame(&mut self) -> Result<Option<Frame>> {
        if self.served >= self.metadata.frame_count {
            return Ok(None);
        }
        self.served += 1;
        Ok(Some(self.template.clone()))
    }
}

/// In-memory sink for tests: retains every written frame.
#[derive(Default)]
pub struct MemorySink {
    pub frames: Vec<Frame>,
    pub finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for MemorySink {
    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_sequence_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("frames");

        let mut sink = ImageSequenceSink::create(&out).unwrap();
        for value in [10u8, 20, 30] {
            let frame = Frame::new_filled(8, 6, [value, value, value, 255]);
            sink.write_frame(&frame).unwrap();
        }
        sink.finish().unwrap();
        assert_eq!(sink.frames_written(), 3);

        let mut source = ImageSequenceSource::open(&out, 30.0).unwrap();
        let meta = source.metadata();
        assert_eq!((meta.width, meta.height, meta.frame_count), (8, 6, 3));

        let mut values = Vec::new();
        while let Some(frame) = source.next_frame().unwrap() {
            values.push(frame.get_pixel(0, 0)[0]);
        }
        assert_eq!(values, vec![10, 20, 30]);
        // Exhausted source keeps signalling a short read.
        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_open_missing_dir_fails() {
        assert!(ImageSequenceSource::open("/nonexistent/frames", 30.0).is_err());
    }

    #[test]
    fn test_memory_source_serves_exact_count() {
        let mut source = MemorySource::new(4, 4, 2, [0, 0, 0, 255]);
        assert!(source.next_frame().unwrap().is_some());
        assert!(source.next_frame().unwrap().is_some());
        assert!(source.next_frame().unwrap().is_none());
    }
}
