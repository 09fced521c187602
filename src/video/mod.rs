//! Frame buffers and the source/sink seams the compositor drives.

pub mod io;
pub mod types;

pub use io::{FrameSink, FrameSource, ImageSequenceSink, ImageSequenceSource, MemorySink, MemorySource};
pub use types::{Frame, SourceMetadata};
