//! Ground-truth video output.
//!
//! Frames are pushed through a [`FrameSink`]; the MP4 sink pipes raw RGBA into the system
//! `ffmpeg`. [`encode_frames`] wraps the whole thing and degrades to `None` when encoding is
//! unavailable so dataset generation never fails on a missing encoder.

pub mod export;
pub mod ffmpeg;
pub mod sink;

pub use export::{encode_frames, try_encode_frames, write_frames};
pub use ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use sink::{FrameSink, InMemorySink, SinkConfig};
