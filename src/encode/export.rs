use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex, Rgba8};
use crate::foundation::error::{AnalogonError, AnalogonResult};
use crate::render::frame::FrameRGBA;
use std::path::{Path, PathBuf};

/// Push `frames` through `sink` in order.
pub fn write_frames(sink: &mut dyn FrameSink, frames: &[FrameRGBA], fps: Fps) -> AnalogonResult<()> {
    let first = frames
        .first()
        .ok_or_else(|| AnalogonError::validation("no frames to encode"))?;
    sink.begin(SinkConfig {
        width: first.width,
        height: first.height,
        fps,
    })?;
    for (i, frame) in frames.iter().enumerate() {
        sink.push_frame(FrameIndex(i as u64), frame)?;
    }
    sink.end()
}

/// Encode `frames` to an MP4 at `out_path`, reporting why it could not.
pub fn try_encode_frames(
    frames: &[FrameRGBA],
    fps: Fps,
    out_path: &Path,
    background: Rgba8,
) -> AnalogonResult<PathBuf> {
    if frames.is_empty() {
        return Err(AnalogonError::validation("no frames to encode"));
    }
    if !is_ffmpeg_on_path() {
        return Err(AnalogonError::encode(
            "ffmpeg is required for MP4 encoding, but was not found on PATH",
        ));
    }

    let mut opts = FfmpegSinkOpts::new(out_path);
    opts.background = background;
    let mut sink = FfmpegSink::new(opts);
    if let Err(e) = write_frames(&mut sink, frames, fps) {
        // Reap ffmpeg before removing whatever it left behind.
        drop(sink);
        discard_partial(out_path);
        return Err(e);
    }

    tracing::debug!(path = %out_path.display(), frames = frames.len(), "video encoded");
    Ok(out_path.to_path_buf())
}

fn discard_partial(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed partial video"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to remove partial video"),
    }
}

/// Encode `frames` to an MP4 at `out_path`.
///
/// Never fails: a missing encoder, an empty sequence, or an encoder error yields `None` after a
/// warning, and the caller carries on without a video.
pub fn encode_frames(frames: &[FrameRGBA], fps: Fps, out_path: &Path) -> Option<PathBuf> {
    match try_encode_frames(frames, fps, out_path, Rgba8::WHITE) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!(path = %out_path.display(), error = %e, "video encoding skipped");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/export.rs"]
mod tests;
