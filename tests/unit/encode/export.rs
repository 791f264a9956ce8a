use super::*;
use crate::encode::sink::InMemorySink;

fn solid(width: u32, height: u32, v: u8) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: vec![v; (width * height * 4) as usize],
        premultiplied: true,
    }
}

#[test]
fn frames_reach_the_sink_in_order() {
    let frames = vec![solid(4, 4, 0), solid(4, 4, 128), solid(4, 4, 255)];
    let mut sink = InMemorySink::new();
    write_frames(&mut sink, &frames, Fps::new(10, 1).unwrap()).unwrap();

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (4, 4));
    assert!(sink.is_finished());
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
    assert_eq!(sink.frames()[1].1, frames[1]);
}

#[test]
fn empty_sequence_is_an_error_for_sinks() {
    let mut sink = InMemorySink::new();
    assert!(write_frames(&mut sink, &[], Fps::new(10, 1).unwrap()).is_err());
}

#[test]
fn empty_sequence_yields_no_video() {
    let out = std::env::temp_dir().join("analogon_export_empty").join("none.mp4");
    assert_eq!(encode_frames(&[], Fps::new(10, 1).unwrap(), &out), None);
    assert!(!out.exists());
}

#[test]
fn encodes_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let dir = std::env::temp_dir().join(format!("analogon_export_{}", std::process::id()));
    let out = dir.join("clip.mp4");
    let frames: Vec<_> = (0..5).map(|i| solid(16, 16, i * 40)).collect();
    let got = encode_frames(&frames, Fps::new(10, 1).unwrap(), &out);
    assert_eq!(got.as_deref(), Some(out.as_path()));
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn failed_encode_leaves_no_file_behind() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let dir = std::env::temp_dir().join(format!("analogon_export_fail_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("stale.mp4");
    std::fs::write(&out, b"stale").unwrap();

    // Odd dimensions cannot be encoded as yuv420p.
    let frames = vec![solid(15, 16, 255)];
    assert_eq!(encode_frames(&frames, Fps::new(10, 1).unwrap(), &out), None);
    assert!(!out.exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn discarding_a_missing_file_is_quiet() {
    let path = std::env::temp_dir().join("analogon_export_never_written.mp4");
    discard_partial(&path);
    assert!(!path.exists());
}
