use super::*;

#[test]
fn transparent_premul_pixel_becomes_background() {
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg(&mut dst, &[0, 0, 0, 0], Rgba8::rgb(10, 20, 30)).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn opaque_pixels_pass_through() {
    let src = [1u8, 2, 3, 255, 70, 130, 180, 255];
    let mut dst = vec![0u8; 8];
    flatten_premul_over_bg(&mut dst, &src, Rgba8::WHITE).unwrap();
    assert_eq!(dst, src);

    flatten_straight_over_bg(&mut dst, &src, Rgba8::BLACK).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn straight_half_alpha_blends_with_background() {
    let mut dst = vec![0u8; 4];
    flatten_straight_over_bg(&mut dst, &[0, 0, 0, 128], Rgba8::WHITE).unwrap();
    assert_eq!(dst[3], 255);
    assert!((125..=128).contains(&dst[0]), "got {}", dst[0]);
}

#[test]
fn mismatched_buffers_are_rejected() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_premul_over_bg(&mut dst, &[0; 4], Rgba8::WHITE).is_err());
}

#[test]
fn odd_dimensions_are_rejected_before_spawning() {
    let dir = std::env::temp_dir().join("analogon_ffmpeg_odd");
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(dir.join("odd.mp4")));
    let err = sink
        .begin(SinkConfig {
            width: 101,
            height: 100,
            fps: Fps::new(10, 1).unwrap(),
        })
        .unwrap_err();
    assert!(matches!(err, AnalogonError::Validation(_)));
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![255; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
}
