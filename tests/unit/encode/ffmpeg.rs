use std::io::Write as _;

use super::*;
use crate::foundation::core::{Fps, Rgb8};

#[test]
fn video_size_validation_catches_bad_values() {
    assert!(validate_video_size(0, 10).is_err());
    assert!(validate_video_size(11, 10).is_err());
    assert!(validate_video_size(10, 7).is_err());
    assert!(validate_video_size(10, 10).is_ok());
}

#[test]
fn command_streams_rgba_into_mp4() {
    let cfg = SinkConfig {
        width: 64,
        height: 32,
        fps: Fps::new(30000, 1001).unwrap(),
        background: Rgb8::BLACK,
    };
    let cmd = ffmpeg_command(&cfg, Path::new("out.tmp"));
    let args: Vec<String> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let pos = |s: &str| args.iter().position(|a| a == s).unwrap();
    assert_eq!(args[pos("-s") + 1], "64x32");
    assert_eq!(args[pos("-r") + 1], "30000/1001");
    assert_eq!(args[pos("-c:v") + 1], "libx264");
    assert_eq!(args.last().map(String::as_str), Some("out.tmp"));
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new("never.mp4");
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(matches!(
        sink.push_frame(FrameIndex(0), &frame),
        Err(SpiroError::Encode(_))
    ));
}

#[test]
fn encodes_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let path = std::env::temp_dir().join(format!("spirograph_ffmpeg_{}.mp4", std::process::id()));
    let mut sink = FfmpegSink::new(&path);
    sink.begin(SinkConfig {
        width: 16,
        height: 16,
        fps: Fps::integer(10).unwrap(),
        background: Rgb8::BLACK,
    })
    .unwrap();
    for i in 0..3 {
        let frame = FrameRGBA {
            width: 16,
            height: 16,
            data: vec![(i * 80) as u8; 16 * 16 * 4],
            premultiplied: true,
        };
        sink.push_frame(FrameIndex(i), &frame).unwrap();
    }
    sink.end().unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    let _ = std::fs::remove_file(path);
}

#[cfg(unix)]
#[test]
fn stderr_is_drained_while_stdin_is_written() {
    // Writes well past a pipe buffer to stderr before it starts consuming stdin.
    let mut child = Command::new("sh")
        .args(["-c", "head -c 262144 /dev/zero >&2; cat >/dev/null"])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let drain = drain_stderr(&mut child).unwrap();
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(&vec![0u8; 1 << 20]).unwrap();
    drop(stdin);

    assert!(child.wait().unwrap().success());
    assert_eq!(join_stderr(drain).unwrap().len(), 262_144);
}
