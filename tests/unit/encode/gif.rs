use image::AnimationDecoder as _;

use super::*;
use crate::foundation::core::{Fps, Rgb8};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "spirograph_{name}_{}_{}.gif",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 8,
        height: 4,
        fps: Fps::integer(10).unwrap(),
        background: Rgb8::BLACK,
    }
}

fn solid(rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: 8,
        height: 4,
        data: rgba.repeat(32),
        premultiplied: true,
    }
}

#[test]
fn writes_every_frame() {
    let path = temp_path("gif_frames");
    let mut sink = GifSink::new(&path).with_threads(2);
    sink.begin(cfg()).unwrap();
    for (i, c) in [[255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255]]
        .into_iter()
        .enumerate()
    {
        sink.push_frame(FrameIndex(i as u64), &solid(c)).unwrap();
    }
    sink.end().unwrap();

    let file = std::io::BufReader::new(File::open(&path).unwrap());
    let frames = image::codecs::gif::GifDecoder::new(file)
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].buffer().dimensions(), (8, 4));
    let _ = std::fs::remove_file(path);
}

#[test]
fn failed_stream_leaves_no_file() {
    let path = temp_path("gif_failed");
    {
        let mut sink = GifSink::new(&path);
        sink.begin(cfg()).unwrap();
        sink.push_frame(FrameIndex(1), &solid([0, 0, 0, 255])).unwrap();
        assert!(sink.push_frame(FrameIndex(0), &solid([0, 0, 0, 255])).is_err());
    }
    assert!(!path.exists());
}

#[test]
fn empty_stream_is_an_encode_error() {
    let path = temp_path("gif_empty");
    let mut sink = GifSink::new(&path);
    sink.begin(cfg()).unwrap();
    assert!(matches!(sink.end(), Err(SpiroError::Encode(_))));
    assert!(!path.exists());
}

#[test]
fn zero_threads_is_rejected() {
    assert!(build_thread_pool(Some(0)).is_err());
    assert!(build_thread_pool(Some(1)).is_ok());
}

/// Accepts bytes until `broken` is set, then fails every write.
struct BreakableWriter {
    bytes: Vec<u8>,
    broken: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

impl Write for BreakableWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.broken.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(io::Error::other("disk full"));
        }
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn one_frame_encoder(
    broken: &std::sync::Arc<std::sync::atomic::AtomicBool>,
) -> (
    GifEncoder<SharedWriter<BreakableWriter>>,
    SharedWriter<BreakableWriter>,
) {
    let out = SharedWriter::new(BreakableWriter {
        bytes: Vec::new(),
        broken: broken.clone(),
    });
    let mut encoder = GifEncoder::new(out.clone());
    let buffer = image::RgbaImage::from_raw(8, 4, [255u8, 0, 0, 255].repeat(32)).unwrap();
    encoder.encode_frame(image::Frame::new(buffer)).unwrap();
    (encoder, out)
}

#[test]
fn trailer_write_failure_is_reported() {
    let broken = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let (encoder, out) = one_frame_encoder(&broken);
    broken.store(true, std::sync::atomic::Ordering::SeqCst);
    let err = finish_gif(encoder, out).unwrap_err();
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn finished_gif_ends_with_trailer() {
    let broken = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let (encoder, out) = one_frame_encoder(&broken);
    finish_gif(encoder, out.clone()).unwrap();
    let last = out.with_slot(|w| Ok(w.bytes.last().copied())).unwrap();
    assert_eq!(last, Some(0x3B));
}
