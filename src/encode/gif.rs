use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::{
    encode::{
        flatten::flatten_parallel,
        output::StagedOutput,
        sink::{FrameSink, SinkConfig, StreamGuard, not_begun},
    },
    foundation::{
        core::FrameIndex,
        error::{SpiroError, SpiroResult},
    },
    render::backend::FrameRGBA,
};

/// Palette-based animated GIF that loops forever.
///
/// Alpha flattening runs on a dedicated rayon pool; palette quantization and LZW stay on the
/// calling thread so frames are written strictly in order.
pub struct GifSink {
    out_path: PathBuf,
    threads: Option<usize>,
    state: Option<GifState>,
}

struct GifState {
    stream: StreamGuard,
    // Declared before `staged` so the encoder closes its file before the stage cleans up.
    encoder: GifEncoder<SharedWriter<BufWriter<File>>>,
    out: SharedWriter<BufWriter<File>>,
    staged: StagedOutput,
    pool: rayon::ThreadPool,
    scratch: Vec<u8>,
}

impl GifSink {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            threads: None,
            state: None,
        }
    }

    /// Limit the flattening pool to `n` threads (`>= 1`).
    pub fn with_threads(mut self, n: usize) -> Self {
        self.threads = Some(n);
        self
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }
}

/// Writer handed to the encoder while the sink keeps a second handle.
///
/// The encoder writes the GIF trailer when dropped and discards any error from that write, so
/// every failure is recorded here and reported by [`finish_gif`].
pub(crate) struct SharedWriter<W>(Arc<Mutex<WriterSlot<W>>>);

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

struct WriterSlot<W> {
    inner: W,
    failed: Option<io::Error>,
}

impl<W: Write> SharedWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self(Arc::new(Mutex::new(WriterSlot {
            inner,
            failed: None,
        })))
    }

    fn with_slot<T>(&self, f: impl FnOnce(&mut W) -> io::Result<T>) -> io::Result<T> {
        let mut slot = self
            .0
            .lock()
            .map_err(|_| io::Error::other("gif writer lock poisoned"))?;
        let res = f(&mut slot.inner);
        if let Err(e) = &res
            && slot.failed.is_none()
        {
            slot.failed = Some(io::Error::new(e.kind(), e.to_string()));
        }
        res
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_slot(|w| w.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_slot(|w| w.flush())
    }
}

/// Drop the encoder (which writes the trailer), then flush. Any write that failed along the way,
/// including the trailer, is returned as an error.
pub(crate) fn finish_gif<W: Write>(
    encoder: GifEncoder<SharedWriter<W>>,
    mut out: SharedWriter<W>,
) -> io::Result<()> {
    drop(encoder);
    out.flush()?;
    let mut slot = out
        .0
        .lock()
        .map_err(|_| io::Error::other("gif writer lock poisoned"))?;
    match slot.failed.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> SpiroResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SpiroError::validation(
            "encode threads must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SpiroError::encode(format!("failed to build rayon thread pool: {e}")))
}

fn gif_error(e: image::ImageError) -> SpiroError {
    SpiroError::encode(format!("gif encoding failed: {e}"))
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> SpiroResult<()> {
        let stream = StreamGuard::new(cfg)?;
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(SpiroError::validation(
                "gif width/height must fit in 16 bits",
            ));
        }
        let pool = build_thread_pool(self.threads)?;
        let staged = StagedOutput::new(&self.out_path)?;
        let file = File::create(staged.temp_path())
            .with_context(|| format!("failed to create '{}'", staged.temp_path().display()))?;
        let out = SharedWriter::new(BufWriter::new(file));
        let mut encoder = GifEncoder::new(out.clone());
        encoder.set_repeat(Repeat::Infinite).map_err(gif_error)?;

        self.state = Some(GifState {
            scratch: vec![0u8; cfg.frame_bytes()],
            stream,
            staged,
            encoder,
            out,
            pool,
        });
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SpiroResult<()> {
        let state = self.state.as_mut().ok_or_else(|| not_begun("gif"))?;
        state.stream.accept(idx, frame)?;
        let cfg = *state.stream.cfg();

        flatten_parallel(
            &state.pool,
            &mut state.scratch,
            &frame.data,
            frame.premultiplied,
            cfg.background,
            cfg.width as usize * 4,
        )?;

        let buffer = image::RgbaImage::from_raw(cfg.width, cfg.height, state.scratch.clone())
            .ok_or_else(|| SpiroError::encode("gif frame buffer has the wrong size"))?;
        // GIF delays are stored in centiseconds; image rounds the ratio for us.
        let delay = image::Delay::from_numer_denom_ms(1000 * cfg.fps.den, cfg.fps.num);
        state
            .encoder
            .encode_frame(image::Frame::from_parts(buffer, 0, 0, delay))
            .map_err(gif_error)
    }

    fn end(&mut self) -> SpiroResult<()> {
        let state = self.state.take().ok_or_else(|| not_begun("gif"))?;
        if !state.stream.frames_seen() {
            return Err(SpiroError::encode("gif stream ended without any frames"));
        }
        let GifState {
            staged,
            encoder,
            out,
            ..
        } = state;
        finish_gif(encoder, out.clone())
            .and_then(|()| out.with_slot(|w| w.get_ref().sync_all()))
            .map_err(|e| SpiroError::encode(format!("gif write failed: {e}")))?;
        let path = staged.commit()?;
        tracing::debug!(path = %path.display(), "gif written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
