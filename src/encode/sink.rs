use crate::{
    foundation::{
        core::{FrameIndex, Fps, Rgb8},
        error::{SpiroError, SpiroResult},
    },
    render::backend::FrameRGBA,
};

/// Stream parameters fixed for the lifetime of one encode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
    /// Color that non-opaque pixels are flattened over.
    pub background: Rgb8,
}

impl SinkConfig {
    pub fn validate(&self) -> SpiroResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SpiroError::validation("sink width/height must be non-zero"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(SpiroError::validation("sink fps must be non-zero"));
        }
        Ok(())
    }

    pub fn frame_bytes(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Consumer of an ordered frame stream.
///
/// Call order is `begin`, any number of `push_frame` with strictly increasing indices, then
/// `end`. Output only becomes visible once `end` succeeds.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> SpiroResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SpiroResult<()>;
    fn end(&mut self) -> SpiroResult<()>;
}

/// Shared bookkeeping for sinks: stream config plus ordering and size checks.
#[derive(Debug)]
pub(crate) struct StreamGuard {
    cfg: SinkConfig,
    last: Option<FrameIndex>,
}

impl StreamGuard {
    pub(crate) fn new(cfg: SinkConfig) -> SpiroResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg, last: None })
    }

    pub(crate) fn cfg(&self) -> &SinkConfig {
        &self.cfg
    }

    pub(crate) fn frames_seen(&self) -> bool {
        self.last.is_some()
    }

    pub(crate) fn accept(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SpiroResult<()> {
        if let Some(last) = self.last
            && idx <= last
        {
            return Err(SpiroError::encode(format!(
                "frame {} pushed after frame {}; indices must strictly increase",
                idx.0, last.0
            )));
        }
        if frame.width != self.cfg.width || frame.height != self.cfg.height {
            return Err(SpiroError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }
        if frame.data.len() != self.cfg.frame_bytes() {
            return Err(SpiroError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }
        self.last = Some(idx);
        Ok(())
    }
}

pub(crate) fn not_begun(kind: &str) -> SpiroError {
    SpiroError::encode(format!("{kind} sink used before begin()"))
}

/// Collects frames in memory. Useful for previews and tests.
#[derive(Debug, Default)]
pub struct InMemorySink {
    stream: Option<StreamGuard>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn config(&self) -> Option<&SinkConfig> {
        self.stream.as_ref().map(StreamGuard::cfg)
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SpiroResult<()> {
        self.stream = Some(StreamGuard::new(cfg)?);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SpiroResult<()> {
        let stream = self.stream.as_mut().ok_or_else(|| not_begun("in-memory"))?;
        stream.accept(idx, frame)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> SpiroResult<()> {
        if self.stream.is_none() {
            return Err(not_begun("in-memory"));
        }
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
