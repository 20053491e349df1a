use std::{
    io::{self, Read as _, Write as _},
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
    thread::JoinHandle,
};

use crate::{
    encode::{
        flatten::flatten_to_opaque_rgba8,
        output::StagedOutput,
        sink::{FrameSink, SinkConfig, StreamGuard, not_begun},
    },
    foundation::{
        core::FrameIndex,
        error::{SpiroError, SpiroResult},
    },
    render::backend::FrameRGBA,
};

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Even dimensions are required for yuv420p output.
pub fn validate_video_size(width: u32, height: u32) -> SpiroResult<()> {
    if width == 0 || height == 0 {
        return Err(SpiroError::validation("video width/height must be non-zero"));
    }
    if !width.is_multiple_of(2) || !height.is_multiple_of(2) {
        return Err(SpiroError::validation(
            "video width/height must be even (required for yuv420p mp4 output)",
        ));
    }
    Ok(())
}

/// H.264 MP4 through the system `ffmpeg` binary, fed raw RGBA over stdin.
pub struct FfmpegSink {
    out_path: PathBuf,
    state: Option<FfmpegState>,
}

struct FfmpegState {
    stream: StreamGuard,
    staged: StagedOutput,
    child: Child,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<JoinHandle<io::Result<Vec<u8>>>>,
    scratch: Vec<u8>,
}

impl FfmpegSink {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            state: None,
        }
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }
}

/// Collect the child's stderr on its own thread. A child whose stderr pipe fills stops reading
/// stdin, and frame writes would then block forever.
fn drain_stderr(child: &mut Child) -> SpiroResult<JoinHandle<io::Result<Vec<u8>>>> {
    let mut stderr = child
        .stderr
        .take()
        .ok_or_else(|| SpiroError::encode("failed to open ffmpeg stderr"))?;
    Ok(std::thread::spawn(move || {
        let mut bytes = Vec::new();
        stderr.read_to_end(&mut bytes)?;
        Ok(bytes)
    }))
}

fn join_stderr(handle: JoinHandle<io::Result<Vec<u8>>>) -> SpiroResult<Vec<u8>> {
    handle
        .join()
        .map_err(|_| SpiroError::encode("ffmpeg stderr drain thread panicked"))?
        .map_err(|e| SpiroError::encode(format!("ffmpeg stderr read failed: {e}")))
}

fn ffmpeg_command(cfg: &SinkConfig, out: &Path) -> Command {
    let mut cmd = Command::new("ffmpeg");
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    cmd.args([
        "-y",
        "-loglevel",
        "error",
        "-f",
        "rawvideo",
        "-pix_fmt",
        "rgba",
        "-s",
        &format!("{}x{}", cfg.width, cfg.height),
        "-r",
        &format!("{}/{}", cfg.fps.num, cfg.fps.den),
        "-i",
        "pipe:0",
        "-an",
        "-c:v",
        "libx264",
        "-pix_fmt",
        "yuv420p",
        "-movflags",
        "+faststart",
        // The staged file has no .mp4 extension, so name the muxer explicitly.
        "-f",
        "mp4",
    ])
    .arg(out);
    cmd
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> SpiroResult<()> {
        let stream = StreamGuard::new(cfg)?;
        validate_video_size(cfg.width, cfg.height)?;

        if !is_ffmpeg_on_path() {
            return Err(SpiroError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let staged = StagedOutput::new(&self.out_path)?;
        let mut child = ffmpeg_command(&cfg, staged.temp_path())
            .spawn()
            .map_err(|e| {
                SpiroError::encode(format!(
                    "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
                ))
            })?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| SpiroError::encode("failed to open ffmpeg stdin"))?;
        let stderr_drain = match drain_stderr(&mut child) {
            Ok(handle) => handle,
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(e);
            }
        };

        self.state = Some(FfmpegState {
            scratch: vec![0u8; cfg.frame_bytes()],
            stream,
            staged,
            child,
            stdin: Some(stdin),
            stderr_drain: Some(stderr_drain),
        });
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SpiroResult<()> {
        let state = self.state.as_mut().ok_or_else(|| not_begun("ffmpeg"))?;
        state.stream.accept(idx, frame)?;
        flatten_to_opaque_rgba8(
            &mut state.scratch,
            &frame.data,
            frame.premultiplied,
            state.stream.cfg().background,
        )?;

        let Some(stdin) = state.stdin.as_mut() else {
            return Err(SpiroError::encode("ffmpeg encoder is already finalized"));
        };
        stdin.write_all(&state.scratch).map_err(|e| {
            SpiroError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })
    }

    fn end(&mut self) -> SpiroResult<()> {
        let mut state = self.state.take().ok_or_else(|| not_begun("ffmpeg"))?;
        drop(state.stdin.take());

        let status = state.child.wait().map_err(|e| {
            SpiroError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr = match state.stderr_drain.take() {
            Some(handle) => join_stderr(handle)?,
            None => Vec::new(),
        };
        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr);
            return Err(SpiroError::encode(format!(
                "ffmpeg exited with status {status}: {}",
                stderr.trim()
            )));
        }
        if !state.stream.frames_seen() {
            return Err(SpiroError::encode("video stream ended without any frames"));
        }
        let path = state.staged.commit()?;
        tracing::debug!(path = %path.display(), "mp4 written");
        Ok(())
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        // An abandoned encode must not leave ffmpeg running; the stage then removes its file.
        if let Some(mut state) = self.state.take() {
            drop(state.stdin.take());
            let _ = state.child.kill();
            let _ = state.child.wait();
            if let Some(handle) = state.stderr_drain.take() {
                let _ = handle.join();
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
