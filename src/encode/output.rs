use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::SpiroResult;

pub fn ensure_parent_dir(path: &Path) -> SpiroResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// An output file written under a temporary sibling name and renamed into place on
/// [`StagedOutput::commit`]. Dropping an uncommitted stage removes the temporary file, so a
/// failed encode never leaves a partial file at the final path.
#[derive(Debug)]
pub struct StagedOutput {
    final_path: PathBuf,
    temp_path: PathBuf,
    committed: bool,
}

impl StagedOutput {
    pub fn new(final_path: &Path) -> SpiroResult<Self> {
        ensure_parent_dir(final_path)?;
        let file_name = final_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        let temp_path =
            final_path.with_file_name(format!(".{file_name}.{}.partial", std::process::id()));
        Ok(Self {
            final_path: final_path.to_path_buf(),
            temp_path,
            committed: false,
        })
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    pub fn final_path(&self) -> &Path {
        &self.final_path
    }

    pub fn commit(mut self) -> SpiroResult<PathBuf> {
        std::fs::rename(&self.temp_path, &self.final_path).with_context(|| {
            format!(
                "failed to move '{}' into place at '{}'",
                self.temp_path.display(),
                self.final_path.display()
            )
        })?;
        self.committed = true;
        Ok(self.final_path.clone())
    }
}

impl Drop for StagedOutput {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.temp_path);
        }
    }
}

/// Write `bytes` to `path` through a [`StagedOutput`].
pub fn write_staged(path: &Path, bytes: &[u8]) -> SpiroResult<PathBuf> {
    let staged = StagedOutput::new(path)?;
    std::fs::write(staged.temp_path(), bytes)
        .with_context(|| format!("failed to write '{}'", staged.temp_path().display()))?;
    staged.commit()
}

#[cfg(test)]
#[path = "../../tests/unit/encode/output.rs"]
mod tests;
