use std::path::{Path, PathBuf};

pub const FRAME_EXTENSION: &str = "png";

/// A rendered still on disk.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Frame {
    index: usize,
    path: PathBuf,
}

impl Frame {
    #[must_use]
    pub fn new(index: usize, path: PathBuf) -> Self {
        Self { index, path }
    }

    /// Places frame `index` of an `n_frames` run inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path, index: usize, n_frames: usize) -> Self {
        Self::new(index, dir.join(frame_file_name(index, n_frames)))
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// `floor(log10(n_frames)) + 1`, and 1 for an empty run.
#[must_use]
pub fn frame_digits(n_frames: usize) -> usize {
    n_frames.max(1).ilog10() as usize + 1
}

/// Zero-padded so that lexicographic order equals index order.
#[must_use]
pub fn frame_file_name(index: usize, n_frames: usize) -> String {
    format!(
        "{:0width$}.{}",
        index,
        FRAME_EXTENSION,
        width = frame_digits(n_frames)
    )
}
