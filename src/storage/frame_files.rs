use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::animation::frame::FRAME_EXTENSION;

/// Every frame image directly inside `dir`, sorted by file name.
pub fn collect_frame_files(dir: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
    let mut frames = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_frame = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(FRAME_EXTENSION));

        if is_frame && path.is_file() {
            frames.push(path);
        }
    }

    frames.sort();
    Ok(frames)
}

pub fn ensure_dir(dir: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(dir)
}
