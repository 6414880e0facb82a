//! Playback order for a run of rendered frames.

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use log::info;

use crate::core::animation::ports::animation_writer::AnimationWriterPort;

/// The only container the animation writer produces.
pub const SUPPORTED_EXTENSION: &str = "gif";

pub const DEFAULT_FPS: f64 = 30.0;

#[derive(Debug)]
pub enum SequenceError {
    NotFound,
    UnsupportedExtension { extension: String },
    InvalidFps { fps: f64 },
    Writer(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "no frames found"),
            Self::UnsupportedExtension { extension } => {
                write!(
                    f,
                    "unsupported animation extension '.{}', expected '.{}'",
                    extension, SUPPORTED_EXTENSION
                )
            }
            Self::InvalidFps { fps } => {
                write!(f, "frames per second must be positive, got {}", fps)
            }
            Self::Writer(err) => write!(f, "animation writer failed: {}", err),
        }
    }
}

impl Error for SequenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Writer(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    pub fps: f64,
    /// Extra copies of the first and last frame.
    pub pause: usize,
    /// Play forwards then backwards.
    pub back_loop: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            pause: 0,
            back_loop: false,
        }
    }
}

/// Sorted frames, `pause` copies of each end, then the interior reversed when
/// `back_loop` is set.
///
/// The reversal is taken from the sorted input before pausing, so the
/// turnaround is not held and neither end is repeated.
pub fn build_sequence<T: Clone + Ord>(
    frames: &[T],
    pause: usize,
    back_loop: bool,
) -> Result<Vec<T>, SequenceError> {
    let mut sorted = frames.to_vec();
    sorted.sort();

    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => (first.clone(), last.clone()),
        _ => return Err(SequenceError::NotFound),
    };

    let interior_len = sorted.len().saturating_sub(2);
    let mut sequence = Vec::with_capacity(sorted.len() + 2 * pause + interior_len);

    sequence.extend(std::iter::repeat_n(first, pause));
    sequence.extend(sorted.iter().cloned());
    sequence.extend(std::iter::repeat_n(last, pause));

    if back_loop && sorted.len() > 2 {
        sequence.extend(sorted[1..sorted.len() - 1].iter().rev().cloned());
    }

    Ok(sequence)
}

/// Appends the default extension when missing and rejects any other one.
pub fn resolve_output_path(output: &Path) -> Result<PathBuf, SequenceError> {
    match output.extension().and_then(|ext| ext.to_str()) {
        None => Ok(output.with_extension(SUPPORTED_EXTENSION)),
        Some(ext) if ext.eq_ignore_ascii_case(SUPPORTED_EXTENSION) => Ok(output.to_path_buf()),
        Some(ext) => Err(SequenceError::UnsupportedExtension {
            extension: ext.to_owned(),
        }),
    }
}

/// Rejects settings the writer cannot honour, before any frame work is done.
pub fn check_playback(settings: &PlaybackSettings) -> Result<(), SequenceError> {
    if !(settings.fps.is_finite() && settings.fps > 0.0) {
        return Err(SequenceError::InvalidFps { fps: settings.fps });
    }

    Ok(())
}

/// Orders `frames` for playback and hands them to `writer`.
///
/// Returns the path actually written.
pub fn write_sequence<W: AnimationWriterPort + ?Sized>(
    writer: &W,
    frames: &[PathBuf],
    output: &Path,
    settings: PlaybackSettings,
) -> Result<PathBuf, SequenceError> {
    if frames.is_empty() {
        return Err(SequenceError::NotFound);
    }

    let output = resolve_output_path(output)?;
    check_playback(&settings)?;

    let sequence = build_sequence(frames, settings.pause, settings.back_loop)?;

    info!(
        "writing {} ({} frames from {} stills at {} fps)",
        output.display(),
        sequence.len(),
        frames.len(),
        settings.fps
    );

    writer
        .write(&sequence, &output, settings.fps)
        .map_err(SequenceError::Writer)?;

    Ok(output)
}
