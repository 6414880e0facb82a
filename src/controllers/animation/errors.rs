use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::controllers::animation::frame_pool::FramePoolError;
use crate::core::animation::sequencer::SequenceError;

#[derive(Debug)]
pub enum AnimationError {
    FrameDir { path: PathBuf, source: io::Error },
    Frames(FramePoolError),
    Sequence(SequenceError),
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameDir { path, source } => {
                write!(f, "frame directory {}: {}", path.display(), source)
            }
            Self::Frames(err) => write!(f, "{}", err),
            Self::Sequence(err) => write!(f, "{}", err),
        }
    }
}

impl Error for AnimationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FrameDir { source, .. } => Some(source),
            Self::Frames(err) => Some(err),
            Self::Sequence(err) => Some(err),
        }
    }
}

impl From<FramePoolError> for AnimationError {
    fn from(err: FramePoolError) -> Self {
        Self::Frames(err)
    }
}

impl From<SequenceError> for AnimationError {
    fn from(err: SequenceError) -> Self {
        Self::Sequence(err)
    }
}
