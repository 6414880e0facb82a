use std::error::Error;
use std::fmt;

use log::debug;
use rayon::ThreadPoolBuildError;
use rayon::prelude::*;

pub type FrameTaskError = Box<dyn Error + Send + Sync>;

#[derive(Debug)]
pub enum FramePoolError {
    Build(ThreadPoolBuildError),
    Frame { index: usize, source: FrameTaskError },
}

impl fmt::Display for FramePoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(err) => write!(f, "cannot start frame workers: {}", err),
            Self::Frame { index, source } => write!(f, "frame {} failed: {}", index, source),
        }
    }
}

impl Error for FramePoolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Build(err) => Some(err),
            Self::Frame { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<ThreadPoolBuildError> for FramePoolError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::Build(err)
    }
}

/// Runs independent per-frame tasks, either on a dedicated rayon pool or
/// serially in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FramePool {
    /// `None` lets rayon pick one worker per available core.
    workers: Option<usize>,
    serial: bool,
}

impl FramePool {
    #[must_use]
    pub fn new(workers: Option<usize>) -> Self {
        Self {
            workers: workers.filter(|&n| n > 0),
            serial: false,
        }
    }

    #[must_use]
    pub fn serial() -> Self {
        Self {
            workers: None,
            serial: true,
        }
    }

    #[must_use]
    pub fn is_serial(&self) -> bool {
        self.serial
    }

    /// Results come back in index order whatever order the tasks finished in.
    pub fn run<T, F>(&self, n_frames: usize, task: F) -> Result<Vec<T>, FramePoolError>
    where
        T: Send,
        F: Fn(usize) -> Result<T, FrameTaskError> + Sync,
    {
        let run_one = |index: usize| {
            task(index).map_err(|source| FramePoolError::Frame { index, source })
        };

        if self.serial {
            debug!("rendering {} frames serially", n_frames);
            return (0..n_frames).map(run_one).collect();
        }

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(workers) = self.workers {
            builder = builder.num_threads(workers);
        }
        let pool = builder.build()?;

        debug!(
            "rendering {} frames on {} workers",
            n_frames,
            pool.current_num_threads()
        );

        pool.install(|| (0..n_frames).into_par_iter().map(run_one).collect())
    }
}
