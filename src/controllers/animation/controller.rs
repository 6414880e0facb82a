use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{info, warn};

use crate::controllers::animation::assemble::AssembleController;
use crate::controllers::animation::errors::AnimationError;
use crate::controllers::animation::frame_pool::{FramePool, FrameTaskError};
use crate::controllers::animation::scenarios::Scenario;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::actions::render_frame::render_path_frame::render_path_frame;
use crate::core::animation::frame::Frame;
use crate::core::animation::ports::animation_writer::AnimationWriterPort;
use crate::core::animation::sequencer::{
    PlaybackSettings, SUPPORTED_EXTENSION, check_playback, resolve_output_path,
};
use crate::storage::frame_files::{collect_frame_files, ensure_dir};

/// Run-time overrides for a scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Frames land here; the animation is written next to it with a `.gif`
    /// extension.
    pub frame_dir: PathBuf,
    pub n_frames: Option<usize>,
    pub number_points: Option<usize>,
    pub pool: FramePool,
    pub playback: Option<PlaybackSettings>,
}

impl AnimationConfig {
    #[must_use]
    pub fn new(frame_dir: impl Into<PathBuf>) -> Self {
        Self {
            frame_dir: frame_dir.into(),
            n_frames: None,
            number_points: None,
            pool: FramePool::default(),
            playback: None,
        }
    }
}

pub struct AnimationController<P: FilePresenterPort, W: AnimationWriterPort> {
    presenter: P,
    assembler: AssembleController<W>,
}

impl<P: FilePresenterPort, W: AnimationWriterPort> AnimationController<P, W> {
    pub fn new(presenter: P, writer: W) -> Self {
        Self {
            presenter,
            assembler: AssembleController::new(writer),
        }
    }

    /// Renders every frame of `scenario` into the frame directory.
    pub fn render_frames(
        &self,
        scenario: Scenario,
        config: &AnimationConfig,
    ) -> Result<Vec<PathBuf>, AnimationError> {
        let dir = config.frame_dir.as_path();
        let n_frames = config.n_frames.unwrap_or(scenario.default_frames());

        let existing = ensure_dir(dir)
            .and_then(|()| collect_frame_files(dir))
            .map_err(|source| AnimationError::FrameDir {
                path: dir.to_path_buf(),
                source,
            })?;

        if !existing.is_empty() {
            warn!(
                "{} already holds {} frames; stale ones will end up in the animation",
                dir.display(),
                existing.len()
            );
        }

        info!(
            "rendering {} frames of {} into {}",
            n_frames,
            scenario,
            dir.display()
        );

        let start = Instant::now();
        let frames = config
            .pool
            .run(n_frames, |index| self.render_one(scenario, config, dir, index, n_frames))?;

        info!("rendered {} frames in {:?}", frames.len(), start.elapsed());
        Ok(frames)
    }

    fn render_one(
        &self,
        scenario: Scenario,
        config: &AnimationConfig,
        dir: &Path,
        index: usize,
        n_frames: usize,
    ) -> Result<PathBuf, FrameTaskError> {
        let mut params = scenario.params(index, n_frames);
        if let Some(number_points) = config.number_points {
            params.number_points = number_points;
        }

        let buffer = match scenario.path_overlay(index, n_frames) {
            Some(overlay) => render_path_frame(&params, &overlay)?,
            None => render_frame(&params)?,
        };
        let frame = Frame::in_dir(dir, index, n_frames);
        self.presenter.present(&buffer, frame.path())?;

        Ok(frame.into_path())
    }

    /// Renders the frames, then assembles whatever frames the directory holds.
    pub fn animate(
        &self,
        scenario: Scenario,
        config: &AnimationConfig,
    ) -> Result<PathBuf, AnimationError> {
        let settings = config.playback.unwrap_or(scenario.playback());
        let output = resolve_output_path(&config.frame_dir.with_extension(SUPPORTED_EXTENSION))?;
        check_playback(&settings)?;

        self.render_frames(scenario, config)?;

        self.assembler.assemble(&config.frame_dir, output, settings)
    }
}
