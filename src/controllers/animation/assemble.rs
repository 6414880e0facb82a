use std::path::{Path, PathBuf};

use log::info;

use crate::controllers::animation::errors::AnimationError;
use crate::core::animation::ports::animation_writer::AnimationWriterPort;
use crate::core::animation::sequencer::{PlaybackSettings, write_sequence};
use crate::storage::frame_files::collect_frame_files;

/// Turns a directory of numbered stills into one animation.
pub struct AssembleController<W: AnimationWriterPort> {
    writer: W,
}

impl<W: AnimationWriterPort> AssembleController<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn assemble(
        &self,
        input_dir: impl AsRef<Path>,
        output: impl AsRef<Path>,
        settings: PlaybackSettings,
    ) -> Result<PathBuf, AnimationError> {
        let input_dir = input_dir.as_ref();
        let frames = collect_frame_files(input_dir).map_err(|source| AnimationError::FrameDir {
            path: input_dir.to_path_buf(),
            source,
        })?;

        info!("found {} frames in {}", frames.len(), input_dir.display());

        let written = write_sequence(&self.writer, &frames, output.as_ref(), settings)?;

        info!("saved {}", written.display());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::sequencer::SequenceError;
    use std::error::Error;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingWriter {
        frames: Mutex<Vec<PathBuf>>,
    }

    impl AnimationWriterPort for RecordingWriter {
        fn write(
            &self,
            frames: &[PathBuf],
            _: &Path,
            _: f64,
        ) -> Result<(), Box<dyn Error + Send + Sync>> {
            *self.frames.lock().unwrap() = frames.to_vec();
            Ok(())
        }
    }

    #[test]
    fn test_assembles_frames_found_on_disk() {
        let tmp = TempDir::new().unwrap();
        for name in ["2.png", "0.png", "1.png", "readme.md"] {
            fs::write(tmp.path().join(name), b"x").unwrap();
        }
        let controller = AssembleController::new(RecordingWriter::default());
        let settings = PlaybackSettings {
            back_loop: true,
            ..PlaybackSettings::default()
        };

        let written = controller
            .assemble(tmp.path(), tmp.path().join("out"), settings)
            .unwrap();

        assert_eq!(written, tmp.path().join("out.gif"));
        let names: Vec<String> = controller
            .writer()
            .frames
            .lock()
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names, vec!["0.png", "1.png", "2.png", "1.png"]);
    }

    #[test]
    fn test_empty_directory_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let controller = AssembleController::new(RecordingWriter::default());

        let result = controller.assemble(tmp.path(), tmp.path().join("out.gif"), PlaybackSettings::default());

        assert!(matches!(
            result,
            Err(AnimationError::Sequence(SequenceError::NotFound))
        ));
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let tmp = TempDir::new().unwrap();
        let controller = AssembleController::new(RecordingWriter::default());

        let result = controller.assemble(
            tmp.path().join("missing"),
            tmp.path().join("out.gif"),
            PlaybackSettings::default(),
        );

        assert!(matches!(result, Err(AnimationError::FrameDir { .. })));
    }
}
