use crate::core::animation::ports::animation_writer::AnimationWriterPort;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageError, RgbaImage};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Shortest delay browsers play as written; 1 cs is slowed to 10 cs.
const MIN_DELAY_CENTISECONDS: f64 = 2.0;

/// Quantisation speed handed to the GIF encoder, 1 (best) to 30 (fastest).
pub const DEFAULT_GIF_SPEED: i32 = 10;

#[derive(Debug)]
pub enum AnimationWriterError {
    Create { path: PathBuf, source: io::Error },
    Decode { path: PathBuf, source: ImageError },
    Encode(ImageError),
}

impl fmt::Display for AnimationWriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create { path, source } => {
                write!(f, "cannot create {}: {}", path.display(), source)
            }
            Self::Decode { path, source } => {
                write!(f, "cannot read frame {}: {}", path.display(), source)
            }
            Self::Encode(err) => write!(f, "GIF encoding failed: {}", err),
        }
    }
}

impl Error for AnimationWriterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Create { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<ImageError> for AnimationWriterError {
    fn from(err: ImageError) -> Self {
        Self::Encode(err)
    }
}

/// Looping GIF built from still images on disk.
#[derive(Debug, Clone, Copy)]
pub struct GifAnimationWriter {
    speed: i32,
}

impl AnimationWriterPort for GifAnimationWriter {
    fn write(
        &self,
        frames: &[PathBuf],
        output: &Path,
        fps: f64,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(self.encode(frames, output, fps)?)
    }
}

impl Default for GifAnimationWriter {
    fn default() -> Self {
        Self::new(DEFAULT_GIF_SPEED)
    }
}

impl GifAnimationWriter {
    pub fn new(speed: i32) -> Self {
        Self {
            speed: speed.clamp(1, 30),
        }
    }

    fn encode(&self, frames: &[PathBuf], output: &Path, fps: f64) -> Result<(), AnimationWriterError> {
        let delay = Delay::from_numer_denom_ms(frame_delay_centiseconds(fps) * 10, 1);
        let file = File::create(output).map_err(|source| AnimationWriterError::Create {
            path: output.to_path_buf(),
            source,
        })?;
        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), self.speed);
        encoder.set_repeat(Repeat::Infinite)?;

        // paused ends repeat the same path back to back
        let mut previous: Option<(&PathBuf, RgbaImage)> = None;

        for path in frames {
            let image = match previous.take() {
                Some((previous_path, image)) if previous_path == path => image,
                _ => image::open(path)
                    .map_err(|source| AnimationWriterError::Decode {
                        path: path.clone(),
                        source,
                    })?
                    .to_rgba8(),
            };

            encoder.encode_frame(Frame::from_parts(image.clone(), 0, 0, delay))?;
            previous = Some((path, image));
        }

        Ok(())
    }
}

/// `1000 / fps` ms rounded to the centisecond resolution of GIF, within the
/// range its 16-bit delay field holds and no shorter than browsers play.
pub(crate) fn frame_delay_centiseconds(fps: f64) -> u32 {
    (100.0 / fps)
        .round()
        .clamp(MIN_DELAY_CENTISECONDS, f64::from(u16::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::ports::file_presenter::FilePresenterPort;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::presenters::file::png::PngFilePresenter;
    use image::AnimationDecoder;
    use image::codecs::gif::GifDecoder;
    use std::io::BufReader;
    use tempfile::TempDir;

    fn write_frames(dir: &Path, count: u8) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let mut buffer = PixelBuffer::new(4, 4);
                buffer
                    .set_pixel(0, 0, Colour { r: i * 40, g: 0, b: 0 })
                    .unwrap();
                let path = dir.join(format!("{}.png", i));
                PngFilePresenter::new().present(&buffer, &path).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_gif_contains_one_frame_per_entry() {
        let tmp = TempDir::new().unwrap();
        let frames = write_frames(tmp.path(), 3);
        let sequence = vec![
            frames[0].clone(),
            frames[0].clone(),
            frames[1].clone(),
            frames[2].clone(),
            frames[1].clone(),
        ];
        let output = tmp.path().join("anim.gif");

        GifAnimationWriter::default()
            .write(&sequence, &output, 25.0)
            .unwrap();

        let decoder = GifDecoder::new(BufReader::new(File::open(&output).unwrap())).unwrap();
        let decoded = decoder.into_frames().collect_frames().unwrap();

        assert_eq!(decoded.len(), 5);
        assert_eq!(decoded[0].buffer().dimensions(), (4, 4));
    }

    fn decoded_delays_ms(path: &Path) -> Vec<(u32, u32)> {
        let decoder = GifDecoder::new(BufReader::new(File::open(path).unwrap())).unwrap();

        decoder
            .into_frames()
            .collect_frames()
            .unwrap()
            .iter()
            .map(|frame| frame.delay().numer_denom_ms())
            .collect()
    }

    #[test]
    fn test_delay_follows_fps() {
        let tmp = TempDir::new().unwrap();
        let frames = write_frames(tmp.path(), 2);

        for (fps, expected_ms) in [(30.0, 30), (60.0, 20), (10.0, 100), (120.0, 20)] {
            let output = tmp.path().join(format!("{}.gif", fps));
            GifAnimationWriter::default()
                .write(&frames, &output, fps)
                .unwrap();

            let delays = decoded_delays_ms(&output);
            assert_eq!(delays.len(), 2);
            for (numer, denom) in delays {
                assert_eq!(numer / denom, expected_ms, "fps {}", fps);
            }
        }
    }

    #[test]
    fn test_tiny_fps_saturates_the_delay() {
        let tmp = TempDir::new().unwrap();
        let frames = write_frames(tmp.path(), 1);
        let output = tmp.path().join("slow.gif");

        GifAnimationWriter::default()
            .write(&frames, &output, 1e-300)
            .unwrap();

        let (numer, denom) = decoded_delays_ms(&output)[0];
        assert_eq!(numer / denom, u32::from(u16::MAX) * 10);
    }

    #[test]
    fn test_frame_delay_centiseconds() {
        assert_eq!(frame_delay_centiseconds(30.0), 3);
        assert_eq!(frame_delay_centiseconds(25.0), 4);
        assert_eq!(frame_delay_centiseconds(60.0), 2);
        assert_eq!(frame_delay_centiseconds(1000.0), 2);
        assert_eq!(frame_delay_centiseconds(0.5), 200);
        assert_eq!(frame_delay_centiseconds(1e-300), 65535);
        assert_eq!(frame_delay_centiseconds(f64::MIN_POSITIVE), 65535);
    }

    #[test]
    fn test_missing_frame_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("anim.gif");

        let result = GifAnimationWriter::default().write(
            &[tmp.path().join("nope.png")],
            &output,
            30.0,
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("nope.png"));
    }
}
