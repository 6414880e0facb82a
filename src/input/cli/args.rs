use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::controllers::animation::controller::AnimationConfig;
use crate::controllers::animation::frame_pool::FramePool;
use crate::controllers::animation::scenarios::Scenario;
use crate::core::actions::generate_pixel_buffer::value_range::ValueRange;
use crate::core::animation::sequencer::{DEFAULT_FPS, PlaybackSettings};
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::complex::Complex;
use crate::core::data::render_params::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_NUMBER_POINTS, RenderParams,
};

#[derive(Parser, Debug)]
#[command(name = "fractal_animator", version)]
#[command(about = "Render Mandelbrot and Julia sets as still images and looping GIFs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one PNG
    Still {
        #[command(subcommand)]
        fractal: StillFractal,
    },
    /// Render a prebuilt animation: frames into OUTPUT_DIR, GIF beside it
    Animate(AnimateArgs),
    /// Build a GIF from a directory of numbered PNG frames
    Assemble(AssembleArgs),
}

#[derive(Subcommand, Debug)]
pub enum StillFractal {
    Mandelbrot(ViewArgs),
    Julia {
        /// Real part of the Julia constant
        #[arg(long, allow_negative_numbers = true)]
        c_re: f64,

        /// Imaginary part of the Julia constant
        #[arg(long, allow_negative_numbers = true)]
        c_im: f64,

        #[command(flatten)]
        view: ViewArgs,
    },
}

impl StillFractal {
    #[must_use]
    pub fn params(&self) -> RenderParams {
        match self {
            Self::Mandelbrot(view) => view.apply(RenderParams::mandelbrot()),
            Self::Julia { c_re, c_im, view } => {
                view.apply(RenderParams::julia(Complex::new(*c_re, *c_im)))
            }
        }
    }

    #[must_use]
    pub fn output(&self) -> &PathBuf {
        match self {
            Self::Mandelbrot(view) | Self::Julia { view, .. } => &view.output,
        }
    }
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Defaults to -0.5 for Mandelbrot and 0 for Julia
    #[arg(long, allow_negative_numbers = true)]
    pub center_re: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub center_im: Option<f64>,

    #[arg(long, default_value_t = 1.0)]
    pub zoom: f64,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iter: f64,

    /// Grid points per side, which is also the image size in pixels
    #[arg(long, default_value_t = DEFAULT_NUMBER_POINTS)]
    pub points: usize,

    /// Continuous colouring instead of integer bands
    #[arg(long)]
    pub smooth: bool,

    /// uwob, okabe, rev_okabe, fire or gray
    #[arg(long, default_value_t = ColourMapKinds::default())]
    pub palette: ColourMapKinds,

    /// Lower end of the colour scale; auto when omitted
    #[arg(long, allow_negative_numbers = true, requires = "vmax")]
    pub vmin: Option<f64>,

    #[arg(long, allow_negative_numbers = true, requires = "vmin")]
    pub vmax: Option<f64>,

    pub output: PathBuf,
}

impl ViewArgs {
    #[must_use]
    pub fn apply(&self, base: RenderParams) -> RenderParams {
        let center = Complex::new(
            self.center_re.unwrap_or(base.center.real),
            self.center_im.unwrap_or(base.center.imag),
        );
        let value_range = match (self.vmin, self.vmax) {
            (Some(vmin), Some(vmax)) => ValueRange::Fixed { vmin, vmax },
            _ => ValueRange::Auto,
        };

        RenderParams {
            center,
            zoom: self.zoom,
            max_iterations: self.max_iter,
            number_points: self.points,
            smoothing: self.smooth,
            colour_map: self.palette,
            value_range,
            ..base
        }
    }
}

#[derive(Args, Debug)]
pub struct AnimateArgs {
    pub scenario: Scenario,

    pub output_dir: PathBuf,

    /// Overrides the scenario's frame count
    #[arg(long)]
    pub frames: Option<usize>,

    /// Overrides the scenario's resolution
    #[arg(long)]
    pub points: Option<usize>,

    /// Frame workers; one per core when omitted
    #[arg(long, conflicts_with = "serial")]
    pub workers: Option<usize>,

    /// Render frames one after another
    #[arg(long)]
    pub serial: bool,

    #[arg(long)]
    pub fps: Option<f64>,

    #[arg(long)]
    pub pause: Option<usize>,

    /// Play forwards then backwards
    #[arg(long, overrides_with = "no_back_loop")]
    pub back_loop: bool,

    /// Play forwards only, even for scenarios that loop back by default
    #[arg(long, overrides_with = "back_loop")]
    pub no_back_loop: bool,
}

impl AnimateArgs {
    fn back_loop_or(&self, default: bool) -> bool {
        if self.back_loop {
            true
        } else if self.no_back_loop {
            false
        } else {
            default
        }
    }

    #[must_use]
    pub fn config(&self) -> AnimationConfig {
        let pool = if self.serial {
            FramePool::serial()
        } else {
            FramePool::new(self.workers)
        };
        let base = self.scenario.playback();

        AnimationConfig {
            n_frames: self.frames,
            number_points: self.points,
            pool,
            playback: Some(PlaybackSettings {
                fps: self.fps.unwrap_or(base.fps),
                pause: self.pause.unwrap_or(base.pause),
                back_loop: self.back_loop_or(base.back_loop),
            }),
            ..AnimationConfig::new(self.output_dir.clone())
        }
    }
}

#[derive(Args, Debug)]
pub struct AssembleArgs {
    pub input_dir: PathBuf,

    /// Written as GIF; `.gif` is appended when there is no extension
    pub output: PathBuf,

    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: f64,

    /// Extra copies of the first and last frame
    #[arg(long, default_value_t = 0)]
    pub pause: usize,

    #[arg(long)]
    pub back_loop: bool,
}

impl AssembleArgs {
    #[must_use]
    pub fn playback(&self) -> PlaybackSettings {
        PlaybackSettings {
            fps: self.fps,
            pause: self.pause,
            back_loop: self.back_loop,
        }
    }
}
