mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use controllers::animation::assemble::AssembleController;
pub use controllers::animation::controller::{AnimationConfig, AnimationController};
pub use controllers::animation::errors::AnimationError;
pub use controllers::animation::frame_pool::{FramePool, FramePoolError};
pub use controllers::animation::scenarios::{Scenario, ScenarioError};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::still::StillController;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_pixel_buffer::value_range::ValueRange;
pub use crate::core::actions::render_frame::render_frame::{RenderFrameError, compute_values, render_frame};
pub use crate::core::actions::render_frame::render_path_frame::{
    MARKER_COLOUR, PATH_COLOUR, render_path_frame,
};
pub use crate::core::animation::frame::{Frame, frame_file_name};
pub use crate::core::animation::ports::animation_writer::AnimationWriterPort;
pub use crate::core::animation::sequencer::{
    PlaybackSettings, SequenceError, build_sequence, check_playback, write_sequence,
};
pub use crate::core::colour_mapping::errors::ColourMapError;
pub use crate::core::colour_mapping::factory::colour_map_factory;
pub use crate::core::colour_mapping::kinds::ColourMapKinds;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::grid::Grid;
pub use crate::core::data::iteration_field::{EscapeResult, IterationField};
pub use crate::core::data::path_overlay::PathOverlay;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::render_params::RenderParams;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::errors::EngineError;
pub use crate::core::fractals::escape_time::{ESCAPE_RADIUS, escape};
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::smoothing::{apply_smoothing, smooth};
pub use crate::core::util::map_viewport::{linspace, map_viewport};
pub use input::cli::args::Cli;
pub use input::cli::run_cli::run_cli;
pub use presenters::file::gif::{AnimationWriterError, GifAnimationWriter};
pub use presenters::file::png::PngFilePresenter;
pub use storage::frame_files::collect_frame_files;
