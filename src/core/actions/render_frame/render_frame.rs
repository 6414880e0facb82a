use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::debug;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::data::grid::Grid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::render_params::RenderParams;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::errors::EngineError;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::smoothing::apply_smoothing;
use crate::core::util::map_viewport::map_viewport;

#[derive(Debug)]
pub enum RenderFrameError {
    Viewport(ViewportError),
    Engine(EngineError),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::Engine(err) => write!(f, "invalid engine settings: {}", err),
            Self::PixelBuffer(err) => write!(f, "colouring failed: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Engine(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ViewportError> for RenderFrameError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<EngineError> for RenderFrameError {
    fn from(err: EngineError) -> Self {
        Self::Engine(err)
    }
}

impl From<PixelBufferError> for RenderFrameError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(GeneratePixelBufferError::from(err))
    }
}

impl From<GeneratePixelBufferError> for RenderFrameError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Iteration values for a frame, smoothed when requested.
pub fn compute_values(params: &RenderParams) -> Result<Vec<f64>, RenderFrameError> {
    let (_, grid) = map_viewport(params.center, params.zoom, params.number_points)?;

    match params.kind {
        FractalKinds::Mandelbrot => {
            let algorithm = MandelbrotAlgorithm::new(params.max_iterations)?;
            Ok(iterate(&grid, &algorithm, params.smoothing))
        }
        FractalKinds::Julia { c } => {
            let algorithm = JuliaAlgorithm::new(c, params.max_iterations)?;
            Ok(iterate(&grid, &algorithm, params.smoothing))
        }
    }
}

fn iterate<Alg: FractalAlgorithm + Sync>(grid: &Grid, algorithm: &Alg, smoothing: bool) -> Vec<f64> {
    let field = generate_fractal_parallel_rayon(grid, algorithm);

    if smoothing {
        apply_smoothing(&field, algorithm.max_iterations())
    } else {
        field.counts()
    }
}

/// Viewport, iteration, smoothing and colouring for one frame.
pub fn render_frame(params: &RenderParams) -> Result<PixelBuffer, RenderFrameError> {
    let start = Instant::now();
    let values = compute_values(params)?;
    let iterated = start.elapsed();

    let colour_map = colour_map_factory(params.colour_map);
    let buffer = generate_pixel_buffer(
        &values,
        params.number_points,
        &colour_map,
        params.value_range,
    )?;

    debug!(
        "{} {}x{} zoom {:e}: iterate {:?}, total {:?}",
        params.kind,
        params.number_points,
        params.number_points,
        params.zoom,
        iterated,
        start.elapsed()
    );

    Ok(buffer)
}
