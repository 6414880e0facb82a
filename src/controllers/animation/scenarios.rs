use std::error::Error;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::core::actions::generate_pixel_buffer::value_range::ValueRange;
use crate::core::animation::sequencer::PlaybackSettings;
use crate::core::data::complex::Complex;
use crate::core::data::path_overlay::PathOverlay;
use crate::core::data::render_params::RenderParams;

const JULIA_PATH_RADIUS: f64 = 0.7885;
/// Samples of the drawn route of `c`, independent of the frame count.
const PATH_SAMPLES: usize = 100;
const JULIA_ZOOM_CENTER: Complex = Complex::new(1.61803398874989, 0.0);
const MANDELBROT_ZOOM_CENTER: Complex = Complex::new(-1.4177, 0.0);
/// Seahorse valley spiral.
const DEEP_ZOOM_CENTER: Complex = Complex::new(-0.743_643_887_037_158_7, 0.131_825_904_205_311_97);
/// Mandelbrot zoom starts slightly zoomed out.
const MANDELBROT_ZOOM_OFFSET: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    UnknownScenario { name: String },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownScenario { name } => write!(f, "unknown scenario '{}'", name),
        }
    }
}

impl Error for ScenarioError {}

/// Prebuilt animations, each a pure function from frame index to render
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Julia constant walking a circle of radius 0.7885.
    JuliaPathCircumference,
    /// Julia constant walking the imaginary axis from `-i` to `i`.
    JuliaPathSegment,
    JuliaZoom,
    MandelbrotZoom,
    MandelbrotDeepZoom,
}

impl Scenario {
    pub const ALL: &'static [Self] = &[
        Self::JuliaPathCircumference,
        Self::JuliaPathSegment,
        Self::JuliaZoom,
        Self::MandelbrotZoom,
        Self::MandelbrotDeepZoom,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::JuliaPathCircumference => "julia-path-circumference",
            Self::JuliaPathSegment => "julia-path-segment",
            Self::JuliaZoom => "julia-zoom",
            Self::MandelbrotZoom => "mandelbrot-zoom",
            Self::MandelbrotDeepZoom => "mandelbrot-deep-zoom",
        }
    }

    #[must_use]
    pub const fn default_frames(self) -> usize {
        match self {
            Self::JuliaPathCircumference | Self::JuliaPathSegment | Self::JuliaZoom => 600,
            Self::MandelbrotZoom => 290,
            Self::MandelbrotDeepZoom => 718,
        }
    }

    #[must_use]
    pub const fn default_number_points(self) -> usize {
        match self {
            Self::JuliaPathCircumference | Self::JuliaPathSegment | Self::JuliaZoom => 600,
            Self::MandelbrotZoom => 400,
            Self::MandelbrotDeepZoom => 1200,
        }
    }

    #[must_use]
    pub fn playback(self) -> PlaybackSettings {
        match self {
            Self::JuliaPathCircumference => PlaybackSettings::default(),
            Self::JuliaPathSegment => PlaybackSettings {
                back_loop: true,
                ..PlaybackSettings::default()
            },
            Self::JuliaZoom => PlaybackSettings {
                pause: 25,
                ..PlaybackSettings::default()
            },
            Self::MandelbrotZoom => PlaybackSettings {
                fps: 60.0,
                pause: 20,
                back_loop: false,
            },
            Self::MandelbrotDeepZoom => PlaybackSettings {
                pause: 20,
                ..PlaybackSettings::default()
            },
        }
    }

    /// Julia constant for frame `index` of an `n_frames` run, for the
    /// scenarios that move it.
    #[must_use]
    pub fn julia_constant(self, index: usize, n_frames: usize) -> Option<Complex> {
        let k = index as f64;

        match self {
            Self::JuliaPathCircumference => {
                let theta = PI * 2.0 * k / n_frames.max(1) as f64;
                Some(Complex::from_polar(JULIA_PATH_RADIUS, theta))
            }
            Self::JuliaPathSegment => {
                let imag = if n_frames > 1 {
                    -1.0 + 2.0 * k / (n_frames - 1) as f64
                } else {
                    -1.0
                };
                Some(Complex::new(0.0, imag))
            }
            Self::JuliaZoom | Self::MandelbrotZoom | Self::MandelbrotDeepZoom => None,
        }
    }

    /// The route of `c` and its position at frame `index`, drawn beside the
    /// Julia set by the path scenarios.
    #[must_use]
    pub fn path_overlay(self, index: usize, n_frames: usize) -> Option<PathOverlay> {
        let c = self.julia_constant(index, n_frames)?;
        let path = (0..PATH_SAMPLES)
            .filter_map(|k| self.julia_constant(k, PATH_SAMPLES))
            .collect();

        Some(PathOverlay::new(path, c))
    }

    /// Parameters for frame `index` of an `n_frames` run.
    #[must_use]
    pub fn params(self, index: usize, n_frames: usize) -> RenderParams {
        let k = index as f64;

        let base = match self {
            Self::JuliaPathCircumference | Self::JuliaPathSegment => {
                let c = self.julia_constant(index, n_frames).unwrap_or(Complex::ZERO);
                julia_path(c)
            }
            Self::JuliaZoom => RenderParams {
                center: JULIA_ZOOM_CENTER,
                zoom: 1.05_f64.powf(k),
                max_iterations: 100.0,
                ..RenderParams::julia(Complex::new(-1.0, 0.0))
            },
            Self::MandelbrotZoom => {
                let k = k - MANDELBROT_ZOOM_OFFSET;
                RenderParams {
                    center: MANDELBROT_ZOOM_CENTER,
                    zoom: 1.025_f64.powf(k),
                    max_iterations: 200.0 + 10.0 * k,
                    ..RenderParams::mandelbrot()
                }
            }
            Self::MandelbrotDeepZoom => {
                let zoom = 1.04_f64.powf(k);
                RenderParams {
                    center: DEEP_ZOOM_CENTER,
                    zoom,
                    max_iterations: zoom.sqrt() + 200.0,
                    ..RenderParams::mandelbrot()
                }
            }
        };

        RenderParams {
            number_points: self.default_number_points(),
            smoothing: true,
            ..base
        }
    }
}

fn julia_path(c: Complex) -> RenderParams {
    RenderParams {
        max_iterations: 200.0,
        value_range: ValueRange::Fixed {
            vmin: 0.0,
            vmax: 200.0,
        },
        ..RenderParams::julia(c)
    }
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scenario| scenario.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScenarioError::UnknownScenario { name: s.to_owned() })
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).id())
    }
}
