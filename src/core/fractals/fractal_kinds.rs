use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalKinds {
    Mandelbrot,
    Julia { c: Complex },
}

impl Default for FractalKinds {
    fn default() -> Self {
        Self::Mandelbrot
    }
}

impl FractalKinds {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }

    /// View center used when the caller does not pick one.
    #[must_use]
    pub const fn default_center(self) -> Complex {
        match self {
            Self::Mandelbrot => Complex::new(-0.5, 0.0),
            Self::Julia { .. } => Complex::ZERO,
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mandelbrot => f.write_str(self.display_name()),
            Self::Julia { c } => write!(f, "{} (c = {} {:+}i)", self.display_name(), c.real, c.imag),
        }
    }
}
