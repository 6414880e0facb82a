use crate::core::data::complex::Complex;

/// Route the Julia constant travels during an animation, and where it sits
/// in the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PathOverlay {
    path: Vec<Complex>,
    c: Complex,
}

impl PathOverlay {
    #[must_use]
    pub fn new(path: Vec<Complex>, c: Complex) -> Self {
        Self { path, c }
    }

    #[must_use]
    pub fn path(&self) -> &[Complex] {
        &self.path
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }
}
