use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EngineError {
    InvalidMaxIterations { max_iterations: f64 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaxIterations { max_iterations } => {
                write!(
                    f,
                    "maximum iterations must be a positive integer, got {}",
                    max_iterations
                )
            }
        }
    }
}

impl Error for EngineError {}
