use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum ColourMapError {
    OutOfRange { t: f64 },
    UnknownKind { name: String },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { t } => {
                write!(f, "colour map position {} is outside [0, 1]", t)
            }
            Self::UnknownKind { name } => {
                write!(f, "unknown colour map '{}'", name)
            }
        }
    }
}

impl Error for ColourMapError {}

pub(crate) fn check_range(t: f64) -> Result<f64, ColourMapError> {
    if (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        Err(ColourMapError::OutOfRange { t })
    }
}
