use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::colour::Colour;

/// Palette lookup from a normalised position to a colour.
pub trait ColourMap: Send + Sync {
    /// `t` must lie in `[0, 1]`.
    fn map(&self, t: f64) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}

impl ColourMap for Box<dyn ColourMap> {
    fn map(&self, t: f64) -> Result<Colour, ColourMapError> {
        (**self).map(t)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
