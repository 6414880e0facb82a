use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::{ColourMapError, check_range};
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;

/// Black through red, orange and yellow up to white.
#[derive(Debug, Default)]
pub struct FireGradient {}

impl ColourMap for FireGradient {
    fn map(&self, t: f64) -> Result<Colour, ColourMapError> {
        let t = check_range(t)?;

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        ColourMapKinds::Fire.display_name()
    }
}

impl FireGradient {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
