use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::{ColourMapError, check_range};
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;

const UWOB: &[u32] = &[0x00008B, 0xFFFFFF, 0xFF8C00, 0x000000];

const OKABE: &[u32] = &[
    0xE69F00, 0x56B4E9, 0x009E73, 0xF0E442, 0x0072B2, 0xD55E00, 0xCC79A7, 0x000000,
];

const GRAY: &[u32] = &[0xFFFFFF, 0x000000];

/// Evenly spaced colour stops with linear interpolation in between.
#[derive(Debug, Clone)]
pub struct LinearGradient {
    kind: ColourMapKinds,
    stops: Vec<Colour>,
}

impl ColourMap for LinearGradient {
    fn map(&self, t: f64) -> Result<Colour, ColourMapError> {
        let t = check_range(t)?;

        let segments = self.stops.len() - 1;
        if segments == 0 {
            return Ok(self.stops[0]);
        }

        let position = t * segments as f64;
        let index = (position.floor() as usize).min(segments - 1);
        let local_t = position - index as f64;

        Ok(self.stops[index].lerp(self.stops[index + 1], local_t))
    }

    fn display_name(&self) -> &str {
        self.kind.display_name()
    }
}

impl LinearGradient {
    /// Returns `None` for kinds that are not stop-based.
    #[must_use]
    pub fn for_kind(kind: ColourMapKinds) -> Option<Self> {
        let stops: Vec<u32> = match kind {
            ColourMapKinds::Uwob => UWOB.to_vec(),
            ColourMapKinds::Okabe => OKABE.to_vec(),
            ColourMapKinds::RevOkabe => OKABE.iter().rev().copied().collect(),
            ColourMapKinds::Gray => GRAY.to_vec(),
            ColourMapKinds::Fire => return None,
        };

        Some(Self {
            kind,
            stops: stops.into_iter().map(Colour::from_hex).collect(),
        })
    }

    #[must_use]
    pub fn kind(&self) -> ColourMapKinds {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_hit_first_and_last_stop() {
        let map = LinearGradient::for_kind(ColourMapKinds::Uwob).unwrap();

        assert_eq!(map.map(0.0).unwrap(), Colour::from_hex(0x00008B));
        assert_eq!(map.map(1.0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_interior_stop_is_exact() {
        let map = LinearGradient::for_kind(ColourMapKinds::Uwob).unwrap();

        assert_eq!(map.map(1.0 / 3.0).unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_reversed_okabe() {
        let forward = LinearGradient::for_kind(ColourMapKinds::Okabe).unwrap();
        let reversed = LinearGradient::for_kind(ColourMapKinds::RevOkabe).unwrap();

        assert_eq!(forward.map(0.0).unwrap(), reversed.map(1.0).unwrap());
        assert_eq!(forward.map(1.0).unwrap(), reversed.map(0.0).unwrap());
    }

    #[test]
    fn test_gray_midpoint() {
        let map = LinearGradient::for_kind(ColourMapKinds::Gray).unwrap();

        assert_eq!(
            map.map(0.5).unwrap(),
            Colour {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let map = LinearGradient::for_kind(ColourMapKinds::Gray).unwrap();

        assert_eq!(map.map(1.5), Err(ColourMapError::OutOfRange { t: 1.5 }));
        assert!(map.map(f64::NAN).is_err());
    }

    #[test]
    fn test_fire_is_not_stop_based() {
        assert!(LinearGradient::for_kind(ColourMapKinds::Fire).is_none());
    }
}
