use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::maps::fire_gradient::FireGradient;
use crate::core::colour_mapping::maps::linear_gradient::LinearGradient;

#[must_use]
pub fn colour_map_factory(kind: ColourMapKinds) -> Box<dyn ColourMap> {
    match LinearGradient::for_kind(kind) {
        Some(gradient) => Box::new(gradient),
        None => Box::new(FireGradient::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourMapKinds::ALL {
            let map = colour_map_factory(kind);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourMapKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn every_map_covers_the_unit_interval() {
        for &kind in ColourMapKinds::ALL {
            let map = colour_map_factory(kind);
            for step in 0..=20 {
                assert!(map.map(f64::from(step) / 20.0).is_ok());
            }
        }
    }
}
