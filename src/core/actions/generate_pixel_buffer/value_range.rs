/// How field values are stretched onto the colour map.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ValueRange {
    /// Finite minimum and maximum of the values being drawn.
    #[default]
    Auto,
    Fixed { vmin: f64, vmax: f64 },
}

impl ValueRange {
    #[must_use]
    pub fn resolve(&self, values: &[f64]) -> (f64, f64) {
        match *self {
            Self::Fixed { vmin, vmax } => (vmin, vmax),
            Self::Auto => {
                let (lo, hi) = values
                    .iter()
                    .copied()
                    .filter(|v| v.is_finite())
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                        (lo.min(v), hi.max(v))
                    });

                if lo > hi { (0.0, 1.0) } else { (lo, hi) }
            }
        }
    }
}

/// Position of `value` on the colour map.
///
/// Non-finite values land on the top of the map, next to the bounded
/// (`max_iter`) cells they sit among.
#[must_use]
pub fn normalise(value: f64, vmin: f64, vmax: f64) -> f64 {
    if !value.is_finite() {
        return 1.0;
    }

    let span = vmax - vmin;
    if !(span > 0.0) {
        return 0.0;
    }

    ((value - vmin) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_range_ignores_non_finite_values() {
        let values = [3.0, f64::NAN, -1.0, f64::INFINITY, 7.5];

        assert_eq!(ValueRange::Auto.resolve(&values), (-1.0, 7.5));
    }

    #[test]
    fn auto_range_without_finite_values() {
        assert_eq!(ValueRange::Auto.resolve(&[f64::NAN]), (0.0, 1.0));
        assert_eq!(ValueRange::Auto.resolve(&[]), (0.0, 1.0));
    }

    #[test]
    fn fixed_range_is_passed_through() {
        let range = ValueRange::Fixed {
            vmin: 0.0,
            vmax: 200.0,
        };

        assert_eq!(range.resolve(&[5.0, 500.0]), (0.0, 200.0));
    }

    #[test]
    fn normalise_clamps_into_unit_interval() {
        assert_eq!(normalise(50.0, 0.0, 200.0), 0.25);
        assert_eq!(normalise(500.0, 0.0, 200.0), 1.0);
        assert_eq!(normalise(-5.0, 0.0, 200.0), 0.0);
    }

    #[test]
    fn normalise_non_finite_goes_to_top() {
        assert_eq!(normalise(f64::NAN, 0.0, 10.0), 1.0);
        assert_eq!(normalise(f64::NEG_INFINITY, 0.0, 10.0), 1.0);
    }

    #[test]
    fn normalise_degenerate_span() {
        assert_eq!(normalise(4.0, 4.0, 4.0), 0.0);
        assert_eq!(normalise(4.0, 5.0, 1.0), 0.0);
    }
}
