use crate::core::colour_mapping::errors::ColourMapError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKinds {
    #[default]
    Uwob,
    Okabe,
    RevOkabe,
    Fire,
    Gray,
}

impl ColourMapKinds {
    pub const ALL: &'static [Self] = &[
        Self::Uwob,
        Self::Okabe,
        Self::RevOkabe,
        Self::Fire,
        Self::Gray,
    ];

    /// Identifier accepted on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Uwob => "uwob",
            Self::Okabe => "okabe",
            Self::RevOkabe => "rev_okabe",
            Self::Fire => "fire",
            Self::Gray => "gray",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Uwob => "Blue-white-orange-black",
            Self::Okabe => "Okabe-Ito",
            Self::RevOkabe => "Okabe-Ito reversed",
            Self::Fire => "Fire gradient",
            Self::Gray => "Grayscale",
        }
    }
}

impl FromStr for ColourMapKinds {
    type Err = ColourMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColourMapError::UnknownKind { name: s.to_owned() })
    }
}

impl std::fmt::Display for ColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back_to_kind() {
        for &kind in ColourMapKinds::ALL {
            assert_eq!(kind.id().parse::<ColourMapKinds>(), Ok(kind));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("REV_OKABE".parse(), Ok(ColourMapKinds::RevOkabe));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "ultra".parse::<ColourMapKinds>(),
            Err(ColourMapError::UnknownKind {
                name: "ultra".to_owned()
            })
        );
    }

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            ColourMapKinds::ALL.first(),
            Some(&ColourMapKinds::default())
        );
    }
}
