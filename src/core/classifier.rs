use std::{
    collections::BTreeSet,
    fmt::{Display, Formatter},
};

use itertools::Itertools;

/// Fuels counted towards the clean-energy share.
///
/// Matching is ASCII case-insensitive: `Wind`, `wind` and `WIND` are the same fuel.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CleanFuels(BTreeSet<String>);

impl CleanFuels {
    pub const DEFAULT: [&'static str; 5] = ["biomass", "nuclear", "hydro", "wind", "solar"];

    #[must_use]
    pub fn is_clean(&self, fuel: &str) -> bool {
        self.0.contains(&fuel.to_ascii_lowercase())
    }
}

impl Default for CleanFuels {
    fn default() -> Self {
        Self::DEFAULT.into_iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CleanFuels {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|fuel| fuel.as_ref().trim().to_ascii_lowercase()).collect())
    }
}

impl Display for CleanFuels {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let clean_fuels = CleanFuels::default();
        assert_eq!(clean_fuels.to_string(), "biomass,hydro,nuclear,solar,wind");
        for fuel in ["biomass", "nuclear", "hydro", "wind", "solar"] {
            assert!(clean_fuels.is_clean(fuel), "{fuel}");
        }
        for fuel in ["gas", "coal", "imports", "other", ""] {
            assert!(!clean_fuels.is_clean(fuel), "{fuel}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        let clean_fuels = ["Wind"].into_iter().collect::<CleanFuels>();
        assert!(clean_fuels.is_clean("wind"));
        assert!(clean_fuels.is_clean("WIND"));
        assert!(clean_fuels.is_clean("wInD"));
        assert!(!clean_fuels.is_clean("solar"));
    }

    #[test]
    fn test_custom_set() {
        let clean_fuels = ["solar", " hydro "].into_iter().collect::<CleanFuels>();
        assert!(clean_fuels.is_clean("hydro"));
        assert!(!clean_fuels.is_clean("nuclear"));
        assert_eq!(clean_fuels.to_string(), "hydro,solar");
    }

    #[test]
    fn test_empty_set() {
        let clean_fuels = CleanFuels::from_iter(Vec::<String>::new());
        assert_eq!(clean_fuels.to_string(), "");
        assert!(!clean_fuels.is_clean("wind"));
    }
}
