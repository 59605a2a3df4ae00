// src/models/category.rs
use std::fmt;
use std::str::FromStr;

use super::error::DataValidationError;

/// Closed set of product classifications.
///
/// Stored and serialized by symbolic name (`"CLOTHS"`), never by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }

    /// Lenient lookup used by query-string filters (`?category=cloths`).
    pub fn parse_ignore_case(value: &str) -> Result<Self, DataValidationError> {
        value.trim().to_ascii_uppercase().parse()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DataValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DataValidationError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbolic_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn exact_parse_is_case_sensitive() {
        assert!(matches!(
            "cloths".parse::<Category>(),
            Err(DataValidationError::UnknownCategory(name)) if name == "cloths"
        ));
        assert_eq!(Category::parse_ignore_case("cloths").unwrap(), Category::Cloths);
        assert_eq!(Category::parse_ignore_case(" Tools ").unwrap(), Category::Tools);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!("SHOES".parse::<Category>().is_err());
        assert!(Category::parse_ignore_case("").is_err());
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(Category::default(), Category::Unknown);
        assert_eq!(Category::default().to_string(), "UNKNOWN");
    }
}
