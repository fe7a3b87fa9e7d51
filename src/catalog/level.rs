use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CEFR proficiency level used to filter catalog content
///
/// Levels are ordered from `A1` (lowest) to `C2` (highest), so comparisons
/// such as `level >= Level::B1` read naturally.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Level {
    /// Beginner
    #[default]
    A1,
    /// Elementary
    A2,
    /// Intermediate
    B1,
    /// Upper intermediate
    B2,
    /// Advanced
    C1,
    /// Proficient
    C2,
}

impl Level {
    /// All levels in ascending order
    pub const ALL: [Level; 6] = [
        Level::A1,
        Level::A2,
        Level::B1,
        Level::B2,
        Level::C1,
        Level::C2,
    ];

    /// The two-character level code (e.g. "B1")
    pub fn code(&self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
        }
    }

    /// Human readable name shown next to the code
    pub fn display_name(&self) -> &'static str {
        match self {
            Level::A1 => "A1 - Beginner",
            Level::A2 => "A2 - Elementary",
            Level::B1 => "B1 - Intermediate",
            Level::B2 => "B2 - Upper intermediate",
            Level::C1 => "C1 - Advanced",
            Level::C2 => "C2 - Proficient",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A1" => Ok(Level::A1),
            "A2" => Ok(Level::A2),
            "B1" => Ok(Level::B1),
            "B2" => Ok(Level::B2),
            "C1" => Ok(Level::C1),
            "C2" => Ok(Level::C2),
            _ => Err(format!(
                "Invalid level '{}'. Valid options are: A1, A2, B1, B2, C1, C2",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::A1 < Level::A2);
        assert!(Level::B2 < Level::C1);
        assert!(Level::C2 >= Level::B1);
        assert_eq!(Level::ALL.iter().max(), Some(&Level::C2));
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("B1".parse::<Level>().unwrap(), Level::B1);
        assert_eq!(" c2 ".parse::<Level>().unwrap(), Level::C2);
        assert!("D1".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_serializes_as_code() {
        let json = serde_json::to_string(&Level::B2).unwrap();
        assert_eq!(json, "\"B2\"");
        let level: Level = serde_json::from_str("\"A2\"").unwrap();
        assert_eq!(level, Level::A2);
    }

    #[test]
    fn test_default_is_lowest_level() {
        assert_eq!(Level::default(), Level::A1);
        assert_eq!(Level::default(), Level::ALL[0]);
    }
}
