use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which Sanseido dictionary an entry was looked up in. Supplied by the
/// collaborators around the engine; the engine itself never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DictionaryType {
    /// Japanese-Japanese
    Jj,
    /// Japanese-English
    Je,
    /// English-Japanese
    Ej,
}

impl DictionaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DictionaryType::Jj => "JJ",
            DictionaryType::Je => "JE",
            DictionaryType::Ej => "EJ",
        }
    }
}

impl fmt::Display for DictionaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DictionaryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "JJ" => Ok(DictionaryType::Jj),
            "JE" => Ok(DictionaryType::Je),
            "EJ" => Ok(DictionaryType::Ej),
            other => Err(format!("unknown dictionary type: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for dt in [DictionaryType::Jj, DictionaryType::Je, DictionaryType::Ej] {
            assert_eq!(dt.as_str().parse::<DictionaryType>().unwrap(), dt);
        }
        assert!("XX".parse::<DictionaryType>().is_err());
    }
}
