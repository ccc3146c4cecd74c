use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Display language of the workbench.
///
/// Switching locale only changes labels and number formatting; domain data
/// is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// The two-valued toggle in the header bar.
    pub fn toggle(self) -> Self {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "cn" => Ok(Locale::Zh),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unsupported locale '{}'",
                other
            )))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Locale::Zh.toggle(), Locale::En);
        assert_eq!(Locale::Zh.toggle().toggle(), Locale::Zh);
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::Zh);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serialization() {
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
    }
}
