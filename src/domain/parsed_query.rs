use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Which parsing rule produced a [`ParsedQuery`]. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchType {
    #[default]
    Standard,
    EmiHelp,
    Regional,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Standard => "standard",
            MatchType::EmiHelp => "emi-help",
            MatchType::Regional => "regional",
        }
    }
}

impl FromStr for MatchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(MatchType::Standard),
            "emi-help" => Ok(MatchType::EmiHelp),
            "regional" => Ok(MatchType::Regional),
            _ => Err(format!("Invalid match type: {}", s)),
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for MatchType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    pub profession: Option<String>,
    pub location: Option<String>,
    pub match_type: MatchType,
}

impl ParsedQuery {
    pub fn new(
        profession: Option<String>,
        location: Option<String>,
        match_type: MatchType,
    ) -> Self {
        Self {
            profession,
            location,
            match_type,
        }
    }

    pub fn is_structured(&self) -> bool {
        self.profession.is_some() || self.location.is_some()
    }
}
