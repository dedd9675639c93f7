use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which parser turns input text into Objective-C files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    /// One class per line, `Name` or `Name: Superclass`.
    #[default]
    Simple,
    /// Fixed showcase output, input is ignored.
    Dummy,
}

impl ParserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserKind::Simple => "simple",
            ParserKind::Dummy => "dummy",
        }
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParserKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(ParserKind::Simple),
            "dummy" => Ok(ParserKind::Dummy),
            _ => Err(format!(
                "unknown parser '{}', expected 'simple' or 'dummy'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(ParserKind::from_str("simple").unwrap(), ParserKind::Simple);
        assert_eq!(ParserKind::from_str("Dummy").unwrap(), ParserKind::Dummy);
        assert!(ParserKind::from_str("yaml").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ParserKind::Simple.to_string(), "simple");
        assert_eq!(ParserKind::Dummy.to_string(), "dummy");
    }

    #[test]
    fn test_serde() {
        let kind: ParserKind = serde_json::from_str("\"dummy\"").unwrap();
        assert_eq!(kind, ParserKind::Dummy);
        assert_eq!(serde_json::to_string(&ParserKind::Simple).unwrap(), "\"simple\"");
    }
}
