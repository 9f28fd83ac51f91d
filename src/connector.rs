//! Connector domain types consumed by the UI.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maturity / support classification of a connector.
///
/// Identifiers outside the known set are kept verbatim in [`ReleaseStage::Other`]
/// so they can still be displayed and looked up in a message catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReleaseStage {
    /// In development, unsupported.
    Alpha,
    /// Stable and supported, still evolving.
    Beta,
    /// Fully supported, production ready.
    GenerallyAvailable,
    /// User-authored, not vetted.
    Custom,
    /// Any identifier not covered above.
    Other(String),
}

impl ReleaseStage {
    /// Stages with a fixed identifier, ordered from least to most mature,
    /// followed by `custom`.
    pub const KNOWN: [Self; 4] = [Self::Alpha, Self::Beta, Self::GenerallyAvailable, Self::Custom];

    /// Wire identifier of the stage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::GenerallyAvailable => "generally_available",
            Self::Custom => "custom",
            Self::Other(id) => id,
        }
    }
}

impl From<String> for ReleaseStage {
    fn from(value: String) -> Self {
        match value.as_str() {
            "alpha" => Self::Alpha,
            "beta" => Self::Beta,
            "generally_available" => Self::GenerallyAvailable,
            "custom" => Self::Custom,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for ReleaseStage {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ReleaseStage> for String {
    fn from(stage: ReleaseStage) -> Self {
        match stage {
            ReleaseStage::Other(id) => id,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ReleaseStage {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ReleaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identifiers() {
        for stage in ReleaseStage::KNOWN {
            assert_eq!(ReleaseStage::from(stage.as_str()), stage);
        }
    }

    #[test]
    fn test_unknown_identifier_is_preserved() {
        let stage: ReleaseStage = "deprecated".parse().unwrap();
        assert_eq!(stage, ReleaseStage::Other("deprecated".to_string()));
        assert_eq!(stage.to_string(), "deprecated");
    }

    #[test]
    fn test_serde_uses_wire_identifier() {
        let json = serde_json::to_string(&ReleaseStage::GenerallyAvailable).unwrap();
        assert_eq!(json, "\"generally_available\"");

        let stage: ReleaseStage = serde_json::from_str("\"beta\"").unwrap();
        assert_eq!(stage, ReleaseStage::Beta);
    }
}
