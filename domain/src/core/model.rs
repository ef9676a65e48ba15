//! Model value object representing a completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available completion models (Value Object)
///
/// The solver runs most calls on a fast worker model and may escalate the
/// final report step to a stronger reasoning model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini3Flash,
    Gemini3Pro,
    Gemini25Flash,
    Gemini25Pro,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini3Flash => "gemini-3-flash-preview",
            Model::Gemini3Pro => "gemini-3-pro-preview",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Custom(s) => s,
        }
    }

    /// Default model for decomposition, routing, candidate generation and judging
    pub fn default_worker() -> Model {
        Model::Gemini3Flash
    }

    /// Default model for the final-report escalation
    pub fn default_finalizer() -> Model {
        Model::Gemini3Pro
    }

    /// Check if this is a pro-tier model
    pub fn is_pro(&self) -> bool {
        matches!(self, Model::Gemini3Pro | Model::Gemini25Pro)
    }
}

impl Default for Model {
    /// Returns the default worker model
    fn default() -> Self {
        Model::default_worker()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-3-flash-preview" => Model::Gemini3Flash,
            "gemini-3-pro-preview" => Model::Gemini3Pro,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}
