use serde::{Deserialize, Serialize};

/// What to do with members whose value projects to `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullValueHandling {
    /// Keep the member as an explicit `null`. A member becoming `null` is
    /// reported as a `replace`.
    #[default]
    Include,
    /// Drop the member from its object. A member becoming `null` is reported
    /// as a `remove`, and one leaving `null` as an `add`.
    Ignore,
}

/// Configuration for projecting values into JSON trees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    /// Treatment of `null` object members.
    pub null_value_handling: NullValueHandling,
    /// Maximum nesting depth of a projected tree. The root counts as depth 1.
    pub max_depth: usize,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            null_value_handling: NullValueHandling::Include,
            max_depth: 128,
        }
    }
}

impl ProjectionSettings {
    /// Settings that omit `null` members from projected trees.
    pub fn ignore_nulls() -> Self {
        Self {
            null_value_handling: NullValueHandling::Ignore,
            ..Default::default()
        }
    }

    pub fn with_null_value_handling(mut self, handling: NullValueHandling) -> Self {
        self.null_value_handling = handling;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
