use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the fixed quote categories.
///
/// The set is closed: names are matched case-sensitively and no category is
/// created or removed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "successQuotes")]
    Success,
    #[serde(rename = "perseveranceQuotes")]
    Perseverance,
    #[serde(rename = "happinessQuotes")]
    Happiness,
}

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Category; 3] = [Category::Success, Category::Perseverance, Category::Happiness];

    /// Returns the wire name of the category, e.g. `"successQuotes"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Success => "successQuotes",
            Category::Perseverance => "perseveranceQuotes",
            Category::Happiness => "happinessQuotes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory { name: s.to_owned() })
    }
}
