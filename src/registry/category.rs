//! CI/CD lifecycle categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Plan,
    Code,
    Build,
    Test,
    Release,
    Deploy,
}

/// Display order of the categories in the tool palette.
pub const CATEGORY_ORDER: [Category; 6] = [
    Category::Plan,
    Category::Code,
    Category::Build,
    Category::Test,
    Category::Release,
    Category::Deploy,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Plan => "plan",
            Category::Code => "code",
            Category::Build => "build",
            Category::Test => "test",
            Category::Release => "release",
            Category::Deploy => "deploy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Plan => "Plan",
            Category::Code => "Code",
            Category::Build => "Build",
            Category::Test => "Test",
            Category::Release => "Release",
            Category::Deploy => "Deploy",
        }
    }

    /// Hex color used for the category header and its connector nodes.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Plan => "#8b5cf6",
            Category::Code => "#3b82f6",
            Category::Build => "#f59e0b",
            Category::Test => "#10b981",
            Category::Release => "#ec4899",
            Category::Deploy => "#ef4444",
        }
    }

    /// Position of this category in [`CATEGORY_ORDER`].
    pub fn display_index(&self) -> usize {
        CATEGORY_ORDER
            .iter()
            .position(|c| c == self)
            .unwrap_or(CATEGORY_ORDER.len())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORY_ORDER
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}
