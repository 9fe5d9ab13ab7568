//! Tool categories.

use std::fmt;
use std::str::FromStr;

use crate::domains::catalog::error::CatalogError;

/// A category on the tools directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    Converters,
    Calculators,
    TextTools,
    DeveloperTools,
    Generators,
    Lookups,
}

impl CategoryId {
    /// Every category in directory order.
    pub const ALL: [CategoryId; 6] = [
        Self::Converters,
        Self::Calculators,
        Self::TextTools,
        Self::DeveloperTools,
        Self::Generators,
        Self::Lookups,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Converters => "converters",
            Self::Calculators => "calculators",
            Self::TextTools => "text-tools",
            Self::DeveloperTools => "developer-tools",
            Self::Generators => "generators",
            Self::Lookups => "lookups",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Converters => "Unit Converters",
            Self::Calculators => "Calculators",
            Self::TextTools => "Text Tools",
            Self::DeveloperTools => "Developer Tools",
            Self::Generators => "Generators",
            Self::Lookups => "Lookups",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CategoryId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| CatalogError::unknown_category(s))
    }
}
