//! Domain types representing the four plan categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Fixed identifier of one of the four categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CategoryKey {
    A,
    B,
    C,
    D,
}

impl CategoryKey {
    /// All keys in menu order.
    pub const ALL: [CategoryKey; 4] = [
        CategoryKey::A,
        CategoryKey::B,
        CategoryKey::C,
        CategoryKey::D,
    ];

    /// Built-in display name used until the user renames the category.
    pub fn default_name(self) -> &'static str {
        match self {
            CategoryKey::A => "Class 1",
            CategoryKey::B => "Class 2",
            CategoryKey::C => "Class 3",
            CategoryKey::D => "Class 4",
        }
    }

    pub fn as_char(self) -> char {
        match self {
            CategoryKey::A => 'A',
            CategoryKey::B => 'B',
            CategoryKey::C => 'C',
            CategoryKey::D => 'D',
        }
    }

    /// Case-insensitive lookup from a single command character.
    pub fn from_char(value: char) -> Option<Self> {
        match value.to_ascii_uppercase() {
            'A' => Some(CategoryKey::A),
            'B' => Some(CategoryKey::B),
            'C' => Some(CategoryKey::C),
            'D' => Some(CategoryKey::D),
            _ => None,
        }
    }

    /// Lowercase slug used to name the category's storage file.
    pub fn slug(self) -> String {
        self.as_char().to_ascii_lowercase().to_string()
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error returned when text does not name a category key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategoryKey(pub String);

impl fmt::Display for UnknownCategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}` (expected A, B, C or D)", self.0)
    }
}

impl std::error::Error for UnknownCategoryKey {}

impl FromStr for CategoryKey {
    type Err = UnknownCategoryKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                CategoryKey::from_char(ch).ok_or_else(|| UnknownCategoryKey(trimmed.to_string()))
            }
            _ => Err(UnknownCategoryKey(trimmed.to_string())),
        }
    }
}

/// A category key paired with its current display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: CategoryKey,
    pub name: String,
}

impl Category {
    pub fn new(key: CategoryKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
        }
    }

    /// Category carrying its built-in default name.
    pub fn with_default_name(key: CategoryKey) -> Self {
        Self::new(key, key.default_name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.key, self.name)
    }
}
