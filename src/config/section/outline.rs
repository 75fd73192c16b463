//! `[outline]` section: the on-page table of contents.
//!
//! # Example
//!
//! ```toml
//! [outline]
//! level = [2, 3]    # or `2`, or "deep" for 2..=6
//! label = "On this page"
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Inclusive range of heading levels shown in the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLevels {
    pub min: u8,
    pub max: u8,
}

impl HeadingLevels {
    pub const DEEP: Self = Self { min: 2, max: 6 };

    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub const fn single(level: u8) -> Self {
        Self {
            min: level,
            max: level,
        }
    }

    pub fn range(&self) -> RangeInclusive<u8> {
        self.min..=self.max
    }

    pub fn contains(&self, level: u8) -> bool {
        self.range().contains(&level)
    }
}

impl Default for HeadingLevels {
    fn default() -> Self {
        Self::single(2)
    }
}

impl Serialize for HeadingLevels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.min, self.max].serialize(serializer)
    }
}

/// Accepted spellings of `outline.level`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelsRepr {
    Single(u8),
    Range([u8; 2]),
    Named(String),
}

impl<'de> Deserialize<'de> for HeadingLevels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match LevelsRepr::deserialize(deserializer)? {
            LevelsRepr::Single(level) => Ok(Self::single(level)),
            LevelsRepr::Range([min, max]) => Ok(Self::new(min, max)),
            LevelsRepr::Named(name) if name == "deep" => Ok(Self::DEEP),
            LevelsRepr::Named(name) => Err(serde::de::Error::custom(format!(
                "unknown outline level '{name}', expected a number, [min, max] or \"deep\""
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    pub level: HeadingLevels,
    /// Heading shown above the outline.
    pub label: String,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            level: HeadingLevels::default(),
            label: "On this page".into(),
        }
    }
}

impl OutlineConfig {
    pub const LEVEL: FieldPath = FieldPath::new("outline.level");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let HeadingLevels { min, max } = self.level;
        if !(1..=6).contains(&min) || !(1..=6).contains(&max) {
            diag.error(
                Self::LEVEL,
                format!("heading levels [{min}, {max}] must lie within 1..=6"),
            );
        } else if min > max {
            diag.error_with_hint(
                Self::LEVEL,
                format!("heading range [{min}, {max}] is inverted"),
                format!("use [{max}, {min}]"),
            );
        }
    }
}
