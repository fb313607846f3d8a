//! Grouping dimensions - the semantic meaning of each tag slot.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::UnknownDimension;

/// The four fixed tag-slot categories an item network can be grouped by.
///
/// The dimension of a tag is decided by its slot position, never by its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    /// Slot 0: the broad sphere of life (war, everyday life, culture).
    Sphere,
    /// Slot 1: a person depicted or referenced.
    Person,
    /// Slot 2: a historical period.
    Period,
    /// Slot 3: a theme.
    Theme,
}

impl Dimension {
    /// All dimensions in slot order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Sphere,
        Dimension::Person,
        Dimension::Period,
        Dimension::Theme,
    ];

    /// Position of this dimension's slot in an item's tag list.
    pub fn slot(&self) -> usize {
        match self {
            Dimension::Sphere => 0,
            Dimension::Person => 1,
            Dimension::Period => 2,
            Dimension::Theme => 3,
        }
    }

    /// Canonical name, also used inside cluster node ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Sphere => "Sphere",
            Dimension::Person => "Person",
            Dimension::Period => "Period",
            Dimension::Theme => "Theme",
        }
    }

    /// Dimension stored at the given slot position.
    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDimension(s.to_string()))
    }
}

/// Parse one of the five grouping choices offered to the user.
///
/// An empty string or `"none"` means "no grouping".
pub fn parse_grouping(choice: &str) -> Result<Option<Dimension>, UnknownDimension> {
    let choice = choice.trim();
    if choice.is_empty() || choice.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    choice.parse().map(Some)
}
