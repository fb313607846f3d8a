//! Tag slots - the four positional tags every item carries.

use serde::{Deserialize, Serialize};

use super::Dimension;
use crate::error::DataIntegrityError;

/// The tags of an item, one optional value per dimension.
///
/// On the wire this is a positional array of up to four strings where an
/// empty string marks an empty slot; in memory every slot is named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TagSlots {
    pub sphere: Option<String>,
    pub person: Option<String>,
    pub period: Option<String>,
    pub theme: Option<String>,
}

impl TagSlots {
    /// Create tag slots from positional values; empty strings become empty slots.
    pub fn new(sphere: &str, person: &str, period: &str, theme: &str) -> Self {
        Self {
            sphere: non_empty(sphere),
            person: non_empty(person),
            period: non_empty(period),
            theme: non_empty(theme),
        }
    }

    /// Set a single slot.
    pub fn with(mut self, dimension: Dimension, value: &str) -> Self {
        *self.slot_mut(dimension) = non_empty(value);
        self
    }

    /// Get the value stored for a dimension.
    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Sphere => self.sphere.as_deref(),
            Dimension::Person => self.person.as_deref(),
            Dimension::Period => self.period.as_deref(),
            Dimension::Theme => self.theme.as_deref(),
        }
    }

    fn slot_mut(&mut self, dimension: Dimension) -> &mut Option<String> {
        match dimension {
            Dimension::Sphere => &mut self.sphere,
            Dimension::Person => &mut self.person,
            Dimension::Period => &mut self.period,
            Dimension::Theme => &mut self.theme,
        }
    }

    /// Non-empty values in slot order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        Dimension::ALL.into_iter().filter_map(|d| self.get(d))
    }

    /// Check if any slot holds the given value. An empty value never matches.
    pub fn contains(&self, value: &str) -> bool {
        !value.is_empty() && self.values().any(|v| v == value)
    }

    /// Check if two tag collections share at least one non-empty value,
    /// regardless of which slots hold it.
    pub fn shares_any(&self, other: &TagSlots) -> bool {
        self.values().any(|v| other.contains(v))
    }

    /// Check if every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.values().next().is_none()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl TryFrom<Vec<String>> for TagSlots {
    type Error = DataIntegrityError;

    fn try_from(values: Vec<String>) -> Result<Self, Self::Error> {
        if values.len() > Dimension::ALL.len() {
            return Err(DataIntegrityError::TooManyTagSlots {
                count: values.len(),
            });
        }

        let mut slots = TagSlots::default();
        for (slot, value) in values.iter().enumerate() {
            if let Some(dimension) = Dimension::from_slot(slot) {
                *slots.slot_mut(dimension) = non_empty(value);
            }
        }
        Ok(slots)
    }
}

impl From<TagSlots> for Vec<String> {
    fn from(slots: TagSlots) -> Self {
        vec![
            slots.sphere.unwrap_or_default(),
            slots.person.unwrap_or_default(),
            slots.period.unwrap_or_default(),
            slots.theme.unwrap_or_default(),
        ]
    }
}
