//! Explicit field descriptor records.
//!
//! Each record carries the display label, the field identifier (used as the
//! input's `name` attribute), and the current value or checked flag. No
//! identifier uniqueness is enforced anywhere; colliding names are the
//! consuming form logic's problem.

use serde::{Deserialize, Serialize};

/// Descriptor for a text input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField {
    /// Display label
    pub label: String,
    /// Field identifier (the `name` attribute)
    pub id: String,
    /// Current value
    pub value: String,
}

impl TextField {
    /// Create a text field descriptor
    #[must_use]
    pub fn new(label: impl Into<String>, id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Descriptor for a password input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordField {
    /// Display label
    pub label: String,
    /// Field identifier (the `name` attribute)
    pub id: String,
    /// Current value
    pub value: String,
}

impl PasswordField {
    /// Create a password field descriptor
    #[must_use]
    pub fn new(label: impl Into<String>, id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Descriptor for a number input.
///
/// The value is kept as its rendered string; the constructor accepts anything
/// displayable so callers can pass integers directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberField {
    /// Display label
    pub label: String,
    /// Field identifier (the `name` attribute)
    pub id: String,
    /// Current value, as rendered
    pub value: String,
}

impl NumberField {
    /// Create a number field descriptor
    #[must_use]
    pub fn new(label: impl Into<String>, id: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
            value: value.to_string(),
        }
    }
}

/// Descriptor for a checkbox input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxField {
    /// Display label
    pub label: String,
    /// Field identifier (the `name` attribute)
    pub id: String,
    /// Whether the box starts checked
    pub checked: bool,
}

impl CheckboxField {
    /// Create a checkbox field descriptor
    #[must_use]
    pub fn new(label: impl Into<String>, id: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
            checked,
        }
    }
}
