use crate::catalog::OptionValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The license currently chosen for a piece of course content.
///
/// `options` is empty for custom licenses and for catalog types without options;
/// otherwise it holds exactly the option ids declared for `license_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(rename = "type")]
    pub license_type: String,
    #[serde(default)]
    pub options: BTreeMap<String, OptionValue>,
}

impl SelectionState {
    pub fn new(license_type: impl Into<String>, options: BTreeMap<String, OptionValue>) -> Self {
        Self { license_type: license_type.into(), options }
    }

    /// A selection without options (custom or option-less license type).
    pub fn bare(license_type: impl Into<String>) -> Self {
        Self::new(license_type, BTreeMap::new())
    }

    #[must_use]
    pub fn option(&self, id: &str) -> Option<&OptionValue> {
        self.options.get(id)
    }

    /// Missing options read as falsy.
    #[must_use]
    pub fn is_truthy(&self, id: &str) -> bool {
        self.options.get(id).is_some_and(OptionValue::is_truthy)
    }

    #[must_use]
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// `true` until a license type has been chosen.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.license_type.is_empty()
    }
}
