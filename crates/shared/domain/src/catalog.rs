//! Declarative license catalog schema.
//!
//! A catalog is plain data: which license types exist, which options each type carries,
//! their value types, defaults and mutual-exclusion rules. Nothing here evaluates rules;
//! the licensing feature interprets the catalog generically.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value type of a license option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
    String,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("boolean"),
            Self::String => f.write_str("string"),
        }
    }
}

/// Current or default value of a license option.
///
/// Serialized untagged, so JSON `true` and `"4.0"` map directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
}

impl OptionValue {
    /// Truthiness used by conflict checks: `true`, or a non-empty string.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => !s.is_empty(),
        }
    }

    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Boolean,
            Self::Text(_) => ValueType::String,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Bool(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Schema of a single option within a license type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDescriptor {
    pub display_name: String,
    pub value_type: ValueType,
    pub default_value: OptionValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Options that must not be truthy at the same time as this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts_with: Vec<String>,
    /// Displayed but not user-toggleable.
    #[serde(default)]
    pub locked: bool,
}

impl OptionDescriptor {
    /// A boolean option with the given default.
    pub fn boolean(display_name: impl Into<String>, default: bool) -> Self {
        Self {
            display_name: display_name.into(),
            value_type: ValueType::Boolean,
            default_value: OptionValue::Bool(default),
            help_text: None,
            conflicts_with: Vec::new(),
            locked: false,
        }
    }

    /// A free-form string option with the given default.
    pub fn string(display_name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value_type: ValueType::String,
            default_value: OptionValue::Text(default.into()),
            help_text: None,
            conflicts_with: Vec::new(),
            locked: false,
        }
    }

    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn conflicts_with<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conflicts_with.extend(ids.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self.value_type, ValueType::Boolean)
    }
}

/// Schema of one license type (e.g. "creative-commons").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseTypeDescriptor {
    pub display_name: String,
    pub tooltip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, OptionDescriptor>,
    /// Display and evaluation order of the interactive options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_order: Vec<String>,
}

impl LicenseTypeDescriptor {
    pub fn new(display_name: impl Into<String>, tooltip: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            tooltip: tooltip.into(),
            url: None,
            options: BTreeMap::new(),
            option_order: Vec::new(),
        }
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn option(mut self, id: impl Into<String>, descriptor: OptionDescriptor) -> Self {
        self.options.insert(id.into(), descriptor);
        self
    }

    #[must_use]
    pub fn option_order<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.option_order = ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    #[must_use]
    pub fn get_option(&self, id: &str) -> Option<&OptionDescriptor> {
        self.options.get(id)
    }

    /// Declared option ids: those named in `option_order` first, the rest alphabetically.
    pub fn ordered_option_ids(&self) -> impl Iterator<Item = &str> {
        let ordered = self
            .option_order
            .iter()
            .map(String::as_str)
            .filter(|id| self.options.contains_key(*id));
        let rest = self
            .options
            .keys()
            .map(String::as_str)
            .filter(|id| !self.option_order.iter().any(|o| o == id));
        ordered.chain(rest)
    }
}

/// Mapping from license-type id to its descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseCatalog {
    pub types: BTreeMap<String, LicenseTypeDescriptor>,
    /// Display order of license types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_order: Vec<String>,
}

impl LicenseCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a license type, appending it to the display order.
    #[must_use]
    pub fn with_type(mut self, id: impl Into<String>, descriptor: LicenseTypeDescriptor) -> Self {
        let id = id.into();
        if !self.type_order.contains(&id) {
            self.type_order.push(id.clone());
        }
        self.types.insert(id, descriptor);
        self
    }

    #[must_use]
    pub fn get(&self, type_id: &str) -> Option<&LicenseTypeDescriptor> {
        self.types.get(type_id)
    }

    /// `false` means `type_id` denotes a custom license.
    #[must_use]
    pub fn contains(&self, type_id: &str) -> bool {
        self.types.contains_key(type_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Types in display order: `type_order` first, the rest alphabetically.
    pub fn ordered_types(&self) -> impl Iterator<Item = (&str, &LicenseTypeDescriptor)> {
        let ordered = self
            .type_order
            .iter()
            .filter_map(|id| self.types.get_key_value(id.as_str()));
        let rest = self.types.iter().filter(|(id, _)| !self.type_order.contains(*id));
        ordered.chain(rest).map(|(id, descriptor)| (id.as_str(), descriptor))
    }
}
