//! # License Rule Engine
//!
//! Stateless evaluation of a [`LicenseCatalog`] against a [`SelectionState`]. Every
//! operation takes the current state as input and returns the next one; nothing is
//! cached between calls.
//!
//! ## Rules
//! 1. Picking a license type resets its options to the catalog defaults. Options are never
//!    carried over between types.
//! 2. Only boolean options can be toggled. String options change via [`set_option`].
//! 3. Making an option truthy is rejected while any option in its `conflicts_with` set is
//!    truthy in the state *before* the change. Unknown conflict ids read as falsy.
//! 4. Locked options are shown but never change.
//!
//! Rejections are ordinary outcomes ([`Toggle::Rejected`]); errors are reserved for
//! callers that violate the catalog contract (unknown type or option, wrong value type).

use crate::error::LicenseError;
use cstudio_domain::{LicenseCatalog, OptionDescriptor, OptionValue, SelectionState};
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

/// Why a proposed change was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Turning `option` on would clash with the listed, currently truthy options.
    Conflict { option: String, conflicting: Vec<String> },
    /// `option` is locked by the catalog.
    Locked { option: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict { option, conflicting } => {
                write!(f, "option '{option}' conflicts with {}", conflicting.join(", "))
            },
            Self::Locked { option } => write!(f, "option '{option}' is locked"),
        }
    }
}

/// Outcome of an option change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Toggle {
    /// The change is legal; this is the next state.
    Applied(SelectionState),
    /// The change was refused; `state` is the unmodified input.
    Rejected { state: SelectionState, reason: Rejection },
}

impl Toggle {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The resulting state: the new one when applied, the original otherwise.
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        match self {
            Self::Applied(state) | Self::Rejected { state, .. } => state,
        }
    }

    #[must_use]
    pub fn into_state(self) -> SelectionState {
        match self {
            Self::Applied(state) | Self::Rejected { state, .. } => state,
        }
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Applied(_) => None,
            Self::Rejected { reason, .. } => Some(reason),
        }
    }
}

/// Default option values for `type_id`.
///
/// Empty for custom licenses (ids absent from the catalog) and for types without options.
#[must_use]
pub fn defaults_for_type(catalog: &LicenseCatalog, type_id: &str) -> BTreeMap<String, OptionValue> {
    catalog
        .get(type_id)
        .map(|descriptor| {
            descriptor
                .options
                .iter()
                .map(|(id, option)| (id.clone(), option.default_value.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// The state after the user picks `type_id`. Prior options are discarded.
#[must_use]
pub fn select_type(catalog: &LicenseCatalog, type_id: &str) -> SelectionState {
    SelectionState::new(type_id, defaults_for_type(catalog, type_id))
}

/// Flips a boolean option, subject to the conflict and lock rules.
///
/// # Errors
/// * [`LicenseError::UnknownLicenseType`] if `state.license_type` is not in the catalog.
/// * [`LicenseError::UnknownOption`] if the type does not declare `option_id`.
/// * [`LicenseError::NotToggleable`] if the option is not boolean.
pub fn toggle_option(
    catalog: &LicenseCatalog,
    state: &SelectionState,
    option_id: &str,
) -> Result<Toggle, LicenseError> {
    let descriptor = resolve_option(catalog, state, option_id)?;
    if !descriptor.is_boolean() {
        return Err(LicenseError::NotToggleable {
            message: format!("'{option_id}' is a {} option", descriptor.value_type).into(),
            context: Some(state.license_type.clone().into()),
        });
    }

    let proposed = OptionValue::Bool(!state.is_truthy(option_id));
    Ok(propose(state, option_id, descriptor, proposed))
}

/// Assigns an explicit value to an option, subject to the conflict and lock rules.
///
/// # Errors
/// * [`LicenseError::UnknownLicenseType`] / [`LicenseError::UnknownOption`] as for
///   [`toggle_option`].
/// * [`LicenseError::ValueTypeMismatch`] if `value` does not match the option's value type.
pub fn set_option(
    catalog: &LicenseCatalog,
    state: &SelectionState,
    option_id: &str,
    value: impl Into<OptionValue>,
) -> Result<Toggle, LicenseError> {
    let value = value.into();
    let descriptor = resolve_option(catalog, state, option_id)?;
    if value.value_type() != descriptor.value_type {
        return Err(LicenseError::ValueTypeMismatch {
            message: format!(
                "'{option_id}' expects a {} value, got {}",
                descriptor.value_type,
                value.value_type()
            )
            .into(),
            context: Some(state.license_type.clone().into()),
        });
    }

    Ok(propose(state, option_id, descriptor, value))
}

/// Checks that a selection obtained elsewhere (storage, another process) could have
/// been produced by this catalog.
///
/// # Errors
/// Returns [`LicenseError::InvalidSelection`] when a custom license carries options, a
/// declared option is missing or an undeclared one present, a value has the wrong type,
/// a locked option differs from its default, or two conflicting options are both truthy.
pub fn check_selection(
    catalog: &LicenseCatalog,
    state: &SelectionState,
) -> Result<(), LicenseError> {
    let invalid = |message: String| LicenseError::InvalidSelection {
        message: message.into(),
        context: Some(state.license_type.clone().into()),
    };

    let Some(license) = catalog.get(&state.license_type) else {
        return match state.options.keys().next() {
            Some(id) => Err(invalid(format!("custom license carries option '{id}'"))),
            None => Ok(()),
        };
    };

    if let Some(id) = state.options.keys().find(|id| !license.options.contains_key(*id)) {
        return Err(invalid(format!("'{id}' is not declared")));
    }

    for (id, option) in &license.options {
        let value = state.option(id).ok_or_else(|| invalid(format!("'{id}' is missing")))?;
        if value.value_type() != option.value_type {
            return Err(invalid(format!("'{id}' holds a {} value", value.value_type())));
        }
        if option.locked && *value != option.default_value {
            return Err(invalid(format!("locked '{id}' differs from its default")));
        }
        if value.is_truthy()
            && let Some(other) = option.conflicts_with.iter().find(|other| state.is_truthy(other))
        {
            return Err(invalid(format!("'{id}' cannot be combined with '{other}'")));
        }
    }

    Ok(())
}

fn resolve_option<'c>(
    catalog: &'c LicenseCatalog,
    state: &SelectionState,
    option_id: &str,
) -> Result<&'c OptionDescriptor, LicenseError> {
    let license = catalog.get(&state.license_type).ok_or_else(|| {
        LicenseError::UnknownLicenseType {
            message: format!("'{}' has no options", state.license_type).into(),
            context: None,
        }
    })?;

    license.get_option(option_id).ok_or_else(|| LicenseError::UnknownOption {
        message: format!("'{option_id}' is not declared for '{}'", state.license_type).into(),
        context: None,
    })
}

fn propose(
    state: &SelectionState,
    option_id: &str,
    descriptor: &OptionDescriptor,
    proposed: OptionValue,
) -> Toggle {
    if descriptor.locked {
        return Toggle::Rejected {
            state: state.clone(),
            reason: Rejection::Locked { option: option_id.to_owned() },
        };
    }

    if proposed.is_truthy() {
        // Checked against the state as it stood before this change.
        let conflicting: Vec<String> = descriptor
            .conflicts_with
            .iter()
            .filter(|id| id.as_str() != option_id && state.is_truthy(id))
            .cloned()
            .collect();

        if !conflicting.is_empty() {
            return Toggle::Rejected {
                state: state.clone(),
                reason: Rejection::Conflict { option: option_id.to_owned(), conflicting },
            };
        }
    }

    trace!(option = option_id, value = %proposed, "Option change accepted");

    let mut next = state.clone();
    next.options.insert(option_id.to_owned(), proposed);
    Toggle::Applied(next)
}
