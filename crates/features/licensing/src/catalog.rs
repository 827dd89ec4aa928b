//! # License Catalogs
//!
//! The built-in catalog, catalog validation, and loading catalogs from JSON files.
//!
//! The built-in catalog is an ordinary value. Callers pass it (or any other catalog)
//! explicitly when constructing a [`crate::selector::LicenseSelector`].

use crate::engine::defaults_for_type;
use crate::error::{LicenseError, LicenseErrorExt};
use cstudio_domain::{LicenseCatalog, LicenseTypeDescriptor, OptionDescriptor, OptionValue};
use fxhash::FxHashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub const ALL_RIGHTS_RESERVED: &str = "all-rights-reserved";
pub const CREATIVE_COMMONS: &str = "creative-commons";

/// The catalog offered when no other is configured.
///
/// * `all-rights-reserved`: no options.
/// * `creative-commons`: `ver` (string), `BY` (locked), `NC`, and the mutually exclusive
///   `ND`/`SA` pair.
#[must_use]
pub fn standard_catalog() -> LicenseCatalog {
    LicenseCatalog::new()
        .with_type(
            ALL_RIGHTS_RESERVED,
            LicenseTypeDescriptor::new(
                "All Rights Reserved",
                "You reserve all rights for your work",
            ),
        )
        .with_type(
            CREATIVE_COMMONS,
            LicenseTypeDescriptor::new(
                "Creative Commons",
                "You waive some rights for your work, such that others can use it too",
            )
            .url("//creativecommons.org/about")
            .option("ver", OptionDescriptor::string("Version", "4.0"))
            .option(
                "BY",
                OptionDescriptor::boolean("Attribution", true)
                    .help(
                        "Allow others to copy, distribute, display and perform your copyrighted \
                         work but only if they give credit the way you request.",
                    )
                    .locked(),
            )
            .option(
                "NC",
                OptionDescriptor::boolean("Noncommercial", true).help(
                    "Allow others to copy, distribute, display and perform your work - and \
                     derivative works based upon it - but for noncommercial purposes only.",
                ),
            )
            .option(
                "ND",
                OptionDescriptor::boolean("No Derivatives", true)
                    .help(
                        "Allow others to copy, distribute, display and perform only verbatim \
                         copies of your work, not derivative works based upon it.",
                    )
                    .conflicts_with(["SA"]),
            )
            .option(
                "SA",
                OptionDescriptor::boolean("Share Alike", false)
                    .help(
                        "Allow others to distribute derivative works only under a license \
                         identical to the license that governs your work.",
                    )
                    .conflicts_with(["ND"]),
            )
            .option_order(["BY", "NC", "ND", "SA"]),
        )
}

/// Checks a catalog for schema violations.
///
/// Dangling or one-sided conflict references are legal (the engine treats a missing
/// option as falsy) and only logged.
///
/// # Errors
/// Returns [`LicenseError::InvalidCatalog`] when:
/// * `type_order` or an `option_order` names an undeclared id,
/// * a default value does not match its option's value type,
/// * an option lists itself in `conflicts_with`,
/// * the defaults of a type already violate a declared conflict.
pub fn validate_catalog(catalog: &LicenseCatalog) -> Result<(), LicenseError> {
    if let Some(id) = catalog.type_order.iter().find(|id| !catalog.contains(id)) {
        return Err(invalid(format!("type order names undeclared type '{id}'"), None));
    }

    for (type_id, license) in &catalog.types {
        let type_id = type_id.as_str();
        let declared: FxHashSet<&str> = license.options.keys().map(String::as_str).collect();

        if let Some(id) = license.option_order.iter().find(|id| !declared.contains(id.as_str())) {
            return Err(invalid(
                format!("option order names undeclared option '{id}'"),
                Some(type_id),
            ));
        }

        for (option_id, option) in &license.options {
            if option.default_value.value_type() != option.value_type {
                return Err(invalid(
                    format!(
                        "default of '{option_id}' is {} but the option is {}",
                        option.default_value.value_type(),
                        option.value_type
                    ),
                    Some(type_id),
                ));
            }
            check_conflicts(type_id, license, option_id, option)?;
        }

        let defaults = defaults_for_type(catalog, type_id);
        for (option_id, option) in &license.options {
            let truthy = |id: &str| defaults.get(id).is_some_and(OptionValue::is_truthy);
            if !truthy(option_id.as_str()) {
                continue;
            }
            if let Some(other) = option.conflicts_with.iter().find(|other| truthy(other.as_str())) {
                return Err(invalid(
                    format!("defaults enable both '{option_id}' and conflicting '{other}'"),
                    Some(type_id),
                ));
            }
        }
    }

    Ok(())
}

fn check_conflicts(
    type_id: &str,
    license: &LicenseTypeDescriptor,
    option_id: &str,
    option: &OptionDescriptor,
) -> Result<(), LicenseError> {
    for other in &option.conflicts_with {
        if other == option_id {
            return Err(invalid(format!("'{option_id}' conflicts with itself"), Some(type_id)));
        }
        match license.get_option(other) {
            None => warn!(
                license = type_id,
                option = option_id,
                conflict = %other,
                "Conflict refers to an undeclared option; it will never block"
            ),
            Some(peer) if !peer.conflicts_with.iter().any(|id| id == option_id) => warn!(
                license = type_id,
                option = option_id,
                conflict = %other,
                "Conflict is declared on one side only"
            ),
            Some(_) => {},
        }
    }
    Ok(())
}

fn invalid(message: String, type_id: Option<&str>) -> LicenseError {
    LicenseError::InvalidCatalog {
        message: message.into(),
        context: type_id.map(|id| id.to_owned().into()),
    }
}

/// Parses and validates a catalog from JSON text.
///
/// # Errors
/// Returns [`LicenseError::Serde`] for malformed JSON, or any error of [`validate_catalog`].
pub fn catalog_from_json(json: &str) -> Result<LicenseCatalog, LicenseError> {
    let catalog: LicenseCatalog =
        serde_json::from_str(json).context("Failed to parse license catalog")?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Reads, parses and validates a catalog file.
///
/// # Errors
/// Returns [`LicenseError::Io`] if the file cannot be read, otherwise as
/// [`catalog_from_json`].
pub fn load_catalog(path: impl AsRef<Path>) -> Result<LicenseCatalog, LicenseError> {
    let path = path.as_ref();
    info!("Loading license catalog from {}", path.display());

    let json = fs::read_to_string(path)
        .context(format!("Failed to read catalog file: {}", path.display()))?;
    let catalog = catalog_from_json(&json)?;

    info!(types = catalog.len(), "License catalog loaded");
    Ok(catalog)
}
