//! # License Notation
//!
//! The compact string form of a selection, as shown next to the selector and stored
//! alongside course content:
//!
//! ```text
//! all-rights-reserved
//! creative-commons: BY NC ND ver=4.0
//! ```
//!
//! Boolean options appear by id when true and are omitted when false; string options
//! appear as `id=value`, with the value double-quoted (`\"` and `\\` escaped) when it
//! contains whitespace, quotes or backslashes. Ids follow the type's `option_order`, then
//! the remaining ids alphabetically. Locked options not mentioned in a parsed string keep
//! their default and cannot be set to anything else.

use crate::error::LicenseError;
use cstudio_domain::{LicenseCatalog, OptionValue, SelectionState, ValueType};
use std::borrow::Cow;
use std::collections::BTreeMap;

const TYPE_SEP: char = ':';
const VALUE_SEP: char = '=';
const QUOTE: char = '"';
const ESCAPE: char = '\\';

/// Renders `state` in license notation. An unset selection renders as an empty string.
#[must_use]
pub fn format_license(catalog: &LicenseCatalog, state: &SelectionState) -> String {
    if state.is_unset() {
        return String::new();
    }

    let ids: Vec<&str> = catalog.get(&state.license_type).map_or_else(
        || state.options.keys().map(String::as_str).collect(),
        |license| {
            let mut ids: Vec<&str> = license.ordered_option_ids().collect();
            let undeclared = state.options.keys().map(String::as_str);
            ids.extend(undeclared.filter(|id| !license.options.contains_key(*id)));
            ids
        },
    );

    let tokens: Vec<String> = ids
        .into_iter()
        .filter_map(|id| match state.option(id)? {
            OptionValue::Bool(true) => Some(id.to_owned()),
            OptionValue::Bool(false) => None,
            OptionValue::Text(value) => Some(format!("{id}{VALUE_SEP}{}", quote(value))),
        })
        .collect();

    if tokens.is_empty() {
        state.license_type.clone()
    } else {
        format!("{}{TYPE_SEP} {}", state.license_type, tokens.join(" "))
    }
}

/// Parses license notation against `catalog`.
///
/// Unknown license types are accepted as custom licenses, provided they carry no options.
///
/// # Errors
/// Returns [`LicenseError::InvalidNotation`] for empty input, unknown option ids,
/// malformed values or quoting, options on a custom license, a locked option set away
/// from its default, or a combination that violates a declared conflict.
pub fn parse_license(catalog: &LicenseCatalog, text: &str) -> Result<SelectionState, LicenseError> {
    let text = text.trim();
    let (license_type, tokens) = text
        .split_once(TYPE_SEP)
        .map_or((text, ""), |(license_type, tokens)| (license_type.trim(), tokens.trim()));

    if license_type.is_empty() {
        return Err(invalid("missing license type".to_owned(), text));
    }

    let Some(license) = catalog.get(license_type) else {
        if !tokens.is_empty() {
            let message = format!("custom license '{license_type}' cannot carry options");
            return Err(invalid(message, text));
        }
        return Ok(SelectionState::bare(license_type));
    };

    let mut options = license
        .options
        .iter()
        .map(|(id, option)| {
            let value = match option.value_type {
                ValueType::Boolean if !option.locked => OptionValue::Bool(false),
                _ => option.default_value.clone(),
            };
            (id.clone(), value)
        })
        .collect::<BTreeMap<_, _>>();

    for token in split_tokens(tokens).map_err(|message| invalid(message, text))? {
        let token = token.as_str();
        let (id, raw) =
            token.split_once(VALUE_SEP).map_or((token, None), |(id, raw)| (id, Some(raw)));
        let option = license
            .get_option(id)
            .ok_or_else(|| invalid(format!("'{id}' is not an option of '{license_type}'"), text))?;

        let value = match (option.value_type, raw) {
            (ValueType::Boolean, None | Some("true")) => OptionValue::Bool(true),
            (ValueType::Boolean, Some("false")) => OptionValue::Bool(false),
            (ValueType::String, Some(raw)) => OptionValue::Text(raw.to_owned()),
            (ValueType::Boolean, Some(raw)) => {
                return Err(invalid(format!("'{raw}' is not a boolean value for '{id}'"), text));
            },
            (ValueType::String, None) => {
                return Err(invalid(format!("'{id}' needs a value"), text));
            },
        };
        if option.locked && value != option.default_value {
            return Err(invalid(format!("'{id}' is locked to {}", option.default_value), text));
        }
        options.insert(id.to_owned(), value);
    }

    let state = SelectionState::new(license_type, options);
    for (id, option) in &license.options {
        if !state.is_truthy(id) {
            continue;
        }
        if let Some(other) = option.conflicts_with.iter().find(|other| state.is_truthy(other)) {
            return Err(invalid(format!("'{id}' cannot be combined with '{other}'"), text));
        }
    }

    Ok(state)
}

fn quote(value: &str) -> Cow<'_, str> {
    if !value.chars().any(|c| c.is_whitespace() || c == QUOTE || c == ESCAPE) {
        return Cow::Borrowed(value);
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(QUOTE);
    for c in value.chars() {
        if c == QUOTE || c == ESCAPE {
            quoted.push(ESCAPE);
        }
        quoted.push(c);
    }
    quoted.push(QUOTE);
    Cow::Owned(quoted)
}

/// Splits on whitespace outside double quotes; quotes are removed, escapes resolved.
fn split_tokens(input: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current: Option<String> = None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            QUOTE => {
                let token = current.get_or_insert_with(String::new);
                loop {
                    match chars.next() {
                        Some(QUOTE) => break,
                        Some(ESCAPE) => match chars.next() {
                            Some(escaped) => token.push(escaped),
                            None => return Err("dangling escape in quoted value".to_owned()),
                        },
                        Some(other) => token.push(other),
                        None => return Err("unterminated quoted value".to_owned()),
                    }
                }
            },
            c if c.is_whitespace() => tokens.extend(current.take()),
            c => current.get_or_insert_with(String::new).push(c),
        }
    }
    tokens.extend(current);
    Ok(tokens)
}

fn invalid(message: String, text: &str) -> LicenseError {
    LicenseError::InvalidNotation { message: message.into(), context: Some(text.to_owned().into()) }
}
