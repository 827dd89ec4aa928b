use cstudio_licensing::{LicenseCatalog, OptionValue};
use std::io::Write;

/// Lists license types in display order with their options.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn list_catalog(catalog: &LicenseCatalog, out: &mut impl Write) -> anyhow::Result<()> {
    for (id, license) in catalog.ordered_types() {
        writeln!(out, "{id}  {}", license.display_name)?;
        for option_id in license.ordered_option_ids() {
            let Some(option) = license.get_option(option_id) else { continue };
            let default = match &option.default_value {
                OptionValue::Bool(on) => on.to_string(),
                OptionValue::Text(text) => format!("\"{text}\""),
            };
            write!(
                out,
                "  {option_id:<4} {:<16} {} = {default}",
                option.display_name, option.value_type
            )?;
            if option.locked {
                write!(out, ", locked")?;
            }
            if !option.conflicts_with.is_empty() {
                write!(out, ", conflicts with {}", option.conflicts_with.join(" "))?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
