use crate::render::TextRenderer;
use cstudio_licensing::LicenseSelector;
use cstudio_licensing::notation::parse_license;
use std::io::Write;

/// Parses license notation and renders it through `selector`.
///
/// # Errors
/// Returns [`cstudio_licensing::LicenseError::InvalidNotation`] for unparsable text, or a
/// write failure.
pub fn parse_notation(
    selector: &mut LicenseSelector,
    text: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let state = parse_license(selector.catalog(), text)?;
    selector.restore(state)?;

    writeln!(out, "{}", selector.render(&TextRenderer))?;
    Ok(())
}
