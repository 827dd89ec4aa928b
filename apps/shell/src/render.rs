use cstudio_licensing::{OptionValue, RenderContext, Renderer};
use std::fmt::Write;

const CUSTOM_LABEL: &str = "Custom license";
const NO_LICENSE: &str = "(no license selected)";

/// Plain-text rendering for the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, context: &RenderContext<'_>) -> String {
        let mut out = if context.license_string.is_empty() {
            NO_LICENSE.to_owned()
        } else {
            context.license_string.to_owned()
        };
        if context.show_preview && !context.state.is_unset() {
            out.push_str("\n\n");
            preview(context, &mut out);
        }
        out
    }
}

fn preview(context: &RenderContext<'_>, out: &mut String) {
    let Some(license) = context.catalog.get(&context.state.license_type) else {
        let _ = write!(out, "{CUSTOM_LABEL}");
        return;
    };

    let _ = writeln!(out, "{}", license.display_name);
    if !license.tooltip.is_empty() {
        let _ = writeln!(out, "  {}", license.tooltip);
    }

    for id in license.ordered_option_ids() {
        let Some(option) = license.get_option(id) else { continue };
        let locked = if option.locked { " (locked)" } else { "" };
        let _ = match context.state.option(id) {
            Some(OptionValue::Bool(on)) => {
                let mark = if *on { 'x' } else { ' ' };
                writeln!(out, "  [{mark}] {id:<4} {}{locked}", option.display_name)
            },
            Some(OptionValue::Text(value)) => {
                writeln!(out, "      {id:<4} {}: {value}{locked}", option.display_name)
            },
            None => writeln!(out, "  [ ] {id:<4} {}{locked}", option.display_name),
        };
    }

    if let Some(url) = &license.url {
        let _ = writeln!(out, "  Learn more: {url}");
    }
    out.truncate(out.trim_end().len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use cstudio_licensing::LicenseSelector;

    #[test]
    fn without_preview_shows_notation_only() {
        let selector = LicenseSelector::builder().initial_type("creative-commons").build();
        assert_eq!(selector.render(&TextRenderer), "creative-commons: BY NC ND ver=4.0");
    }

    #[test]
    fn preview_lists_options_in_order() {
        let selector = LicenseSelector::builder()
            .initial_type("creative-commons")
            .show_preview(true)
            .build();
        let text = selector.render(&TextRenderer);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[2], "Creative Commons");
        assert_eq!(lines[4], "  [x] BY   Attribution (locked)");
        assert_eq!(lines[7], "  [ ] SA   Share Alike");
        assert_eq!(lines[8], "      ver  Version: 4.0");
        assert_eq!(lines[9], "  Learn more: //creativecommons.org/about");
    }

    #[test]
    fn preview_marks_custom_licenses() {
        let selector =
            LicenseSelector::builder().initial_type("my-license").show_preview(true).build();
        assert_eq!(selector.render(&TextRenderer), "my-license\n\nCustom license");
    }
}
