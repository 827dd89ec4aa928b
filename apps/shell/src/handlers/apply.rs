use crate::models::action::Action;
use crate::render::TextRenderer;
use anyhow::Context;
use cstudio_licensing::{LicenseSelector, OptionValue, Toggle, ValueType};
use std::io::Write;

/// Runs `actions` against the selector, reporting each outcome, then renders the result.
///
/// Rejected toggles are reported and skipped. An action naming something the current
/// license type does not have aborts the run.
///
/// # Errors
/// Returns the first precondition violation, or a write failure.
pub fn apply_actions(
    selector: &mut LicenseSelector,
    actions: &[Action],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for action in actions {
        let outcome = match action {
            Action::SelectType(id) => {
                selector.select_type(id);
                None
            },
            Action::Toggle(option) => Some(selector.toggle_option(option)),
            Action::Set { option, value } => {
                let value = typed_value(selector, option, value);
                Some(selector.set_option(option, value))
            },
        };

        match outcome.transpose().with_context(|| format!("'{action}' failed"))? {
            Some(Toggle::Rejected { reason, .. }) => writeln!(out, "{action}: rejected, {reason}")?,
            Some(Toggle::Applied(_)) | None => writeln!(out, "{action}: ok")?,
        }
    }

    writeln!(out, "{}", selector.render(&TextRenderer))?;
    Ok(())
}

/// Booleans are typed on the command line as `true`/`false`; everything else is text.
fn typed_value(selector: &LicenseSelector, option: &str, raw: &str) -> OptionValue {
    let declared = selector
        .catalog()
        .get(&selector.state().license_type)
        .and_then(|license| license.get_option(option))
        .map(|descriptor| descriptor.value_type);

    match (declared, raw.parse::<bool>()) {
        (Some(ValueType::Boolean), Ok(flag)) => OptionValue::Bool(flag),
        _ => OptionValue::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[&str]) -> anyhow::Result<String> {
        let actions = actions
            .iter()
            .map(|a| a.parse::<Action>().map_err(anyhow::Error::msg))
            .collect::<Result<Vec<_>, _>>()?;
        let mut selector = LicenseSelector::default();
        let mut out = Vec::new();
        apply_actions(&mut selector, &actions, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn reports_rejections_and_final_license() {
        let out = run(&["type=creative-commons", "toggle=SA", "toggle=ND", "toggle=SA"]).unwrap();
        assert_eq!(
            out,
            "type=creative-commons: ok\n\
             toggle=SA: rejected, option 'SA' conflicts with ND\n\
             toggle=ND: ok\n\
             toggle=SA: ok\n\
             creative-commons: BY NC SA ver=4.0\n"
        );
    }

    #[test]
    fn set_parses_booleans_for_boolean_options() {
        let out = run(&["type=creative-commons", "set=NC:false", "set=ver:3.0"]).unwrap();
        assert!(out.ends_with("creative-commons: BY ND ver=3.0\n"));
    }

    #[test]
    fn unknown_option_aborts() {
        let err = run(&["type=creative-commons", "toggle=PD"]).unwrap_err();
        assert!(err.to_string().contains("'toggle=PD' failed"));
    }
}
