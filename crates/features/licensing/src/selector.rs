//! # License Selector
//!
//! The controller behind a license-selection widget: it owns the catalog, the observable
//! [`LicenseModel`], and the preview flag, and turns user interactions into engine calls.
//!
//! Rendering is delegated to a [`Renderer`], a pure function of [`RenderContext`] that
//! never writes back to the selection.
//!
//! ## Example
//!
//! ```rust
//! use cstudio_licensing::catalog::standard_catalog;
//! use cstudio_licensing::selector::LicenseSelector;
//!
//! let mut selector = LicenseSelector::builder()
//!     .catalog(standard_catalog())
//!     .initial_type("creative-commons")
//!     .build();
//!
//! let outcome = selector.toggle_option("SA").unwrap();
//! assert!(!outcome.is_applied()); // ND is on, and SA conflicts with it
//! assert_eq!(selector.license_string(), "creative-commons: BY NC ND ver=4.0");
//! ```

use crate::catalog::{ALL_RIGHTS_RESERVED, standard_catalog};
use crate::engine::{self, Toggle};
use crate::error::LicenseError;
use crate::model::{LicenseEvent, LicenseModel};
use crate::notation::format_license;
use cstudio_domain::{LicenseCatalog, OptionValue, SelectionState};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;
use typed_builder::TypedBuilder;

/// Everything a renderer may look at.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub catalog: &'a LicenseCatalog,
    pub state: &'a SelectionState,
    /// The selection in license notation.
    pub license_string: &'a str,
    pub show_preview: bool,
}

/// Turns the selector state into something displayable.
pub trait Renderer {
    type Output;

    fn render(&self, context: &RenderContext<'_>) -> Self::Output;
}

/// Construction parameters of a [`LicenseSelector`].
#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = LicenseSelector))]
pub struct SelectorOptions {
    /// Catalog the selector evaluates against.
    #[builder(default = standard_catalog())]
    catalog: LicenseCatalog,
    /// Type selected at start, with its default options.
    #[builder(default = ALL_RIGHTS_RESERVED.to_owned(), setter(into))]
    initial_type: String,
    #[builder(default = false)]
    show_preview: bool,
}

impl From<SelectorOptions> for LicenseSelector {
    fn from(options: SelectorOptions) -> Self {
        let state = engine::select_type(&options.catalog, &options.initial_type);
        Self {
            catalog: options.catalog,
            model: LicenseModel::new(state),
            show_preview: options.show_preview,
        }
    }
}

#[derive(Debug)]
pub struct LicenseSelector {
    catalog: LicenseCatalog,
    model: LicenseModel,
    show_preview: bool,
}

impl Default for LicenseSelector {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LicenseSelector {
    /// Returns a builder; every field has a default.
    #[must_use]
    pub fn builder() -> SelectorOptionsBuilder {
        SelectorOptions::builder()
    }

    #[must_use]
    pub const fn catalog(&self) -> &LicenseCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        self.model.get()
    }

    #[must_use]
    pub const fn show_preview(&self) -> bool {
        self.show_preview
    }

    /// Subscribes a dependent view to selection changes.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<LicenseEvent>> {
        self.model.subscribe()
    }

    #[must_use]
    pub fn license_string(&self) -> String {
        format_license(&self.catalog, self.model.get())
    }

    /// Resumes a previously stored selection.
    ///
    /// Publishes [`LicenseEvent::TypeChanged`] when the selection differs from the
    /// current one.
    ///
    /// # Errors
    /// Returns [`LicenseError::InvalidSelection`] if `state` could not have been produced
    /// by this selector's catalog; the current selection is kept.
    pub fn restore(&mut self, state: SelectionState) -> Result<&SelectionState, LicenseError> {
        engine::check_selection(&self.catalog, &state)?;
        debug!(license = %state.license_type, "Stored selection restored");
        self.model.replace(state);
        Ok(self.model.get())
    }

    /// Picks a license type, resetting its options to the catalog defaults.
    pub fn select_type(&mut self, type_id: &str) -> &SelectionState {
        let next = engine::select_type(&self.catalog, type_id);
        debug!(
            license = type_id,
            custom = !self.catalog.contains(type_id),
            "License type selected"
        );
        self.model.replace(next);
        self.model.get()
    }

    /// Flips a boolean option of the current type.
    ///
    /// # Errors
    /// See [`engine::toggle_option`].
    pub fn toggle_option(&mut self, option_id: &str) -> Result<Toggle, LicenseError> {
        let outcome = engine::toggle_option(&self.catalog, self.model.get(), option_id)?;
        self.commit(option_id, &outcome);
        Ok(outcome)
    }

    /// Assigns an option value of the current type.
    ///
    /// # Errors
    /// See [`engine::set_option`].
    pub fn set_option(
        &mut self,
        option_id: &str,
        value: impl Into<OptionValue>,
    ) -> Result<Toggle, LicenseError> {
        let outcome = engine::set_option(&self.catalog, self.model.get(), option_id, value)?;
        self.commit(option_id, &outcome);
        Ok(outcome)
    }

    pub fn render<R: Renderer>(&self, renderer: &R) -> R::Output {
        let license_string = self.license_string();
        renderer.render(&RenderContext {
            catalog: &self.catalog,
            state: self.model.get(),
            license_string: &license_string,
            show_preview: self.show_preview,
        })
    }

    fn commit(&mut self, option_id: &str, outcome: &Toggle) {
        match outcome {
            Toggle::Applied(state) => {
                self.model.commit_options(state.clone());
            },
            Toggle::Rejected { reason, .. } => {
                debug!(
                    license = %self.model.get().license_type,
                    option = option_id,
                    %reason,
                    "Option change rejected"
                );
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    struct Summary;

    impl Renderer for Summary {
        type Output = String;

        fn render(&self, context: &RenderContext<'_>) -> String {
            format!("{} preview={}", context.license_string, context.show_preview)
        }
    }

    #[test]
    fn defaults_to_all_rights_reserved() {
        let selector = LicenseSelector::default();
        assert_eq!(selector.state(), &SelectionState::bare(ALL_RIGHTS_RESERVED));
        assert!(!selector.show_preview());
        assert_eq!(selector.catalog(), &standard_catalog());
    }

    #[test]
    fn restore_replaces_the_selection() {
        let stored = SelectionState::bare("my-license");
        let mut selector = LicenseSelector::builder().initial_type("creative-commons").build();
        let mut rx = selector.subscribe();

        assert_eq!(selector.restore(stored.clone()).unwrap(), &stored);
        assert_eq!(*rx.try_recv().unwrap(), LicenseEvent::TypeChanged { state: stored });
    }

    #[test]
    fn restore_refuses_conflicting_state() {
        let mut selector = LicenseSelector::builder().initial_type("creative-commons").build();
        let before = selector.state().clone();
        let mut rx = selector.subscribe();

        let mut stored = before.clone();
        stored.options.insert("SA".into(), OptionValue::Bool(true));

        let err = selector.restore(stored).unwrap_err();
        assert!(matches!(err, LicenseError::InvalidSelection { .. }));
        assert_eq!(selector.state(), &before);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn one_event_per_successful_toggle_none_on_rejection() {
        let mut selector = LicenseSelector::builder().initial_type("creative-commons").build();
        let mut rx = selector.subscribe();

        assert!(!selector.toggle_option("SA").unwrap().is_applied());
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

        assert!(selector.toggle_option("ND").unwrap().is_applied());
        let event = rx.try_recv().unwrap();
        assert!(matches!(*event, LicenseEvent::OptionsChanged { .. }));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn select_type_publishes_type_changed() {
        let mut selector = LicenseSelector::default();
        let mut rx = selector.subscribe();

        let state = selector.select_type("creative-commons").clone();
        assert_eq!(state.options.len(), 5);

        let event = rx.try_recv().unwrap();
        assert_eq!(*event, LicenseEvent::TypeChanged { state });
    }

    #[test]
    fn render_sees_current_state() {
        let mut selector = LicenseSelector::builder().show_preview(true).build();
        assert_eq!(selector.render(&Summary), "all-rights-reserved preview=true");

        selector.select_type("creative-commons");
        selector.set_option("ver", "3.0").unwrap();
        assert_eq!(selector.render(&Summary), "creative-commons: BY NC ND ver=3.0 preview=true");
    }

    #[test]
    fn errors_leave_state_untouched() {
        let mut selector = LicenseSelector::default();
        let before = selector.state().clone();
        assert!(selector.toggle_option("BY").is_err());
        assert_eq!(selector.state(), &before);
    }
}
