use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration of the license selector front end.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfigInner {
    /// JSON catalog to load instead of the built-in one.
    pub catalog: Option<PathBuf>,
    /// License type selected when the editing session starts.
    pub initial_type: String,
    /// Whether renderers should show a preview of the chosen license.
    pub show_preview: bool,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    #[serde(flatten, default)]
    inner: Arc<SelectorConfigInner>,
}

impl Deref for SelectorConfig {
    type Target = SelectorConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SelectorConfig {
    fn deref_mut(&mut self) -> &mut SelectorConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging knobs handed to the logger builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
    /// Optional env-filter directives, e.g. `cstudio_licensing=debug`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when absent.
    pub path: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for SelectorConfigInner {
    fn default() -> Self {
        Self {
            catalog: None,
            initial_type: "all-rights-reserved".to_owned(),
            show_preview: false,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, path: None, json: false }
    }
}
