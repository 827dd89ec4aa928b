//! # License Selection
//!
//! This crate decides which license a piece of course content carries and which of its
//! options may be combined. It is the logic behind the license-selection widget; HTML
//! rendering and persistence stay with the caller.
//!
//! ## Architecture
//!
//! 1.  **Rule engine ([`engine`]):** Stateless functions evaluating a declarative
//!     [`LicenseCatalog`] against a [`SelectionState`]: defaults, type selection, option
//!     toggles with mutual-exclusion checks.
//! 2.  **Catalogs ([`catalog`]):** The built-in catalog, validation, and JSON loading.
//! 3.  **Notation ([`notation`]):** The `creative-commons: BY NC ND` string form.
//! 4.  **Model ([`model`]):** Observable current selection publishing one event per change.
//! 5.  **Selector ([`selector`]):** The widget controller tying the above together behind
//!     a [`selector::Renderer`] seam.
//!
//! ## Example
//!
//! ```rust
//! use cstudio_licensing::catalog::standard_catalog;
//! use cstudio_licensing::engine::{select_type, toggle_option};
//!
//! let catalog = standard_catalog();
//! let state = select_type(&catalog, "creative-commons");
//!
//! // SA conflicts with ND, which is on by default.
//! assert!(!toggle_option(&catalog, &state, "SA")?.is_applied());
//!
//! let state = toggle_option(&catalog, &state, "ND")?.into_state();
//! assert!(toggle_option(&catalog, &state, "SA")?.is_applied());
//! # Ok::<(), cstudio_licensing::LicenseError>(())
//! ```

pub mod catalog;
pub mod engine;
mod error;
pub mod model;
pub mod notation;
pub mod selector;

pub use crate::engine::{Rejection, Toggle};
pub use crate::error::{LicenseError, LicenseErrorExt};
pub use crate::selector::{LicenseSelector, RenderContext, Renderer};
pub use cstudio_domain::{
    LicenseCatalog, LicenseTypeDescriptor, OptionDescriptor, OptionValue, SelectionState, ValueType,
};
