//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde` only).
//! Keep it lean: no I/O, networking, or rule evaluation. Just the license catalog schema,
//! the selection state it governs, and application configuration.

pub mod catalog;
pub mod config;
pub mod selection;

pub use catalog::{LicenseCatalog, LicenseTypeDescriptor, OptionDescriptor, OptionValue, ValueType};
pub use config::{LogConfig, SelectorConfig, SelectorConfigInner};
pub use selection::SelectionState;
