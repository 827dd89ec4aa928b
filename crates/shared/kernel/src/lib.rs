//! Kernel utilities shared by the license selector binaries.
//! Keep this crate lightweight; today it only owns layered config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use cstudio_kernel::config::load_config;
//! use cstudio_kernel::domain::SelectorConfig;
//!
//! let cfg: SelectorConfig = load_config(Some("licsel.toml")).unwrap();
//! println!("initial license: {}", cfg.initial_type);
//! ```
pub mod config;

pub use cstudio_domain as domain;
