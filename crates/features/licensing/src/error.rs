use std::borrow::Cow;

/// Error types specific to the licensing feature.
///
/// A toggle blocked by a conflict or a locked option is not an error; see
/// [`crate::engine::Toggle::Rejected`].
#[cstudio_derive::cstudio_error]
pub enum LicenseError {
    /// The selection refers to a license type the catalog does not declare.
    #[error("Unknown license type{}: {message}", format_context(.context))]
    UnknownLicenseType { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The option is not declared for the selected license type.
    #[error("Unknown license option{}: {message}", format_context(.context))]
    UnknownOption { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Only boolean options can be toggled.
    #[error("License option is not toggleable{}: {message}", format_context(.context))]
    NotToggleable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("License option value type mismatch{}: {message}", format_context(.context))]
    ValueTypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A stored selection does not fit the catalog.
    #[error("Invalid license selection{}: {message}", format_context(.context))]
    InvalidSelection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The catalog violates its own schema rules.
    #[error("Invalid license catalog{}: {message}", format_context(.context))]
    InvalidCatalog { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A license string could not be parsed against the catalog.
    #[error("Invalid license notation{}: {message}", format_context(.context))]
    InvalidNotation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Catalog file could not be read.
    #[error("Catalog I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Serde (JSON) error with optional context.
    #[error("Serde serialization error{}: {source}", format_context(.context))]
    Serde { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal licensing error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
