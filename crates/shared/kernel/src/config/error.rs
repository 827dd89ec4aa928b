use std::borrow::Cow;

/// Error raised while assembling layered configuration.
#[cstudio_derive::cstudio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}
