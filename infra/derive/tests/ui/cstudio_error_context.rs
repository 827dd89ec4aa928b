use cstudio_derive::cstudio_error;
use std::borrow::Cow;

#[cstudio_error]
pub enum CatalogError {
    #[error("Catalog file error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Unknown option{}: {message}", format_context(.context))]
    UnknownOption { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, CatalogError> {
    std::fs::read_to_string("/definitely/not/here.json").context("Reading catalog")
}

fn lookup() -> Result<(), CatalogError> {
    Err(CatalogError::UnknownOption { message: "XX".into(), context: None })
}

fn main() {
    let err = read().unwrap_err();
    assert!(err.to_string().starts_with("Catalog file error (Reading catalog): "));

    let err = lookup().context("Toggling").unwrap_err();
    assert_eq!(err.to_string(), "Unknown option (Toggling): XX");
}
