use cstudio_derive::cstudio_error;

#[cstudio_error]
pub enum CatalogError {
    #[error("Catalog file error: {source}")]
    Io {
        source: std::io::Error,
    },
}

fn main() {}
