use cstudio_derive::cstudio_error;

#[cstudio_error]
pub enum CatalogError {
    Io(std::io::Error),
}

fn main() {}
