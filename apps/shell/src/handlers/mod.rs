pub mod apply;
pub mod catalog;
pub mod parse;
