pub mod action;
pub mod args;
