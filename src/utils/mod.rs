//! Output helpers for the command-line program

pub mod display;

pub use display::{usage, ColorOutput};
