#![doc = include_str!("../README.md")]
#![allow(unused_assignments)] // thiserror/miette derive macros trigger false positives

extern crate alloc;

pub mod batch;
pub mod cli;
mod color;
mod error;
mod format;
pub mod global;
mod input;
mod style;

pub use color::{ColorSpec, NamedColor, Role, resolve_color};
pub use error::{BatchError, ColorError};
pub use format::{
    Styled, background_color, combine_colors, font_style, foreground_color, format,
};
pub use style::{StyleSet, resolve_styles};
