//! Reading and rendering configuration
//!
//! Options are plain values with builder-style setters; defaults live in
//! [`defaults`].

pub mod defaults;
mod options;

pub use options::{ReadOptions, RenderOptions, TextEncoding};
