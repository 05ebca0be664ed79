//! Core application primitives

pub mod runtime;

pub use runtime::*;
