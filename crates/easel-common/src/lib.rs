//! Common utilities for the Easel renderer.
//!
//! This crate provides shared infrastructure used by the drawing backends
//! and the command-line tool:
//! - **Warning System** - colored terminal output for features a backend
//!   can only approximate, printed once and counted after that
//! - **CSS Colors** - parsing of CSS color strings into RGBA components

pub mod color;
pub mod warning;

pub use color::Rgba;
