//! Core scaffolding engine.
//!
//! This module holds everything with design content: the template registry,
//! the path resolver, the generation plans and the materializer. The CLI in
//! `main.rs` is a thin dispatcher over these pieces.

pub mod error;
pub mod plan;
pub mod project;
pub mod scaffold;
pub mod templates;

pub use error::{Error, Result};
