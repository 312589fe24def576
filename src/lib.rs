//! cmake-tmlanguage - TextMate grammar generation from CMake's help output.
//!
//! This library exposes the core modules for use in integration tests.

pub mod cli;
pub mod cmake;
pub mod config;
pub mod error;
pub mod extract;
pub mod gatherer;
pub mod language;
pub mod logging;
pub mod model;
pub mod render;
