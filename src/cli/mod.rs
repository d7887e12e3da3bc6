//! CLI infrastructure for the oxo binary
//!
//! This module wires the library core to the terminal: command argument
//! parsing, interactive move reading, and progress/output helpers.

pub mod commands;
pub mod input;
pub mod output;
