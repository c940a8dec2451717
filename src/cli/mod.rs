//! Command-line support for the `adjm` tool.

pub mod commands;
