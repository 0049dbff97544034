//! Command-line interface support for the `lgraph` binary.

pub mod commands;
