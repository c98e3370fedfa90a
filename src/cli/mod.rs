//! Command-line interface helpers for the `dsk` binary.

pub mod commands;
