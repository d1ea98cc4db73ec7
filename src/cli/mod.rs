//! Command Line Interface (CLI) layer for CLOM.
//!
//! The `clom` binary resolves arguments against a JSON declaration file and
//! prints the typed values, which makes the resolver usable from shell
//! scripts. This module defines argument parsing (`args`), error types
//! (`errors`) and the orchestration logic (`runner`).
//!
//! Rust programs should use the library API (`clom::Parser`) directly.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
