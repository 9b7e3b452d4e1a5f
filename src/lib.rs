//! # sitepack Core Library
//!
//! This crate provides the core functionality for the `sitepack` deploy packager.
//!
//! It is designed to be used by the `sitepack` command-line application, but its public API
//! can also be used to programmatically package a build directory and verify the result.
//!
//! ## Key Modules
//!
//! - [`pack`]: Walks a build directory and writes its contents into a ZIP archive.
//! - [`verify`]: Re-reads a just-written archive and checks every entry's CRC-32.
//! - [`filter`]: The fixed exclusion rules for hidden and system-metadata entries.
//! - [`report`]: Console status lines and upload instructions.

pub mod cli;
pub mod config;
pub mod filter;
pub mod report;

pub mod error;
pub use error::PackagerError;

pub mod pack;
pub mod verify;
