//! Sheetcheck - unused React Native StyleSheet detector
//!
//! Sheetcheck is a CLI tool and library that finds style entries declared with
//! `StyleSheet.create({...})` (or a configured equivalent) that no code ever
//! references. Optionally follows imports to check style sheets declared in
//! other modules.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, per-module analysis and cross-module resolution
//! - `issues`: Issue type definitions and reporting
//! - `logging`: `tracing` subscriber setup
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: The unused style rule

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
pub mod mcp;
pub mod rules;
