//! Keyaudit - translation key parity auditor
//!
//! Keyaudit is a CLI tool and library for comparing locale JSON bundles
//! (English vs. Hebrew translations by default). It flattens each bundle
//! into dot-delimited leaf-key paths and reports key counts, keys missing
//! from the target locale, and extra keys the reference locale lacks.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and the run loop)
//! - `config`: Configuration file loading and parsing
//! - `parsers`: Locale JSON loading and key flattening
//! - `audit`: Set comparison between reference and target locales
//! - `report`: Report formatting and printing

pub mod audit;
pub mod cli;
pub mod config;
pub mod parsers;
pub mod report;
