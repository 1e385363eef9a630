//! # Nameshift: Parse-Verified Naming Convention Converter
//!
//! A library for safely renaming identifiers in Python source code to match
//! per-identifier-kind naming conventions. The defining property of the
//! system is the re-parse guard: a rewritten file is committed to disk only
//! after the rewritten text parses, and is otherwise left byte-for-byte
//! untouched.
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     ConversionPipeline                     │
//! ├────────────────────────────────────────────────────────────┤
//! │  Discovery   │  Extraction  │   Policy    │    Rewrite     │
//! │              │              │             │                │
//! │ • ignore     │ • tree-sitter│ • skip rules│ • token spans  │
//! │ • globset    │ • kind rules │ • per-kind  │ • re-parse     │
//! │              │              │   targets   │   guard        │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nameshift::{ConversionPipeline, NamingPreferences};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let preferences = NamingPreferences::preset("python_standard").unwrap();
//!     let mut pipeline = ConversionPipeline::new(preferences)?;
//!     let report = pipeline.convert_directory("./src")?;
//!
//!     println!(
//!         "converted {} names in {} files",
//!         report.total_conversions, report.files_processed
//!     );
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]

// Core conversion engine modules
pub mod core {
    //! Naming policy, style conversion, and the rewrite pipeline.

    pub mod config;
    pub mod discovery;
    pub mod errors;
    pub mod file_utils;
    pub mod pipeline;
    pub mod policy;
    pub mod rewrite;
    pub mod style;
}

// Language-specific AST adapters
pub mod lang {
    //! Language-specific parsing and identifier extraction.

    pub mod common;
    pub mod python;
}

// Re-export primary types for convenience
pub use crate::core::config::NamingPreferences;
pub use crate::core::errors::{NameshiftError, Result};
pub use crate::core::pipeline::{ConversionPipeline, ConversionReport};
pub use crate::core::policy::NamingPolicy;
pub use crate::core::style::NamingStyle;
pub use crate::lang::common::{IdentifierKind, IdentifierOccurrence};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
