//! # embedgen-core
//!
//! A library for converting binary files into C byte array source fragments
//! for compile-time embedding.
//!
//! This crate provides the core functionality for:
//! - Deriving a valid array identifier from a filename
//! - Formatting raw bytes as fixed-width uppercase hex lines
//! - Assembling and writing the final `.embed` artifact
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`ident`]: Array identifier derivation
//! - [`format`]: Hex line formatting
//! - [`emit`]: Artifact assembly and file emission
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use embedgen_core::{derive_array_name, emit_file};
//!
//! let array_name = derive_array_name("splash.png");
//! let byte_count = emit_file("splash.png", "Splash.embed", &array_name)?;
//! println!("embedded {} bytes as {}", byte_count, array_name);
//! # Ok::<(), embedgen_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod emit;
pub mod error;
pub mod format;
pub mod ident;

// Re-export primary items for convenience
pub use emit::{emit_file, emit_file_with_config, EmbedArtifact, EmitConfig};
pub use error::{Error, Result};
pub use format::format_lines;
pub use ident::{derive_array_name, size_constant_name};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of data bytes rendered per output line
pub const DEFAULT_BYTES_PER_LINE: usize = 16;
