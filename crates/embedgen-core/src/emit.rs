//! Artifact assembly and emission.
//!
//! This module turns a fully buffered input into the final `.embed` text
//! artifact and writes it to disk.
//!
//! ## Artifact layout
//!
//! The whole artifact is assembled in memory before a single write:
//!
//! ```text
//! // Generated from: splash.png
//! // Size: 18 bytes
//!
//! #include <cstdint>
//!
//! const uint8_t g_splash[] = {
//!     0x00, 0x01, ...
//! };
//!
//! const size_t g_splash_Size = sizeof(g_splash);
//! ```
//!
//! The comment header block is optional; everything from the array
//! declaration on is the durable contract consumed by native builds.

use crate::error::{Error, Result};
use crate::format::format_lines;
use crate::ident::size_constant_name;
use crate::DEFAULT_BYTES_PER_LINE;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Configuration for artifact rendering
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Include the comment header block (source name, byte count, include directive)
    pub include_header: bool,
    /// Number of data bytes rendered per line
    pub bytes_per_line: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            include_header: true,
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
        }
    }
}

impl EmitConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the comment header block is included
    pub fn include_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Sets the number of bytes per rendered line (clamped to at least 1)
    pub fn bytes_per_line(mut self, n: usize) -> Self {
        self.bytes_per_line = n.max(1);
        self
    }
}

/// A fully buffered embedding artifact ready to be rendered.
///
/// Owns the input bytes together with the names that appear in the generated
/// declarations. Rendering is pure: the same artifact always renders to the
/// same text, which is what makes emission idempotent.
#[derive(Debug)]
pub struct EmbedArtifact {
    /// Input file name shown in the header comment
    source_name: String,
    /// Identifier for the array declaration
    array_name: String,
    /// The embedded bytes
    data: Vec<u8>,
    /// Rendering configuration
    config: EmitConfig,
}

impl EmbedArtifact {
    /// Creates a new artifact with the default configuration
    pub fn new(
        source_name: impl Into<String>,
        array_name: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            array_name: array_name.into(),
            data,
            config: EmitConfig::default(),
        }
    }

    /// Replaces the rendering configuration
    pub fn with_config(mut self, config: EmitConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the array identifier
    pub fn array_name(&self) -> &str {
        &self.array_name
    }

    /// Returns the number of embedded input bytes
    pub fn byte_count(&self) -> usize {
        self.data.len()
    }

    /// Renders the artifact as the complete output file content
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.write_to(&mut output).expect("String write cannot fail");
        output
    }

    /// Writes the rendered artifact to a writer
    pub fn write_to(&self, w: &mut impl FmtWrite) -> std::fmt::Result {
        if self.config.include_header {
            writeln!(w, "// Generated from: {}", self.source_name)?;
            writeln!(w, "// Size: {} bytes", self.data.len())?;
            writeln!(w)?;
            writeln!(w, "#include <cstdint>")?;
            writeln!(w)?;
        }

        writeln!(w, "const uint8_t {}[] = {{", self.array_name)?;
        for line in format_lines(&self.data, self.config.bytes_per_line) {
            writeln!(w, "{}", line)?;
        }
        writeln!(w, "}};")?;
        writeln!(w)?;
        writeln!(
            w,
            "const size_t {} = sizeof({});",
            size_constant_name(&self.array_name),
            self.array_name
        )?;

        Ok(())
    }
}

/// Converts `input` into an `.embed` artifact at `output` with defaults.
///
/// This is a convenience wrapper around [`emit_file_with_config`].
pub fn emit_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    array_name: &str,
) -> Result<usize> {
    emit_file_with_config(input, output, array_name, &EmitConfig::default())
}

/// Converts `input` into an `.embed` artifact at `output`.
///
/// Reads the whole input into memory, assembles the artifact text, then
/// overwrites `output` with a single write. Parent directories are not
/// created; the only observable effect is the one output file. Returns the
/// count of input bytes processed.
///
/// # Errors
///
/// [`Error::InputNotFound`] if `input` is not an existing regular file,
/// [`Error::FileRead`] and [`Error::FileWrite`] for I/O failures. The output
/// file is untouched unless the final write begins.
pub fn emit_file_with_config(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    array_name: &str,
    config: &EmitConfig,
) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.is_file() {
        return Err(Error::input_not_found(input));
    }

    trace!("Reading {}", input.display());
    let data = fs::read(input).map_err(|e| Error::file_read(input, e))?;
    debug!("Read {} bytes from {}", data.len(), input.display());

    let source_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let artifact = EmbedArtifact::new(source_name, array_name, data).with_config(config.clone());
    let content = artifact.render();

    fs::write(output, content).map_err(|e| Error::file_write(output, e))?;
    debug!(
        "Wrote {} ({} input bytes)",
        output.display(),
        artifact.byte_count()
    );

    Ok(artifact.byte_count())
}
