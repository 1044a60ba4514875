//! embedgen - Convert binary files into C byte array source for embedding
//!
//! This tool reads a binary file and writes a `.embed` text artifact that
//! declares the bytes as a `const uint8_t` array plus a matching size
//! constant, ready for direct inclusion into a native source file.

use anyhow::{bail, Context, Result};
use clap::Parser;
use embedgen_core::{derive_array_name, emit_file_with_config, EmitConfig};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Extension forced onto every output path
const EMBED_EXTENSION: &str = "embed";

/// Convert binary files into C byte array source for compile-time embedding
#[derive(Parser, Debug)]
#[command(name = "embedgen")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:
  embedgen data.bin                    # Creates Buffer.embed
  embedgen image.png image_data.embed  # Creates image_data.embed
  embedgen -n SplashPng image.png      # Uses 'SplashPng' as the array name")]
struct Cli {
    /// Input binary file to convert
    #[arg(value_name = "INPUT")]
    input_file: PathBuf,

    /// Output .embed file (the extension is always forced to .embed)
    #[arg(value_name = "OUTPUT", default_value = "Buffer.embed")]
    output_file: PathBuf,

    /// Custom name for the array variable (used verbatim, no prefix added)
    #[arg(short, long, value_name = "IDENT")]
    name: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Exclude the comment header block from the output
    #[arg(long)]
    no_header: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    run(&cli)
}

/// Converts a single input file according to the parsed arguments
fn run(cli: &Cli) -> Result<()> {
    let input = cli.input_file.as_path();
    if !input.exists() {
        bail!("Input file does not exist: {}", input.display());
    }
    if !input.is_file() {
        bail!("Input path is not a regular file: {}", input.display());
    }

    let output = force_embed_extension(&cli.output_file);
    let array_name = match &cli.name {
        Some(name) => name.clone(),
        None => derive_array_name(&input.to_string_lossy()),
    };

    info!("Converting '{}' -> '{}'", input.display(), output.display());
    info!("Array name: {}", array_name);

    let config = EmitConfig::new().include_header(!cli.no_header);
    let byte_count = emit_file_with_config(input, &output, &array_name, &config)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    println!(
        "Converted {} bytes to '{}'",
        group_digits(byte_count),
        output.display()
    );

    if let Some(file_name) = output.file_name() {
        info!("Include in C++: #include \"{}\"", file_name.to_string_lossy());
    }

    Ok(())
}

/// Forces the `.embed` extension onto the output path
fn force_embed_extension(path: &Path) -> PathBuf {
    let mut output = path.to_path_buf();
    output.set_extension(EMBED_EXTENSION);
    output
}

/// Formats a count with thousands separators (1234567 -> "1,234,567")
fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_force_embed_extension() {
        assert_eq!(
            force_embed_extension(Path::new("data.bin")),
            Path::new("data.embed")
        );
        assert_eq!(
            force_embed_extension(Path::new("data.txt")),
            Path::new("data.embed")
        );
        assert_eq!(
            force_embed_extension(Path::new("Buffer.embed")),
            Path::new("Buffer.embed")
        );
        assert_eq!(
            force_embed_extension(Path::new("plain")),
            Path::new("plain.embed")
        );
        assert_eq!(
            force_embed_extension(Path::new("out/dir/image.png")),
            Path::new("out/dir/image.embed")
        );
        assert_eq!(
            force_embed_extension(Path::new("archive.tar.gz")),
            Path::new("archive.tar.embed")
        );
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(18), "18");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }

    #[test]
    fn test_run_converts_file_with_derived_name() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("font.bin");
        fs::write(&input, (0u8..=0x11).collect::<Vec<u8>>()).unwrap();
        // The supplied extension gets coerced to .embed
        let output = dir.path().join("Font.bin");

        let cli = Cli::parse_from([
            "embedgen",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);
        run(&cli).unwrap();

        let content = fs::read_to_string(dir.path().join("Font.embed")).unwrap();
        assert!(content.contains("// Generated from: font.bin"));
        assert!(content.contains("const uint8_t g_font[] = {"));
        assert!(content.contains("const size_t g_font_Size = sizeof(g_font);"));
    }

    #[test]
    fn test_run_no_header_and_explicit_name() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("blob.bin");
        fs::write(&input, [0xFFu8; 4]).unwrap();
        let output = dir.path().join("blob.embed");

        let cli = Cli::parse_from([
            "embedgen",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--name",
            "FontData",
            "--no-header",
        ]);
        run(&cli).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("const uint8_t FontData[] = {"));
        assert!(!content.contains("#include"));
        assert!(!content.contains("//"));
    }

    #[test]
    fn test_run_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.bin");
        let output = dir.path().join("Absent.embed");

        let cli = Cli::parse_from([
            "embedgen",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);
        assert!(run(&cli).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
