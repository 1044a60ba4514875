//! Hex line formatting for the generated array body.
//!
//! [`format_lines`] turns the raw input bytes into the comma-terminated hex
//! text lines that make up the body of the array literal.

use std::fmt::Write as FmtWrite;

/// Formats `data` as uppercase hex literal lines, `bytes_per_line` per line.
///
/// Returns a lazy iterator over the lines in input order; the last line may
/// hold fewer bytes. Every line carries 4 spaces of indentation, `", "`
/// between literals and a single trailing comma:
///
/// ```
/// use embedgen_core::format::format_lines;
///
/// let lines: Vec<String> = format_lines(&[0xDE, 0xAD, 0xBE, 0xEF], 2).collect();
/// assert_eq!(lines, ["    0xDE, 0xAD,", "    0xBE, 0xEF,"]);
/// ```
///
/// Empty input yields no lines at all.
pub fn format_lines(data: &[u8], bytes_per_line: usize) -> impl Iterator<Item = String> + '_ {
    // chunks() rejects a width of 0
    let width = bytes_per_line.max(1);

    data.chunks(width).map(|chunk| {
        let mut line = String::with_capacity(4 + chunk.len() * 6);
        line.push_str("    ");
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                line.push_str(", ");
            }
            write!(line, "0x{:02X}", byte).expect("String write cannot fail");
        }
        line.push(',');
        line
    })
}
