//! Array identifier derivation.
//!
//! Maps arbitrary filenames onto valid C identifiers for the generated array
//! declaration. The mapping is deterministic and total: every input,
//! including empty strings and unicode-heavy names, produces a usable
//! identifier.

use std::path::Path;

/// Prefix applied to every derived array name.
///
/// Keeps generated identifiers out of the way of reserved words and makes
/// their origin recognizable in consuming source.
pub const NAME_PREFIX: &str = "g_";

/// Fallback stem used when sanitization leaves nothing behind
pub const FALLBACK_STEM: &str = "Buffer";

/// Derives the array identifier for a filename.
///
/// The filename stem (directory and final extension stripped) is sanitized
/// by replacing every non-alphanumeric character with `_`, then prefixed
/// with [`NAME_PREFIX`]. A stem that sanitizes to nothing falls back to
/// [`FALLBACK_STEM`].
///
/// The prefix also guarantees the identifier never starts with a digit, so a
/// stem like `3d-model` needs no special case.
///
/// ```
/// use embedgen_core::ident::derive_array_name;
///
/// assert_eq!(derive_array_name("3d-model.bin"), "g_3d_model");
/// assert_eq!(derive_array_name("assets/icon.png"), "g_icon");
/// assert_eq!(derive_array_name(""), "g_Buffer");
/// ```
pub fn derive_array_name(filename: &str) -> String {
    let stem = match Path::new(filename).file_stem() {
        Some(stem) => stem.to_string_lossy(),
        None => "".into(),
    };

    let sanitized: String = stem
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();

    if sanitized.is_empty() {
        format!("{}{}", NAME_PREFIX, FALLBACK_STEM)
    } else {
        format!("{}{}", NAME_PREFIX, sanitized)
    }
}

/// Returns the name of the size constant declared alongside `array_name`
pub fn size_constant_name(array_name: &str) -> String {
    format!("{}_Size", array_name)
}
