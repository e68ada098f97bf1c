// Deterministic locator-to-file-name mapping.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::config::CACHE_KEY_MAX_LEN;

/// Derive a filesystem-safe cache key from a remote locator.
///
/// Base64-encodes the locator's UTF-8 bytes, then strips everything outside
/// `[A-Za-z0-9]` (`+`, `/` and `=` padding). The result is one-way and not
/// reversible. Keys longer than [`CACHE_KEY_MAX_LEN`] keep only the trailing
/// characters, since the tail of the encoding is the part that varies between
/// locators sharing a common prefix.
pub fn derive_cache_key(locator: &str) -> String {
    let encoded = STANDARD.encode(locator.as_bytes());
    let filtered: String = encoded.chars().filter(char::is_ascii_alphanumeric).collect();

    if filtered.len() > CACHE_KEY_MAX_LEN {
        // All characters are ASCII, so byte indexing is safe here.
        filtered[filtered.len() - CACHE_KEY_MAX_LEN..].to_string()
    } else {
        filtered
    }
}
