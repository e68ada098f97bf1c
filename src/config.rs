use std::path::PathBuf;

use serde::Deserialize;

/// Maximum length of a derived cache key, in characters.
///
/// Longer derivations keep the trailing characters: the tail of a base64
/// encoding varies with the input far more than the head, which is dominated
/// by common URL prefixes shared across locators.
pub const CACHE_KEY_MAX_LEN: usize = 50;

/// Storage roots for the on-disk cache.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Root for ephemeral entries (may be wiped by the platform).
    pub caches_dir: PathBuf,
    /// Root for durable entries.
    pub documents_dir: PathBuf,
}

/// Per-call options controlling where and whether an image is cached.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Store under the caches root rather than the documents root.
    pub store_in_caches: bool,
    /// When false, the cache is never read or written; every fetch hits the
    /// network.
    pub allow_local_storage: bool,
    /// File name to use when no locator is available (pure local save).
    /// Ignored for lookups whenever a locator is present.
    pub custom_file_name: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            store_in_caches: true,
            allow_local_storage: true,
            custom_file_name: None,
        }
    }
}

impl FetchOptions {
    /// Options for a pure local save or delete keyed by an explicit name.
    pub fn with_custom_file_name(name: impl Into<String>) -> Self {
        Self {
            custom_file_name: Some(name.into()),
            ..Self::default()
        }
    }
}
