use thiserror::Error;

/// Why a cache or fetch operation failed.
///
/// Every public operation resolves to a definite outcome; these kinds replace
/// the collapsed "no data" signal with enough detail to tell a dead network
/// from a broken cache entry.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Neither a locator nor a custom file name was supplied.
    #[error("no locator and no custom file name")]
    NoTarget,

    /// A network fetch was required but the locator is missing or not a
    /// well-formed URL.
    #[error("locator is not a well-formed url: {0}")]
    MalformedUrl(String),

    /// The transport failed: DNS, connection, non-2xx status or body read.
    #[error("network fetch failed: {0}")]
    Network(String),

    /// A cache entry exists but could not be read. The entry masks the
    /// remote source until it is deleted.
    #[error("local read failed")]
    LocalRead(#[source] std::io::Error),

    /// Writing bytes to the cache failed.
    #[error("local write failed")]
    LocalWrite(#[source] std::io::Error),

    /// The location to delete does not exist.
    #[error("no cache entry at the resolved location")]
    NotFound,
}
