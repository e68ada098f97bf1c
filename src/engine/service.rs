// Fetch-or-load orchestration: cache lookup, network fallback, batch
// sequencing, and explicit save/delete.

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use reqwest::Url;
use tracing::{debug, warn};

use super::key::derive_cache_key;
use super::store::DiskStore;
use crate::config::{FetchOptions, StoreConfig};
use crate::error::FetchError;
use crate::source::{HttpFetcher, ImageFetcher};

/// Outcome of a single fetch: the bytes, or the kind of failure.
pub type FetchResult = Result<Bytes, FetchError>;

/// Image service combining a remote fetcher with the on-disk store.
///
/// Single fetches read the cache when allowed and fall back to the network,
/// persisting what they fetched. Batches run strictly one item at a time so
/// no two fetches ever touch the store concurrently and progress callbacks
/// arrive in index order.
pub struct ImageService {
    fetcher: Arc<dyn ImageFetcher>,
    store: DiskStore,
}

impl ImageService {
    /// Service backed by the default HTTP transport.
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_fetcher(config, Arc::new(HttpFetcher::new()))
    }

    /// Service backed by a caller-supplied transport.
    pub fn with_fetcher(config: &StoreConfig, fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self {
            fetcher,
            store: DiskStore::new(config),
        }
    }

    /// Resolve the local path an image would occupy, without touching disk
    /// or network. `None` when neither a locator nor a custom file name is
    /// available.
    pub fn local_file_url(&self, locator: Option<&str>, options: &FetchOptions) -> Option<PathBuf> {
        self.resolve_location(locator, options).ok()
    }

    /// Fetch a single image: from the cache when present and allowed,
    /// otherwise from the network, persisting the result when allowed.
    pub async fn fetch_image(&self, locator: Option<&str>, options: &FetchOptions) -> FetchResult {
        let location = self.resolve_location(locator, options)?;

        if options.allow_local_storage && self.store.exists(&location).await {
            debug!("cache hit at {}", location.display());
            // A broken entry masks the remote source until deleted; there is
            // no network fallback here.
            return self
                .store
                .read(&location)
                .await
                .map_err(FetchError::LocalRead);
        }

        let url = parse_locator(locator)?;
        debug!("cache miss, fetching {}", url);
        let bytes = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if options.allow_local_storage {
            // Persist failures never fail the fetch; the bytes are returned
            // either way.
            if let Err(e) = self.store.write(&location, &bytes).await {
                warn!("failed to cache {}: {}", location.display(), e);
            }
        }

        Ok(bytes)
    }

    /// Fetch an ordered batch strictly sequentially.
    ///
    /// `on_item` is invoked once per element in increasing index order, never
    /// overlapping; element `i + 1` is not started until `on_item` for `i`
    /// has returned. `on_complete` fires once after the last item. `None`
    /// entries resolve like a fetch without a locator.
    pub async fn fetch_batch_images<F, C>(
        &self,
        locators: &[Option<String>],
        options: &FetchOptions,
        mut on_item: F,
        on_complete: C,
    ) where
        F: FnMut(FetchResult, usize),
        C: FnOnce(),
    {
        for (index, locator) in locators.iter().enumerate() {
            let result = self.fetch_image(locator.as_deref(), options).await;
            on_item(result, index);
        }
        on_complete();
    }

    /// Remove a cached image. Returns `false` both when no entry exists and
    /// when removal fails.
    pub async fn delete_image(&self, locator: Option<&str>, options: &FetchOptions) -> bool {
        match self.try_delete(locator, options).await {
            Ok(()) => true,
            Err(e) => {
                debug!("delete skipped: {}", e);
                false
            }
        }
    }

    /// Delete every entry for a list of locators. Individual failures are
    /// swallowed; every item is attempted.
    pub async fn delete_batch_images(&self, locators: &[Option<String>], options: &FetchOptions) {
        for locator in locators {
            if let Err(e) = self.try_delete(locator.as_deref(), options).await {
                debug!("batch delete skipped entry: {}", e);
            }
        }
    }

    /// Delete entries keyed by explicit custom file names, one option set per
    /// entry. Sets without a custom name are skipped.
    pub async fn delete_batch_by_names(&self, option_sets: &[FetchOptions]) {
        for options in option_sets {
            if options.custom_file_name.is_none() {
                warn!("delete_batch_by_names entry without custom_file_name skipped");
                continue;
            }
            if let Err(e) = self.try_delete(None, options).await {
                debug!("batch delete skipped entry: {}", e);
            }
        }
    }

    /// Persist caller-supplied bytes under `options.custom_file_name`.
    /// Returns `false` when the name is missing or the write fails.
    pub async fn save(&self, bytes: &[u8], options: &FetchOptions) -> bool {
        match self.try_save(bytes, options).await {
            Ok(()) => true,
            Err(e) => {
                warn!("save failed: {}", e);
                false
            }
        }
    }

    async fn try_save(&self, bytes: &[u8], options: &FetchOptions) -> Result<(), FetchError> {
        if options.custom_file_name.is_none() {
            return Err(FetchError::NoTarget);
        }
        let location = self.resolve_location(None, options)?;
        self.store
            .write(&location, bytes)
            .await
            .map_err(FetchError::LocalWrite)
    }

    async fn try_delete(
        &self,
        locator: Option<&str>,
        options: &FetchOptions,
    ) -> Result<(), FetchError> {
        let location = self.resolve_location(locator, options)?;
        if !self.store.exists(&location).await {
            return Err(FetchError::NotFound);
        }
        self.store.delete(&location).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FetchError::NotFound
            } else {
                FetchError::LocalWrite(e)
            }
        })
    }

    /// Compute the storage location for a locator/options pair. The derived
    /// key always wins over `custom_file_name` when a locator is present.
    fn resolve_location(
        &self,
        locator: Option<&str>,
        options: &FetchOptions,
    ) -> Result<PathBuf, FetchError> {
        let name = match locator.map(derive_cache_key) {
            // An empty derivation (empty locator) is "no key".
            Some(key) if !key.is_empty() => key,
            _ => options
                .custom_file_name
                .clone()
                .ok_or(FetchError::NoTarget)?,
        };
        Ok(self.store.resolve(&name, options))
    }
}

/// Parse the locator into a URL for the remote step. A missing locator at
/// this point means a custom-name lookup missed the cache and there is
/// nothing to fetch.
fn parse_locator(locator: Option<&str>) -> Result<Url, FetchError> {
    let locator = locator.ok_or_else(|| FetchError::MalformedUrl("no locator".into()))?;
    Url::parse(locator).map_err(|e| FetchError::MalformedUrl(format!("{}: {}", locator, e)))
}
