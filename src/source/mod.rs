// Remote source abstraction: pluggable transports for fetching image bytes.

pub mod http_source;
pub mod traits;

pub use http_source::HttpFetcher;
pub use traits::ImageFetcher;
