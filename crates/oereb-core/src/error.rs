pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required configuration key is absent.
    #[error("Missing required configuration key: {key}")]
    MissingConfig { key: &'static str },

    /// A configuration value is present but unusable (non-positive map
    /// size, non-finite buffer), or a geometry extent cannot be fitted to
    /// the configured map aspect ratio.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A URL failed validation; no network call was attempted.
    #[error("URL seems to be not valid. URL was: {url}")]
    InvalidUrl { url: String },

    /// The WMS server answered with a status other than 200.
    #[error("The image could not be downloaded. URL was: {url}, Response was {body}")]
    RemoteLookup { url: String, body: String },

    /// The WMS request failed below the HTTP layer (DNS resolution,
    /// refused connection, timeout, truncated body).
    #[error("WMS request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
