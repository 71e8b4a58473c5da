use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Rejections raised while turning raw user input into a [`crate::SearchRequest`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("select at least one vendor site before searching")]
    NoVendorsSelected,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("exported CSV payload is not valid UTF-8")]
    Encoding,
}
