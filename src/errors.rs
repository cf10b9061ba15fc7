use thiserror::Error;

/// A fragment request that never produced a body.
///
/// HTTP error statuses are not represented here: a received response is
/// rendered whatever its status.
#[derive(Debug, Error)]
pub enum FragmentFetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request rejected: {0}")]
    Rejected(String),
}

impl FragmentFetchError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {value:?}: {source}")]
    BaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base url {0:?} cannot carry a path")]
    BaseUrlNotHierarchical(String),

    #[error("invalid {name} value {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{0} needs an argument")]
    MissingArgument(String),

    #[error("unexpected input after command: {0}")]
    TrailingInput(String),
}
