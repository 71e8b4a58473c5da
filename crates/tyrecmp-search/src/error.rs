use thiserror::Error;

/// Failures raised by an [`crate::OfferSource`].
///
/// These carry transport detail for logging and are never shown to users
/// directly; the orchestrator converts them into a [`SearchError`].
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid offer in response: {reason}")]
    InvalidOffer { reason: String },

    #[error("invalid search service URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// User-facing search failure. `Display` is the single message shown to the
/// user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("a search is already in progress")]
    InFlight,

    #[error("server error: {status}")]
    ServerStatus { status: u16 },

    #[error("offer search service is unreachable")]
    Unreachable,

    #[error("unexpected error while reading offers")]
    MalformedResponse,
}

impl From<SourceError> for SearchError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::UnexpectedStatus { status, .. } => SearchError::ServerStatus { status },
            SourceError::Http(ref e) => match e.status() {
                Some(status) => SearchError::ServerStatus {
                    status: status.as_u16(),
                },
                None if e.is_decode() => SearchError::MalformedResponse,
                None => SearchError::Unreachable,
            },
            SourceError::InvalidBaseUrl { .. } => SearchError::Unreachable,
            SourceError::Deserialize { .. } | SourceError::InvalidOffer { .. } => {
                SearchError::MalformedResponse
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_message_embeds_status() {
        let err = SearchError::from(SourceError::UnexpectedStatus {
            status: 503,
            url: "http://localhost/offers/search".to_owned(),
        });
        assert_eq!(err, SearchError::ServerStatus { status: 503 });
        assert_eq!(err.to_string(), "server error: 503");
    }

    #[test]
    fn deserialize_failure_is_malformed() {
        let source = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err = SearchError::from(SourceError::Deserialize {
            context: "offers".to_owned(),
            source,
        });
        assert_eq!(err, SearchError::MalformedResponse);
    }

    #[test]
    fn invalid_offer_is_malformed() {
        let err = SearchError::from(SourceError::InvalidOffer {
            reason: "negative price".to_owned(),
        });
        assert_eq!(err.to_string(), "unexpected error while reading offers");
    }

    #[test]
    fn invalid_base_url_is_unreachable() {
        let err = SearchError::from(SourceError::InvalidBaseUrl {
            base_url: "::".to_owned(),
            reason: "bad".to_owned(),
        });
        assert_eq!(err, SearchError::Unreachable);
    }
}
