use thiserror::Error;

/// Failure reported by the transport for a query or mutation settlement.
///
/// Carried inside `Result::Err` and handed to the notification surface, so it
/// stays cheap to clone and comparable in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("request timed out")]
    NetworkTimeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    BadStatus(u16),
    #[error("GraphQL error: {0}")]
    GraphQl(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("{typename}: {message}")]
    Rejection { typename: String, message: String },
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Stable identifier, used as the lookup key for translated labels.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NetworkTimeout => "NETWORK_TIMEOUT",
            ErrorKind::Network(_) => "NETWORK",
            ErrorKind::BadStatus(_) => "BAD_STATUS",
            ErrorKind::GraphQl(_) => "GRAPHQL",
            ErrorKind::InvalidResponse(_) => "INVALID_RESPONSE",
            ErrorKind::Rejection { .. } => "REJECTION",
            ErrorKind::Internal(_) => "INTERNAL",
        }
    }
}

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Unknown pending transfer: {0}")]
    UnknownRow(String),
    #[error("Pending transfers are not loaded")]
    NotLoaded,
}

pub type Result<T> = std::result::Result<T, TransferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let kinds = [
            ErrorKind::NetworkTimeout,
            ErrorKind::Network("down".into()),
            ErrorKind::BadStatus(502),
            ErrorKind::GraphQl("boom".into()),
            ErrorKind::InvalidResponse("bad".into()),
            ErrorKind::Rejection {
                typename: "ForbiddenRejection".into(),
                message: "no".into(),
            },
            ErrorKind::Internal("oops".into()),
        ];
        let mut codes: Vec<_> = kinds.iter().map(ErrorKind::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_rejection_display() {
        let err = ErrorKind::Rejection {
            typename: "AccountNotFoundRejection".into(),
            message: "Account not found".into(),
        };
        assert_eq!(err.to_string(), "AccountNotFoundRejection: Account not found");
    }
}
