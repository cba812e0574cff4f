use crate::error::{ErrorKind, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

/// Reads a GraphQL response envelope (`{ "data": ..., "errors": [...] }`).
///
/// Reading the source can fail with an I/O error. Everything about the
/// payload itself (malformed JSON, GraphQL errors, unknown `__typename`s)
/// is a transport-level `ErrorKind`, since that is what a live transport
/// would report for the same bytes.
pub struct ResponseReader<R: Read> {
    source: R,
}

impl<R: Read> ResponseReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn read<T: DeserializeOwned>(mut self) -> Result<std::result::Result<T, ErrorKind>> {
        let mut raw = String::new();
        self.source.read_to_string(&mut raw)?;
        Ok(decode(&raw))
    }
}

fn decode<T: DeserializeOwned>(raw: &str) -> std::result::Result<T, ErrorKind> {
    let envelope: Envelope =
        serde_json::from_str(raw).map_err(|e| ErrorKind::InvalidResponse(e.to_string()))?;

    if let Some(first) = envelope.errors.into_iter().next() {
        return Err(ErrorKind::GraphQl(first.message));
    }

    let data = envelope
        .data
        .ok_or_else(|| ErrorKind::InvalidResponse("response has no data".to_string()))?;
    serde_json::from_value(data).map_err(|e| ErrorKind::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::InitiateCreditTransfersData;

    fn read(raw: &str) -> std::result::Result<InitiateCreditTransfersData, ErrorKind> {
        ResponseReader::new(raw.as_bytes()).read().unwrap()
    }

    #[test]
    fn test_reader_valid_payload() {
        let raw = r#"{"data":{"initiateCreditTransfers":{
            "__typename":"InitiateCreditTransfersSuccessPayload",
            "payment":{"id":"pay-1","statusInfo":{"__typename":"PaymentRejected","reason":"AccountHolderDeceased"}}
        }}}"#;
        let data = read(raw).unwrap();
        assert_eq!(data.payloads.len(), 1);
    }

    #[test]
    fn test_reader_graphql_errors_win() {
        let raw = r#"{"data":null,"errors":[{"message":"first"},{"message":"second"}]}"#;
        assert_eq!(read(raw), Err(ErrorKind::GraphQl("first".to_string())));
    }

    #[test]
    fn test_reader_missing_data() {
        assert!(matches!(read("{}"), Err(ErrorKind::InvalidResponse(_))));
    }

    #[test]
    fn test_reader_unknown_typename_is_invalid() {
        let raw = r#"{"data":{"initiateCreditTransfers":{"__typename":"SomethingNew"}}}"#;
        match read(raw) {
            Err(ErrorKind::InvalidResponse(detail)) => {
                assert!(detail.contains("SomethingNew"), "{detail}")
            }
            other => panic!("expected InvalidResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_reader_malformed_json() {
        assert!(matches!(read("not json"), Err(ErrorKind::InvalidResponse(_))));
    }
}
