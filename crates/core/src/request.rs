//! Wire types for requests pulled from the rollup coordination server.

use serde::Deserialize;

/// Kind of pending work reported by the rollup server.
///
/// Anything the server sends that is not one of the two known types
/// lands in [`Unknown`](Self::Unknown) instead of failing
/// deserialization, so the loop can reject it and keep polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// A state-advancing input; carries a prompt to turn into an image.
    AdvanceState,
    /// A read-only query; logged and accepted, nothing else.
    InspectState,
    /// A request type this dapp does not recognise.
    #[serde(other)]
    Unknown,
}

/// One pending request as returned by `POST /finish`.
#[derive(Debug, Clone, Deserialize)]
pub struct RollupRequest {
    pub request_type: RequestType,
    pub data: RequestData,
}

/// Payload envelope inside a [`RollupRequest`].
#[derive(Debug, Clone, Deserialize)]
pub struct RequestData {
    /// Opaque payload string; its encoding (JSON object or hex bytes)
    /// depends on the deployment's configured codec.
    pub payload: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_advance_request() {
        let request: RollupRequest = serde_json::from_str(
            r#"{"request_type": "advance_state", "data": {"payload": "0x63617431"}}"#,
        )
        .unwrap();

        assert_eq!(request.request_type, RequestType::AdvanceState);
        assert_eq!(request.data.payload, "0x63617431");
    }

    #[test]
    fn parses_inspect_request() {
        let request: RollupRequest = serde_json::from_str(
            r#"{"request_type": "inspect_state", "data": {"payload": "anything"}}"#,
        )
        .unwrap();

        assert_eq!(request.request_type, RequestType::InspectState);
    }

    #[test]
    fn unrecognised_type_maps_to_unknown() {
        let request: RollupRequest = serde_json::from_str(
            r#"{"request_type": "delete_everything", "data": {"payload": ""}}"#,
        )
        .unwrap();

        assert_eq!(request.request_type, RequestType::Unknown);
    }
}
