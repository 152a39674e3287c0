//! Prompt extraction from rollup request payloads.
//!
//! Two payload encodings exist in deployed frontends: a JSON object
//! carrying a `"prompt"` field, and a `0x`-prefixed hex string whose
//! decoded bytes are the UTF-8 prompt.  Which one a deployment speaks
//! is chosen by configuration; the rest of the loop is identical.

use serde::Deserialize;

/// Strategy for decoding a request payload into a prompt string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadCodec {
    /// Payload is a JSON object with a `"prompt"` string field.
    Json,
    /// Payload is a hex string (optionally `0x`-prefixed) of UTF-8 bytes.
    Hex,
}

/// Why a payload could not be decoded into a prompt.
///
/// Every variant is recoverable: the handler logs it and rejects the
/// request instead of faulting the loop.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not valid JSON, or `"prompt"` is not a string.
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload carries no prompt, or the prompt is empty.
    #[error("no prompt provided")]
    MissingPrompt,

    /// The payload is not valid hex (odd digit count, stray characters).
    #[error("payload is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// The hex-decoded bytes are not valid UTF-8.
    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Deserialize)]
struct PromptPayload {
    #[serde(default)]
    prompt: Option<String>,
}

impl PayloadCodec {
    /// Decode a payload into a non-empty prompt string.
    pub fn decode_prompt(&self, payload: &str) -> Result<String, DecodeError> {
        let prompt = match self {
            PayloadCodec::Json => {
                let parsed: PromptPayload = serde_json::from_str(payload)?;
                parsed.prompt.ok_or(DecodeError::MissingPrompt)?
            }
            PayloadCodec::Hex => {
                let digits = payload.strip_prefix("0x").unwrap_or(payload);
                let bytes = hex::decode(digits)?;
                String::from_utf8(bytes)?
            }
        };

        if prompt.is_empty() {
            return Err(DecodeError::MissingPrompt);
        }
        Ok(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn json_payload_with_prompt() {
        let prompt = PayloadCodec::Json
            .decode_prompt(r#"{"prompt": "a cat in space"}"#)
            .unwrap();
        assert_eq!(prompt, "a cat in space");
    }

    #[test]
    fn json_payload_without_prompt_field() {
        let err = PayloadCodec::Json.decode_prompt(r#"{"other": 1}"#);
        assert_matches!(err, Err(DecodeError::MissingPrompt));
    }

    #[test]
    fn json_payload_with_empty_prompt() {
        let err = PayloadCodec::Json.decode_prompt(r#"{"prompt": ""}"#);
        assert_matches!(err, Err(DecodeError::MissingPrompt));
    }

    #[test]
    fn malformed_json_payload() {
        let err = PayloadCodec::Json.decode_prompt("{not json");
        assert_matches!(err, Err(DecodeError::Json(_)));
    }

    #[test]
    fn json_payload_with_non_string_prompt() {
        let err = PayloadCodec::Json.decode_prompt(r#"{"prompt": 42}"#);
        assert_matches!(err, Err(DecodeError::Json(_)));
    }

    #[test]
    fn hex_payload_round_trips() {
        // "cat1" = 0x63617431
        let prompt = PayloadCodec::Hex.decode_prompt("0x63617431").unwrap();
        assert_eq!(prompt, "cat1");
    }

    #[test]
    fn hex_payload_without_prefix() {
        let prompt = PayloadCodec::Hex.decode_prompt("63617431").unwrap();
        assert_eq!(prompt, "cat1");
    }

    #[test]
    fn hex_payload_with_odd_digit_count() {
        let err = PayloadCodec::Hex.decode_prompt("0x123");
        assert_matches!(err, Err(DecodeError::Hex(_)));
    }

    #[test]
    fn hex_payload_with_non_hex_characters() {
        let err = PayloadCodec::Hex.decode_prompt("0xzz");
        assert_matches!(err, Err(DecodeError::Hex(_)));
    }

    #[test]
    fn hex_payload_with_invalid_utf8() {
        let err = PayloadCodec::Hex.decode_prompt("0xff");
        assert_matches!(err, Err(DecodeError::Utf8(_)));
    }

    #[test]
    fn empty_hex_payload() {
        let err = PayloadCodec::Hex.decode_prompt("0x");
        assert_matches!(err, Err(DecodeError::MissingPrompt));
    }
}
