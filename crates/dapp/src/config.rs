//! Environment-driven configuration.
//!
//! Loaded once at startup; a missing or empty required variable is a
//! fatal configuration error and the process never enters the loop.

use std::path::PathBuf;

use prism_core::codec::PayloadCodec;
use prism_stability::client::{DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_OUTPUT_FORMAT};
use prism_stability::ImageSink;

/// Default path for the file image sink.  Overwritten on every
/// successful generation; nothing else is ever persisted.
pub const DEFAULT_IMAGE_PATH: &str = "/opt/cartesi/dapp/generated_image.jpeg";

/// Startup configuration failure.  Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{var} has unrecognised value {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Process-wide settings, read from the environment.
///
/// | Variable                  | Required | Default                         |
/// |---------------------------|----------|---------------------------------|
/// | `ROLLUP_HTTP_SERVER_URL`  | yes      | --                              |
/// | `STABILITY_API_KEY`       | yes      | --                              |
/// | `STABILITY_API_URL`       | no       | SD3 generation endpoint         |
/// | `STABILITY_MODEL`         | no       | `sd3-large`                     |
/// | `STABILITY_OUTPUT_FORMAT` | no       | `jpeg`                          |
/// | `PAYLOAD_ENCODING`        | no       | `json` (`json` \| `hex`)        |
/// | `IMAGE_OUTPUT`            | no       | `file` (`file` \| `base64`)     |
/// | `GENERATED_IMAGE_PATH`    | no       | `/opt/cartesi/dapp/generated_image.jpeg` |
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the rollup coordination server.
    pub rollup_url: String,
    /// Full URL of the image-generation endpoint.
    pub stability_api_url: String,
    /// Bearer credential for the image-generation API.
    pub stability_api_key: String,
    /// Generation model name.
    pub model: String,
    /// Output image format.
    pub output_format: String,
    /// How request payloads are decoded into prompts.
    pub codec: PayloadCodec,
    /// What happens to a generated image.
    pub sink: ImageSink,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rollup_url = require("ROLLUP_HTTP_SERVER_URL")?;
        let stability_api_key = require("STABILITY_API_KEY")?;

        let stability_api_url =
            std::env::var("STABILITY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let model = std::env::var("STABILITY_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let output_format = std::env::var("STABILITY_OUTPUT_FORMAT")
            .unwrap_or_else(|_| DEFAULT_OUTPUT_FORMAT.into());

        let codec = match std::env::var("PAYLOAD_ENCODING")
            .unwrap_or_else(|_| "json".into())
            .as_str()
        {
            "json" => PayloadCodec::Json,
            "hex" => PayloadCodec::Hex,
            other => {
                return Err(ConfigError::Invalid {
                    var: "PAYLOAD_ENCODING",
                    value: other.to_string(),
                })
            }
        };

        let sink = match std::env::var("IMAGE_OUTPUT")
            .unwrap_or_else(|_| "file".into())
            .as_str()
        {
            "file" => {
                let path = std::env::var("GENERATED_IMAGE_PATH")
                    .unwrap_or_else(|_| DEFAULT_IMAGE_PATH.into());
                ImageSink::File {
                    path: PathBuf::from(path),
                }
            }
            "base64" => ImageSink::Base64,
            other => {
                return Err(ConfigError::Invalid {
                    var: "IMAGE_OUTPUT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            rollup_url,
            stability_api_url,
            stability_api_key,
            model,
            output_format,
            codec,
            sink,
        })
    }
}

/// Read a required environment variable, treating empty as missing.
fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}
