//! REST client for the Stability AI `stable-image` generation endpoint.
//!
//! Sends an authenticated `POST` with multipart form fields (`prompt`,
//! `model`, `output_format`) using [`reqwest`], and interprets the
//! response according to the configured [`ImageSink`].

use std::path::PathBuf;

use serde::Deserialize;

/// Default generation endpoint (Stable Diffusion 3).
pub const DEFAULT_API_URL: &str = "https://api.stability.ai/v2beta/stable-image/generate/sd3";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "sd3-large";

/// Default output image format.
pub const DEFAULT_OUTPUT_FORMAT: &str = "jpeg";

/// Where a generated image ends up.
#[derive(Debug, Clone)]
pub enum ImageSink {
    /// Request raw image bytes (`accept: image/*`) and write them to
    /// `path`, overwriting whatever was there before.
    File { path: PathBuf },
    /// Request a JSON body (`accept: application/json`) and relay the
    /// base64 `"image"` field as-is.
    Base64,
}

/// A successfully generated image.  Lives only for one handler
/// invocation; nothing is retained across loop iterations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedImage {
    /// Image bytes were written to this path.
    Saved(PathBuf),
    /// Base64-encoded image bytes, exactly as returned by the API.
    Base64(String),
}

/// Errors from the image-generation layer.
///
/// All of these are non-fatal: the request handler maps them to a
/// rejection rather than letting them take down the loop.
#[derive(Debug, thiserror::Error)]
pub enum StabilityError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Stability API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 200 JSON response without the expected `"image"` field.
    #[error("Stability API response has no \"image\" field")]
    MissingImage,

    /// Writing the image bytes to the local sink path failed.
    #[error("failed to write generated image: {0}")]
    Write(#[from] std::io::Error),
}

/// JSON body returned by the generation endpoint when asked for
/// `application/json`.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    image: Option<String>,
}

/// HTTP client for one Stability AI deployment.
pub struct StabilityClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    output_format: String,
    sink: ImageSink,
}

impl StabilityClient {
    /// Create a new client.
    ///
    /// * `api_url` - full generation endpoint URL (see [`DEFAULT_API_URL`]).
    /// * `api_key` - bearer credential for the `authorization` header.
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        output_format: String,
        sink: ImageSink,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
            output_format,
            sink,
        }
    }

    /// Generate an image for `prompt`.
    ///
    /// On HTTP 200 the response is consumed according to the configured
    /// sink: raw bytes saved to the sink path, or the base64 `"image"`
    /// field extracted from the JSON body.
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage, StabilityError> {
        let accept = match &self.sink {
            ImageSink::File { .. } => "image/*",
            ImageSink::Base64 => "application/json",
        };

        let form = reqwest::multipart::Form::new()
            .text("prompt", prompt.to_owned())
            .text("model", self.model.clone())
            .text("output_format", self.output_format.clone());

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, accept)
            .multipart(form)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;

        match &self.sink {
            ImageSink::File { path } => {
                let bytes = response.bytes().await?;
                tokio::fs::write(path, &bytes).await?;
                tracing::info!(
                    path = %path.display(),
                    bytes = bytes.len(),
                    "Generated image saved"
                );
                Ok(GeneratedImage::Saved(path.clone()))
            }
            ImageSink::Base64 => {
                let body: GenerateResponse = response.json().await?;
                let image = body.image.ok_or(StabilityError::MissingImage)?;
                Ok(GeneratedImage::Base64(image))
            }
        }
    }

    /// Ensure the response has a success status code.  Returns the
    /// response unchanged on success, or a [`StabilityError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, StabilityError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StabilityError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
