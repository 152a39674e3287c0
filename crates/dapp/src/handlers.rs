//! Request handlers: resolve one rollup request to accept or reject.

use prism_core::codec::PayloadCodec;
use prism_core::request::{RequestType, RollupRequest};
use prism_core::status::FinishStatus;
use prism_stability::{GeneratedImage, StabilityClient};

/// Routes pending rollup requests to their handler by type.
pub struct Dispatcher {
    codec: PayloadCodec,
    stability: StabilityClient,
}

impl Dispatcher {
    pub fn new(codec: PayloadCodec, stability: StabilityClient) -> Self {
        Self { codec, stability }
    }

    /// Resolve a request to the status reported on the next poll.
    ///
    /// Unknown request types are rejected rather than treated as a
    /// protocol fault, so a newer server cannot wedge the loop.
    pub async fn dispatch(&self, request: &RollupRequest) -> FinishStatus {
        match request.request_type {
            RequestType::AdvanceState => self.handle_advance(&request.data.payload).await,
            RequestType::InspectState => self.handle_inspect(&request.data.payload),
            RequestType::Unknown => {
                tracing::warn!(
                    payload = %request.data.payload,
                    "Unknown request type, rejecting"
                );
                FinishStatus::Reject
            }
        }
    }

    /// Decode the prompt from an advance payload and generate an image
    /// for it.  Decode failures reject without touching the image API.
    async fn handle_advance(&self, payload: &str) -> FinishStatus {
        tracing::info!(payload = %payload, "Received advance request");

        let prompt = match self.codec.decode_prompt(payload) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::error!(error = %e, payload = %payload, "Failed to decode prompt");
                return FinishStatus::Reject;
            }
        };

        match self.stability.generate(&prompt).await {
            Ok(GeneratedImage::Saved(path)) => {
                tracing::info!(path = %path.display(), "Image generated and saved");
                FinishStatus::Accept
            }
            Ok(GeneratedImage::Base64(_)) => {
                tracing::info!("Image generated");
                FinishStatus::Accept
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to generate image");
                FinishStatus::Reject
            }
        }
    }

    /// Inspect requests are logged and accepted unconditionally.
    fn handle_inspect(&self, payload: &str) -> FinishStatus {
        tracing::info!(payload = %payload, "Received inspect request");
        FinishStatus::Accept
    }
}
