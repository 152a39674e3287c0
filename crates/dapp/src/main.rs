//! `prism-dapp` -- rollup-driven image-generation worker.
//!
//! Polls a Cartesi rollup coordination server for pending requests,
//! turns advance-request prompts into images via the Stability AI API,
//! and reports accept/reject outcomes back on the next poll.
//!
//! # Environment variables
//!
//! | Variable                  | Required | Default                         |
//! |---------------------------|----------|---------------------------------|
//! | `ROLLUP_HTTP_SERVER_URL`  | yes      | --                              |
//! | `STABILITY_API_KEY`       | yes      | --                              |
//! | `STABILITY_API_URL`       | no       | SD3 generation endpoint         |
//! | `STABILITY_MODEL`         | no       | `sd3-large`                     |
//! | `STABILITY_OUTPUT_FORMAT` | no       | `jpeg`                          |
//! | `PAYLOAD_ENCODING`        | no       | `json` (`json` \| `hex`)        |
//! | `IMAGE_OUTPUT`            | no       | `file` (`file` \| `base64`)     |
//! | `GENERATED_IMAGE_PATH`    | no       | `/opt/cartesi/dapp/generated_image.jpeg` |

use prism_dapp::config::Config;
use prism_dapp::handlers::Dispatcher;
use prism_dapp::poller;
use prism_dapp::rollup::RollupClient;
use prism_stability::StabilityClient;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prism_dapp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration error");
            std::process::exit(1);
        }
    };

    tracing::info!(
        rollup_url = %config.rollup_url,
        model = %config.model,
        codec = ?config.codec,
        sink = ?config.sink,
        "Starting prism-dapp",
    );

    let stability = StabilityClient::new(
        config.stability_api_url,
        config.stability_api_key,
        config.model,
        config.output_format,
        config.sink,
    );
    let rollup = RollupClient::new(config.rollup_url);
    let dispatcher = Dispatcher::new(config.codec, stability);

    poller::run(&rollup, &dispatcher).await;
}
