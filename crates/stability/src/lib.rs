//! Stability AI image-generation client library.
//!
//! Wraps the `stable-image` generation endpoint: authenticated
//! multipart submission of a prompt plus generation parameters, with
//! the response interpreted either as raw image bytes to save locally
//! or as a base64 payload to relay.

pub mod client;

pub use client::{GeneratedImage, ImageSink, StabilityClient, StabilityError};
