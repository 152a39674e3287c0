//! Shared wire types and payload decoding for the prism rollup dapp.
//!
//! Everything in this crate is pure: no I/O, no clients.  The HTTP
//! plumbing lives in `prism-stability` (image generation) and
//! `prism-dapp` (rollup server + polling loop).

pub mod codec;
pub mod request;
pub mod status;
