//! Networking modules for HTTP actions + the realtime push channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST action calls, `push_client` manages the WebSocket
//! lifecycle, and `types` defines the REST request/response schema. The
//! push-channel schema itself lives in the `events` crate.

pub mod api;
pub mod push_client;
pub mod types;
