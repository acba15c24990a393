//! Request/response DTOs for the REST action surface.
//!
//! These mirror the backend's action endpoints so serde round-trips stay
//! lossless. Push-channel payloads are owned by the `events` crate.

use serde::{Deserialize, Serialize};

use events::ParticipantId;

/// Body of `POST /api/ai/activate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivateRequest {
    /// Participant to bring online.
    pub ai_id: ParticipantId,
}

/// Uniform action response returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Whether the action was carried out.
    pub success: bool,
    /// Server-supplied failure message when the action was refused.
    #[serde(default)]
    pub error: Option<String>,
}
