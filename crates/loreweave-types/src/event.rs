//! The event payload produced by the storyteller service.
//!
//! One [`WorldEvent`] is created per pipeline cycle, validated, resolved
//! against the catalog, and discarded. It is never persisted.

use serde::{Deserialize, Serialize};

/// Event kinds the storyteller service is allowed to emit.
///
/// Advertised to the service inside the world snapshot so it constrains its
/// own output. Relocation is currently the only kind, and `event_type` is
/// not branched on downstream: every resolved event moves a character.
pub const ALLOWED_EVENT_KINDS: &[&str] = &["moves"];

/// A structured world action described by the storyteller.
///
/// Wire format is camelCase JSON, matching the service contract:
/// `{"eventType", "location", "character", "eventExplanation"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldEvent {
    /// The kind of event, drawn from [`ALLOWED_EVENT_KINDS`].
    pub event_type: String,
    /// Raw location identifier, normalized at lookup time.
    pub location: String,
    /// Raw character identifier, normalized at lookup time.
    pub character: String,
    /// Free-text narration of the event, fed back into lore revision.
    pub event_explanation: String,
}
