//! The storyteller client: four request/response operations over `reqwest`.
//!
//! Each operation serializes a small JSON body, POSTs it with the fixed
//! header pair, and decodes the operation-specific response shape. Success
//! means transport-level success plus a decodable body; payload-level
//! validation (is the event well-formed, does it resolve) belongs to the
//! pipeline, not here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Serialize)]
struct LoreRequest<'a> {
    recent_event: &'a str,
    lore: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoreResponse {
    lore: String,
}

#[derive(Debug, Serialize)]
struct EventRequest<'a> {
    lore: &'a str,
    #[serde(rename = "gameData")]
    game_data: &'a str,
}

/// Response shape shared by `/generate_event` and `/generate_dialogue`.
#[derive(Debug, Deserialize)]
struct EventResponse {
    event: String,
}

#[derive(Debug, Serialize)]
struct DialogueRequest<'a> {
    lore: &'a str,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for the storyteller service.
pub struct StoryClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StoryClient {
    /// Create a client from connection settings.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// POST a body to an endpoint and return the raw response text.
    async fn post_raw<B: Serialize + Sync>(
        &self,
        endpoint: &'static str,
        body: &B,
    ) -> Result<String, ClientError> {
        let url = format!("{}{endpoint}", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("X-Api-Key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                endpoint,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(ClientError::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(|e| ClientError::Transport {
            endpoint,
            message: e.to_string(),
        })
    }

    /// Send an arbitrary question to `/ask`.
    ///
    /// The response body is returned raw; the service does not commit to a
    /// shape for this endpoint.
    pub async fn ask(&self, question: &str) -> Result<String, ClientError> {
        let raw = self.post_raw("/ask", &AskRequest { question }).await?;
        debug!(endpoint = "/ask", bytes = raw.len(), "storyteller answered");
        Ok(raw)
    }

    /// Revise the lore via `/generate_lore`, weaving in a recent event.
    ///
    /// Pass an empty `recent_event` to seed initial lore. Returns the new
    /// lore text; the caller decides where it is stored.
    pub async fn generate_lore(
        &self,
        recent_event: &str,
        lore: &str,
    ) -> Result<String, ClientError> {
        let raw = self
            .post_raw("/generate_lore", &LoreRequest { recent_event, lore })
            .await?;
        decode_lore(&raw)
    }

    /// Request a new world event via `/generate_event`.
    ///
    /// `game_data` is the serialized world snapshot, so the storyteller only
    /// references locations and characters the world can resolve. The
    /// returned text is the raw event payload, possibly fence-wrapped;
    /// parsing it is the pipeline's job.
    pub async fn generate_event(
        &self,
        lore: &str,
        game_data: &str,
    ) -> Result<String, ClientError> {
        let raw = self
            .post_raw("/generate_event", &EventRequest { lore, game_data })
            .await?;
        decode_event("/generate_event", &raw)
    }

    /// Request character dialogue via `/generate_dialogue`.
    ///
    /// The service reuses the event response shape for dialogue.
    pub async fn generate_dialogue(&self, lore: &str) -> Result<String, ClientError> {
        let raw = self
            .post_raw("/generate_dialogue", &DialogueRequest { lore })
            .await?;
        decode_event("/generate_dialogue", &raw)
    }
}

// ---------------------------------------------------------------------------
// Response decoding
// ---------------------------------------------------------------------------

/// Decode the `lore` field from a `/generate_lore` response body.
fn decode_lore(raw: &str) -> Result<String, ClientError> {
    serde_json::from_str::<LoreResponse>(raw)
        .map(|r| r.lore)
        .map_err(|e| ClientError::Decode {
            endpoint: "/generate_lore",
            message: e.to_string(),
        })
}

/// Decode the `event` field from an event-shaped response body.
fn decode_event(endpoint: &'static str, raw: &str) -> Result<String, ClientError> {
    serde_json::from_str::<EventResponse>(raw)
        .map(|r| r.event)
        .map_err(|e| ClientError::Decode {
            endpoint,
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lore_request_serializes_expected_fields() {
        let body = LoreRequest {
            recent_event: "The gladiator moved.",
            lore: "Old tales.",
        };
        let json = serde_json::to_value(&body).ok();
        let expected = serde_json::json!({
            "recent_event": "The gladiator moved.",
            "lore": "Old tales."
        });
        assert_eq!(json, Some(expected));
    }

    #[test]
    fn event_request_uses_game_data_field_name() {
        let body = EventRequest {
            lore: "Old tales.",
            game_data: "{\"locations\":[]}",
        };
        let json = serde_json::to_value(&body).ok();
        let expected = serde_json::json!({
            "lore": "Old tales.",
            "gameData": "{\"locations\":[]}"
        });
        assert_eq!(json, Some(expected));
    }

    #[test]
    fn ask_and_dialogue_requests_serialize() {
        let ask = serde_json::to_value(AskRequest { question: "Who rules?" }).ok();
        assert_eq!(ask, Some(serde_json::json!({"question": "Who rules?"})));

        let dialogue = serde_json::to_value(DialogueRequest { lore: "tales" }).ok();
        assert_eq!(dialogue, Some(serde_json::json!({"lore": "tales"})));
    }

    #[test]
    fn decode_lore_extracts_field() {
        let decoded = decode_lore(r#"{"lore": "A new age dawns."}"#);
        assert!(decoded.is_ok());
        assert_eq!(decoded.unwrap_or_default(), "A new age dawns.");
    }

    #[test]
    fn decode_lore_missing_field_errors() {
        let decoded = decode_lore(r#"{"story": "wrong shape"}"#);
        assert!(matches!(
            decoded,
            Err(ClientError::Decode { endpoint: "/generate_lore", .. })
        ));
    }

    #[test]
    fn decode_event_extracts_field() {
        let decoded = decode_event(
            "/generate_event",
            r#"{"event": "{\"eventType\":\"moves\"}"}"#,
        );
        assert!(decoded.is_ok());
        assert!(decoded.unwrap_or_default().contains("moves"));
    }

    #[test]
    fn decode_event_garbage_errors() {
        let decoded = decode_event("/generate_dialogue", "not json at all");
        assert!(decoded.is_err());
    }
}
