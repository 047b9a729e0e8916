//! HTTP client for the Loreweave storyteller service.
//!
//! The storyteller is an external AI text-generation service speaking JSON
//! over HTTP. Four POST endpoints under one base URL, all carrying the same
//! fixed header pair (`Content-Type: application/json`, `X-Api-Key`):
//! `/ask`, `/generate_lore`, `/generate_event`, `/generate_dialogue`.
//!
//! Every call returns its own result to the caller that issued it. Transport
//! failures and non-2xx responses surface as [`ClientError`]; there is no
//! retry and no shared "last response" slot to race over.
//!
//! The event pipeline only drives `/generate_event` and `/generate_lore`.
//! [`StoryClient::ask`] and [`StoryClient::generate_dialogue`] cover the
//! rest of the service surface for embedding callers, such as a front end
//! offering free-form questions or character dialogue.
//!
//! [`LoreState`] is the one piece of shared state in the system: the single
//! evolving lore blob both the client callers and the event pipeline read
//! and overwrite, last writer wins.

pub mod client;
pub mod config;
pub mod error;
pub mod lore;

pub use client::StoryClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use lore::LoreState;
