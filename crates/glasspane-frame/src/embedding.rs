//! Seams to the embedding environment.
//!
//! The backend never reaches for platform primitives directly: the host
//! hands it the rendered frame element at mount, and the owning window and
//! the embedded document's content window are resolved through these
//! traits. Tests drive the component with scripted fakes.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Identifier for a registered message listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Platform object accompanying an outbound message (a port, a buffer).
/// Opaque to the backend; forwarded verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransferHandle(pub u64);

/// A message event delivered on the embedding window's message channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEvent {
    /// Origin of the sending context, as reported by the platform.
    pub origin: String,
    /// Payload, passed through unmodified.
    pub data: Value,
}

/// Load event emitted by the frame element when its content finishes
/// loading. Passed through to the host's load callback as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadEvent {
    /// Address the frame was loading.
    pub address: String,
}

/// Listener registered on an embedding window's message channel.
pub type MessageListener = Arc<dyn Fn(&MessageEvent) + Send + Sync>;

/// Window that owns the cross-context message channel the embedded
/// document's messages arrive on.
pub trait EmbeddingWindow: Send + Sync {
    fn add_message_listener(&self, listener: MessageListener) -> ListenerId;
    fn remove_message_listener(&self, id: ListenerId);
}

/// The embedded document's own window, target of outbound posts.
pub trait ContentWindow: Send + Sync {
    fn post_message(&self, message: Value, target_origin: &str, transfer: Vec<TransferHandle>);
}

/// The rendered sandboxed-frame element.
pub trait SurfaceElement: Send + Sync {
    /// Window of the document that contains the element. A mounted element
    /// always has one in a correctly functioning host; `None` means the
    /// element is detached.
    fn owner_window(&self) -> Option<Arc<dyn EmbeddingWindow>>;

    /// Window of the embedded document, resolvable once the element has
    /// rendered its content context.
    fn content_window(&self) -> Option<Arc<dyn ContentWindow>>;

    /// Move input focus to the embedded document.
    fn focus(&self);
}

/// Owned registration on an embedding window's message channel.
///
/// One instance exists per mounted surface; dropping the guard removes the
/// listener, so release happens exactly once no matter how the owner goes
/// away.
pub struct MessageSubscription {
    window: Arc<dyn EmbeddingWindow>,
    id: ListenerId,
}

impl MessageSubscription {
    /// Register `listener` on `window` and take ownership of the
    /// registration.
    pub fn subscribe(window: Arc<dyn EmbeddingWindow>, listener: MessageListener) -> Self {
        let id = window.add_message_listener(listener);
        debug!(id = %id, "message listener subscribed");
        Self { window, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for MessageSubscription {
    fn drop(&mut self) {
        self.window.remove_message_listener(self.id);
        debug!(id = %self.id, "message listener unsubscribed");
    }
}
