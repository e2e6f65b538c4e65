//! Sandboxed-frame backend of the glasspane embeddable browser surface.
//!
//! Renders host-chosen content inside a sandboxed embedded document and
//! provides:
//! - Load lifecycle tracking (idle / loading / error) driving an optional
//!   loading overlay
//! - An origin-gated message channel between host and embedded content
//! - Verbatim outbound posting into the embedded document's context
//! - Typed rejection of cross-backend operations the sandbox cannot
//!   support (history, reload, script injection)
//!
//! The embedding primitives (window, frame element, content window) are
//! injected through the traits in [`embedding`]; the backend owns only the
//! lifecycle and the message-channel subscription.

pub mod bridge;
pub mod capability;
pub mod embedding;
pub mod lifecycle;
pub mod render;
pub mod source;
pub mod surface;

pub use bridge::MessageCallback;
pub use capability::supports;
pub use embedding::{
    ContentWindow, EmbeddingWindow, ListenerId, LoadEvent, MessageEvent, MessageListener,
    MessageSubscription, SurfaceElement, TransferHandle,
};
pub use lifecycle::SurfaceState;
pub use render::{LoadCallback, LoadingRenderer, LoadingView, NativeConfig, RenderPlan, SurfaceProps};
pub use source::{ContentSource, BLANK_ADDRESS};
pub use surface::FrameSurface;
