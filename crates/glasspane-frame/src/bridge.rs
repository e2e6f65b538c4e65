//! Origin-gated message channel between host and embedded content.
//!
//! Inbound events pass through [`deliver`], which consults the *current*
//! props under their lock: the source may change between subscription and
//! message arrival, so the expected origin is re-resolved per event, never
//! cached. Outbound posts go straight to the embedded document's content
//! window, verbatim.

use std::sync::Mutex;

use serde_json::Value;
use tracing::debug;

use crate::embedding::{MessageEvent, SurfaceElement, TransferHandle};
use crate::render::SurfaceProps;

/// Host callback receiving messages that pass the origin gate.
pub type MessageCallback = Box<dyn FnMut(&MessageEvent) + Send>;

/// Deliver one inbound message event through the origin gate.
///
/// The event is dropped when the host has no message callback, when the
/// current source has no resolvable origin (unaddressable content can
/// never be a trusted sender), or when the sender origin differs from the
/// expected origin. Origin comparison is exact string equality, no
/// normalization, no wildcarding. Mismatches are expected cross-context
/// noise, not failures, and are not logged as such.
///
/// The callback runs with the props lock held; hosts must not re-enter
/// the surface's render or props setters from inside it.
pub(crate) fn deliver(props: &Mutex<SurfaceProps>, event: &MessageEvent) {
    let mut props = props.lock().expect("surface props lock poisoned");

    if props.on_message.is_none() {
        return;
    }

    // A malformed source cannot have loaded anything, so there is no
    // trusted sender either; it drops events the same way a blank source
    // does.
    let expected = match props.source.expected_origin() {
        Ok(Some(origin)) => origin,
        Ok(None) | Err(_) => return,
    };

    if event.origin != expected {
        return;
    }

    if let Some(on_message) = props.on_message.as_mut() {
        debug!(origin = %event.origin, "inbound message delivered to host");
        on_message(event);
    }
}

/// Post a message into the embedded document's context.
///
/// Forwards message, target origin, and transferables verbatim. Callers
/// invoke this only after the surface has mounted and rendered; an
/// unresolvable content window is a broken lifecycle contract, not a
/// runtime condition.
pub(crate) fn post(
    element: &dyn SurfaceElement,
    message: Value,
    target_origin: &str,
    transfer: Vec<TransferHandle>,
) {
    let content = element
        .content_window()
        .expect("content window expected to be non-null");
    content.post_message(message, target_origin, transfer);
}
