//! Host-facing operations on a mounted surface.

use serde_json::Value;

use glasspane_common::{Capability, UnsupportedOperationError};

use crate::bridge;
use crate::capability;
use crate::embedding::TransferHandle;

use super::FrameSurface;

impl FrameSurface {
    /// Move input focus to the embedded document.
    pub fn request_focus(&self) {
        self.element().focus();
    }

    /// Post a message into the embedded document's context.
    ///
    /// Message, target origin, and transferables are forwarded verbatim.
    /// Callers invoke this only after the surface has mounted and
    /// rendered.
    pub fn post_message(&self, message: Value, target_origin: &str, transfer: Vec<TransferHandle>) {
        bridge::post(self.element().as_ref(), message, target_origin, transfer);
    }

    // Cross-backend operations the sandboxed frame cannot provide. Each
    // fails with the operation name and performs no side effect; see
    // [`crate::capability`].

    pub fn go_back(&self) -> Result<(), UnsupportedOperationError> {
        Err(capability::reject(Capability::GoBack))
    }

    pub fn go_forward(&self) -> Result<(), UnsupportedOperationError> {
        Err(capability::reject(Capability::GoForward))
    }

    pub fn reload(&self) -> Result<(), UnsupportedOperationError> {
        Err(capability::reject(Capability::Reload))
    }

    pub fn stop_loading(&self) -> Result<(), UnsupportedOperationError> {
        Err(capability::reject(Capability::StopLoading))
    }

    pub fn inject_javascript(&self) -> Result<(), UnsupportedOperationError> {
        Err(capability::reject(Capability::InjectJavascript))
    }

    pub fn extra_native_component_config(&self) -> Result<(), UnsupportedOperationError> {
        Err(capability::reject(Capability::ExtraNativeComponentConfig))
    }
}
