//! Capability parity with the native backends.
//!
//! The sandboxed-frame primitive exposes no navigation history, load
//! control, or script access to its embedder, so the corresponding
//! cross-backend operations are structurally unimplementable here. Each
//! fails deterministically with [`UnsupportedOperationError`] naming the
//! operation; callers that branch on capability use [`supports`] instead
//! of probing by invocation.

use tracing::debug;

use glasspane_common::{Capability, UnsupportedOperationError};

/// Whether the sandboxed-frame backend implements `capability`.
pub fn supports(capability: Capability) -> bool {
    // Exhaustive so new contract operations must be triaged here.
    match capability {
        Capability::GoBack
        | Capability::GoForward
        | Capability::Reload
        | Capability::StopLoading
        | Capability::InjectJavascript
        | Capability::ExtraNativeComponentConfig => false,
    }
}

/// Uniform failure for an operation this backend cannot provide.
pub(crate) fn reject(operation: Capability) -> UnsupportedOperationError {
    debug!(operation = %operation, "operation rejected: unsupported by the sandboxed-frame backend");
    UnsupportedOperationError { operation }
}
