//! Mount/unmount lifecycle and the load-complete transition.

use std::sync::Arc;

use tracing::debug;

use crate::bridge;
use crate::embedding::{LoadEvent, MessageEvent, MessageSubscription, SurfaceElement};
use crate::lifecycle::SurfaceState;

use super::FrameSurface;

impl FrameSurface {
    /// Attach the surface to its rendered element.
    ///
    /// Resolves the embedding window from the element's owning document
    /// and subscribes the message gate to its channel. A mounted element
    /// always has an owning window in a correctly functioning host;
    /// anything else is a broken mount contract. Mounting twice without an
    /// intervening unmount breaks the one-subscription invariant.
    pub fn mount(&mut self, element: Arc<dyn SurfaceElement>) {
        assert!(self.subscription.is_none(), "surface already mounted");

        let window = element
            .owner_window()
            .expect("owner window expected to be non-null");

        let props = Arc::clone(&self.props);
        let listener = Arc::new(move |event: &MessageEvent| bridge::deliver(&props, event));

        self.subscription = Some(MessageSubscription::subscribe(window, listener));
        self.element = Some(element);
        debug!("surface mounted");
    }

    /// Detach the surface, releasing the message-channel subscription.
    ///
    /// Unconditionally safe, including when mount never completed; no
    /// message is delivered after this returns.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            debug!("surface unmounted");
        }
        self.element = None;
    }

    /// Signal from the embedding that the frame finished loading.
    ///
    /// Notifies the host's load callback with the platform event first,
    /// then leaves `Loading`.
    pub fn handle_load_end(&mut self, event: &LoadEvent) {
        {
            let mut props = self.props.lock().expect("surface props lock poisoned");
            if let Some(on_load) = props.on_load.as_mut() {
                on_load(event);
            }
        }
        self.state = SurfaceState::Idle;
        debug!(address = %event.address, "load complete");
    }
}
