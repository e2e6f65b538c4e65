//! The sandboxed-frame surface component.
//!
//! `FrameSurface` owns the lifecycle state, the rendered element
//! reference, and the message-channel subscription for one embedded
//! surface instance. The embedding drives it: mount with the rendered
//! element, feed it load-complete signals, unmount when the component
//! goes away.

mod lifecycle;
mod messaging;


use std::sync::{Arc, Mutex};

use glasspane_common::MalformedSourceError;

use crate::embedding::{MessageSubscription, SurfaceElement};
use crate::lifecycle::SurfaceState;
use crate::render::{self, RenderPlan, SurfaceProps};
use crate::source::ContentSource;

pub struct FrameSurface {
    /// Current props, shared with the message gate so deliveries always
    /// see the source and callback of the latest render.
    props: Arc<Mutex<SurfaceProps>>,
    state: SurfaceState,
    element: Option<Arc<dyn SurfaceElement>>,
    subscription: Option<MessageSubscription>,
}

impl FrameSurface {
    /// Create a surface with the given props. Nothing is subscribed until
    /// the host mounts it with the rendered element.
    pub fn new(props: SurfaceProps) -> Self {
        let state = SurfaceState::initial(props.start_in_loading_state);
        Self {
            props: Arc::new(Mutex::new(props)),
            state,
            element: None,
            subscription: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Whether the surface currently holds its message-channel
    /// subscription.
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Compute the plan for drawing the surface in its current state.
    ///
    /// The frame address is recomputed on every call; a stale address
    /// would let the surface and the message gate disagree about the
    /// source.
    pub fn render(&self) -> Result<RenderPlan, MalformedSourceError> {
        let props = self.props.lock().expect("surface props lock poisoned");
        render::compose(&props, self.state)
    }

    /// Replace the props wholesale, as on a host re-render. The existing
    /// subscription is kept; re-rendering never re-subscribes.
    pub fn set_props(&mut self, props: SurfaceProps) {
        *self.props.lock().expect("surface props lock poisoned") = props;
    }

    /// Replace only the content source.
    ///
    /// The next render picks up the new address and the message gate
    /// re-resolves its origin per delivered message, but the surface does
    /// not re-enter `Loading`.
    pub fn set_source(&mut self, source: ContentSource) {
        self.props.lock().expect("surface props lock poisoned").source = source;
    }

    pub(crate) fn element(&self) -> &Arc<dyn SurfaceElement> {
        self.element
            .as_ref()
            .expect("surface element expected to be non-null")
    }
}
