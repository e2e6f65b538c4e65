//! Surface load lifecycle.

use serde::{Deserialize, Serialize};

/// Load state of the embedded surface.
///
/// `Error` belongs to the cross-backend contract; nothing in this backend
/// produces it, because a sandboxed frame reports no load errors to its
/// embedder. It renders no auxiliary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceState {
    Idle,
    Loading,
    Error,
}

impl SurfaceState {
    /// State a freshly constructed surface starts in.
    pub fn initial(start_in_loading_state: bool) -> Self {
        if start_in_loading_state {
            SurfaceState::Loading
        } else {
            SurfaceState::Idle
        }
    }

    /// Whether the loading view is layered over the surface.
    pub fn shows_loading_view(&self) -> bool {
        match self {
            SurfaceState::Loading => true,
            SurfaceState::Idle | SurfaceState::Error => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_follows_eager_loading_flag() {
        assert_eq!(SurfaceState::initial(true), SurfaceState::Loading);
        assert_eq!(SurfaceState::initial(false), SurfaceState::Idle);
    }

    #[test]
    fn only_loading_shows_the_loading_view() {
        assert!(SurfaceState::Loading.shows_loading_view());
        assert!(!SurfaceState::Idle.shows_loading_view());
        assert!(!SurfaceState::Error.shows_loading_view());
    }

    #[test]
    fn state_serialization() {
        for state in [SurfaceState::Idle, SurfaceState::Loading, SurfaceState::Error] {
            let json = serde_json::to_string(&state).unwrap();
            let deserialized: SurfaceState = serde_json::from_str(&json).unwrap();
            assert_eq!(state, deserialized);
        }
    }
}
