use serde::{Deserialize, Serialize};
use std::fmt;

/// Operations declared by the cross-backend surface contract.
///
/// Every backend exposes the same set; each one implements what its
/// embedding primitive allows and rejects the rest with
/// [`crate::UnsupportedOperationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    GoBack,
    GoForward,
    Reload,
    StopLoading,
    InjectJavascript,
    ExtraNativeComponentConfig,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::GoBack,
        Capability::GoForward,
        Capability::Reload,
        Capability::StopLoading,
        Capability::InjectJavascript,
        Capability::ExtraNativeComponentConfig,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Capability::GoBack => "go_back",
            Capability::GoForward => "go_forward",
            Capability::Reload => "reload",
            Capability::StopLoading => "stop_loading",
            Capability::InjectJavascript => "inject_javascript",
            Capability::ExtraNativeComponentConfig => "extra_native_component_config",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Subset of layout style the surface backends understand.
///
/// Hosts resolve full styling themselves; a backend reads width and height
/// off the inline style and passes everything else through its render plan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub flex: Option<f64>,
}

impl Style {
    /// Fill the parent container.
    pub fn fill() -> Self {
        Self {
            flex: Some(1.0),
            ..Default::default()
        }
    }

    /// Layer `over` on top of `self`; set fields of `over` win.
    pub fn merge(self, over: Style) -> Style {
        Style {
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            flex: over.flex.or(self.flex),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_display_names() {
        assert_eq!(Capability::GoBack.to_string(), "go_back");
        assert_eq!(Capability::GoForward.to_string(), "go_forward");
        assert_eq!(Capability::Reload.to_string(), "reload");
        assert_eq!(Capability::StopLoading.to_string(), "stop_loading");
        assert_eq!(Capability::InjectJavascript.to_string(), "inject_javascript");
        assert_eq!(
            Capability::ExtraNativeComponentConfig.to_string(),
            "extra_native_component_config"
        );
    }

    #[test]
    fn capability_all_is_exhaustive_and_distinct() {
        use std::collections::HashSet;
        let set: HashSet<_> = Capability::ALL.iter().collect();
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn capability_serialization() {
        for cap in Capability::ALL {
            let json = serde_json::to_string(&cap).unwrap();
            let deserialized: Capability = serde_json::from_str(&json).unwrap();
            assert_eq!(cap, deserialized);
        }
    }

    #[test]
    fn style_merge_prefers_overlay_fields() {
        let base = Style {
            width: Some(100.0),
            height: Some(50.0),
            flex: Some(1.0),
        };
        let over = Style {
            width: Some(200.0),
            ..Default::default()
        };
        let merged = base.merge(over);
        assert_eq!(merged.width, Some(200.0));
        assert_eq!(merged.height, Some(50.0));
        assert_eq!(merged.flex, Some(1.0));
    }

    #[test]
    fn style_fill_sets_only_flex() {
        let fill = Style::fill();
        assert_eq!(fill.flex, Some(1.0));
        assert_eq!(fill.width, None);
        assert_eq!(fill.height, None);
    }

    #[test]
    fn style_serialization() {
        let style = Style {
            width: Some(640.0),
            height: None,
            flex: Some(1.0),
        };
        let json = serde_json::to_string(&style).unwrap();
        let deserialized: Style = serde_json::from_str(&json).unwrap();
        assert_eq!(style, deserialized);
    }
}
