//! Render-plan composition.
//!
//! The backend does not draw anything itself. Each render call produces a
//! [`RenderPlan`] describing the container, the frame element's attributes
//! (with native-config overrides applied), and the auxiliary view to layer
//! over the surface for the current lifecycle state. The host's renderer
//! consumes the plan.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use glasspane_common::{MalformedSourceError, Style};

use crate::bridge::MessageCallback;
use crate::embedding::LoadEvent;
use crate::lifecycle::SurfaceState;
use crate::source::ContentSource;

/// Host-supplied renderer for the loading overlay.
pub type LoadingRenderer = Box<dyn Fn() -> LoadingView + Send>;

/// Host callback observing load-complete events.
pub type LoadCallback = Box<dyn FnMut(&LoadEvent) + Send>;

/// Descriptor of the auxiliary view layered over the surface while content
/// loads. Drawing it is the host's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingView {
    /// Show an activity spinner.
    pub spinner: bool,
    /// Optional caption under the spinner.
    pub label: Option<String>,
}

impl LoadingView {
    /// Indicator used when the host supplies no loading renderer.
    pub fn default_indicator() -> Self {
        Self {
            spinner: true,
            label: None,
        }
    }
}

/// Backend-specific attribute overrides, the escape hatch mirrored from
/// the richer native backends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NativeConfig {
    /// Attributes shallow-merged into the frame element's attributes;
    /// on conflicting keys the override wins.
    #[serde(default)]
    pub props: Map<String, Value>,
}

/// Host-supplied configuration for one surface instance.
pub struct SurfaceProps {
    /// What to load.
    pub source: ContentSource,
    /// Inline style; the backend consults width and height only.
    pub style: Style,
    /// Style layered onto the surrounding container.
    pub container_style: Style,
    /// Attribute overrides for the frame element.
    pub native_config: Option<NativeConfig>,
    /// Start in `Loading` and show the loading view until the first
    /// load-complete signal.
    pub start_in_loading_state: bool,
    /// Loading overlay renderer; [`LoadingView::default_indicator`] when
    /// absent.
    pub render_loading: Option<LoadingRenderer>,
    /// Invoked with the platform load event, before the state transition
    /// becomes observable.
    pub on_load: Option<LoadCallback>,
    /// Invoked for each inbound message that passes the origin gate.
    pub on_message: Option<MessageCallback>,
}

impl Default for SurfaceProps {
    fn default() -> Self {
        Self {
            source: ContentSource::None,
            style: Style::default(),
            container_style: Style::default(),
            native_config: None,
            start_in_loading_state: false,
            render_loading: None,
            on_load: None,
            on_message: None,
        }
    }
}

impl SurfaceProps {
    /// Props that load a URL.
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            source: ContentSource::uri(uri),
            ..Default::default()
        }
    }

    /// Props that render inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            source: ContentSource::html(html),
            ..Default::default()
        }
    }
}

/// Everything the host needs to draw one frame of the component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    /// Style for the surrounding container: fill defaults underneath the
    /// host's container style.
    pub container_style: Style,
    /// Style for the frame element itself.
    pub surface_style: Style,
    /// Attributes applied to the frame element, native-config overrides
    /// last.
    pub attributes: Map<String, Value>,
    /// Auxiliary view layered over the surface, if any.
    pub overlay: Option<LoadingView>,
}

/// Compose the plan for the current props and lifecycle state.
///
/// The frame address is derived from the source on every call, never
/// cached, so the rendered surface and the message gate cannot disagree.
pub(crate) fn compose(
    props: &SurfaceProps,
    state: SurfaceState,
) -> Result<RenderPlan, MalformedSourceError> {
    let address = props.source.address()?;

    let overlay = state.shows_loading_view().then(|| match &props.render_loading {
        Some(render) => render(),
        None => LoadingView::default_indicator(),
    });

    Ok(RenderPlan {
        container_style: Style::fill().merge(props.container_style),
        surface_style: Style::fill().merge(props.style),
        attributes: compose_attributes(&address, props.style, props.native_config.as_ref()),
        overlay,
    })
}

fn compose_attributes(
    address: &str,
    style: Style,
    native_config: Option<&NativeConfig>,
) -> Map<String, Value> {
    let mut attrs = Map::new();
    attrs.insert("src".into(), Value::String(address.to_string()));
    if let Some(width) = style.width.and_then(Number::from_f64) {
        attrs.insert("width".into(), Value::Number(width));
    }
    if let Some(height) = style.height.and_then(Number::from_f64) {
        attrs.insert("height".into(), Value::Number(height));
    }
    if let Some(config) = native_config {
        // Shallow merge, last write wins.
        for (key, value) in &config.props {
            attrs.insert(key.clone(), value.clone());
        }
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- Attributes --

    #[test]
    fn attributes_carry_address_and_dimensions() {
        let props = SurfaceProps {
            style: Style {
                width: Some(640.0),
                height: Some(480.0),
                flex: None,
            },
            ..SurfaceProps::with_uri("https://example.com/app")
        };
        let plan = compose(&props, SurfaceState::Idle).unwrap();
        assert_eq!(plan.attributes["src"], json!("https://example.com/app"));
        assert_eq!(plan.attributes["width"], json!(640.0));
        assert_eq!(plan.attributes["height"], json!(480.0));
    }

    #[test]
    fn absent_dimensions_are_omitted() {
        let props = SurfaceProps::with_uri("https://example.com");
        let plan = compose(&props, SurfaceState::Idle).unwrap();
        assert!(!plan.attributes.contains_key("width"));
        assert!(!plan.attributes.contains_key("height"));
    }

    #[test]
    fn blank_source_addresses_about_blank() {
        let props = SurfaceProps::with_html("<p>static</p>");
        let plan = compose(&props, SurfaceState::Idle).unwrap();
        assert_eq!(plan.attributes["src"], json!("about:blank"));
    }

    #[test]
    fn malformed_source_fails_the_render() {
        let props = SurfaceProps::with_uri("no scheme here");
        let err = compose(&props, SurfaceState::Idle).unwrap_err();
        assert_eq!(err.uri, "no scheme here");
    }

    // -- Native config merge --

    #[test]
    fn native_config_props_are_merged_in() {
        let mut native = NativeConfig::default();
        native.props.insert("sandbox".into(), json!("allow-scripts"));
        native.props.insert("title".into(), json!("embedded app"));

        let props = SurfaceProps {
            native_config: Some(native),
            ..SurfaceProps::with_uri("https://example.com")
        };
        let plan = compose(&props, SurfaceState::Idle).unwrap();
        assert_eq!(plan.attributes["sandbox"], json!("allow-scripts"));
        assert_eq!(plan.attributes["title"], json!("embedded app"));
    }

    #[test]
    fn native_config_wins_on_conflicting_keys() {
        let mut native = NativeConfig::default();
        native.props.insert("src".into(), json!("https://override.example"));

        let props = SurfaceProps {
            native_config: Some(native),
            ..SurfaceProps::with_uri("https://example.com")
        };
        let plan = compose(&props, SurfaceState::Idle).unwrap();
        assert_eq!(plan.attributes["src"], json!("https://override.example"));
    }

    // -- Overlay policy --

    #[test]
    fn loading_state_layers_the_default_indicator() {
        let props = SurfaceProps::with_uri("https://example.com");
        let plan = compose(&props, SurfaceState::Loading).unwrap();
        assert_eq!(plan.overlay, Some(LoadingView::default_indicator()));
    }

    #[test]
    fn host_loading_renderer_takes_precedence() {
        let props = SurfaceProps {
            render_loading: Some(Box::new(|| LoadingView {
                spinner: false,
                label: Some("fetching".into()),
            })),
            ..SurfaceProps::with_uri("https://example.com")
        };
        let plan = compose(&props, SurfaceState::Loading).unwrap();
        let overlay = plan.overlay.unwrap();
        assert!(!overlay.spinner);
        assert_eq!(overlay.label.as_deref(), Some("fetching"));
    }

    #[test]
    fn idle_and_error_render_no_overlay() {
        let props = SurfaceProps::with_uri("https://example.com");
        assert_eq!(compose(&props, SurfaceState::Idle).unwrap().overlay, None);
        assert_eq!(compose(&props, SurfaceState::Error).unwrap().overlay, None);
    }

    // -- Styles --

    #[test]
    fn container_and_surface_styles_fill_by_default() {
        let props = SurfaceProps::with_uri("https://example.com");
        let plan = compose(&props, SurfaceState::Idle).unwrap();
        assert_eq!(plan.container_style.flex, Some(1.0));
        assert_eq!(plan.surface_style.flex, Some(1.0));
    }

    #[test]
    fn host_styles_layer_over_the_fill_defaults() {
        let props = SurfaceProps {
            style: Style {
                width: Some(320.0),
                height: None,
                flex: Some(2.0),
            },
            container_style: Style {
                width: Some(400.0),
                ..Default::default()
            },
            ..SurfaceProps::with_uri("https://example.com")
        };
        let plan = compose(&props, SurfaceState::Idle).unwrap();
        assert_eq!(plan.surface_style.flex, Some(2.0));
        assert_eq!(plan.surface_style.width, Some(320.0));
        assert_eq!(plan.container_style.width, Some(400.0));
        assert_eq!(plan.container_style.flex, Some(1.0));
    }
}
