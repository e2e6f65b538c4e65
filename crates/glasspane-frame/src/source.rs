//! Content source resolution.
//!
//! A source is resolved on every use, never cached: the frame address and
//! the message gate's expected origin must always come from the same
//! current value.

use serde::{Deserialize, Serialize};
use url::Url;

use glasspane_common::MalformedSourceError;

/// Address rendered into the frame when the source carries no URI.
pub const BLANK_ADDRESS: &str = "about:blank";

/// What the host asked the surface to display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentSource {
    /// A network-addressable document.
    Uri { uri: String },
    /// Inline markup. Has no network origin.
    Html { html: String },
    /// Nothing to load yet.
    #[default]
    None,
}

impl ContentSource {
    pub fn uri(uri: impl Into<String>) -> Self {
        ContentSource::Uri { uri: uri.into() }
    }

    pub fn html(html: impl Into<String>) -> Self {
        ContentSource::Html { html: html.into() }
    }

    /// Parsed URL of a network-addressable source.
    ///
    /// `Html` and `None` sources resolve to no URL: the frame is addressed
    /// as [`BLANK_ADDRESS`] and no inbound message origin can ever match.
    /// A present but unparseable uri is the caller's error and propagates;
    /// substituting a default address would risk loading unintended
    /// content.
    pub fn resolve(&self) -> Result<Option<Url>, MalformedSourceError> {
        match self {
            ContentSource::Uri { uri } => {
                let url = Url::parse(uri).map_err(|e| MalformedSourceError {
                    uri: uri.clone(),
                    reason: e.to_string(),
                })?;
                Ok(Some(url))
            }
            ContentSource::Html { .. } | ContentSource::None => Ok(None),
        }
    }

    /// Fully-qualified address to load into the frame.
    pub fn address(&self) -> Result<String, MalformedSourceError> {
        Ok(match self.resolve()? {
            Some(url) => url.into(),
            None => BLANK_ADDRESS.to_string(),
        })
    }

    /// Origin the loaded content will report as message sender.
    ///
    /// `None` when the source has no URL, or when the URL's origin is
    /// opaque (`file:`, `data:`, ...). Opaque origins are withheld rather
    /// than serialized so that a sender claiming the literal string
    /// `"null"` never matches.
    pub fn expected_origin(&self) -> Result<Option<String>, MalformedSourceError> {
        Ok(self.resolve()?.and_then(|url| {
            let origin = url.origin();
            origin.is_tuple().then(|| origin.ascii_serialization())
        }))
    }
}
