//! Versioned route composition.
//!
//! A route is `[/<version>]/<resource>/<segments joined by '/'>`. A trailing
//! empty segment is the documented way to force a trailing slash, which the
//! API requires for a handful of endpoints (login, logout, websocket token).

/// Builder for one API route. Pure; building never fails.
#[derive(Debug, Clone)]
pub struct Route {
    resource: String,
    version: Option<String>,
    segments: Vec<String>,
}

impl Route {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            version: None,
            segments: Vec::new(),
        }
    }

    /// Version prefix, e.g. `"v2"` or `"v3"`. An empty string means no prefix.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.version = if version.is_empty() {
            None
        } else {
            Some(version)
        };
        self
    }

    #[must_use]
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Force a trailing `/` by appending an empty segment.
    #[must_use]
    pub fn trailing_slash(self) -> Self {
        self.segment("")
    }

    /// Compose the path. Always starts with `/`; segment order is preserved.
    pub fn to_path(&self) -> String {
        let version_prefix = self
            .version
            .as_deref()
            .map(|v| format!("/{v}"))
            .unwrap_or_default();
        format!(
            "{}/{}/{}",
            version_prefix,
            self.resource,
            self.segments.join("/")
        )
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_path())
    }
}
