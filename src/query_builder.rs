//! Endpoint builder for AmiiboAPI query strings.
//!
//! Values are embedded exactly as given; the finished endpoint is
//! percent-encoded once, by the fetch pipeline, right before the request is
//! sent. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use amiibo_api::QueryBuilder;
//! let endpoint = QueryBuilder::new("/amiibo/")
//!     .param("character", "mario")
//!     .flag("showgames", true)
//!     .build();
//! assert_eq!(endpoint, "/amiibo/?character=mario&showgames");
//! ```

/// Builds an endpoint path with an optional `key=value` / flag query string.
pub struct QueryBuilder {
    path: String,
    parts: Vec<String>,
}

impl QueryBuilder {
    /// Create a builder for the given endpoint path.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            parts: Vec::new(),
        }
    }

    /// Append `key=value`.
    pub fn param(&mut self, key: &str, value: &str) -> &mut Self {
        self.parts.push(format!("{}={}", key, value));
        self
    }

    /// Append `key=value` only when a value is present.
    pub fn param_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value {
            self.param(key, v);
        }
        self
    }

    /// Append a bare flag token (no value) when `enabled` is true.
    pub fn flag(&mut self, token: &str, enabled: bool) -> &mut Self {
        if enabled {
            self.parts.push(token.to_string());
        }
        self
    }

    /// Produce the endpoint. The `?` separator is only emitted when at least
    /// one parameter or flag was added.
    pub fn build(&self) -> String {
        if self.parts.is_empty() {
            return self.path.clone();
        }
        format!("{}?{}", self.path, self.parts.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_parts_yields_bare_path() {
        assert_eq!(QueryBuilder::new("/type").build(), "/type");
    }

    #[test]
    fn disabled_flags_and_missing_values_are_skipped() {
        let endpoint = QueryBuilder::new("/amiibo/")
            .param_opt("name", None)
            .flag("showgames", false)
            .param("type", "card")
            .build();
        assert_eq!(endpoint, "/amiibo/?type=card");
    }
}
