#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Base URL of the stats API, without a trailing slash.
    pub api_base: String,
    /// User id loaded when no other id has been selected.
    pub viewer_uid: u64,
}

impl CoreConfig {
    pub fn new<S: Into<String>>(api_base: S, viewer_uid: u64) -> Self {
        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }
        Self {
            api_base,
            viewer_uid,
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new("https://www.sefaria.org", 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = CoreConfig::new("https://example.org/", 7);
        assert_eq!(config.api_base, "https://example.org");
        assert_eq!(config.viewer_uid, 7);
    }
}
