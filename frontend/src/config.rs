/// Server base URL used when `PLANNER_SERVER_BASE` is not set at build time
pub const DEFAULT_SERVER_BASE: &str = "http://localhost:3000";

/// Guide identifier used when `PLANNER_GUIDE_ID` is not set at build time
pub const DEFAULT_GUIDE_ID: &str = "guide-1";

/// Values baked in at build time (`PLANNER_SERVER_BASE=... trunk build`)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server_base: String,
    pub guide_id: String,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PLANNER_SERVER_BASE"), option_env!("PLANNER_GUIDE_ID"))
    }

    /// Blank values fall back to the defaults; a trailing slash on the base is dropped.
    pub fn from_values(server_base: Option<&str>, guide_id: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            server_base: pick(server_base, DEFAULT_SERVER_BASE).trim_end_matches('/').to_string(),
            guide_id: pick(guide_id, DEFAULT_GUIDE_ID),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.server_base, DEFAULT_SERVER_BASE);
        assert_eq!(config.guide_id, DEFAULT_GUIDE_ID);
    }

    #[wasm_bindgen_test]
    fn test_blank_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some(""));
        assert_eq!(config.server_base, DEFAULT_SERVER_BASE);
        assert_eq!(config.guide_id, DEFAULT_GUIDE_ID);
    }

    #[wasm_bindgen_test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://planner.example.com/"), Some("g-42"));
        assert_eq!(config.server_base, "https://planner.example.com");
        assert_eq!(config.guide_id, "g-42");
    }
}
