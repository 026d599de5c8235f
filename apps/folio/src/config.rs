use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::theme::Theme;

/// Site configuration loaded from environment variables. Every key has a default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path or `http(s)://` URL of the profile document.
    pub profile_source: String,
    pub host_page: PathBuf,
    pub output_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub theme: String,
    pub featured_marker: Option<String>,
    pub boot_delay_ms: Option<u64>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = Config {
            profile_source: var("PROFILE_SOURCE", "./profile.json"),
            host_page: PathBuf::from(var("HOST_PAGE", "index.html")),
            output_dir: PathBuf::from(var("OUTPUT_DIR", "dist")),
            assets_dir: PathBuf::from(var("ASSETS_DIR", "assets")),
            theme: var("THEME", "glass"),
            featured_marker: lookup("FEATURED_MARKER").filter(|m| !m.is_empty()),
            boot_delay_ms: lookup("BOOT_DELAY_MS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("BOOT_DELAY_MS must be a whole number of milliseconds")?,
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
        };

        config.resolve_theme()?;
        Ok(config)
    }

    /// The configured built-in theme with marker and boot-delay overrides applied.
    pub fn resolve_theme(&self) -> Result<Theme> {
        let mut theme = Theme::by_name(&self.theme).ok_or_else(|| {
            anyhow!(
                "Unknown THEME '{}' (expected one of: {})",
                self.theme,
                Theme::NAMES.join(", ")
            )
        })?;
        if let Some(marker) = &self.featured_marker {
            theme = theme.with_featured_marker(marker.clone());
        }
        if let Some(ms) = self.boot_delay_ms {
            theme = theme.with_boot_delay(Duration::from_millis(ms));
        }
        Ok(theme)
    }

    pub fn output_page(&self) -> PathBuf {
        self.output_dir.join("index.html")
    }

    /// Where `assets_dir` is copied in the built site.
    pub fn output_assets(&self) -> PathBuf {
        self.output_dir.join("assets")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.profile_source, "./profile.json");
        assert_eq!(config.output_page(), PathBuf::from("dist/index.html"));
        assert_eq!(config.output_assets(), PathBuf::from("dist/assets"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.resolve_theme().unwrap().name, "glass");
    }

    #[test]
    fn test_overrides_apply_to_theme() {
        let config = config(&[
            ("THEME", "terminal"),
            ("FEATURED_MARKER", "Flagship"),
            ("BOOT_DELAY_MS", "0"),
        ])
        .unwrap();
        let theme = config.resolve_theme().unwrap();
        assert_eq!(theme.name, "terminal");
        assert_eq!(theme.featured_marker, "Flagship");
        assert!(theme.boot.line_delay.is_zero());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("BOOT_DELAY_MS", "-1")]).is_err());
        let err = config(&[("THEME", "neon")]).unwrap_err();
        assert!(err.to_string().contains("neon"));
    }
}
