use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use anyhow::Result;

// site configuration
//
// every field has a default, so an empty (or missing) config table gives the
// stock behavior of the site
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub theme: ThemeConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    // vertical offset past which the bar switches to its scrolled look
    pub scroll_threshold: f64,

    // viewport width at which the desktop bar replaces the mobile drawer
    pub drawer_breakpoint: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            scroll_threshold: 50.0,
            drawer_breakpoint: 1024.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    // local storage key, shared with earlier versions of the site
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            storage_key: String::from("theme"),
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct TomlConfigFile {
    config: SiteConfig,
}

impl SiteConfig {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> Result<Self> {
        debug!("parsing site config");

        let data: TomlConfigFile = toml::from_str(doc)?;

        Ok(data.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = SiteConfig::from_toml("").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.nav.scroll_threshold, 50.0);
        assert_eq!(config.nav.drawer_breakpoint, 1024.0);
        assert_eq!(config.theme.storage_key, "theme");
    }

    #[test]
    fn partial_tables_fill_in_defaults() {
        let doc = r#"
            [config.nav]
            scroll_threshold = 80.0
        "#;

        let config = SiteConfig::from_toml(doc).unwrap();

        assert_eq!(config.nav.scroll_threshold, 80.0);
        assert_eq!(config.nav.drawer_breakpoint, 1024.0);
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn full_document() {
        let doc = r#"
            [config.nav]
            scroll_threshold = 10.0
            drawer_breakpoint = 768.0

            [config.theme]
            storage_key = "site_theme"
        "#;

        let config = SiteConfig::from_toml(doc).unwrap();

        assert_eq!(config.nav.drawer_breakpoint, 768.0);
        assert_eq!(config.theme.storage_key, "site_theme");
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(SiteConfig::from_toml("[config.nav\nscroll_threshold = ").is_err());
        assert!(SiteConfig::from_toml("[config.nav]\nscroll_threshold = \"far\"").is_err());
    }
}
