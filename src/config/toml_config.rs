use crate::core::grouper::GroupOptions;
use crate::core::render::RenderOptions;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{validate_single_line, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub parse: ParseConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Reject lines without course, title, description and price.
    pub strict: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub missing_field: String,
    pub escape_html: bool,
}

impl MenuConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| MenuError::ConfigError {
            message: format!(
                "cannot read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MenuError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn group_options(&self) -> GroupOptions {
        GroupOptions {
            strict: self.parse.strict,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            missing_field: self.render.missing_field.clone(),
            escape_html: self.render.escape_html,
        }
    }
}

impl Validate for MenuConfig {
    fn validate(&self) -> Result<()> {
        validate_single_line("render.missing_field", &self.render.missing_field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = MenuConfig::from_toml_str("").unwrap();
        assert_eq!(config, MenuConfig::default());
        assert!(!config.parse.strict);
        assert_eq!(config.render.missing_field, "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config = MenuConfig::from_toml_str(
            r#"
[parse]
strict = true

[render]
missing_field = "n/a"
escape_html = true
"#,
        )
        .unwrap();

        assert!(config.group_options().strict);
        let render = config.render_options();
        assert_eq!(render.missing_field, "n/a");
        assert!(render.escape_html);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = MenuConfig::from_toml_str("[parse]\nstrict = \"yes\"").unwrap_err();
        assert!(matches!(err, MenuError::ConfigError { .. }));
    }

    #[test]
    fn test_multiline_placeholder_fails_validation() {
        let mut config = MenuConfig::default();
        config.render.missing_field = "a\nb".to_string();
        assert!(matches!(
            config.validate(),
            Err(MenuError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("menu.toml");
        std::fs::write(&path, "[render]\nmissing_field = \"-\"\n").unwrap();

        let config = MenuConfig::from_file(&path).unwrap();
        assert_eq!(config.render.missing_field, "-");

        let missing = MenuConfig::from_file(dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(MenuError::ConfigError { .. })));
    }
}
