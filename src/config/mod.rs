pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "menu-etl")]
#[command(about = "Group menu.csv by course and write menu.txt and menu.html")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Reject menu lines with missing fields
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入配置檔並套用命令列覆蓋設定
    pub fn menu_config(&self) -> Result<toml_config::MenuConfig> {
        let mut config = match &self.config {
            Some(path) => toml_config::MenuConfig::from_file(path)?,
            None => toml_config::MenuConfig::default(),
        };
        if self.strict {
            config.parse.strict = true;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = CliConfig::parse_from(["menu-etl"]);
        assert!(cli.config.is_none());
        assert!(!cli.strict);
        assert!(!cli.verbose);
        assert!(cli.validate().is_ok());
        assert_eq!(cli.menu_config().unwrap(), toml_config::MenuConfig::default());
    }

    #[test]
    fn test_strict_flag_overrides_config() {
        let cli = CliConfig::parse_from(["menu-etl", "--strict", "-v"]);
        assert!(cli.verbose);
        assert!(cli.menu_config().unwrap().parse.strict);
    }

    #[test]
    fn test_empty_config_path_is_invalid() {
        let cli = CliConfig::parse_from(["menu-etl", "--config", ""]);
        assert!(cli.validate().is_err());
    }
}
