pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::menu_pipeline::{MenuPipeline, MENU_INPUT};
pub use app::writers::{HtmlWriter, TextWriter, HTML_OUTPUT, TEXT_OUTPUT};
pub use config::{cli::LocalStorage, toml_config::MenuConfig};
pub use crate::core::etl::{MenuEngine, RunSummary};
pub use utils::error::{MenuError, Result};
