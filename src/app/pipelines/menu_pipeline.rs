use crate::app::writers::{HtmlWriter, TextWriter};
use crate::config::toml_config::MenuConfig;
use crate::core::grouper::group_with;
use crate::core::source::MenuSource;
use crate::core::{MenuGroups, MenuWriter, Pipeline, Storage, WritePayload};
use crate::utils::error::Result;

pub const MENU_INPUT: &str = "menu.csv";

pub struct MenuPipeline<S: Storage> {
    pub(crate) storage: S,
    pub(crate) config: MenuConfig,
}

impl<S: Storage> MenuPipeline<S> {
    pub fn new(storage: S, config: MenuConfig) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for MenuPipeline<S> {
    async fn extract(&self) -> Result<Vec<String>> {
        let source = MenuSource::load(&self.storage, MENU_INPUT).await?;
        Ok(source.into_lines())
    }

    async fn transform(&self, lines: Vec<String>) -> Result<MenuGroups> {
        let groups = group_with(&lines, &self.config.group_options())?;
        tracing::debug!(
            "Grouped {} items into {} courses",
            groups.item_count(),
            groups.course_count()
        );
        Ok(groups)
    }

    async fn load(&self, groups: MenuGroups) -> Result<Vec<String>> {
        let options = self.config.render_options();
        let writers: [Box<dyn MenuWriter + '_>; 2] = [
            Box::new(TextWriter::with_options(&self.storage, options.clone())),
            Box::new(HtmlWriter::with_options(&self.storage, options)),
        ];

        let payload = WritePayload::Structured(groups);
        let mut written = Vec::with_capacity(writers.len());
        // 依序寫出，任一失敗即中止，不回復已寫出的檔案
        for writer in &writers {
            writer.write(&payload).await?;
            tracing::debug!("Wrote {}", writer.target());
            written.push(writer.target().to_string());
        }

        Ok(written)
    }
}
