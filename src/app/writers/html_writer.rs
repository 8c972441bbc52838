use crate::core::render::{render_html, RenderOptions};
use crate::core::{MenuWriter, Storage, WritePayload};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const HTML_OUTPUT: &str = "menu.html";

pub struct HtmlWriter<'a, S: Storage> {
    storage: &'a S,
    options: RenderOptions,
}

impl<'a, S: Storage> HtmlWriter<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self::with_options(storage, RenderOptions::default())
    }

    pub fn with_options(storage: &'a S, options: RenderOptions) -> Self {
        Self { storage, options }
    }
}

#[async_trait]
impl<'a, S: Storage> MenuWriter for HtmlWriter<'a, S> {
    fn target(&self) -> &str {
        HTML_OUTPUT
    }

    async fn write(&self, payload: &WritePayload) -> Result<()> {
        let content = match payload {
            WritePayload::Raw(raw) => raw.clone(),
            WritePayload::Structured(groups) => render_html(groups, &self.options),
        };

        tracing::debug!("Writing HTML menu ({} bytes)", content.len());
        self.storage
            .write_file(HTML_OUTPUT, content.as_bytes())
            .await
    }
}
