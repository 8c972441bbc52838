use crate::core::render::{render_text, RenderOptions};
use crate::core::{MenuWriter, Storage, WritePayload};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const TEXT_OUTPUT: &str = "menu.txt";

pub struct TextWriter<'a, S: Storage> {
    storage: &'a S,
    options: RenderOptions,
}

impl<'a, S: Storage> TextWriter<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self::with_options(storage, RenderOptions::default())
    }

    pub fn with_options(storage: &'a S, options: RenderOptions) -> Self {
        Self { storage, options }
    }
}

#[async_trait]
impl<'a, S: Storage> MenuWriter for TextWriter<'a, S> {
    fn target(&self) -> &str {
        TEXT_OUTPUT
    }

    async fn write(&self, payload: &WritePayload) -> Result<()> {
        let content = match payload {
            WritePayload::Raw(raw) => raw.clone(),
            WritePayload::Structured(groups) => render_text(groups, &self.options),
        };

        tracing::debug!("Writing text menu ({} bytes)", content.len());
        self.storage
            .write_file(TEXT_OUTPUT, content.as_bytes())
            .await
    }
}
