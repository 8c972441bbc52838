use crate::core::{MenuWriter, Storage, WritePayload};
use crate::utils::error::{MenuError, Result};
use regex::Regex;

/// The raw lines of a menu file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSource {
    lines: Vec<String>,
}

impl MenuSource {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub async fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        let bytes = storage.read_file(path).await?;
        let content = String::from_utf8(bytes)?;
        let lines = split_lines(&content)?;
        tracing::debug!("Loaded {} lines from {}", lines.len(), path);
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// 將原始行內容直接交給 writer，不經分組與格式化
    pub async fn write_to<W: MenuWriter + ?Sized>(&self, writer: &W) -> Result<()> {
        writer
            .write(&WritePayload::Raw(self.lines.join("\n")))
            .await
    }
}

/// Splits on `\r\n`, `\n` or a lone `\r`. A trailing terminator yields a final empty line.
pub fn split_lines(content: &str) -> Result<Vec<String>> {
    if content.is_empty() {
        return Ok(Vec::new());
    }

    let boundary = Regex::new(r"\r\n|\n|\r").map_err(|e| MenuError::ProcessingError {
        message: format!("Invalid line boundary pattern: {}", e),
    })?;

    Ok(boundary.split(content).map(str::to_string).collect())
}
