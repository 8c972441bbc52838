use crate::core::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub courses: usize,
    pub items: usize,
    pub outputs: Vec<String>,
}

pub struct MenuEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MenuEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting menu processing");

        // Extract
        let lines = self.pipeline.extract().await?;
        tracing::info!("Read {} lines", lines.len());
        let line_count = lines.len();

        // Transform
        let groups = self.pipeline.transform(lines).await?;
        tracing::info!(
            "Grouped {} items into {} courses",
            groups.item_count(),
            groups.course_count()
        );
        let (courses, items) = (groups.course_count(), groups.item_count());

        // Load
        let outputs = self.pipeline.load(groups).await?;
        tracing::info!("Wrote {}", outputs.join(", "));

        Ok(RunSummary {
            lines: line_count,
            courses,
            items,
            outputs,
        })
    }
}
