use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::BuildMonitor;

pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
    monitor: BuildMonitor,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: BuildMonitor::new(monitor_enabled),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitor.is_enabled()
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting site build...");

        // Collect
        let content = self.pipeline.collect().await?;
        tracing::info!("Collected {} articles", content.catalog.len());
        self.monitor.log_phase("Collect");

        // Render
        let site = self.pipeline.render(content).await?;
        tracing::info!("Rendered {} pages", site.pages.len());
        self.monitor.log_phase("Render");

        // Publish
        let output_path = self.pipeline.publish(site).await?;
        tracing::info!("Site written to: {}", output_path);
        self.monitor.log_phase("Publish");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
