use crate::core::{Pipeline, RunSummary, Statistics};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting conversion");

        tracing::info!("📥 Extracting source table...");
        let table = self.pipeline.extract().await?;
        let rows_loaded = table.rows.len();
        tracing::info!(
            "📥 Extracted {} rows ({}, delimiter {:?})",
            rows_loaded,
            table.encoding,
            table.delimiter
        );
        self.monitor.log_stats("Extract completed");

        tracing::info!("🔄 Building concept hierarchy...");
        let hierarchy = self.pipeline.transform(table).await?;
        let concepts_built = hierarchy.len();
        tracing::info!("🔄 Built {} concepts", concepts_built);
        self.monitor.log_stats("Transform completed");

        // 統計要在 hierarchy 交給 load 之前先算好
        let statistics = hierarchy.statistics();

        tracing::info!("💾 Writing taxonomy document...");
        let load = self.pipeline.load(hierarchy).await?;
        tracing::info!(
            "💾 Wrote {} concept blocks to: {}",
            load.concepts_written,
            load.output_path
        );
        self.monitor.log_stats("Load completed");

        self.monitor.log_final_stats();

        Ok(RunSummary {
            rows_loaded,
            concepts_built,
            concepts_written: load.concepts_written,
            output_path: load.output_path,
            generated: load.generated,
            statistics,
        })
    }

    /// 只執行 extract 與 transform，不寫任何輸出
    pub async fn dry_run(&self) -> Result<Statistics> {
        tracing::info!("🔍 Dry run: no output will be written");

        let table = self.pipeline.extract().await?;
        tracing::info!(
            "📥 Extracted {} rows ({}, delimiter {:?})",
            table.rows.len(),
            table.encoding,
            table.delimiter
        );

        let hierarchy = self.pipeline.transform(table).await?;
        tracing::info!("🔄 Built {} concepts", hierarchy.len());

        Ok(hierarchy.statistics())
    }
}
