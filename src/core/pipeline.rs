use crate::core::hierarchy::HierarchyBuilder;
use crate::core::loader::TableLoader;
use crate::core::serializer::TurtleSerializer;
use crate::core::{ConfigProvider, Hierarchy, LoadSummary, LoadedTable, Pipeline, Storage};
use crate::utils::error::{ConvertError, Result};
use chrono::NaiveDate;

/// 三階段轉換管線：讀表、建階層、寫出 SKOS 文件
pub struct TaxonomyPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    loader: TableLoader,
    builder: HierarchyBuilder,
    created: NaiveDate,
}

impl<S: Storage, C: ConfigProvider> TaxonomyPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_date(storage, config, chrono::Local::now().date_naive())
    }

    /// 固定產生日期，讓輸出可以逐位元組比對
    pub fn with_date(storage: S, config: C, created: NaiveDate) -> Self {
        Self {
            storage,
            config,
            loader: TableLoader::new(),
            builder: HierarchyBuilder::new(),
            created,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TaxonomyPipeline<S, C> {
    async fn extract(&self) -> Result<LoadedTable> {
        let input = self.config.input_path();

        if !self.storage.exists(input).await {
            return Err(ConvertError::InputNotFound {
                path: input.to_string(),
            });
        }

        tracing::debug!("Reading source table from: {}", input);
        let bytes = self.storage.read_file(input).await?;

        self.loader.load(&bytes)
    }

    async fn transform(&self, table: LoadedTable) -> Result<Hierarchy> {
        let hierarchy = self.builder.build(&table.rows);

        tracing::debug!(
            "Built {} concepts from {} rows",
            hierarchy.len(),
            table.rows.len()
        );

        Ok(hierarchy)
    }

    async fn load(&self, hierarchy: Hierarchy) -> Result<LoadSummary> {
        let serializer = TurtleSerializer::new(
            self.config.scheme_title(),
            self.config.scheme_description(),
            self.config.base_uri(),
            self.config.language(),
            self.created,
        );

        let document = serializer.render(&hierarchy);
        let output = self.config.output_path();

        tracing::debug!("Writing {} bytes to: {}", document.text.len(), output);
        self.storage
            .write_file(output, document.text.as_bytes())
            .await?;

        Ok(LoadSummary {
            output_path: output.to_string(),
            concepts_written: document.concepts_written,
            generated: self.created,
        })
    }
}
