pub mod etl;
pub mod hierarchy;
pub mod loader;
pub mod pipeline;
pub mod serializer;

pub use crate::domain::model::{
    Concept, Hierarchy, LoadSummary, LoadedTable, RunSummary, Statistics, TableRow, TopConcept,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
