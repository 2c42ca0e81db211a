pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use core::{etl::ConvertEngine, pipeline::TaxonomyPipeline};
pub use utils::error::{ConvertError, Result};
