pub mod audit;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod migration;
pub mod pdf;
pub mod taxonomy;
pub mod utils;

pub use config::Config;
pub use error::CambiumError;
pub use migration::{Classifier, Executor, JunkFilter, ScanEntry, ScanResult, Scanner};
pub use taxonomy::{ScaffoldPlan, Taxonomy, TaxonomyNode};
