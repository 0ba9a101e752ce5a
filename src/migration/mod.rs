pub mod classifier;
pub mod executor;
pub mod junk;
pub mod normalize;
pub mod report;
pub mod scanner;

pub use classifier::Classifier;
pub use executor::{CopyOperation, CopyPlan, ExecutionSummary, Executor};
pub use junk::JunkFilter;
pub use normalize::{normalize_extension, normalize_folder_name};
pub use report::render_report;
pub use scanner::{
    MappedEntry, ScanEntry, ScanResult, Scanner, SourceKind, TriageEntry, TriageReason,
};
