use crate::error::CambiumError;
use crate::migration::junk::JunkFilter;
use crate::migration::scanner::{ScanResult, SourceKind};
use crate::utils::compute_file_hash;
use anyhow::{Context, Result};
use filetime::FileTime;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Represents a single file copy operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOperation {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Every file copy a migration will perform, in scan order
#[derive(Debug, Clone, Default)]
pub struct CopyPlan {
    pub operations: Vec<CopyOperation>,
    /// Junk found inside mapped folders; counted by the report but never copied
    pub skipped_junk: Vec<PathBuf>,
}

impl CopyPlan {
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub copied: usize,
    pub skipped_junk: usize,
    /// Destination files that existed and were replaced
    pub overwritten: usize,
    pub verified: usize,
}

/// Copies mapped entries into the taxonomy. Sources are never moved or deleted;
/// existing destination files are overwritten.
#[derive(Debug, Clone)]
pub struct Executor {
    junk: JunkFilter,
    verify: bool,
    show_progress: bool,
}

impl Executor {
    pub fn new(junk: JunkFilter) -> Self {
        Self {
            junk,
            verify: false,
            show_progress: false,
        }
    }

    /// Compare each copy's content hash with its source
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// List the copies for every mapped entry. Triage entries are never included.
    pub fn plan(&self, source_root: &Path, dest_root: &Path, scan: &ScanResult) -> Result<CopyPlan> {
        let mut plan = CopyPlan::default();

        for entry in &scan.mapped {
            let source = source_root.join(&entry.source_name);
            let dest_base = dest_root.join(entry.destination.to_relative_path());

            match entry.kind {
                SourceKind::Directory => {
                    for item in WalkDir::new(&source).min_depth(1).sort_by_file_name() {
                        let item = item
                            .with_context(|| format!("Failed to walk directory: {}", source.display()))?;
                        if !item.file_type().is_file() {
                            continue;
                        }
                        let name = item.file_name().to_string_lossy();
                        if self.junk.is_junk(&name) {
                            tracing::debug!(path = %item.path().display(), "skipping nested junk");
                            plan.skipped_junk.push(item.path().to_path_buf());
                            continue;
                        }
                        let relative = item
                            .path()
                            .strip_prefix(&source)
                            .context("Walked entry outside its source folder")?;
                        plan.operations.push(CopyOperation {
                            source: item.path().to_path_buf(),
                            destination: dest_base.join(relative),
                        });
                    }
                }
                SourceKind::File => {
                    plan.operations.push(CopyOperation {
                        destination: dest_base.join(&entry.source_name),
                        source,
                    });
                }
                SourceKind::Other => {
                    tracing::warn!(name = %entry.source_name, "mapped entry is not a file or folder, skipping");
                }
            }
        }

        Ok(plan)
    }

    /// Plan and perform the copies. The first failure aborts; files already copied stay in place.
    pub fn execute(&self, source_root: &Path, dest_root: &Path, scan: &ScanResult) -> Result<ExecutionSummary> {
        let plan = self.plan(source_root, dest_root, scan)?;
        self.apply(&plan)
    }

    /// Perform a previously computed plan
    pub fn apply(&self, plan: &CopyPlan) -> Result<ExecutionSummary> {
        let mut summary = ExecutionSummary {
            skipped_junk: plan.skipped_junk.len(),
            ..ExecutionSummary::default()
        };

        let pb = self.progress_bar(plan.len() as u64)?;

        for op in &plan.operations {
            if let Some(parent) = op.destination.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create destination directory: {}", parent.display()))?;
            }

            if op.destination.exists() {
                tracing::warn!(path = %op.destination.display(), "overwriting existing file");
                summary.overwritten += 1;
            }

            copy_with_metadata(&op.source, &op.destination)?;
            summary.copied += 1;

            if self.verify {
                verify_copy(&op.source, &op.destination)?;
                summary.verified += 1;
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        tracing::info!(
            copied = summary.copied,
            skipped_junk = summary.skipped_junk,
            overwritten = summary.overwritten,
            "migration copy complete"
        );

        Ok(summary)
    }

    fn progress_bar(&self, len: u64) -> Result<ProgressBar> {
        if !self.show_progress {
            return Ok(ProgressBar::hidden());
        }

        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} files copied")
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Ok(pb)
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(JunkFilter::standard())
    }
}

/// Copy file contents and permissions, then carry over access and modification times
pub fn copy_with_metadata(source: &Path, destination: &Path) -> Result<()> {
    fs::copy(source, destination).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            source.display(),
            destination.display()
        )
    })?;

    let metadata = fs::metadata(source)
        .with_context(|| format!("Failed to read metadata: {}", source.display()))?;
    let mtime = FileTime::from_last_modification_time(&metadata);
    let atime = FileTime::from_last_access_time(&metadata);
    filetime::set_file_times(destination, atime, mtime)
        .with_context(|| format!("Failed to set file times: {}", destination.display()))?;

    Ok(())
}

fn verify_copy(source: &Path, destination: &Path) -> Result<()> {
    if compute_file_hash(source)? != compute_file_hash(destination)? {
        return Err(CambiumError::CopyVerification {
            path: destination.to_path_buf(),
        }
        .into());
    }
    Ok(())
}
