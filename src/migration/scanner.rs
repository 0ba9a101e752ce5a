use crate::error::CambiumError;
use crate::migration::classifier::Classifier;
use crate::migration::junk::JunkFilter;
use crate::taxonomy::TaxonomyNode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use walkdir::WalkDir;

/// What a direct child of the source root is on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Directory,
    File,
    Other,
}

/// Why an entry could not be routed automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageReason {
    UnknownFolder,
    UnknownRootFile,
    /// Symbolic links, sockets, devices and the like
    UnsupportedEntry,
    /// Names that are not valid UTF-8 cannot be reported or routed reliably
    UnreadableName,
}

impl fmt::Display for TriageReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TriageReason::UnknownFolder => "Unknown folder — needs manual classification",
            TriageReason::UnknownRootFile => "Root file — unknown type",
            TriageReason::UnsupportedEntry => "Not a regular file or folder — review manually",
            TriageReason::UnreadableName => "Name is not valid UTF-8 — rename before migrating",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedEntry {
    pub source_name: String,
    pub destination: TaxonomyNode,
    pub file_count: usize,
    pub kind: SourceKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageEntry {
    pub source_name: String,
    pub file_count: usize,
    pub reason: TriageReason,
    pub kind: SourceKind,
}

/// A routed or unrouted child of the source root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanEntry {
    Mapped(MappedEntry),
    Triage(TriageEntry),
}

/// Partition of the source root's direct children.
/// Hidden and underscore-prefixed folders appear in no bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub mapped: Vec<MappedEntry>,
    pub triage: Vec<TriageEntry>,
    pub junk: Vec<String>,
}

impl ScanResult {
    pub fn push(&mut self, entry: ScanEntry) {
        match entry {
            ScanEntry::Mapped(mapped) => self.mapped.push(mapped),
            ScanEntry::Triage(triage) => self.triage.push(triage),
        }
    }

    pub fn mapped_file_count(&self) -> usize {
        self.mapped.iter().map(|m| m.file_count).sum()
    }

    pub fn triage_file_count(&self) -> usize {
        self.triage.iter().map(|t| t.file_count).sum()
    }

    pub fn junk_count(&self) -> usize {
        self.junk.len()
    }

    /// Share of classifiable files that were routed, rounded to a whole percent
    /// with halves going to the even neighbour. `None` when nothing classifiable was found.
    pub fn coverage_percent(&self) -> Option<u32> {
        let mapped = self.mapped_file_count();
        let total = mapped + self.triage_file_count();
        if total == 0 {
            return None;
        }
        Some((mapped as f64 * 100.0 / total as f64).round_ties_even() as u32)
    }

    pub fn is_empty(&self) -> bool {
        self.mapped.is_empty() && self.triage.is_empty() && self.junk.is_empty()
    }
}

/// Classifies the top level of a legacy project folder. Never writes to disk.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    classifier: Classifier,
    junk: JunkFilter,
}

impl Scanner {
    pub fn new(classifier: Classifier, junk: JunkFilter) -> Self {
        Self { classifier, junk }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn junk_filter(&self) -> &JunkFilter {
        &self.junk
    }

    /// Scan the direct children of `source_root` in file-name order
    pub fn scan(&self, source_root: &Path) -> Result<ScanResult> {
        if !source_root.is_dir() {
            return Err(CambiumError::not_a_directory(source_root).into());
        }

        let mut result = ScanResult::default();

        for entry in WalkDir::new(source_root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry
                .with_context(|| format!("Failed to list directory: {}", source_root.display()))?;
            let file_type = entry.file_type();
            let kind = if file_type.is_dir() {
                SourceKind::Directory
            } else if file_type.is_file() {
                SourceKind::File
            } else {
                SourceKind::Other
            };

            // Skip and junk rules apply to the lossy name; only routing needs valid UTF-8
            let readable = entry.file_name().to_str();
            let name = entry.file_name().to_string_lossy();

            match kind {
                SourceKind::Directory => {
                    if name.starts_with('.') || name.starts_with('_') {
                        tracing::debug!(name = %name, "skipping hidden or private folder");
                        continue;
                    }
                    let file_count = count_files(entry.path())?;
                    match readable {
                        Some(name) => result.push(self.classify_directory(name, file_count)),
                        None => result.push(unreadable(&name, file_count, kind)),
                    }
                }
                SourceKind::File => {
                    if self.junk.is_junk(&name) {
                        tracing::debug!(name = %name, "junk");
                        result.junk.push(name.into_owned());
                        continue;
                    }
                    match readable {
                        Some(name) => result.push(self.classify_file(name)),
                        None => result.push(unreadable(&name, 1, kind)),
                    }
                }
                SourceKind::Other => {
                    tracing::debug!(name = %name, "not a regular file or folder");
                    result.push(ScanEntry::Triage(TriageEntry {
                        source_name: name.into_owned(),
                        file_count: 1,
                        reason: TriageReason::UnsupportedEntry,
                        kind,
                    }));
                }
            }
        }

        Ok(result)
    }

    fn classify_directory(&self, name: &str, file_count: usize) -> ScanEntry {
        match self.classifier.classify_folder(name) {
            Some(destination) => {
                tracing::debug!(name, destination = %destination, file_count, "mapped folder");
                ScanEntry::Mapped(MappedEntry {
                    source_name: name.to_string(),
                    destination: destination.clone(),
                    file_count,
                    kind: SourceKind::Directory,
                })
            }
            None => {
                tracing::debug!(name, file_count, "unknown folder");
                ScanEntry::Triage(TriageEntry {
                    source_name: name.to_string(),
                    file_count,
                    reason: TriageReason::UnknownFolder,
                    kind: SourceKind::Directory,
                })
            }
        }
    }

    fn classify_file(&self, name: &str) -> ScanEntry {
        match self.classifier.classify_root_file(name) {
            Some(destination) => {
                tracing::debug!(name, destination = %destination, "mapped root file");
                ScanEntry::Mapped(MappedEntry {
                    source_name: name.to_string(),
                    destination: destination.clone(),
                    file_count: 1,
                    kind: SourceKind::File,
                })
            }
            None => ScanEntry::Triage(TriageEntry {
                source_name: name.to_string(),
                file_count: 1,
                reason: TriageReason::UnknownRootFile,
                kind: SourceKind::File,
            }),
        }
    }
}

fn unreadable(lossy_name: &str, file_count: usize, kind: SourceKind) -> ScanEntry {
    tracing::warn!(name = lossy_name, "entry name is not valid UTF-8");
    ScanEntry::Triage(TriageEntry {
        source_name: lossy_name.to_string(),
        file_count,
        reason: TriageReason::UnreadableName,
        kind,
    })
}

/// Regular files anywhere below `dir`; symlinks are not followed or counted
pub fn count_files(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry.with_context(|| format!("Failed to walk directory: {}", dir.display()))?;
        if entry.file_type().is_file() {
            count += 1;
        }
    }
    Ok(count)
}
