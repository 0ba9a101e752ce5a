use crate::constants::{JUNK_EXTENSIONS, JUNK_FILE_NAMES};
use crate::migration::normalize::normalize_extension;
use std::collections::HashSet;

/// Recognizes disposable files: OS artifacts, backups, temp and log files
#[derive(Debug, Clone)]
pub struct JunkFilter {
    names: HashSet<String>,
    extensions: HashSet<String>,
}

impl JunkFilter {
    pub fn new<'a, N, E>(names: N, extensions: E) -> Self
    where
        N: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = &'a str>,
    {
        Self {
            names: names.into_iter().map(|n| n.to_lowercase()).collect(),
            extensions: extensions.into_iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(JUNK_FILE_NAMES.iter().copied(), JUNK_EXTENSIONS.iter().copied())
    }

    pub fn is_junk(&self, name: &str) -> bool {
        if self.names.contains(&name.to_lowercase()) {
            return true;
        }
        let ext = normalize_extension(name);
        !ext.is_empty() && self.extensions.contains(&ext)
    }
}

impl Default for JunkFilter {
    fn default() -> Self {
        Self::standard()
    }
}
