use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Compute Blake3 hash of file contents
pub fn compute_file_hash(file_path: &Path) -> Result<String> {
    let mut file = File::open(file_path)
        .with_context(|| format!("Failed to open file for hashing: {}", file_path.display()))?;
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_hex().to_string())
}

/// Expand `~` and environment variables in a user-supplied path
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(raw),
    }
}

/// File name of a path as UTF-8 (lossy), empty when the path has none
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Append a suffix to the last component of a path, ignoring trailing separators
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim_end_matches(['/', std::path::MAIN_SEPARATOR]);
    let base = if trimmed.is_empty() { raw.as_ref() } else { trimmed };
    PathBuf::from(format!("{base}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_compute_file_hash() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "test content").unwrap();
        file.flush().unwrap();

        let hash = compute_file_hash(file.path()).unwrap();
        assert_eq!(hash.len(), 64); // Blake3 hex string length
    }

    #[test]
    fn test_compute_file_hash_different_content() {
        let mut file1 = NamedTempFile::new().unwrap();
        write!(file1, "content one").unwrap();
        file1.flush().unwrap();

        let mut file2 = NamedTempFile::new().unwrap();
        write!(file2, "content two").unwrap();
        file2.flush().unwrap();

        let hash1 = compute_file_hash(file1.path()).unwrap();
        let hash2 = compute_file_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_compute_file_hash_missing_file() {
        assert!(compute_file_hash(Path::new("/definitely/not/here.dwg")).is_err());
    }

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(expand_path("/srv/projects"), PathBuf::from("/srv/projects"));
    }

    #[test]
    fn test_with_suffix_strips_trailing_separator() {
        assert_eq!(
            with_suffix(Path::new("/jobs/2601-netflix/"), "-cambium"),
            PathBuf::from("/jobs/2601-netflix-cambium")
        );
        assert_eq!(
            with_suffix(Path::new("legacy"), "-cambium"),
            PathBuf::from("legacy-cambium")
        );
    }

    #[test]
    fn test_file_name_lossy() {
        assert_eq!(file_name_lossy(Path::new("/a/b/RFI")), "RFI");
        assert_eq!(file_name_lossy(Path::new("/")), "");
    }
}
