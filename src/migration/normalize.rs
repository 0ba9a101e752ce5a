use std::path::Path;

/// Lookup key for a legacy folder name: trimmed and upper-cased
pub fn normalize_folder_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Lookup key for a file name: its final extension with the dot, lower-cased.
/// Empty when the name has no extension (dot-files such as `.ds_store` have none).
pub fn normalize_extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_name_trimmed_and_uppercased() {
        assert_eq!(normalize_folder_name("  Site Measure "), "SITE MEASURE");
        assert_eq!(normalize_folder_name("rfi"), "RFI");
    }

    #[test]
    fn test_folder_name_keeps_inner_whitespace() {
        assert_eq!(normalize_folder_name("PDF  SHOP DWG"), "PDF  SHOP DWG");
    }

    #[test]
    fn test_extension_lowercase_with_dot() {
        assert_eq!(normalize_extension("part.DWG"), ".dwg");
        assert_eq!(normalize_extension("site.plan.dxf"), ".dxf");
    }

    #[test]
    fn test_extension_missing() {
        assert_eq!(normalize_extension("README"), "");
        assert_eq!(normalize_extension(".DS_Store"), "");
        assert_eq!(normalize_extension(""), "");
    }
}
