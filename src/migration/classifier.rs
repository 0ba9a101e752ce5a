use crate::constants::{EXTENSION_RULES, FOLDER_RULES};
use crate::migration::normalize::{normalize_extension, normalize_folder_name};
use crate::taxonomy::TaxonomyNode;
use std::collections::HashMap;

/// Exact-match rule tables routing legacy names into the taxonomy.
/// Keys are normalized once at construction; lookups never do partial matching.
#[derive(Debug, Clone)]
pub struct Classifier {
    folder_rules: HashMap<String, TaxonomyNode>,
    extension_rules: HashMap<String, TaxonomyNode>,
}

impl Classifier {
    /// Build a classifier from (legacy folder name, destination) and (extension, destination) pairs
    pub fn new<'a, F, E>(folder_rules: F, extension_rules: E) -> Self
    where
        F: IntoIterator<Item = (&'a str, &'a str)>,
        E: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let folder_rules = folder_rules
            .into_iter()
            .map(|(key, dest)| (normalize_folder_name(key), TaxonomyNode::from(dest)))
            .collect();

        let extension_rules = extension_rules
            .into_iter()
            .map(|(ext, dest)| {
                let ext = ext.trim().trim_start_matches('.').to_lowercase();
                (format!(".{ext}"), TaxonomyNode::from(dest))
            })
            .collect();

        Self {
            folder_rules,
            extension_rules,
        }
    }

    /// Rules for the Cambium standard
    pub fn standard() -> Self {
        Self::new(FOLDER_RULES.iter().copied(), EXTENSION_RULES.iter().copied())
    }

    /// Destination for a legacy folder, if its name is a known key
    pub fn classify_folder(&self, name: &str) -> Option<&TaxonomyNode> {
        self.folder_rules.get(&normalize_folder_name(name))
    }

    /// Destination for a loose root-level file, by extension
    pub fn classify_root_file(&self, name: &str) -> Option<&TaxonomyNode> {
        let ext = normalize_extension(name);
        if ext.is_empty() {
            return None;
        }
        self.extension_rules.get(&ext)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_folder() {
        let classifier = Classifier::standard();
        assert_eq!(
            classifier.classify_folder("RFI").map(|n| n.as_str()),
            Some("01-admin/rfi")
        );
    }

    #[test]
    fn test_classify_folder_case_and_whitespace_insensitive() {
        let classifier = Classifier::standard();
        assert_eq!(
            classifier.classify_folder("  site pictures ").map(|n| n.as_str()),
            Some("10-site/photo")
        );
    }

    #[test]
    fn test_misspellings_share_destination() {
        let classifier = Classifier::standard();
        let correct = classifier.classify_folder("REVIEWED SHOP DWG");
        let misspelled = classifier.classify_folder("REVIWED SHOP DWG");
        assert_eq!(correct.map(|n| n.as_str()), Some("04-drawings/approved"));
        assert_eq!(correct, misspelled);
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let classifier = Classifier::standard();
        assert!(classifier.classify_folder("REVEIWED SHOP DWG").is_none());
        assert!(classifier.classify_folder("RFI ARCHIVE").is_none());
        assert!(classifier.classify_folder("").is_none());
    }

    #[test]
    fn test_classify_root_file_by_extension() {
        let classifier = Classifier::standard();
        assert_eq!(
            classifier.classify_root_file("part.DWG").map(|n| n.as_str()),
            Some("03-cad/working")
        );
        assert_eq!(
            classifier.classify_root_file("site.dxf").map(|n| n.as_str()),
            Some("03-cad/working")
        );
        assert!(classifier.classify_root_file("notes.txt").is_none());
        assert!(classifier.classify_root_file("dwg").is_none());
    }

    #[test]
    fn test_custom_rules_normalized() {
        let classifier = Classifier::new(
            [("shop drawings", "04-drawings/production")],
            [("PDF", "00-contract")],
        );
        assert!(classifier.classify_folder("SHOP DRAWINGS").is_some());
        assert!(classifier.classify_root_file("spec.pdf").is_some());
    }
}
