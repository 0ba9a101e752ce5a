pub mod node;
pub mod scaffold;

pub use node::TaxonomyNode;
pub use scaffold::ScaffoldPlan;

use crate::constants::{TAXONOMY_EXTRAS, TAXONOMY_SECTIONS};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A section of the taxonomy and the folders directly below it
#[derive(Debug, Clone)]
pub struct Section {
    pub name: String,
    pub subfolders: Vec<String>,
}

/// The full project folder template: numbered sections plus extra nested folders
#[derive(Debug, Clone)]
pub struct Taxonomy {
    sections: Vec<Section>,
    extras: Vec<(TaxonomyNode, Vec<String>)>,
}

impl Taxonomy {
    pub fn new(sections: Vec<Section>, extras: Vec<(TaxonomyNode, Vec<String>)>) -> Self {
        Self { sections, extras }
    }

    /// The standard Cambium 00-11 template
    pub fn standard() -> Self {
        let sections = TAXONOMY_SECTIONS
            .iter()
            .map(|(name, subs)| Section {
                name: name.to_string(),
                subfolders: subs.iter().map(|s| s.to_string()).collect(),
            })
            .collect();

        let extras = TAXONOMY_EXTRAS
            .iter()
            .map(|(parent, subs)| {
                (
                    TaxonomyNode::from(*parent),
                    subs.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();

        Self::new(sections, extras)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Every folder of the template relative to the project root, sorted and de-duplicated
    pub fn folders(&self) -> BTreeSet<PathBuf> {
        let mut folders = BTreeSet::new();

        for section in &self.sections {
            let section_path = PathBuf::from(&section.name);
            for sub in &section.subfolders {
                folders.insert(section_path.join(sub));
            }
            folders.insert(section_path);
        }

        for (parent, subs) in &self.extras {
            let parent_path = parent.to_relative_path();
            for sub in subs {
                folders.insert(parent_path.join(sub));
            }
        }

        folders
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_standard_sections() {
        let taxonomy = Taxonomy::standard();
        let names: Vec<_> = taxonomy.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"00-contract"));
        assert!(names.contains(&"11-awmac"));
        assert!(names.contains(&"_archive"));
        assert!(names.contains(&"_cambium"));
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn test_folders_include_sections_subfolders_and_extras() {
        let folders = Taxonomy::standard().folders();
        assert!(folders.contains(Path::new("07-production")));
        assert!(folders.contains(&Path::new("04-drawings").join("approved")));
        assert!(folders.contains(&Path::new("01-admin").join("rfi").join("_received")));
        assert!(folders.contains(&Path::new("08-buyout").join("_received")));
        assert!(folders.contains(&Path::new("_cambium").join("cache")));
    }

    #[test]
    fn test_folder_count() {
        // 14 sections, 51 subfolders, 7 extras
        assert_eq!(Taxonomy::standard().folders().len(), 72);
    }

    #[test]
    fn test_folders_sorted() {
        let folders: Vec<_> = Taxonomy::standard().folders().into_iter().collect();
        let mut sorted = folders.clone();
        sorted.sort();
        assert_eq!(folders, sorted);
        assert_eq!(folders[0], PathBuf::from("00-contract"));
    }
}
