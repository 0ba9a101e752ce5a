use crate::error::CambiumError;
use crate::taxonomy::Taxonomy;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Folders to create for a new project, relative to the project directory
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    project_dir: PathBuf,
    folders: Vec<PathBuf>,
}

impl ScaffoldPlan {
    /// Plan the taxonomy for `project_name` under `base_dir`
    pub fn new(taxonomy: &Taxonomy, base_dir: &Path, project_name: &str) -> Result<Self> {
        let project_name = project_name.trim();
        if project_name.is_empty() {
            return Err(CambiumError::Usage("project name must not be empty".into()).into());
        }
        if Path::new(project_name).is_absolute() {
            return Err(CambiumError::Usage(format!(
                "project name must be relative to the base directory: {project_name}"
            ))
            .into());
        }

        Ok(Self {
            project_dir: base_dir.join(project_name),
            folders: taxonomy.folders().into_iter().collect(),
        })
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Relative folder paths in creation order
    pub fn folders(&self) -> &[PathBuf] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Listing of every folder that would be created
    pub fn render_dry_run(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "DRY RUN - would create {} folders under {}:\n\n",
            self.len(),
            self.project_dir.display()
        ));
        for folder in &self.folders {
            output.push_str(&format!("  {}{}\n", folder.display(), MAIN_SEPARATOR));
        }
        output.push_str("\nRun with --execute to create.");
        output
    }

    /// Create every folder. Folders that already exist are left untouched.
    pub fn execute(&self) -> Result<usize> {
        for folder in &self.folders {
            let path = self.project_dir.join(folder);
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "folder ready");
        }

        tracing::info!(
            count = self.folders.len(),
            project = %self.project_dir.display(),
            "scaffold complete"
        );
        Ok(self.folders.len())
    }
}
