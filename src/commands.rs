use crate::audit::{default_output_path, render_audit_sheet, Inventory};
use crate::config::Config;
use crate::constants::DEFAULT_PDF_PREVIEW_CHARS;
use crate::error::CambiumError;
use crate::migration::{render_report, Executor, Scanner};
use crate::pdf::PdfExtractor;
use crate::taxonomy::{ScaffoldPlan, Taxonomy};
use crate::utils::{expand_path, with_suffix};
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

/// Where new projects go when neither `--base` nor the config names a directory
pub const DEFAULT_PROJECTS_BASE: &str = if cfg!(windows) {
    r"C:\Projects"
} else {
    "~/Projects"
};

/// Flags shared by every binary
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (default: config/settings.toml or ~/.config/cambium/settings.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// An explicit config file must load; a missing default one falls back to defaults
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_file(path),
            None => Ok(Config::load().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
                Config::default()
            })),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Project folder name (e.g., 2601-netflix-burbank)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Base directory for projects (overrides config)
    #[arg(long, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Actually create folders (default is dry-run)
    #[arg(long)]
    pub execute: bool,
}

#[derive(Args, Debug, Clone)]
pub struct MigrateArgs {
    /// Path to legacy project folder
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination for the Cambium structure (default: <SOURCE>-cambium)
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Actually copy files (default is dry-run report only)
    #[arg(long)]
    pub execute: bool,

    /// Print the scan result as JSON instead of the text report
    #[arg(long, conflicts_with = "execute")]
    pub json: bool,

    /// Hash every copy and compare it with its source
    #[arg(long)]
    pub verify: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PdfArgs {
    /// PDF file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory for images pulled from scanned pages (default: next to the PDF)
    #[arg(long, value_name = "DIR")]
    pub images_dir: Option<PathBuf>,

    /// Characters of text shown per page
    #[arg(long, default_value_t = DEFAULT_PDF_PREVIEW_CHARS)]
    pub max_chars: usize,
}

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    /// Inventory JSON file
    #[arg(value_name = "INVENTORY")]
    pub inventory: PathBuf,

    /// Output HTML file (default: <INVENTORY stem>-audit-sheet.html)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Base directory for `create`: flag, then config, then the platform default
pub fn resolve_base_dir(flag: Option<&Path>, config: &Config) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.scaffold_base_dir())
        .unwrap_or_else(|| expand_path(DEFAULT_PROJECTS_BASE))
}

/// Destination for `migrate`: flag, or the source path plus the configured suffix
pub fn resolve_dest_dir(source: &Path, flag: Option<&Path>, config: &Config) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(|| with_suffix(source, &config.migration.dest_suffix))
}

pub fn run_create(args: &CreateArgs, config: &Config) -> Result<()> {
    let base = resolve_base_dir(args.base.as_deref(), config);
    let plan = ScaffoldPlan::new(&Taxonomy::standard(), &base, &args.name)?;

    if args.execute {
        let created = plan.execute()?;
        println!(
            "Created {} folders under {}",
            created,
            plan.project_dir().display()
        );
    } else {
        println!("{}", plan.render_dry_run());
    }

    Ok(())
}

pub fn run_migrate(args: &MigrateArgs, config: &Config) -> Result<()> {
    if !args.source.is_dir() {
        return Err(CambiumError::not_a_directory(&args.source).into());
    }
    let dest = resolve_dest_dir(&args.source, args.dest.as_deref(), config);

    let scanner = Scanner::default();
    let result = scanner.scan(&args.source)?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize scan result")?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", render_report(&args.source, &result));

    if !args.execute {
        println!("DRY RUN — run with --execute to copy files.");
        return Ok(());
    }

    if !result.triage.is_empty() {
        println!("WARNING: {} items need manual triage.", result.triage.len());
        println!("Only auto-mapped items will be copied.\n");
    }

    let executor = Executor::new(scanner.junk_filter().clone())
        .with_verification(args.verify || config.migration.verify_copies)
        .with_progress(config.migration.show_progress);
    let summary = executor.execute(&args.source, &dest, &result)?;

    println!("Copied {} files to {}", summary.copied, dest.display());
    if summary.skipped_junk > 0 {
        println!(
            "Skipped {} junk files inside mapped folders (included in the report counts)",
            summary.skipped_junk
        );
    }
    if summary.overwritten > 0 {
        println!("Overwrote {} existing files", summary.overwritten);
    }

    Ok(())
}

pub fn run_pdf(args: &PdfArgs) -> Result<()> {
    if !args.file.is_file() {
        return Err(CambiumError::not_a_file(&args.file).into());
    }

    let mut extractor = PdfExtractor::new(args.max_chars);
    if let Some(dir) = &args.images_dir {
        let prefix = PdfExtractor::default_image_prefix(&args.file);
        let name = prefix.file_name().context("PDF path has no file name")?;
        extractor = extractor.with_image_prefix(dir.join(name));
    }

    let extraction = extractor.extract(&args.file)?;
    print!("{}", extraction.render());
    Ok(())
}

pub fn run_audit(args: &AuditArgs) -> Result<()> {
    let inventory = Inventory::from_file(&args.inventory)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.inventory));

    let html = render_audit_sheet(&inventory);
    std::fs::write(&output, html)
        .with_context(|| format!("Failed to write audit sheet: {}", output.display()))?;

    println!("Created audit sheet with {} items", inventory.items.len());
    tracing::info!(path = %output.display(), "audit sheet written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_base_dir_precedence() {
        let mut config = Config::default();
        assert_eq!(
            resolve_base_dir(None, &config),
            expand_path(DEFAULT_PROJECTS_BASE)
        );

        config.scaffold.base_dir = Some("/srv/projects".into());
        assert_eq!(resolve_base_dir(None, &config), PathBuf::from("/srv/projects"));
        assert_eq!(
            resolve_base_dir(Some(Path::new("/tmp/jobs")), &config),
            PathBuf::from("/tmp/jobs")
        );
    }

    #[test]
    fn test_load_config_missing_explicit_file_fails() {
        let args = GlobalArgs {
            verbose: false,
            config: Some(PathBuf::from("/no/such/settings.toml")),
        };
        assert!(args.load_config().is_err());
    }

    #[test]
    fn test_load_config_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        std::fs::write(&path, "[migration]\ndest_suffix = \"-new\"\n").unwrap();

        let args = GlobalArgs {
            verbose: false,
            config: Some(path),
        };
        assert_eq!(args.load_config().unwrap().migration.dest_suffix, "-new");
    }

    #[test]
    fn test_resolve_dest_dir_default_suffix() {
        let config = Config::default();
        assert_eq!(
            resolve_dest_dir(Path::new("/jobs/2410-oak/"), None, &config),
            PathBuf::from("/jobs/2410-oak-cambium")
        );
        assert_eq!(
            resolve_dest_dir(Path::new("/jobs/2410-oak"), Some(Path::new("/out")), &config),
            PathBuf::from("/out")
        );
    }

    #[test]
    fn test_run_migrate_rejects_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let args = MigrateArgs {
            source: temp_dir.path().join("missing"),
            dest: None,
            execute: false,
            json: false,
            verify: false,
        };

        let err = run_migrate(&args, &Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CambiumError>(),
            Some(CambiumError::Usage(_))
        ));
    }

    #[test]
    fn test_run_migrate_execute_uses_default_destination() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("2410-oak");
        std::fs::create_dir_all(source.join("PO")).unwrap();
        std::fs::write(source.join("PO/po-001.pdf"), "po").unwrap();

        let args = MigrateArgs {
            source: source.clone(),
            dest: None,
            execute: true,
            json: false,
            verify: true,
        };
        let mut config = Config::default();
        config.migration.show_progress = false;

        run_migrate(&args, &config).unwrap();
        assert!(temp_dir.path().join("2410-oak-cambium/08-buyout/po-001.pdf").exists());
    }

    #[test]
    fn test_run_create_execute() {
        let temp_dir = TempDir::new().unwrap();
        let args = CreateArgs {
            name: "2601-netflix-burbank".into(),
            base: Some(temp_dir.path().to_path_buf()),
            execute: true,
        };

        run_create(&args, &Config::default()).unwrap();
        assert!(temp_dir.path().join("2601-netflix-burbank/11-awmac/qc").is_dir());
    }

    #[test]
    fn test_run_audit_writes_default_output() {
        let temp_dir = TempDir::new().unwrap();
        let inventory = temp_dir.path().join("laminate.json");
        std::fs::write(&inventory, r#"{"items": [{"name": "Grey", "qty": 1}]}"#).unwrap();

        run_audit(&AuditArgs {
            inventory,
            output: None,
        })
        .unwrap();

        let html =
            std::fs::read_to_string(temp_dir.path().join("laminate-audit-sheet.html")).unwrap();
        assert!(html.contains("<td>Grey</td>"));
    }

    #[test]
    fn test_run_pdf_rejects_missing_file() {
        let args = PdfArgs {
            file: PathBuf::from("/no/such/scan.pdf"),
            images_dir: None,
            max_chars: 10,
        };
        assert!(run_pdf(&args).is_err());
    }
}
