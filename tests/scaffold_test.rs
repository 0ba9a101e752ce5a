use cambium::taxonomy::{ScaffoldPlan, Taxonomy};
use std::fs;
use tempfile::TempDir;
use walkdir::WalkDir;

#[test]
fn test_scaffold_execute_twice_without_errors_or_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let plan = ScaffoldPlan::new(&Taxonomy::standard(), temp_dir.path(), "2601-netflix-burbank")
        .unwrap();

    assert_eq!(plan.execute().unwrap(), plan.len());
    assert_eq!(plan.execute().unwrap(), plan.len());

    let dirs = WalkDir::new(plan.project_dir())
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .count();
    assert_eq!(dirs, plan.len());
}

#[test]
fn test_scaffold_dry_run_matches_executed_tree() {
    let temp_dir = TempDir::new().unwrap();
    let plan = ScaffoldPlan::new(&Taxonomy::standard(), temp_dir.path(), "job").unwrap();

    let listed = plan
        .render_dry_run()
        .lines()
        .filter(|line| line.starts_with("  "))
        .count();
    plan.execute().unwrap();

    assert_eq!(listed, plan.len());
    for folder in plan.folders() {
        assert!(plan.project_dir().join(folder).is_dir(), "missing {}", folder.display());
    }
}

#[test]
fn test_scaffold_into_existing_project_keeps_files() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("job");
    fs::create_dir_all(project.join("01-admin/rfi")).unwrap();
    fs::write(project.join("01-admin/rfi/rfi-001.pdf"), "q").unwrap();

    let plan = ScaffoldPlan::new(&Taxonomy::standard(), temp_dir.path(), "job").unwrap();
    plan.execute().unwrap();

    assert_eq!(fs::read_to_string(project.join("01-admin/rfi/rfi-001.pdf")).unwrap(), "q");
    assert!(project.join("01-admin/rfi/_received").is_dir());
}
