use crate::migration::scanner::ScanResult;
use crate::utils::file_name_lossy;
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Human-readable summary of a scan.
///
/// A mapped folder's file count includes junk nested inside it, while the
/// executor skips that junk. The report shows gross counts.
pub fn render_report(source_root: &Path, result: &ScanResult) -> String {
    let total_mapped = result.mapped_file_count();
    let total_triage = result.triage_file_count();
    let total_junk = result.junk_count();
    let rule = "=".repeat(RULE_WIDTH);

    let mut output = String::new();
    output.push_str(&format!("{rule}\n"));
    output.push_str(&format!("MIGRATION REPORT: {}\n", file_name_lossy(source_root)));
    output.push_str(&format!("{rule}\n"));
    output.push_str(&format!(
        "Total items: {}\n",
        total_mapped + total_triage + total_junk
    ));
    output.push_str(&format!("  Auto-mapped: {total_mapped}\n"));
    output.push_str(&format!("  Needs triage: {total_triage}\n"));
    output.push_str(&format!("  Junk (skip): {total_junk}\n"));
    if let Some(coverage) = result.coverage_percent() {
        output.push_str(&format!("  Coverage: {coverage}%\n"));
    }

    if !result.mapped.is_empty() {
        output.push_str(&format!("\n--- AUTO-MAPPED ({total_mapped} files) ---\n"));
        for entry in &result.mapped {
            output.push_str(&format!(
                "  {:<30} -> {:<30} ({} files)\n",
                entry.source_name,
                entry.destination.as_str(),
                entry.file_count
            ));
        }
    }

    if !result.triage.is_empty() {
        output.push_str(&format!("\n--- NEEDS TRIAGE ({total_triage} files) ---\n"));
        for entry in &result.triage {
            output.push_str(&format!(
                "  {:<31} {} ({} files)\n",
                format!("{}:", entry.source_name),
                entry.reason,
                entry.file_count
            ));
        }
    }

    if !result.junk.is_empty() {
        output.push_str("\n--- JUNK (skip) ---\n");
        for name in &result.junk {
            output.push_str(&format!("  {name}\n"));
        }
    }

    output
}
