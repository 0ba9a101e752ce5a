use crate::audit::inventory::{Inventory, InventoryItem};
use std::path::{Path, PathBuf};

const DEFAULT_TITLE: &str = "INVENTORY AUDIT SHEET";
const BLANK_LINE: &str = "_______________";

const STYLE: &str = "body{font-family:Arial;font-size:10pt;padding:20px}
h1{text-align:center;font-size:16pt}
h2{background:#333;color:white;padding:5px 10px;font-size:12pt}
table{width:100%;border-collapse:collapse;margin-bottom:15px}
th,td{border:1px solid #ccc;padding:6px 4px}
th{background:#eee;font-size:9pt}
.blank{background:#fffde7;min-height:20px}
.actual{background:#e3f2fd;min-height:20px}
.qty{font-weight:bold;text-align:center}";

const COLUMNS: &[&str] = &[
    "Name", "Code", "Finish", "Size", "Mfr", "Location", "Doc Qty", "Actual", "OK?",
];

/// Worksheet written next to the inventory: `<stem>-audit-sheet.html`
pub fn default_output_path(inventory_path: &Path) -> PathBuf {
    let stem = inventory_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "inventory".to_string());
    inventory_path.with_file_name(format!("{stem}-audit-sheet.html"))
}

/// Printable HTML worksheet for a physical stock count.
/// Yellow cells mark data to fill in, blue cells take the counted quantity.
pub fn render_audit_sheet(inventory: &Inventory) -> String {
    let title = inventory
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_TITLE);
    let count_date = inventory.count_date.as_deref().unwrap_or(BLANK_LINE);

    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"UTF-8\"><title>{}</title>\n<style>\n{STYLE}\n</style></head><body>\n",
        escape_html(title)
    ));
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    html.push_str(&format!(
        "<p style=\"text-align:center\">Original Count: {} | Audit Date: {BLANK_LINE}</p>\n",
        escape_html(count_date)
    ));
    html.push_str(
        "<p><b>Instructions:</b> Fill YELLOW cells with missing data. Record actual count in BLUE cells.</p>\n",
    );

    for (category, items) in inventory.by_category() {
        html.push_str(&format!("<h2>{}</h2>\n<table>\n", escape_html(category)));
        html.push_str("<tr>");
        for column in COLUMNS {
            html.push_str(&format!("<th>{column}</th>"));
        }
        html.push_str("</tr>\n");
        for item in items {
            render_row(&mut html, item);
        }
        html.push_str("</table>\n");
    }

    if let Some(note) = inventory.note.as_deref().filter(|n| !n.trim().is_empty()) {
        html.push_str(&format!("<p><b>Note:</b> {}</p>\n", escape_html(note)));
    }
    html.push_str(&format!(
        "<p>Audited By: {BLANK_LINE} | Signature: {BLANK_LINE} | Date: {BLANK_LINE}</p>\n"
    ));
    html.push_str("</body></html>");

    html
}

fn render_row(html: &mut String, item: &InventoryItem) {
    html.push_str(&format!(
        "<tr><td>{}</td>{}{}<td>{}</td>",
        escape_html(&item.name()),
        optional_cell(item.code().as_deref()),
        optional_cell(item.finish().as_deref()),
        escape_html(&item.size()),
    ));
    // Mfr and Location are always filled in on the floor
    html.push_str("<td class=\"blank\"></td><td class=\"blank\"></td>");
    html.push_str(&format!(
        "<td class=\"qty\">{}</td><td class=\"actual\"></td><td></td></tr>\n",
        escape_html(&item.qty_display())
    ));
}

fn optional_cell(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("<td>{}</td>", escape_html(v)),
        None => "<td class=\"blank\"></td>".to_string(),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
