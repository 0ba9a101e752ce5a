use crate::constants::DEFAULT_INVENTORY_CATEGORY;
use crate::error::CambiumError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// A stock inventory as exported from the shop's counting sheets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub title: Option<String>,
    /// Date of the original count, shown on the worksheet header
    #[serde(default)]
    pub count_date: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub items: Vec<InventoryItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub finish: Option<Value>,
    #[serde(default)]
    pub size: Option<Value>,
    /// Documented quantity; counts, decimals and free text all occur
    #[serde(default)]
    pub qty: Option<Value>,
    #[serde(default)]
    pub category: Option<String>,
}

impl InventoryItem {
    pub fn category(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_INVENTORY_CATEGORY)
    }

    pub fn name(&self) -> String {
        scalar_text(self.name.as_ref()).unwrap_or_default()
    }

    /// Product code; `None` when absent or blank
    pub fn code(&self) -> Option<String> {
        scalar_text(self.code.as_ref())
    }

    pub fn finish(&self) -> Option<String> {
        scalar_text(self.finish.as_ref())
    }

    pub fn size(&self) -> String {
        scalar_text(self.size.as_ref()).unwrap_or_default()
    }

    /// Quantity as printed on the worksheet; missing quantities read as 0
    pub fn qty_display(&self) -> String {
        scalar_text(self.qty.as_ref()).unwrap_or_else(|| "0".to_string())
    }
}

/// Printable form of a JSON field: strings verbatim, numbers and booleans as written
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl Inventory {
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CambiumError::not_a_file(path).into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read inventory: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse inventory: {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| CambiumError::InvalidInventory(e.to_string()).into())
    }

    /// Items grouped by category, categories in order of first appearance
    pub fn by_category(&self) -> Vec<(&str, Vec<&InventoryItem>)> {
        let mut groups: Vec<(&str, Vec<&InventoryItem>)> = Vec::new();
        for item in &self.items {
            let category = item.category();
            match groups.iter().position(|(name, _)| *name == category) {
                Some(index) => groups[index].1.push(item),
                None => groups.push((category, vec![item])),
            }
        }
        groups
    }
}
