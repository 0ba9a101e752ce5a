pub mod inventory;
pub mod sheet;

pub use inventory::{Inventory, InventoryItem};
pub use sheet::{default_output_path, render_audit_sheet};
