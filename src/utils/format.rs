// src/utils/format.rs
use crate::models::{StrengthLabel, VaultRecord};

const PREVIEW_CHARS: usize = 5;

// First few characters of a password followed by an ellipsis
pub fn password_preview(password: &str) -> String {
    let head: String = password.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}

pub fn save_summary(password: &str, strength: StrengthLabel) -> String {
    format!("Saved '{}' with strength: {}", password_preview(password), strength)
}

/// Render saved records as the aligned `INDEX | STRENGTH | PASSWORD` table.
pub fn format_vault_table(records: &[VaultRecord]) -> String {
    if records.is_empty() {
        return "No passwords saved yet.".to_string();
    }

    let mut out = String::from("INDEX | STRENGTH    | PASSWORD\n");
    out.push_str(&"-".repeat(48));
    out.push('\n');
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "{:>5} | {:<11} | {}\n",
            i + 1,
            record.strength,
            record.password
        ));
    }
    out
}
