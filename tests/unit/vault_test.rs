//! Unit tests for the JSON-backed password vault.
//!
//! Tests loading from missing and malformed files, append ordering and the
//! on-disk layout.

use std::fs;

use rust_passtool::core::vault::Vault;
use rust_passtool::models::{RecordSource, StrengthLabel, VaultRecord};
use tempfile::TempDir;

const MIXED_VAULT: &str = r#"[
    {"password": "keepme12", "strength": "Medium", "source": "Generated"},
    {"password": "x", "strength": "weak", "source": "Generated"}
]"#;

fn setup() -> (TempDir, Vault) {
    let dir = tempfile::tempdir().unwrap();
    let vault = Vault::new(dir.path().join("passwords.json"));
    (dir, vault)
}

fn record(password: &str, strength: StrengthLabel, source: RecordSource) -> VaultRecord {
    VaultRecord {
        password: password.to_string(),
        strength,
        source,
    }
}

// ─── Loading ───

#[test]
fn test_missing_file_is_empty() {
    let (_dir, vault) = setup();
    assert!(vault.load_all().is_empty());
    assert!(vault.is_empty());
}

#[test]
fn test_malformed_file_is_empty() {
    let (_dir, vault) = setup();
    fs::write(vault.path(), "{ not json").unwrap();
    assert!(vault.load_all().is_empty());
}

#[test]
fn test_wrong_shape_is_empty() {
    let (_dir, vault) = setup();
    fs::write(
        vault.path(),
        r#"[{"password": "x", "strength": "Mighty", "source": "Generated"}]"#,
    )
    .unwrap();
    assert!(vault.load_all().is_empty());
}

#[test]
fn test_load_skips_unknown_entries_only() {
    let (_dir, vault) = setup();
    fs::write(vault.path(), MIXED_VAULT).unwrap();
    assert_eq!(
        vault.load_all(),
        vec![record("keepme12", StrengthLabel::Medium, RecordSource::Generated)]
    );
}

#[test]
fn test_reads_existing_file() {
    let (_dir, vault) = setup();
    fs::write(
        vault.path(),
        r#"[
    {
        "password": "abcdefgh",
        "strength": "Medium",
        "source": "Manual Entry"
    }
]"#,
    )
    .unwrap();

    let records = vault.load_all();
    assert_eq!(
        records,
        vec![record("abcdefgh", StrengthLabel::Medium, RecordSource::ManualEntry)]
    );
}

// ─── Appending ───

#[test]
fn test_append_then_load_returns_record_last() {
    let (_dir, vault) = setup();
    vault
        .append(record("first-pass", StrengthLabel::Medium, RecordSource::Generated))
        .unwrap();
    let before = vault.load_all().len();

    let new = record("Abcdefghijk1!", StrengthLabel::Excellent, RecordSource::ManualEntry);
    vault.append(new.clone()).unwrap();

    let records = vault.load_all();
    assert_eq!(records.len(), before + 1);
    assert_eq!(records.last(), Some(&new));
}

#[test]
fn test_append_keeps_insertion_order_and_duplicates() {
    let (_dir, vault) = setup();
    let a = record("aaaaaaaa", StrengthLabel::Medium, RecordSource::Generated);
    let b = record("bbb", StrengthLabel::Weak, RecordSource::ManualEntry);

    vault.append(a.clone()).unwrap();
    vault.append(b.clone()).unwrap();
    vault.append(a.clone()).unwrap();

    assert_eq!(vault.load_all(), vec![a.clone(), b, a]);
    assert_eq!(vault.len(), 3);
}

#[test]
fn test_append_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let vault = Vault::new(dir.path().join("nested").join("vault.json"));
    vault
        .append(record("abcdefgh", StrengthLabel::Medium, RecordSource::Generated))
        .unwrap();
    assert_eq!(vault.len(), 1);
}

#[test]
fn test_append_keeps_entries_with_unknown_labels() {
    let (_dir, vault) = setup();
    fs::write(vault.path(), MIXED_VAULT).unwrap();

    let new = record("Abcdefgh1!", StrengthLabel::Strong, RecordSource::Generated);
    vault.append(new.clone()).unwrap();

    let keep = record("keepme12", StrengthLabel::Medium, RecordSource::Generated);
    assert_eq!(vault.load_all(), vec![keep, new]);

    let raw: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(vault.path()).unwrap()).unwrap();
    assert_eq!(raw.len(), 3);
    assert_eq!(raw[1]["strength"], "weak");
    assert_eq!(raw[1]["password"], "x");
}

#[test]
fn test_append_over_corrupt_file_sets_it_aside() {
    let (_dir, vault) = setup();
    fs::write(vault.path(), "garbage").unwrap();

    vault
        .append(record("abcdefgh", StrengthLabel::Medium, RecordSource::Generated))
        .unwrap();

    assert_eq!(vault.len(), 1);
    assert_eq!(fs::read_to_string(vault.corrupt_path()).unwrap(), "garbage");
}

#[test]
fn test_append_over_non_list_json_sets_it_aside() {
    let (_dir, vault) = setup();
    fs::write(vault.path(), r#"{"password": "lonely"}"#).unwrap();

    vault
        .append(record("abcdefgh", StrengthLabel::Medium, RecordSource::Generated))
        .unwrap();

    assert_eq!(vault.len(), 1);
    assert!(vault.corrupt_path().exists());
}

#[test]
fn test_file_uses_display_labels() {
    let (_dir, vault) = setup();
    vault
        .append(record("abc", StrengthLabel::Weak, RecordSource::ManualEntry))
        .unwrap();

    let content = fs::read_to_string(vault.path()).unwrap();
    assert!(content.contains("\"strength\": \"Weak (Too Short)\""));
    assert!(content.contains("\"source\": \"Manual Entry\""));
    assert!(content.starts_with("[\n    {"));
}

#[test]
fn test_no_temp_files_left_behind() {
    let (dir, vault) = setup();
    vault
        .append(record("abcdefgh", StrengthLabel::Medium, RecordSource::Generated))
        .unwrap();
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_write_to_unwritable_location_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "file, not a directory").unwrap();

    let vault = Vault::new(blocker.join("vault.json"));
    let result = vault.append(record("abcdefgh", StrengthLabel::Medium, RecordSource::Generated));
    assert!(result.is_err());
}
