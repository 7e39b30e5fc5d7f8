//! Tests for flat-file persistence
//!
//! These tests verify:
//! - Save writing one `key value` line per entry in table order
//! - Load rebuilding the table pairwise from whitespace tokens
//! - Duplicate and odd-token handling on load
//! - Missing-file errors and save idempotence
//! - The temporary file being swapped away after a save
//! - Failed saves preserving the previous contents and leaving no temp file

use std::fs;
use std::path::PathBuf;

use flatkv::storage::DataFile;
use flatkv::table::Table;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_data_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.db");
    (temp_dir, path)
}

/// A table with keys a, b, c mapped to 1, 2, 3
fn abc_table() -> Table {
    let mut table = Table::new();
    table.upsert("a", "1");
    table.upsert("b", "2");
    table.upsert("c", "3");
    table
}

// =============================================================================
// Save Tests
// =============================================================================

#[test]
fn test_save_writes_one_line_per_entry() {
    let (_temp, path) = setup_temp_data_file();
    let data_file = DataFile::new(&path);

    data_file.save(&abc_table()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "a 1\nb 2\nc 3\n");
}

#[test]
fn test_save_empty_table_writes_empty_file() {
    let (_temp, path) = setup_temp_data_file();
    let data_file = DataFile::new(&path);

    data_file.save(&Table::new()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.is_empty());
}

#[test]
fn test_save_overwrites_previous_contents() {
    let (_temp, path) = setup_temp_data_file();
    let data_file = DataFile::new(&path);

    data_file.save(&abc_table()).unwrap();

    let mut smaller = Table::new();
    smaller.upsert("only", "one");
    data_file.save(&smaller).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "only one\n");
}

#[test]
fn test_save_leaves_no_temporary_file_behind() {
    let (temp, path) = setup_temp_data_file();
    let data_file = DataFile::new(&path);

    data_file.save(&abc_table()).unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec!["test.db"]);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let (temp, _) = setup_temp_data_file();
    let path = temp.path().join("no_such_dir").join("test.db");
    let data_file = DataFile::new(&path);

    let err = data_file.save(&abc_table()).unwrap_err();
    assert!(err.to_string().contains("cannot save data file"));
}

#[test]
fn test_failed_save_preserves_previous_contents() {
    let (temp, path) = setup_temp_data_file();
    let data_file = DataFile::new(&path);

    data_file.save(&abc_table()).unwrap();

    // A directory squatting on the swap path makes the next save fail
    // before it can touch the data file.
    fs::create_dir(temp.path().join("test.db.tmp")).unwrap();

    let mut bigger = abc_table();
    bigger.upsert("d", "4");
    let err = data_file.save(&bigger).unwrap_err();

    assert!(err.to_string().contains("cannot save data file"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "a 1\nb 2\nc 3\n");
}

#[test]
fn test_failed_save_removes_its_temporary_file() {
    let (temp, path) = setup_temp_data_file();
    // A directory at the data path itself lets the temp file be written
    // but makes the final swap fail.
    fs::create_dir(&path).unwrap();
    let data_file = DataFile::new(&path);

    let err = data_file.save(&abc_table()).unwrap_err();

    assert!(err.to_string().contains("cannot save data file"));
    assert!(!temp.path().join("test.db.tmp").exists());
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_missing_file_fails() {
    let (_temp, path) = setup_temp_data_file();
    let data_file = DataFile::new(&path);

    let err = data_file.load().unwrap_err();
    assert!(err.to_string().contains("cannot load data file"));
}

#[test]
fn test_load_empty_file_yields_empty_table() {
    let (_temp, path) = setup_temp_data_file();
    fs::write(&path, "").unwrap();

    let table = DataFile::new(&path).load().unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_load_rebuilds_table_in_file_order() {
    let (_temp, path) = setup_temp_data_file();
    fs::write(&path, "a 1\nb 2\nc 3\n").unwrap();

    let table = DataFile::new(&path).load().unwrap();

    assert_eq!(table.len(), 3);
    let keys: Vec<_> = table.entries().map(|entry| entry.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    assert_eq!(table.get("b"), Some("2"));
}

#[test]
fn test_load_accepts_any_whitespace_between_tokens() {
    // Pairing is purely positional, so line breaks and spaces are
    // interchangeable token separators.
    let (_temp, path) = setup_temp_data_file();
    fs::write(&path, "a 1 b 2\n\n  c\t3").unwrap();

    let table = DataFile::new(&path).load().unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.get("a"), Some("1"));
    assert_eq!(table.get("c"), Some("3"));
}

#[test]
fn test_load_duplicate_key_keeps_first_position_last_value() {
    let (_temp, path) = setup_temp_data_file();
    fs::write(&path, "a 1\nb 2\na 9\n").unwrap();

    let table = DataFile::new(&path).load().unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("a"), Some("9"));
    let keys: Vec<_> = table.entries().map(|entry| entry.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_load_splits_on_ascii_whitespace_only() {
    // A non-breaking space is not a token separator, so it survives inside
    // a value.
    let (_temp, path) = setup_temp_data_file();
    fs::write(&path, "greeting hello\u{00A0}world\n").unwrap();

    let table = DataFile::new(&path).load().unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("greeting"), Some("hello\u{00A0}world"));
}

#[test]
fn test_load_drops_trailing_odd_token() {
    let (_temp, path) = setup_temp_data_file();
    fs::write(&path, "a 1\nb 2\norphan").unwrap();

    let table = DataFile::new(&path).load().unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("orphan"), None);
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_save_then_load_yields_identical_table() {
    let (_temp, path) = setup_temp_data_file();
    let data_file = DataFile::new(&path);
    let table = abc_table();

    data_file.save(&table).unwrap();
    let reloaded = data_file.load().unwrap();

    assert_eq!(reloaded, table);
}

#[test]
fn test_save_is_idempotent() {
    let (_temp, path) = setup_temp_data_file();
    let data_file = DataFile::new(&path);
    let table = abc_table();

    data_file.save(&table).unwrap();
    let first = fs::read_to_string(&path).unwrap();

    data_file.save(&table).unwrap();
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}
