/*!
 * Tests for pronunciation table loading and lookup
 */

use anyhow::Result;
use pronouncecraft::pronunciation_table::PronunciationTable;
use crate::common;

/// Test case-insensitive lookup on an in-memory table
#[test]
fn test_get_withMixedCaseQuery_shouldMatch() {
    let table = PronunciationTable::from_entries([("cat", "kæt")]);

    assert_eq!(table.get("cat"), Some("kæt"));
    assert_eq!(table.get("Cat"), Some("kæt"));
    assert_eq!(table.get("CAT"), Some("kæt"));
    assert_eq!(table.get("dog"), None);
}

/// Test that non-breaking spaces are stripped from keys on both sides
#[test]
fn test_get_withNonBreakingSpaces_shouldNormalizeKeys() {
    let table = PronunciationTable::from_entries([("\u{a0}cat\u{a0}", "kæt")]);

    assert_eq!(table.get("cat"), Some("kæt"));
    assert_eq!(table.get("cat\u{a0}"), Some("kæt"));
}

/// Test that keys are trimmed of surrounding whitespace
#[test]
fn test_from_entries_withPaddedKeys_shouldTrim() {
    let table = PronunciationTable::from_entries([("  cat  ", "kæt")]);

    assert_eq!(table.get("cat"), Some("kæt"));
    assert_eq!(table.len(), 1);
}

/// Test loading a CSV file with a header row
#[test]
fn test_load_from_file_withHeaderRow_shouldSkipHeader() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let table_path = common::create_test_table(&temp_dir.path().to_path_buf(), "table.csv")?;

    let table = PronunciationTable::load_from_file(&table_path)?;

    assert_eq!(table.get("cat"), Some("kæt"));
    assert_eq!(table.get("hello"), Some("həˈləʊ"));
    // The header row must not become an entry
    assert_eq!(table.get("words"), None);
    Ok(())
}

/// Test that loading a missing file fails
#[test]
fn test_load_from_file_withMissingFile_shouldFail() {
    let result = PronunciationTable::load_from_file("no_such_table_12345.csv");

    assert!(result.is_err());
}

/// Test that a file with only a header is rejected as empty
#[test]
fn test_load_from_file_withOnlyHeader_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let table_path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "empty.csv",
        "Words,British IPA\n",
    )?;

    let result = PronunciationTable::load_from_file(&table_path);

    assert!(result.is_err());
    Ok(())
}

/// Test parsing quoted CSV cells
#[test]
fn test_parse_withQuotedCells_shouldStripQuotes() -> Result<()> {
    let table = PronunciationTable::parse("\"Words\",\"British IPA\"\n\"cat\",\"kæt\"\n")?;

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("cat"), Some("kæt"));
    Ok(())
}

/// Test parsing tab-separated rows
#[test]
fn test_parse_withTabSeparator_shouldParse() -> Result<()> {
    let table = PronunciationTable::parse("cat\tkæt\ndog\tdɒɡ\n")?;

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("dog"), Some("dɒɡ"));
    Ok(())
}

/// Test that malformed rows are skipped without failing the load
#[test]
fn test_parse_withMalformedRow_shouldSkipRow() -> Result<()> {
    let table = PronunciationTable::parse("cat,kæt\nno-separator-here\ndog,dɒɡ\n")?;

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("cat"), Some("kæt"));
    assert_eq!(table.get("dog"), Some("dɒɡ"));
    Ok(())
}

/// Test that rows missing the transcription cell are skipped
#[test]
fn test_parse_withMissingTranscription_shouldSkipRow() -> Result<()> {
    let table = PronunciationTable::parse("cat,kæt\ndog,\n")?;

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("dog"), None);
    Ok(())
}

/// Test that Windows line endings are handled
#[test]
fn test_parse_withCrlfLineEndings_shouldParse() -> Result<()> {
    let table = PronunciationTable::parse("Words,British IPA\r\ncat,kæt\r\n")?;

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("cat"), Some("kæt"));
    Ok(())
}

/// Test len and is_empty reporting
#[test]
fn test_len_withEntries_shouldReportCount() {
    let empty = PronunciationTable::from_entries(Vec::<(&str, &str)>::new());
    let table = common::sample_table();

    assert!(empty.is_empty());
    assert!(!table.is_empty());
    assert_eq!(table.len(), 12);
}
