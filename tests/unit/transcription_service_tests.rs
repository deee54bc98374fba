/*!
 * Tests for the transcription service facade
 */

use std::sync::Arc;
use pronouncecraft::transcription::{TranscriptionOptions, TranscriptionService, DEFAULT_MAX_WIDTH};
use crate::common;

fn service_with_width(max_width: usize) -> TranscriptionService {
    TranscriptionService::new(
        Arc::new(common::sample_table()),
        TranscriptionOptions { max_width },
    )
}

/// Test that a single line renders as an aligned word/IPA line pair
#[test]
fn test_transcribe_text_withSingleLine_shouldAlignWordAndIpa() {
    let service = service_with_width(DEFAULT_MAX_WIDTH);

    let block = service.transcribe_text("hello world");
    let lines: Vec<&str> = block.split('\n').collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].trim_end(), "hello  world");
    assert_eq!(lines[1].trim_end(), "həˈləʊ wɜːld");
    // Padded pairs joined with single spaces render both lines equally wide
    assert_eq!(lines[0].chars().count(), lines[1].chars().count());
}

/// Test that each word starts at the same column as its transcription
#[test]
fn test_transcribe_text_withSentence_shouldKeepColumnsInStep() {
    let service = service_with_width(DEFAULT_MAX_WIDTH);

    let block = service.transcribe_text("the quick brown fox");

    for (word_line, ipa_line) in common::parse_output_groups(&block) {
        let word_cols: Vec<usize> = word_starts(&word_line);
        let ipa_cols: Vec<usize> = word_starts(&ipa_line);
        assert_eq!(word_cols, ipa_cols);
    }
}

fn word_starts(line: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_token = false;
    for (col, ch) in line.chars().enumerate() {
        if ch != ' ' && !in_token {
            starts.push(col);
        }
        in_token = ch != ' ';
    }
    starts
}

/// Test that an empty text produces an empty block
#[test]
fn test_transcribe_text_withEmptyText_shouldReturnEmptyString() {
    let service = service_with_width(DEFAULT_MAX_WIDTH);

    assert_eq!(service.transcribe_text(""), "");
}

/// Test that blank-only input produces an empty block
#[test]
fn test_transcribe_text_withOnlyBlankLines_shouldReturnEmptyString() {
    let service = service_with_width(DEFAULT_MAX_WIDTH);

    assert_eq!(service.transcribe_text("\n\n\n"), "");
}

/// Test that source lines become separate paragraph groups
#[test]
fn test_transcribe_text_withTwoLines_shouldSeparateParagraphs() {
    let service = service_with_width(DEFAULT_MAX_WIDTH);

    let block = service.transcribe_text("cat\ndog");

    assert_eq!(block, "cat\nkæt\n\ndog\ndɒɡ");
}

/// Test that a blank source line marks a paragraph boundary without a pair
#[test]
fn test_transcribe_text_withBlankLineBetween_shouldKeepSingleSeparator() {
    let service = service_with_width(DEFAULT_MAX_WIDTH);

    let block = service.transcribe_text("cat\n\ndog");

    assert_eq!(block, "cat\nkæt\n\ndog\ndɒɡ");
}

/// Test that a long source line wraps under the configured budget
#[test]
fn test_transcribe_text_withLongLine_shouldWrapUnderMaxWidth() {
    let service = service_with_width(24);

    let block = service.transcribe_text("the quick brown fox jumps over the lazy dog");

    let groups = common::parse_output_groups(&block);
    assert!(groups.len() > 1, "expected the line to wrap into several groups");
    for (word_line, ipa_line) in &groups {
        assert!(word_line.chars().count() <= 24, "word line too wide: {:?}", word_line);
        assert!(ipa_line.chars().count() <= 24, "ipa line too wide: {:?}", ipa_line);
    }

    // Round-trip: word-lines reconstruct the original token sequence
    let rebuilt: Vec<String> = groups
        .iter()
        .flat_map(|(word_line, _)| word_line.split_ascii_whitespace().map(|s| s.to_string()))
        .collect();
    assert_eq!(
        rebuilt,
        vec!["the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog"]
    );
}

/// Test that unknown words survive the full pipeline unchanged
#[test]
fn test_transcribe_text_withUnknownWords_shouldPassThemThrough() {
    let service = service_with_width(DEFAULT_MAX_WIDTH);

    let block = service.transcribe_text("hello zorblat");
    let lines: Vec<&str> = block.split('\n').collect();

    assert_eq!(lines[0].trim_end(), "hello  zorblat");
    assert_eq!(lines[1].trim_end(), "həˈləʊ zorblat");
}

/// Test the line-level entry point exposed on the service
#[test]
fn test_transcribe_line_onService_shouldMatchModuleFunction() {
    let service = service_with_width(DEFAULT_MAX_WIDTH);

    let (words, ipas) = service.transcribe_line("hello world");

    assert_eq!(words, vec!["hello", "world"]);
    assert_eq!(ipas, vec!["həˈləʊ", "wɜːld"]);
}
