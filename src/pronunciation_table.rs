use std::collections::HashMap;
use std::path::Path;
use anyhow::{Result, Context};
use log::debug;
use crate::errors::TableError;

// @module: Pronunciation table loading and lookup

/// Immutable mapping from normalized English word to IPA transcription
///
/// Built once at startup from a two-column table file and shared read-only
/// for the lifetime of the process. Unknown words are not an error; callers
/// fall back to the original text.
#[derive(Debug, Default)]
pub struct PronunciationTable {
    // @field: Normalized word to transcription
    entries: HashMap<String, String>,
}

impl PronunciationTable {
    /// Build a table from (word, transcription) pairs - used by tests and embedding
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, ipa)| (normalize_key(word.as_ref()), ipa.as_ref().to_string()))
            .collect();
        PronunciationTable { entries }
    }

    /// Load the table from a CSV or TSV file
    ///
    /// The first line is skipped when it is the column header. Each data row
    /// is split at the first comma or tab; quoted cells are unwrapped. Rows
    /// without a transcription are skipped. A file that cannot be read, or
    /// that yields zero entries, is a startup error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TableError::ReadFailed(format!("{}: {}", path.display(), e)))?;

        let table = Self::parse(&content)
            .with_context(|| format!("Failed to parse table file: {}", path.display()))?;

        if table.is_empty() {
            return Err(TableError::Empty(path.display().to_string()).into());
        }

        Ok(table)
    }

    /// Parse table rows from an in-memory string
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim_start_matches('\u{feff}').trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let Some((word, ipa)) = split_row(line) else {
                debug!("Skipping table row {}: no separator found", line_num + 1);
                continue;
            };

            // Header row names the columns rather than a word
            if line_num == 0 && word.eq_ignore_ascii_case("words") {
                continue;
            }

            let key = normalize_key(word);
            if key.is_empty() || ipa.is_empty() {
                debug!("Skipping table row {}: missing word or transcription", line_num + 1);
                continue;
            }

            entries.insert(key, ipa.to_string());
        }

        Ok(PronunciationTable { entries })
    }

    /// Look up the transcription for a word, case-insensitively
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&normalize_key(word)).map(|s| s.as_str())
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize a word into its lookup key
///
/// Non-breaking spaces are stripped before trimming; table sources exported
/// from spreadsheets carry U+00A0 inside otherwise ordinary cells.
fn normalize_key(word: &str) -> String {
    word.replace('\u{a0}', "").trim().to_lowercase()
}

/// Split a table row into its word and transcription cells
fn split_row(line: &str) -> Option<(&str, &str)> {
    let (word, rest) = if let Some(stripped) = line.strip_prefix('"') {
        let end = stripped.find('"')?;
        (&stripped[..end], &stripped[end + 1..])
    } else {
        let sep = line.find(&[',', '\t'][..])?;
        (&line[..sep], &line[sep..])
    };

    let ipa = rest
        .trim_start_matches(&[',', '\t'][..])
        .trim()
        .trim_matches('"')
        .trim();

    Some((word.trim(), ipa))
}
