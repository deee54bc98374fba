/*!
 * Core transcription service implementation.
 *
 * This module contains the main TranscriptionService struct and its
 * implementation, which runs the full lookup, padding and wrapping
 * pipeline over a shared read-only pronunciation table.
 */

use std::sync::Arc;

use crate::pronunciation_table::PronunciationTable;

use super::{alignment, lookup};

/// Default column budget for the wrapped output block
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Layout options for the aligned output block
#[derive(Debug, Clone)]
pub struct TranscriptionOptions {
    /// Maximum rendered width of an output line, in characters
    pub max_width: usize,
}

impl Default for TranscriptionOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

/// Transcription service holding the shared pronunciation table
///
/// The table is read-only after construction, so clones of the service can
/// transcribe concurrently without any locking.
#[derive(Clone)]
pub struct TranscriptionService {
    // @field: Shared read-only pronunciation table
    table: Arc<PronunciationTable>,

    // @field: Layout options
    pub options: TranscriptionOptions,
}

impl TranscriptionService {
    /// Create a new service around a loaded table
    pub fn new(table: Arc<PronunciationTable>, options: TranscriptionOptions) -> Self {
        Self { table, options }
    }

    /// Transcribe a whole text into the aligned word/IPA block
    ///
    /// Each source line is tokenized and looked up, closed with an empty
    /// sentinel pair so it forms its own paragraph group, then the
    /// concatenated pairs are padded and wrapped under the column budget.
    pub fn transcribe_text(&self, text: &str) -> String {
        let mut words = Vec::new();
        let mut ipas = Vec::new();

        for line in text.lines() {
            let (line_words, line_ipas) = lookup::transcribe_line(&self.table, line);
            words.extend(line_words);
            ipas.extend(line_ipas);
            words.push(String::new());
            ipas.push(String::new());
        }

        let (padded_words, padded_ipas) = alignment::pad_pairs(&words, &ipas);
        alignment::wrap_pairs(&padded_words, &padded_ipas, self.options.max_width)
    }

    /// Transcribe a single line into parallel word and IPA sequences
    pub fn transcribe_line(&self, line: &str) -> (Vec<String>, Vec<String>) {
        lookup::transcribe_line(&self.table, line)
    }

    /// Access the underlying pronunciation table
    pub fn table(&self) -> &PronunciationTable {
        &self.table
    }
}
