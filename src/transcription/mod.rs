/*!
 * Aligned transcription pipeline.
 *
 * This module contains the core functionality for converting English text
 * into a word-aligned IPA block. It is split into several submodules:
 *
 * - `core`: Transcription service definition and full-text pipeline
 * - `lookup`: Line tokenization and pronunciation table substitution
 * - `alignment`: Pair padding and column-bounded line wrapping
 */

// Re-export main types for easier usage
pub use self::alignment::{pad_pairs, wrap_pairs};
pub use self::core::{TranscriptionOptions, TranscriptionService, DEFAULT_MAX_WIDTH};
pub use self::lookup::transcribe_line;

// Submodules
pub mod alignment;
pub mod core;
pub mod lookup;
