/*!
 * # PronounceCraft
 *
 * A Rust library for aligned English-to-IPA phonetic transcription.
 *
 * ## Features
 *
 * - Word-for-word IPA substitution from a pronunciation table
 * - Column alignment: each English word sits directly above its transcription
 * - Greedy line wrapping under a configurable column budget
 * - Paragraph structure of the source text preserved in the output
 * - Batch transcription of single files, folders, or stdin
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `pronunciation_table`: Pronunciation table loading and lookup
 * - `transcription`: Aligned transcription pipeline:
 *   - `transcription::lookup`: Line tokenization and table substitution
 *   - `transcription::alignment`: Pair padding and line wrapping
 *   - `transcription::core`: Transcription service facade
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod pronunciation_table;
pub mod transcription;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use pronunciation_table::PronunciationTable;
pub use transcription::{TranscriptionOptions, TranscriptionService};
pub use errors::{AppError, TableError, TranscriptionError};
