use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::pronunciation_table::PronunciationTable;
use crate::transcription::{TranscriptionOptions, TranscriptionService};

// @module: Application controller for transcription workflows

/// Outcome of processing a single file in folder mode
enum FileOutcome {
    Processed,
    Skipped,
    Failed,
}

/// Main application controller for aligned transcription
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Transcription service around the loaded table
    service: TranscriptionService,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    //
    // Loads the pronunciation table from the configured path. A missing or
    // empty table file is fatal; the pipeline cannot run without it.
    pub fn with_config(config: Config) -> Result<Self> {
        let table = PronunciationTable::load_from_file(&config.table_path)
            .with_context(|| format!("Failed to load pronunciation table: {}", config.table_path))?;
        info!("Loaded pronunciation table with {} entries", table.len());

        Ok(Self::with_table(config, Arc::new(table)))
    }

    /// Create a controller around an already loaded table
    pub fn with_table(config: Config, table: Arc<PronunciationTable>) -> Self {
        let options = TranscriptionOptions {
            max_width: config.max_width,
        };
        let service = TranscriptionService::new(table, options);

        Self { config, service }
    }

    /// Check if the controller is properly initialized with a usable table
    pub fn is_initialized(&self) -> bool {
        !self.service.table().is_empty()
    }

    /// Access the transcription service
    pub fn service(&self) -> &TranscriptionService {
        &self.service
    }

    /// Transcribe text from stdin and print the aligned block to stdout
    pub fn run_stdio(&self) -> Result<()> {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read input text from stdin")?;

        println!("{}", self.service.transcribe_text(&input));
        Ok(())
    }

    /// Run the main workflow for a single input text file
    pub fn run(&self, input_file: &Path, output_file: Option<PathBuf>, force_overwrite: bool) -> Result<()> {
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = output_file.unwrap_or_else(|| Self::output_path_for(input_file));

        if output_path.exists() && !force_overwrite {
            // Skip if transcription already exists and no force flag
            warn!("Skipping file, transcription already exists (use -f to force overwrite)");
            return Ok(());
        }

        let start_time = std::time::Instant::now();
        Self::transcribe_file(&self.service, input_file, &output_path)?;
        debug!("Transcribed {:?} in {:?}", input_file, start_time.elapsed());

        info!("Wrote transcription to {:?}", output_path);
        Ok(())
    }

    /// Run the workflow for every text file under a directory
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        if !input_dir.exists() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        // Find all text files in the directory (recursive), leaving out the
        // outputs a previous run produced
        let text_files: Vec<PathBuf> = FileManager::find_files(&input_dir, "txt")?
            .into_iter()
            .filter(|path| {
                !path
                    .file_name()
                    .map(|name| name.to_string_lossy().ends_with(".ipa.txt"))
                    .unwrap_or(false)
            })
            .collect();

        if text_files.is_empty() {
            return Err(anyhow::anyhow!("No text files found in directory: {:?}", input_dir));
        }

        // Create a progress bar for folder processing
        let folder_pb = ProgressBar::new(text_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Processing files");

        // Process files concurrently; every task reads the same shared table
        let outcomes = stream::iter(text_files.into_iter())
            .map(|text_file| {
                let service = self.service.clone();
                let folder_pb = folder_pb.clone();

                async move {
                    let file_name = text_file
                        .file_name()
                        .map(|f| f.to_string_lossy().to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    folder_pb.set_message(format!("Processing: {}", file_name));

                    let outcome = tokio::task::spawn_blocking(move || {
                        Self::process_folder_entry(&service, &text_file, force_overwrite)
                    })
                    .await
                    .unwrap_or_else(|e| {
                        error!("Worker task failed: {}", e);
                        FileOutcome::Failed
                    });

                    folder_pb.inc(1);
                    outcome
                }
            })
            .buffer_unordered(self.config.concurrent_files)
            .collect::<Vec<_>>()
            .await;

        // Finish the folder progress bar
        folder_pb.finish_with_message("Folder processing complete");

        // Track success and failure counts
        let mut success_count = 0;
        let mut error_count = 0;
        let mut skip_count = 0;
        for outcome in &outcomes {
            match outcome {
                FileOutcome::Processed => success_count += 1,
                FileOutcome::Skipped => skip_count += 1,
                FileOutcome::Failed => error_count += 1,
            }
        }

        // Give summary results - important for batch operations
        info!(
            "Folder processing completed in {:.1}s: {} processed, {} skipped, {} errors",
            start_time.elapsed().as_secs_f64(),
            success_count,
            skip_count,
            error_count
        );

        if error_count > 0 {
            return Err(anyhow::anyhow!("{} file(s) failed to transcribe", error_count));
        }

        Ok(())
    }

    /// Transcribe one folder entry, honoring the overwrite guard
    fn process_folder_entry(service: &TranscriptionService, input_file: &Path, force_overwrite: bool) -> FileOutcome {
        let output_path = Self::output_path_for(input_file);

        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, transcription already exists (use -f to force overwrite)", input_file);
            return FileOutcome::Skipped;
        }

        match Self::transcribe_file(service, input_file, &output_path) {
            Ok(()) => FileOutcome::Processed,
            Err(e) => {
                error!("Error processing file {:?}: {}", input_file, e);
                FileOutcome::Failed
            }
        }
    }

    /// Read, transcribe and write a single file
    fn transcribe_file(service: &TranscriptionService, input_file: &Path, output_path: &Path) -> Result<()> {
        let text = FileManager::read_to_string(input_file)?;
        let output = service.transcribe_text(&text);
        FileManager::write_to_file(output_path, &output)?;
        Ok(())
    }

    /// Derive the output path for an input file: `<stem>.ipa.txt` beside it
    fn output_path_for(input_file: &Path) -> PathBuf {
        let output_dir = input_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        FileManager::generate_output_path(input_file, &output_dir, "ipa", "txt")
    }
}
