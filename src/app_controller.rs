use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use std::path::Path;
use crate::app_config::Config;
use crate::card_rewriter;
use crate::file_utils::{FileManager, FileType};

// @module: Application controller for card restyling

/// Main application controller driving the restyle passes
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.targets.is_empty()
    }

    /// Run both restyle passes over every configured target, in order.
    ///
    /// A directory target is expanded to the HTML files below it. The run
    /// aborts on the first unreadable or unwritable file target.
    pub fn run(&self) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        if !self.is_initialized() {
            return Err(anyhow::anyhow!("Controller not properly initialized"));
        }

        for target in &self.config.targets {
            if FileManager::dir_exists(target) {
                self.run_folder(target)?;
            } else {
                self.restyle_file(target)?;
            }
        }

        info!(
            "Restyle completed in {}",
            Self::format_duration(start_time.elapsed())
        );
        Ok(())
    }

    /// Apply both passes to a single file, overwriting it in place.
    ///
    /// Returns whether the content changed. A document with no matching
    /// fragments is rewritten verbatim.
    pub fn restyle_file(&self, target: &Path) -> Result<bool> {
        if !FileManager::file_exists(target) {
            return Err(anyhow::anyhow!("Target file does not exist: {:?}", target));
        }

        if FileManager::detect_file_type(target)? != FileType::Html {
            warn!("Target does not look like an HTML document: {:?}", target);
        }

        let content = FileManager::read_to_string(target)?;
        let updated = card_rewriter::restyle_document(&content);
        let changed = updated != content;

        if !changed {
            debug!("No matching card fragments in {:?}", target);
        }

        FileManager::write_to_file(target, &updated)
            .with_context(|| format!("Failed to write restyled content: {:?}", target))?;

        info!("Updated: {}", target.display());
        Ok(changed)
    }

    /// Restyle every HTML file under a directory tree.
    ///
    /// Per-file failures are logged and skipped so one bad file does not
    /// abort the batch.
    pub fn run_folder(&self, input_dir: &Path) -> Result<usize> {
        info!("Starting restyle pass for directory: {:?}", input_dir);

        let mut processed_count = 0;

        for path in FileManager::find_files(input_dir, "html")? {
            if let Err(e) = self.restyle_file(&path) {
                error!("Error processing file: {}", e);
            } else {
                processed_count += 1;
            }
        }

        info!("Finished processing {} files", processed_count);
        Ok(processed_count)
    }

    // @returns: Human-readable duration
    fn format_duration(duration: std::time::Duration) -> String {
        let total_secs = duration.as_secs_f64();
        if total_secs < 1.0 {
            format!("{}ms", duration.as_millis())
        } else {
            format!("{:.2}s", total_secs)
        }
    }
}
