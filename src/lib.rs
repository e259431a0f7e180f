/*!
 * # cardshift
 *
 * A Rust library for batch restyling of conference agenda card markup in
 * static HTML pages.
 *
 * ## Features
 *
 * - Restructure legacy talk cards (image first, time range in the header row)
 * - Normalize time labels into a boxed start/end pair
 * - Prefix speaker names with the academic title selected by the category tag
 * - Process an explicit target list or whole directories of HTML files
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `card_rewriter`: Card fragment recognition and restyling passes
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
pub mod card_rewriter;
pub mod file_utils;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use card_rewriter::{Category, restyle_document, rewrite_layout, rewrite_speaker_block};
pub use errors::{AppError, ConfigError, RewriteError};
