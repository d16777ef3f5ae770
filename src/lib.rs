/*!
 * # ScriptForge - AI YouTube Script Generator & Splitter
 *
 * A Rust library for generating YouTube video scripts with a language model
 * and splitting them into spoken narration and a shot list.
 *
 * ## Features
 *
 * - Generate tagged video scripts through the Groq chat-completions API
 * - Split any raw script into two clean streams:
 *   - spoken narration, ready for text-to-speech
 *   - visual/scene directions, ready for a shot list
 * - Tolerate inconsistent tagging conventions, markdown noise, and
 *   parenthetical stage directions
 * - Heuristic per-line classification when no section markers are present
 * - Word count and speaking-duration estimate over the narration
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `script_parser`: Marker normalization, segmentation, and cleanup (the core)
 * - `script_stats`: Word count and speaking-duration estimate
 * - `prompts`: System and user prompt construction
 * - `providers`: Client implementations for LLM providers:
 *   - `providers::groq`: Groq API client (OpenAI-compatible)
 *   - `providers::mock`: In-process mock provider for tests
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
pub mod prompts;
pub mod providers;
pub mod script_parser;
pub mod script_stats;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, GenerationOutcome};
pub use errors::{AppError, ProviderError};
pub use script_parser::{ParseResult, ScriptParser, Tag, TaggedRun};
pub use script_stats::SpeakingStats;
