/*!
 * # Explain-O-Fun
 *
 * A Rust library that explains any topic at a chosen reading level and in a
 * chosen voice, then spins the explanation off into a short video script and
 * a two-line meme caption. Everything is produced from hand-written template
 * banks; nothing is sent over the network.
 *
 * ## Features
 *
 * - Four reading levels (ELI5, ELI12, ELI20+, Shower Thought)
 * - Four personas (Professor, Geek, Gen Z, Comedian)
 * - Short-form video scripts with hashtags and a delivery style
 * - Meme captions with template matching and shuffling
 * - Trending topic suggestions
 * - Injectable random source for reproducible output
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `content`: template banks and the selection engine:
 *   - `content::modes`: reading levels and personas
 *   - `content::responses`: explanation templates
 *   - `content::phrases`: short phrases for scripts
 *   - `content::memes`: meme templates, matching and shuffling
 * - `generation`: the explanation service and its result types
 * - `app_state`: state container updated through actions
 * - `app_controller`: main application controller
 * - `app_config`: configuration management
 * - `trending`: trending topic suggestions
 * - `errors`: custom error types for the application
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
pub mod app_state;
pub mod content;
pub mod errors;
pub mod generation;
pub mod trending;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use content::{MemeTemplate, PersonaVoice, ReadingLevelMode};
pub use errors::{AppError, GenerationError};
pub use generation::{
    CaptionContent, ExplanationGenerator, ExplanationService, GeneratedExplanation,
    GenerationRequest, ShortFormScript, generate_explanation,
};
