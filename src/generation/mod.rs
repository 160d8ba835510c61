/*!
 * Explanation generation.
 *
 * This module contains:
 * - `models`: request and result types
 * - `script`: short-form script and caption composition
 * - `service`: the template-backed generator with simulated latency
 * - `sequencer`: request ids for discarding stale responses
 * - `mock`: generators with scripted behavior for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::GenerationError;

pub mod mock;
pub mod models;
pub mod script;
pub mod sequencer;
pub mod service;

pub use models::{
    CaptionContent, GeneratedExplanation, GenerationRequest, ScriptSegment, ScriptStyle,
    ShortFormScript,
};
pub use sequencer::RequestSequencer;
pub use service::{ExplanationService, generate_explanation};

/// Common trait for anything that can produce explanations
///
/// Callers treat generation as fallible even though the template service
/// always succeeds.
#[async_trait]
pub trait ExplanationGenerator: Send + Sync + Debug {
    /// Produce an explanation for the request
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedExplanation, GenerationError>;

    /// Short name used in logs
    fn name(&self) -> &str;
}
