/*!
 * Mock generator implementations for testing.
 *
 * - `MockGenerator::working()` - Always succeeds with a canned explanation
 * - `MockGenerator::failing()` - Always fails with an error
 * - `MockGenerator::slow(ms)` - Succeeds after a delay
 * - `MockGenerator::intermittent(n)` - Fails every Nth request
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::ExplanationGenerator;
use super::models::{CaptionContent, GeneratedExplanation, GenerationRequest, ScriptStyle, ShortFormScript};
use crate::errors::GenerationError;

/// Behavior mode for the mock generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Always fails with an error
    Failing,
    /// Fails on every Nth request (1-based)
    Intermittent { fail_every: usize },
    /// Succeeds after a delay
    Slow { delay_ms: u64 },
}

/// Mock generator for testing controller behavior
#[derive(Debug)]
pub struct MockGenerator {
    behavior: MockBehavior,
    request_count: Arc<AtomicUsize>,
}

impl MockGenerator {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    fn canned(request: &GenerationRequest) -> GeneratedExplanation {
        GeneratedExplanation {
            text: format!("[MOCK] {}", request.topic),
            mode: request.mode,
            persona: request.persona,
            topic: request.topic.clone(),
            short_form_script: Some(ShortFormScript {
                script: format!("*Waves* {}", request.topic),
                hashtags: vec!["#Mock".to_string()],
                style: ScriptStyle::Casual,
            }),
            caption_content: Some(CaptionContent::new(
                format!("TRYING TO UNDERSTAND {}", request.topic.to_uppercase()),
                "MY BRAIN: UNDERSTANDABLE, HAVE A NICE DAY",
            )),
        }
    }
}

#[async_trait]
impl ExplanationGenerator for MockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedExplanation, GenerationError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;

        match self.behavior {
            MockBehavior::Working => Ok(Self::canned(request)),
            MockBehavior::Failing => Err(GenerationError::Unavailable("mock failure".to_string())),
            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == 0 {
                    Err(GenerationError::Unavailable(format!("mock failure on request {}", count)))
                } else {
                    Ok(Self::canned(request))
                }
            }
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(Self::canned(request))
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
