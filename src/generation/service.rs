/*!
 * Template-backed explanation service.
 *
 * Composition is synchronous and pure for a given random source; the async
 * entry points add the simulated latency in front of it.
 */

use async_trait::async_trait;
use log::{debug, info};
use rand::Rng;
use std::time::Duration;

use super::models::{GeneratedExplanation, GenerationRequest};
use super::script::{compose_caption, compose_script};
use super::ExplanationGenerator;
use crate::app_config::GenerationConfig;
use crate::content::{PersonaVoice, ReadingLevelMode, ResponseBank, ShortPhraseBank};
use crate::errors::GenerationError;

/// Latency applied when no configuration is given, in milliseconds.
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 2000;

/// Generates explanations from the built-in (or supplied) content banks
#[derive(Debug, Clone)]
pub struct ExplanationService {
    responses: ResponseBank,
    phrases: ShortPhraseBank,
    delay: Duration,
}

impl ExplanationService {
    pub fn new() -> Self {
        Self::with_banks(ResponseBank::builtin(), ShortPhraseBank::builtin())
    }

    pub fn with_banks(responses: ResponseBank, phrases: ShortPhraseBank) -> Self {
        Self {
            responses,
            phrases,
            delay: Duration::from_millis(DEFAULT_SIMULATED_DELAY_MS),
        }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new().with_delay(Duration::from_millis(config.simulated_delay_ms))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Build the full result without any delay.
    pub fn compose<R: Rng + ?Sized>(&self, request: &GenerationRequest, rng: &mut R) -> GeneratedExplanation {
        let text = self.responses.render(&request.topic, request.mode, request.persona);
        let script = compose_script(request, &self.phrases, rng);
        let caption = compose_caption(request);

        debug!(
            "Composed {} x {} explanation for '{}' ({} chars, {} hashtags, {} style)",
            request.mode,
            request.persona,
            request.topic,
            text.len(),
            script.hashtags.len(),
            script.style.name()
        );

        GeneratedExplanation {
            text,
            mode: request.mode,
            persona: request.persona,
            topic: request.topic.clone(),
            short_form_script: Some(script),
            caption_content: Some(caption),
        }
    }

    /// Wait for the simulated latency, then compose. Always resolves.
    pub async fn explain(&self, request: &GenerationRequest) -> GeneratedExplanation {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let result = self.compose(request, &mut rand::rng());
        info!("Generated {} explanation of '{}'", request.mode.display_name(), request.topic);
        result
    }
}

impl Default for ExplanationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExplanationGenerator for ExplanationService {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedExplanation, GenerationError> {
        Ok(self.explain(request).await)
    }

    fn name(&self) -> &str {
        "templates"
    }
}

/// Generate with the built-in banks and the default simulated latency.
pub async fn generate_explanation(
    topic: &str,
    mode: ReadingLevelMode,
    persona: PersonaVoice,
) -> GeneratedExplanation {
    let request = GenerationRequest::new(topic, mode, persona);
    ExplanationService::new().explain(&request).await
}
