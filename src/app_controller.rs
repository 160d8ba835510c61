use anyhow::Result;
use log::{debug, info, warn};
use parking_lot::Mutex;
use rand::Rng;
use std::sync::Arc;

use crate::app_config::Config;
use crate::app_state::{Action, AppState, MemeCard};
use crate::content::{
    MemeTemplate, PersonaVoice, ReadingLevelMode, match_meme_template, meme_templates,
    random_gradient, select_random_meme_template_with_rng, substitute_topic,
};
use crate::errors::{AppError, GenerationError};
use crate::generation::{
    ExplanationGenerator, ExplanationService, GeneratedExplanation, GenerationRequest,
    RequestSequencer,
};
use crate::trending::{TrendingTopic, sample_trending};

// @module: Application controller driving generation and state

/// Main application controller
#[derive(Debug)]
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Explanation source
    generator: Arc<dyn ExplanationGenerator>,
    // @field: Request ids
    sequencer: RequestSequencer,
    // @field: Current UI state, never locked across an await
    state: Mutex<AppState>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration and no latency
    pub fn new_for_test() -> Result<Self> {
        let mut config = Config::default();
        config.generation.simulated_delay_ms = 0;
        Self::with_config(config)
    }

    // @method: Create a new controller backed by the template service
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let service = ExplanationService::from_config(&config.generation);
        Ok(Self::with_generator(config, Arc::new(service)))
    }

    // @method: Create a controller with any generator
    pub fn with_generator(config: Config, generator: Arc<dyn ExplanationGenerator>) -> Self {
        let state = AppState::new(config.defaults.mode, config.defaults.persona);
        Self {
            config,
            generator,
            sequencer: RequestSequencer::new(),
            state: Mutex::new(state),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AppState {
        self.state.lock().clone()
    }

    /// Apply an action to the state
    pub fn dispatch(&self, action: Action) {
        let mut state = self.state.lock();
        let current = std::mem::take(&mut *state);
        *state = current.reduce(action);
    }

    pub fn set_mode(&self, mode: ReadingLevelMode) {
        self.dispatch(Action::SetMode(mode));
    }

    pub fn set_persona(&self, persona: PersonaVoice) {
        self.dispatch(Action::SetPersona(persona));
    }

    /// Generate an explanation with the selected mode and persona.
    ///
    /// Returns `Ok(None)` when a newer request was started while this one was
    /// running; its result is then discarded.
    pub async fn explain(&self, topic: &str) -> Result<Option<GeneratedExplanation>, AppError> {
        let request = {
            let state = self.state.lock();
            GenerationRequest::new(topic, state.mode, state.persona)
        };
        request.validate().map_err(|error| match error {
            GenerationError::EmptyTopic => AppError::EmptyTopic,
            other => other.into(),
        })?;
        self.dispatch(Action::SetTopic(topic.to_string()));

        let request_id = self.sequencer.next_id();
        self.dispatch(Action::GenerationStarted { request_id });
        debug!(
            "Request {} via {}: '{}' ({} x {})",
            request_id,
            self.generator.name(),
            topic,
            request.mode,
            request.persona
        );

        match self.generator.generate(&request).await {
            Ok(result) => {
                self.dispatch(Action::GenerationSucceeded {
                    request_id,
                    result: result.clone(),
                });
                if self.sequencer.is_current(request_id) {
                    info!("Your explanation of \"{}\" is ready", topic);
                    Ok(Some(result))
                } else {
                    Ok(None)
                }
            }
            Err(error) => {
                warn!("There was a problem generating your explanation: {}", error);
                self.dispatch(Action::GenerationFailed {
                    request_id,
                    message: error.to_string(),
                });
                Err(error.into())
            }
        }
    }

    /// Explain a topic picked from the trending list.
    pub async fn explain_trending(&self, topic: &str) -> Result<Option<GeneratedExplanation>, AppError> {
        self.explain(topic).await
    }

    /// Template associated with the current caption, or with the shuffled card.
    pub fn current_meme_template(&self) -> Option<MemeTemplate> {
        let state = self.state.lock();
        if let Some(card) = &state.meme {
            return Some(card.template.clone());
        }
        let caption = state.current.as_ref()?.caption_content.as_ref()?;
        Some(match_meme_template(&caption.top_text, &caption.bottom_text).clone())
    }

    /// Swap the current meme for a random different template.
    pub fn shuffle_meme<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<MemeCard> {
        let (topic, current_caption) = {
            let state = self.state.lock();
            let current = state.current.as_ref()?;
            let caption = match &state.meme {
                Some(card) => card.caption.clone(),
                None => current.caption_content.clone()?,
            };
            (current.topic.clone(), caption)
        };

        let template = select_random_meme_template_with_rng(
            meme_templates(),
            &current_caption.top_text,
            &current_caption.bottom_text,
            &topic,
            rng,
        )?;

        let card = MemeCard {
            template: template.clone(),
            caption: substitute_topic(template, &topic),
            gradient: random_gradient(rng),
        };
        debug!("Shuffled meme to '{}' on {}", card.caption.top_text, card.gradient);
        self.dispatch(Action::MemeShuffled(card.clone()));
        Some(card)
    }

    /// Sample of trending topics using the configured size.
    pub fn trending<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<TrendingTopic> {
        sample_trending(rng, self.config.trending.sample_size)
    }

    /// Forget the current result and topic.
    pub fn reset(&self) {
        self.dispatch(Action::Reset);
    }
}
