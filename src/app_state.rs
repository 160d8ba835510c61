/*!
 * Application state container.
 *
 * State changes only through `AppState::reduce`. Completion actions carry the
 * id of the request they answer and are ignored unless that id is the latest
 * one started, so an older, slower request can never overwrite a newer result.
 */

use log::{debug, warn};
use serde::Serialize;

use crate::content::{MemeTemplate, PersonaVoice, ReadingLevelMode};
use crate::generation::{CaptionContent, GeneratedExplanation};

/// A caption drawn on a chosen template and background
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemeCard {
    pub template: MemeTemplate,
    pub caption: CaptionContent,
    pub gradient: &'static str,
}

/// Discrete state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetTopic(String),
    SetMode(ReadingLevelMode),
    SetPersona(PersonaVoice),
    GenerationStarted { request_id: u64 },
    GenerationSucceeded { request_id: u64, result: GeneratedExplanation },
    GenerationFailed { request_id: u64, message: String },
    MemeShuffled(MemeCard),
    Reset,
}

/// Everything the presentation layer shows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub topic: String,
    pub mode: ReadingLevelMode,
    pub persona: PersonaVoice,
    pub is_loading: bool,
    /// Id of the most recently started request, 0 if none
    pub latest_request_id: u64,
    pub current: Option<GeneratedExplanation>,
    pub meme: Option<MemeCard>,
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new(mode: ReadingLevelMode, persona: PersonaVoice) -> Self {
        Self {
            mode,
            persona,
            ..Self::default()
        }
    }

    /// Apply one action and return the next state.
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::SetTopic(topic) => Self { topic, ..self },
            Action::SetMode(mode) => Self { mode, ..self },
            Action::SetPersona(persona) => Self { persona, ..self },
            Action::GenerationStarted { request_id } => {
                if request_id <= self.latest_request_id {
                    warn!("Ignoring start of request {} older than {}", request_id, self.latest_request_id);
                    return self;
                }
                Self {
                    is_loading: true,
                    latest_request_id: request_id,
                    last_error: None,
                    ..self
                }
            }
            Action::GenerationSucceeded { request_id, result } => {
                if request_id != self.latest_request_id {
                    warn!("Discarding stale result of request {} (latest is {})", request_id, self.latest_request_id);
                    return self;
                }
                debug!("Request {} completed for '{}'", request_id, result.topic);
                Self {
                    is_loading: false,
                    current: Some(result),
                    meme: None,
                    last_error: None,
                    ..self
                }
            }
            Action::GenerationFailed { request_id, message } => {
                if request_id != self.latest_request_id {
                    warn!("Discarding stale failure of request {} (latest is {})", request_id, self.latest_request_id);
                    return self;
                }
                Self {
                    is_loading: false,
                    last_error: Some(message),
                    ..self
                }
            }
            Action::MemeShuffled(card) => Self { meme: Some(card), ..self },
            Action::Reset => Self {
                latest_request_id: self.latest_request_id,
                ..Self::new(self.mode, self.persona)
            },
        }
    }

    /// Whether a request is outstanding and a result would be accepted for it.
    pub fn is_current(&self, request_id: u64) -> bool {
        request_id == self.latest_request_id
    }
}
