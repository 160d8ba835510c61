/*!
 * Request and result types of the generation service.
 */

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::content::{PersonaVoice, ReadingLevelMode};
use crate::errors::GenerationError;

pub use crate::content::CaptionContent;

/// Immutable input of one generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub mode: ReadingLevelMode,
    pub persona: PersonaVoice,
}

impl GenerationRequest {
    pub fn new(topic: &str, mode: ReadingLevelMode, persona: PersonaVoice) -> Self {
        Self {
            topic: topic.to_string(),
            mode,
            persona,
        }
    }

    /// Reject topics that are empty after trimming.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.topic.trim().is_empty() {
            return Err(GenerationError::EmptyTopic);
        }
        Ok(())
    }
}

/// Delivery style of a short-form video script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStyle {
    Casual,
    Dramatic,
    Educational,
    Hype,
}

impl ScriptStyle {
    pub const ALL: [ScriptStyle; 4] = [Self::Casual, Self::Dramatic, Self::Educational, Self::Hype];

    /// Uniformly random style.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Casual => "😎",
            Self::Dramatic => "🎭",
            Self::Educational => "📚",
            Self::Hype => "🔥",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Dramatic => "dramatic",
            Self::Educational => "educational",
            Self::Hype => "hype",
        }
    }
}

/// Piece of a script: spoken text or a stage direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSegment<'a> {
    Spoken(&'a str),
    Direction(&'a str),
}

/// Narrated short video script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortFormScript {
    /// Script text; `*...*` marks stage directions
    pub script: String,
    /// Ordered, without duplicates
    pub hashtags: Vec<String>,
    pub style: ScriptStyle,
}

impl ShortFormScript {
    /// Split the script on `*`; odd segments are directions. Empty pieces are dropped.
    pub fn segments(&self) -> Vec<ScriptSegment<'_>> {
        self.script
            .split('*')
            .enumerate()
            .filter(|(_, part)| !part.trim().is_empty())
            .map(|(index, part)| {
                if index % 2 == 1 {
                    ScriptSegment::Direction(part.trim())
                } else {
                    ScriptSegment::Spoken(part.trim())
                }
            })
            .collect()
    }

    /// Script without stage directions, as it would be read aloud.
    pub fn spoken_text(&self) -> String {
        self.segments()
            .into_iter()
            .filter_map(|segment| match segment {
                ScriptSegment::Spoken(text) => Some(text),
                ScriptSegment::Direction(_) => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of one generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedExplanation {
    pub text: String,
    pub mode: ReadingLevelMode,
    pub persona: PersonaVoice,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_form_script: Option<ShortFormScript>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_content: Option<CaptionContent>,
}
