/*!
 * Explanation modes (reading levels) and persona voices.
 *
 * Both are closed sets. Each value has a stable short identifier used in
 * configuration files and on the command line, plus display metadata.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GenerationError;

/// Reading level of a generated explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReadingLevelMode {
    // @mode: Like you're 5 years old
    #[default]
    #[serde(rename = "eli5", alias = "simple")]
    Simple,
    // @mode: Middle school
    #[serde(rename = "eli12", alias = "intermediate")]
    Intermediate,
    // @mode: Deep dive for adults
    #[serde(rename = "eli20", alias = "advanced")]
    Advanced,
    // @mode: Weird perspectives
    #[serde(rename = "shower", alias = "tangential")]
    Tangential,
}

impl ReadingLevelMode {
    /// All modes in display order.
    pub const ALL: [ReadingLevelMode; 4] = [
        Self::Simple,
        Self::Intermediate,
        Self::Advanced,
        Self::Tangential,
    ];

    // @returns: Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Simple => "eli5",
            Self::Intermediate => "eli12",
            Self::Advanced => "eli20",
            Self::Tangential => "shower",
        }
    }

    // @returns: Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Simple => "ELI5",
            Self::Intermediate => "ELI12",
            Self::Advanced => "ELI20+",
            Self::Tangential => "Shower Thought",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Simple => "Super Simple Mode - Like you're 5 years old",
            Self::Intermediate => "Middle School Mode - Getting a bit smarter",
            Self::Advanced => "Big Brain Mode - Deep dive for adults",
            Self::Tangential => "Mind-blowing weird perspectives",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Simple => "👶",
            Self::Intermediate => "🧒",
            Self::Advanced => "🧠",
            Self::Tangential => "🚿",
        }
    }
}

impl fmt::Display for ReadingLevelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ReadingLevelMode {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eli5" | "simple" => Ok(Self::Simple),
            "eli12" | "intermediate" => Ok(Self::Intermediate),
            "eli20" | "eli20+" | "advanced" => Ok(Self::Advanced),
            "shower" | "tangential" => Ok(Self::Tangential),
            _ => Err(GenerationError::InvalidMode(s.to_string())),
        }
    }
}

/// Voice and tone applied to generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PersonaVoice {
    // @persona: Detailed and professional
    #[default]
    #[serde(rename = "professor", alias = "formal-educator")]
    FormalEducator,
    // @persona: Technical and nerdy
    #[serde(rename = "geek", alias = "technical-enthusiast")]
    TechnicalEnthusiast,
    // @persona: Slang and pop culture
    #[serde(rename = "genz", alias = "informal-youth")]
    InformalYouth,
    // @persona: Jokes while explaining
    #[serde(rename = "comedian", alias = "humorous")]
    Humorous,
}

impl PersonaVoice {
    /// All personas in display order.
    pub const ALL: [PersonaVoice; 4] = [
        Self::FormalEducator,
        Self::TechnicalEnthusiast,
        Self::InformalYouth,
        Self::Humorous,
    ];

    // @returns: Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::FormalEducator => "professor",
            Self::TechnicalEnthusiast => "geek",
            Self::InformalYouth => "genz",
            Self::Humorous => "comedian",
        }
    }

    // @returns: Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FormalEducator => "Professor Mode",
            Self::TechnicalEnthusiast => "Geek Mode",
            Self::InformalYouth => "Gen Z Mode",
            Self::Humorous => "Comedian Mode",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::FormalEducator => "Detailed and professional explanations",
            Self::TechnicalEnthusiast => "Technical and nerdy details",
            Self::InformalYouth => "Slang, pop culture, and funny analogies",
            Self::Humorous => "Jokes while explaining concepts",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::FormalEducator => "👩‍🏫",
            Self::TechnicalEnthusiast => "🤓",
            Self::InformalYouth => "😆",
            Self::Humorous => "🎭",
        }
    }
}

impl fmt::Display for PersonaVoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for PersonaVoice {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professor" | "formal-educator" => Ok(Self::FormalEducator),
            "geek" | "technical-enthusiast" => Ok(Self::TechnicalEnthusiast),
            "genz" | "gen-z" | "informal-youth" => Ok(Self::InformalYouth),
            "comedian" | "humorous" => Ok(Self::Humorous),
            _ => Err(GenerationError::InvalidPersona(s.to_string())),
        }
    }
}
