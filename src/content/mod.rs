/*!
 * Content template banks and the selection engine built on them.
 *
 * - `modes`: reading levels and persona voices
 * - `responses`: explanation templates keyed by (mode, persona)
 * - `phrases`: short phrases keyed by topic and mode
 * - `memes`: meme templates, caption matching and random alternates
 */

pub mod memes;
pub mod modes;
pub mod phrases;
pub mod responses;

// Re-export main types
pub use memes::{
    CaptionContent, MemeCategory, MemeTemplate, match_meme_template, meme_templates,
    random_gradient, select_random_meme_template, select_random_meme_template_with_rng,
    substitute_topic,
};
pub use modes::{PersonaVoice, ReadingLevelMode};
pub use phrases::{ShortPhraseBank, select_short_phrase};
pub use responses::{ResponseBank, TOPIC_PLACEHOLDER, select_response};
