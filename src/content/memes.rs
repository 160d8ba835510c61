/*!
 * Meme templates and the rules that associate captions with them.
 *
 * Captions carry no image reference. A template is chosen afterwards, either
 * by matching the caption text against the templates or by picking a random
 * alternate for the "shuffle" action.
 */

use log::debug;
use once_cell::sync::Lazy;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::responses::TOPIC_PLACEHOLDER;

/// Category used only for heuristic matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemeCategory {
    Explanation,
    Confusion,
    Education,
    Ai,
    Professor,
}

/// A two-line meme template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemeTemplate {
    pub top_text: String,
    pub bottom_text: String,
    /// Reference to the background image
    pub image: String,
    pub category: MemeCategory,
}

impl MemeTemplate {
    pub fn new(top_text: &str, bottom_text: &str, image: &str, category: MemeCategory) -> Self {
        Self {
            top_text: top_text.to_string(),
            bottom_text: bottom_text.to_string(),
            image: image.to_string(),
            category,
        }
    }

    /// Whether some topic substituted into this template yields the given text.
    pub fn fits(&self, top_text: &str, bottom_text: &str) -> bool {
        field_fits(&self.top_text, top_text) && field_fits(&self.bottom_text, bottom_text)
    }

    /// Template text with the upper-cased topic substituted.
    pub fn substitute(&self, topic: &str) -> CaptionContent {
        let topic = topic.to_uppercase();
        CaptionContent {
            top_text: self.top_text.replace(TOPIC_PLACEHOLDER, &topic),
            bottom_text: self.bottom_text.replace(TOPIC_PLACEHOLDER, &topic),
        }
    }
}

/// Top and bottom caption lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionContent {
    pub top_text: String,
    pub bottom_text: String,
}

impl CaptionContent {
    pub fn new(top_text: impl Into<String>, bottom_text: impl Into<String>) -> Self {
        Self {
            top_text: top_text.into(),
            bottom_text: bottom_text.into(),
        }
    }
}

fn field_fits(template: &str, text: &str) -> bool {
    match template.split_once(TOPIC_PLACEHOLDER) {
        Some((prefix, suffix)) => {
            text.len() >= prefix.len() + suffix.len()
                && text.starts_with(prefix)
                && text.ends_with(suffix)
        }
        None => text == template,
    }
}

static BUILTIN_TEMPLATES: Lazy<Vec<MemeTemplate>> = Lazy::new(|| {
    vec![
        MemeTemplate::new(
            "WHEN SOMEONE ASKS ABOUT {topic}",
            "ME: *EXPLAINS WITH ADVANCED SCIENCE*",
            "images/memes/explaining-scientist.png",
            MemeCategory::Explanation,
        ),
        MemeTemplate::new(
            "{topic}? OH YOU MEAN",
            "THAT THING NOBODY UNDERSTANDS",
            "images/memes/confused-stare.png",
            MemeCategory::Confusion,
        ),
        MemeTemplate::new(
            "TRYING TO UNDERSTAND {topic}",
            "MY BRAIN: UNDERSTANDABLE, HAVE A NICE DAY",
            "images/memes/explaining-scientist.png",
            MemeCategory::Confusion,
        ),
        MemeTemplate::new(
            "TEACHER: EXPLAIN {topic}",
            "ME: *PANICS IN CONFUSION*",
            "images/memes/confused-stare.png",
            MemeCategory::Education,
        ),
        MemeTemplate::new(
            "NOBODY: ABSOLUTELY NOBODY:",
            "ME: LET ME TELL YOU ABOUT {topic}",
            "images/memes/explaining-scientist.png",
            MemeCategory::Explanation,
        ),
        MemeTemplate::new(
            "THEY SAID {topic} WAS SIMPLE",
            "THEY LIED",
            "images/memes/they-lied.png",
            MemeCategory::Confusion,
        ),
        MemeTemplate::new(
            "WHAT IS AI?? OH YOU MEAN",
            "THAT THING NOBODY UNDERSTANDS",
            "images/memes/robot-shrug.png",
            MemeCategory::Ai,
        ),
        MemeTemplate::new(
            "EXPLAINING WHAT IS {topic}?",
            "LIKE A DISTINGUISHED PROFESSOR",
            "images/memes/professor-podium.png",
            MemeCategory::Professor,
        ),
        MemeTemplate::new(
            "EXPLAINING WHAT IS {topic}",
            "LIKE A DISTINGUISHED PROFESSOR",
            "images/memes/professor-chalkboard.png",
            MemeCategory::Professor,
        ),
    ]
});

/// The built-in template list. Never empty.
pub fn meme_templates() -> &'static [MemeTemplate] {
    &BUILTIN_TEMPLATES
}

/// Which caption line a rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionField {
    Top,
    Bottom,
    Either,
}

/// One keyword rule of the heuristic matcher
#[derive(Debug, Clone, Copy)]
pub struct MatchRule {
    /// Lower runs first
    pub priority: u8,
    pub keyword: &'static str,
    pub field: CaptionField,
    pub category: MemeCategory,
}

impl MatchRule {
    /// Case-sensitive substring test on the inspected line(s).
    pub fn matches(&self, top_text: &str, bottom_text: &str) -> bool {
        match self.field {
            CaptionField::Top => top_text.contains(self.keyword),
            CaptionField::Bottom => bottom_text.contains(self.keyword),
            CaptionField::Either => top_text.contains(self.keyword) || bottom_text.contains(self.keyword),
        }
    }
}

/// Heuristic rules, sorted by priority. Keywords are plain substrings, so
/// `AI` also fires inside words such as `EXPLAIN` or `SAID`.
pub const MATCH_RULES: &[MatchRule] = &[
    MatchRule {
        priority: 1,
        keyword: "DISTINGUISHED PROFESSOR",
        field: CaptionField::Bottom,
        category: MemeCategory::Professor,
    },
    MatchRule {
        priority: 2,
        keyword: "AI",
        field: CaptionField::Either,
        category: MemeCategory::Ai,
    },
    MatchRule {
        priority: 3,
        keyword: "UNDERSTAND",
        field: CaptionField::Top,
        category: MemeCategory::Confusion,
    },
    MatchRule {
        priority: 4,
        keyword: "CONFUSED",
        field: CaptionField::Bottom,
        category: MemeCategory::Confusion,
    },
    MatchRule {
        priority: 5,
        keyword: "EXPLAIN",
        field: CaptionField::Either,
        category: MemeCategory::Explanation,
    },
];

/// Template for a caption, searched in `templates`. `None` only for an empty list.
pub fn match_meme_template_in<'a>(
    templates: &'a [MemeTemplate],
    top_text: &str,
    bottom_text: &str,
) -> Option<&'a MemeTemplate> {
    if let Some(exact) = templates.iter().find(|t| t.fits(top_text, bottom_text)) {
        debug!("Caption matched template exactly: {}", exact.top_text);
        return Some(exact);
    }

    let by_rule = MATCH_RULES
        .iter()
        .find(|rule| rule.matches(top_text, bottom_text))
        .and_then(|rule| {
            debug!("Caption matched keyword rule '{}' -> {:?}", rule.keyword, rule.category);
            templates.iter().find(|t| t.category == rule.category)
        });

    by_rule.or_else(|| templates.first())
}

/// Template for a caption from the built-in list. Always returns a template.
pub fn match_meme_template(top_text: &str, bottom_text: &str) -> &'static MemeTemplate {
    let templates = meme_templates();
    match_meme_template_in(templates, top_text, bottom_text).unwrap_or(&templates[0])
}

/// Random template whose substituted text differs from the current caption.
///
/// Falls back to the whole list when every template renders to the current
/// caption. Returns `None` only for an empty list.
pub fn select_random_meme_template_with_rng<'a, R: Rng + ?Sized>(
    templates: &'a [MemeTemplate],
    current_top_text: &str,
    current_bottom_text: &str,
    topic: &str,
    rng: &mut R,
) -> Option<&'a MemeTemplate> {
    let candidates: Vec<&MemeTemplate> = templates
        .iter()
        .filter(|t| {
            let caption = t.substitute(topic);
            !(caption.top_text == current_top_text && caption.bottom_text == current_bottom_text)
        })
        .collect();

    if candidates.is_empty() {
        debug!("No alternate meme template, sampling from all {}", templates.len());
        return templates.choose(rng);
    }

    candidates.choose(rng).copied()
}

/// Random alternate from the built-in list using the thread-local rng.
pub fn select_random_meme_template(
    current_top_text: &str,
    current_bottom_text: &str,
    topic: &str,
) -> &'static MemeTemplate {
    let templates = meme_templates();
    select_random_meme_template_with_rng(
        templates,
        current_top_text,
        current_bottom_text,
        topic,
        &mut rand::rng(),
    )
    .unwrap_or(&templates[0])
}

/// Replace the placeholder in both lines with the upper-cased topic.
pub fn substitute_topic(template: &MemeTemplate, topic: &str) -> CaptionContent {
    template.substitute(topic)
}

/// Background gradients a meme card can be drawn on.
pub const BACKGROUND_GRADIENTS: [&str; 7] = [
    "from-blue-500 to-purple-500",
    "from-green-400 to-blue-500",
    "from-yellow-400 to-orange-500",
    "from-pink-500 to-red-500",
    "from-purple-500 to-indigo-500",
    "from-indigo-500 to-blue-400",
    "from-red-500 to-orange-400",
];

pub fn random_gradient<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    BACKGROUND_GRADIENTS[rng.random_range(0..BACKGROUND_GRADIENTS.len())]
}
