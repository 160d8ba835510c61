/*!
 * Short-form video scripts and meme captions derived from a request.
 */

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use super::models::{CaptionContent, GenerationRequest, ScriptStyle, ShortFormScript};
use crate::content::{PersonaVoice, ShortPhraseBank, TOPIC_PLACEHOLDER};

/// Hashtags attached to every script.
pub const BASE_HASHTAGS: [&str; 3] = ["#LearnOnTikTok", "#ExplainOFun", "#EduTok"];

const PHRASE_PLACEHOLDER: &str = "{phrase}";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

fn script_template(persona: PersonaVoice) -> &'static str {
    match persona {
        PersonaVoice::FormalEducator => {
            "*Adjusts glasses* Good afternoon, class. Today's lecture: {topic}. In short, {phrase}. *Taps whiteboard* Take notes, this will be on the exam. Follow for more lessons!"
        }
        PersonaVoice::TechnicalEnthusiast => {
            "*Pushes up glasses excitedly* Okay, {topic} deep dive, let's go! Here's the core idea: {phrase}. *Pulls up a diagram* Isn't that beautiful? Follow for more nerd facts!"
        }
        PersonaVoice::InformalYouth => {
            "*Stares into camera* POV: you finally get {topic}. Basically, {phrase}. *Mind blown gesture* No cap, this changed my life. Follow for part 2!"
        }
        PersonaVoice::Humorous => {
            "*Dramatic entrance* So... {topic}. Here's the deal: {phrase}. *Rimshot* I'm here all week, folks! Follow before I explain your taxes too!"
        }
    }
}

fn persona_hashtags(persona: PersonaVoice) -> &'static [&'static str] {
    match persona {
        PersonaVoice::FormalEducator => &["#ProfessorMode", "#StudyTok"],
        PersonaVoice::TechnicalEnthusiast => &["#GeekMode", "#TechTok", "#Science"],
        PersonaVoice::InformalYouth => &["#GenZ", "#NoCap", "#MindBlown"],
        PersonaVoice::Humorous => &["#ComedyTok", "#Funny"],
    }
}

/// Caption lines per persona, `{topic}` replaced by the upper-cased topic.
fn caption_pattern(persona: PersonaVoice) -> (&'static str, &'static str) {
    match persona {
        PersonaVoice::FormalEducator => ("EXPLAINING WHAT IS {topic}?", "LIKE A DISTINGUISHED PROFESSOR"),
        PersonaVoice::TechnicalEnthusiast => ("NOBODY: ABSOLUTELY NOBODY:", "ME: LET ME TELL YOU ABOUT {topic}"),
        PersonaVoice::InformalYouth => ("THEY SAID {topic} WAS SIMPLE", "THEY LIED"),
        PersonaVoice::Humorous => ("WHEN SOMEONE ASKS ABOUT {topic}", "ME: *EXPLAINS WITH ADVANCED SCIENCE*"),
    }
}

/// `#` followed by the topic with all whitespace removed; `None` when nothing is left.
pub fn topic_hashtag(topic: &str) -> Option<String> {
    let compact = WHITESPACE.replace_all(topic, "");
    if compact.is_empty() {
        None
    } else {
        Some(format!("#{}", compact))
    }
}

fn push_unique(hashtags: &mut Vec<String>, tag: &str) {
    if !hashtags.iter().any(|existing| existing.eq_ignore_ascii_case(tag)) {
        hashtags.push(tag.to_string());
    }
}

/// Compose the video script for a request.
pub fn compose_script<R: Rng + ?Sized>(
    request: &GenerationRequest,
    phrases: &ShortPhraseBank,
    rng: &mut R,
) -> ShortFormScript {
    let phrase = phrases.phrase(&request.topic, request.mode);
    let script = script_template(request.persona)
        .replace(TOPIC_PLACEHOLDER, &request.topic)
        .replace(PHRASE_PLACEHOLDER, phrase);

    let mut hashtags = Vec::new();
    for tag in BASE_HASHTAGS {
        push_unique(&mut hashtags, tag);
    }
    if let Some(tag) = topic_hashtag(&request.topic) {
        push_unique(&mut hashtags, &tag);
    }
    for tag in persona_hashtags(request.persona) {
        push_unique(&mut hashtags, tag);
    }

    ShortFormScript {
        script,
        hashtags,
        style: ScriptStyle::random(rng),
    }
}

/// Compose the meme caption for a request.
pub fn compose_caption(request: &GenerationRequest) -> CaptionContent {
    let topic = request.topic.to_uppercase();
    let (top, bottom) = caption_pattern(request.persona);
    CaptionContent::new(
        top.replace(TOPIC_PLACEHOLDER, &topic),
        bottom.replace(TOPIC_PLACEHOLDER, &topic),
    )
}
