/*!
 * Explanation response bank.
 *
 * One template per (mode, persona) pair. Templates carry the `{topic}`
 * placeholder, which is replaced verbatim with the caller's topic.
 */

use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::modes::{PersonaVoice, ReadingLevelMode};

/// Placeholder replaced with the topic in every stored template.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Used only when a custom bank lacks both the requested entry and the default entry.
const LAST_RESORT_TEMPLATE: &str = "Let's talk about {topic}!";

/// Key used when a requested (mode, persona) pair is absent.
pub const FALLBACK_KEY: (ReadingLevelMode, PersonaVoice) =
    (ReadingLevelMode::Simple, PersonaVoice::FormalEducator);

const BUILTIN_RESPONSES: &[(ReadingLevelMode, PersonaVoice, &str)] = &[
    (
        ReadingLevelMode::Simple,
        PersonaVoice::FormalEducator,
        "Okay little one, imagine {topic} is like a big, colorful balloon. When you let go of a balloon, it flies up high in the sky because it's filled with a special, light air that wants to float. That's how {topic} works in the simplest way!",
    ),
    (
        ReadingLevelMode::Simple,
        PersonaVoice::TechnicalEnthusiast,
        "So kiddo, {topic} is basically like when you have a super cool toy robot that does things automatically. The robot has tiny, tiny parts inside that work together, just like {topic} has special pieces that make it work!",
    ),
    (
        ReadingLevelMode::Simple,
        PersonaVoice::InformalYouth,
        "Ok so {topic} is like suuuper easy! It's like when your favorite game loads really fast and you're like \"whoaaa!\" That's basically what {topic} does - it makes cool stuff happen super quick! No cap!",
    ),
    (
        ReadingLevelMode::Simple,
        PersonaVoice::Humorous,
        "Heyyyy little buddy! Wanna know about {topic}? It's like when you try to eat spaghetti but it goes EVERYWHERE! Messy and fun and sometimes a little confusing, but that's {topic} for ya! *makes silly face*",
    ),
    (
        ReadingLevelMode::Intermediate,
        PersonaVoice::FormalEducator,
        "Let's explore {topic} at a middle-school level. {topic} is essentially a system that functions by converting one form of energy into another. Think about how a bicycle works - you input energy by pedaling, and the bike converts that into forward motion. {topic} operates on similar principles of energy transfer.",
    ),
    (
        ReadingLevelMode::Intermediate,
        PersonaVoice::TechnicalEnthusiast,
        "So here's the deal with {topic}: it's like the code behind your favorite video game. There are specific rules that determine how it works, and when you understand those rules, you can predict what will happen. In technical terms, {topic} involves a specific sequence of processes that produce reliable results.",
    ),
    (
        ReadingLevelMode::Intermediate,
        PersonaVoice::InformalYouth,
        "NGL, {topic} is actually pretty fire when you get it. It's like when your TikTok algorithm finally understands your vibe and only shows you the good stuff. {topic} is kinda the same - it figures out patterns and then does its thing. Pretty based, actually!",
    ),
    (
        ReadingLevelMode::Intermediate,
        PersonaVoice::Humorous,
        "Middle school, huh? Well, {topic} is like that awkward school dance where nobody knows where to put their hands. It seems complicated but really everyone's just trying to follow some basic steps without tripping! And just like middle school, {topic} sometimes makes weird noises when you least expect it!",
    ),
    (
        ReadingLevelMode::Advanced,
        PersonaVoice::FormalEducator,
        "A comprehensive analysis of {topic} reveals its multifaceted nature. At its foundation, {topic} operates according to fundamental principles that can be observed and measured with precision. The mechanisms underlying {topic} have been studied extensively, revealing complex interactions at multiple scales.\n\nFurthermore, recent advances in our understanding of {topic} have illuminated previously obscure aspects, leading to new theoretical frameworks that better explain observed phenomena. These developments have significant implications across multiple domains of application.",
    ),
    (
        ReadingLevelMode::Advanced,
        PersonaVoice::TechnicalEnthusiast,
        "Let's dive deep into {topic} from a technical perspective. The underlying architecture consists of interconnected systems that process and transmit information according to well-defined protocols. When examining {topic} at scale, emergent properties become apparent that cannot be predicted from analysis of individual components alone.\n\nThe technical specifications of {topic} typically include parameters that can be optimized for different use cases. Advanced implementations may incorporate machine learning algorithms to adapt dynamically to changing conditions, significantly enhancing performance metrics compared to static models.",
    ),
    (
        ReadingLevelMode::Advanced,
        PersonaVoice::InformalYouth,
        "Okay, real talk about {topic}? It's actually way more complex than most people realize. Like, on a fundamental level, it's processing massive amounts of data and making split-second decisions constantly. No cap, the algorithms behind {topic} are genuinely mind-blowing when you actually understand them.\n\nWhat makes {topic} particularly interesting is how it intersects with cultural and social dynamics in ways that weren't possible before. The meta-analysis of how {topic} evolves over time is literally changing how we think about systems in general. Pretty based when you think about it.",
    ),
    (
        ReadingLevelMode::Advanced,
        PersonaVoice::Humorous,
        "Alright, buckle up for {topic} - the thing everyone pretends to understand at dinner parties but secretly Googles later! It's like that friend who speaks five languages but still can't figure out how to use a self-checkout machine.\n\nThe hilarious thing about {topic} is that experts have been arguing about it for decades, writing thousand-page books that basically say \"it's complicated.\" Meanwhile, the rest of us are just trying to understand the basic concept without accidentally revealing our ignorance. It's the academic equivalent of pretending to remember someone's name too long after you should have asked!",
    ),
    (
        ReadingLevelMode::Tangential,
        PersonaVoice::FormalEducator,
        "What if {topic} is merely our perception of higher-dimensional phenomena projecting onto our limited three-dimensional understanding? Consider this: just as a shadow is a 2D representation of a 3D object, perhaps {topic} is the \"shadow\" of something far more complex existing beyond our sensory capabilities.\n\nFurthermore, if our understanding of {topic} suddenly shifted, would the fundamental nature of reality as we experience it change accordingly? These epistemological boundaries invite profound contemplation.",
    ),
    (
        ReadingLevelMode::Tangential,
        PersonaVoice::TechnicalEnthusiast,
        "Here's a mind-bender: What if {topic} is actually a naturally emergent property of complexity, similar to how Conway's Game of Life produces unexpected patterns from simple rules? The computational universe theory suggests that reality itself might be a simulation built on simple mathematical foundations.\n\nAnd consider this: if {topic} were to be fully simulated at the quantum level, would the simulation itself develop consciousness? The recursive implications are staggering when you apply Gödel's Incompleteness Theorems to self-referential systems like {topic}.",
    ),
    (
        ReadingLevelMode::Tangential,
        PersonaVoice::InformalYouth,
        "Okay but like... what if {topic} is just the universe's way of experiencing itself? Like, we think we invented or discovered {topic}, but maybe it's been waiting for someone to notice it this whole time?\n\nAnd here's something that will literally break your brain: what if {topic} is completely different in parallel universes? Like in some alternate reality, people are completely shocked at how our version of {topic} works because theirs is totally different. The multiverse is wild fr fr.",
    ),
    (
        ReadingLevelMode::Tangential,
        PersonaVoice::Humorous,
        "What if {topic} is just the universe's way of playing a cosmic practical joke? Like, we're all seriously studying and analyzing it, and meanwhile some interdimensional beings are watching us like \"Look at them trying to figure it out! Should we tell them it's just space hiccups?\"\n\nAnd here's another one: what if {topic} only works because we believe it works? Like the placebo effect, but for reality itself. One day someone's going to say \"wait, that makes no sense\" and suddenly {topic} just stops working worldwide. Chaos ensues. Cats and dogs living together. Mass hysteria!",
    ),
];

static BUILTIN_BANK: Lazy<ResponseBank> = Lazy::new(ResponseBank::builtin);

/// Mapping from (mode, persona) to an explanation template
#[derive(Debug, Clone)]
pub struct ResponseBank {
    templates: HashMap<(ReadingLevelMode, PersonaVoice), String>,
}

impl ResponseBank {
    /// Build the bank shipped with the crate. It covers every pair.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_RESPONSES
                .iter()
                .map(|(mode, persona, template)| (*mode, *persona, template.to_string())),
        )
    }

    /// Build a bank from arbitrary entries. Later entries replace earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ReadingLevelMode, PersonaVoice, String)>,
    {
        let templates = entries
            .into_iter()
            .map(|(mode, persona, template)| ((mode, persona), template))
            .collect();
        Self { templates }
    }

    /// Template for the pair, falling back to the simple professor entry.
    pub fn template(&self, mode: ReadingLevelMode, persona: PersonaVoice) -> &str {
        if let Some(template) = self.templates.get(&(mode, persona)) {
            return template;
        }

        warn!(
            "No response template for {} x {}, falling back to {} x {}",
            mode, persona, FALLBACK_KEY.0, FALLBACK_KEY.1
        );
        self.templates
            .get(&FALLBACK_KEY)
            .map(String::as_str)
            .unwrap_or(LAST_RESORT_TEMPLATE)
    }

    /// Render the template for the pair with the topic inserted verbatim.
    pub fn render(&self, topic: &str, mode: ReadingLevelMode, persona: PersonaVoice) -> String {
        self.template(mode, persona).replace(TOPIC_PLACEHOLDER, topic)
    }

    /// Whether every pair has a non-empty template.
    pub fn is_exhaustive(&self) -> bool {
        ReadingLevelMode::ALL.iter().all(|mode| {
            PersonaVoice::ALL.iter().all(|persona| {
                self.templates
                    .get(&(*mode, *persona))
                    .is_some_and(|t| !t.trim().is_empty())
            })
        })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for ResponseBank {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Explanation text for the topic from the built-in bank.
pub fn select_response(topic: &str, mode: ReadingLevelMode, persona: PersonaVoice) -> String {
    BUILTIN_BANK.render(topic, mode, persona)
}
