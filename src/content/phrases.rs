/*!
 * Short phrase bank used by short-form scripts.
 *
 * Phrases are keyed by a normalized topic (trimmed, lower-cased). Unknown
 * topics use the `default` entry, which is always present.
 */

use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::modes::ReadingLevelMode;

/// Key of the entry used for unrecognized topics.
pub const DEFAULT_PHRASE_KEY: &str = "default";

/// Phrases for one topic, one per mode: simple, intermediate, advanced, tangential.
type PhraseRow = [&'static str; 4];

const BUILTIN_PHRASES: &[(&str, PhraseRow)] = &[
    (
        DEFAULT_PHRASE_KEY,
        [
            "it's like magic, but real",
            "it follows a few simple rules that add up to something big",
            "there's a whole system of moving parts working together",
            "what if it's been explaining us this whole time",
        ],
    ),
    (
        "quantum computing",
        [
            "it's a computer that can flip a coin and land on both sides",
            "qubits can be zero and one at the same time",
            "superposition and entanglement let it explore many answers at once",
            "every measurement might be splitting the universe in two",
        ],
    ),
    (
        "black holes",
        [
            "it's a cosmic vacuum cleaner that never gets full",
            "gravity gets so strong that not even light can escape",
            "spacetime curves until the escape velocity exceeds the speed of light",
            "what if every black hole is the back door of another universe",
        ],
    ),
    (
        "artificial intelligence",
        [
            "it's a computer that learns from looking at lots of examples",
            "it finds patterns in data and uses them to make guesses",
            "neural networks adjust millions of weights to minimize their error",
            "what if it is already explaining this to itself",
        ],
    ),
    (
        "blockchain",
        [
            "it's a notebook everybody shares and nobody can erase",
            "every page links to the one before it with a secret code",
            "consensus protocols keep a distributed ledger tamper-evident",
            "what if money is just a group agreement we all keep writing down",
        ],
    ),
    (
        "climate change",
        [
            "the Earth is wearing a blanket that keeps getting thicker",
            "greenhouse gases trap heat that would otherwise escape to space",
            "radiative forcing shifts the planet's energy balance over decades",
            "the weather is basically the planet's mood swings",
        ],
    ),
    (
        "dark matter",
        [
            "it's invisible stuff that holds galaxies together",
            "we can't see it, but we can see what its gravity does",
            "rotation curves demand far more mass than the visible matter provides",
            "what if most of the universe is just hiding from us",
        ],
    ),
];

static BUILTIN_PHRASE_BANK: Lazy<ShortPhraseBank> = Lazy::new(ShortPhraseBank::builtin);

/// Topic-keyed short phrases used in video scripts
#[derive(Debug, Clone)]
pub struct ShortPhraseBank {
    phrases: HashMap<String, HashMap<ReadingLevelMode, String>>,
}

impl ShortPhraseBank {
    /// Build the bank shipped with the crate.
    pub fn builtin() -> Self {
        let phrases = BUILTIN_PHRASES
            .iter()
            .map(|(key, row)| {
                let by_mode = ReadingLevelMode::ALL
                    .iter()
                    .zip(row.iter())
                    .map(|(mode, phrase)| (*mode, phrase.to_string()))
                    .collect();
                (key.to_string(), by_mode)
            })
            .collect();
        Self { phrases }
    }

    /// Add or replace the phrases for a topic. The key is normalized.
    pub fn insert(&mut self, topic: &str, mode: ReadingLevelMode, phrase: &str) {
        self.phrases
            .entry(normalize_topic_key(topic))
            .or_default()
            .insert(mode, phrase.to_string());
    }

    /// Whether the normalized topic has its own entry.
    pub fn contains_topic(&self, topic: &str) -> bool {
        self.phrases.contains_key(&normalize_topic_key(topic))
    }

    /// Phrase for the topic and mode, or the default entry's phrase.
    pub fn phrase(&self, topic: &str, mode: ReadingLevelMode) -> &str {
        let key = normalize_topic_key(topic);
        if let Some(phrase) = self.phrases.get(&key).and_then(|row| row.get(&mode)) {
            return phrase;
        }

        debug!("No short phrase for '{}' in {} mode, using default", key, mode);
        self.phrases
            .get(DEFAULT_PHRASE_KEY)
            .and_then(|row| row.get(&mode))
            .map(String::as_str)
            .unwrap_or(BUILTIN_PHRASES[0].1[mode_index(mode)])
    }
}

impl Default for ShortPhraseBank {
    fn default() -> Self {
        Self::builtin()
    }
}

fn mode_index(mode: ReadingLevelMode) -> usize {
    match mode {
        ReadingLevelMode::Simple => 0,
        ReadingLevelMode::Intermediate => 1,
        ReadingLevelMode::Advanced => 2,
        ReadingLevelMode::Tangential => 3,
    }
}

/// Trim and lower-case a topic for lookups.
pub fn normalize_topic_key(topic: &str) -> String {
    topic.trim().to_lowercase()
}

/// Short phrase for the topic from the built-in bank.
pub fn select_short_phrase(topic: &str, mode: ReadingLevelMode) -> String {
    BUILTIN_PHRASE_BANK.phrase(topic, mode).to_string()
}
