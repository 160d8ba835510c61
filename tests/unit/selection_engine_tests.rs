/*!
 * Tests for the template selection engine
 */

use explainofun::content::memes::{MemeCategory, select_random_meme_template_with_rng};
use explainofun::content::phrases::DEFAULT_PHRASE_KEY;
use explainofun::content::{
    MemeTemplate, PersonaVoice, ReadingLevelMode, match_meme_template, meme_templates,
    select_random_meme_template, select_response, select_short_phrase, substitute_topic,
};
use crate::common;

/// Every pair renders non-empty text containing the topic verbatim
#[test]
fn test_selectResponse_forEveryPair_shouldContainTopicVerbatim() {
    let topic = "Black Holes & {Friends}";
    for mode in ReadingLevelMode::ALL {
        for persona in PersonaVoice::ALL {
            let text = select_response(topic, mode, persona);
            assert!(!text.trim().is_empty(), "empty text for {} x {}", mode, persona);
            assert!(text.contains(topic), "topic missing for {} x {}", mode, persona);
            assert!(!text.contains("{topic}"), "placeholder left for {} x {}", mode, persona);
        }
    }
}

/// Full golden output for every (mode, persona) pair
#[test]
fn test_selectResponse_blackHolesForEveryPair_shouldMatchGolden() {
    let expected = [
        (
            ReadingLevelMode::Simple,
            PersonaVoice::FormalEducator,
            "Okay little one, imagine Black Holes is like a big, colorful balloon. When you let go of a balloon, it flies up high in the sky because it's filled with a special, light air that wants to float. That's how Black Holes works in the simplest way!",
        ),
        (
            ReadingLevelMode::Simple,
            PersonaVoice::TechnicalEnthusiast,
            "So kiddo, Black Holes is basically like when you have a super cool toy robot that does things automatically. The robot has tiny, tiny parts inside that work together, just like Black Holes has special pieces that make it work!",
        ),
        (
            ReadingLevelMode::Simple,
            PersonaVoice::InformalYouth,
            "Ok so Black Holes is like suuuper easy! It's like when your favorite game loads really fast and you're like \"whoaaa!\" That's basically what Black Holes does - it makes cool stuff happen super quick! No cap!",
        ),
        (
            ReadingLevelMode::Simple,
            PersonaVoice::Humorous,
            "Heyyyy little buddy! Wanna know about Black Holes? It's like when you try to eat spaghetti but it goes EVERYWHERE! Messy and fun and sometimes a little confusing, but that's Black Holes for ya! *makes silly face*",
        ),
        (
            ReadingLevelMode::Intermediate,
            PersonaVoice::FormalEducator,
            "Let's explore Black Holes at a middle-school level. Black Holes is essentially a system that functions by converting one form of energy into another. Think about how a bicycle works - you input energy by pedaling, and the bike converts that into forward motion. Black Holes operates on similar principles of energy transfer.",
        ),
        (
            ReadingLevelMode::Intermediate,
            PersonaVoice::TechnicalEnthusiast,
            "So here's the deal with Black Holes: it's like the code behind your favorite video game. There are specific rules that determine how it works, and when you understand those rules, you can predict what will happen. In technical terms, Black Holes involves a specific sequence of processes that produce reliable results.",
        ),
        (
            ReadingLevelMode::Intermediate,
            PersonaVoice::InformalYouth,
            "NGL, Black Holes is actually pretty fire when you get it. It's like when your TikTok algorithm finally understands your vibe and only shows you the good stuff. Black Holes is kinda the same - it figures out patterns and then does its thing. Pretty based, actually!",
        ),
        (
            ReadingLevelMode::Intermediate,
            PersonaVoice::Humorous,
            "Middle school, huh? Well, Black Holes is like that awkward school dance where nobody knows where to put their hands. It seems complicated but really everyone's just trying to follow some basic steps without tripping! And just like middle school, Black Holes sometimes makes weird noises when you least expect it!",
        ),
        (
            ReadingLevelMode::Advanced,
            PersonaVoice::FormalEducator,
            "A comprehensive analysis of Black Holes reveals its multifaceted nature. At its foundation, Black Holes operates according to fundamental principles that can be observed and measured with precision. The mechanisms underlying Black Holes have been studied extensively, revealing complex interactions at multiple scales.\n\nFurthermore, recent advances in our understanding of Black Holes have illuminated previously obscure aspects, leading to new theoretical frameworks that better explain observed phenomena. These developments have significant implications across multiple domains of application.",
        ),
        (
            ReadingLevelMode::Advanced,
            PersonaVoice::TechnicalEnthusiast,
            "Let's dive deep into Black Holes from a technical perspective. The underlying architecture consists of interconnected systems that process and transmit information according to well-defined protocols. When examining Black Holes at scale, emergent properties become apparent that cannot be predicted from analysis of individual components alone.\n\nThe technical specifications of Black Holes typically include parameters that can be optimized for different use cases. Advanced implementations may incorporate machine learning algorithms to adapt dynamically to changing conditions, significantly enhancing performance metrics compared to static models.",
        ),
        (
            ReadingLevelMode::Advanced,
            PersonaVoice::InformalYouth,
            "Okay, real talk about Black Holes? It's actually way more complex than most people realize. Like, on a fundamental level, it's processing massive amounts of data and making split-second decisions constantly. No cap, the algorithms behind Black Holes are genuinely mind-blowing when you actually understand them.\n\nWhat makes Black Holes particularly interesting is how it intersects with cultural and social dynamics in ways that weren't possible before. The meta-analysis of how Black Holes evolves over time is literally changing how we think about systems in general. Pretty based when you think about it.",
        ),
        (
            ReadingLevelMode::Advanced,
            PersonaVoice::Humorous,
            "Alright, buckle up for Black Holes - the thing everyone pretends to understand at dinner parties but secretly Googles later! It's like that friend who speaks five languages but still can't figure out how to use a self-checkout machine.\n\nThe hilarious thing about Black Holes is that experts have been arguing about it for decades, writing thousand-page books that basically say \"it's complicated.\" Meanwhile, the rest of us are just trying to understand the basic concept without accidentally revealing our ignorance. It's the academic equivalent of pretending to remember someone's name too long after you should have asked!",
        ),
        (
            ReadingLevelMode::Tangential,
            PersonaVoice::FormalEducator,
            "What if Black Holes is merely our perception of higher-dimensional phenomena projecting onto our limited three-dimensional understanding? Consider this: just as a shadow is a 2D representation of a 3D object, perhaps Black Holes is the \"shadow\" of something far more complex existing beyond our sensory capabilities.\n\nFurthermore, if our understanding of Black Holes suddenly shifted, would the fundamental nature of reality as we experience it change accordingly? These epistemological boundaries invite profound contemplation.",
        ),
        (
            ReadingLevelMode::Tangential,
            PersonaVoice::TechnicalEnthusiast,
            "Here's a mind-bender: What if Black Holes is actually a naturally emergent property of complexity, similar to how Conway's Game of Life produces unexpected patterns from simple rules? The computational universe theory suggests that reality itself might be a simulation built on simple mathematical foundations.\n\nAnd consider this: if Black Holes were to be fully simulated at the quantum level, would the simulation itself develop consciousness? The recursive implications are staggering when you apply Gödel's Incompleteness Theorems to self-referential systems like Black Holes.",
        ),
        (
            ReadingLevelMode::Tangential,
            PersonaVoice::InformalYouth,
            "Okay but like... what if Black Holes is just the universe's way of experiencing itself? Like, we think we invented or discovered Black Holes, but maybe it's been waiting for someone to notice it this whole time?\n\nAnd here's something that will literally break your brain: what if Black Holes is completely different in parallel universes? Like in some alternate reality, people are completely shocked at how our version of Black Holes works because theirs is totally different. The multiverse is wild fr fr.",
        ),
        (
            ReadingLevelMode::Tangential,
            PersonaVoice::Humorous,
            "What if Black Holes is just the universe's way of playing a cosmic practical joke? Like, we're all seriously studying and analyzing it, and meanwhile some interdimensional beings are watching us like \"Look at them trying to figure it out! Should we tell them it's just space hiccups?\"\n\nAnd here's another one: what if Black Holes only works because we believe it works? Like the placebo effect, but for reality itself. One day someone's going to say \"wait, that makes no sense\" and suddenly Black Holes just stops working worldwide. Chaos ensues. Cats and dogs living together. Mass hysteria!",
        ),
    ];

    assert_eq!(expected.len(), ReadingLevelMode::ALL.len() * PersonaVoice::ALL.len());
    for (mode, persona, golden) in expected {
        assert_eq!(select_response("Black Holes", mode, persona), golden, "{} x {}", mode, persona);
    }
}

/// Same inputs, same output
#[test]
fn test_selectResponse_calledTwice_shouldBeDeterministic() {
    let first = select_response("Rust", ReadingLevelMode::Tangential, PersonaVoice::Humorous);
    let second = select_response("Rust", ReadingLevelMode::Tangential, PersonaVoice::Humorous);
    assert_eq!(first, second);
}

/// Unrecognized topics use the default entry for every mode
#[test]
fn test_selectShortPhrase_withUnknownTopic_shouldUseDefaultForEveryMode() {
    for mode in ReadingLevelMode::ALL {
        assert_eq!(
            select_short_phrase("Medieval Cheese Rolling", mode),
            select_short_phrase(DEFAULT_PHRASE_KEY, mode)
        );
    }
}

/// Known topics are looked up case-insensitively
#[test]
fn test_selectShortPhrase_withKnownTopic_shouldIgnoreCase() {
    assert_eq!(
        select_short_phrase("QUANTUM computing", ReadingLevelMode::Advanced),
        select_short_phrase("quantum computing", ReadingLevelMode::Advanced)
    );
    assert_ne!(
        select_short_phrase("quantum computing", ReadingLevelMode::Advanced),
        select_short_phrase(DEFAULT_PHRASE_KEY, ReadingLevelMode::Advanced)
    );
}

/// The matcher never fails, whatever the input
#[test]
fn test_matchMemeTemplate_withArbitraryInput_shouldAlwaysReturnTemplate() {
    let inputs = [("", ""), ("   ", "\n"), ("zzz", "qqq"), ("🤖", "ÜBER"), ("{topic}", "{topic}")];
    for (top, bottom) in inputs {
        let template = match_meme_template(top, bottom);
        assert!(meme_templates().contains(template));
    }
    assert_eq!(match_meme_template("", ""), &meme_templates()[0]);
}

/// Substituted captions match a template that fits them exactly
#[test]
fn test_matchMemeTemplate_withSubstitutedCaption_shouldFindFittingTemplate() {
    for template in meme_templates() {
        let caption = substitute_topic(template, "Rockets");
        let matched = match_meme_template(&caption.top_text, &caption.bottom_text);
        assert!(matched.fits(&caption.top_text, &caption.bottom_text));
    }

    let matched = match_meme_template("EXPLAINING WHAT IS ROCKETS", "LIKE A DISTINGUISHED PROFESSOR");
    assert_eq!(matched, &meme_templates()[8]);
}

/// Exact matching and keyword rules are case-sensitive
#[test]
fn test_matchMemeTemplate_withLowercaseCaption_shouldFallBackToFirstTemplate() {
    let matched = match_meme_template("trying to understand rust", "my brain: understandable, have a nice day");
    assert_eq!(matched, &meme_templates()[0]);

    let matched = match_meme_template("TRYING TO UNDERSTAND RUST", "MY BRAIN: UNDERSTANDABLE, HAVE A NICE DAY");
    assert_eq!(matched, &meme_templates()[2]);
}

/// Keyword rules apply in priority order
#[test]
fn test_matchMemeTemplate_withKeywords_shouldFollowRulePriority() {
    let cases = [
        ("HELLO", "LIKE A DISTINGUISHED PROFESSOR", MemeCategory::Professor),
        ("AI IS HERE", "I DO NOT UNDERSTAND", MemeCategory::Ai),
        ("I DO NOT UNDERSTAND", "HELP", MemeCategory::Confusion),
        ("WE ARE", "SO CONFUSED", MemeCategory::Confusion),
    ];

    for (top, bottom, category) in cases {
        let matched = match_meme_template(top, bottom);
        assert_eq!(matched.category, category, "{} / {}", top, bottom);
    }
}

/// `AI` is a plain substring, so it wins over `EXPLAIN` and fires inside other words
#[test]
fn test_matchMemeTemplate_withAiInsideWord_shouldReturnAiTemplate() {
    assert_eq!(match_meme_template("EXPLAINING STUFF", "HELLO"), &meme_templates()[6]);
    assert_eq!(match_meme_template("HOW TO EXPLAIN", "SOMETHING"), &meme_templates()[6]);
    assert_eq!(match_meme_template("MY TEACHER SAID", "WHATEVER"), &meme_templates()[6]);
}

/// There is no rule for `TEACHER`, so such captions fall back to the first template
#[test]
fn test_matchMemeTemplate_withTeacherKeyword_shouldFallBackToFirstTemplate() {
    assert_eq!(match_meme_template("MY TEACHER", "WHATEVER"), &meme_templates()[0]);
}

/// A caption built from an empty topic still matches its template exactly
#[test]
fn test_matchMemeTemplate_withEmptyTopicCaption_shouldMatchExactly() {
    let caption = substitute_topic(&meme_templates()[4], "");
    assert_eq!(caption.bottom_text, "ME: LET ME TELL YOU ABOUT ");
    assert_eq!(match_meme_template(&caption.top_text, &caption.bottom_text), &meme_templates()[4]);
}

/// The first template of the winning category is returned
#[test]
fn test_matchMemeTemplate_withConfusionKeyword_shouldReturnFirstConfusionTemplate() {
    let matched = match_meme_template("I DO NOT UNDERSTAND", "HELP");
    assert_eq!(matched, &meme_templates()[1]);
}

/// The random pick never repeats the current caption when alternatives exist
#[test]
fn test_selectRandomMemeTemplate_withTwoTemplates_shouldNeverReturnCurrent() {
    let templates = common::two_templates();
    let current = substitute_topic(&templates[0], "Rust");
    let mut rng = common::seeded_rng(11);

    for _ in 0..50 {
        let picked = select_random_meme_template_with_rng(
            &templates,
            &current.top_text,
            &current.bottom_text,
            "Rust",
            &mut rng,
        )
        .expect("non-empty list");
        assert_eq!(picked, &templates[1]);
    }
}

/// A single template is returned even though it is the current one
#[test]
fn test_selectRandomMemeTemplate_withSingleTemplate_shouldReturnIt() {
    let templates = vec![MemeTemplate::new("ONLY {topic}", "ONE", "a.png", MemeCategory::Ai)];
    let current = substitute_topic(&templates[0], "Rust");
    let picked = select_random_meme_template_with_rng(
        &templates,
        &current.top_text,
        &current.bottom_text,
        "Rust",
        &mut common::seeded_rng(1),
    );
    assert_eq!(picked, Some(&templates[0]));
}

/// An empty list has nothing to pick
#[test]
fn test_selectRandomMemeTemplate_withEmptyList_shouldReturnNone() {
    let picked = select_random_meme_template_with_rng(&[], "A", "B", "Rust", &mut common::seeded_rng(1));
    assert!(picked.is_none());
}

/// The built-in list never yields the current caption
#[test]
fn test_selectRandomMemeTemplate_withBuiltinList_shouldDifferFromCurrent() {
    let current = substitute_topic(&meme_templates()[3], "Dark Matter");
    for _ in 0..100 {
        let picked = select_random_meme_template(&current.top_text, &current.bottom_text, "Dark Matter");
        assert_ne!(substitute_topic(picked, "Dark Matter"), current);
    }
}

/// Substitution is pure
#[test]
fn test_substituteTopic_calledTwice_shouldBeIdentical() {
    let template = &meme_templates()[0];
    let first = substitute_topic(template, "Climate Change");
    let second = substitute_topic(template, "Climate Change");
    assert_eq!(first, second);
    assert_eq!(first.top_text, "WHEN SOMEONE ASKS ABOUT CLIMATE CHANGE");
    assert_eq!(first.bottom_text, "ME: *EXPLAINS WITH ADVANCED SCIENCE*");
}
