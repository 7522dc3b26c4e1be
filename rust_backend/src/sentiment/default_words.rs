//! Default word lists for the embedded lexicon.

use super::lexicon::{PolarityLexicon, LEXICON_VERSION};

pub(super) fn build_default_lexicon() -> PolarityLexicon {
    let mut lexicon = PolarityLexicon::new(LEXICON_VERSION);

    // Strongly positive
    for word in [
        "best",
        "perfect",
        "excellent",
        "wonderful",
        "brilliant",
        "magnificent",
        "masterpiece",
        "superb",
        "outstanding",
        "triumphant",
        "delightful",
        "extraordinary",
        "awesome",
    ] {
        lexicon.add_word(word, 0.9);
    }

    // Moderately positive
    for word in [
        "amazing",
        "beautiful",
        "great",
        "happy",
        "love",
        "loving",
        "beloved",
        "inspiring",
        "inspirational",
        "heartwarming",
        "hilarious",
        "charming",
        "joyful",
        "remarkable",
        "incredible",
        "fantastic",
        "successful",
        "victorious",
        "celebrated",
        "uplifting",
    ] {
        lexicon.add_word(word, 0.6);
    }

    // Mildly positive
    for word in [
        "good",
        "fun",
        "funny",
        "sweet",
        "kind",
        "brave",
        "bold",
        "talented",
        "famous",
        "popular",
        "special",
        "true",
        "real",
        "free",
        "unlikely",
        "hope",
        "hopeful",
        "friendly",
        "romantic",
        "gentle",
        "curious",
        "clever",
        "smart",
        "rich",
        "powerful",
        "legendary",
        "epic",
        "unexpected",
        "magical",
    ] {
        lexicon.add_word(word, 0.35);
    }

    // Faintly positive
    for word in [
        "new",
        "young",
        "first",
        "big",
        "fresh",
        "whole",
        "own",
        "modern",
        "local",
        "various",
        "greatest",
        "full",
        "high",
        "comic",
        "wild",
    ] {
        lexicon.add_word(word, 0.12);
    }

    // Faintly negative
    for word in [
        "old",
        "small",
        "strange",
        "secret",
        "mysterious",
        "hard",
        "tough",
        "complicated",
        "lonely",
        "unusual",
        "odd",
        "missing",
        "last",
        "late",
        "low",
    ] {
        lexicon.add_word(word, -0.1);
    }

    // Mildly negative
    for word in [
        "dark",
        "sad",
        "poor",
        "difficult",
        "troubled",
        "desperate",
        "lost",
        "struggling",
        "broken",
        "dangerous",
        "crime",
        "criminal",
        "corrupt",
        "fake",
        "wrong",
        "angry",
        "afraid",
        "scared",
        "haunted",
        "risky",
        "tragic",
        "grim",
        "bleak",
    ] {
        lexicon.add_word(word, -0.35);
    }

    // Moderately negative
    for word in [
        "bad",
        "deadly",
        "violent",
        "cruel",
        "sinister",
        "ruthless",
        "vicious",
        "vengeful",
        "dead",
        "dying",
        "painful",
        "terrifying",
        "disturbing",
        "menacing",
        "sick",
        "ugly",
        "bitter",
        "shocking",
    ] {
        lexicon.add_word(word, -0.6);
    }

    // Strongly negative
    for word in [
        "evil",
        "worst",
        "terrible",
        "horrible",
        "awful",
        "brutal",
        "horrific",
        "gruesome",
        "monstrous",
        "devastating",
        "disgusting",
        "catastrophic",
    ] {
        lexicon.add_word(word, -0.9);
    }

    for (word, multiplier) in [
        ("very", 1.3),
        ("really", 1.3),
        ("truly", 1.3),
        ("so", 1.2),
        ("too", 1.2),
        ("quite", 1.1),
        ("highly", 1.4),
        ("deeply", 1.4),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("utterly", 1.5),
        ("most", 1.5),
        ("slightly", 0.5),
        ("somewhat", 0.7),
        ("fairly", 0.8),
    ] {
        lexicon.add_intensifier(word, multiplier);
    }

    for word in ["not", "never", "no", "nobody", "nothing", "neither", "nor", "hardly"] {
        lexicon.add_negation(word);
    }

    lexicon
}
