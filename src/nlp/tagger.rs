// ============================================================
// Layer 5 — Lexicon + Suffix Tagger
// ============================================================
// Default Tagger emitting Penn Treebank tags. Closed-class words
// come from a fixed lexicon; open-class words are guessed from
// their shape and suffix. Hosts that need real tagging inject
// their own Tagger.

use rustc_hash::FxHashMap;

use crate::domain::traits::Tagger;

const LEXICON: &[(&str, &str)] = &[
    // Determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"),
    ("some", "DT"), ("any", "DT"), ("no", "DT"), ("all", "DT"), ("another", "DT"),
    // Pronouns
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"),
    ("we", "PRP"), ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("us", "PRP"),
    ("them", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"),
    ("its", "PRP$"), ("our", "PRP$"), ("their", "PRP$"),
    // Prepositions / subordinating conjunctions
    ("in", "IN"), ("on", "IN"), ("at", "IN"), ("of", "IN"), ("for", "IN"),
    ("with", "IN"), ("by", "IN"), ("from", "IN"), ("about", "IN"), ("into", "IN"),
    ("over", "IN"), ("after", "IN"), ("before", "IN"), ("under", "IN"),
    ("between", "IN"), ("through", "IN"), ("during", "IN"), ("without", "IN"),
    ("since", "IN"), ("because", "IN"), ("if", "IN"), ("while", "IN"),
    ("as", "IN"), ("than", "IN"), ("like", "IN"), ("upon", "IN"),
    ("to", "TO"),
    // Coordinating conjunctions
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    // Modals
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"),
    ("shall", "MD"), ("should", "MD"), ("may", "MD"), ("might", "MD"),
    ("must", "MD"),
    // Auxiliaries
    ("is", "VBZ"), ("has", "VBZ"), ("does", "VBZ"),
    ("are", "VBP"), ("am", "VBP"), ("have", "VBP"), ("do", "VBP"),
    ("was", "VBD"), ("were", "VBD"), ("had", "VBD"), ("did", "VBD"),
    ("be", "VB"), ("been", "VBN"),
    // Adverbs
    ("not", "RB"), ("very", "RB"), ("also", "RB"), ("just", "RB"),
    ("never", "RB"), ("always", "RB"), ("often", "RB"), ("here", "RB"),
    ("there", "RB"), ("now", "RB"), ("then", "RB"), ("too", "RB"),
    // Wh-words
    ("who", "WP"), ("what", "WP"), ("whom", "WP"), ("which", "WDT"),
    ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive", "less", "ical", "ish"];

pub struct SuffixTagger {
    lexicon: FxHashMap<&'static str, &'static str>,
}

impl SuffixTagger {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    fn tag_token(&self, token: &str, position: usize) -> String {
        if !token.chars().any(char::is_alphanumeric) {
            return punctuation_tag(token).to_string();
        }
        if token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return "CD".to_string();
        }

        let lower = token.to_lowercase();
        if let Some(tag) = self.lexicon.get(lower.as_str()) {
            return tag.to_string();
        }

        let long = lower.chars().count() > 3;
        let tag = if long && lower.ends_with("ly") {
            "RB"
        } else if long && lower.ends_with("ing") {
            "VBG"
        } else if long && lower.ends_with("ed") {
            "VBD"
        } else if long && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            "JJ"
        } else if position > 0 && token.chars().next().is_some_and(char::is_uppercase) {
            "NNP"
        } else if long
            && lower.ends_with('s')
            && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
        {
            "NNS"
        } else {
            "NN"
        };
        tag.to_string()
    }
}

impl Default for SuffixTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for SuffixTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), self.tag_token(t, i)))
            .collect()
    }
}

fn punctuation_tag(token: &str) -> &str {
    match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ";" | ":" => ":",
        "$" | "#" | "(" | ")" => token,
        _ => "SYM",
    }
}
