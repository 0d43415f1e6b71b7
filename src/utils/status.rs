use crate::models::MatchStatus;
use once_cell::sync::Lazy;
use regex::Regex;

const COMPLETED_KEYWORDS: &[&str] = &[
    "tied",
    "complete",
    "drawn",
    "no result",
    "abandoned",
    "cancelled",
    "beat",
    "defeated",
    "washed out",
    "washout",
    "forfeit",
    "awarded",
    "dls",
    "d/l",
];

const LIVE_KEYWORDS: &[&str] = &[
    "live",
    "innings",
    "break",
    "opt to",
    "opted to",
    "elected to",
    "chose to",
    "toss",
    "batting",
    "bowling",
    "target",
    "need",
];

static MATCH_OVER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bmatch over\b").expect("valid match-over pattern"));

// "NZ 159/7 (20 Ovs)", "IND 186-4 (18.2)"
static SCORE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[a-z]{2,4}\s+\d{1,3}[-/]\d{1,2}\s*\(\s*\d{1,2}(?:\.\d)?(?:\s*ovs?)?\s*\)")
        .expect("valid score-line pattern")
});

static DEFAULT_CLASSIFIER: Lazy<StatusClassifier> = Lazy::new(StatusClassifier::default);

/// A single classification rule. Predicates receive the lowercased phrase.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub status: MatchStatus,
}

/// Ordered rules, first match wins, no match means upcoming
#[derive(Clone)]
pub struct StatusClassifier {
    rules: Vec<Rule>,
}

impl StatusClassifier {
    /// Keyword rules only, without the score-line rule
    pub fn keywords_only() -> Self {
        Self {
            rules: vec![
                Rule {
                    name: "result keyword",
                    matches: has_result_keyword,
                    status: MatchStatus::Completed,
                },
                Rule {
                    name: "won",
                    matches: has_match_win,
                    status: MatchStatus::Completed,
                },
                Rule {
                    name: "match over",
                    matches: |phrase| MATCH_OVER.is_match(phrase),
                    status: MatchStatus::Completed,
                },
                Rule {
                    name: "live keyword",
                    matches: has_live_keyword,
                    status: MatchStatus::Live,
                },
            ],
        }
    }

    pub fn new(score_line_is_live: bool) -> Self {
        let mut classifier = Self::keywords_only();
        if score_line_is_live {
            classifier.push(Rule {
                name: "score line",
                matches: |phrase| SCORE_LINE.is_match(phrase),
                status: MatchStatus::Live,
            });
        }
        classifier
    }

    /// Append a rule with the lowest precedence
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn classify(&self, phrase: &str) -> MatchStatus {
        let lower = phrase.to_lowercase();
        self.rules
            .iter()
            .find(|rule| (rule.matches)(&lower))
            .map(|rule| rule.status)
            .unwrap_or(MatchStatus::Upcoming)
    }
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Classify with the default rule set
pub fn classify(phrase: &str) -> MatchStatus {
    DEFAULT_CLASSIFIER.classify(phrase)
}

fn has_result_keyword(phrase: &str) -> bool {
    COMPLETED_KEYWORDS.iter().any(|keyword| phrase.contains(keyword))
}

/// "won" counts unless it is the toss that was won
fn has_match_win(phrase: &str) -> bool {
    phrase
        .match_indices("won")
        .any(|(i, word)| !phrase[i + word.len()..].trim_start().starts_with("the toss"))
}

fn has_live_keyword(phrase: &str) -> bool {
    LIVE_KEYWORDS.iter().any(|keyword| phrase.contains(keyword))
}
