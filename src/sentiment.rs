//! # Sentiment scoring
//!
//! Lexicon-based polarity scoring for review text. The scorer sits behind a
//! trait so the query pipeline can be exercised with a deterministic stub;
//! anything producing bounded, repeatable scores satisfies the contract.
//!
//! The built-in scorer looks each token up in a valence lexicon, adjusts for
//! nearby negators and intensity boosters, and folds the valences into the
//! usual four scores: `negative`/`neutral`/`positive` fractions plus a
//! `compound` scalar normalized into [-1, 1].

use std::collections::HashMap;

use crate::model::SentimentScores;

pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScores;
}

/// Normalization constant for the compound score.
const ALPHA: f64 = 15.0;

/// A preceding negator flips and dampens a token's valence.
const NEGATION_FACTOR: f64 = -0.74;

/// Booster influence falls off with distance from the scored token.
const DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "nothing", "cannot", "cant", "dont", "doesnt",
    "didnt", "wont", "wasnt", "isnt", "arent", "werent", "couldnt", "shouldnt", "wouldnt",
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("extremely", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("so", 0.293),
    ("totally", 0.293),
    ("truly", 0.293),
    ("very", 0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("marginally", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];

const LEXICON: &[(&str, f64)] = &[
    // positive
    ("amazing", 2.8),
    ("appreciated", 2.0),
    ("attentive", 1.8),
    ("awesome", 3.1),
    ("best", 3.2),
    ("better", 1.9),
    ("clean", 1.7),
    ("comfortable", 1.9),
    ("convenient", 1.6),
    ("courteous", 2.0),
    ("delicious", 2.7),
    ("delighted", 2.7),
    ("easy", 1.5),
    ("efficient", 1.7),
    ("enjoyable", 2.2),
    ("enjoyed", 2.0),
    ("excellent", 2.7),
    ("exceptional", 2.9),
    ("fair", 1.6),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.9),
    ("honest", 2.0),
    ("impressed", 2.2),
    ("like", 1.5),
    ("liked", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("nice", 1.8),
    ("outstanding", 3.1),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("polite", 1.9),
    ("professional", 1.6),
    ("prompt", 1.3),
    ("reasonable", 1.4),
    ("recommend", 1.5),
    ("recommended", 1.6),
    ("reliable", 1.9),
    ("satisfied", 1.9),
    ("smooth", 1.2),
    ("spotless", 2.0),
    ("superb", 3.0),
    ("tasty", 2.1),
    ("thanks", 1.9),
    ("welcoming", 2.1),
    ("wonderful", 2.7),
    // negative
    ("angry", -2.3),
    ("annoying", -1.8),
    ("atrocious", -2.6),
    ("avoid", -1.4),
    ("awful", -2.0),
    ("bad", -2.5),
    ("bland", -1.2),
    ("broken", -1.6),
    ("careless", -1.7),
    ("complaint", -1.4),
    ("crowded", -0.7),
    ("damaged", -1.7),
    ("dirty", -1.9),
    ("disappointed", -2.3),
    ("disappointing", -2.2),
    ("disgusting", -2.6),
    ("dreadful", -2.3),
    ("expensive", -0.9),
    ("failed", -1.8),
    ("failure", -2.0),
    ("faulty", -1.6),
    ("frustrated", -2.0),
    ("frustrating", -1.9),
    ("gross", -1.9),
    ("hate", -2.7),
    ("hated", -2.6),
    ("horrible", -2.5),
    ("ignored", -1.6),
    ("lousy", -1.9),
    ("mediocre", -1.1),
    ("mess", -1.6),
    ("messy", -1.5),
    ("noisy", -1.1),
    ("overpriced", -1.9),
    ("poor", -2.1),
    ("problem", -1.4),
    ("problems", -1.5),
    ("ripoff", -2.4),
    ("rotten", -2.2),
    ("rude", -2.4),
    ("scam", -2.6),
    ("shoddy", -1.9),
    ("sloppy", -1.5),
    ("slow", -1.2),
    ("smelly", -1.7),
    ("stale", -1.3),
    ("subpar", -1.4),
    ("terrible", -2.1),
    ("unacceptable", -2.1),
    ("unhelpful", -1.7),
    ("unprofessional", -2.0),
    ("unreliable", -1.8),
    ("upset", -1.9),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -1.9),
    ("worst", -3.1),
];

pub struct LexiconScorer {
    valences: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self {
            valences: LEXICON.iter().copied().collect(),
        }
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);
        let mut valences = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.valences.get(token.as_str()) else {
                valences.push(0.0);
                continue;
            };

            let mut valence = base;

            for (back, damping) in DAMPING.iter().enumerate() {
                let Some(j) = i.checked_sub(back + 1) else {
                    break;
                };
                let prev = tokens[j].as_str();

                if let Some(boost) = booster(prev) {
                    valence += boost * damping * valence.signum();
                }
                if is_negation(prev) {
                    valence *= NEGATION_FACTOR;
                }
            }

            valences.push(valence);
        }

        aggregate(&valences)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

fn booster(token: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, boost)| boost)
}

fn aggregate(valences: &[f64]) -> SentimentScores {
    if valences.is_empty() {
        return SentimentScores {
            negative: 0.0,
            neutral: 0.0,
            positive: 0.0,
            compound: 0.0,
        };
    }

    let sum: f64 = valences.iter().sum();
    let compound = (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0);

    let mut positive = 0.0;
    let mut negative = 0.0;
    let mut neutral = 0.0;

    for &valence in valences {
        if valence > 0.0 {
            positive += valence + 1.0;
        } else if valence < 0.0 {
            negative += valence.abs() + 1.0;
        } else {
            neutral += 1.0;
        }
    }

    let total = positive + negative + neutral;

    SentimentScores {
        negative: round3(negative / total),
        neutral: round3(neutral / total),
        positive: round3(positive / total),
        compound: round4(compound),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn round4(value: f64) -> f64 {
    (value * 10000.0).round() / 10000.0
}
