//! Content-based skill recommendations.
//!
//! Builds TF-IDF vectors over every skill's `name description notes` text,
//! then ranks the other skills by cosine similarity to a target. The vector
//! space is rebuilt per request; corpora are small (one user's skills).

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 5;
pub const MAX_RECOMMENDATIONS_LIMIT: usize = 50;

/// English stop words removed before vectorizing.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or",
    "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One skill's contribution to the corpus.
#[derive(Debug, Clone)]
pub struct SkillDocument {
    pub skill_id: DbId,
    pub text: String,
}

impl SkillDocument {
    /// Concatenate the fields that describe a skill's content.
    pub fn from_fields(skill_id: DbId, name: &str, description: &str, notes: &str) -> Self {
        Self {
            skill_id,
            text: format!("{name} {description} {notes}"),
        }
    }
}

/// A neighbouring skill and its similarity to the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSkill {
    pub skill_id: DbId,
    pub similarity: f64,
}

// ---------------------------------------------------------------------------
// Tokenization
// ---------------------------------------------------------------------------

/// Lowercase the text and split it into word tokens of two or more
/// alphanumeric/underscore characters, dropping English stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !ENGLISH_STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// TF-IDF
// ---------------------------------------------------------------------------

/// Sparse L2-normalized TF-IDF row, keyed by vocabulary index.
pub type SparseVector = HashMap<usize, f64>;

/// Vectorize a corpus with raw term counts and smoothed idf
/// (`ln((1 + n) / (1 + df)) + 1`). Each row is L2-normalized; documents
/// with no surviving tokens produce an empty row.
pub fn tfidf_vectors(texts: &[&str]) -> Vec<SparseVector> {
    let tokenized: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t)).collect();

    let mut vocabulary: HashMap<&str, usize> = HashMap::new();
    let mut doc_freq: Vec<usize> = Vec::new();
    for tokens in &tokenized {
        let mut seen: Vec<usize> = Vec::new();
        for token in tokens {
            let next = vocabulary.len();
            let idx = *vocabulary.entry(token.as_str()).or_insert(next);
            if idx == doc_freq.len() {
                doc_freq.push(0);
            }
            if !seen.contains(&idx) {
                seen.push(idx);
                doc_freq[idx] += 1;
            }
        }
    }

    let n = texts.len() as f64;
    let idf: Vec<f64> = doc_freq
        .iter()
        .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    tokenized
        .iter()
        .map(|tokens| {
            let mut row = SparseVector::new();
            for token in tokens {
                let idx = vocabulary[token.as_str()];
                *row.entry(idx).or_insert(0.0) += 1.0;
            }
            for (idx, value) in row.iter_mut() {
                *value *= idf[*idx];
            }
            let norm = row.values().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for value in row.values_mut() {
                    *value /= norm;
                }
            }
            row
        })
        .collect()
}

/// Cosine similarity of two sparse vectors. Zero-magnitude inputs yield `0.0`.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(idx, x)| large.get(idx).map(|y| x * y))
        .sum();

    let norm_a = a.values().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.values().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Validate a requested recommendation count.
pub fn validate_limit(limit: usize) -> Result<(), CoreError> {
    if limit == 0 || limit > MAX_RECOMMENDATIONS_LIMIT {
        return Err(CoreError::Validation(format!(
            "Recommendation limit must be between 1 and {MAX_RECOMMENDATIONS_LIMIT}, got {limit}"
        )));
    }
    Ok(())
}

/// Rank every other document by similarity to `target_id`, keeping the top
/// `limit`. Ties are broken by ascending skill id.
///
/// Returns `CoreError::NotFound` if the target is not part of the corpus.
pub fn recommend_similar(
    target_id: DbId,
    corpus: &[SkillDocument],
    limit: usize,
) -> Result<Vec<ScoredSkill>, CoreError> {
    let target_idx = corpus
        .iter()
        .position(|doc| doc.skill_id == target_id)
        .ok_or(CoreError::NotFound {
            entity: "Skill",
            id: target_id,
        })?;

    let texts: Vec<&str> = corpus.iter().map(|doc| doc.text.as_str()).collect();
    let vectors = tfidf_vectors(&texts);
    let target = &vectors[target_idx];

    let mut scored: Vec<ScoredSkill> = corpus
        .iter()
        .zip(&vectors)
        .filter(|(doc, _)| doc.skill_id != target_id)
        .map(|(doc, vector)| ScoredSkill {
            skill_id: doc.skill_id,
            similarity: cosine_similarity(target, vector),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then(a.skill_id.cmp(&b.skill_id))
    });
    scored.truncate(limit);
    Ok(scored)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
