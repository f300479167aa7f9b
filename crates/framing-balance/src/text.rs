//! Text cleaning and tokenization for the length filter.
//!
//! This is quality-filter plumbing, not the analysis tokenizer: the token
//! counts produced here decide which articles survive the minimum-length
//! cut, nothing more.

use std::collections::HashSet;
use std::sync::LazyLock;

use framing_core::ArticleRecord;
use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bhttps?://\S+|\bwww\.\S+").expect("valid regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^\w\s.,!?'"-]"#).expect("valid regex"));
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// English stopwords excluded from token counts.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "isn't", "it", "its", "itself", "just",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "should", "shouldn't", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "were",
    "weren't", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "won't", "would", "wouldn't", "you", "your", "yours", "yourself", "yourselves",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Clean and normalize article text.
///
/// Strips URLs and HTML tags, replaces special characters (keeping basic
/// punctuation) with spaces, and collapses whitespace.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = TAG_RE.replace_all(&text, "");
    let text = NOISE_RE.replace_all(&text, " ");
    WS_RE.replace_all(&text, " ").trim().to_string()
}

/// Tokenize cleaned text for counting.
///
/// Lowercases, keeps purely alphabetic tokens longer than two characters,
/// and drops English stopwords.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase()
        })
        .filter(|token| {
            token.len() > 2
                && token.chars().all(char::is_alphabetic)
                && !STOPWORD_SET.contains(token.as_str())
        })
        .collect()
}

/// Fill `clean_text` and `token_count` on every record.
#[must_use]
pub fn preprocess(records: Vec<ArticleRecord>) -> Vec<ArticleRecord> {
    records
        .into_iter()
        .map(|mut record| {
            record.clean_text = clean_text(&record.body_text);
            record.token_count = i64::try_from(tokenize(&record.clean_text).len()).unwrap_or(0);
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use framing_core::SourceCategory;

    use super::*;

    #[test]
    fn clean_text_strips_urls() {
        let cleaned = clean_text("Read more at https://example.com/story and www.example.org now");
        assert_eq!(cleaned, "Read more at and now");
    }

    #[test]
    fn clean_text_strips_html_tags() {
        let cleaned = clean_text("<p>Tibet <b>policy</b> update</p>");
        assert_eq!(cleaned, "Tibet policy update");
    }

    #[test]
    fn clean_text_keeps_basic_punctuation() {
        let cleaned = clean_text("Officials said: \"progress, not promises!\" — again");
        assert!(cleaned.contains('"'));
        assert!(cleaned.contains(','));
        assert!(cleaned.contains('!'));
        assert!(!cleaned.contains('—'));
    }

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  a \t b \n c  "), "a b c");
    }

    #[test]
    fn tokenize_drops_stopwords_and_short_tokens() {
        let tokens = tokenize("The monastery in the mountains is an old site");
        assert_eq!(tokens, vec!["monastery", "mountains", "old", "site"]);
    }

    #[test]
    fn tokenize_lowercases_and_strips_punctuation() {
        let tokens = tokenize("Lhasa, Tibet!");
        assert_eq!(tokens, vec!["lhasa", "tibet"]);
    }

    #[test]
    fn tokenize_drops_numeric_tokens() {
        let tokens = tokenize("population reached 3650 meters altitude");
        assert_eq!(tokens, vec!["population", "reached", "meters", "altitude"]);
    }

    #[test]
    fn tokenize_empty_text() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn preprocess_sets_clean_text_and_token_count() {
        let record = ArticleRecord {
            url: "https://example.com/a".to_string(),
            source: "Example".to_string(),
            category: SourceCategory::WesternMedia,
            year: 2020,
            headline: "Headline".to_string(),
            body_text: "<p>Monks gathered near the ancient monastery walls today</p>".to_string(),
            clean_text: String::new(),
            token_count: 0,
            publication_date: None,
        };
        let processed = preprocess(vec![record]);
        assert_eq!(
            processed[0].clean_text,
            "Monks gathered near the ancient monastery walls today"
        );
        // monks, gathered, near, ancient, monastery, walls, today
        assert_eq!(processed[0].token_count, 7);
    }
}
