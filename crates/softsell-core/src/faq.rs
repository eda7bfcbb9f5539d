//! FAQ Matching
//!
//! Maps free-form visitor questions to canned answers.
//!
//! ## Matching rules
//!
//! 1. The question is lowercased and trimmed.
//! 2. An exact match on a pattern key wins outright.
//! 3. Otherwise the first key (in declaration order) contained in the
//!    question wins.
//! 4. Otherwise the fallback answer is returned.
//!
//! ```rust
//! use softsell_core::faq::{FaqMatcher, MatchKind};
//!
//! let matcher = FaqMatcher::default();
//! let (kind, _answer) = matcher.lookup("IS THIS LEGAL");
//! assert_eq!(kind, MatchKind::Exact(4));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SoftSellError};

/// Answer given when nothing in the table matches
pub const DEFAULT_FALLBACK: &str = "I don't have specific information about that. For the fastest assistance, please fill out our contact form and our team will get back to you shortly. You can also try asking about how to sell licenses, pricing, or our process.";

/// The stock SoftSell corpus, in match-priority order
pub const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    (
        "how do i sell my license",
        "To sell your license, click on the 'Sell My Licenses' button at the top of our website, upload your license details, and our team will provide you with a valuation within 24 hours.",
    ),
    (
        "how much can i get for my license",
        "The value of your license depends on several factors including the software type, remaining license duration, and current market demand. We typically offer 30-70% of the original price for unused licenses.",
    ),
    (
        "how long does the process take",
        "Our process is quick - you'll receive a valuation within 24 hours of submission and payment within 3 business days after accepting our offer.",
    ),
    (
        "what types of licenses do you buy",
        "We purchase licenses for major software providers including Microsoft, Adobe, Oracle, SAP, Autodesk, and many others. Contact us for specific information about your license.",
    ),
    (
        "is this legal",
        "Yes, our process is 100% legal. We ensure all transfers comply with the license agreements and relevant laws governing software license transfers.",
    ),
];

/// Lowercase and trim, the form both questions and keys are compared in
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// A single question/answer pair
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Normalized question key
    pub pattern: String,

    /// Response text
    pub answer: String,
}

impl FaqEntry {
    pub fn new(pattern: impl AsRef<str>, answer: impl Into<String>) -> Self {
        Self {
            pattern: normalize(pattern.as_ref()),
            answer: answer.into(),
        }
    }
}

/// Immutable, ordered FAQ corpus
#[derive(Clone, Debug)]
pub struct FaqTable {
    entries: Vec<FaqEntry>,
    exact: HashMap<String, usize>,
}

impl FaqTable {
    /// Build a table, normalizing every pattern
    ///
    /// Rejects empty patterns (they would match every question) and
    /// patterns that collide after normalization.
    pub fn new(entries: impl IntoIterator<Item = FaqEntry>) -> Result<Self> {
        let mut table = Self {
            entries: Vec::new(),
            exact: HashMap::new(),
        };

        for entry in entries {
            let entry = FaqEntry::new(&entry.pattern, entry.answer);
            if entry.pattern.is_empty() {
                return Err(SoftSellError::Config("FAQ pattern must not be empty".into()));
            }
            if table.exact.contains_key(&entry.pattern) {
                return Err(SoftSellError::Config(format!(
                    "Duplicate FAQ pattern: {:?}",
                    entry.pattern
                )));
            }
            table.exact.insert(entry.pattern.clone(), table.entries.len());
            table.entries.push(entry);
        }

        Ok(table)
    }

    /// Load a table from a JSON array of `{ "pattern", "answer" }` objects
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<FaqEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn exact(&self, normalized: &str) -> Option<usize> {
        self.exact.get(normalized).copied()
    }

    fn first_contained(&self, normalized: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| normalized.contains(entry.pattern.as_str()))
    }
}

impl Default for FaqTable {
    fn default() -> Self {
        // The stock corpus is known to be non-empty and collision-free
        let entries: Vec<FaqEntry> = DEFAULT_ENTRIES
            .iter()
            .map(|(pattern, answer)| FaqEntry::new(pattern, *answer))
            .collect();
        let exact = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.pattern.clone(), index))
            .collect();

        Self { entries, exact }
    }
}

/// Which rule produced an answer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "entry", rename_all = "snake_case")]
pub enum MatchKind {
    /// Question equals the key at this index
    Exact(usize),
    /// Question contains the key at this index
    Substring(usize),
    Fallback,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(i) => write!(f, "exact[{i}]"),
            Self::Substring(i) => write!(f, "substring[{i}]"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Response provider seam
///
/// The chat session asks its responder for every reply, so a host can
/// swap the scripted FAQ for any other source without touching the
/// session logic.
pub trait Responder: Send + Sync {
    /// Produce a reply; must never fail
    fn respond(&self, question: &str) -> String;

    /// Human-readable name for logs
    fn name(&self) -> &str {
        "responder"
    }
}

/// Exact-then-substring matcher over a [`FaqTable`]
#[derive(Clone, Debug)]
pub struct FaqMatcher {
    table: FaqTable,
    fallback: String,
}

impl FaqMatcher {
    pub fn new(table: FaqTable, fallback: impl Into<String>) -> Self {
        Self {
            table,
            fallback: fallback.into(),
        }
    }

    pub fn with_table(table: FaqTable) -> Self {
        Self::new(table, DEFAULT_FALLBACK)
    }

    pub fn table(&self) -> &FaqTable {
        &self.table
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Resolve a question, reporting which rule answered
    pub fn lookup(&self, question: &str) -> (MatchKind, &str) {
        let normalized = normalize(question);

        let kind = if let Some(index) = self.table.exact(&normalized) {
            MatchKind::Exact(index)
        } else if let Some(index) = self.table.first_contained(&normalized) {
            MatchKind::Substring(index)
        } else {
            MatchKind::Fallback
        };

        let answer = match kind {
            MatchKind::Exact(index) | MatchKind::Substring(index) => {
                self.table.entries[index].answer.as_str()
            }
            MatchKind::Fallback => self.fallback.as_str(),
        };

        tracing::debug!(match_kind = %kind, question = %normalized, "FAQ lookup");
        (kind, answer)
    }
}

impl Default for FaqMatcher {
    fn default() -> Self {
        Self::with_table(FaqTable::default())
    }
}

impl Responder for FaqMatcher {
    fn respond(&self, question: &str) -> String {
        self.lookup(question).1.to_string()
    }

    fn name(&self) -> &str {
        "faq"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(index: usize) -> &'static str {
        DEFAULT_ENTRIES[index].1
    }

    #[test]
    fn test_exact_match_every_key() {
        let matcher = FaqMatcher::default();
        for (index, (pattern, expected)) in DEFAULT_ENTRIES.iter().enumerate() {
            let (kind, got) = matcher.lookup(pattern);
            assert_eq!(kind, MatchKind::Exact(index));
            assert_eq!(got, *expected);
        }
    }

    #[test]
    fn test_sell_question_with_punctuation() {
        let reply = FaqMatcher::default().respond("How do I sell my license?");
        assert!(reply.contains("Sell My Licenses"));
    }

    #[test]
    fn test_case_insensitive_exact() {
        let matcher = FaqMatcher::default();
        let (kind, reply) = matcher.lookup("  IS THIS LEGAL  ");
        assert_eq!(kind, MatchKind::Exact(4));
        assert_eq!(reply, answer(4));
    }

    #[test]
    fn test_substring_match() {
        let matcher = FaqMatcher::default();
        let (kind, reply) = matcher.lookup("tell me how much can i get for my license please");
        assert_eq!(kind, MatchKind::Substring(1));
        assert_eq!(reply, answer(1));
    }

    #[test]
    fn test_fallback() {
        let matcher = FaqMatcher::default();
        assert_eq!(matcher.lookup("what's the weather"), (MatchKind::Fallback, DEFAULT_FALLBACK));
        assert_eq!(matcher.respond(""), DEFAULT_FALLBACK);
        assert_eq!(matcher.respond("   "), DEFAULT_FALLBACK);
    }

    #[test]
    fn test_first_declared_substring_wins() {
        let matcher = FaqMatcher::default();
        // Contains both "is this legal" (index 4) and "how do i sell my license" (index 0)
        let (kind, _) = matcher.lookup("is this legal? how do i sell my license");
        assert_eq!(kind, MatchKind::Substring(0));
    }

    #[test]
    fn test_exact_beats_earlier_substring() {
        let table = FaqTable::new([
            FaqEntry::new("price", "short"),
            FaqEntry::new("what is the price", "long"),
        ])
        .unwrap();
        let matcher = FaqMatcher::with_table(table);

        assert_eq!(matcher.lookup("What is the price"), (MatchKind::Exact(1), "long"));
        assert_eq!(matcher.lookup("what is the price today"), (MatchKind::Substring(0), "short"));
    }

    #[test]
    fn test_respond_is_deterministic() {
        let matcher = FaqMatcher::default();
        for question in ["how long does the process take?", "hello", "IS THIS LEGAL"] {
            assert_eq!(matcher.respond(question), matcher.respond(question));
        }
    }

    #[test]
    fn test_table_normalizes_patterns() {
        let table = FaqTable::new([FaqEntry {
            pattern: "  Refund Policy ".into(),
            answer: "No refunds.".into(),
        }])
        .unwrap();
        assert_eq!(table.entries()[0].pattern, "refund policy");

        let matcher = FaqMatcher::new(table, "ask us");
        assert_eq!(matcher.respond("what is your REFUND POLICY?"), "No refunds.");
        assert_eq!(matcher.respond("hi"), "ask us");
    }

    #[test]
    fn test_table_rejects_empty_pattern() {
        let result = FaqTable::new([FaqEntry::new("   ", "everything")]);
        assert!(matches!(result, Err(SoftSellError::Config(_))));
    }

    #[test]
    fn test_table_rejects_duplicates() {
        let result = FaqTable::new([FaqEntry::new("Hours", "a"), FaqEntry::new("hours ", "b")]);
        assert!(matches!(result, Err(SoftSellError::Config(_))));
    }

    #[test]
    fn test_table_from_json() {
        let table = FaqTable::from_json(
            r#"[{"pattern": "Do you buy Adobe?", "answer": "Yes."}]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(FaqMatcher::with_table(table).respond("do you buy adobe?"), "Yes.");

        assert!(matches!(FaqTable::from_json("{}"), Err(SoftSellError::Json(_))));
    }

    #[test]
    fn test_default_table_matches_constant() {
        let table = FaqTable::default();
        assert_eq!(table.len(), DEFAULT_ENTRIES.len());
        let rebuilt = FaqTable::new(
            DEFAULT_ENTRIES.iter().map(|(p, a)| FaqEntry::new(p, *a)),
        )
        .unwrap();
        assert_eq!(rebuilt.entries(), table.entries());
    }
}
