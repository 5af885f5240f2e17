//! Wire types exchanged with the analysis service.
//!
//! Field names follow the service's snake_case JSON. Optional collections
//! default to empty so that an omitted category behaves like an empty one.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Structured result of one analysis. Never mutated after it is received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text_stats: TextStats,
    pub readability: Readability,
    #[serde(default)]
    pub parts_of_speech: PartsOfSpeech,
    #[serde(default)]
    pub passive_sentences: Vec<String>,
    #[serde(default)]
    pub tense_analysis: TenseAnalysis,
    #[serde(default)]
    pub word_frequency: Vec<WordFrequency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: u64,
    pub sentence_count: u64,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub character_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    pub flesch_kincaid_grade: f64,
    pub reading_level: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenseAnalysis {
    #[serde(default)]
    pub past: Vec<String>,
    #[serde(default)]
    pub present: Vec<String>,
    #[serde(default)]
    pub future: Vec<String>,
}

impl TenseAnalysis {
    /// Words recorded for one tense.
    pub fn words(&self, tense: Tense) -> &[String] {
        match tense {
            Tense::Past => &self.past,
            Tense::Present => &self.present,
            Tense::Future => &self.future,
        }
    }
}

/// One entry of the top-words list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u32,
}

impl WordFrequency {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartsOfSpeech {
    #[serde(default)]
    pub nouns: Vec<String>,
    #[serde(default)]
    pub verbs: Vec<String>,
    #[serde(default)]
    pub adjectives: Vec<String>,
    #[serde(default)]
    pub adverbs: Vec<String>,
    #[serde(default)]
    pub pronouns: Vec<String>,
    #[serde(default)]
    pub prepositions: Vec<String>,
    #[serde(default)]
    pub conjunctions: Vec<String>,
}

impl PartsOfSpeech {
    /// Words tagged with one category.
    pub fn words(&self, category: PosCategory) -> &[String] {
        match category {
            PosCategory::Nouns => &self.nouns,
            PosCategory::Verbs => &self.verbs,
            PosCategory::Adjectives => &self.adjectives,
            PosCategory::Adverbs => &self.adverbs,
            PosCategory::Pronouns => &self.pronouns,
            PosCategory::Prepositions => &self.prepositions,
            PosCategory::Conjunctions => &self.conjunctions,
        }
    }

    /// Non-empty categories in their fixed order.
    pub fn present(&self) -> impl Iterator<Item = PosCategory> + '_ {
        PosCategory::ALL
            .into_iter()
            .filter(|category| !self.words(*category).is_empty())
    }
}

/// Verb tenses reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    Past,
    Present,
    Future,
}

impl Tense {
    pub const ALL: [Tense; 3] = [Tense::Past, Tense::Present, Tense::Future];

    pub fn name(&self) -> &'static str {
        match self {
            Tense::Past => "past",
            Tense::Present => "present",
            Tense::Future => "future",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tense::Past => "Past",
            Tense::Present => "Present",
            Tense::Future => "Future",
        }
    }
}

/// Part-of-speech categories, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosCategory {
    Nouns,
    Verbs,
    Adjectives,
    Adverbs,
    Pronouns,
    Prepositions,
    Conjunctions,
}

impl PosCategory {
    pub const ALL: [PosCategory; 7] = [
        PosCategory::Nouns,
        PosCategory::Verbs,
        PosCategory::Adjectives,
        PosCategory::Adverbs,
        PosCategory::Pronouns,
        PosCategory::Prepositions,
        PosCategory::Conjunctions,
    ];

    /// Lowercase key as used on the wire and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            PosCategory::Nouns => "nouns",
            PosCategory::Verbs => "verbs",
            PosCategory::Adjectives => "adjectives",
            PosCategory::Adverbs => "adverbs",
            PosCategory::Pronouns => "pronouns",
            PosCategory::Prepositions => "prepositions",
            PosCategory::Conjunctions => "conjunctions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PosCategory::Nouns => "Nouns",
            PosCategory::Verbs => "Verbs",
            PosCategory::Adjectives => "Adjectives",
            PosCategory::Adverbs => "Adverbs",
            PosCategory::Pronouns => "Pronouns",
            PosCategory::Prepositions => "Prepositions",
            PosCategory::Conjunctions => "Conjunctions",
        }
    }
}

/// Summarization strategies offered by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMethod {
    #[default]
    Smart,
    Lsa,
    LexRank,
    TextRank,
}

impl std::fmt::Display for SummaryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryMethod::Smart => write!(f, "smart"),
            SummaryMethod::Lsa => write!(f, "lsa"),
            SummaryMethod::LexRank => write!(f, "lexrank"),
            SummaryMethod::TextRank => write!(f, "textrank"),
        }
    }
}

impl std::str::FromStr for SummaryMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "smart" => Ok(SummaryMethod::Smart),
            "lsa" => Ok(SummaryMethod::Lsa),
            "lexrank" => Ok(SummaryMethod::LexRank),
            "textrank" => Ok(SummaryMethod::TextRank),
            other => Err(format!(
                "unknown summary method '{}' (expected smart, lsa, lexrank or textrank)",
                other
            )),
        }
    }
}

/// Smallest and largest `sentence_count` the service accepts.
pub const SUMMARY_SENTENCES_MIN: u8 = 1;
pub const SUMMARY_SENTENCES_MAX: u8 = 10;

/// Body of `POST /api/summarize/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub sentence_count: u8,
    pub method: SummaryMethod,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sentence_count: 3,
            method: SummaryMethod::default(),
        }
    }

    pub fn sentences(mut self, count: u8) -> Self {
        self.sentence_count = count;
        self
    }

    pub fn method(mut self, method: SummaryMethod) -> Self {
        self.method = method;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub original_word_count: u64,
    pub summary_word_count: u64,
    pub reduction_percentage: f64,
}
