//! Flat text renderings of an analysis result.
//!
//! Every function here is a pure function of its arguments. Two surfaces
//! exist: the clipboard/report surface and the on-screen surface. They only
//! differ in the placeholder used for an empty tense list ("None" versus
//! "No past tense verbs").

use std::fmt;

use crate::model::{AnalysisResult, PosCategory, Tense};

/// Placeholder for an empty tense list on the clipboard and in reports.
pub const EMPTY_TENSE_TEXT: &str = "None";

/// Placeholder for an empty passive sentence list.
pub const NO_PASSIVE_TEXT: &str = "No passive voice sentences detected.";

pub const INPUT_TEXT_TITLE: &str = "Input Text";
pub const STATISTICS_TITLE: &str = "Text Statistics";
pub const READABILITY_TITLE: &str = "Readability Score";
pub const TENSE_TITLE: &str = "Tense Analysis";
pub const PASSIVE_TITLE: &str = "Passive Voice Detection";
pub const WORD_FREQUENCY_TITLE: &str = "Word Frequency";
pub const PARTS_OF_SPEECH_TITLE: &str = "Parts of Speech";

/// A copyable slice of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Statistics,
    Readability,
    Tense(Tense),
    PassiveVoice,
    WordFrequency,
    PartOfSpeech(PosCategory),
}

impl Category {
    /// Every category in display order, empty parts of speech included.
    pub fn all() -> Vec<Category> {
        let mut categories = vec![Category::Statistics, Category::Readability];
        categories.extend(Tense::ALL.into_iter().map(Category::Tense));
        categories.push(Category::PassiveVoice);
        categories.push(Category::WordFrequency);
        categories.extend(PosCategory::ALL.into_iter().map(Category::PartOfSpeech));
        categories
    }

    /// Categories that have something to copy for this result.
    ///
    /// Empty parts-of-speech categories are left out entirely.
    pub fn available(result: &AnalysisResult) -> Vec<Category> {
        Category::all()
            .into_iter()
            .filter(|category| match category {
                Category::PartOfSpeech(pos) => !result.parts_of_speech.words(*pos).is_empty(),
                _ => true,
            })
            .collect()
    }

    /// Stable key, used on the command line.
    pub fn key(&self) -> String {
        match self {
            Category::Statistics => "stats".to_string(),
            Category::Readability => "readability".to_string(),
            Category::Tense(tense) => tense.name().to_string(),
            Category::PassiveVoice => "passive".to_string(),
            Category::WordFrequency => "frequency".to_string(),
            Category::PartOfSpeech(pos) => pos.name().to_string(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Category::Statistics => STATISTICS_TITLE.to_string(),
            Category::Readability => READABILITY_TITLE.to_string(),
            Category::Tense(tense) => format!("{} Tense", tense.label()),
            Category::PassiveVoice => PASSIVE_TITLE.to_string(),
            Category::WordFrequency => WORD_FREQUENCY_TITLE.to_string(),
            Category::PartOfSpeech(pos) => pos.label().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Category::all()
            .into_iter()
            .find(|category| category.key() == wanted)
            .ok_or_else(|| {
                let keys: Vec<String> = Category::all().iter().map(Category::key).collect();
                format!("unknown category '{}' (expected one of: {})", s, keys.join(", "))
            })
    }
}

/// Titled block of lines; the unit the report paginator lays out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

/// Text placed on the clipboard for one category.
///
/// Returns `None` only for an empty part-of-speech category.
pub fn clipboard_text(result: &AnalysisResult, category: Category) -> Option<String> {
    let text = match category {
        Category::Statistics => statistics_lines(result).join("\n"),
        Category::Readability => readability_lines(result).join("\n"),
        Category::Tense(tense) => tense_text(result, tense, EMPTY_TENSE_TEXT),
        Category::PassiveVoice => passive_lines(result).join("\n"),
        Category::WordFrequency => word_frequency_lines(result).join("\n"),
        Category::PartOfSpeech(pos) => return part_of_speech_text(result, pos),
    };
    Some(text)
}

/// Text shown on screen for one category.
pub fn display_text(result: &AnalysisResult, category: Category) -> Option<String> {
    match category {
        Category::Tense(tense) => {
            let empty = format!("No {} tense verbs", tense.name());
            Some(tense_text(result, tense, &empty))
        }
        other => clipboard_text(result, other),
    }
}

/// `label: value` lines for the text statistics.
pub fn statistics_lines(result: &AnalysisResult) -> Vec<String> {
    let stats = &result.text_stats;
    vec![
        format!("Words: {}", stats.word_count),
        format!("Sentences: {}", stats.sentence_count),
        format!("Avg Words/Sentence: {}", stats.avg_sentence_length),
        format!("Avg Word Length: {}", stats.avg_word_length),
        format!("Characters: {}", stats.character_count),
    ]
}

pub fn readability_lines(result: &AnalysisResult) -> Vec<String> {
    let readability = &result.readability;
    vec![
        format!("Flesch-Kincaid Grade: {}", readability.flesch_kincaid_grade),
        format!("Reading Level: {}", readability.reading_level),
        format!("Description: {}", readability.description),
    ]
}

fn tense_text(result: &AnalysisResult, tense: Tense, empty: &str) -> String {
    let words = result.tense_analysis.words(tense);
    if words.is_empty() {
        empty.to_string()
    } else {
        words.join(", ")
    }
}

/// One line per passive sentence, or the single placeholder line.
pub fn passive_lines(result: &AnalysisResult) -> Vec<String> {
    if result.passive_sentences.is_empty() {
        vec![NO_PASSIVE_TEXT.to_string()]
    } else {
        result.passive_sentences.clone()
    }
}

pub fn word_frequency_lines(result: &AnalysisResult) -> Vec<String> {
    result
        .word_frequency
        .iter()
        .map(|entry| format!("{}: {}", entry.word, entry.count))
        .collect()
}

fn part_of_speech_text(result: &AnalysisResult, pos: PosCategory) -> Option<String> {
    let words = result.parts_of_speech.words(pos);
    if words.is_empty() {
        None
    } else {
        Some(words.join(", "))
    }
}

/// Report sections in their fixed order.
///
/// `input_text` is carried verbatim as the first section.
pub fn sections(result: &AnalysisResult, input_text: &str) -> Vec<Section> {
    let mut sections = vec![
        Section::new(INPUT_TEXT_TITLE, vec![input_text.to_string()]),
        Section::new(STATISTICS_TITLE, statistics_lines(result)),
        Section::new(READABILITY_TITLE, readability_lines(result)),
        Section::new(
            TENSE_TITLE,
            Tense::ALL
                .into_iter()
                .map(|tense| {
                    format!(
                        "{}: {}",
                        tense.label(),
                        tense_text(result, tense, EMPTY_TENSE_TEXT)
                    )
                })
                .collect(),
        ),
        Section::new(PASSIVE_TITLE, passive_lines(result)),
        Section::new(WORD_FREQUENCY_TITLE, word_frequency_lines(result)),
    ];

    for pos in result.parts_of_speech.present() {
        if let Some(text) = part_of_speech_text(result, pos) {
            sections.push(Section::new(
                format!("{} - {}", PARTS_OF_SPEECH_TITLE, pos.label()),
                vec![text],
            ));
        }
    }

    sections
}
