//! Shared fixtures for unit tests

#![allow(dead_code)]

use txa::model::{
    AnalysisResult, PartsOfSpeech, Readability, TenseAnalysis, TextStats, WordFrequency,
};

pub const SAMPLE_TEXT: &str = "The cat sat on the mat. The mat was sat on by the cat.";

pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        text_stats: TextStats {
            word_count: 14,
            sentence_count: 2,
            avg_sentence_length: 7.0,
            avg_word_length: 2.6,
            character_count: 54,
        },
        readability: Readability {
            flesch_kincaid_grade: 0.5,
            reading_level: "Very Easy".into(),
            description: "Easily understood by an average 11-year-old student.".into(),
        },
        parts_of_speech: PartsOfSpeech {
            nouns: vec!["cat".into(), "mat".into()],
            verbs: vec!["sat".into(), "was".into()],
            prepositions: vec!["on".into(), "by".into()],
            ..Default::default()
        },
        passive_sentences: vec!["The mat was sat on by the cat.".into()],
        tense_analysis: TenseAnalysis {
            past: vec!["sat".into(), "was".into()],
            present: vec![],
            future: vec![],
        },
        word_frequency: vec![WordFrequency::new("the", 3), WordFrequency::new("cat", 1)],
    }
}

/// A result with `n` word-frequency entries and nothing else of note.
pub fn frequency_result(n: usize) -> AnalysisResult {
    let mut result = sample_result();
    result.word_frequency = (0..n)
        .map(|i| WordFrequency::new(format!("word{}", i), (n - i) as u32))
        .collect();
    result
}
