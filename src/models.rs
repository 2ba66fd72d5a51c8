use serde::Deserialize;

/// One of the nine evidence types from the catalog. `name` is the stable
/// identity; catalog order drives flashcard traversal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvidenceEntry {
    #[serde(rename = "type")]
    pub name: String,
    pub description: String,
    pub example: String,
}

/// Source data for a trivia question, before any per-session shuffling.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionTemplate {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// A template whose options have been shuffled for one session. Built once
/// at session start and never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct TriviaQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Flashcards,
    Trivia,
}
