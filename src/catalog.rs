use crate::models::{EvidenceEntry, QuestionTemplate};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

pub const CATALOG_SIZE: usize = 9;
pub const OPTION_COUNT: usize = 4;

pub const TEXTBOOK_URL: &str =
    "https://openstax.org/books/introduction-philosophy/pages/1-introduction";
pub const CITATION: &str = "Smith, Nathan. Introduction to Philosophy. OpenStax, 2022.";

const CATALOG_JSON: &str = include_str!("catalog.json");

/// Malformed static content. Fatal at startup; nothing after a successful
/// load can produce this except a restart with the same (already validated)
/// templates.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("catalog is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expected {expected} {record} records, found {found}")]
    WrongCount {
        record: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("duplicate evidence type {0:?}")]
    DuplicateType(String),
    #[error("question {index} has {found} options, expected 4")]
    WrongOptionCount { index: usize, found: usize },
    #[error("question {index}: correct answer {answer:?} is not one of its options")]
    AnswerNotInOptions { index: usize, answer: String },
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(rename = "evidenceTypes")]
    evidence_types: Vec<EvidenceEntry>,
    questions: Vec<QuestionTemplate>,
}

/// The fixed study content: nine evidence types and nine question templates,
/// embedded at compile time and validated once at process start.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    pub entries: Vec<EvidenceEntry>,
    pub questions: Vec<QuestionTemplate>,
}

impl ContentCatalog {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(CATALOG_JSON)
    }

    fn from_json(json: &str) -> Result<Self, ContentError> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        if raw.evidence_types.len() != CATALOG_SIZE {
            return Err(ContentError::WrongCount {
                record: "evidence type",
                expected: CATALOG_SIZE,
                found: raw.evidence_types.len(),
            });
        }
        if raw.questions.len() != CATALOG_SIZE {
            return Err(ContentError::WrongCount {
                record: "question",
                expected: CATALOG_SIZE,
                found: raw.questions.len(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &raw.evidence_types {
            if !seen.insert(entry.name.as_str()) {
                return Err(ContentError::DuplicateType(entry.name.clone()));
            }
        }

        validate_templates(&raw.questions)?;

        Ok(Self {
            entries: raw.evidence_types,
            questions: raw.questions,
        })
    }
}

/// Checks every template has exactly four options including its correct
/// answer. Also run by session start, so a session can never be built from
/// templates that would make an unanswerable question.
pub fn validate_templates(templates: &[QuestionTemplate]) -> Result<(), ContentError> {
    for (index, template) in templates.iter().enumerate() {
        if template.options.len() != OPTION_COUNT {
            return Err(ContentError::WrongOptionCount {
                index,
                found: template.options.len(),
            });
        }
        if !template.options.contains(&template.correct_answer) {
            return Err(ContentError::AnswerNotInOptions {
                index,
                answer: template.correct_answer.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = ContentCatalog::load().unwrap();
        assert_eq!(catalog.entries.len(), CATALOG_SIZE);
        assert_eq!(catalog.questions.len(), CATALOG_SIZE);
    }

    #[test]
    fn test_embedded_catalog_types_are_unique() {
        let catalog = ContentCatalog::load().unwrap();
        let names: HashSet<&str> = catalog.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), CATALOG_SIZE);
    }

    #[test]
    fn test_embedded_catalog_answers_are_options() {
        let catalog = ContentCatalog::load().unwrap();
        for question in &catalog.questions {
            assert_eq!(question.options.len(), OPTION_COUNT);
            assert!(question.options.contains(&question.correct_answer));
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let result = ContentCatalog::from_json("{ not json");
        assert!(matches!(result, Err(ContentError::Malformed(_))));
    }

    #[test]
    fn test_wrong_entry_count_is_rejected() {
        let json = r#"{
            "evidenceTypes": [{"type":"History","description":"d","example":"e"}],
            "questions": []
        }"#;
        let result = ContentCatalog::from_json(json);
        assert!(matches!(
            result,
            Err(ContentError::WrongCount {
                record: "evidence type",
                expected: 9,
                found: 1
            })
        ));
    }

    fn template(options: &[&str], correct: &str) -> QuestionTemplate {
        QuestionTemplate {
            prompt: "Which?".to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    #[test]
    fn test_three_options_rejected() {
        let templates = vec![template(&["A", "B", "C"], "A")];
        let result = validate_templates(&templates);
        assert!(matches!(
            result,
            Err(ContentError::WrongOptionCount { index: 0, found: 3 })
        ));
    }

    #[test]
    fn test_five_options_rejected() {
        let templates = vec![template(&["A", "B", "C", "D", "E"], "A")];
        let result = validate_templates(&templates);
        assert!(matches!(
            result,
            Err(ContentError::WrongOptionCount { index: 0, found: 5 })
        ));
    }

    #[test]
    fn test_answer_missing_from_options_rejected() {
        let templates = vec![
            template(&["A", "B", "C", "D"], "A"),
            template(&["A", "B", "C", "D"], "E"),
        ];
        let result = validate_templates(&templates);
        assert!(matches!(
            result,
            Err(ContentError::AnswerNotInOptions { index: 1, .. })
        ));
    }

    #[test]
    fn test_valid_templates_pass() {
        let templates = vec![template(&["A", "B", "C", "D"], "C")];
        assert!(validate_templates(&templates).is_ok());
    }
}
