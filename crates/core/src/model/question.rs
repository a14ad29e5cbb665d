use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must have at least one choice")]
    NoChoices,

    #[error("choice {index} is blank")]
    BlankChoice { index: usize },

    #[error("duplicate choice {text:?}")]
    DuplicateChoice { text: String },

    #[error("answer index {index} is out of range for {len} choices")]
    AnswerOutOfRange { index: usize, len: usize },

    #[error("answer {text:?} does not match any choice")]
    AnswerNotFound { text: String },
}

//
// ─── ANSWER KEY ────────────────────────────────────────────────────────────────
//

/// Correct-answer indicator as it appears in a deck file: either a zero-based
/// index into the choice list or the literal text of one choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Index(usize),
    Text(String),
}

impl AnswerKey {
    /// Resolve this key to a canonical index into `choices`.
    ///
    /// Text keys match a choice exactly (no trimming or case folding), the
    /// same way the selected button text is compared during a quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::AnswerOutOfRange` or
    /// `QuestionError::AnswerNotFound` when the key matches no choice.
    pub fn resolve(&self, choices: &[String]) -> Result<usize, QuestionError> {
        match self {
            AnswerKey::Index(index) => {
                if *index < choices.len() {
                    Ok(*index)
                } else {
                    Err(QuestionError::AnswerOutOfRange {
                        index: *index,
                        len: choices.len(),
                    })
                }
            }
            AnswerKey::Text(text) => choices
                .iter()
                .position(|choice| choice == text)
                .ok_or_else(|| QuestionError::AnswerNotFound { text: text.clone() }),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question data as read from a deck file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer: AnswerKey,
    pub explanation: Option<String>,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(prompt: impl Into<String>, choices: Vec<String>, answer: AnswerKey) -> Self {
        Self {
            prompt: prompt.into(),
            choices,
            answer,
            explanation: None,
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Validate the draft into a `Question`.
    ///
    /// Text is stored exactly as provided; validation only rejects, it never
    /// rewrites, so a loaded deck reads back byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns a `QuestionError` when the prompt is blank, the choice list is
    /// empty, a choice is blank or duplicated, or the answer key matches no
    /// choice.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.choices.is_empty() {
            return Err(QuestionError::NoChoices);
        }

        let mut seen = HashSet::new();
        for (index, choice) in self.choices.iter().enumerate() {
            if choice.trim().is_empty() {
                return Err(QuestionError::BlankChoice { index });
            }
            if !seen.insert(choice.as_str()) {
                return Err(QuestionError::DuplicateChoice {
                    text: choice.clone(),
                });
            }
        }

        let correct = self.answer.resolve(&self.choices)?;

        Ok(Question {
            prompt: self.prompt,
            choices: self.choices,
            correct,
            explanation: self.explanation,
        })
    }
}

/// A validated multiple-choice question.
///
/// `correct` is a canonical index into `choices`; randomized display orders
/// are a per-session concern and never touch this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    correct: usize,
    explanation: Option<String>,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    /// Canonical index of the correct choice.
    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        &self.choices[self.correct]
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
