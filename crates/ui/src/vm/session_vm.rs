use std::sync::Arc;

use quiz_core::model::Deck;
use services::{AnswerOutcome, QuizSession};

const NO_EXPLANATION: &str = "No explanation provided.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Question,
    Feedback,
    Results,
}

/// Everything the quiz screen needs to render the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    /// Choice texts in the session's display order.
    pub choices: Vec<String>,
    pub score_label: String,
    /// Present from the second round (redo runs) onward.
    pub round_label: Option<String>,
}

/// Feedback screen data for the answer just submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub verdict: &'static str,
    pub selected: String,
    /// The correct choice text, present only when the answer was wrong.
    pub correct: Option<String>,
    pub explanation: String,
}

/// Results screen data for a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub can_redo: bool,
    pub redo_label: String,
}

/// Presentation state over one `QuizSession`.
///
/// The session stays the single source of truth; this type only adds the
/// screen phase (question → feedback → next question, results at the end)
/// and formats what the views show. Sequencing errors cannot happen through
/// this surface: each phase exposes exactly the operations that are legal in
/// it, and anything else is ignored.
pub struct SessionVm {
    session: QuizSession,
    last: Option<AnswerOutcome>,
    round: u32,
}

impl SessionVm {
    #[must_use]
    pub fn start(deck: Arc<Deck>) -> Self {
        Self {
            session: QuizSession::new(deck),
            last: None,
            round: 1,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.session.is_complete() {
            SessionPhase::Results
        } else if self.last.is_some() {
            SessionPhase::Feedback
        } else {
            SessionPhase::Question
        }
    }

    #[must_use]
    pub fn deck_name(&self) -> &str {
        self.session.deck().name()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    fn score_label(&self) -> String {
        format!("Score: {}/{}", self.session.score(), self.session.total())
    }

    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        if self.phase() != SessionPhase::Question {
            return None;
        }
        let current = self.session.current().ok()?;
        Some(QuestionVm {
            prompt: current.prompt().to_owned(),
            choices: current.choices().iter().map(ToString::to_string).collect(),
            score_label: self.score_label(),
            round_label: (self.round > 1).then(|| format!("Round {}", self.round)),
        })
    }

    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        if self.phase() != SessionPhase::Feedback {
            return None;
        }
        let outcome = self.last?;
        let current = self.session.current().ok()?;
        Some(FeedbackVm {
            is_correct: outcome.correct,
            verdict: if outcome.correct { "Correct!" } else { "Incorrect" },
            selected: current.choice(outcome.selected).unwrap_or_default().to_owned(),
            correct: (!outcome.correct).then(|| current.correct_text().to_owned()),
            explanation: current.explanation().unwrap_or(NO_EXPLANATION).to_owned(),
        })
    }

    #[must_use]
    pub fn results(&self) -> Option<ResultsVm> {
        let result = self.session.result().ok()?;
        let missed = self.session.missed().len();
        Some(ResultsVm {
            score_label: format!("Score: {result}"),
            can_redo: missed > 0,
            redo_label: format!("Redo Wrong Answers ({missed})"),
        })
    }

    /// Submit the choice at a display position. Ignored outside the
    /// question phase, so a stale click can never double-count.
    pub fn choose(&mut self, display_position: usize) {
        if self.phase() != SessionPhase::Question {
            return;
        }
        if let Ok(outcome) = self.session.submit_answer(display_position) {
            self.last = Some(outcome);
        }
    }

    /// Leave the feedback screen for the next question (or the results).
    pub fn next(&mut self) {
        if self.phase() != SessionPhase::Feedback {
            return;
        }
        self.session.advance();
        self.last = None;
    }

    /// Start a redo run over the missed questions, when there are any.
    pub fn redo(&mut self) {
        if let Some(next) = self.session.redo_missed() {
            self.session = next;
            self.last = None;
            self.round += 1;
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
