use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use quiz_core::model::{Deck, Question};

use super::plan::{PresentedQuestion, shuffled_plan};
use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// Outcome of submitting one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Display position the user selected.
    pub selected: usize,
    /// Display position the correct choice landed on.
    pub correct_position: usize,
}

/// Final score of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    pub score: usize,
    pub total: usize,
}

impl SessionResult {
    /// Score as a whole percentage. An empty run counts as a full score so
    /// formatting never divides by zero.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        let ratio = self.score as f64 / self.total as f64;
        (ratio * 100.0).round() as u32
    }
}

impl fmt::Display for SessionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

//
// ─── CURRENT QUESTION ──────────────────────────────────────────────────────────
//

/// The question at the session cursor, in its session-specific display order.
#[derive(Debug, Clone, Copy)]
pub struct CurrentQuestion<'a> {
    question: &'a Question,
    presented: &'a PresentedQuestion,
    answered: bool,
}

impl<'a> CurrentQuestion<'a> {
    #[must_use]
    pub fn prompt(&self) -> &'a str {
        self.question.prompt()
    }

    /// Choice texts in display order.
    #[must_use]
    pub fn choices(&self) -> Vec<&'a str> {
        self.presented
            .choice_order()
            .iter()
            .filter_map(|&index| self.question.choice(index))
            .collect()
    }

    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.presented.choice_order().len()
    }

    /// Choice text at a display position.
    #[must_use]
    pub fn choice(&self, display_position: usize) -> Option<&'a str> {
        let index = *self.presented.choice_order().get(display_position)?;
        self.question.choice(index)
    }

    /// Display position of the correct choice.
    #[must_use]
    pub fn correct_position(&self) -> usize {
        self.presented.correct_position()
    }

    #[must_use]
    pub fn correct_text(&self) -> &'a str {
        self.question.correct_text()
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&'a str> {
        self.question.explanation()
    }

    /// Whether the answer for this position was already submitted.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// One run through a deck (or through the missed subset of a prior run).
///
/// The session is the single source of truth for quiz state: the randomized
/// question order, per-question choice orders, the cursor, the score, and
/// the missed set. The UI observes and drives it but never stores quiz state
/// of its own.
pub struct QuizSession {
    deck: Arc<Deck>,
    order: Vec<PresentedQuestion>,
    position: usize,
    score: usize,
    missed: BTreeSet<usize>,
    answered: bool,
}

impl QuizSession {
    /// Start a session covering the whole deck in a fresh random order.
    ///
    /// An empty deck yields a session that is complete before it starts.
    #[must_use]
    pub fn new(deck: Arc<Deck>) -> Self {
        let indices: Vec<usize> = (0..deck.len()).collect();
        Self::over_indices(deck, &indices)
    }

    fn over_indices(deck: Arc<Deck>, indices: &[usize]) -> Self {
        let order = shuffled_plan(&deck, indices, &mut rand::rng());
        Self {
            deck,
            order,
            position: 0,
            score: 0,
            missed: BTreeSet::new(),
            answered: false,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Number of questions in this run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Deck indices answered incorrectly so far.
    #[must_use]
    pub fn missed(&self) -> &BTreeSet<usize> {
        &self.missed
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.position >= self.order.len()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let answered = self.position + usize::from(self.answered);
        SessionProgress {
            total: self.total(),
            answered,
            remaining: self.total().saturating_sub(answered),
            is_complete: self.is_complete(),
        }
    }

    /// The question at the cursor with its display-ordered choices.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Complete` once the session is terminal.
    pub fn current(&self) -> Result<CurrentQuestion<'_>, SessionError> {
        let presented = self.order.get(self.position).ok_or(SessionError::Complete)?;
        let question = self
            .deck
            .question(presented.question_index())
            .ok_or(SessionError::Complete)?;
        Ok(CurrentQuestion {
            question,
            presented,
            answered: self.answered,
        })
    }

    /// Submit the answer for the current question.
    ///
    /// A correct answer bumps the score; a wrong one records the deck index
    /// in the missed set. Each position accepts exactly one submission; the
    /// cursor only moves on `advance`.
    ///
    /// # Errors
    ///
    /// `Complete` once terminal, `AlreadyAnswered` on a second submission at
    /// the same position, `InvalidChoice` when `selected` is not a display
    /// position of the current question.
    pub fn submit_answer(&mut self, selected: usize) -> Result<AnswerOutcome, SessionError> {
        if self.answered {
            return Err(SessionError::AlreadyAnswered);
        }
        let current = self.current()?;
        let choices = current.choice_count();
        if selected >= choices {
            return Err(SessionError::InvalidChoice { selected, choices });
        }

        let correct_position = current.correct_position();
        let question_index = self.order[self.position].question_index();
        let correct = selected == correct_position;

        self.answered = true;
        if correct {
            self.score += 1;
        } else {
            self.missed.insert(question_index);
        }

        Ok(AnswerOutcome {
            correct,
            selected,
            correct_position,
        })
    }

    /// Move the cursor to the next question and re-arm the answer guard.
    ///
    /// Has no effect once the session is terminal.
    pub fn advance(&mut self) {
        if self.is_complete() {
            return;
        }
        self.position += 1;
        self.answered = false;
    }

    /// Start a fresh session over the questions missed in this one.
    ///
    /// Only available once the session is complete and something was missed;
    /// `None` means there is nothing to redo. The new session gets fresh
    /// question-order and choice-order permutations and an empty
    /// score/missed.
    #[must_use]
    pub fn redo_missed(&self) -> Option<QuizSession> {
        if !self.is_complete() || self.missed.is_empty() {
            return None;
        }
        let indices: Vec<usize> = self.missed.iter().copied().collect();
        Some(Self::over_indices(Arc::clone(&self.deck), &indices))
    }

    /// Final score, available once the session is complete.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain.
    pub fn result(&self) -> Result<SessionResult, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }
        Ok(SessionResult {
            score: self.score,
            total: self.total(),
        })
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("deck", &self.deck.name())
            .field("total", &self.order.len())
            .field("position", &self.position)
            .field("score", &self.score)
            .field("missed", &self.missed.len())
            .field("answered", &self.answered)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    use quiz_core::model::{AnswerKey, QuestionDraft};

    fn capitals_deck() -> Arc<Deck> {
        let q1 = QuestionDraft::new(
            "Capital of France?",
            vec!["Paris".into(), "Rome".into(), "Berlin".into()],
            AnswerKey::Text("Paris".into()),
        )
        .validate()
        .unwrap();
        let q2 = QuestionDraft::new(
            "Red planet?",
            vec!["Mars".into(), "Venus".into()],
            AnswerKey::Text("Mars".into()),
        )
        .validate()
        .unwrap();
        Arc::new(Deck::new("Mixed", vec![q1, q2]).unwrap())
    }

    fn wrong_position(current: &CurrentQuestion<'_>) -> usize {
        (0..current.choice_count())
            .find(|&position| position != current.correct_position())
            .expect("every test question has at least two choices")
    }

    #[test]
    fn one_right_one_wrong_scores_and_records_missed() {
        let deck = capitals_deck();
        let mut session = QuizSession::new(Arc::clone(&deck));
        assert_eq!(session.total(), 2);

        // Answer whichever question comes first correctly, the other wrong,
        // so the outcome is independent of the shuffled order.
        let first = session.current().unwrap();
        let outcome = session.submit_answer(first.correct_position()).unwrap();
        assert!(outcome.correct);
        session.advance();

        let second = session.current().unwrap();
        let missed_prompt = second.prompt().to_owned();
        let expected_correct = second.correct_position();
        let wrong = wrong_position(&second);
        let outcome = session.submit_answer(wrong).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_position, expected_correct);
        session.advance();

        assert!(session.is_complete());
        let result = session.result().unwrap();
        assert_eq!((result.score, result.total), (1, 2));

        // The missed set holds exactly the deck index of the question that
        // was answered wrong.
        let missed_index = deck
            .questions()
            .iter()
            .position(|question| question.prompt() == missed_prompt)
            .unwrap();
        assert_eq!(
            session.missed().iter().copied().collect::<Vec<_>>(),
            vec![missed_index]
        );
    }

    #[test]
    fn redo_covers_exactly_the_missed_questions() {
        let deck = capitals_deck();
        let mut session = QuizSession::new(deck);

        // Miss everything.
        for _ in 0..2 {
            let wrong = wrong_position(&session.current().unwrap());
            session.submit_answer(wrong).unwrap();
            session.advance();
        }
        assert_eq!(session.result().unwrap().score, 0);
        assert_eq!(session.missed().len(), 2);

        let mut redo = session.redo_missed().unwrap();
        assert_eq!(redo.total(), 2);
        assert_eq!(redo.score(), 0);
        assert!(redo.missed().is_empty());

        // Clear the redo run; its own missed set stays empty.
        for _ in 0..2 {
            let correct = redo.current().unwrap().correct_position();
            redo.submit_answer(correct).unwrap();
            redo.advance();
        }
        let result = redo.result().unwrap();
        assert_eq!((result.score, result.total), (2, 2));
        assert!(redo.redo_missed().is_none());
    }

    #[test]
    fn redo_unavailable_before_completion_or_without_misses() {
        let deck = capitals_deck();
        let mut session = QuizSession::new(deck);

        let wrong = wrong_position(&session.current().unwrap());
        session.submit_answer(wrong).unwrap();
        // Still in progress: nothing to redo even though a miss exists.
        assert!(session.redo_missed().is_none());

        session.advance();
        let correct = session.current().unwrap().correct_position();
        session.submit_answer(correct).unwrap();
        session.advance();

        assert!(session.redo_missed().is_some());
    }

    #[test]
    fn empty_deck_is_complete_immediately() {
        let deck = Arc::new(Deck::new("Empty", Vec::new()).unwrap());
        let mut session = QuizSession::new(deck);

        assert!(session.is_complete());
        let result = session.result().unwrap();
        assert_eq!((result.score, result.total), (0, 0));
        assert_eq!(result.percent(), 100);
        assert_eq!(result.to_string(), "0/0");
        assert!(session.redo_missed().is_none());
        assert_eq!(session.current().unwrap_err(), SessionError::Complete);
        assert_eq!(session.submit_answer(0).unwrap_err(), SessionError::Complete);

        // Advancing past the end stays put.
        session.advance();
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn double_submit_is_rejected() {
        let deck = capitals_deck();
        let mut session = QuizSession::new(deck);

        let correct = session.current().unwrap().correct_position();
        session.submit_answer(correct).unwrap();
        let err = session.submit_answer(correct).unwrap_err();
        assert_eq!(err, SessionError::AlreadyAnswered);
        // The guarded call did not double-count.
        assert_eq!(session.score(), 1);

        session.advance();
        assert!(!session.current().unwrap().is_answered());
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let deck = capitals_deck();
        let mut session = QuizSession::new(deck);

        let choices = session.current().unwrap().choice_count();
        let err = session.submit_answer(choices).unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidChoice {
                selected: choices,
                choices
            }
        );
        assert_eq!(session.score(), 0);
        assert!(session.missed().is_empty());
    }

    #[test]
    fn result_unavailable_while_in_progress() {
        let deck = capitals_deck();
        let session = QuizSession::new(deck);
        assert_eq!(session.result().unwrap_err(), SessionError::NotComplete);
    }

    #[test]
    fn score_never_exceeds_position_or_total() {
        let deck = capitals_deck();
        let mut session = QuizSession::new(deck);

        while !session.is_complete() {
            let correct = session.current().unwrap().correct_position();
            session.submit_answer(correct).unwrap();
            session.advance();
            assert!(session.score() <= session.position());
            assert!(session.score() <= session.total());
        }
    }

    #[test]
    fn progress_tracks_submissions_and_advances() {
        let deck = capitals_deck();
        let mut session = QuizSession::new(deck);

        let progress = session.progress();
        assert_eq!(progress.total, 2);
        assert_eq!(progress.answered, 0);
        assert_eq!(progress.remaining, 2);
        assert!(!progress.is_complete);

        // Submitting counts as answered even before the cursor moves.
        let correct = session.current().unwrap().correct_position();
        session.submit_answer(correct).unwrap();
        assert_eq!(session.progress().answered, 1);
        assert_eq!(session.progress().remaining, 1);

        session.advance();
        assert_eq!(session.progress().answered, 1);

        let correct = session.current().unwrap().correct_position();
        session.submit_answer(correct).unwrap();
        session.advance();

        let progress = session.progress();
        assert_eq!(progress.answered, 2);
        assert_eq!(progress.remaining, 0);
        assert!(progress.is_complete);
    }

    #[test]
    fn current_resolves_display_order() {
        let deck = capitals_deck();
        let session = QuizSession::new(deck);

        let current = session.current().unwrap();
        let choices = current.choices();
        assert_eq!(choices.len(), current.choice_count());
        assert_eq!(
            current.choice(current.correct_position()),
            Some(current.correct_text())
        );
        assert_eq!(current.choice(current.choice_count()), None);
    }
}
