use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::Deck;

/// One entry of a session plan: a deck question with a session-specific
/// display order for its choices.
///
/// `choice_order[display_position]` is the canonical choice index shown at
/// that position; `correct_position` is where the correct choice landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    question: usize,
    choice_order: Vec<usize>,
    correct_position: usize,
}

impl PresentedQuestion {
    fn shuffled<R: Rng + ?Sized>(deck: &Deck, question: usize, rng: &mut R) -> Self {
        let choices = deck.questions()[question].choices().len();
        let mut choice_order: Vec<usize> = (0..choices).collect();
        choice_order.shuffle(rng);

        let correct = deck.questions()[question].correct();
        let correct_position = choice_order
            .iter()
            .position(|&index| index == correct)
            .expect("correct index is always in the permutation");

        Self {
            question,
            choice_order,
            correct_position,
        }
    }

    /// Index of the underlying question in the deck.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question
    }

    /// Canonical choice indices in display order.
    #[must_use]
    pub fn choice_order(&self) -> &[usize] {
        &self.choice_order
    }

    /// Display position of the correct choice.
    #[must_use]
    pub fn correct_position(&self) -> usize {
        self.correct_position
    }
}

/// Build the randomized run order over the given deck indices.
///
/// The question order is a uniform permutation of `indices`, and every
/// selected question gets an independently shuffled choice order.
pub(crate) fn shuffled_plan<R: Rng + ?Sized>(
    deck: &Deck,
    indices: &[usize],
    rng: &mut R,
) -> Vec<PresentedQuestion> {
    let mut order: Vec<usize> = indices.to_vec();
    order.shuffle(rng);

    let mut plan = Vec::with_capacity(order.len());
    for question in order {
        plan.push(PresentedQuestion::shuffled(deck, question, rng));
    }
    plan
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
