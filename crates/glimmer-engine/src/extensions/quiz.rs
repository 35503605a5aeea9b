//! Quiz mini-game state machine.
//!
//! Welcome → Question(i) → Feedback(i) → … → Result. The bridge renders
//! whatever phase it is told; all scoring and sequencing decisions are here.

use crate::assets::manifest::QuizQuestion;

/// Where the quiz currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Start screen, nothing asked yet.
    Welcome,
    /// Question `index` is on screen, awaiting an answer.
    Question { index: usize },
    /// Question `index` was answered; feedback is showing.
    Feedback { index: usize, picked: usize },
    /// All questions answered.
    Result,
}

/// What an answer did, for the bridge to paint the options with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Index of the right option, so a wrong pick can reveal it.
    pub correct_index: usize,
}

pub struct Quiz {
    questions: Vec<QuizQuestion>,
    phase: QuizPhase,
    score: usize,
}

impl Quiz {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            phase: QuizPhase::Welcome,
            score: 0,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    /// Begin (or restart) the quiz. With an empty deck it goes straight to
    /// the result screen rather than asking nothing.
    pub fn start(&mut self) {
        self.score = 0;
        self.phase = if self.questions.is_empty() {
            QuizPhase::Result
        } else {
            QuizPhase::Question { index: 0 }
        };
    }

    /// Answer the question on screen. Ignored (None) outside the Question
    /// phase or for an out-of-range option index.
    pub fn answer(&mut self, picked: usize) -> Option<AnswerOutcome> {
        let index = match self.phase {
            QuizPhase::Question { index } => index,
            _ => return None,
        };
        let question = &self.questions[index];
        if picked >= question.options.len() {
            return None;
        }

        let correct = picked == question.correct;
        if correct {
            self.score += 1;
        }
        self.phase = QuizPhase::Feedback { index, picked };
        Some(AnswerOutcome {
            correct,
            correct_index: question.correct,
        })
    }

    /// Leave the feedback phase: next question, or the result screen after
    /// the last one. No-op in other phases.
    pub fn advance(&mut self) {
        if let QuizPhase::Feedback { index, .. } = self.phase {
            let next = index + 1;
            self.phase = if next < self.questions.len() {
                QuizPhase::Question { index: next }
            } else {
                QuizPhase::Result
            };
        }
    }

    /// Tiered closing message for the result screen.
    pub fn result_message(&self) -> String {
        let score = self.score;
        let total = self.total();
        let percentage = if total == 0 {
            100.0
        } else {
            score as f32 / total as f32 * 100.0
        };

        if percentage >= 100.0 {
            format!("¡Perfecto! {score}/{total} - ¡Me conoces increíblemente bien! 💕")
        } else if percentage >= 80.0 {
            format!("¡Excelente! {score}/{total} - ¡Prestas mucha atención! 🌸")
        } else if percentage >= 60.0 {
            format!("¡Bien! {score}/{total} - ¡Vamos conociendo más! 😊")
        } else {
            format!("{score}/{total} - ¡Hay más por descubrir juntos! 💫")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Vec<QuizQuestion> {
        (0..n)
            .map(|i| QuizQuestion {
                prompt: format!("q{i}"),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct: i % 4,
            })
            .collect()
    }

    #[test]
    fn starts_on_welcome() {
        let quiz = Quiz::new(deck(3));
        assert_eq!(quiz.phase(), QuizPhase::Welcome);
    }

    #[test]
    fn walks_every_question_then_results() {
        let mut quiz = Quiz::new(deck(3));
        quiz.start();
        for i in 0..3 {
            assert_eq!(quiz.phase(), QuizPhase::Question { index: i });
            quiz.answer(0);
            assert!(matches!(quiz.phase(), QuizPhase::Feedback { index, .. } if index == i));
            quiz.advance();
        }
        assert_eq!(quiz.phase(), QuizPhase::Result);
    }

    #[test]
    fn correct_answers_score() {
        let mut quiz = Quiz::new(deck(4)); // correct answers: 0, 1, 2, 3
        quiz.start();
        for i in 0..4 {
            let outcome = quiz.answer(i).unwrap();
            assert!(outcome.correct);
            quiz.advance();
        }
        assert_eq!(quiz.score(), 4);
    }

    #[test]
    fn wrong_answer_reveals_correct_index() {
        let mut quiz = Quiz::new(deck(1)); // correct: 0
        quiz.start();
        let outcome = quiz.answer(2).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_index, 0);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn answer_outside_question_phase_is_ignored() {
        let mut quiz = Quiz::new(deck(1));
        assert!(quiz.answer(0).is_none()); // still on Welcome
        quiz.start();
        quiz.answer(0);
        assert!(quiz.answer(0).is_none()); // already on Feedback
    }

    #[test]
    fn out_of_range_pick_is_ignored() {
        let mut quiz = Quiz::new(deck(1));
        quiz.start();
        assert!(quiz.answer(99).is_none());
        assert_eq!(quiz.phase(), QuizPhase::Question { index: 0 });
    }

    #[test]
    fn restart_resets_score() {
        let mut quiz = Quiz::new(deck(2));
        quiz.start();
        quiz.answer(0);
        quiz.advance();
        quiz.start();
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.phase(), QuizPhase::Question { index: 0 });
    }

    #[test]
    fn result_message_tiers() {
        let cases = [
            (5, 5, "¡Perfecto!"),
            (4, 5, "¡Excelente!"),
            (3, 5, "¡Bien!"),
            (1, 5, "descubrir"),
        ];
        for (score, total, needle) in cases {
            let mut quiz = Quiz::new(deck(total));
            quiz.start();
            for i in 0..total {
                let correct = quiz.question(i).unwrap().correct;
                let pick = if i < score { correct } else { (correct + 1) % 4 };
                quiz.answer(pick);
                quiz.advance();
            }
            assert_eq!(quiz.score(), score);
            assert!(
                quiz.result_message().contains(needle),
                "{}/{} should mention {:?}: {}",
                score,
                total,
                needle,
                quiz.result_message()
            );
        }
    }

    #[test]
    fn empty_deck_goes_straight_to_results() {
        let mut quiz = Quiz::new(Vec::new());
        quiz.start();
        assert_eq!(quiz.phase(), QuizPhase::Result);
    }
}
