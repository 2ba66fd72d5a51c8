use crate::catalog::{ContentError, validate_templates};
use crate::models::{QuestionTemplate, TriviaQuestion};
use crate::shuffle::shuffle;
use rand::Rng;

/// One run of the trivia quiz. Transitions return a new snapshot and never
/// mutate in place; the caller replaces its copy wholesale.
///
/// The session is either active on `current_index` or completed. `completed`
/// is terminal; only a restart leaves it. An answer locks on first select
/// and stays locked until the next question.
#[derive(Debug, Clone, PartialEq)]
pub struct TriviaSession {
    pub questions: Vec<TriviaQuestion>,
    pub current_index: usize,
    pub score: usize,
    pub selected_answer: Option<String>,
    pub answered_correctly: Option<bool>,
    pub completed: bool,
}

impl TriviaSession {
    /// Builds a fresh session: question order shuffled, then each question's
    /// options shuffled independently.
    pub fn start(
        templates: &[QuestionTemplate],
        rng: &mut impl Rng,
    ) -> Result<Self, ContentError> {
        validate_templates(templates)?;
        let questions = shuffle(templates, rng)
            .into_iter()
            .map(|template| TriviaQuestion {
                options: shuffle(&template.options, rng),
                prompt: template.prompt,
                correct_answer: template.correct_answer,
            })
            .collect();
        Ok(Self {
            questions,
            current_index: 0,
            score: 0,
            selected_answer: None,
            answered_correctly: None,
            completed: false,
        })
    }

    /// Independent reshuffle of both question order and options; all
    /// counters reset.
    pub fn restart(
        templates: &[QuestionTemplate],
        rng: &mut impl Rng,
    ) -> Result<Self, ContentError> {
        Self::start(templates, rng)
    }

    pub fn current_question(&self) -> Option<&TriviaQuestion> {
        self.questions.get(self.current_index)
    }

    /// Locks in `answer` for the current question. No-op if an answer is
    /// already locked or the session is completed. An answer that is not one
    /// of the options is simply incorrect.
    pub fn select_answer(&self, answer: &str) -> Self {
        if self.selected_answer.is_some() || self.completed {
            return self.clone();
        }
        let Some(question) = self.current_question() else {
            return self.clone();
        };
        let correct = answer == question.correct_answer;
        let mut next = self.clone();
        next.selected_answer = Some(answer.to_string());
        next.answered_correctly = Some(correct);
        if correct {
            next.score += 1;
        }
        next
    }

    /// Moves to the next question, or completes the session on the last one.
    /// No-op until an answer is locked.
    pub fn advance(&self) -> Self {
        if self.selected_answer.is_none() || self.completed {
            return self.clone();
        }
        let mut next = self.clone();
        if self.current_index + 1 >= self.questions.len() {
            next.completed = true;
        } else {
            next.current_index += 1;
            next.selected_answer = None;
            next.answered_correctly = None;
        }
        next
    }

    /// Final score as a percentage, rounded to the nearest integer.
    pub fn score_percent(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        (self.score as f64 / self.questions.len() as f64 * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn templates(n: usize) -> Vec<QuestionTemplate> {
        (0..n)
            .map(|i| QuestionTemplate {
                prompt: format!("Question {}?", i),
                options: vec![
                    format!("right-{}", i),
                    format!("wrong-a-{}", i),
                    format!("wrong-b-{}", i),
                    format!("wrong-c-{}", i),
                ],
                correct_answer: format!("right-{}", i),
            })
            .collect()
    }

    fn session(n: usize) -> TriviaSession {
        TriviaSession::start(&templates(n), &mut StdRng::seed_from_u64(42)).unwrap()
    }

    fn correct_answer(session: &TriviaSession) -> String {
        session.current_question().unwrap().correct_answer.clone()
    }

    #[test]
    fn test_start_initial_state() {
        let session = session(9);
        assert_eq!(session.questions.len(), 9);
        assert_eq!(session.current_index, 0);
        assert_eq!(session.score, 0);
        assert!(session.selected_answer.is_none());
        assert!(session.answered_correctly.is_none());
        assert!(!session.completed);
    }

    #[test]
    fn test_start_rejects_bad_template() {
        let mut bad = templates(3);
        bad[1].options.pop();
        let result = TriviaSession::start(&bad, &mut StdRng::seed_from_u64(0));
        assert!(matches!(
            result,
            Err(ContentError::WrongOptionCount { index: 1, found: 3 })
        ));
    }

    #[test]
    fn test_start_shuffles_options_per_question() {
        let session = session(9);
        for question in &session.questions {
            assert_eq!(question.options.len(), 4);
            assert!(question.options.contains(&question.correct_answer));
        }
    }

    #[test]
    fn test_same_seed_same_session() {
        let templates = templates(9);
        let a = TriviaSession::start(&templates, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = TriviaSession::start(&templates, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_correct_answer_scores_once() {
        let session = session(3);
        let answer = correct_answer(&session);
        let answered = session.select_answer(&answer);
        assert_eq!(answered.score, 1);
        assert_eq!(answered.answered_correctly, Some(true));
        assert_eq!(answered.selected_answer, Some(answer));
    }

    #[test]
    fn test_incorrect_answer_does_not_score() {
        let session = session(3);
        let answered = session.select_answer("not even an option");
        assert_eq!(answered.score, 0);
        assert_eq!(answered.answered_correctly, Some(false));
    }

    #[test]
    fn test_answer_locks_on_first_select() {
        let session = session(3);
        let answer = correct_answer(&session);
        let first = session.select_answer("wrong guess");
        let second = first.select_answer(&answer);
        assert_eq!(first, second);
        assert_eq!(second.score, 0);
    }

    #[test]
    fn test_advance_requires_an_answer() {
        let session = session(3);
        assert_eq!(session.advance(), session);
    }

    #[test]
    fn test_advance_clears_selection() {
        let session = session(3);
        let answer = correct_answer(&session);
        let next = session.select_answer(&answer).advance();
        assert_eq!(next.current_index, 1);
        assert!(next.selected_answer.is_none());
        assert!(next.answered_correctly.is_none());
        assert_eq!(next.score, 1);
    }

    #[test]
    fn test_completion_on_last_question() {
        let mut session = session(9);
        for _ in 0..9 {
            let answer = correct_answer(&session);
            session = session.select_answer(&answer).advance();
        }
        assert!(session.completed);
        assert_eq!(session.current_index, 8);
        assert_eq!(session.score, 9);
        assert_eq!(session.score_percent(), 100);
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut session = session(2);
        for _ in 0..2 {
            let answer = correct_answer(&session);
            session = session.select_answer(&answer).advance();
        }
        assert!(session.completed);
        assert_eq!(session.advance(), session);
        assert_eq!(session.select_answer("anything"), session);
    }

    #[test]
    fn test_restart_resets_everything() {
        let templates = templates(9);
        let mut session =
            TriviaSession::start(&templates, &mut StdRng::seed_from_u64(1)).unwrap();
        for _ in 0..4 {
            let answer = correct_answer(&session);
            session = session.select_answer(&answer).advance();
        }
        assert_eq!(session.score, 4);
        let restarted =
            TriviaSession::restart(&templates, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(restarted.current_index, 0);
        assert_eq!(restarted.score, 0);
        assert!(restarted.selected_answer.is_none());
        assert!(!restarted.completed);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let mut session = session(9);
        let mut count = 0;
        while !session.completed {
            let answer = if count % 2 == 0 {
                correct_answer(&session)
            } else {
                "wrong".to_string()
            };
            let answered = session.select_answer(&answer);
            assert!(answered.score <= session.score + 1);
            session = answered.advance();
            count += 1;
        }
        assert!(session.score <= session.questions.len());
        assert_eq!(session.score, 5);
    }

    #[test]
    fn test_mixed_run_scores_and_completes() {
        // 9 questions: first correct, second wrong, rest correct.
        let mut session = session(9);
        let answer = correct_answer(&session);
        session = session.select_answer(&answer);
        assert_eq!(session.score, 1);
        session = session.advance();
        assert_eq!(session.current_index, 1);
        session = session.select_answer("wrong").advance();
        assert_eq!(session.score, 1);
        for _ in 0..7 {
            let answer = correct_answer(&session);
            session = session.select_answer(&answer).advance();
        }
        assert!(session.completed);
        assert_eq!(session.score, 8);
        assert_eq!(session.score_percent(), 89);
    }

    #[test]
    fn test_score_percent_rounds_to_nearest() {
        let mut session = session(9);
        session.score = 5;
        assert_eq!(session.score_percent(), 56);
        session.score = 3;
        assert_eq!(session.score_percent(), 33);
        session.score = 0;
        assert_eq!(session.score_percent(), 0);
    }

    #[test]
    fn test_score_percent_empty_session_is_zero() {
        let session = TriviaSession::start(&[], &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(session.score_percent(), 0);
        // Totality: nothing to answer, everything is a no-op.
        assert_eq!(session.select_answer("x"), session);
        assert_eq!(session.advance(), session);
    }
}
