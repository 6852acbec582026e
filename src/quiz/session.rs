//! Linear progress tracking through the question bank.
//!
//! The session owns its copy of the question bank (small, loaded once) and
//! tracks the respondent's choices as an ordered list of type-tags.
//!
//! State machine:
//!
//! ```text
//! NotStarted --start()--> InProgress(0)
//! InProgress(i) --select_answer--> InProgress(i+1) | Complete
//! InProgress(i>0) --previous--> InProgress(i-1)
//! InProgress(0) --previous--> InProgress(0)      (no-op)
//! Complete --previous--> InProgress(last)        (pops the last answer)
//! Complete --start()--> InProgress(0)            (retake)
//! ```
//!
//! Invariant: `answers.len() == current_index()` at all times.

use crate::domain::QuizQuestion;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress(usize),
    Complete,
}

/// Caller misuse of the session.
///
/// These are rejections, not corruption: the session state is unchanged when
/// one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `start()` has not been called yet.
    NotStarted,
    /// `select_answer` after the last question was already answered.
    AlreadyComplete,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NotStarted => write!(f, "Quiz session has not been started."),
            SessionError::AlreadyComplete => write!(f, "Quiz is already complete."),
        }
    }
}

impl std::error::Error for SessionError {}

/// A single respondent's pass through the quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    state: SessionState,
    answers: Vec<String>,
}

impl QuizSession {
    /// Create a session over the given question bank. The session is inert
    /// until [`QuizSession::start`] is called.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            state: SessionState::NotStarted,
            answers: Vec::new(),
        }
    }

    /// Reset to the first question with an empty answer list.
    ///
    /// An empty question bank goes straight to `Complete`; the classifier
    /// will then reject the empty answer list with its own error kind.
    pub fn start(&mut self) {
        self.answers.clear();
        self.state = if self.questions.is_empty() {
            SessionState::Complete
        } else {
            SessionState::InProgress(0)
        };
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    /// Index of the question currently presented (== answers recorded so far).
    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    /// Number of questions in the bank.
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// The recorded answer sequence, in question order.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// The question at the current index, or `None` once the quiz is
    /// complete (or not yet started).
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            SessionState::InProgress(i) => self.questions.get(i),
            SessionState::NotStarted | SessionState::Complete => None,
        }
    }

    /// Record `type_tag` for the current question and advance.
    pub fn select_answer(&mut self, type_tag: impl Into<String>) -> Result<(), SessionError> {
        match self.state {
            SessionState::NotStarted => Err(SessionError::NotStarted),
            SessionState::Complete => Err(SessionError::AlreadyComplete),
            SessionState::InProgress(i) => {
                self.answers.push(type_tag.into());
                let next = i + 1;
                self.state = if next >= self.questions.len() {
                    SessionState::Complete
                } else {
                    SessionState::InProgress(next)
                };
                Ok(())
            }
        }
    }

    /// Step back one question, dropping the last recorded answer.
    ///
    /// No-op at index 0. From `Complete` this reopens the last question, so a
    /// full quiz can be unwound answer by answer.
    pub fn previous(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::NotStarted => Err(SessionError::NotStarted),
            SessionState::InProgress(0) => Ok(()),
            SessionState::InProgress(i) => {
                self.answers.pop();
                self.state = SessionState::InProgress(i - 1);
                Ok(())
            }
            SessionState::Complete => {
                if self.questions.is_empty() {
                    return Ok(());
                }
                self.answers.pop();
                self.state = SessionState::InProgress(self.questions.len() - 1);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AnswerOption;

    fn bank(n: usize) -> Vec<QuizQuestion> {
        (0..n)
            .map(|i| QuizQuestion {
                question: format!("Q{i}"),
                answers: vec![
                    AnswerOption {
                        text: "a".to_string(),
                        type_tag: "analytical".to_string(),
                    },
                    AnswerOption {
                        text: "b".to_string(),
                        type_tag: "driver".to_string(),
                    },
                ],
            })
            .collect()
    }

    #[test]
    fn not_started_session_rejects_operations() {
        let mut s = QuizSession::new(bank(3));
        assert_eq!(s.state(), SessionState::NotStarted);
        assert!(s.current_question().is_none());
        assert_eq!(s.select_answer("driver"), Err(SessionError::NotStarted));
        assert_eq!(s.previous(), Err(SessionError::NotStarted));
    }

    #[test]
    fn start_resets_index_and_answers() {
        let mut s = QuizSession::new(bank(3));
        s.start();
        s.select_answer("driver").unwrap();
        s.select_answer("analytical").unwrap();

        s.start();
        assert_eq!(s.state(), SessionState::InProgress(0));
        assert_eq!(s.current_index(), 0);
        assert!(s.answers().is_empty());
        assert_eq!(s.current_question().unwrap().question, "Q0");
    }

    #[test]
    fn answering_every_question_completes_the_session() {
        let mut s = QuizSession::new(bank(3));
        s.start();
        for _ in 0..3 {
            assert!(!s.is_complete());
            s.select_answer("driver").unwrap();
        }
        assert!(s.is_complete());
        assert!(s.current_question().is_none());
        assert_eq!(s.answers().len(), 3);
    }

    #[test]
    fn select_past_the_end_is_rejected_without_corruption() {
        let mut s = QuizSession::new(bank(2));
        s.start();
        s.select_answer("driver").unwrap();
        s.select_answer("driver").unwrap();

        assert_eq!(s.select_answer("amiable"), Err(SessionError::AlreadyComplete));
        assert_eq!(s.answers().len(), 2);
        assert!(s.is_complete());
    }

    #[test]
    fn full_round_trip_restores_the_initial_state() {
        let n = 4;
        let mut s = QuizSession::new(bank(n));
        s.start();
        for i in 0..n {
            s.select_answer(format!("tag{i}")).unwrap();
        }
        assert!(s.is_complete());

        for _ in 0..n {
            s.previous().unwrap();
        }
        assert_eq!(s.current_index(), 0);
        assert!(s.answers().is_empty());
        assert_eq!(s.state(), SessionState::InProgress(0));
    }

    #[test]
    fn previous_at_index_zero_is_an_idempotent_noop() {
        let mut s = QuizSession::new(bank(3));
        s.start();
        s.previous().unwrap();
        s.previous().unwrap();
        assert_eq!(s.state(), SessionState::InProgress(0));
        assert!(s.answers().is_empty());
    }

    #[test]
    fn previous_keeps_answer_len_equal_to_index() {
        let mut s = QuizSession::new(bank(3));
        s.start();
        s.select_answer("a").unwrap();
        s.select_answer("b").unwrap();
        s.previous().unwrap();
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.answers(), ["a".to_string()]);
        assert_eq!(s.current_question().unwrap().question, "Q1");
    }

    #[test]
    fn empty_bank_completes_immediately() {
        let mut s = QuizSession::new(Vec::new());
        s.start();
        assert!(s.is_complete());
        assert!(s.answers().is_empty());
        // previous over an empty bank has nothing to reopen.
        s.previous().unwrap();
        assert!(s.is_complete());
    }
}
