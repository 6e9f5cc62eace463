use serde::Deserialize;
use thiserror::Error;

/// Every question offers exactly this many answer options.
pub const NUM_OPTIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,
    #[error("expected 4 options, found {0}")]
    OptionCount(usize),
    #[error("answer {answer:?} is not one of the options")]
    AnswerNotInOptions { answer: String },
}

/// A multiple-choice question. The correct answer is always one of the
/// options, in the order they were authored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    prompt: String,
    options: [String; NUM_OPTIONS],
    answer: String,
    help: Option<String>,
}

#[derive(Deserialize)]
struct RawQuestion {
    prompt: String,
    options: Vec<String>,
    answer: String,
    #[serde(default)]
    help: Option<String>,
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuestionError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Question::new(raw.prompt, raw.options, raw.answer, raw.help)
    }
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        help: Option<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        let answer = answer.into();

        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let count = options.len();
        let options: [String; NUM_OPTIONS] = options
            .try_into()
            .map_err(|_| QuestionError::OptionCount(count))?;

        if !options.contains(&answer) {
            return Err(QuestionError::AnswerNotInOptions { answer });
        }

        Ok(Self {
            prompt,
            options,
            answer,
            help: help.filter(|h| !h.trim().is_empty()),
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String; NUM_OPTIONS] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_new_accepts_answer_among_options() {
        let q = Question::new("What is 2 + 2?", opts(&["3", "4", "5", "6"]), "4", None).unwrap();
        assert_eq!(q.prompt(), "What is 2 + 2?");
        assert_eq!(q.options()[1], "4");
        assert!(q.is_correct("4"));
        assert!(!q.is_correct("5"));
        assert!(q.has_option("6"));
        assert!(!q.has_option("7"));
    }

    #[test]
    fn test_new_rejects_missing_answer() {
        let err = Question::new("1 + 1 = ?", opts(&["1", "3", "4", "0"]), "2", None).unwrap_err();
        assert_eq!(
            err,
            QuestionError::AnswerNotInOptions {
                answer: "2".to_string()
            }
        );
    }

    #[test]
    fn test_new_rejects_wrong_option_count() {
        let err = Question::new("1 + 1 = ?", opts(&["1", "2"]), "2", None).unwrap_err();
        assert_eq!(err, QuestionError::OptionCount(2));
    }

    #[test]
    fn test_blank_help_is_dropped() {
        let q = Question::new("1 + 1 = ?", opts(&["1", "2", "3", "0"]), "2", Some("  ".into())).unwrap();
        assert_eq!(q.help(), None);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"prompt":"4 + 0 = ?","options":["0","4","8","40"],"answer":"4"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.answer(), "4");

        let bad = r#"{"prompt":"4 + 0 = ?","options":["0","4","8","40"],"answer":"5"}"#;
        assert!(serde_json::from_str::<Question>(bad).is_err());
    }
}
