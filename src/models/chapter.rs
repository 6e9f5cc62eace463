use std::fmt;

use serde::Deserialize;

use super::Question;

/// The three activities a chapter offers from its menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Learn,
    Practice,
    Test,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 3] = [ModuleKind::Learn, ModuleKind::Practice, ModuleKind::Test];

    pub fn title(self) -> &'static str {
        match self {
            ModuleKind::Learn => "Learn",
            ModuleKind::Practice => "Practice",
            ModuleKind::Test => "Test",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            ModuleKind::Learn => "Watch and Listen",
            ModuleKind::Practice => "Fun Worksheets",
            ModuleKind::Test => "Final Challenge",
        }
    }
}

/// Which ordered question sequence of a chapter is being worked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSet {
    Practice,
    Test,
}

impl fmt::Display for QuestionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSet::Practice => write!(f, "practice"),
            QuestionSet::Test => write!(f, "test"),
        }
    }
}

/// Explanation shown on the Learn screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LearnContent {
    pub concept: String,
    /// Multi-line visual aid, rendered verbatim.
    pub visual: String,
    /// Text handed to the narrator by "Play Voice". May contain
    /// [`LEARNER_PLACEHOLDER`].
    pub voice_text: String,
}

/// Replaced with the learner's name before narration text is spoken.
pub const LEARNER_PLACEHOLDER: &str = "{learner}";

/// Fill in the learner's name wherever `text` mentions [`LEARNER_PLACEHOLDER`].
pub fn personalize(text: &str, learner: &str) -> String {
    text.replace(LEARNER_PLACEHOLDER, learner)
}

/// A curriculum unit. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub icon: String,
    /// Presentation colour tag, opaque to the controller.
    #[serde(default)]
    pub color: String,
    pub learn: LearnContent,
    pub practice: Vec<Question>,
    pub test: Vec<Question>,
}

impl Chapter {
    pub fn questions(&self, set: QuestionSet) -> &[Question] {
        match set {
            QuestionSet::Practice => &self.practice,
            QuestionSet::Test => &self.test,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personalize_fills_every_placeholder() {
        assert_eq!(personalize("Hi {learner}! Bye {learner}.", "Sam"), "Hi Sam! Bye Sam.");
        assert_eq!(personalize("No name here.", "Sam"), "No name here.");
    }
}
