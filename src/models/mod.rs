mod chapter;
mod question;

pub use chapter::{Chapter, LEARNER_PLACEHOLDER, LearnContent, ModuleKind, QuestionSet, personalize};
pub use question::{NUM_OPTIONS, Question, QuestionError};
