//! Lesson progression state machine.
//!
//! [`ProgressionController`] is the only writer of the [`Session`]. Every
//! operation either applies one transition and returns the effects the
//! presentation layer should run, or fails with a [`ProgressionError`] and
//! leaves the session untouched.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::data::Curriculum;
use crate::effects::{Effect, Intensity};
use crate::models::{Chapter, ModuleKind, Question, QuestionSet};

/// Pass rate at or above which a finished test counts as a success.
pub const PASS_THRESHOLD: f64 = 0.8;

pub type Effects = Vec<Effect>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Home,
    ChapterMenu,
    Learn,
    Practice,
    Test,
    Results,
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenKind::Home => "home",
            ScreenKind::ChapterMenu => "chapter menu",
            ScreenKind::Learn => "learn",
            ScreenKind::Practice => "practice",
            ScreenKind::Test => "test",
            ScreenKind::Results => "results",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    #[error("{operation} is not available on the {screen} screen")]
    InvalidTransition {
        operation: &'static str,
        screen: ScreenKind,
    },
    #[error("no chapter with id {0:?}")]
    UnknownChapter(String),
    #[error("the current question has already been answered")]
    AlreadyAnswered,
    #[error("the current question has not been answered yet")]
    NotAnswered,
    #[error("{0:?} is not an option of the current question")]
    UnknownOption(String),
}

/// The option picked for the current question and whether it was right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    selected: String,
    correct: bool,
}

impl Answer {
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_correct(&self) -> bool {
        self.correct
    }
}

/// One run through a practice or test question sequence.
///
/// `index` always points at a question of the sequence; curricula never hold
/// empty sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass {
    chapter: Arc<Chapter>,
    set: QuestionSet,
    index: usize,
    score: usize,
    answer: Option<Answer>,
}

impl Pass {
    fn new(chapter: Arc<Chapter>, set: QuestionSet) -> Self {
        Self {
            chapter,
            set,
            index: 0,
            score: 0,
            answer: None,
        }
    }

    pub fn chapter(&self) -> &Arc<Chapter> {
        &self.chapter
    }

    pub fn set(&self) -> QuestionSet {
        self.set
    }

    pub fn questions(&self) -> &[Question] {
        self.chapter.questions(self.set)
    }

    pub fn question(&self) -> &Question {
        &self.questions()[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.questions().len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answer(&self) -> Option<&Answer> {
        self.answer.as_ref()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total()
    }

    fn submit(&mut self, option: &str) -> Result<bool, ProgressionError> {
        if self.answer.is_some() {
            return Err(ProgressionError::AlreadyAnswered);
        }

        let question = self.question();
        if !question.has_option(option) {
            return Err(ProgressionError::UnknownOption(option.to_string()));
        }

        let correct = question.is_correct(option);
        if correct {
            self.score += 1;
        }
        self.answer = Some(Answer {
            selected: option.to_string(),
            correct,
        });
        Ok(correct)
    }

    fn next_question(&mut self) {
        self.index += 1;
        self.answer = None;
    }
}

/// Which acknowledgement the results screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    Celebratory,
    Encouraging,
}

/// Final score of a completed test pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestOutcome {
    score: usize,
    total: usize,
}

impl TestOutcome {
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total > 0 {
            self.score as f64 / self.total as f64
        } else {
            0.0
        }
    }

    /// Pass rate as a whole percentage, rounded half up.
    pub fn percent(&self) -> u32 {
        (self.pass_rate() * 100.0).round() as u32
    }

    pub fn is_success(&self) -> bool {
        self.pass_rate() >= PASS_THRESHOLD
    }

    pub fn acknowledgement(&self) -> Acknowledgement {
        if self.is_success() {
            Acknowledgement::Celebratory
        } else {
            Acknowledgement::Encouraging
        }
    }
}

/// The current view. Screens that need a chapter carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    ChapterMenu { chapter: Arc<Chapter> },
    Learn { chapter: Arc<Chapter> },
    Practice(Pass),
    Test(Pass),
    Results {
        chapter: Arc<Chapter>,
        outcome: TestOutcome,
    },
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Home => ScreenKind::Home,
            Screen::ChapterMenu { .. } => ScreenKind::ChapterMenu,
            Screen::Learn { .. } => ScreenKind::Learn,
            Screen::Practice(_) => ScreenKind::Practice,
            Screen::Test(_) => ScreenKind::Test,
            Screen::Results { .. } => ScreenKind::Results,
        }
    }

    pub fn chapter(&self) -> Option<&Arc<Chapter>> {
        match self {
            Screen::Home => None,
            Screen::ChapterMenu { chapter }
            | Screen::Learn { chapter }
            | Screen::Results { chapter, .. } => Some(chapter),
            Screen::Practice(pass) | Screen::Test(pass) => Some(&pass.chapter),
        }
    }

    pub fn pass(&self) -> Option<&Pass> {
        match self {
            Screen::Practice(pass) | Screen::Test(pass) => Some(pass),
            _ => None,
        }
    }
}

/// Runtime state read by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    screen: Screen,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
        }
    }
}

impl Session {
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn selected_chapter(&self) -> Option<&Arc<Chapter>> {
        self.screen.chapter()
    }

    pub fn question_index(&self) -> Option<usize> {
        self.screen.pass().map(Pass::index)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.screen.pass().map(Pass::question)
    }

    /// Correct answers in the current pass, or the final score on the
    /// results screen. Zero elsewhere.
    pub fn score(&self) -> usize {
        match &self.screen {
            Screen::Practice(pass) | Screen::Test(pass) => pass.score,
            Screen::Results { outcome, .. } => outcome.score,
            _ => 0,
        }
    }

    /// Length of the active question sequence, or of the finished test.
    pub fn total(&self) -> Option<usize> {
        match &self.screen {
            Screen::Practice(pass) | Screen::Test(pass) => Some(pass.total()),
            Screen::Results { outcome, .. } => Some(outcome.total),
            _ => None,
        }
    }

    pub fn last_answer(&self) -> Option<&str> {
        self.screen.pass().and_then(Pass::answer).map(Answer::selected)
    }

    pub fn last_outcome(&self) -> Option<bool> {
        self.screen.pass().and_then(Pass::answer).map(Answer::is_correct)
    }

    pub fn outcome(&self) -> Option<TestOutcome> {
        match &self.screen {
            Screen::Results { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }
}

pub struct ProgressionController {
    curriculum: Curriculum,
    session: Session,
}

impl ProgressionController {
    pub fn new(curriculum: Curriculum) -> Self {
        Self {
            curriculum,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    pub fn select_chapter(&mut self, id: &str) -> Result<Effects, ProgressionError> {
        self.expect_screen("select_chapter", &[ScreenKind::Home])?;

        let chapter = self
            .curriculum
            .get(id)
            .cloned()
            .ok_or_else(|| ProgressionError::UnknownChapter(id.to_string()))?;

        self.transition(Screen::ChapterMenu { chapter });
        Ok(Effects::new())
    }

    pub fn open_module(&mut self, module: ModuleKind) -> Result<Effects, ProgressionError> {
        let Screen::ChapterMenu { chapter } = &self.session.screen else {
            return Err(self.invalid("open_module"));
        };
        let chapter = Arc::clone(chapter);

        let next = match module {
            ModuleKind::Learn => Screen::Learn { chapter },
            ModuleKind::Practice => Screen::Practice(Pass::new(chapter, QuestionSet::Practice)),
            ModuleKind::Test => Screen::Test(Pass::new(chapter, QuestionSet::Test)),
        };
        self.transition(next);
        Ok(Effects::new())
    }

    /// Record the answer to the current question. The first answer locks the
    /// question until [`advance`](Self::advance).
    pub fn submit_answer(&mut self, option: &str) -> Result<Effects, ProgressionError> {
        let pass = match &mut self.session.screen {
            Screen::Practice(pass) | Screen::Test(pass) => pass,
            other => {
                return Err(ProgressionError::InvalidTransition {
                    operation: "submit_answer",
                    screen: other.kind(),
                });
            }
        };

        let correct = pass.submit(option)?;
        debug!(
            chapter = %pass.chapter.id,
            set = %pass.set,
            index = pass.index,
            correct,
            score = pass.score,
            "answer recorded"
        );

        if correct {
            Ok(vec![Effect::Celebrate(Intensity::Minor)])
        } else {
            Ok(Effects::new())
        }
    }

    /// Move past an answered question. The last practice question returns to
    /// the chapter menu; the last test question finishes the test.
    pub fn advance(&mut self) -> Result<Effects, ProgressionError> {
        let next = match &mut self.session.screen {
            Screen::Practice(pass) | Screen::Test(pass) if pass.answer.is_none() => {
                return Err(ProgressionError::NotAnswered);
            }
            Screen::Practice(pass) | Screen::Test(pass) if !pass.is_last() => {
                pass.next_question();
                return Ok(Effects::new());
            }
            Screen::Practice(pass) => Screen::ChapterMenu {
                chapter: Arc::clone(&pass.chapter),
            },
            Screen::Test(pass) => Screen::Results {
                chapter: Arc::clone(&pass.chapter),
                outcome: TestOutcome {
                    score: pass.score,
                    total: pass.total(),
                },
            },
            other => {
                return Err(ProgressionError::InvalidTransition {
                    operation: "advance",
                    screen: other.kind(),
                });
            }
        };

        let mut effects = Effects::new();
        if let Screen::Results { outcome, .. } = &next {
            debug!(
                score = outcome.score,
                total = outcome.total,
                pass_rate = outcome.pass_rate(),
                "test finished"
            );
            if outcome.is_success() {
                effects.push(Effect::Celebrate(Intensity::Major));
            }
        }

        self.transition(next);
        Ok(effects)
    }

    pub fn back(&mut self) -> Result<Effects, ProgressionError> {
        let next = match &self.session.screen {
            Screen::Home => return Err(self.invalid("back")),
            Screen::ChapterMenu { .. } | Screen::Results { .. } => Screen::Home,
            Screen::Learn { chapter } => Screen::ChapterMenu {
                chapter: Arc::clone(chapter),
            },
            Screen::Practice(pass) | Screen::Test(pass) => Screen::ChapterMenu {
                chapter: Arc::clone(&pass.chapter),
            },
        };

        self.transition(next);
        Ok(Effects::new())
    }

    /// Abandon a practice or test pass.
    pub fn quit(&mut self) -> Result<Effects, ProgressionError> {
        self.expect_screen("quit", &[ScreenKind::Practice, ScreenKind::Test])?;
        self.back()
    }

    pub fn retry_test(&mut self) -> Result<Effects, ProgressionError> {
        let Screen::Results { chapter, .. } = &self.session.screen else {
            return Err(self.invalid("retry_test"));
        };

        let next = Screen::Test(Pass::new(Arc::clone(chapter), QuestionSet::Test));
        self.transition(next);
        Ok(Effects::new())
    }

    /// Jump straight back to the chapter index from anywhere.
    pub fn home(&mut self) {
        if self.session.screen != Screen::Home {
            self.transition(Screen::Home);
        }
    }

    /// Narration for the current screen: the chapter's voice text while
    /// learning, the question's help while practising.
    pub fn narrate(&self) -> Result<Effects, ProgressionError> {
        match &self.session.screen {
            Screen::Learn { chapter } => Ok(vec![Effect::Speak(chapter.learn.voice_text.clone())]),
            Screen::Practice(pass) => Ok(pass
                .question()
                .help()
                .map(|help| Effect::Speak(help.to_string()))
                .into_iter()
                .collect()),
            _ => Err(self.invalid("narrate")),
        }
    }

    fn expect_screen(
        &self,
        operation: &'static str,
        allowed: &[ScreenKind],
    ) -> Result<(), ProgressionError> {
        if allowed.contains(&self.session.screen_kind()) {
            Ok(())
        } else {
            Err(self.invalid(operation))
        }
    }

    fn invalid(&self, operation: &'static str) -> ProgressionError {
        ProgressionError::InvalidTransition {
            operation,
            screen: self.session.screen_kind(),
        }
    }

    fn transition(&mut self, next: Screen) {
        debug!(
            from = %self.session.screen_kind(),
            to = %next.kind(),
            chapter = next.chapter().map(|c| c.id.as_str()).unwrap_or("-"),
            "screen transition"
        );
        self.session.screen = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_curriculum;

    fn controller() -> ProgressionController {
        ProgressionController::new(builtin_curriculum().unwrap())
    }

    fn start(id: &str, module: ModuleKind) -> ProgressionController {
        let mut controller = controller();
        controller.select_chapter(id).unwrap();
        controller.open_module(module).unwrap();
        controller
    }

    fn correct_answer(controller: &ProgressionController) -> String {
        controller
            .session()
            .current_question()
            .unwrap()
            .answer()
            .to_string()
    }

    fn wrong_answer(controller: &ProgressionController) -> String {
        let question = controller.session().current_question().unwrap();
        question
            .options()
            .iter()
            .find(|o| !question.is_correct(o))
            .unwrap()
            .clone()
    }

    #[test]
    fn test_initial_session() {
        let controller = controller();
        let session = controller.session();
        assert_eq!(session.screen_kind(), ScreenKind::Home);
        assert!(session.selected_chapter().is_none());
        assert_eq!(session.question_index(), None);
        assert_eq!(session.score(), 0);
        assert_eq!(session.total(), None);
        assert_eq!(session.last_answer(), None);
        assert_eq!(session.last_outcome(), None);
    }

    #[test]
    fn test_open_practice_loads_first_question() {
        let controller = start("addition", ModuleKind::Practice);
        let session = controller.session();

        assert_eq!(session.screen_kind(), ScreenKind::Practice);
        assert_eq!(session.question_index(), Some(0));
        assert_eq!(session.score(), 0);
        assert_eq!(session.total(), Some(2));

        let question = session.current_question().unwrap();
        assert_eq!(question.prompt(), "What is 2 + 2?");
        assert_eq!(question.options(), &["3", "4", "5", "6"].map(String::from));
    }

    #[test]
    fn test_correct_answer_scores_and_celebrates() {
        for chapter in controller().curriculum().chapters() {
            for module in [ModuleKind::Practice, ModuleKind::Test] {
                let mut controller = start(&chapter.id, module);
                let answer = correct_answer(&controller);

                let effects = controller.submit_answer(&answer).unwrap();

                assert_eq!(effects, vec![Effect::Celebrate(Intensity::Minor)]);
                assert_eq!(controller.session().last_outcome(), Some(true));
                assert_eq!(controller.session().last_answer(), Some(answer.as_str()));
                assert_eq!(controller.session().score(), 1);
            }
        }
    }

    #[test]
    fn test_wrong_answer_keeps_score() {
        for chapter in controller().curriculum().chapters() {
            let mut controller = start(&chapter.id, ModuleKind::Test);
            let answer = wrong_answer(&controller);

            let effects = controller.submit_answer(&answer).unwrap();

            assert!(effects.is_empty());
            assert_eq!(controller.session().last_outcome(), Some(false));
            assert_eq!(controller.session().score(), 0);
        }
    }

    #[test]
    fn test_second_submit_is_locked_out() {
        let mut controller = start("counting", ModuleKind::Test);
        let wrong = wrong_answer(&controller);
        let right = correct_answer(&controller);

        controller.submit_answer(&wrong).unwrap();
        let before = controller.session().clone();

        assert_eq!(
            controller.submit_answer(&right),
            Err(ProgressionError::AlreadyAnswered)
        );
        assert_eq!(controller.session(), &before);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let mut controller = start("counting", ModuleKind::Practice);
        let before = controller.session().clone();

        assert_eq!(
            controller.submit_answer("42"),
            Err(ProgressionError::UnknownOption("42".into()))
        );
        assert_eq!(controller.session(), &before);
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut controller = start("counting", ModuleKind::Practice);
        assert_eq!(controller.advance(), Err(ProgressionError::NotAnswered));
        assert_eq!(controller.session().question_index(), Some(0));
    }

    #[test]
    fn test_advance_clears_answer() {
        let mut controller = start("counting", ModuleKind::Test);
        let answer = correct_answer(&controller);
        controller.submit_answer(&answer).unwrap();

        controller.advance().unwrap();

        let session = controller.session();
        assert_eq!(session.question_index(), Some(1));
        assert_eq!(session.last_answer(), None);
        assert_eq!(session.last_outcome(), None);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_score_never_exceeds_answered() {
        let mut controller = start("shapes", ModuleKind::Test);
        let mut step = 0;
        while controller.session().screen_kind() == ScreenKind::Test {
            let answer = if step % 3 == 1 {
                wrong_answer(&controller)
            } else {
                correct_answer(&controller)
            };
            controller.submit_answer(&answer).unwrap();

            let session = controller.session();
            assert!(session.score() <= session.question_index().unwrap() + 1);

            controller.advance().unwrap();
            step += 1;
        }
        assert_eq!(step, 5);
        assert_eq!(controller.session().score(), 3);
    }

    #[test]
    fn test_perfect_test_is_celebrated() {
        let mut controller = start("counting", ModuleKind::Test);
        let mut last_effects = Vec::new();

        for _ in 0..5 {
            let answer = correct_answer(&controller);
            controller.submit_answer(&answer).unwrap();
            last_effects = controller.advance().unwrap();
        }

        let session = controller.session();
        assert_eq!(session.screen_kind(), ScreenKind::Results);
        assert_eq!(session.total(), Some(5));
        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.score(), 5);
        assert_eq!(outcome.total(), 5);
        assert_eq!(outcome.pass_rate(), 1.0);
        assert_eq!(outcome.percent(), 100);
        assert_eq!(outcome.acknowledgement(), Acknowledgement::Celebratory);
        assert_eq!(last_effects, vec![Effect::Celebrate(Intensity::Major)]);
    }

    #[test]
    fn test_partial_test_is_encouraged() {
        let mut controller = start("counting", ModuleKind::Test);
        let mut last_effects = Vec::new();

        for i in 0..5 {
            let answer = if i < 3 {
                correct_answer(&controller)
            } else {
                wrong_answer(&controller)
            };
            controller.submit_answer(&answer).unwrap();
            last_effects = controller.advance().unwrap();
        }

        let outcome = controller.session().outcome().unwrap();
        assert_eq!(outcome.score(), 3);
        assert!((outcome.pass_rate() - 0.6).abs() < f64::EPSILON);
        assert_eq!(outcome.percent(), 60);
        assert_eq!(outcome.acknowledgement(), Acknowledgement::Encouraging);
        assert!(last_effects.is_empty());
    }

    #[test]
    fn test_four_of_five_meets_threshold() {
        let outcome = TestOutcome { score: 4, total: 5 };
        assert!(outcome.is_success());
        assert_eq!(outcome.percent(), 80);
    }

    #[test]
    fn test_retry_resets_pass() {
        let mut controller = start("addition", ModuleKind::Test);
        for _ in 0..5 {
            let answer = correct_answer(&controller);
            controller.submit_answer(&answer).unwrap();
            controller.advance().unwrap();
        }
        assert_eq!(controller.session().score(), 5);

        controller.retry_test().unwrap();

        let session = controller.session();
        assert_eq!(session.screen_kind(), ScreenKind::Test);
        assert_eq!(session.question_index(), Some(0));
        assert_eq!(session.score(), 0);
        assert_eq!(session.last_answer(), None);
        assert_eq!(session.selected_chapter().unwrap().id, "addition");
    }

    #[test]
    fn test_practice_end_returns_to_menu() {
        let mut controller = start("shapes", ModuleKind::Practice);
        for _ in 0..2 {
            let answer = correct_answer(&controller);
            controller.submit_answer(&answer).unwrap();
            let effects = controller.advance().unwrap();
            assert!(effects.is_empty());
        }

        let session = controller.session();
        assert_eq!(session.screen_kind(), ScreenKind::ChapterMenu);
        assert_eq!(session.selected_chapter().unwrap().id, "shapes");
    }

    #[test]
    fn test_back_navigation() {
        let mut controller = start("counting", ModuleKind::Learn);
        controller.back().unwrap();
        assert_eq!(controller.session().screen_kind(), ScreenKind::ChapterMenu);

        controller.open_module(ModuleKind::Test).unwrap();
        controller.quit().unwrap();
        assert_eq!(controller.session().screen_kind(), ScreenKind::ChapterMenu);

        controller.back().unwrap();
        assert_eq!(controller.session().screen_kind(), ScreenKind::Home);
        assert!(controller.session().selected_chapter().is_none());

        assert_eq!(
            controller.back(),
            Err(ProgressionError::InvalidTransition {
                operation: "back",
                screen: ScreenKind::Home,
            })
        );
    }

    #[test]
    fn test_results_back_goes_home() {
        let mut controller = start("counting", ModuleKind::Test);
        for _ in 0..5 {
            let answer = wrong_answer(&controller);
            controller.submit_answer(&answer).unwrap();
            controller.advance().unwrap();
        }
        controller.back().unwrap();
        assert_eq!(controller.session().screen_kind(), ScreenKind::Home);
    }

    #[test]
    fn test_reselecting_chapter_is_fresh() {
        let mut fresh = controller();
        fresh.select_chapter("addition").unwrap();

        let mut controller = start("addition", ModuleKind::Test);
        let answer = correct_answer(&controller);
        controller.submit_answer(&answer).unwrap();
        controller.quit().unwrap();
        controller.back().unwrap();
        controller.select_chapter("addition").unwrap();

        assert_eq!(controller.session(), fresh.session());

        controller.open_module(ModuleKind::Test).unwrap();
        assert_eq!(controller.session().score(), 0);
        assert_eq!(controller.session().question_index(), Some(0));
    }

    #[test]
    fn test_guards_fail_fast() {
        let mut controller = controller();

        assert_eq!(
            controller.select_chapter("geometry"),
            Err(ProgressionError::UnknownChapter("geometry".into()))
        );
        assert!(matches!(
            controller.open_module(ModuleKind::Practice),
            Err(ProgressionError::InvalidTransition { screen: ScreenKind::Home, .. })
        ));
        assert!(controller.submit_answer("4").is_err());
        assert!(controller.advance().is_err());
        assert!(controller.retry_test().is_err());
        assert!(controller.quit().is_err());
        assert_eq!(controller.session(), &Session::default());

        controller.select_chapter("counting").unwrap();
        assert!(controller.select_chapter("shapes").is_err());
        assert_eq!(controller.session().selected_chapter().unwrap().id, "counting");
    }

    #[test]
    fn test_narration() {
        let mut controller = start("addition", ModuleKind::Learn);
        let effects = controller.narrate().unwrap();
        assert!(matches!(&effects[..], [Effect::Speak(text)] if text.starts_with("Hi {learner}!")));

        controller.back().unwrap();
        assert!(controller.narrate().is_err());

        controller.open_module(ModuleKind::Practice).unwrap();
        let effects = controller.narrate().unwrap();
        assert!(matches!(&effects[..], [Effect::Speak(text)] if text.starts_with("Hold up 2 fingers")));

        controller.quit().unwrap();
        controller.open_module(ModuleKind::Test).unwrap();
        assert!(controller.narrate().is_err());
    }

    #[test]
    fn test_home_from_anywhere() {
        let mut controller = start("shapes", ModuleKind::Test);
        controller.home();
        assert_eq!(controller.session(), &Session::default());
        controller.home();
        assert_eq!(controller.session().screen_kind(), ScreenKind::Home);
    }
}
