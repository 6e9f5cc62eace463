use tracing::debug;

use crate::controller::{Effects, ProgressionController, ProgressionError, ScreenKind, Session};
use crate::data::Curriculum;
use crate::effects::{self, Effect, Narrator};
use crate::models::{ModuleKind, NUM_OPTIONS, personalize};
use crate::ui::Confetti;

/// Terminal front end state: cursor positions, the narration caption and the
/// confetti animation, layered over the progression controller.
pub struct App {
    controller: ProgressionController,
    learner: String,
    chapter_cursor: usize,
    module_cursor: usize,
    option_cursor: usize,
    caption: Option<String>,
    confetti: Confetti,
    narrator: Box<dyn Narrator>,
}

impl App {
    pub fn new(curriculum: Curriculum, learner: impl Into<String>, narrator: Box<dyn Narrator>) -> Self {
        Self {
            controller: ProgressionController::new(curriculum),
            learner: learner.into(),
            chapter_cursor: 0,
            module_cursor: 0,
            option_cursor: 0,
            caption: None,
            confetti: Confetti::new(),
            narrator,
        }
    }

    pub fn session(&self) -> &Session {
        self.controller.session()
    }

    pub fn curriculum(&self) -> &Curriculum {
        self.controller.curriculum()
    }

    pub fn learner(&self) -> &str {
        &self.learner
    }

    pub fn chapter_cursor(&self) -> usize {
        self.chapter_cursor
    }

    pub fn module_cursor(&self) -> usize {
        self.module_cursor
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    pub fn select_next(&mut self) {
        self.move_cursor(1);
    }

    pub fn select_previous(&mut self) {
        self.move_cursor(-1);
    }

    fn move_cursor(&mut self, step: isize) {
        let (cursor, len) = match self.session().screen_kind() {
            ScreenKind::Home => (&mut self.chapter_cursor, self.controller.curriculum().len()),
            ScreenKind::ChapterMenu => (&mut self.module_cursor, ModuleKind::ALL.len()),
            ScreenKind::Practice | ScreenKind::Test if self.controller.session().last_answer().is_none() => {
                (&mut self.option_cursor, NUM_OPTIONS)
            }
            _ => return,
        };
        *cursor = (*cursor as isize + step).rem_euclid(len as isize) as usize;
    }

    /// Enter/space: act on whatever the cursor points at.
    pub fn confirm(&mut self) {
        match self.session().screen_kind() {
            ScreenKind::Home => {
                let id = self.curriculum().chapters()[self.chapter_cursor].id.clone();
                self.apply(|c| c.select_chapter(&id));
            }
            ScreenKind::ChapterMenu => {
                let module = ModuleKind::ALL[self.module_cursor];
                self.apply(|c| c.open_module(module));
            }
            ScreenKind::Learn => self.narrate(),
            ScreenKind::Practice | ScreenKind::Test => {
                if self.session().last_answer().is_none() {
                    self.choose_option(self.option_cursor);
                } else {
                    self.apply(ProgressionController::advance);
                }
            }
            ScreenKind::Results => self.retry(),
        }
    }

    /// Answer the current question with the option at `index`.
    pub fn choose_option(&mut self, index: usize) {
        let Some(option) = self
            .session()
            .current_question()
            .and_then(|q| q.options().get(index))
            .cloned()
        else {
            return;
        };
        self.option_cursor = index;
        self.apply(|c| c.submit_answer(&option));
    }

    pub fn narrate(&mut self) {
        self.apply(|c| c.narrate());
    }

    pub fn back(&mut self) {
        self.apply(ProgressionController::back);
    }

    pub fn retry(&mut self) {
        self.apply(ProgressionController::retry_test);
    }

    pub fn home(&mut self) {
        self.apply(|c| {
            c.home();
            Ok(Effects::new())
        });
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self) {
        if self.confetti.is_active() {
            self.confetti.tick();
        }
    }

    fn position(&self) -> (ScreenKind, Option<usize>) {
        let session = self.session();
        (session.screen_kind(), session.question_index())
    }

    fn apply<F>(&mut self, operation: F)
    where
        F: FnOnce(&mut ProgressionController) -> Result<Effects, ProgressionError>,
    {
        let before = self.position();
        match operation(&mut self.controller) {
            Ok(effects) => {
                self.after_transition(before);
                self.run_effects(effects);
            }
            Err(e) => debug!(error = %e, "input ignored"),
        }
    }

    fn after_transition(&mut self, before: (ScreenKind, Option<usize>)) {
        let after = self.position();
        if after == before {
            return;
        }
        self.caption = None;
        self.option_cursor = 0;
        if before.0 == ScreenKind::Home {
            self.module_cursor = 0;
        }
    }

    fn run_effects(&mut self, effects: Effects) {
        let effects: Effects = effects
            .into_iter()
            .map(|effect| match effect {
                Effect::Speak(text) => Effect::Speak(personalize(&text, &self.learner)),
                other => other,
            })
            .collect();
        for effect in &effects {
            if let Effect::Speak(text) = effect {
                self.caption = Some(text.clone());
            }
        }
        effects::dispatch(effects, self.narrator.as_mut(), &mut self.confetti);
    }
}
