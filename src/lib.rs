//! # kid-tutor
//!
//! A terminal math tutor for young learners. Each chapter has a short lesson,
//! a practice worksheet and a scored test.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kid_tutor::{SilentNarrator, Tutor, TutorError, builtin_curriculum};
//!
//! fn main() -> Result<(), TutorError> {
//!     let curriculum = builtin_curriculum()?;
//!     let tutor = Tutor::new(curriculum, "Jitya", Box::new(SilentNarrator));
//!     tutor.run()?;
//!     Ok(())
//! }
//! ```
//!
//! The lesson flow itself lives in [`ProgressionController`], which has no
//! terminal dependency and can drive any front end.

mod app;
pub mod config;
pub mod controller;
mod data;
pub mod effects;
mod models;
pub mod telemetry;
pub mod terminal;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::info;

pub use app::App;
pub use config::TutorConfig;
pub use controller::{
    Acknowledgement, Answer, Pass, ProgressionController, ProgressionError, Screen, ScreenKind,
    Session, TestOutcome,
};
pub use data::{Curriculum, LoadError, builtin_curriculum, load_curriculum_from_json, load_curriculum_from_str};
pub use effects::{CommandNarrator, Effect, Intensity, Narrator, SilentNarrator};
pub use models::{
    Chapter, LEARNER_PLACEHOLDER, LearnContent, ModuleKind, Question, QuestionError, QuestionSet, personalize,
};

/// Frame interval of the confetti animation.
const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum TutorError {
    #[error("failed to load curriculum: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A tutor session that can be run in the terminal.
pub struct Tutor {
    app: App,
}

impl Tutor {
    /// Create a tutor over a loaded curriculum.
    ///
    /// # Arguments
    ///
    /// * `curriculum` - Chapters offered on the home screen.
    /// * `learner` - Name used in greetings and narration.
    /// * `narrator` - Speaks lesson text and help; use [`SilentNarrator`] for none.
    pub fn new(curriculum: Curriculum, learner: impl Into<String>, narrator: Box<dyn Narrator>) -> Self {
        Self {
            app: App::new(curriculum, learner, narrator),
        }
    }

    /// Build a tutor from parsed command line and environment settings.
    ///
    /// Loads the curriculum file when one is configured, otherwise the
    /// built-in chapters.
    ///
    /// # Arguments
    ///
    /// * `config` - Parsed [`TutorConfig`].
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use clap::Parser;
    /// use kid_tutor::{Tutor, TutorConfig};
    ///
    /// let config = TutorConfig::parse();
    /// let tutor = Tutor::from_config(&config).expect("Failed to load curriculum");
    /// ```
    pub fn from_config(config: &TutorConfig) -> Result<Self, TutorError> {
        let curriculum = config.load_curriculum()?;
        info!(
            chapters = curriculum.len(),
            learner = %config.learner,
            narrator = config.narrator.as_deref().unwrap_or("none"),
            "starting tutor"
        );
        Ok(Self::new(curriculum, config.learner.clone(), config.build_narrator()))
    }

    /// Run the tutor in the terminal.
    ///
    /// This takes over the terminal, shows the home screen, and returns when
    /// the learner quits. The terminal is restored on return and on panic.
    pub fn run(mut self) -> Result<(), TutorError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app, e.g. to inspect the session.
    pub fn app(&self) -> &App {
        &self.app
    }
}

/// Paces animation frames independently of keyboard input.
struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    /// How long to wait for input before the next frame is due.
    fn timeout(&self, now: Instant) -> Duration {
        TICK.saturating_sub(now.duration_since(self.last_tick))
    }

    /// Returns true at most once per `TICK`, whether or not keys arrived.
    fn tick_due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_tick) < TICK {
            return false;
        }
        self.last_tick = now;
        true
    }
}

fn run_event_loop(terminal: &mut terminal::TutorTerminal, app: &mut App) -> Result<(), TutorError> {
    let mut clock = FrameClock::new(Instant::now());

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(clock.timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_input(app, key.code) {
                    break;
                }
            }
        }

        if clock.tick_due(Instant::now()) {
            app.tick();
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Home => {
            app.home();
            return false;
        }
        _ => {}
    }

    match app.session().screen_kind() {
        ScreenKind::Home => handle_home_input(app, key),
        ScreenKind::ChapterMenu => handle_menu_input(app, key),
        ScreenKind::Learn => handle_learn_input(app, key),
        ScreenKind::Practice | ScreenKind::Test => handle_question_input(app, key),
        ScreenKind::Results => handle_results_input(app, key),
    }
    false
}

fn handle_home_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),
        _ => {}
    }
}

fn handle_menu_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back(),
        _ => {}
    }
}

fn handle_learn_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('v') => app.narrate(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back(),
        _ => {}
    }
}

fn handle_question_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),
        KeyCode::Char(c @ '1'..='4') => app.choose_option(c as usize - '1' as usize),
        KeyCode::Char(c @ 'a'..='d') => app.choose_option(c as usize - 'a' as usize),
        KeyCode::Char('?') | KeyCode::Char('h') => app.narrate(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        _ => {}
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => app.retry(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back(),
        _ => {}
    }
}
