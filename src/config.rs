use std::path::PathBuf;

use clap::Parser;

use crate::data::{Curriculum, LoadError, builtin_curriculum, load_curriculum_from_json};
use crate::effects::{CommandNarrator, Narrator, SilentNarrator};

pub const DEFAULT_LEARNER: &str = "Jitya";

#[derive(Parser, Debug, Clone)]
#[command(version, about = "A math tutor for young learners, in the terminal", long_about = None)]
pub struct TutorConfig {
    /// JSON curriculum file; the built-in math chapters are used when omitted
    #[arg(short, long, env = "KID_TUTOR_CURRICULUM")]
    pub curriculum: Option<PathBuf>,

    /// Name used to greet the learner
    #[arg(short, long, env = "KID_TUTOR_LEARNER", default_value = DEFAULT_LEARNER)]
    pub learner: String,

    /// Speech command, run with the narration text as its last argument
    /// (e.g. "espeak -s 150")
    #[arg(long, env = "KID_TUTOR_NARRATOR")]
    pub narrator: Option<String>,

    /// Write logs to this file
    #[arg(long, env = "KID_TUTOR_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl TutorConfig {
    pub fn load_curriculum(&self) -> Result<Curriculum, LoadError> {
        match &self.curriculum {
            Some(path) => load_curriculum_from_json(path),
            None => builtin_curriculum(),
        }
    }

    pub fn build_narrator(&self) -> Box<dyn Narrator> {
        match self.narrator.as_deref().and_then(CommandNarrator::from_command_line) {
            Some(narrator) => Box::new(narrator),
            None => Box::new(SilentNarrator),
        }
    }
}
