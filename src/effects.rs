//! Side effects requested by the progression controller.
//!
//! The controller never performs these itself. Each transition returns a list
//! of [`Effect`]s and the presentation layer hands them to a [`Narrator`] or a
//! [`Celebrator`]. Both are fire-and-forget: their failures are logged and
//! never reach the controller.

use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

/// Strength of a celebration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    /// A single correct answer.
    Minor,
    /// A test finished at or above the success threshold.
    Major,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Speak(String),
    Celebrate(Intensity),
}

pub trait Narrator {
    /// Start narrating `text`, superseding anything still being spoken.
    fn speak(&mut self, text: &str);
}

pub trait Celebrator {
    fn celebrate(&mut self, intensity: Intensity);
}

/// Narrator used when no speech program is configured.
#[derive(Debug, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn speak(&mut self, text: &str) {
        debug!(chars = text.len(), "narration skipped, no speech program");
    }
}

/// Narrates by running an external text-to-speech program, with the text as
/// its final argument.
#[derive(Debug)]
pub struct CommandNarrator {
    program: String,
    args: Vec<String>,
    current: Option<(String, Child)>,
}

impl CommandNarrator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            current: None,
        }
    }

    /// Build from a whitespace-separated command line such as `espeak -s 150`.
    /// Returns `None` for a blank command line.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    fn is_speaking(&mut self, text: &str) -> bool {
        match &mut self.current {
            Some((current, child)) if current.as_str() == text => matches!(child.try_wait(), Ok(None)),
            _ => false,
        }
    }

    fn stop(&mut self) {
        if let Some((_, mut child)) = self.current.take() {
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
            }
            let _ = child.wait();
        }
    }
}

impl Narrator for CommandNarrator {
    fn speak(&mut self, text: &str) {
        if self.is_speaking(text) {
            return;
        }
        self.stop();

        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                debug!(program = %self.program, pid = child.id(), "narration started");
                self.current = Some((text.to_string(), child));
            }
            Err(e) => warn!(program = %self.program, error = %e, "failed to start narration"),
        }
    }
}

impl Drop for CommandNarrator {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Hand each effect to the collaborator that executes it.
pub fn dispatch(effects: Vec<Effect>, narrator: &mut dyn Narrator, celebrator: &mut dyn Celebrator) {
    for effect in effects {
        match effect {
            Effect::Speak(text) => narrator.speak(&text),
            Effect::Celebrate(intensity) => celebrator.celebrate(intensity),
        }
    }
}
