use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::{Chapter, QuestionSet};

use super::Curriculum;

const BUILTIN_CURRICULUM: &str = include_str!("../../curriculum/math.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse curriculum: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("curriculum must contain at least one chapter")]
    Empty,
    #[error("chapter id {0:?} appears more than once")]
    DuplicateChapter(String),
    #[error("chapter {chapter:?} has no {set} questions")]
    EmptyQuestionSet { chapter: String, set: QuestionSet },
}

/// The math chapters bundled with the binary.
pub fn builtin_curriculum() -> Result<Curriculum, LoadError> {
    load_curriculum_from_str(BUILTIN_CURRICULUM)
}

pub fn load_curriculum_from_json<P: AsRef<Path>>(path: P) -> Result<Curriculum, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let curriculum = load_curriculum_from_str(&json_content)?;
    info!(path = %path.display(), chapters = curriculum.len(), "loaded curriculum");
    Ok(curriculum)
}

pub fn load_curriculum_from_str(json: &str) -> Result<Curriculum, LoadError> {
    let chapters: Vec<Chapter> = serde_json::from_str(json)?;
    Curriculum::new(chapters)
}
