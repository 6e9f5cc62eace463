use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{Chapter, QuestionSet};

use super::LoadError;

/// A fixed, non-empty catalog of chapters with unique ids.
///
/// Chapters are shared through `Arc` so screens can carry the chapter they
/// operate on without borrowing from the catalog.
#[derive(Debug, Clone)]
pub struct Curriculum {
    chapters: Vec<Arc<Chapter>>,
}

impl Curriculum {
    pub fn new(chapters: Vec<Chapter>) -> Result<Self, LoadError> {
        if chapters.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut seen = HashSet::new();
        for chapter in &chapters {
            if !seen.insert(chapter.id.as_str()) {
                return Err(LoadError::DuplicateChapter(chapter.id.clone()));
            }
            for set in [QuestionSet::Practice, QuestionSet::Test] {
                if chapter.questions(set).is_empty() {
                    return Err(LoadError::EmptyQuestionSet {
                        chapter: chapter.id.clone(),
                        set,
                    });
                }
            }
        }

        Ok(Self {
            chapters: chapters.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn chapters(&self) -> &[Arc<Chapter>] {
        &self.chapters
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Chapter>> {
        self.chapters.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LearnContent, Question};

    fn chapter(id: &str) -> Chapter {
        let q = Question::new(
            "1 + 1 = ?",
            vec!["1".into(), "2".into(), "3".into(), "0".into()],
            "2",
            None,
        )
        .unwrap();
        Chapter {
            id: id.to_string(),
            title: id.to_uppercase(),
            icon: "*".into(),
            color: String::new(),
            learn: LearnContent {
                concept: String::new(),
                visual: String::new(),
                voice_text: String::new(),
            },
            practice: vec![q.clone()],
            test: vec![q],
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(Curriculum::new(Vec::new()), Err(LoadError::Empty)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Curriculum::new(vec![chapter("a"), chapter("b"), chapter("a")]).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateChapter(id) if id == "a"));
    }

    #[test]
    fn test_lookup_preserves_order() {
        let curriculum = Curriculum::new(vec![chapter("a"), chapter("b")]).unwrap();
        assert_eq!(curriculum.chapters()[1].id, "b");
        assert!(curriculum.get("b").is_some());
        assert!(curriculum.get("c").is_none());
        assert!(!curriculum.is_empty());
    }
}
